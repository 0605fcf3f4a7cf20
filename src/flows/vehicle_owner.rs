//! Vehicle owner registration: a six-step wizard collecting personal,
//! location, vehicle, rental, media and consent details.

use serde::Serialize;

use crate::catalog::{is_district, PriceUnit, VehicleType};
use crate::validate::{check_amount, check_email, check_password_pair, require_text};
use crate::wizard::{Attachment, ErrorMap, FieldValue, FlowForm, StepDef};

use super::{FlowKind, Registration};

/// Accumulated record for the vehicle owner flow. Raw strings are kept as
/// typed; validity is checked only when a step is advanced.
#[derive(Debug, Default, Serialize)]
pub struct VehicleOwnerForm {
    // Personal info
    pub full_name: String,
    pub nic_number: String,
    pub mobile_number: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,

    // Location
    pub district: String,
    pub city_town: String,
    pub address: String,

    // Vehicle info
    pub vehicle_type: String,
    pub model_brand: String,
    pub registration_number: String,
    pub description: String,

    // Rental details
    pub price_amount: String,
    pub price_unit: PriceUnit,
    pub availability_schedule: String,

    // Media
    pub vehicle_image: Option<Attachment>,
    pub nic_license_image: Option<Attachment>,

    // Confirmation
    pub agree_to_terms: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleOwnerField {
    FullName,
    NicNumber,
    MobileNumber,
    Email,
    Password,
    ConfirmPassword,
    District,
    CityTown,
    Address,
    VehicleType,
    ModelBrand,
    RegistrationNumber,
    Description,
    PriceAmount,
    PriceUnit,
    AvailabilitySchedule,
    VehicleImage,
    NicLicenseImage,
    AgreeToTerms,
}

fn validate_personal(form: &VehicleOwnerForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    require_text(&mut errors, "full_name", &form.full_name, "Full name is required");
    require_text(&mut errors, "nic_number", &form.nic_number, "NIC number is required");
    require_text(
        &mut errors,
        "mobile_number",
        &form.mobile_number,
        "Mobile number is required",
    );
    check_email(&mut errors, "email", &form.email);
    check_password_pair(&mut errors, &form.password, &form.confirm_password);
    errors
}

fn validate_location(form: &VehicleOwnerForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    let district = form.district.trim();
    if district.is_empty() {
        errors.insert("district", "District is required");
    } else if !is_district(district) {
        errors.insert("district", "Please select a valid district");
    }
    require_text(&mut errors, "city_town", &form.city_town, "City/Town is required");
    require_text(&mut errors, "address", &form.address, "Address is required");
    errors
}

fn validate_vehicle(form: &VehicleOwnerForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    let vehicle_type = form.vehicle_type.trim();
    if vehicle_type.is_empty() {
        errors.insert("vehicle_type", "Vehicle type is required");
    } else if VehicleType::from_label(vehicle_type).is_none() {
        errors.insert("vehicle_type", "Please select a valid vehicle type");
    }
    require_text(&mut errors, "model_brand", &form.model_brand, "Model/Brand is required");
    // registration_number is optional
    require_text(&mut errors, "description", &form.description, "Description is required");
    errors
}

fn validate_rental(form: &VehicleOwnerForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    check_amount(
        &mut errors,
        "price_amount",
        &form.price_amount,
        "Price is required",
        "Please enter a valid price",
    );
    errors
}

fn validate_media(form: &VehicleOwnerForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    if form.vehicle_image.is_none() {
        errors.insert("vehicle_image", "Vehicle image is required");
    }
    if form.nic_license_image.is_none() {
        errors.insert("nic_license_image", "NIC/License image is required");
    }
    errors
}

fn validate_confirmation(form: &VehicleOwnerForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    if !form.agree_to_terms {
        errors.insert("agree_to_terms", "You must agree to terms and conditions");
    }
    errors
}

impl FlowForm for VehicleOwnerForm {
    type Field = VehicleOwnerField;

    fn flow() -> FlowKind {
        FlowKind::VehicleOwner
    }

    fn steps() -> &'static [StepDef<Self>] {
        const STEPS: &[StepDef<VehicleOwnerForm>] = &[
            StepDef {
                title: "Personal Information",
                validate: validate_personal,
            },
            StepDef {
                title: "Location Details",
                validate: validate_location,
            },
            StepDef {
                title: "Vehicle Information",
                validate: validate_vehicle,
            },
            StepDef {
                title: "Rental Details",
                validate: validate_rental,
            },
            StepDef {
                title: "Upload Media",
                validate: validate_media,
            },
            StepDef {
                title: "Confirmation",
                validate: validate_confirmation,
            },
        ];
        STEPS
    }

    fn field_name(field: VehicleOwnerField) -> &'static str {
        use VehicleOwnerField as F;
        match field {
            F::FullName => "full_name",
            F::NicNumber => "nic_number",
            F::MobileNumber => "mobile_number",
            F::Email => "email",
            F::Password => "password",
            F::ConfirmPassword => "confirm_password",
            F::District => "district",
            F::CityTown => "city_town",
            F::Address => "address",
            F::VehicleType => "vehicle_type",
            F::ModelBrand => "model_brand",
            F::RegistrationNumber => "registration_number",
            F::Description => "description",
            F::PriceAmount => "price_amount",
            F::PriceUnit => "price_unit",
            F::AvailabilitySchedule => "availability_schedule",
            F::VehicleImage => "vehicle_image",
            F::NicLicenseImage => "nic_license_image",
            F::AgreeToTerms => "agree_to_terms",
        }
    }

    fn field_from_name(name: &str) -> Option<VehicleOwnerField> {
        use VehicleOwnerField as F;
        let field = match name {
            "full_name" => F::FullName,
            "nic_number" => F::NicNumber,
            "mobile_number" => F::MobileNumber,
            "email" => F::Email,
            "password" => F::Password,
            "confirm_password" => F::ConfirmPassword,
            "district" => F::District,
            "city_town" => F::CityTown,
            "address" => F::Address,
            "vehicle_type" => F::VehicleType,
            "model_brand" => F::ModelBrand,
            "registration_number" => F::RegistrationNumber,
            "description" => F::Description,
            "price_amount" => F::PriceAmount,
            "price_unit" => F::PriceUnit,
            "availability_schedule" => F::AvailabilitySchedule,
            "vehicle_image" => F::VehicleImage,
            "nic_license_image" => F::NicLicenseImage,
            "agree_to_terms" => F::AgreeToTerms,
            _ => return None,
        };
        Some(field)
    }

    fn apply(&mut self, field: VehicleOwnerField, value: FieldValue) {
        use VehicleOwnerField as F;
        match (field, value) {
            (F::FullName, FieldValue::Text(v)) => self.full_name = v,
            (F::NicNumber, FieldValue::Text(v)) => self.nic_number = v,
            (F::MobileNumber, FieldValue::Text(v)) => self.mobile_number = v,
            (F::Email, FieldValue::Text(v)) => self.email = v,
            (F::Password, FieldValue::Text(v)) => self.password = v,
            (F::ConfirmPassword, FieldValue::Text(v)) => self.confirm_password = v,
            (F::District, FieldValue::Text(v)) => self.district = v,
            (F::CityTown, FieldValue::Text(v)) => self.city_town = v,
            (F::Address, FieldValue::Text(v)) => self.address = v,
            (F::VehicleType, FieldValue::Text(v)) => self.vehicle_type = v,
            (F::ModelBrand, FieldValue::Text(v)) => self.model_brand = v,
            (F::RegistrationNumber, FieldValue::Text(v)) => self.registration_number = v,
            (F::Description, FieldValue::Text(v)) => self.description = v,
            (F::PriceAmount, FieldValue::Text(v)) => self.price_amount = v,
            (F::PriceUnit, FieldValue::Text(v)) => match PriceUnit::parse(&v) {
                Some(unit) => self.price_unit = unit,
                None => tracing::warn!(value = %v, "unknown price unit"),
            },
            (F::AvailabilitySchedule, FieldValue::Text(v)) => self.availability_schedule = v,
            (F::VehicleImage, FieldValue::Attach(a)) => self.vehicle_image = Some(a),
            (F::VehicleImage, FieldValue::Clear) => self.vehicle_image = None,
            (F::NicLicenseImage, FieldValue::Attach(a)) => self.nic_license_image = Some(a),
            (F::NicLicenseImage, FieldValue::Clear) => self.nic_license_image = None,
            (F::AgreeToTerms, FieldValue::Flag(v)) => self.agree_to_terms = v,
            (field, value) => {
                tracing::warn!(?field, ?value, "ignoring value of mismatched kind");
            }
        }
    }

    fn into_registration(self) -> Registration {
        Registration::VehicleOwner(self)
    }
}
