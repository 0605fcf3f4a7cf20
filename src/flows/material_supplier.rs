//! Material supplier registration: a six-step wizard collecting personal,
//! location, material, pricing/delivery, media and consent details.

use serde::Serialize;

use crate::catalog::{is_district, MaterialType};
use crate::validate::{check_amount, check_email, check_password_pair, parse_amount, require_text};
use crate::wizard::{Attachment, ErrorMap, FieldValue, FlowForm, StepDef};

use super::{FlowKind, Registration};

#[derive(Debug, Serialize)]
pub struct MaterialSupplierForm {
    // Personal info (NIC is optional for suppliers)
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

    // Material info
    pub material_types: Vec<String>,
    pub business_brand_name: String,
    pub description: String,

    // Pricing & delivery
    pub price_range_min: String,
    pub price_range_max: String,
    pub delivery_included: bool,
    pub availability_schedule: String,

    // Media
    pub material_images: Vec<Attachment>,
    pub nic_business_license: Option<Attachment>,

    // Confirmation
    pub agree_to_terms: bool,
}

impl Default for MaterialSupplierForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            nic_number: String::new(),
            mobile_number: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            district: String::new(),
            city_town: String::new(),
            address: String::new(),
            material_types: Vec::new(),
            business_brand_name: String::new(),
            description: String::new(),
            price_range_min: String::new(),
            price_range_max: String::new(),
            // Suppliers offer delivery unless they opt out
            delivery_included: true,
            availability_schedule: String::new(),
            material_images: Vec::new(),
            nic_business_license: None,
            agree_to_terms: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialSupplierField {
    FullName,
    NicNumber,
    MobileNumber,
    Email,
    Password,
    ConfirmPassword,
    District,
    CityTown,
    Address,
    MaterialTypes,
    BusinessBrandName,
    Description,
    PriceRangeMin,
    PriceRangeMax,
    DeliveryIncluded,
    AvailabilitySchedule,
    MaterialImages,
    NicBusinessLicense,
    AgreeToTerms,
}

fn validate_personal(form: &MaterialSupplierForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    require_text(&mut errors, "full_name", &form.full_name, "Full name is required");
    // nic_number is optional for material suppliers
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

fn validate_location(form: &MaterialSupplierForm) -> ErrorMap {
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

fn validate_materials(form: &MaterialSupplierForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    if form.material_types.is_empty() {
        errors.insert("material_types", "At least one material type is required");
    } else if form
        .material_types
        .iter()
        .any(|t| MaterialType::from_label(t).is_none())
    {
        errors.insert("material_types", "Please select valid material types");
    }
    // business_brand_name is optional
    require_text(&mut errors, "description", &form.description, "Description is required");
    errors
}

fn validate_pricing(form: &MaterialSupplierForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    check_amount(
        &mut errors,
        "price_range_min",
        &form.price_range_min,
        "Minimum price is required",
        "Please enter a valid minimum price",
    );
    check_amount(
        &mut errors,
        "price_range_max",
        &form.price_range_max,
        "Maximum price is required",
        "Please enter a valid maximum price",
    );

    // Cross-field ordering only applies once both endpoints are valid on
    // their own; otherwise the per-field messages above already cover it.
    if let (Some(min), Some(max)) = (
        parse_amount(&form.price_range_min),
        parse_amount(&form.price_range_max),
    ) {
        if min >= max {
            errors.insert(
                "price_range_max",
                "Maximum price must be greater than minimum price",
            );
        }
    }
    errors
}

fn validate_media(form: &MaterialSupplierForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    if form.material_images.is_empty() {
        errors.insert("material_images", "At least one material image is required");
    }
    if form.nic_business_license.is_none() {
        errors.insert("nic_business_license", "NIC/Business License is required");
    }
    errors
}

fn validate_confirmation(form: &MaterialSupplierForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    if !form.agree_to_terms {
        errors.insert("agree_to_terms", "You must agree to terms and conditions");
    }
    errors
}

impl FlowForm for MaterialSupplierForm {
    type Field = MaterialSupplierField;

    fn flow() -> FlowKind {
        FlowKind::MaterialSupplier
    }

    fn steps() -> &'static [StepDef<Self>] {
        const STEPS: &[StepDef<MaterialSupplierForm>] = &[
            StepDef {
                title: "Personal Information",
                validate: validate_personal,
            },
            StepDef {
                title: "Location Details",
                validate: validate_location,
            },
            StepDef {
                title: "Material Information",
                validate: validate_materials,
            },
            StepDef {
                title: "Pricing & Delivery",
                validate: validate_pricing,
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

    fn field_name(field: MaterialSupplierField) -> &'static str {
        use MaterialSupplierField as F;
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
            F::MaterialTypes => "material_types",
            F::BusinessBrandName => "business_brand_name",
            F::Description => "description",
            F::PriceRangeMin => "price_range_min",
            F::PriceRangeMax => "price_range_max",
            F::DeliveryIncluded => "delivery_included",
            F::AvailabilitySchedule => "availability_schedule",
            F::MaterialImages => "material_images",
            F::NicBusinessLicense => "nic_business_license",
            F::AgreeToTerms => "agree_to_terms",
        }
    }

    fn field_from_name(name: &str) -> Option<MaterialSupplierField> {
        use MaterialSupplierField as F;
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
            "material_types" => F::MaterialTypes,
            "business_brand_name" => F::BusinessBrandName,
            "description" => F::Description,
            "price_range_min" => F::PriceRangeMin,
            "price_range_max" => F::PriceRangeMax,
            "delivery_included" => F::DeliveryIncluded,
            "availability_schedule" => F::AvailabilitySchedule,
            "material_images" => F::MaterialImages,
            "nic_business_license" => F::NicBusinessLicense,
            "agree_to_terms" => F::AgreeToTerms,
            _ => return None,
        };
        Some(field)
    }

    fn apply(&mut self, field: MaterialSupplierField, value: FieldValue) {
        use MaterialSupplierField as F;
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
            (F::MaterialTypes, FieldValue::Toggle(v)) => {
                if let Some(pos) = self.material_types.iter().position(|t| *t == v) {
                    self.material_types.remove(pos);
                } else {
                    self.material_types.push(v);
                }
            }
            (F::MaterialTypes, FieldValue::Clear) => self.material_types.clear(),
            (F::BusinessBrandName, FieldValue::Text(v)) => self.business_brand_name = v,
            (F::Description, FieldValue::Text(v)) => self.description = v,
            (F::PriceRangeMin, FieldValue::Text(v)) => self.price_range_min = v,
            (F::PriceRangeMax, FieldValue::Text(v)) => self.price_range_max = v,
            (F::DeliveryIncluded, FieldValue::Flag(v)) => self.delivery_included = v,
            (F::AvailabilitySchedule, FieldValue::Text(v)) => self.availability_schedule = v,
            (F::MaterialImages, FieldValue::Attach(a)) => self.material_images.push(a),
            (F::MaterialImages, FieldValue::Detach(index)) => {
                if index < self.material_images.len() {
                    self.material_images.remove(index);
                }
            }
            (F::MaterialImages, FieldValue::Clear) => self.material_images.clear(),
            (F::NicBusinessLicense, FieldValue::Attach(a)) => self.nic_business_license = Some(a),
            (F::NicBusinessLicense, FieldValue::Clear) => self.nic_business_license = None,
            (F::AgreeToTerms, FieldValue::Flag(v)) => self.agree_to_terms = v,
            (field, value) => {
                tracing::warn!(?field, ?value, "ignoring value of mismatched kind");
            }
        }
    }

    fn into_registration(self) -> Registration {
        Registration::MaterialSupplier(self)
    }
}
