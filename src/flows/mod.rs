//! Registration flows and the tagged record handed to the submission
//! collaborator.

pub mod consumer;
pub mod material_supplier;
pub mod vehicle_owner;

pub use consumer::ConsumerSignup;
pub use material_supplier::{MaterialSupplierField, MaterialSupplierForm};
pub use vehicle_owner::{VehicleOwnerField, VehicleOwnerForm};

use serde::{Deserialize, Serialize};

/// Which registration flow produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    Consumer,
    VehicleOwner,
    MaterialSupplier,
}

impl FlowKind {
    /// Stable role tag carried on submitted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowKind::Consumer => "consumer",
            FlowKind::VehicleOwner => "vehicle_owner",
            FlowKind::MaterialSupplier => "material_supplier",
        }
    }

    /// Display name shown on the confirmation page.
    pub fn label(&self) -> &'static str {
        match self {
            FlowKind::Consumer => "Service Consumer",
            FlowKind::VehicleOwner => "Vehicle Owner",
            FlowKind::MaterialSupplier => "Material Supplier",
        }
    }

    /// Business roles get a partner profile on top of the user session.
    pub fn is_business(&self) -> bool {
        matches!(self, FlowKind::VehicleOwner | FlowKind::MaterialSupplier)
    }
}

/// A completed, validated registration record, tagged with the flow that
/// produced it. Handed to the submission collaborator by value and never
/// aliased afterward.
#[derive(Debug, Serialize)]
#[serde(tag = "role")]
pub enum Registration {
    #[serde(rename = "consumer")]
    Consumer(ConsumerSignup),
    #[serde(rename = "vehicle_owner")]
    VehicleOwner(VehicleOwnerForm),
    #[serde(rename = "material_supplier")]
    MaterialSupplier(MaterialSupplierForm),
}

impl Registration {
    pub fn flow(&self) -> FlowKind {
        match self {
            Registration::Consumer(_) => FlowKind::Consumer,
            Registration::VehicleOwner(_) => FlowKind::VehicleOwner,
            Registration::MaterialSupplier(_) => FlowKind::MaterialSupplier,
        }
    }

    pub fn role(&self) -> &'static str {
        self.flow().as_str()
    }

    pub fn name(&self) -> &str {
        match self {
            Registration::Consumer(c) => &c.name,
            Registration::VehicleOwner(v) => &v.full_name,
            Registration::MaterialSupplier(m) => &m.full_name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Registration::Consumer(c) => &c.email,
            Registration::VehicleOwner(v) => &v.email,
            Registration::MaterialSupplier(m) => &m.email,
        }
    }

    pub fn phone(&self) -> &str {
        match self {
            Registration::Consumer(c) => &c.phone,
            Registration::VehicleOwner(v) => &v.mobile_number,
            Registration::MaterialSupplier(m) => &m.mobile_number,
        }
    }

    /// Trading name, where the flow collects one.
    pub fn business_name(&self) -> Option<&str> {
        match self {
            Registration::MaterialSupplier(m) => Some(m.business_brand_name.as_str()),
            _ => None,
        }
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            Registration::Consumer(_) => None,
            Registration::VehicleOwner(v) => Some(v.address.as_str()),
            Registration::MaterialSupplier(m) => Some(m.address.as_str()),
        }
    }

    pub fn district(&self) -> Option<&str> {
        match self {
            Registration::Consumer(_) => None,
            Registration::VehicleOwner(v) => Some(v.district.as_str()),
            Registration::MaterialSupplier(m) => Some(m.district.as_str()),
        }
    }
}
