//! Signed-in user and partner profiles derived from submitted registrations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::flows::{FlowKind, Registration};

/// The signed-in account backing the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// The flow the account registered through, when known.
    pub role: Option<FlowKind>,
    pub authenticated: bool,
}

impl User {
    /// Build the session account from a freshly submitted registration.
    pub fn from_registration(registration: &Registration) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: registration.name().to_owned(),
            email: registration.email().to_owned(),
            phone: registration.phone().to_owned(),
            role: Some(registration.flow()),
            authenticated: true,
        }
    }
}

/// Review status of a business partner profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl PartnerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PartnerStatus::Pending => "Pending",
            PartnerStatus::Approved => "Approved",
            PartnerStatus::Rejected => "Rejected",
        }
    }
}

/// Business-side profile created for vehicle owners and material suppliers.
/// Consumers never get one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partner {
    pub id: Uuid,
    pub partner_type: FlowKind,
    pub business_name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub district: String,
    /// Filled in later from the partner dashboard, empty at registration.
    pub business_license: String,
    pub br_number: String,
    pub years_in_business: u32,
    pub description: String,
    pub status: PartnerStatus,
    pub registration_date: DateTime<Utc>,
    pub rating: f64,
    pub total_jobs: u32,
}

impl Partner {
    /// Build a pending partner profile from a business registration.
    /// Returns `None` for consumer signups.
    pub fn from_registration(registration: &Registration) -> Option<Self> {
        if !registration.flow().is_business() {
            return None;
        }

        let description = match registration {
            Registration::VehicleOwner(v) => v.description.clone(),
            Registration::MaterialSupplier(m) => m.description.clone(),
            Registration::Consumer(_) => return None,
        };

        // Vehicle owners trade under their own name; suppliers may leave the
        // brand blank, in which case the owner's name stands in.
        let business_name = registration
            .business_name()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| registration.name())
            .to_owned();

        Some(Self {
            id: Uuid::new_v4(),
            partner_type: registration.flow(),
            business_name,
            owner_name: registration.name().to_owned(),
            email: registration.email().to_owned(),
            phone: registration.phone().to_owned(),
            address: registration.address().unwrap_or_default().to_owned(),
            district: registration.district().unwrap_or_default().to_owned(),
            business_license: String::new(),
            br_number: String::new(),
            years_in_business: 0,
            description,
            status: PartnerStatus::Pending,
            registration_date: Utc::now(),
            rating: 0.0,
            total_jobs: 0,
        })
    }
}
