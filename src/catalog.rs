//! Static lookup data for the marketplace: districts, vehicle types,
//! material types and rental price units. Supplied as fixed literal lists,
//! never derived at runtime.

use serde::{Deserialize, Serialize};

/// The 25 districts sellers can register in.
pub const DISTRICTS: [&str; 25] = [
    "Colombo",
    "Gampaha",
    "Kalutara",
    "Kandy",
    "Matale",
    "Nuwara Eliya",
    "Galle",
    "Matara",
    "Hambantota",
    "Jaffna",
    "Kilinochchi",
    "Mannar",
    "Vavuniya",
    "Mullaitivu",
    "Batticaloa",
    "Ampara",
    "Trincomalee",
    "Kurunegala",
    "Puttalam",
    "Anuradhapura",
    "Polonnaruwa",
    "Badulla",
    "Moneragala",
    "Ratnapura",
    "Kegalle",
];

/// Whether `name` is one of the known districts.
pub fn is_district(name: &str) -> bool {
    DISTRICTS.contains(&name)
}

/// Construction vehicle categories available for rental listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleType {
    Tipper,
    LorriesTrucks,
    Excavators,
    Jcb,
    BoomTruck,
    CraneTruck,
    WaterBowser,
    ConcreteMixer,
    LowBedTrailers,
}

impl VehicleType {
    pub fn all() -> &'static [VehicleType] {
        &[
            VehicleType::Tipper,
            VehicleType::LorriesTrucks,
            VehicleType::Excavators,
            VehicleType::Jcb,
            VehicleType::BoomTruck,
            VehicleType::CraneTruck,
            VehicleType::WaterBowser,
            VehicleType::ConcreteMixer,
            VehicleType::LowBedTrailers,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Tipper => "Tipper",
            VehicleType::LorriesTrucks => "Lorries/Trucks",
            VehicleType::Excavators => "Excavators",
            VehicleType::Jcb => "JCB",
            VehicleType::BoomTruck => "Boom Truck",
            VehicleType::CraneTruck => "Crane Truck",
            VehicleType::WaterBowser => "Water Bowser",
            VehicleType::ConcreteMixer => "Concrete Mixer",
            VehicleType::LowBedTrailers => "Low-bed Trailers",
        }
    }

    pub fn from_label(label: &str) -> Option<VehicleType> {
        Self::all().iter().copied().find(|t| t.label() == label)
    }
}

/// Construction material categories a supplier can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialType {
    Sand,
    Gravel,
    Soil,
    Rocks,
    Bricks,
    Concrete,
    Steel,
    Timber,
    Cement,
}

impl MaterialType {
    pub fn all() -> &'static [MaterialType] {
        &[
            MaterialType::Sand,
            MaterialType::Gravel,
            MaterialType::Soil,
            MaterialType::Rocks,
            MaterialType::Bricks,
            MaterialType::Concrete,
            MaterialType::Steel,
            MaterialType::Timber,
            MaterialType::Cement,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaterialType::Sand => "Sand",
            MaterialType::Gravel => "Gravel",
            MaterialType::Soil => "Soil",
            MaterialType::Rocks => "Rocks",
            MaterialType::Bricks => "Bricks",
            MaterialType::Concrete => "Concrete",
            MaterialType::Steel => "Steel",
            MaterialType::Timber => "Timber",
            MaterialType::Cement => "Cement",
        }
    }

    pub fn from_label(label: &str) -> Option<MaterialType> {
        Self::all().iter().copied().find(|t| t.label() == label)
    }
}

/// Billing unit for a rental price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    #[default]
    Hour,
    Day,
}

impl PriceUnit {
    pub fn all() -> &'static [PriceUnit] {
        &[PriceUnit::Hour, PriceUnit::Day]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceUnit::Hour => "per hour",
            PriceUnit::Day => "per day",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceUnit::Hour => "hour",
            PriceUnit::Day => "day",
        }
    }

    pub fn parse(value: &str) -> Option<PriceUnit> {
        match value.trim() {
            "hour" => Some(PriceUnit::Hour),
            "day" => Some(PriceUnit::Day),
            _ => None,
        }
    }
}
