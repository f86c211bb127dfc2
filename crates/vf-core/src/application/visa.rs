//! Visa offerings.

use serde::{Deserialize, Serialize};

/// Closed set of visa categories the concierge handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisaTypeId {
    Tourist,
    Business,
    Student,
    Transit,
}

impl VisaTypeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisaTypeId::Tourist => "tourist",
            VisaTypeId::Business => "business",
            VisaTypeId::Student => "student",
            VisaTypeId::Transit => "transit",
        }
    }

    /// All categories, in catalogue order.
    pub fn all() -> [VisaTypeId; 4] {
        [
            VisaTypeId::Tourist,
            VisaTypeId::Business,
            VisaTypeId::Student,
            VisaTypeId::Transit,
        ]
    }

    /// The catalogue entry for this category.
    pub fn offering(self) -> VisaType {
        match self {
            VisaTypeId::Tourist => VisaType {
                id: self,
                name: "Tourist Visa (B-2)".to_string(),
                duration: "Up to 180 days".to_string(),
                validity: "10 years".to_string(),
                price: 185.0,
            },
            VisaTypeId::Business => VisaType {
                id: self,
                name: "Business Visa (B-1)".to_string(),
                duration: "Up to 180 days".to_string(),
                validity: "10 years".to_string(),
                price: 185.0,
            },
            VisaTypeId::Student => VisaType {
                id: self,
                name: "Student Visa (F-1)".to_string(),
                duration: "Duration of studies".to_string(),
                validity: "Variable".to_string(),
                price: 185.0,
            },
            VisaTypeId::Transit => VisaType {
                id: self,
                name: "Transit Visa (C)".to_string(),
                duration: "Up to 29 days".to_string(),
                validity: "3 months".to_string(),
                price: 185.0,
            },
        }
    }
}

/// A visa offering as presented to the applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisaType {
    pub id: VisaTypeId,
    pub name: String,
    pub duration: String,
    pub validity: String,
    pub price: f64,
}

/// The full catalogue, in display order.
pub fn catalogue() -> Vec<VisaType> {
    VisaTypeId::all().into_iter().map(VisaTypeId::offering).collect()
}
