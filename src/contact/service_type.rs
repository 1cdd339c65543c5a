//! Known service categories offered in the contact form dropdown
//!
//! The endpoint does not enforce this list. Any non-empty `serviceType` is
//! stored; unknown values are only logged.

use std::fmt;

use crate::locale::{text, Locale, MessageKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    HomeMoving,
    OfficeMoving,
    FurnitureTransport,
    UrgentDelivery,
    Other,
}

impl ServiceType {
    /// Categories in dropdown order
    pub const ALL: [ServiceType; 5] = [
        ServiceType::HomeMoving,
        ServiceType::OfficeMoving,
        ServiceType::FurnitureTransport,
        ServiceType::UrgentDelivery,
        ServiceType::Other,
    ];

    /// Wire value sent by the form
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::HomeMoving => "home-moving",
            ServiceType::OfficeMoving => "office-moving",
            ServiceType::FurnitureTransport => "furniture-transport",
            ServiceType::UrgentDelivery => "urgent-delivery",
            ServiceType::Other => "other",
        }
    }

    /// Exact match on the wire value; no case folding
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Human-readable label
    pub fn label(&self, locale: Locale) -> &'static str {
        let key = match self {
            ServiceType::HomeMoving => MessageKey::ServiceHomeMoving,
            ServiceType::OfficeMoving => MessageKey::ServiceOfficeMoving,
            ServiceType::FurnitureTransport => MessageKey::ServiceFurnitureTransport,
            ServiceType::UrgentDelivery => MessageKey::ServiceUrgentDelivery,
            ServiceType::Other => MessageKey::ServiceOther,
        };
        text(key, locale)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
