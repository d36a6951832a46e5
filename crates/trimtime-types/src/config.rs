//! Shop configuration types for TrimTime.
//!
//! `ShopConfig` holds the reference data (service catalog, staff roster,
//! canonical time slots) and the booking policy switches. Every field has a
//! default, so an empty TOML document yields the stock barbershop.

use std::collections::HashSet;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::service::Service;

/// Format of a canonical slot label ("08:00 AM").
pub const SLOT_FORMAT: &str = "%I:%M %p";

/// Top-level configuration for a shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Symbol prefixed to formatted prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Reject dates that are not real calendar dates.
    #[serde(default = "default_strict_dates")]
    pub strict_dates: bool,

    /// Let a phone number that is already on file book another appointment.
    #[serde(default)]
    pub allow_returning_customers: bool,

    /// Service catalog in canonical (display) order.
    #[serde(default = "default_services")]
    pub services: Vec<Service>,

    /// Staff roster in canonical order.
    #[serde(default = "default_staff")]
    pub staff: Vec<String>,

    /// Canonical time slots in display order.
    #[serde(default = "default_slots")]
    pub slots: Vec<String>,
}

fn default_currency_symbol() -> String {
    "₱".to_string()
}

fn default_strict_dates() -> bool {
    true
}

fn default_services() -> Vec<Service> {
    [
        "Fade",
        "Fringe",
        "Mullet",
        "Blowout",
        "Barbers",
        "Buzz cut",
        "Undercut",
        "Two Block",
        "Taper Fade",
        "French crop",
    ]
    .iter()
    .enumerate()
    .map(|(idx, name)| Service::new((idx + 1).to_string(), *name, 10_000))
    .collect()
}

fn default_staff() -> Vec<String> {
    ["Ronel", "Robert", "Andrei", "Lawrence", "John Rex"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Half-hour labels from 08:00 AM to 08:00 PM inclusive.
fn default_slots() -> Vec<String> {
    (0..25)
        .map(|half_hours: u32| {
            let minutes = 8 * 60 + half_hours * 30;
            let (hour, minute) = (minutes / 60, minutes % 60);
            let meridiem = if hour < 12 { "AM" } else { "PM" };
            let display_hour = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{display_hour:02}:{minute:02} {meridiem}")
        })
        .collect()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            strict_dates: default_strict_dates(),
            allow_returning_customers: false,
            services: default_services(),
            staff: default_staff(),
            slots: default_slots(),
        }
    }
}

impl ShopConfig {
    /// Check the reference data is usable for booking.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.services.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.staff.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        if self.slots.is_empty() {
            return Err(ConfigError::EmptySlots);
        }

        let mut ids = HashSet::new();
        for service in &self.services {
            if !ids.insert(service.id.as_str()) {
                return Err(ConfigError::DuplicateServiceId(service.id.clone()));
            }
        }

        let mut labels = HashSet::new();
        for slot in &self.slots {
            if NaiveTime::parse_from_str(slot, SLOT_FORMAT).is_err() {
                return Err(ConfigError::InvalidSlotLabel(slot.clone()));
            }
            if !labels.insert(slot.as_str()) {
                return Err(ConfigError::DuplicateSlot(slot.clone()));
            }
        }

        Ok(())
    }

    /// Look up a catalog entry by its id.
    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }
}
