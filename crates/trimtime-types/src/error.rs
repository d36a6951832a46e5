use thiserror::Error;

/// Errors from booking operations. Every variant is a validation rejection
/// shown to the user at the point of input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("invalid name format: enter at least a first and last name")]
    InvalidName,

    #[error("invalid phone number: enter exactly 11 digits starting with '09'")]
    InvalidPhone,

    #[error("a customer with phone number '{0}' already exists")]
    DuplicateCustomer(String),

    #[error("invalid date '{0}': expected a real calendar date as YYYYMMDD")]
    InvalidDate(String),

    #[error("no available time slots for {0}")]
    NoAvailableSlots(String),

    #[error("invalid time slot choice")]
    InvalidSlot,

    #[error("invalid haircut option '{0}'")]
    InvalidService(String),

    #[error("invalid barber choice")]
    InvalidStaff,

    #[error("no matching customer found for '{0}'")]
    NotFound(String),
}

/// Errors from validating a shop configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("service catalog is empty")]
    EmptyCatalog,

    #[error("staff roster is empty")]
    EmptyRoster,

    #[error("time slot list is empty")]
    EmptySlots,

    #[error("service id '{0}' appears more than once")]
    DuplicateServiceId(String),

    #[error("time slot '{0}' appears more than once")]
    DuplicateSlot(String),

    #[error("time slot '{0}' is not a valid 'HH:MM AM/PM' label")]
    InvalidSlotLabel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_error_display() {
        let err = BookingError::DuplicateCustomer("09171234567".to_string());
        assert_eq!(
            err.to_string(),
            "a customer with phone number '09171234567' already exists"
        );
    }

    #[test]
    fn test_no_available_slots_display() {
        let err = BookingError::NoAvailableSlots("2025-01-15".to_string());
        assert_eq!(err.to_string(), "no available time slots for 2025-01-15");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidSlotLabel("25:00".to_string());
        assert!(err.to_string().contains("25:00"));
    }
}
