use crate::customer::Customer;

/// A booked appointment.
///
/// The `(date, time)` pair is unique across all appointments in a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    /// Foreign key into the customer collection.
    pub customer_phone: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    /// One of the canonical slot labels, e.g. "08:00 AM".
    pub time: String,
    pub service_name: String,
    pub price_cents: u64,
    pub staff_name: String,
}

/// An appointment joined with the customer it belongs to, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRecord {
    pub customer: Customer,
    pub appointment: Appointment,
}

/// Everything needed to book an appointment in one call.
///
/// `slot_choice` and `staff_choice` are 1-based, matching the numbered lists
/// shown to the user. `slot_choice` indexes the *currently available* slots
/// for `date`, not the canonical list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub slot_choice: usize,
    pub service_id: String,
    pub staff_choice: usize,
}

/// Result of a cancellation attempt that found a matching appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// Confirmed and removed from the store.
    Cancelled(AppointmentRecord),
    /// Declined at confirmation; the store is unchanged.
    Kept(AppointmentRecord),
}

impl CancelOutcome {
    pub fn record(&self) -> &AppointmentRecord {
        match self {
            CancelOutcome::Cancelled(record) | CancelOutcome::Kept(record) => record,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, CancelOutcome::Cancelled(_))
    }
}
