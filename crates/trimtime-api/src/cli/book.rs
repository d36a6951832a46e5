//! Interactive appointment booking.
//!
//! Each answer is checked as soon as it is given, the way the counter staff
//! expect: a bad entry ends the flow with a message and returns to the menu.
//! The store re-checks everything when the booking is finally made, and
//! nothing is recorded unless the whole booking succeeds.

use anyhow::Result;

use trimtime_core::store::BookingStore;
use trimtime_core::validate::{normalize_name, parse_choice};
use trimtime_types::appointment::{AppointmentRecord, BookingRequest};
use trimtime_types::error::BookingError;

use super::display::{
    numbered, print_lines, print_record, print_rejection, print_success, record_fields,
    service_lines,
};
use super::prompt::Prompter;

/// A 1-based choice within `1..=len`, or `None`.
fn choice_within(raw: &str, len: usize) -> Option<usize> {
    parse_choice(raw).filter(|n| *n <= len)
}

pub fn book_appointment(store: &mut BookingStore, prompter: &mut dyn Prompter) -> Result<()> {
    let name = prompter.text(
        "Enter customer name (First and Last, or include second names if applicable)",
        false,
    )?;
    if normalize_name(&name).is_none() {
        print_rejection(&BookingError::InvalidName);
        return Ok(());
    }

    let phone = prompter.phone()?;
    if let Err(err) = store.check_customer(&name, &phone) {
        print_rejection(&err);
        return Ok(());
    }

    let raw_date = prompter.text("Enter appointment date (YYYYMMDD)", false)?;
    let date = match store.normalize_date(&raw_date) {
        Ok(date) => date,
        Err(err) => {
            print_rejection(&err);
            return Ok(());
        }
    };

    let available = store.available_slots(&date);
    if available.is_empty() {
        print_rejection(&BookingError::NoAvailableSlots(date));
        return Ok(());
    }
    print_lines("Available Time Slots", &numbered(&available));
    let slot_entry = prompter.text("Choose a time slot by entering the number", false)?;
    let Some(slot_choice) = choice_within(&slot_entry, available.len()) else {
        print_rejection(&BookingError::InvalidSlot);
        return Ok(());
    };

    let currency = store.config().currency_symbol.clone();
    print_lines(
        "Available Haircut Options",
        &service_lines(store.services(), &currency),
    );
    let service_id = prompter.text("Choose a haircut option by entering the number", false)?;
    if store.config().service(&service_id).is_none() {
        print_rejection(&BookingError::InvalidService(service_id));
        return Ok(());
    }

    print_lines("Available Barbers", &numbered(store.staff()));
    let staff_entry = prompter.text("Choose a barber by entering the number", false)?;
    let Some(staff_choice) = choice_within(&staff_entry, store.staff().len()) else {
        print_rejection(&BookingError::InvalidStaff);
        return Ok(());
    };

    let request = BookingRequest {
        name,
        phone,
        date: raw_date,
        slot_choice,
        service_id,
        staff_choice,
    };

    let appointment = match store.book_appointment(&request) {
        Ok(appointment) => appointment,
        Err(err) => {
            print_rejection(&err);
            return Ok(());
        }
    };

    print_success(&format!(
        "Appointment booked successfully with {} for {}!",
        appointment.staff_name, appointment.service_name
    ));

    if let Some(customer) = store.find_customer(&appointment.customer_phone) {
        let record = AppointmentRecord {
            customer: customer.clone(),
            appointment,
        };
        print_record("Appointment Record", &record_fields(&record, Some(currency.as_str())));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_within_bounds() {
        assert_eq!(choice_within("1", 3), Some(1));
        assert_eq!(choice_within("3", 3), Some(3));
        assert_eq!(choice_within("4", 3), None);
        assert_eq!(choice_within("0", 3), None);
        assert_eq!(choice_within("two", 3), None);
    }
}
