//! Appointment cancellation with confirmation.

use anyhow::Result;

use trimtime_core::store::BookingStore;
use trimtime_types::appointment::CancelOutcome;
use trimtime_types::error::BookingError;

use super::display::{print_record, print_rejection, print_success, record_fields};
use super::prompt::Prompter;

/// Find the first appointment matching a name and cancel it if the user
/// confirms.
pub fn cancel_appointment(store: &mut BookingStore, prompter: &mut dyn Prompter) -> Result<()> {
    let query = prompter.text("Enter the customer name to cancel appointment", false)?;

    let pending = match store.cancel_appointment(&query) {
        Ok(pending) => pending,
        Err(BookingError::NotFound(_)) => {
            println!("  No matching customer found for cancellation.");
            return Ok(());
        }
        Err(err) => {
            print_rejection(&err);
            return Ok(());
        }
    };

    print_record("Appointment to Cancel", &record_fields(pending.record(), None));

    let confirmed = prompter.confirm("Do you want to cancel this appointment?")?;

    match pending.resolve(confirmed) {
        CancelOutcome::Cancelled(record) => print_success(&format!(
            "Appointment for {} canceled successfully.",
            record.customer.name
        )),
        CancelOutcome::Kept(_) => println!("  Appointment cancellation aborted."),
    }

    Ok(())
}
