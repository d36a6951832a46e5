//! Appointment listing.

use console::style;

use trimtime_core::store::BookingStore;

use super::display::appointment_table;

/// Print every appointment in booking order.
pub fn view_appointments(store: &BookingStore) {
    let records = store.list_appointments();

    if records.is_empty() {
        println!();
        println!("  {} No appointments found.", style("i").blue().bold());
        println!();
        return;
    }

    let table = appointment_table(&records, &store.config().currency_symbol);

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} appointment{}",
        style(records.len()).bold(),
        if records.len() == 1 { "" } else { "s" }
    );
    println!();
}
