//! Shared terminal output for the booking flows.

use std::fmt::Display;

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use tracing::warn;

use trimtime_core::format::format_price;
use trimtime_types::appointment::AppointmentRecord;
use trimtime_types::error::BookingError;
use trimtime_types::service::Service;

/// Number items from 1 in display order: `"1. 08:00 AM"`.
pub fn numbered<T: Display>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| format!("{}. {item}", idx + 1))
        .collect()
}

/// Catalog lines keyed by service id: `"1. Fade - ₱100.00"`.
pub fn service_lines(services: &[Service], currency: &str) -> Vec<String> {
    services
        .iter()
        .map(|s| {
            format!(
                "{}. {} - {}",
                s.id,
                s.name,
                format_price(s.price_cents, currency)
            )
        })
        .collect()
}

/// Labelled fields of one appointment, in display order. The price is shown
/// only when a currency is given.
pub fn record_fields(
    record: &AppointmentRecord,
    currency: Option<&str>,
) -> Vec<(&'static str, String)> {
    let appt = &record.appointment;
    let mut fields = vec![
        ("Name", record.customer.name.clone()),
        ("Phone", record.customer.phone.clone()),
        ("Haircut", appt.service_name.clone()),
        ("Barber", appt.staff_name.clone()),
        ("Date", appt.date.clone()),
        ("Time", appt.time.clone()),
    ];
    if let Some(currency) = currency {
        fields.push(("Price", format_price(appt.price_cents, currency)));
    }
    fields
}

/// The user-facing sentence for a rejected operation.
pub fn rejection_message(err: &BookingError) -> String {
    match err {
        BookingError::InvalidName => {
            "Invalid name format. Please enter at least a first and last name.".to_string()
        }
        BookingError::InvalidPhone => {
            "Invalid phone number. Please enter exactly 11 digits starting with '09'.".to_string()
        }
        BookingError::DuplicateCustomer(_) => {
            "A customer with this phone number already exists.".to_string()
        }
        BookingError::InvalidDate(raw) => {
            format!("'{raw}' is not a valid date. Please enter it as YYYYMMDD.")
        }
        BookingError::NoAvailableSlots(_) => {
            "No available time slots for the selected date. Please try another date.".to_string()
        }
        BookingError::InvalidSlot => "Invalid time slot choice. Please try again.".to_string(),
        BookingError::InvalidService(_) => "Invalid haircut option. Please try again.".to_string(),
        BookingError::InvalidStaff => "Invalid barber choice. Please try again.".to_string(),
        BookingError::NotFound(_) => "No matching customer found.".to_string(),
    }
}

/// Print a rejection and log it.
pub fn print_rejection(err: &BookingError) {
    warn!(error = %err, "operation rejected");
    println!("  {} {}", style("✗").red().bold(), rejection_message(err));
}

pub fn print_success(message: &str) {
    println!();
    println!("  {} {}", style("✓").green().bold(), message);
}

pub fn print_heading(title: &str) {
    println!();
    println!("  {}", style(format!("--- {title} ---")).bold());
}

pub fn print_lines(title: &str, lines: &[String]) {
    print_heading(title);
    for line in lines {
        println!("  {line}");
    }
    println!();
}

pub fn print_record(title: &str, fields: &[(&'static str, String)]) {
    print_heading(title);
    for (label, value) in fields {
        println!("  {} {}", style(format!("{label}:")).bold(), value);
    }
    println!("  {}", style("---").dim());
}

/// All appointments as a table, one row per booking.
pub fn appointment_table(records: &[AppointmentRecord], currency: &str) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Customer").fg(Color::White),
        Cell::new("Phone").fg(Color::White),
        Cell::new("Date").fg(Color::White),
        Cell::new("Time").fg(Color::White),
        Cell::new("Haircut").fg(Color::White),
        Cell::new("Price").fg(Color::White),
        Cell::new("Barber").fg(Color::White),
    ]);

    for record in records {
        let appt = &record.appointment;
        table.add_row(vec![
            Cell::new(&record.customer.name).fg(Color::Cyan),
            Cell::new(&record.customer.phone),
            Cell::new(&appt.date),
            Cell::new(&appt.time).fg(Color::Yellow),
            Cell::new(&appt.service_name),
            Cell::new(format_price(appt.price_cents, currency)),
            Cell::new(&appt.staff_name).fg(Color::Green),
        ]);
    }

    table
}
