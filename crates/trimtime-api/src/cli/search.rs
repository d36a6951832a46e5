//! Customer search by name.

use anyhow::Result;
use console::style;

use trimtime_core::store::BookingStore;
use trimtime_types::error::BookingError;

use super::display::{print_heading, print_rejection};
use super::prompt::Prompter;

pub fn search_name(store: &BookingStore, prompter: &mut dyn Prompter) -> Result<()> {
    let query = prompter.text("Enter the customer name to search", false)?;

    let found = store.search_by_name(&query);
    if found.is_empty() {
        print_rejection(&BookingError::NotFound(query));
        return Ok(());
    }

    print_heading("Search Results");
    for customer in &found {
        println!(
            "  {} {}  {}",
            style("Name:").bold(),
            style(&customer.name).cyan(),
            style(&customer.phone).dim()
        );
    }
    println!();

    Ok(())
}
