//! Main menu parsing and the interactive loop.

use std::io::{self, IsTerminal};

use anyhow::Result;
use console::{Term, style};
use tracing::debug;

use trimtime_core::store::BookingStore;

use super::prompt::{InputClosed, LinePrompter, Prompter, TerminalPrompter};
use super::{book, cancel, search, view};

/// Actions offered by the main menu, numbered 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Book,
    View,
    Search,
    Cancel,
    Exit,
}

/// Parse the user's menu entry. Anything unrecognized is `None`.
pub fn parse(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Book),
        "2" => Some(MenuChoice::View),
        "3" => Some(MenuChoice::Search),
        "4" => Some(MenuChoice::Cancel),
        "5" => Some(MenuChoice::Exit),
        _ => None,
    }
}

fn print_menu() {
    println!();
    println!(
        "  {}",
        style("TrimTime: Haircut Appointment System").cyan().bold()
    );
    println!("  1. Book Appointment");
    println!("  2. View Appointments");
    println!("  3. Search Name");
    println!("  4. Cancel Appointment");
    println!("  5. Exit");
    println!();
}

/// Run the menu until the user picks Exit or input runs out.
///
/// An attended terminal gets dialoguer prompts; piped input is read line by
/// line.
pub fn run(store: &mut BookingStore) -> Result<()> {
    if io::stdin().is_terminal() && Term::stderr().is_term() {
        session(store, &mut TerminalPrompter::default())
    } else {
        session(store, &mut LinePrompter::new(io::stdin().lock(), io::stdout()))
    }
}

/// The menu loop over any source of answers.
pub fn session(store: &mut BookingStore, prompter: &mut dyn Prompter) -> Result<()> {
    match menu_loop(store, prompter) {
        Err(err) if err.is::<InputClosed>() => {
            debug!("input closed, ending session");
            Ok(())
        }
        other => other,
    }
}

fn menu_loop(store: &mut BookingStore, prompter: &mut dyn Prompter) -> Result<()> {
    loop {
        prompter.clear()?;
        print_menu();

        let entry = prompter.text("Enter your choice", true)?;
        let choice = parse(&entry);
        debug!(?choice, "menu selection");

        match choice {
            Some(MenuChoice::Book) => book::book_appointment(store, prompter)?,
            Some(MenuChoice::View) => view::view_appointments(store),
            Some(MenuChoice::Search) => search::search_name(store, prompter)?,
            Some(MenuChoice::Cancel) => cancel::cancel_appointment(store, prompter)?,
            Some(MenuChoice::Exit) => {
                println!("Exiting the System. Goodbye!");
                return Ok(());
            }
            None => println!("Invalid choice. Please try again."),
        }

        prompter.pause()?;
    }
}
