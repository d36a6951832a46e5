//! TrimTime interactive booking entry point.
//!
//! Binary name: `trimtime`
//!
//! Parses CLI arguments, sets up logging, builds the shop configuration and
//! booking store, then hands control to the interactive menu.

mod cli;
mod config;

use clap::Parser;
use clap_complete::generate;
use tracing::debug;

use trimtime_core::store::BookingStore;
use trimtime_observe::tracing_setup::{Verbosity, init_tracing};

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(Verbosity::from_flags(cli.verbose, cli.quiet))
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    // Shell completions don't need a store
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "trimtime", &mut std::io::stdout());
        return Ok(());
    }

    let shop = config::resolve_shop_config(cli.config.as_deref(), &cli.overrides())?;
    debug!(
        services = shop.services.len(),
        staff = shop.staff.len(),
        slots = shop.slots.len(),
        strict_dates = shop.strict_dates,
        allow_returning_customers = shop.allow_returning_customers,
        "shop configuration ready"
    );

    let mut store = BookingStore::new(shop);
    cli::menu::run(&mut store)
}
