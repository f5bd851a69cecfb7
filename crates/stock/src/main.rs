//! Stock Tracker
//!
//! Loads the stock file, runs a fixed sequence of additions and removals,
//! prints a low-stock line and the item report, then saves the file back.
//!
//! The binary takes no arguments. The stock file defaults to
//! `inventory.json` in the working directory and can be moved with
//! `stock.toml` or the `STOCK_DATA_FILE` environment variable.

use anyhow::Result;
use serde_json::json;
use std::env;
use stock::config::{StockConfig, DATA_FILE_ENV};
use stock::output::{format_item_list, is_broken_pipe, ExitCode, OutputContext};
use stock::{
    logging, ActionableError, AuditEntry, Inventory, InventoryError, InventoryResult,
    JsonFileStorage, LoadOutcome,
};
use tracing::{debug, info};

fn error_to_exit_code(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<InventoryError>() {
        Some(inventory_error) => ExitCode::from(inventory_error),
        None if error.downcast_ref::<std::io::Error>().is_some() => ExitCode::ExternalError,
        None => ExitCode::GenericError,
    }
}

fn main() {
    logging::init();

    let exit_code = match run() {
        Ok(()) => ExitCode::Success,
        // Reader went away (e.g. `stock | head -1`); nothing left to report.
        Err(e) if is_broken_pipe(&e) => ExitCode::Success,
        Err(e) => {
            match e.downcast_ref::<InventoryError>() {
                Some(inventory_error) => eprint!("{}", ActionableError::from(inventory_error)),
                None => eprintln!("Error: {:#}", e),
            }
            error_to_exit_code(&e)
        }
    };

    if exit_code != ExitCode::Success {
        debug!(code = exit_code.code(), reason = exit_code.description(), "exiting");
        std::process::exit(exit_code.code());
    }
}

/// Print a failure the run can continue past; propagate anything else.
fn report_recoverable<T>(output: &OutputContext, result: InventoryResult<T>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(err) if err.is_recoverable() => {
            output.print_error(&err)?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn run() -> Result<()> {
    let current_dir = env::current_dir()?;
    let config = StockConfig::load(&current_dir)?;
    let output = OutputContext::new(config.quiet());

    let data_file_name = config.data_file_name(env::var(DATA_FILE_ENV).ok());
    let storage = JsonFileStorage::new(current_dir.join(&data_file_name));
    let mut inventory =
        Inventory::new(storage).with_low_stock_threshold(config.low_stock_threshold());

    if inventory.load()? == LoadOutcome::Missing {
        output.print_warning(format!(
            "{} not found. Starting with empty inventory.",
            data_file_name
        ))?;
    }

    let mut audit: Vec<AuditEntry> = Vec::new();
    for (item, qty) in [("apple", 10), ("banana", 20)] {
        match inventory.add_item(item, qty) {
            Ok(entry) => audit.extend(entry),
            Err(err) => report_recoverable(&output, Err::<(), _>(err))?,
        }
    }

    report_recoverable(&output, inventory.add_value(&json!(123), &json!("ten")))?;

    report_recoverable(&output, inventory.remove_item("apple", 3))?;
    report_recoverable(&output, inventory.remove_item("orange", 1))?;

    output.print_data(format!("Apple stock: {}", inventory.get_qty("apple")))?;
    output.print_data(format!(
        "Low items: {}",
        format_item_list(&inventory.check_low_items_default())
    ))?;

    inventory.print_data()?;
    inventory.save()?;

    for entry in &audit {
        info!(%entry, "audit");
    }

    output.print_info("--- Main execution finished ---")?;
    Ok(())
}
