//! Commands module - CLI command implementations.

pub mod demo;
pub mod migrate;
pub mod patients;
pub mod recommend;
pub mod reminders;

use serde::Serialize;

use common::{AppError, AppResult};

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to render output: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}
