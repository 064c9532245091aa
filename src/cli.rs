pub mod command;
pub mod handlers;
pub mod run;

use crate::errors::AppError;

pub use run::run_app;

/// Splits a raw line into a lowercased command and its arguments.
pub fn parse_input(line: &str) -> Result<(String, Vec<String>), AppError> {
    let mut parts = line.split_whitespace();

    let command = parts.next().ok_or(AppError::InvalidInput)?.to_lowercase();
    let args = parts.map(str::to_string).collect();

    Ok((command, args))
}
