use crate::error::CliError;
use serde::Serialize;

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    let json = serde_json::to_string_pretty(value)?;
    Ok(json)
}

/// Writes `value` as pretty JSON to `path`, or to stdout when no path is given.
pub async fn write_json<T: Serialize>(value: &T, path: Option<String>) -> Result<(), CliError> {
    let json = to_json(value)?;
    match path {
        Some(path) => tokio::fs::write(path, json).await?,
        None => println!("{json}"),
    }
    Ok(())
}

pub fn print_names(names: &[String]) {
    for name in names {
        println!("{name}");
    }
}
