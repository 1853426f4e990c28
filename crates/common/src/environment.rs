use anyhow::{Context, Result};
use std::env;
use std::fmt::Display;
use std::fs;
use std::str::FromStr;
use tracing::info;

/// Retrieve some environment variable value by its name. Also checks if the environment variable
/// value is in some file, the path to which is retrieved from an environment variable by the
/// given name concatenated with `_FILE`.
///
/// Returns [Result::Ok()] if a value is successfully retrieved from either environment variable;
/// returns [Result::Err()] otherwise.
pub fn get_env_var(name: &str) -> Result<String> {
    let value = match env::var(name) {
        Ok(s) => s,
        Err(e) => get_from_file(name).context(format!(
            "Could not find a value for {} nor for {}_FILE. Original Error: {:?}",
            name, name, e
        ))?,
    };
    Ok(value.trim().to_string())
}

/// Like [get_env_var()], but an unset or blank variable yields [None] instead of an error.
pub fn get_optional_env_var(name: &str) -> Option<String> {
    match get_env_var(name) {
        Ok(v) if !v.is_empty() => Some(v),
        _ => None,
    }
}

/// Retrieve an environment variable, falling back to `default` when it isn't set.
pub fn get_env_var_or(name: &str, default: &str) -> String {
    match get_optional_env_var(name) {
        Some(v) => v,
        None => {
            info!(
                "No value found for {}, using the default value {}.",
                name, default
            );
            String::from(default)
        }
    }
}

/// Retrieve and parse an environment variable, falling back to `default` when it isn't set.
/// A value that is present but can't be parsed is an error rather than a silent fallback.
pub fn parse_env_var_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = match get_optional_env_var(name) {
        Some(v) => v,
        None => {
            info!(
                "No value found for {}, using the default value {}.",
                name, default
            );
            return Ok(default);
        }
    };
    T::from_str(&value).with_context(|| format!("Failed to parse \"{}\" given for {}.", value, name))
}

fn get_from_file(name: &str) -> Result<String> {
    let path = env::var(format!("{}_FILE", name))?;
    Ok(fs::read_to_string(path)?)
}

pub mod variables {
    pub use crate::environment_variables::*;
}
