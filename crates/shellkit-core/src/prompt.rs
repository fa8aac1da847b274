//! Interactive input prompts
//!
//! Uses dialoguer for terminal prompts. Every prompt carries a default the
//! user can accept by submitting an empty line; typed prompts re-ask on
//! unparsable input instead of silently substituting the default.

use dialoguer::{Confirm, Input};

use crate::error::Result;

/// Prompt for a string, offering `default`.
pub fn input_str(prompt: &str, default: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    Ok(value)
}

/// Yes/no prompt.
pub fn input_bool(prompt: &str, default: bool) -> Result<bool> {
    let value = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    Ok(value)
}

/// Prompt for an integer.
pub fn input_int(prompt: &str, default: i64) -> Result<i64> {
    let value = Input::<i64>::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()?;
    Ok(value)
}

/// Prompt for a float.
pub fn input_float(prompt: &str, default: f64) -> Result<f64> {
    let value = Input::<f64>::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()?;
    Ok(value)
}
