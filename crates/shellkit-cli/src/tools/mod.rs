//! Bundled tools for the shellkit binary

mod exec;
mod purge;

use shellkit_tools::{Result, ToolRegistry};

/// Register every bundled tool.
///
/// Called once during bootstrap, before the driver builds the parser
/// tree. Each tool module exposes its own `register` function so new
/// tools plug in without touching the driver.
pub fn register_all(registry: &mut ToolRegistry) -> Result<()> {
    exec::register(registry)?;
    purge::register(registry)?;
    Ok(())
}
