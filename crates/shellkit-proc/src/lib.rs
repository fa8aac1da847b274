//! Synchronous subprocess execution for shellkit
//!
//! One builder, three ways to run: captured output that fails on non-zero
//! exit, passthrough status that reports the exit code unchanged, and a
//! retrying variant for flaky external commands.

pub mod error;
pub mod exec;

pub use error::{Error, Result};
pub use exec::Exec;
