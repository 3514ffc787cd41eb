//! CLI command implementations.

pub mod init;
pub mod columns;
pub mod run;
