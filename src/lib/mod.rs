//! Shared library modules providing error types, path derivation, command building, and telemetry initialization.

pub mod command;
pub mod errors;
pub mod paths;
pub mod telemetry;
