pub mod preflight;
pub mod strategies;
