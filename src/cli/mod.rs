//! Command-line interface: argument parsing and the pipeline driver.

pub mod commands;

pub use commands::run;
