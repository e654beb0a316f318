// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod core;
pub mod csv;
pub mod error;
pub mod params;
pub mod progress;
pub mod specs;

pub mod aggregate;
pub mod cli;
pub mod reconcile;
pub mod results;
