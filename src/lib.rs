pub mod browser;
pub mod config;
pub mod fixtures;
pub mod hooks;
pub mod locale;
pub mod model;
pub mod pages;
pub mod reporter;
pub mod runner;
pub mod suites;

// Re-export common items
pub use config::{Environment, RunConfig};
pub use reporter::BasicReporter;
pub use runner::run_suite;
