pub mod boolexpr;
pub mod checker;
pub mod config;
pub mod environment;
pub mod licenses;
pub mod output;

// Re-export main types for easy access
pub use boolexpr::{Context, EvalError, Node, ParseError};
pub use checker::{CheckError, LicenseChecker, Report, ReportSummary, UnknownPolicy};
pub use config::Config;
pub use environment::Interactivity;
