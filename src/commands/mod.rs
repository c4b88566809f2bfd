pub mod check;
pub mod config;
pub mod decide;
pub mod eval;

pub use check::{handle_check, CheckArgs};
pub use config::handle_config;
pub use decide::handle_decide;
pub use eval::handle_eval;
