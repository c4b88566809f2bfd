use std::io::{self, IsTerminal};

use serde::{Deserialize, Serialize};

/// Whether a person is expected to be watching the run. Resolved once from
/// configuration and passed to whatever needs it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interactivity {
    /// Interactive when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl Interactivity {
    pub fn is_interactive(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => io::stdout().is_terminal(),
        }
    }
}
