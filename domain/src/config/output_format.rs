//! Output format value object

use serde::{Deserialize, Serialize};

/// How a generate-and-verify run is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Draft answer, verification report and parsed verdict (default)
    #[default]
    Text,
    /// Only the draft answer
    Answer,
    /// Both result records as JSON
    Json,
}
