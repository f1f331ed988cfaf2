pub mod guidance;
pub mod market;
pub mod recommendation;
pub mod user;

use serde::{Deserialize, Serialize};

/// Where a response body came from. `Sample` marks a silent fallback after an
/// upstream failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    Live,
    Sample,
}
