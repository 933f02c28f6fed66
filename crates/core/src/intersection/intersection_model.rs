use serde::{Deserialize, Serialize};

/// Symbols common to every stored day of a range, plus those that were not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectionResult {
    /// Uppercase symbols, descending market cap, at most `limit` when set
    pub pairlist: Vec<String>,
    /// Uppercase symbols (or ids) seen on some day but not on all of them
    pub filtered_out: Vec<String>,
}
