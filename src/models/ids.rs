//! Identifier for cost entries
//!
//! Ledger exports may omit IDs; a missing one is generated on load so report
//! rows can still be told apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostEntryId(Uuid);

impl CostEntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CostEntryId {
    fn default() -> Self {
        Self::new()
    }
}

/// Short form: prefix plus the first eight hex digits
impl fmt::Display for CostEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let simple = self.0.simple().to_string();
        write!(f, "cost-{}", &simple[..8])
    }
}
