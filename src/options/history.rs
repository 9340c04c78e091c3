use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::history::DEFAULT_HISTORY_CAPACITY;
use crate::camera::BoundedHistory;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "History", inline)]
#[serde(default)]
/// Navigation history limits.
pub struct HistoryOptions {
    /// Maximum number of saved camera poses.
    #[schemars(title = "Capacity", range(min = 0, max = 100))]
    pub capacity: usize,
}

impl HistoryOptions {
    /// Empty history with the configured capacity.
    #[must_use]
    pub fn build(&self) -> BoundedHistory {
        BoundedHistory::with_capacity(self.capacity)
    }
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}
