use serde::{Deserialize, Serialize};

/// Tracker state that marks a work item as approved for release.
pub const ACCEPTED_STATE: &str = "accepted";

/// A tracker work item ("story") as returned by the stories endpoint.
///
/// Fields other than these three are ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WorkItem {
    pub id: u64,
    #[serde(rename = "current_state")]
    pub state: String,
    pub name: String,
}

impl WorkItem {
    pub fn new(id: u64, state: impl Into<String>, name: impl Into<String>) -> Self {
        WorkItem {
            id,
            state: state.into(),
            name: name.into(),
        }
    }

    /// Whether the tracker reports this item as accepted
    pub fn is_accepted(&self) -> bool {
        self.state == ACCEPTED_STATE
    }
}
