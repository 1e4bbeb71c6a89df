use std::sync::Mutex;

use crate::domain::WorkItem;
use crate::error::{BumperError, Result};
use crate::tracker::TrackerClient;

/// Mock tracker serving a fixed set of work items.
///
/// Every call is recorded so tests can check what was requested.
pub struct MockTrackerClient {
    items: Vec<WorkItem>,
    fail: bool,
    requests: Mutex<Vec<Vec<u64>>>,
}

impl MockTrackerClient {
    pub fn new(items: Vec<WorkItem>) -> Self {
        MockTrackerClient {
            items,
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A tracker whose every request fails
    pub fn failing() -> Self {
        MockTrackerClient {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    /// Ids passed to each `fetch_work_items` call so far
    pub fn requests(&self) -> Vec<Vec<u64>> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockTrackerClient {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TrackerClient for MockTrackerClient {
    fn fetch_work_items(&self, ids: &[u64]) -> Result<Vec<WorkItem>> {
        self.requests.lock().unwrap().push(ids.to_vec());

        if self.fail {
            return Err(BumperError::tracker("mock tracker unavailable"));
        }

        Ok(self.items.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_tracker_records_requests() {
        let tracker = MockTrackerClient::new(vec![WorkItem::new(1, "accepted", "One")]);
        let items = tracker.fetch_work_items(&[1, 1, 2]).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(tracker.requests(), vec![vec![1, 1, 2]]);
    }

    #[test]
    fn test_failing_mock_tracker() {
        let tracker = MockTrackerClient::failing();
        assert!(tracker.fetch_work_items(&[1]).is_err());
        assert_eq!(tracker.requests().len(), 1);
    }

    #[test]
    #[should_panic]
    fn test_poisoned_request_log_panics() {
        let tracker = MockTrackerClient::default();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = tracker.requests.lock().unwrap();
            panic!("poison the request log");
        }));

        tracker.requests();
    }
}
