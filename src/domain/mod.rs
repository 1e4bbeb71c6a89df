//! Domain types - commits and tracker work items, independent of git and HTTP

pub mod commit;
pub mod work_item;

pub use commit::Commit;
pub use work_item::{WorkItem, ACCEPTED_STATE};
