pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod git;
pub mod resolver;
pub mod selector;
pub mod tracker;
pub mod ui;

pub use error::{BumperError, Result};
