//! Command-line workflow, kept apart from argument parsing in `main.rs`

pub mod orchestration;
