//! Library components for the transcript feature CLI.

pub mod input;
pub mod logging;
