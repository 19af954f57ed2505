//! CLI library components for the wellness index client.

pub mod logging;
