//! Common utilities shared by services

/// Watchable values for fine-grained state updates
pub mod property;

pub use property::Property;
