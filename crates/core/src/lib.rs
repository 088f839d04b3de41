//! Domain types shared by the feedback service crates.

pub mod author;
pub mod error;
pub mod feedback;
pub mod types;
