//! Command implementations for the resio CLI

pub mod cat;
pub mod info;
pub mod list;
pub mod resolve;
pub mod write;
