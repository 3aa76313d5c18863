//! Name generators.

pub mod filename;
pub mod folder;
