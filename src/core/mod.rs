//! Core business logic modules.

pub mod batch;
pub mod destination;
pub mod episode;
pub mod languages;
pub mod renamer;
pub mod title;
