//! Series Renamer Library
//!
//! Proposes sanitized filenames and destination folders for files of
//! cataloged anime series, based on title-language preference, episode
//! classification and detected dub/sub languages.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
