//! Media services.

pub mod ffprobe;
