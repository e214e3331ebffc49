//! mom - turn pasted meeting notes into Minutes of Meeting (MOM) and Action Items
//!
//! The whole pipeline is: notes -> prompt -> hosted completion API -> split
//! into the MOM and Action Items sections.

pub mod cli;
pub mod config;
pub mod llm;
pub mod summary;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "mom";
