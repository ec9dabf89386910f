//! # Domain Models
//!
//! Content documents as the headless store returns them, the closed taxonomies they
//! reference, and the typed site configuration. Keep it lean: no I/O, networking, or
//! rendering here, just data and the shape checks pages rely on.

pub mod check;
pub mod config;
pub mod content;
pub mod media;
pub mod rich_text;
pub mod taxonomy;

pub use check::{PageContent, Usable, WellFormed, is_valid_email};
