//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL held in memory until it expires
//! - [`ShortLink`] - The result of shortening a URL, as handed back to callers

pub mod link;

pub use link::{LINK_TTL, LINK_TTL_LABEL, Link, ShortLink, link_ttl};
