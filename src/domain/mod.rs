//! Domain layer containing business entities and logic.
//!
//! Nothing in this layer depends on HTTP or on a concrete storage backend.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`clock`] - Injectable time source
//! - [`code_allocator`] - Sequential short code issuance
//! - [`expiry_sweeper`] - Periodic background removal of expired links
//!
//! # Link Lifecycle
//!
//! 1. A shorten request stores a [`entities::Link`] under a code from the allocator
//! 2. Redirect requests resolve the code until the link is older than 24 hours
//! 3. The first lookup after expiry removes the link
//! 4. Links nobody asks for again are removed by [`expiry_sweeper`]

pub mod clock;
pub mod code_allocator;
pub mod entities;
pub mod expiry_sweeper;
pub mod repositories;
