//! Infrastructure layer implementing the domain's storage interfaces.
//!
//! # Modules
//!
//! - [`memory`] - Process-local link store guarded by a single mutex

pub mod memory;
