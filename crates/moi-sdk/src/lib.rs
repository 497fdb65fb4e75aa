//! Workflow helpers for the MOI catalog service.
//!
//! [`SdkClient`] composes low-level calls into common tasks: provisioning a
//! role for table access, importing local files into tables or volumes,
//! finding files and running SQL. Each helper issues a fixed sequence of
//! calls and returns the first error unchanged.

pub mod client;
pub mod imports;
pub mod roles;
pub mod sql;

pub use client::SdkClient;
pub use roles::TablePrivInfo;

/// Errors are those of the underlying client; helpers add validation only.
pub use moi_rest_client::{Error, Result};
