//! Version resolution layer
//!
//! Resolves the effective replicated version for the three installer
//! artifacts (base, ui, operator) from a layered precedence: an app-specific
//! pin always wins, then a request-supplied override (exact tag or range
//! expression), then the channel's current published version.
//!
//! # Modules
//!
//! - [`resolver`]: the precedence algorithm and per-artifact entry points
//! - [`source`]: the [`source::VersionSource`] trait for release lookups
//! - [`market`]: HTTP implementation of the release API client
//! - [`semver`]: version parsing, range matching, premkit data dir rules
//! - [`types`]: request and override types
//! - [`error`]: error types for release lookups

pub mod error;
pub mod market;
pub mod resolver;
pub mod semver;
pub mod source;
pub mod types;
