//! Parameter lookup layer
//!
//! Provides a uniform `lookup(env_name, remote_key, default)` operation over
//! two backing modes selected at startup: the process environment (local
//! development) or a remote key/value parameter service (production). Remote
//! reads go through an in-memory overlay cache so each parameter is fetched
//! at most once per process.
//!
//! # Modules
//!
//! - [`store`]: the [`store::ParamStore`] overlay cache and lookup logic
//! - [`remote`]: the [`remote::RemoteParams`] trait and its HTTP client
//! - [`error`]: error types for parameter operations

pub mod error;
pub mod remote;
pub mod store;
