//! Version resolution core for replicated installer scripts
//!
//! Given a release channel, an application id, and optional override tags
//! supplied with a request, this crate resolves the effective version for the
//! base installer and its ui/operator variants. Runtime settings come from a
//! parameter store backed either by the process environment or by a remote
//! parameter service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  ParamStore │────▶│   Settings  │────▶│   Resolver  │
//! │ (env/remote)│     │  (config)   │     │ (precedence)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │ RemoteParams│                         │VersionSource│
//! │ (kv service)│                         │(release API)│
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`param`]: two-tier parameter lookup (overlay cache over env or remote)
//! - [`resolve`]: version precedence logic and the release API client
//! - [`config`]: settings loaded through the parameter store

pub mod config;
pub mod param;
pub mod resolve;
