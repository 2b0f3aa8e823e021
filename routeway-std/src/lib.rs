//! # routeway-std
//!
//! Standard implementations for the Routeway route registration engine.
//!
//! This crate provides:
//! - **Placeholders**: [`PatternRegistry`](patterns::PatternRegistry), the
//!   token → regex map used by structural matching
//! - **Route table**: [`RouteTable`](table::RouteTable), partitioned by method
//!   and segment count, insertion ordered within a bucket
//! - **Scopes**: [`ScopeStack`](scope::ScopeStack) and [`Rules`](scope::Rules)
//!   for prefix, namespace and middleware nesting
//! - **Resolution**: exact and structural matching ([`resolver`]) and
//!   destination normalisation ([`normalize`])
//! - **Reverse routing**: [`AliasTable`](alias::AliasTable)
//! - **Engine**: [`RouteEngine`](engine::RouteEngine), which ties the above
//!   together
//! - **Configuration**: TOML loading and validation ([`config`])
//! - **Testing**: [`testing`] helpers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use routeway_core;

// Modules
pub mod alias;
pub mod config;
pub mod engine;
pub mod normalize;
pub mod patterns;
pub mod resolver;
pub mod scope;
pub mod table;
pub mod testing;

mod logging;
