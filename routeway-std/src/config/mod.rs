//! Router configuration.
//!
//! # Data Flow
//! ```text
//! TOML file
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated)
//!     → router construction (registry, allow-list, declared routes)
//! ```
//!
//! All fields have defaults so minimal files stay minimal.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, load_config};
pub use schema::{DestinationConfig, RouteConfig, RouterConfig};
pub use validation::{ValidationError, check_marker, check_separator, validate_config};
