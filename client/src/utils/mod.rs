//! # Client Utilities Module
//!
//! Small helpers shared by the rest of the client library.
//!
//! The [`env`] module provides validated access to environment variables and
//! backs [`ClientConfig::from_env`](crate::config::ClientConfig::from_env):
//!
//! ```no_run
//! use client::utils::env::EnvUtils;
//!
//! let base_url = EnvUtils::get_optional_var("PUSHDESK_BASE_URL")
//!     .unwrap_or_else(|| "http://127.0.0.1:8080".to_string());
//! ```

pub mod env;

pub use env::{EnvUtils, EnvVarError};
