//! Core library components.
//!
//! This module contains the business logic: configuration, domain types,
//! sealed-box encryption, the remote interface and the propagation workflow.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod github;
pub mod propagate;
pub mod types;
