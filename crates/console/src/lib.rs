//! `storefront-console`
//!
//! **Responsibility:** terminal front end for the storefront services.
//!
//! This crate provides:
//! - Service endpoint configuration (products, inventory, orders)
//! - The HTTP client seam (`StorefrontApi`) and its reqwest implementation
//! - The form controller owning the three drafts and the product list
//! - A line-oriented terminal shell that renders and drives the forms
//!
//! The console is a **thin shell**: the services stay the authority, and
//! request failures are logged, never retried.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod notify;
pub mod shell;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{HttpStorefrontApi, StorefrontApi};
pub use config::{ConfigError, ServiceEndpoints};
pub use controller::FormController;
pub use error::RequestError;
pub use notify::{Notifier, TerminalNotifier};
pub use shell::Shell;
