//! Shared test fixtures for TeamForge crates.
//!
//! This crate provides data builders only. It depends on `teamforge-core`
//! alone so every other crate can use it as a dev-dependency.
//!
//! - [`roster`] - a small registry of named sample units
//! - [`modules`] - module and requirement builders over that roster
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! teamforge-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use teamforge_test::roster::{BLAZE, CIPHER};
//! use teamforge_test::modules::{module, requirements};
//! ```

pub mod modules;
pub mod roster;

pub use modules::{module, module_with_slots, requirements, single};
pub use roster::sample_registry;
