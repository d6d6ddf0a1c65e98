//! Core types shared across the crate.
//!
//! This module holds the pieces every other module leans on:
//!
//! - [`error`] - The [`ReleaseError`] taxonomy and crate-wide [`Result`] alias
//! - [`distribution`] - The [`Distribution`] enum selecting upstream repos
//!   and document templates

pub mod distribution;
pub mod error;

pub use distribution::Distribution;
pub use error::{ReleaseError, Result};
