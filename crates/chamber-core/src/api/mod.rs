//! Member data loading.
//!
//! This module provides the `MemberLoader` for fetching the chamber's
//! member data file, either over HTTP or from the local filesystem,
//! and normalizing it into a `MemberCollection`.
//!
//! Loads are single attempts: there is no retry and no request timeout.

pub mod client;
pub mod error;

pub use client::{DataSource, MemberLoader};
pub use error::LoadError;
