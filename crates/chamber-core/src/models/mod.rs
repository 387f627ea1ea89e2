//! Data models for chamber member data.
//!
//! - `MemberRecord`: one member business in canonical shape
//! - `MembershipTier`: gold/silver/other classification of the level string
//! - `MemberCollection`: ordered records plus the document shape they came from

pub mod collection;
pub mod member;

pub use collection::{DocumentShape, MemberCollection, WRAPPER_KEYS};
pub use member::{MemberRecord, MembershipTier, RawMember};
