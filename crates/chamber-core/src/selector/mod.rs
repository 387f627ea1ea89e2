//! Presentation selectors.
//!
//! Given a loaded `MemberCollection`, these decide which members are shown
//! and in what order:
//!
//! - `render_directory`: every member in data file order, grid or list layout
//! - `render_spotlight`: two or three random gold/silver members
//!
//! Both are pure functions of their inputs; spotlight randomness comes from
//! an injected `rand::Rng`.

pub mod directory;
pub mod random;
pub mod spotlight;

pub use directory::{render_directory, CardImage, DirectoryRender, MemberCard, ViewMode};
pub use spotlight::{eligible_members, render_spotlight, SpotlightOutcome};
