//! Chamber directory core library.
//!
//! Loads the chamber's member data file, normalizes it into canonical
//! member records, and selects what the directory and spotlight panels
//! show. Render adapters turn those selections into HTML fragments.
//!
//! The usual flow for one page view is:
//!
//! 1. `MemberLoader::load` fetches and normalizes the data file.
//! 2. `selector::render_directory` or `selector::render_spotlight` picks
//!    the records to show.
//! 3. `render` writes them into a `RenderTarget`.
//!
//! `pipeline` wires those steps together and turns every failure into a
//! user-visible fallback.

pub mod api;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod selector;
pub mod utils;

pub use api::{DataSource, LoadError, MemberLoader};
pub use models::{DocumentShape, MemberCollection, MemberRecord, MembershipTier};
pub use pipeline::{DirectoryPage, PageOutcome, SpotlightPanel};
pub use render::{FallbackKind, HtmlContainer, Panel, RenderTarget};
pub use selector::{DirectoryRender, MemberCard, SpotlightOutcome, ViewMode};
