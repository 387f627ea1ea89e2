//! Page-load pipelines.
//!
//! `DirectoryPage` and `SpotlightPanel` each run loader -> selector ->
//! render for one page view. Failures stop here: they are logged for the
//! operator and replaced by a fallback message in the render target, so a
//! load never returns an error to its caller.

use rand::Rng;
use tracing::{error, info, warn};

use crate::api::{DataSource, LoadError, MemberLoader};
use crate::models::MemberCollection;
use crate::render::{
    apply_view, render_directory_into, render_fallback_into, render_spotlight_into, FallbackKind,
    Panel, RenderTarget,
};
use crate::selector::{
    render_directory, render_spotlight, DirectoryRender, MemberCard, SpotlightOutcome, ViewMode,
};

/// What a page load ended up showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Rendered { count: usize },
    Fallback(FallbackKind),
}

fn log_load_error(err: &LoadError, panel: Panel) {
    error!(
        panel = ?panel,
        resource = err.resource(),
        status = ?err.status(),
        error = %err,
        "Member data unavailable"
    );
}

/// Load the collection, or render the matching fallback and return why not.
async fn load_collection<T: RenderTarget + ?Sized>(
    loader: &MemberLoader,
    source: &DataSource,
    panel: Panel,
    target: &mut T,
) -> Result<MemberCollection, FallbackKind> {
    let kind = match loader.load(source).await {
        Ok(collection) if !collection.is_empty() => return Ok(collection),
        Ok(collection) => {
            warn!(
                panel = ?panel,
                source = %source,
                shape = %collection.shape(),
                "Member data holds no members"
            );
            FallbackKind::NoData
        }
        Err(e) => {
            log_load_error(&e, panel);
            FallbackKind::DataUnavailable
        }
    };
    render_fallback_into(target, kind, panel);
    Err(kind)
}

/// The full member directory page.
pub struct DirectoryPage {
    loader: MemberLoader,
    source: DataSource,
    image_base: String,
    view_mode: ViewMode,
    current: Option<DirectoryRender>,
}

impl DirectoryPage {
    pub fn new(loader: MemberLoader, source: DataSource, image_base: impl Into<String>) -> Self {
        Self {
            loader,
            source,
            image_base: image_base.into(),
            view_mode: ViewMode::default(),
            current: None,
        }
    }

    pub fn with_view(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// The last successful render, if any
    pub fn current(&self) -> Option<&DirectoryRender> {
        self.current.as_ref()
    }

    /// Fetch the data file and render every member into `target`.
    pub async fn load<T: RenderTarget + ?Sized>(&mut self, target: &mut T) -> PageOutcome {
        self.current = None;

        let collection =
            match load_collection(&self.loader, &self.source, Panel::Directory, target).await {
                Ok(collection) => collection,
                Err(kind) => return PageOutcome::Fallback(kind),
            };

        let render = render_directory(&collection, self.view_mode, &self.image_base);
        render_directory_into(target, &render);

        let count = render.len();
        info!(count, view = %self.view_mode, "Rendered member directory");
        self.current = Some(render);
        PageOutcome::Rendered { count }
    }

    /// Switch between grid and list without re-fetching.
    /// Returns the status line to announce.
    pub fn set_view<T: RenderTarget + ?Sized>(
        &mut self,
        view_mode: ViewMode,
        target: &mut T,
    ) -> String {
        self.view_mode = view_mode;
        if let Some(render) = self.current.as_mut() {
            render.set_view(view_mode);
        }
        apply_view(target, view_mode);
        view_mode.status_line()
    }
}

/// The landing page spotlight panel.
pub struct SpotlightPanel<R> {
    loader: MemberLoader,
    source: DataSource,
    image_base: String,
    rng: R,
}

impl<R: Rng> SpotlightPanel<R> {
    /// Logos are used as written in the data file unless an image base is set.
    pub fn new(loader: MemberLoader, source: DataSource, rng: R) -> Self {
        Self {
            loader,
            source,
            image_base: String::new(),
            rng,
        }
    }

    pub fn with_image_base(mut self, image_base: impl Into<String>) -> Self {
        self.image_base = image_base.into();
        self
    }

    /// Fetch the data file and draw a fresh spotlight into `target`.
    /// Every call re-fetches and redraws.
    pub async fn load<T: RenderTarget + ?Sized>(&mut self, target: &mut T) -> PageOutcome {
        let collection =
            match load_collection(&self.loader, &self.source, Panel::Spotlight, target).await {
                Ok(collection) => collection,
                Err(kind) => return PageOutcome::Fallback(kind),
            };

        match render_spotlight(&collection, &mut self.rng) {
            SpotlightOutcome::NoEligibleMembers => {
                warn!(
                    source = %self.source,
                    members = collection.len(),
                    "No gold or silver members to spotlight"
                );
                render_fallback_into(target, FallbackKind::NoEligibleMembers, Panel::Spotlight);
                PageOutcome::Fallback(FallbackKind::NoEligibleMembers)
            }
            SpotlightOutcome::Selected(records) => {
                let cards: Vec<MemberCard> = records
                    .iter()
                    .map(|record| MemberCard::from_record(record, &self.image_base))
                    .collect();
                render_spotlight_into(target, &cards);
                info!(count = cards.len(), "Rendered member spotlight");
                PageOutcome::Rendered { count: cards.len() }
            }
        }
    }
}
