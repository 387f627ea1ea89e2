//! Render adapters.
//!
//! Selector output is written into a `RenderTarget`, a DOM-like container
//! that supports replacing all children and appending one child. Every
//! render clears the target first so a stale partial render never
//! survives. `HtmlContainer` is the in-memory target used by the CLI and
//! tests; it serializes to an HTML fragment.

pub mod cards;
pub mod element;

pub use element::{Element, Node};

use crate::selector::{DirectoryRender, MemberCard, ViewMode};

/// DOM-like render target.
pub trait RenderTarget {
    /// Remove every child, then insert `children` in order.
    fn replace_children(&mut self, children: Vec<Element>);

    fn append(&mut self, child: Element);

    /// Replace the container's class list.
    fn set_classes(&mut self, classes: &[&str]);
}

/// Which panel a render is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Directory,
    Spotlight,
}

impl Panel {
    fn base_class(self) -> &'static str {
        match self {
            Panel::Directory => "members",
            Panel::Spotlight => "spotlights",
        }
    }
}

/// User-visible fallback states. Each points at a different fix, so they
/// render with distinct text and classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackKind {
    /// The data file could not be fetched or is not valid JSON.
    DataUnavailable,
    /// The data loaded but no member is gold or silver.
    NoEligibleMembers,
    /// The data loaded but holds no members in a recognized place.
    NoData,
}

impl FallbackKind {
    pub fn as_class(self) -> &'static str {
        match self {
            FallbackKind::DataUnavailable => "data-unavailable",
            FallbackKind::NoEligibleMembers => "no-eligible-members",
            FallbackKind::NoData => "no-data",
        }
    }

    pub fn message(self, panel: Panel) -> &'static str {
        match (self, panel) {
            (FallbackKind::DataUnavailable, Panel::Directory) => {
                "Sorry, member data could not be loaded."
            }
            (FallbackKind::DataUnavailable, Panel::Spotlight) => "Spotlights unavailable.",
            (FallbackKind::NoEligibleMembers, _) => {
                "No gold or silver members to spotlight right now."
            }
            (FallbackKind::NoData, _) => "No member data available.",
        }
    }
}

/// In-memory container that serializes to HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlContainer {
    tag: &'static str,
    id: String,
    classes: Vec<String>,
    children: Vec<Element>,
}

impl HtmlContainer {
    pub fn new(tag: &'static str, id: impl Into<String>) -> Self {
        Self {
            tag,
            id: id.into(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn to_html(&self) -> String {
        let mut container = Element::new(self.tag).attr("id", self.id.as_str());
        if !self.classes.is_empty() {
            container = container.class(self.classes.join(" "));
        }
        for child in &self.children {
            container = container.child(child.clone());
        }
        container.to_html()
    }
}

impl RenderTarget for HtmlContainer {
    fn replace_children(&mut self, children: Vec<Element>) {
        self.children = children;
    }

    fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    fn set_classes(&mut self, classes: &[&str]) {
        self.classes = classes.iter().map(|c| c.to_string()).collect();
    }
}

pub fn fallback_element(kind: FallbackKind, panel: Panel) -> Element {
    Element::new("p")
        .class(format!("fallback fallback-{}", kind.as_class()))
        .text(kind.message(panel))
}

/// Tag the directory container with the view mode, leaving its cards alone.
pub fn apply_view<T: RenderTarget + ?Sized>(target: &mut T, view_mode: ViewMode) {
    target.set_classes(&[Panel::Directory.base_class(), view_mode.as_class()]);
}

pub fn render_directory_into<T: RenderTarget + ?Sized>(target: &mut T, render: &DirectoryRender) {
    apply_view(target, render.view_mode());
    target.replace_children(Vec::new());
    for card in render.cards() {
        target.append(cards::directory_card(card));
    }
}

pub fn render_spotlight_into<T: RenderTarget + ?Sized>(target: &mut T, selected: &[MemberCard]) {
    target.set_classes(&[Panel::Spotlight.base_class()]);
    target.replace_children(Vec::new());
    for card in selected {
        target.append(cards::spotlight_card(card));
    }
}

pub fn render_fallback_into<T: RenderTarget + ?Sized>(
    target: &mut T,
    kind: FallbackKind,
    panel: Panel,
) {
    target.set_classes(&[panel.base_class()]);
    target.replace_children(vec![fallback_element(kind, panel)]);
}
