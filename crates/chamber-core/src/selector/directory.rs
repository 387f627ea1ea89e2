use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{MemberCollection, MemberRecord, MembershipTier};
use crate::utils::join_image_path;

/// Layout of the member directory container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// CSS class applied to the directory container
    pub fn as_class(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    /// Status line announced when the view changes
    pub fn status_line(self) -> String {
        format!("Viewing members in {} mode.", self.as_class().to_uppercase())
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_class())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(format!("unknown view mode '{}' (expected grid or list)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct CardImage {
    pub src: String,
    pub alt: String,
}

/// Everything a card needs to display one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct MemberCard {
    pub name: String,
    pub image: Option<CardImage>,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub level_label: String,
    pub tier: MembershipTier,
}

impl MemberCard {
    /// Build a card, prefixing a relative logo path with `image_base`.
    pub fn from_record(record: &MemberRecord, image_base: &str) -> Self {
        Self {
            name: record.name.clone(),
            image: record.logo.as_deref().map(|logo| CardImage {
                src: join_image_path(image_base, logo),
                alt: format!("{} logo", record.name),
            }),
            address: record.address.clone(),
            phone: record.phone.clone(),
            website: record.website.clone(),
            level_label: record.level_label().to_string(),
            tier: record.tier(),
        }
    }
}

/// The full directory: one card per member, in data file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRender {
    view_mode: ViewMode,
    cards: Vec<MemberCard>,
}

impl DirectoryRender {
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn cards(&self) -> &[MemberCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Re-tag the layout. Cards and their order are untouched.
    pub fn set_view(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn with_view(mut self, view_mode: ViewMode) -> Self {
        self.set_view(view_mode);
        self
    }

    pub fn status_line(&self) -> String {
        self.view_mode.status_line()
    }
}

/// Project every member into a card, without filtering or reordering.
pub fn render_directory(
    collection: &MemberCollection,
    view_mode: ViewMode,
    image_base: &str,
) -> DirectoryRender {
    DirectoryRender {
        view_mode,
        cards: collection
            .iter()
            .map(|record| MemberCard::from_record(record, image_base))
            .collect(),
    }
}
