//! Common types shared across tools for type safety without dependencies

use serde::{Deserialize, Serialize};

/// Links shown on the trailing company-info panel.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InfoLinks {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub privacy: String,
    #[serde(default)]
    pub law: String,
}

/// One position in the ordered content sequence of a swipe page.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentSlot {
    Image { url: String },
    Video { url: String },
    Markup { markup: String },
    Info { links: InfoLinks },
}

/// Discriminant of a [`ContentSlot`].
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SlotKind {
    Image,
    Video,
    Markup,
    Info,
}

impl ContentSlot {
    pub fn image(url: impl Into<String>) -> Self {
        Self::Image { url: url.into() }
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self::Video { url: url.into() }
    }

    pub fn markup(markup: impl Into<String>) -> Self {
        Self::Markup {
            markup: markup.into(),
        }
    }

    pub fn kind(&self) -> SlotKind {
        match self {
            Self::Image { .. } => SlotKind::Image,
            Self::Video { .. } => SlotKind::Video,
            Self::Markup { .. } => SlotKind::Markup,
            Self::Info { .. } => SlotKind::Info,
        }
    }

    /// URL of an image or video slot.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Image { url } | Self::Video { url } => Some(url),
            _ => None,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}
