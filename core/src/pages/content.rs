//! Fixed content model for the static pages
//!
//! A page is a pure function from no input to one of these values. Nothing
//! here performs I/O and nothing can fail; the types only describe the
//! markup tree a page renders.

use serde::{Deserialize, Serialize};

/// Status kind accepted by the banner widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Ok,
    Info,
    Warn,
    Error,
}

/// Inline status notice shown near the top of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    /// Status kind, controls the banner styling
    pub kind: BannerKind,
    /// Notice text
    pub text: String,
}

impl Banner {
    /// Create a new banner
    pub fn new(kind: BannerKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Outbound navigation link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLink {
    /// Target path, e.g. `/pricing`
    pub href: String,
    /// Visible link text
    pub label: String,
}

impl PageLink {
    /// Create a new link
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Fixed markup tree produced by a page: a heading, descriptive
/// paragraphs, and optionally a status banner and one outbound link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// Page heading
    pub heading: String,
    /// Descriptive paragraphs, in display order
    #[serde(default)]
    pub paragraphs: Vec<String>,
    /// Optional status banner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<Banner>,
    /// Optional outbound link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<PageLink>,
}

impl PageContent {
    /// Create a new page with the given heading
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            paragraphs: Vec::new(),
            banner: None,
            link: None,
        }
    }

    /// Append a descriptive paragraph
    pub fn with_paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(text.into());
        self
    }

    /// Set the status banner
    pub fn with_banner(mut self, kind: BannerKind, text: impl Into<String>) -> Self {
        self.banner = Some(Banner::new(kind, text));
        self
    }

    /// Set the outbound link
    pub fn with_link(mut self, href: impl Into<String>, label: impl Into<String>) -> Self {
        self.link = Some(PageLink::new(href, label));
        self
    }
}
