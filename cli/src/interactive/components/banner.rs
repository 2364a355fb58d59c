//! Inline status banner component
//!
//! Accepts a status kind and text and renders an appropriately styled
//! inline notice.

use iocraft::prelude::*;
use pageproof_core::BannerKind;

#[derive(Props)]
pub struct StatusBannerProps {
    /// Status kind, controls icon and color
    pub kind: BannerKind,
    /// Notice text
    pub text: String,
}

impl Default for StatusBannerProps {
    fn default() -> Self {
        Self {
            kind: BannerKind::Info,
            text: String::new(),
        }
    }
}

/// Icon and color for each banner kind
fn banner_style(kind: BannerKind) -> (&'static str, Color) {
    match kind {
        BannerKind::Ok => ("✓", Color::Green),
        BannerKind::Info => ("i", Color::Cyan),
        BannerKind::Warn => ("!", Color::Yellow),
        BannerKind::Error => ("✗", Color::Red),
    }
}

/// Status banner component
#[component]
pub fn StatusBanner(_hooks: Hooks, props: &StatusBannerProps) -> impl Into<AnyElement<'static>> {
    let (icon, color) = banner_style(props.kind);

    element! {
        View(margin_bottom: 1) {
            Text(
                content: format!("{} {}", icon, props.text),
                color: color,
                weight: Weight::Bold,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_style_per_kind() {
        assert_eq!(banner_style(BannerKind::Ok), ("✓", Color::Green));
        assert_eq!(banner_style(BannerKind::Info), ("i", Color::Cyan));
        assert_eq!(banner_style(BannerKind::Warn), ("!", Color::Yellow));
        assert_eq!(banner_style(BannerKind::Error), ("✗", Color::Red));
    }

    #[test]
    fn test_banner_renders_icon_and_text() {
        let rendered = element! {
            StatusBanner(kind: BannerKind::Ok, text: "Your workspace is ready.".to_string())
        }
        .to_string();

        assert!(rendered.contains("✓"));
        assert!(rendered.contains("Your workspace is ready."));
    }
}
