//! Page layout component
//!
//! Renders a page's fixed markup tree: heading, optional status banner,
//! descriptive paragraphs, and an optional outbound link shown as
//! `→ Label (/href)`. Link targets sit outside this fragment, so the
//! href is displayed rather than followed.

use iocraft::prelude::*;
use pageproof_core::PageContent;

use super::banner::StatusBanner;

#[derive(Default, Props)]
pub struct PageViewProps {
    /// The page content to render
    pub content: PageContent,
}

/// Page body component
#[component]
pub fn PageView(_hooks: Hooks, props: &PageViewProps) -> impl Into<AnyElement<'static>> {
    let content = &props.content;

    element! {
        View(
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: Color::DarkGrey,
            padding: 1,
        ) {
            Text(content: content.heading.clone(), weight: Weight::Bold, color: Color::Cyan)

            // Spacer
            View(height: 1)

            #(content.banner.as_ref().map(|banner| element! {
                StatusBanner(kind: banner.kind, text: banner.text.clone())
            }))

            #(content.paragraphs.iter().enumerate().map(|(i, paragraph)| element! {
                View(key: format!("paragraph-{}", i), margin_bottom: 1) {
                    Text(content: paragraph.clone())
                }
            }).collect::<Vec<_>>())

            #(content.link.as_ref().map(|link| element! {
                Text(
                    content: format!("→ {} ({})", link.label, link.href),
                    color: Color::Blue,
                    weight: Weight::Bold,
                )
            }))
        }
    }
}
