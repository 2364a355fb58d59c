//! Static page rendering
//!
//! Renders a page to plain terminal text at a fixed column width, for the
//! one-shot `pageproof <route>` mode and for tests.

use iocraft::prelude::*;
use pageproof_core::PageContent;

use crate::interactive::components::PageView;

/// Render a page to a string at the given column width
pub fn render_page_to_string(content: &PageContent, width: u16) -> String {
    element! {
        View(width: width, flex_direction: FlexDirection::Column) {
            PageView(content: content.clone())
        }
    }
    .to_string()
}
