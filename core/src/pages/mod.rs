//! The four static pages and their route registry
//!
//! Every page here renders fixed copy. The functions take no input and
//! return the same content on every call; the registry wires them into
//! the router so the CLI and the interactive browser agree on which
//! paths exist.

pub mod content;

pub use content::{Banner, BannerKind, PageContent, PageLink};

use crate::router::{Route, RouterConfig};

/// Path of the onboarding completion page
pub const ONBOARDING_COMPLETE: &str = "/app/onboarding/complete";
/// Path of the billing history page
pub const BILLING_HISTORY: &str = "/app/settings/billing/history";
/// Path of the demo request confirmation page
pub const DEMO_SUCCESS: &str = "/demo/success";
/// Path of the account creation confirmation page
pub const START_SUCCESS: &str = "/start/success";

/// Onboarding completion page
pub fn onboarding_complete() -> PageContent {
    PageContent::new("Onboarding Complete")
        .with_banner(BannerKind::Ok, "Your workspace is ready.")
        .with_paragraph(
            "You have finished setting up your account. Invite your teammates, \
             connect an integration, or head straight to the dashboard to get going.",
        )
}

/// Billing history page
pub fn billing_history() -> PageContent {
    PageContent::new("Billing History")
        .with_paragraph("Invoices and receipts for your subscription appear here.")
        .with_paragraph(
            "Nothing to show yet. Your first invoice is issued at the end of the \
             current billing cycle, and every statement stays available for download \
             afterwards.",
        )
}

/// Demo request confirmation page
pub fn demo_success() -> PageContent {
    PageContent::new("Demo Request Received")
        .with_paragraph(
            "Thanks for reaching out. Someone from our team will contact you within \
             one business day to schedule your walkthrough.",
        )
        .with_paragraph("In the meantime, you can compare our plans.")
        .with_link("/pricing", "Pricing")
}

/// Account creation confirmation page
pub fn start_success() -> PageContent {
    PageContent::new("Account Creation Started")
        .with_paragraph(
            "We are provisioning your account. You will receive a confirmation email \
             as soon as it is ready, usually within a couple of minutes.",
        )
        .with_paragraph("While you wait, our guides cover everything from setup to go-live.")
        .with_link("/resources", "Resources")
}

/// All previewable routes, in display order
pub fn site_routes() -> Vec<Route> {
    vec![
        Route::new(ONBOARDING_COMPLETE, "Onboarding Complete")
            .with_description("Confirmation shown once account setup is finished")
            .as_default(),
        Route::new(BILLING_HISTORY, "Billing History")
            .with_description("Invoices and receipts for the subscription"),
        Route::new(DEMO_SUCCESS, "Demo Request Received")
            .with_description("Confirmation after requesting a product demo"),
        Route::new(START_SUCCESS, "Account Creation Started")
            .with_description("Confirmation while a new account is provisioned"),
    ]
}

/// Router configuration covering every page in the fragment
pub fn site_router_config() -> RouterConfig {
    site_routes()
        .into_iter()
        .fold(RouterConfig::new(), |config, route| config.add_route(route))
}

/// Look up the content for a route path
pub fn page_for(path: &str) -> Option<PageContent> {
    match path {
        ONBOARDING_COMPLETE => Some(onboarding_complete()),
        BILLING_HISTORY => Some(billing_history()),
        DEMO_SUCCESS => Some(demo_success()),
        START_SUCCESS => Some(start_success()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Router;

    #[test]
    fn test_registry_covers_exactly_the_four_pages() {
        let routes = site_routes();
        assert_eq!(routes.len(), 4);

        let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/app/onboarding/complete",
                "/app/settings/billing/history",
                "/demo/success",
                "/start/success",
            ]
        );

        // Every registered path resolves to content, and only those paths do
        for path in paths {
            assert!(page_for(path).is_some(), "no content for {path}");
        }
        assert!(page_for("/pricing").is_none());
        assert!(page_for("/").is_none());
    }

    #[test]
    fn test_router_opens_on_onboarding_complete() {
        let router = Router::new(site_router_config()).expect("Failed to create router");
        assert_eq!(router.current_path().as_str(), ONBOARDING_COMPLETE);
    }

    #[test]
    fn test_headings_match_the_route_titles() {
        for route in site_routes() {
            let page = page_for(route.path.as_str()).expect("registered page");
            assert_eq!(page.heading, route.title);
        }
    }

    #[test]
    fn test_onboarding_complete_shows_ok_banner() {
        let page = onboarding_complete();
        let banner = page.banner.expect("onboarding page has a banner");
        assert_eq!(banner.kind, BannerKind::Ok);
        assert!(!banner.text.is_empty());
        assert!(page.link.is_none());
    }

    #[test]
    fn test_billing_history_is_descriptive_text_only() {
        let page = billing_history();
        assert_eq!(page.heading, "Billing History");
        assert!(!page.paragraphs.is_empty());
        assert!(page.banner.is_none());
        assert!(page.link.is_none());
    }

    #[test]
    fn test_demo_success_links_to_pricing() {
        let page = demo_success();
        assert_eq!(page.heading, "Demo Request Received");
        let link = page.link.expect("demo page links out");
        assert_eq!(link.href, "/pricing");
        assert_eq!(link.label, "Pricing");
    }

    #[test]
    fn test_start_success_links_to_resources() {
        let page = start_success();
        assert_eq!(page.heading, "Account Creation Started");
        let link = page.link.expect("start page links out");
        assert_eq!(link.href, "/resources");
        assert_eq!(link.label, "Resources");
    }

    #[test]
    fn test_pages_are_fixed() {
        // Pure functions: two calls produce identical content
        assert_eq!(demo_success(), demo_success());
        assert_eq!(onboarding_complete(), onboarding_complete());
    }
}
