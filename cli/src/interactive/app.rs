//! Interactive page browser using iocraft
//!
//! Full-height terminal app over the page registry: digit keys jump to a
//! page, arrow keys cycle, `b` walks back through the navigation history,
//! `q` exits.

use anyhow::Result;
use iocraft::prelude::*;
use pageproof_core::{page_for, site_router_config, site_routes, RoutePath, Router, RouterResult};
use std::sync::{Arc, Mutex};

use super::components::PageView;
use crate::config::PreviewConfig;

/// A shareable handle to control the router from event callbacks
#[derive(Clone)]
pub struct RouterHandle(Arc<Mutex<Router>>);

impl RouterHandle {
    /// Create a new router handle
    pub fn new(router: Router) -> Self {
        Self(Arc::new(Mutex::new(router)))
    }

    /// Navigate to a route
    pub fn navigate(&self, path: impl Into<RoutePath>) -> RouterResult<()> {
        let mut guard = self.0.lock().unwrap();
        guard.navigate(path)
    }

    /// Go back to the previous route
    pub fn go_back(&self) -> bool {
        let mut guard = self.0.lock().unwrap();
        guard.go_back()
    }

    /// Get the current route path
    pub fn current_path(&self) -> RoutePath {
        let guard = self.0.lock().unwrap();
        guard.current_path().clone()
    }
}

#[derive(Props)]
pub struct BrowserAppProps {
    /// Router handle for navigation control
    pub handle: RouterHandle,
}

impl Default for BrowserAppProps {
    fn default() -> Self {
        // The site registry is fixed and never empty, so construction
        // cannot fail here.
        let router = Router::new(site_router_config())
            .expect("site registry always contains the four pages");
        Self {
            handle: RouterHandle::new(router),
        }
    }
}

/// Interactive browser component
#[component]
pub fn BrowserApp(mut hooks: Hooks, props: &BrowserAppProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let current_path = hooks.use_state(|| props.handle.current_path());
    let should_exit = hooks.use_state(|| false);

    let routes = site_routes();

    // Handle keyboard input
    hooks.use_terminal_events({
        let handle = props.handle.clone();
        let order: Vec<RoutePath> = routes.iter().map(|route| route.path.clone()).collect();
        let mut current_path = current_path;
        let mut should_exit = should_exit;
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        should_exit.set(true);
                    }
                    KeyCode::Char('b') => {
                        if handle.go_back() {
                            current_path.set(handle.current_path());
                        }
                    }
                    KeyCode::Char(c @ '1'..='9') => {
                        let index = (c as usize) - ('1' as usize);
                        if let Some(path) = order.get(index) {
                            if handle.navigate(path.clone()).is_ok() {
                                current_path.set(handle.current_path());
                            }
                        }
                    }
                    KeyCode::Left | KeyCode::Right => {
                        let current = handle.current_path();
                        if let Some(position) = order.iter().position(|path| *path == current) {
                            let next = match code {
                                KeyCode::Right => (position + 1) % order.len(),
                                _ => (position + order.len() - 1) % order.len(),
                            };
                            if handle.navigate(order[next].clone()).is_ok() {
                                current_path.set(handle.current_path());
                            }
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let path = current_path.read().clone();
    let page = page_for(path.as_str());

    element! {
        View(
            key: "browser-container",
            flex_direction: FlexDirection::Column,
            height: 100pct,
            width: 100pct,
            padding: 1,
        ) {
            // Tab strip, one entry per page in registry order
            View(flex_direction: FlexDirection::Row, gap: 2, margin_bottom: 1) {
                #(routes.iter().enumerate().map(|(i, route)| {
                    let is_current = route.path == path;
                    let text_color = if is_current { Color::Yellow } else { Color::Grey };

                    element! {
                        Text(
                            key: format!("tab-{}", i),
                            content: format!("[{}] {}", i + 1, route.title),
                            color: text_color,
                            weight: if is_current { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }).collect::<Vec<_>>())
            }

            // Current route path
            View(margin_bottom: 1) {
                Text(content: path.to_string(), color: Color::DarkGrey)
            }

            // Page body
            #(page.map(|content| element! {
                PageView(content: content)
            }))

            // Footer hints
            View(margin_top: 1) {
                Text(
                    content: "1-4 jump · ←/→ cycle · b back · q quit",
                    color: Color::DarkGrey,
                )
            }
        }
    }
}

/// Run the interactive page browser
pub async fn run_browser(config: PreviewConfig) -> Result<()> {
    let mut router = Router::new(site_router_config().with_max_history(config.history_limit))?;
    router.navigate(config.start_route.clone())?;
    let handle = RouterHandle::new(router);

    element!(BrowserApp(handle: handle)).render_loop().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_handle_navigation() {
        let router = Router::new(site_router_config()).expect("Failed to create router");
        let handle = RouterHandle::new(router);

        assert_eq!(
            handle.current_path().as_str(),
            "/app/onboarding/complete"
        );

        handle.navigate("/demo/success").expect("Failed to navigate");
        assert_eq!(handle.current_path().as_str(), "/demo/success");

        assert!(handle.go_back());
        assert_eq!(
            handle.current_path().as_str(),
            "/app/onboarding/complete"
        );
    }

    #[test]
    fn test_default_props_open_on_the_default_route() {
        let props = BrowserAppProps::default();
        assert_eq!(
            props.handle.current_path().as_str(),
            "/app/onboarding/complete"
        );
    }

    #[test]
    fn test_browser_renders_current_page() {
        let rendered = element! {
            View(width: 140) {
                BrowserApp
            }
        }
        .to_string();

        // Opens on the default route and shows its heading plus the tab strip
        assert!(rendered.contains("/app/onboarding/complete"));
        assert!(rendered.contains("Onboarding Complete"));
        assert!(rendered.contains("[4] Account Creation Started"));
    }
}
