use leptos::use_context;
use std::rc::Rc;

pub trait Navigate {
    fn navigate(&self, path: &str);
}

/// Full page navigation through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl Navigate for BrowserLocation {
    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window object; cannot navigate to {}", path);
            return;
        };
        if window.location().set_href(path).is_err() {
            log::warn!("Navigation to {} was rejected", path);
        }
    }
}

#[derive(Clone)]
pub struct Navigator(Rc<dyn Navigate>);

impl Navigator {
    pub fn new(inner: Rc<dyn Navigate>) -> Self {
        Self(inner)
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserLocation))
    }

    pub fn go(&self, path: &str) {
        log::info!("Navigating to {}", path);
        self.0.navigate(path);
    }
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().unwrap_or_else(Navigator::browser)
}
