//! Navigation capability handed to feature pages through context.
//!
//! Pages never touch the tab store or `window.location` directly, which keeps
//! their logic testable with a recording fake.

use leptos::prelude::*;
use std::sync::Arc;

use super::global_context::AppGlobalContext;

pub trait Navigator: Send + Sync {
    /// Open (or focus) the tab registered under `key`
    fn open(&self, key: &str, title: &str);

    fn close(&self, key: &str);

    /// Reload the data shown by the host views
    fn reload(&self);

    /// Full page reload, last resort after a render failure
    fn reload_page(&self);
}

#[derive(Clone)]
pub struct NavigatorHandle(Arc<dyn Navigator>);

impl NavigatorHandle {
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        Self(Arc::new(navigator))
    }

    pub fn open(&self, key: &str, title: &str) {
        self.0.open(key, title);
    }

    pub fn close(&self, key: &str) {
        self.0.close(key);
    }

    pub fn reload(&self) {
        self.0.reload();
    }

    pub fn reload_page(&self) {
        self.0.reload_page();
    }
}

/// Production navigator backed by the tab store
pub struct TabNavigator {
    tabs: AppGlobalContext,
}

impl TabNavigator {
    pub fn new(tabs: AppGlobalContext) -> Self {
        Self { tabs }
    }
}

impl Navigator for TabNavigator {
    fn open(&self, key: &str, title: &str) {
        self.tabs.open_tab(key, title);
    }

    fn close(&self, key: &str) {
        self.tabs.close_tab(key);
    }

    fn reload(&self) {
        self.tabs.request_refresh();
    }

    fn reload_page(&self) {
        match web_sys::window().map(|w| w.location().reload()) {
            Some(Ok(())) => {}
            Some(Err(e)) => log::error!("page reload failed: {:?}", e),
            None => log::error!("page reload failed: no window"),
        }
    }
}

pub fn use_navigator() -> NavigatorHandle {
    use_context::<NavigatorHandle>().expect("NavigatorHandle not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording(Mutex<Vec<String>>);

    impl Navigator for Recording {
        fn open(&self, key: &str, _title: &str) {
            self.0.lock().unwrap().push(format!("open:{}", key));
        }
        fn close(&self, key: &str) {
            self.0.lock().unwrap().push(format!("close:{}", key));
        }
        fn reload(&self) {
            self.0.lock().unwrap().push("reload".into());
        }
        fn reload_page(&self) {
            self.0.lock().unwrap().push("reload_page".into());
        }
    }

    #[test]
    fn handle_delegates_to_the_injected_navigator() {
        let recording = Arc::new(Recording::default());
        let handle = NavigatorHandle(recording.clone());
        handle.open("a001_screen", "Screens");
        handle.reload();
        handle.close("a001_screen");
        assert_eq!(
            *recording.0.lock().unwrap(),
            vec!["open:a001_screen", "reload", "close:a001_screen"]
        );
    }
}
