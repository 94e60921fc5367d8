//! Image lightbox state and the scoped Escape-key listener that goes with it.
//! The DOM side lives in `app::lightbox`.

pub const DISMISS_KEY: &str = "Escape";

/// Which image is currently enlarged. The overlay is mounted iff this holds
/// a url.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LightboxState {
    active_image_url: Option<String>,
}

/// Where a click inside the mounted overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    /// The dimmed area around the image.
    Backdrop,
    /// The box wrapping the image, outside the image itself.
    Frame,
    Image,
}

impl LightboxState {
    pub fn active_image_url(&self) -> Option<&str> {
        self.active_image_url.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.active_image_url.is_some()
    }

    /// Opens `url`, replacing any image already shown without passing through
    /// the closed state.
    pub fn open(&mut self, url: impl Into<String>) {
        self.active_image_url = Some(url.into());
    }

    pub fn close(&mut self) {
        self.active_image_url = None;
    }

    /// Returns true if the key dismissed the overlay.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == DISMISS_KEY && self.is_open() {
            self.close();
            true
        } else {
            false
        }
    }

    /// Applies a click that reached `target`. Image and frame handlers stop
    /// propagation, so each click is seen by exactly one target. Returns true
    /// if the overlay closed.
    pub fn handle_click(&mut self, target: OverlayTarget) -> bool {
        match target {
            OverlayTarget::Backdrop | OverlayTarget::Image if self.is_open() => {
                self.close();
                true
            }
            _ => false,
        }
    }
}

/// Something that can install and remove a global key listener.
pub trait ListenerHost {
    type Handle;

    fn attach(&mut self) -> Self::Handle;
    fn detach(&mut self, handle: Self::Handle);
}

/// Owns at most one listener from `H`, tied to the url it was attached for.
///
/// [`track`](Self::track) is called with the current active url after every
/// state change; the listener is released on close, on re-targeting to a
/// different url and when the scope is dropped.
pub struct KeyListenerScope<H: ListenerHost> {
    host: H,
    current: Option<(String, H::Handle)>,
}

impl<H: ListenerHost> KeyListenerScope<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            current: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.current.is_some()
    }

    pub fn track(&mut self, active_url: Option<&str>) {
        let unchanged = match (&self.current, active_url) {
            (Some((url, _)), Some(active)) => url == active,
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return;
        }
        self.release();
        if let Some(url) = active_url {
            let handle = self.host.attach();
            self.current = Some((url.to_string(), handle));
        }
    }

    /// Brings the listener in line with `state`. The lightbox component runs
    /// this from an effect on every state change.
    pub fn sync(&mut self, state: &LightboxState) {
        self.track(state.active_image_url());
    }

    pub fn release(&mut self) {
        if let Some((_, handle)) = self.current.take() {
            self.host.detach(handle);
        }
    }
}

impl<H: ListenerHost> Drop for KeyListenerScope<H> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::{cell::Cell, rc::Rc};

    #[derive(Default, Clone)]
    struct SpyHost {
        live: Rc<Cell<usize>>,
        attached: Rc<Cell<usize>>,
    }

    impl ListenerHost for SpyHost {
        type Handle = usize;

        fn attach(&mut self) -> usize {
            self.live.set(self.live.get() + 1);
            self.attached.set(self.attached.get() + 1);
            self.attached.get()
        }

        fn detach(&mut self, _handle: usize) {
            self.live.set(self.live.get() - 1);
        }
    }

    /// A page with a lightbox, driven through the same `sync`/`release` calls
    /// the component makes. The reactive `Effect`/`on_cleanup` plumbing around
    /// them needs a browser and is not exercised here.
    struct Page {
        state: LightboxState,
        scope: KeyListenerScope<SpyHost>,
        spy: SpyHost,
        escape_handled: usize,
    }

    impl Page {
        fn new() -> Self {
            let spy = SpyHost::default();
            Self {
                state: LightboxState::default(),
                scope: KeyListenerScope::new(spy.clone()),
                spy,
                escape_handled: 0,
            }
        }

        fn sync(&mut self) {
            self.scope.sync(&self.state);
        }

        fn open(&mut self, url: &str) {
            self.state.open(url);
            self.sync();
        }

        fn close(&mut self) {
            self.state.close();
            self.sync();
        }

        // the key only reaches the handler while a listener is installed
        fn press(&mut self, key: &str) {
            if self.spy.live.get() > 0 {
                self.escape_handled += 1;
                self.state.handle_key(key);
                self.sync();
            }
        }
    }

    #[test]
    fn test_starts_closed() {
        let page = Page::new();
        assert!(!page.state.is_open());
        assert!(!page.scope.is_attached());
    }

    #[test]
    fn test_retarget_without_close() {
        let mut state = LightboxState::default();
        state.open("a.png");
        state.open("b.png");
        assert_eq!(state.active_image_url(), Some("b.png"));
    }

    #[test]
    fn test_escape_closes() {
        let mut page = Page::new();
        page.open("a.png");
        page.press("Escape");
        assert_eq!(page.state.active_image_url(), None);
        assert_eq!(page.spy.live.get(), 0);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut state = LightboxState::default();
        state.open("a.png");
        assert!(!state.handle_key("Enter"));
        assert!(!state.handle_key("escape"));
        assert_eq!(state.active_image_url(), Some("a.png"));
    }

    #[test]
    fn test_listener_removed_after_close() {
        let mut page = Page::new();
        page.open("a.png");
        assert_eq!(page.spy.live.get(), 1);
        page.close();
        assert_eq!(page.spy.live.get(), 0);

        page.press("Escape");
        page.press("Escape");
        assert_eq!(page.escape_handled, 0);
    }

    #[test]
    fn test_retarget_swaps_listener() {
        let mut page = Page::new();
        page.open("a.png");
        page.open("b.png");
        assert_eq!(page.spy.live.get(), 1);
        assert_eq!(page.spy.attached.get(), 2);

        // same url again keeps the existing listener
        page.open("b.png");
        assert_eq!(page.spy.attached.get(), 2);
    }

    #[test]
    fn test_sync_follows_state_changes() {
        let mut page = Page::new();
        page.open("a.png");
        page.open("b.png");
        page.state.handle_click(OverlayTarget::Image);
        page.sync();
        assert_eq!(page.spy.live.get(), 0);
        assert_eq!(page.spy.attached.get(), 2);

        // a closed state stays detached however often it syncs
        page.sync();
        page.scope.release();
        assert_eq!(page.spy.live.get(), 0);
    }

    #[test]
    fn test_listener_released_on_drop() {
        let spy = SpyHost::default();
        {
            let mut scope = KeyListenerScope::new(spy.clone());
            scope.track(Some("a.png"));
            assert_eq!(spy.live.get(), 1);
        }
        assert_eq!(spy.live.get(), 0);
    }

    #[test]
    fn test_image_click_closes_once() {
        let mut state = LightboxState::default();
        state.open("a.png");
        assert!(state.handle_click(OverlayTarget::Image));
        assert!(!state.handle_click(OverlayTarget::Image));
        assert!(!state.is_open());
    }

    #[test]
    fn test_frame_click_keeps_open() {
        let mut state = LightboxState::default();
        state.open("a.png");
        assert!(!state.handle_click(OverlayTarget::Frame));
        assert!(state.handle_click(OverlayTarget::Backdrop));
        assert_eq!(state, LightboxState::default());
    }
}
