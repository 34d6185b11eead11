use gloo::console;
use web_sys::HtmlElement;

const OVERFLOW: &str = "overflow";

/// Holds `body { overflow: hidden }` for as long as it lives and puts the
/// previous inline value back on drop.
pub(crate) struct ScrollLock {
    body: HtmlElement,
    previous: String,
}

impl ScrollLock {
    pub(crate) fn acquire() -> Option<Self> {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            console::warn!("scroll lock: document body unavailable");
            return None;
        };
        let style = body.style();
        let previous = style.get_property_value(OVERFLOW).unwrap_or_default();
        if style.set_property(OVERFLOW, "hidden").is_err() {
            console::warn!("scroll lock: failed to set body overflow");
            return None;
        }
        console::log!("scroll lock: acquired", previous.clone());
        Some(Self { body, previous })
    }

    pub(crate) fn previous(&self) -> &str {
        &self.previous
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let previous = self.previous();
        let restored = if previous.is_empty() {
            style.remove_property(OVERFLOW).map(|_| ())
        } else {
            style.set_property(OVERFLOW, previous)
        };
        if restored.is_err() {
            console::warn!("scroll lock: failed to restore body overflow");
            return;
        }
        console::log!("scroll lock: released");
    }
}
