use web_sys::Window;

pub(crate) const FALLBACK_VIEWPORT_WIDTH_PX: f64 = 1280.0;

/// Inner window size; falls back when there is no window or it reports 0.
pub(crate) fn viewport_size(fallback_height: f64) -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (FALLBACK_VIEWPORT_WIDTH_PX, fallback_height);
    };
    window_size(&window, fallback_height)
}

pub(crate) fn window_size(window: &Window, fallback_height: f64) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .filter(|value| *value > 0.0)
        .unwrap_or(FALLBACK_VIEWPORT_WIDTH_PX);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .filter(|value| *value > 0.0)
        .unwrap_or(fallback_height);
    (width, height)
}
