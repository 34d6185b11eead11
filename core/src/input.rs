pub const WHEEL_LINE_PX: f64 = 16.0;

pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

/// Bounding box of the gallery container in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.left.is_finite()
    }
}

/// Column under `client_x`, clamped to `[0, columns - 1]`. Falls back to
/// `fallback` when the container is not measurable.
pub fn active_column_from_x(
    client_x: f64,
    rect: Option<ContainerRect>,
    columns: usize,
    fallback: usize,
) -> usize {
    let columns = columns.max(1);
    let Some(rect) = rect.filter(ContainerRect::is_usable) else {
        return fallback.min(columns - 1);
    };
    if !client_x.is_finite() {
        return fallback.min(columns - 1);
    }
    let rel_x = (client_x - rect.left).max(0.0).min((rect.width - 1.0).max(0.0));
    let width_per_col = rect.width / columns as f64;
    let index = (rel_x / width_per_col).floor() as usize;
    index.min(columns - 1)
}

/// Height used for page-mode wheel deltas: the container when it has a
/// measurable height, `fallback` otherwise.
pub fn page_height(rect: Option<ContainerRect>, fallback: f64) -> f64 {
    rect.map(|rect| rect.height)
        .filter(|height| height.is_finite() && *height > 0.0)
        .unwrap_or(fallback)
}

/// Converts a wheel delta to pixels according to the DOM `deltaMode`.
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, page_height: f64) -> f64 {
    match delta_mode {
        DOM_DELTA_LINE => delta_y * WHEEL_LINE_PX,
        DOM_DELTA_PAGE => delta_y * page_height,
        _ => delta_y,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

/// Last recorded touch position. Deltas are incremental between moves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchTracker {
    last: Option<TouchPoint>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self { last: None }
    }

    pub fn start(&mut self, x: f64, y: f64) {
        self.last = Some(TouchPoint { x, y });
    }

    /// Returns the scroll delta (finger moving up is positive) and records
    /// the new position. `None` without a preceding [`TouchTracker::start`].
    pub fn advance(&mut self, x: f64, y: f64) -> Option<f64> {
        let last = self.last?;
        let delta = last.y - y;
        self.last = Some(TouchPoint { x, y });
        Some(delta)
    }

    pub fn end(&mut self) {
        self.last = None;
    }

    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }
}
