use crate::action::GalleryAction;
use crate::config::{GalleryConfig, LayoutMode};
use crate::input::{active_column_from_x, ContainerRect, TouchTracker};
use crate::offset::apply_delta;

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    offsets: Vec<f64>,
    active_column: usize,
    mode: LayoutMode,
    catalog_columns: usize,
    viewport_height: f64,
    touch: TouchTracker,
}

impl GalleryState {
    pub fn new(
        config: &GalleryConfig,
        catalog_columns: usize,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Self {
        let mode = config.layout_mode_for_width(viewport_width);
        let columns = config.column_count_for(mode, catalog_columns);
        Self {
            offsets: vec![0.0; columns],
            active_column: columns / 2,
            mode,
            catalog_columns,
            viewport_height: sanitize_height(viewport_height, config),
            touch: TouchTracker::new(),
        }
    }

    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    pub fn active_column(&self) -> usize {
        self.active_column
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn column_count(&self) -> usize {
        self.offsets.len()
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Applies one input action. Returns whether anything observable changed.
    pub fn apply(&mut self, action: GalleryAction, config: &GalleryConfig) -> bool {
        match action {
            GalleryAction::Wheel {
                client_x,
                delta_y,
                rect,
            } => {
                let active_changed = self.update_active(client_x, rect);
                let moved = self.scroll(delta_y, config);
                active_changed || moved
            }
            GalleryAction::PointerMove { client_x, rect } => {
                if self.mode.is_mobile() {
                    return false;
                }
                self.update_active(client_x, rect)
            }
            GalleryAction::TouchStart {
                client_x,
                client_y,
                rect,
            } => {
                self.touch.start(client_x, client_y);
                self.update_active(client_x, rect)
            }
            GalleryAction::TouchMove {
                client_x,
                client_y,
                rect,
            } => {
                let Some(delta) = self.touch.advance(client_x, client_y) else {
                    return false;
                };
                let active_changed = self.update_active(client_x, rect);
                let moved = self.scroll(delta, config);
                active_changed || moved
            }
            GalleryAction::TouchEnd => {
                self.touch.end();
                false
            }
            GalleryAction::Resize { width, height } => self.resize(width, height, config),
        }
    }

    fn update_active(&mut self, client_x: f64, rect: Option<ContainerRect>) -> bool {
        let next = active_column_from_x(client_x, rect, self.column_count(), self.active_column);
        let changed = next != self.active_column;
        self.active_column = next;
        changed
    }

    fn scroll(&mut self, delta: f64, config: &GalleryConfig) -> bool {
        if !delta.is_finite() || delta == 0.0 {
            return false;
        }
        let weights = config.weights_for(self.mode);
        apply_delta(&mut self.offsets, self.active_column, delta, weights);
        true
    }

    fn resize(&mut self, width: f64, height: f64, config: &GalleryConfig) -> bool {
        let height = sanitize_height(height, config);
        let mode = config.layout_mode_for_width(width);
        let height_changed = height != self.viewport_height;
        self.viewport_height = height;
        if mode == self.mode {
            return height_changed;
        }
        let columns = config.column_count_for(mode, self.catalog_columns);
        self.mode = mode;
        self.offsets = vec![0.0; columns];
        self.active_column = self.active_column.min(columns - 1);
        self.touch.end();
        true
    }
}

fn sanitize_height(height: f64, config: &GalleryConfig) -> f64 {
    if height.is_finite() && height > 0.0 {
        height
    } else {
        config.fallback_viewport_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_middle_column() {
        let state = GalleryState::new(&GalleryConfig::fixed(), 3, 1280.0, 800.0);
        assert_eq!(state.active_column(), 1);
        assert_eq!(state.offsets(), &[0.0, 0.0, 0.0]);
        assert_eq!(state.mode(), LayoutMode::Desktop);
    }

    #[test]
    fn zero_height_uses_fallback() {
        let config = GalleryConfig::fixed();
        let state = GalleryState::new(&config, 3, 1280.0, 0.0);
        assert_eq!(state.viewport_height(), config.fallback_viewport_height);
    }

    #[test]
    fn zero_delta_reports_no_change() {
        let config = GalleryConfig::fixed();
        let mut state = GalleryState::new(&config, 3, 1280.0, 800.0);
        let changed = state.apply(
            GalleryAction::Wheel {
                client_x: 0.0,
                delta_y: 0.0,
                rect: None,
            },
            &config,
        );
        assert!(!changed);
    }

    #[test]
    fn mobile_ignores_pointer_move() {
        let config = GalleryConfig::responsive(768.0);
        let mut state = GalleryState::new(&config, 3, 400.0, 800.0);
        assert_eq!(state.column_count(), 1);
        let changed = state.apply(
            GalleryAction::PointerMove {
                client_x: 390.0,
                rect: None,
            },
            &config,
        );
        assert!(!changed);
        assert_eq!(state.active_column(), 0);
    }
}
