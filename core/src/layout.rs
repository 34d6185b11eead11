use crate::catalog::{merge_columns, GalleryImage};
use crate::config::GalleryConfig;
use crate::offset::normalize_offset;
use crate::state::GalleryState;

/// Number of items one loop of a column holds: enough to cover the viewport
/// plus the configured buffer, never fewer than `min_items`.
pub fn items_per_column(
    viewport_height: f64,
    item_pitch: f64,
    min_items: usize,
    buffer_items: usize,
) -> usize {
    let min_items = min_items.max(1);
    if !(item_pitch.is_finite() && item_pitch > 0.0) || !viewport_height.is_finite() {
        return min_items;
    }
    let covering = (viewport_height.max(0.0) / item_pitch).ceil() as usize;
    min_items.max(covering + buffer_items)
}

/// Cycles `images` until the list holds `count` entries.
pub fn repeat_column(images: &[GalleryImage], count: usize) -> Vec<GalleryImage> {
    if images.is_empty() {
        return Vec::new();
    }
    images.iter().copied().cycle().take(count).collect()
}

/// The base list followed by itself, so the window can cross the wrap point.
pub fn loop_items(base: &[GalleryImage]) -> Vec<GalleryImage> {
    let mut items = Vec::with_capacity(base.len() * 2);
    items.extend_from_slice(base);
    items.extend_from_slice(base);
    items
}

pub fn column_pixel_height(item_pitch: f64, item_count: usize) -> f64 {
    item_pitch * item_count as f64
}

/// Gap that still reads as `desired_gap` on screen once the group is rotated
/// by `tilt_deg`.
pub fn tilt_adjusted_gap(desired_gap: f64, tilt_deg: f64) -> f64 {
    let cos = tilt_deg.abs().to_radians().cos();
    if cos <= f64::EPSILON {
        return desired_gap;
    }
    desired_gap / cos
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnLayout {
    pub items: Vec<GalleryImage>,
    pub base_len: usize,
    pub height: f64,
    pub offset: f64,
}

impl ColumnLayout {
    pub fn translate_y(&self) -> f64 {
        -self.offset
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryLayout {
    pub columns: Vec<ColumnLayout>,
    pub column_gap: f64,
    pub item_gap: f64,
    pub image_height: f64,
    pub tilt_deg: f64,
}

/// Derives everything the view paints from the current state. `catalog`
/// holds one image set per catalog column; mobile mode merges them.
pub fn compute_layout(
    state: &GalleryState,
    config: &GalleryConfig,
    catalog: &[&[GalleryImage]],
) -> GalleryLayout {
    let merged;
    let merged_set: [&[GalleryImage]; 1];
    let sets: &[&[GalleryImage]] = if state.mode().is_mobile() {
        merged = merge_columns(catalog);
        merged_set = [merged.as_slice()];
        &merged_set
    } else {
        catalog
    };
    let pitch = config.item_pitch();
    let count = items_per_column(
        state.viewport_height(),
        pitch,
        config.min_items,
        config.buffer_items,
    );
    let columns = sets
        .iter()
        .enumerate()
        .map(|(index, images)| {
            // A set longer than the window still shows every image once.
            let base = repeat_column(images, count.max(images.len()));
            let height = column_pixel_height(pitch, base.len());
            let raw = state.offsets().get(index).copied().unwrap_or(0.0);
            ColumnLayout {
                base_len: base.len(),
                items: loop_items(&base),
                height,
                offset: normalize_offset(raw, height),
            }
        })
        .collect();
    let tilt_deg = config.tilt_for(state.mode());
    GalleryLayout {
        columns,
        column_gap: tilt_adjusted_gap(config.desired_column_gap, tilt_deg),
        item_gap: config.item_gap,
        image_height: config.image_height,
        tilt_deg,
    }
}
