pub mod action;
pub mod catalog;
pub mod config;
pub mod input;
pub mod layout;
pub mod offset;
pub mod state;

pub use action::GalleryAction;
pub use catalog::{
    column_sets, merge_columns, CatalogColumn, CatalogLayout, GalleryImage, LayoutVariant,
    GALLERY_COLUMNS, GALLERY_LAYOUT,
};
pub use config::{ConfigError, GalleryConfig, LayoutMode, ResponsiveConfig, WeightProfile};
pub use input::{active_column_from_x, page_height, wheel_delta_px, ContainerRect, TouchTracker};
pub use layout::{compute_layout, tilt_adjusted_gap, ColumnLayout, GalleryLayout};
pub use offset::{apply_delta, normalize_offset};
pub use state::GalleryState;
