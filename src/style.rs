use driftwall_core::{ColumnLayout, GalleryLayout};

pub(crate) const CONTAINER_STYLE: &str =
    "height: 100vh; width: 100%; background: #000; overflow: hidden; touch-action: none;";
pub(crate) const COLUMN_STYLE: &str = "flex: 1 1 0%; min-width: 0;";
pub(crate) const IMAGE_STYLE: &str = "display: block; width: 100%; height: 100%; \
     object-fit: cover; object-position: top; border-radius: 12px;";

pub(crate) fn fmt_f64(value: f64) -> String {
    format!("{:.3}", value)
}

pub(crate) fn group_style(layout: &GalleryLayout) -> String {
    format!(
        "display: flex; height: 100%; padding: 24px; box-sizing: border-box; \
         will-change: transform; gap: {}px; transform: rotate({}deg); \
         transform-origin: center center;",
        fmt_f64(layout.column_gap),
        fmt_f64(layout.tilt_deg)
    )
}

pub(crate) fn track_style(column: &ColumnLayout, item_gap: f64) -> String {
    format!(
        "display: flex; flex-direction: column; gap: {}px; will-change: transform; \
         transform: translateY({}px);",
        fmt_f64(item_gap),
        fmt_f64(column.translate_y())
    )
}

pub(crate) fn tile_style(image_height: f64) -> String {
    format!(
        "height: {}px; flex-shrink: 0; overflow: hidden; border-radius: 12px;",
        fmt_f64(image_height)
    )
}
