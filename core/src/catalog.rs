#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct CatalogColumn {
    pub images: &'static [GalleryImage],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutVariant {
    /// Column count never changes.
    Fixed,
    /// Narrow viewports merge every column into one.
    Responsive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogLayout {
    pub variant: LayoutVariant,
    pub mobile_breakpoint_px: u32,
}

include!(concat!(env!("OUT_DIR"), "/gallery_catalog.rs"));

pub fn column_sets() -> Vec<&'static [GalleryImage]> {
    GALLERY_COLUMNS.iter().map(|column| column.images).collect()
}

/// All images in column order, the single column of the narrow layout.
pub fn merge_columns(columns: &[&[GalleryImage]]) -> Vec<GalleryImage> {
    columns
        .iter()
        .flat_map(|images| images.iter().copied())
        .collect()
}
