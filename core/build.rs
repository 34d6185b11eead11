use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    layout: LayoutSection,
    columns: Vec<ColumnEntry>,
}

#[derive(Deserialize)]
struct LayoutSection {
    #[serde(default = "default_variant")]
    variant: String,
    #[serde(default = "default_breakpoint")]
    mobile_breakpoint_px: u32,
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            variant: default_variant(),
            mobile_breakpoint_px: default_breakpoint(),
        }
    }
}

fn default_variant() -> String {
    "fixed".to_string()
}

fn default_breakpoint() -> u32 {
    768
}

#[derive(Deserialize)]
struct ColumnEntry {
    images: Vec<ImageEntry>,
}

#[derive(Deserialize)]
struct ImageEntry {
    src: String,
    #[serde(default)]
    alt: String,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=GALLERY_CATALOG_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let catalog_path = resolve_catalog_path(workspace_root);
    println!("cargo:rerun-if-changed={}", catalog_path.display());

    let contents = fs::read_to_string(&catalog_path).unwrap_or_else(|err| {
        panic!(
            "failed to read gallery catalog at {}: {err}",
            catalog_path.display()
        )
    });

    let catalog: CatalogFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse gallery catalog at {}: {err}",
            catalog_path.display()
        )
    });

    if catalog.columns.is_empty() {
        panic!("gallery catalog {} has no columns", catalog_path.display());
    }

    validate_columns(&catalog.columns, &catalog_path);
    let layout_variant = layout_variant(&catalog.layout, &catalog_path);

    let mut output = String::new();
    writeln!(
        &mut output,
        "pub const GALLERY_LAYOUT: CatalogLayout = CatalogLayout {{"
    )
    .unwrap();
    writeln!(&mut output, "    variant: {layout_variant},").unwrap();
    writeln!(
        &mut output,
        "    mobile_breakpoint_px: {},",
        catalog.layout.mobile_breakpoint_px
    )
    .unwrap();
    writeln!(&mut output, "}};").unwrap();
    writeln!(&mut output).unwrap();
    writeln!(
        &mut output,
        "pub const GALLERY_COLUMNS: &[CatalogColumn] = &["
    )
    .unwrap();

    for column in &catalog.columns {
        writeln!(&mut output, "    CatalogColumn {{").unwrap();
        writeln!(&mut output, "        images: &[").unwrap();
        for image in &column.images {
            writeln!(&mut output, "            GalleryImage {{").unwrap();
            writeln!(&mut output, "                src: {},", rust_string(&image.src)).unwrap();
            writeln!(&mut output, "                alt: {},", rust_string(&image.alt)).unwrap();
            writeln!(&mut output, "            }},").unwrap();
        }
        writeln!(&mut output, "        ],").unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }

    writeln!(&mut output, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("gallery_catalog.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_catalog_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("GALLERY_CATALOG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("gallery/catalog.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn layout_variant(layout: &LayoutSection, catalog_path: &Path) -> &'static str {
    if layout.mobile_breakpoint_px == 0 {
        panic!(
            "layout mobile_breakpoint_px must be positive in {}",
            catalog_path.display()
        );
    }
    match layout.variant.trim().to_ascii_lowercase().as_str() {
        "fixed" => "LayoutVariant::Fixed",
        "responsive" => "LayoutVariant::Responsive",
        other => panic!(
            "unknown layout variant '{}' in {} (expected \"fixed\" or \"responsive\")",
            other,
            catalog_path.display()
        ),
    }
}

fn validate_columns(columns: &[ColumnEntry], catalog_path: &Path) {
    let mut srcs = HashSet::new();

    for (index, column) in columns.iter().enumerate() {
        if column.images.is_empty() {
            panic!(
                "gallery column {} has no images in {}",
                index,
                catalog_path.display()
            );
        }
        for image in &column.images {
            if image.src.trim().is_empty() {
                panic!(
                    "gallery column {} has an empty image src in {}",
                    index,
                    catalog_path.display()
                );
            }
            if image.src.starts_with("http://") || image.src.starts_with("https://") {
                panic!(
                    "gallery image '{}' src cannot be a URL in {}",
                    image.src,
                    catalog_path.display()
                );
            }
            if image.src.starts_with("data:") {
                panic!(
                    "gallery image src cannot be a data URL in {} (column {})",
                    catalog_path.display(),
                    index
                );
            }
            if !srcs.insert(image.src.clone()) {
                panic!(
                    "duplicate gallery image src '{}' in {}",
                    image.src,
                    catalog_path.display()
                );
            }
        }
    }
}
