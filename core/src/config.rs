use std::fmt;

use crate::catalog::{LayoutVariant, GALLERY_LAYOUT};

pub const IMAGE_HEIGHT_PX: f64 = 288.0;
pub const ITEM_GAP_PX: f64 = 32.0;
pub const DESIRED_COLUMN_GAP_PX: f64 = 24.0;
pub const TILT_DEG: f64 = -2.5;
pub const MOBILE_TILT_DEG: f64 = 0.0;
pub const MIN_ITEMS_PER_COLUMN: usize = 4;
pub const BUFFER_ITEMS: usize = 2;
pub const FALLBACK_VIEWPORT_HEIGHT_PX: f64 = 800.0;
pub const FIXED_MIN_WEIGHT: f64 = 0.2;
pub const RESPONSIVE_MIN_WEIGHT: f64 = 0.3;
pub const WEIGHT_FALLOFF: f64 = 0.4;
pub const TILT_LIMIT_DEG: f64 = 90.0;

/// Distance-based scroll weighting: `max(min_weight, 1 - falloff * distance)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightProfile {
    pub min_weight: f64,
    pub falloff: f64,
}

impl WeightProfile {
    pub const UNIFORM: WeightProfile = WeightProfile {
        min_weight: 1.0,
        falloff: 0.0,
    };

    pub fn weight(&self, distance: usize) -> f64 {
        (1.0 - self.falloff * distance as f64).max(self.min_weight)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponsiveConfig {
    pub breakpoint_px: f64,
    pub desktop_weights: WeightProfile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Desktop,
    Mobile,
}

impl LayoutMode {
    pub fn is_mobile(self) -> bool {
        matches!(self, LayoutMode::Mobile)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    pub image_height: f64,
    pub item_gap: f64,
    pub desired_column_gap: f64,
    pub tilt_deg: f64,
    pub mobile_tilt_deg: f64,
    pub min_items: usize,
    pub buffer_items: usize,
    pub fallback_viewport_height: f64,
    pub desktop_weights: WeightProfile,
    pub responsive: Option<ResponsiveConfig>,
}

impl GalleryConfig {
    pub fn fixed() -> Self {
        Self {
            image_height: IMAGE_HEIGHT_PX,
            item_gap: ITEM_GAP_PX,
            desired_column_gap: DESIRED_COLUMN_GAP_PX,
            tilt_deg: TILT_DEG,
            mobile_tilt_deg: MOBILE_TILT_DEG,
            min_items: MIN_ITEMS_PER_COLUMN,
            buffer_items: BUFFER_ITEMS,
            fallback_viewport_height: FALLBACK_VIEWPORT_HEIGHT_PX,
            desktop_weights: WeightProfile {
                min_weight: FIXED_MIN_WEIGHT,
                falloff: WEIGHT_FALLOFF,
            },
            responsive: None,
        }
    }

    pub fn responsive(breakpoint_px: f64) -> Self {
        let desktop_weights = WeightProfile {
            min_weight: RESPONSIVE_MIN_WEIGHT,
            falloff: WEIGHT_FALLOFF,
        };
        Self {
            desktop_weights,
            responsive: Some(ResponsiveConfig {
                breakpoint_px,
                desktop_weights,
            }),
            ..Self::fixed()
        }
    }

    pub fn from_catalog() -> Self {
        match GALLERY_LAYOUT.variant {
            LayoutVariant::Fixed => Self::fixed(),
            LayoutVariant::Responsive => {
                Self::responsive(GALLERY_LAYOUT.mobile_breakpoint_px as f64)
            }
        }
    }

    pub fn item_pitch(&self) -> f64 {
        self.image_height + self.item_gap
    }

    pub fn layout_mode_for_width(&self, width: f64) -> LayoutMode {
        match self.responsive {
            Some(responsive) if width < responsive.breakpoint_px => LayoutMode::Mobile,
            _ => LayoutMode::Desktop,
        }
    }

    pub fn weights_for(&self, mode: LayoutMode) -> WeightProfile {
        match (mode, self.responsive) {
            (LayoutMode::Mobile, Some(_)) => WeightProfile::UNIFORM,
            (LayoutMode::Desktop, Some(responsive)) => responsive.desktop_weights,
            (_, None) => self.desktop_weights,
        }
    }

    pub fn tilt_for(&self, mode: LayoutMode) -> f64 {
        if mode.is_mobile() {
            self.mobile_tilt_deg
        } else {
            self.tilt_deg
        }
    }

    pub fn column_count_for(&self, mode: LayoutMode, catalog_columns: usize) -> usize {
        if mode.is_mobile() {
            1
        } else {
            catalog_columns.max(1)
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.image_height.is_finite() && self.image_height > 0.0) {
            return Err(ConfigError::InvalidImageHeight(self.image_height));
        }
        for (field, value) in [
            ("item_gap", self.item_gap),
            ("desired_column_gap", self.desired_column_gap),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidGap { field, value });
            }
        }
        for tilt in [self.tilt_deg, self.mobile_tilt_deg] {
            if !tilt.is_finite() || tilt.abs() >= TILT_LIMIT_DEG {
                return Err(ConfigError::InvalidTilt(tilt));
            }
        }
        if self.min_items == 0 {
            return Err(ConfigError::ZeroMinItems);
        }
        if !(self.fallback_viewport_height.is_finite() && self.fallback_viewport_height > 0.0) {
            return Err(ConfigError::InvalidFallbackHeight(self.fallback_viewport_height));
        }
        validate_weights(self.desktop_weights)?;
        if let Some(responsive) = self.responsive {
            if !(responsive.breakpoint_px.is_finite() && responsive.breakpoint_px > 0.0) {
                return Err(ConfigError::InvalidBreakpoint(responsive.breakpoint_px));
            }
            validate_weights(responsive.desktop_weights)?;
        }
        Ok(())
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self::fixed()
    }
}

fn validate_weights(profile: WeightProfile) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&profile.min_weight) {
        return Err(ConfigError::InvalidMinWeight(profile.min_weight));
    }
    if !(profile.falloff.is_finite() && profile.falloff >= 0.0) {
        return Err(ConfigError::InvalidFalloff(profile.falloff));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidImageHeight(f64),
    InvalidGap { field: &'static str, value: f64 },
    InvalidTilt(f64),
    ZeroMinItems,
    InvalidFallbackHeight(f64),
    InvalidMinWeight(f64),
    InvalidFalloff(f64),
    InvalidBreakpoint(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidImageHeight(value) => {
                write!(f, "image height must be positive, got {value}")
            }
            ConfigError::InvalidGap { field, value } => {
                write!(f, "{field} must be non-negative, got {value}")
            }
            ConfigError::InvalidTilt(value) => {
                write!(f, "tilt must be within +/-{TILT_LIMIT_DEG} degrees, got {value}")
            }
            ConfigError::ZeroMinItems => write!(f, "min_items must be at least 1"),
            ConfigError::InvalidFallbackHeight(value) => {
                write!(f, "fallback viewport height must be positive, got {value}")
            }
            ConfigError::InvalidMinWeight(value) => {
                write!(f, "min weight must be within [0, 1], got {value}")
            }
            ConfigError::InvalidFalloff(value) => {
                write!(f, "weight falloff must be non-negative, got {value}")
            }
            ConfigError::InvalidBreakpoint(value) => {
                write!(f, "mobile breakpoint must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
