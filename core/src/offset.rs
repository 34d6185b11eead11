use crate::config::WeightProfile;

pub fn column_weight(column: usize, active_column: usize, profile: WeightProfile) -> f64 {
    profile.weight(column.abs_diff(active_column))
}

/// Adds `delta * weight` to every column. Offsets are never clamped here;
/// wrapping happens in [`normalize_offset`] at render time.
pub fn apply_delta(offsets: &mut [f64], active_column: usize, delta: f64, profile: WeightProfile) {
    if !delta.is_finite() {
        return;
    }
    for (column, offset) in offsets.iter_mut().enumerate() {
        *offset += delta * column_weight(column, active_column, profile);
    }
}

/// Maps any raw offset into `[0, column_height)`.
pub fn normalize_offset(raw: f64, column_height: f64) -> f64 {
    if !(column_height.is_finite() && column_height > 0.0) || !raw.is_finite() {
        return 0.0;
    }
    ((raw % column_height) + column_height) % column_height
}
