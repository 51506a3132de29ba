use crate::symbol::DirectionalSymbol;
use crate::types::Point;

/// Default distance, in device-independent units, at or below which a stroke
/// counts as a tap.
pub const DEFAULT_TAP_THRESHOLD: f32 = 30.0;

/// Classifies a drag from `start` to `end` into a directional symbol.
///
/// Strokes no longer than `tap_threshold` are taps whatever their angle.
/// Longer strokes fall into one of eight 45° octants centered on the
/// cardinal and diagonal directions. The function is total: non-finite
/// input lands in some octant rather than failing.
pub fn classify_stroke(start: Point, end: Point, tap_threshold: f32) -> DirectionalSymbol {
    classify_delta(end.x - start.x, end.y - start.y, tap_threshold)
}

/// Same as [`classify_stroke`] for an already computed displacement.
pub fn classify_delta(dx: f32, dy: f32, tap_threshold: f32) -> DirectionalSymbol {
    let (dx, dy) = (f64::from(dx), f64::from(dy));
    if dx.hypot(dy) <= f64::from(tap_threshold) {
        return DirectionalSymbol::Tap;
    }
    // Screen Y grows downward; flip it so "up" is a positive angle.
    symbol_for_angle(normalize_degrees((-dy).atan2(dx).to_degrees()))
}

/// Maps an angle in `[0, 360)` to its octant. Boundaries belong to the
/// upper interval; anything outside the seven named ranges is `Right`.
pub fn symbol_for_angle(degrees: f64) -> DirectionalSymbol {
    match degrees {
        a if (22.5..67.5).contains(&a) => DirectionalSymbol::UpRight,
        a if (67.5..112.5).contains(&a) => DirectionalSymbol::Up,
        a if (112.5..157.5).contains(&a) => DirectionalSymbol::UpLeft,
        a if (157.5..202.5).contains(&a) => DirectionalSymbol::Left,
        a if (202.5..247.5).contains(&a) => DirectionalSymbol::DownLeft,
        a if (247.5..292.5).contains(&a) => DirectionalSymbol::Down,
        a if (292.5..337.5).contains(&a) => DirectionalSymbol::DownRight,
        _ => DirectionalSymbol::Right,
    }
}

fn normalize_degrees(degrees: f64) -> f64 {
    if degrees < 0.0 { degrees + 360.0 } else { degrees }
}
