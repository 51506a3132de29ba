/// A point on the touch surface.
///
/// Coordinates are in device-independent units with Y growing downward,
/// the way touch sources report them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate, increasing toward the bottom of the screen.
    pub y: f32,
}

impl Point {
    /// The origin point (0, 0).
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a point from its coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Editor actions forwarded to the host instead of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Insert a line break (the host decides whether that submits a form).
    Newline,
}

/// Where composed text goes.
///
/// Exactly one target is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Text goes straight to the host text sink.
    #[default]
    Direct,
    /// Text collects in a scratch buffer and is translated before it is
    /// handed to the sink.
    Translation,
}

/// The externally visible phase of the key-hold state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldPhase {
    /// No key is held.
    Idle,
    /// A key is down, its gesture session is open, the surface is hidden.
    Held,
    /// The gesture surface is shown and accepting strokes.
    Gesturing,
}
