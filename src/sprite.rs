/// Transform handed to the presentation layer for one item: the fixed
/// layout translation plus the counter-rotation that keeps the icon
/// upright while the sphere turns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconTransform {
    pub translation: [f64; 3],
    /// (x, y) angles in radians, the inverse of the global rotation.
    pub counter_rotation: [f64; 2],
}

/// One icon projected into terminal cells for the current frame.
pub struct Sprite {
    /// Index into the icon table.
    pub item: usize,
    /// Screen position in fractional cells.
    pub col: f64,
    pub row: f64,
    /// Rotated z in pixels; larger is closer to the viewer.
    pub depth: f64,
    /// Depth-based brightness in (0, 1].
    pub intensity: f64,
}
