// File: crates/trends-chart/src/scale.rs
// Summary: Time (X, days) and Value (Y) linear scale transforms.

/// X coordinate: days since 0001-01-01.
pub type Logical = f64;
/// Y coordinate: volume in the chart's unit.
pub type Value = f64;

/// Horizontal time scale mapping a day range to [left, right] pixels.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left_px: f32,
    pub right_px: f32,
    pub x_min: Logical,
    pub x_max: Logical,
}

impl TimeScale {
    pub fn new(left_px: f32, right_px: f32, x_min: Logical, x_max: Logical) -> Self {
        Self { left_px, right_px, x_min, x_max }
    }
    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 {
        let span = self.x_max - self.x_min;
        if span.abs() < 1e-12 {
            // single month: center it
            return (self.left_px + self.right_px) * 0.5;
        }
        self.left_px + ((x - self.x_min) / span) as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

/// Value range with a flat domain widened to `[vmin, vmin + 1]`.
pub fn widened(vmin: Value, vmax: Value) -> (Value, Value) {
    if (vmax - vmin).abs() < 1e-12 { (vmin, vmin + 1.0) } else { (vmin, vmax) }
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let (vmin, vmax) = widened(vmin, vmax);
        Self { top_px, bottom_px, vmin, vmax }
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
