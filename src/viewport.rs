/// Discrete sizing preset selected from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    /// Sphere radius in virtual pixels.
    pub radius: f64,
    /// Icon size in virtual pixels; selects the label form.
    pub icon_size: f64,
}

/// Phone-width preset.
pub const SMALL: Preset = Preset {
    radius: 150.0,
    icon_size: 40.0,
};

/// Tablet-width preset.
pub const MEDIUM: Preset = Preset {
    radius: 200.0,
    icon_size: 60.0,
};

/// Desktop preset.
pub const LARGE: Preset = Preset {
    radius: 300.0,
    icon_size: 80.0,
};

/// A terminal cell is roughly half as wide as it is tall.
pub const PX_PER_COL: f64 = 8.0;
pub const PX_PER_ROW: f64 = 16.0;

/// Select the sizing preset for a viewport width in pixels.
pub fn preset_for_width(width_px: f64) -> Preset {
    if width_px <= 480.0 {
        SMALL
    } else if width_px <= 768.0 {
        MEDIUM
    } else {
        LARGE
    }
}

/// Viewport width signal derived from the terminal column count.
pub fn width_px(cols: u16) -> f64 {
    cols as f64 * PX_PER_COL
}
