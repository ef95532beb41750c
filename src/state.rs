use crate::viewport::{self, Preset};

/// Idle spin rate around the X axis, radians per second.
pub const BASE_RATE_X: f64 = 0.15;
/// Idle spin rate around the Y axis, radians per second.
pub const BASE_RATE_Y: f64 = 0.25;
/// Per-tick multiplicative shrinkage of drag-imparted velocity.
pub const DECAY: f64 = 0.95;
/// Angular velocity per pixel of pointer movement.
pub const DRAG_SENSITIVITY: f64 = 0.1;
/// Longest frame delta fed into the simulation, in seconds.
pub const MAX_FRAME_DT: f64 = 0.1;

/// Clamp a measured frame delta before it reaches [`AppState::advance`].
/// A stalled host would otherwise produce one large rotation jump.
pub fn clamp_frame_dt(dt: f64) -> f64 {
    dt.clamp(0.0, MAX_FRAME_DT)
}

/// Application state
pub struct AppState {
    /// Current rotation angle around the X-axis
    pub angle_x: f64,
    /// Current rotation angle around the Y-axis
    pub angle_y: f64,
    /// Drag-imparted angular velocity (x, y), radians per second.
    pub velocity: [f64; 2],
    /// Simulation paused
    pub paused: bool,
    /// Is the user currently dragging the sphere?
    pub dragging: bool,
    /// Last pointer sample in viewport pixels.
    pub last_pointer: [f64; 2],
    /// Enable debug mode
    pub debug: bool,
    /// Active sizing preset.
    pub preset: Preset,
}

impl AppState {
    pub fn new(preset: Preset) -> Self {
        AppState {
            angle_x: 0.0,
            angle_y: 0.0,
            velocity: [0.0; 2],
            paused: false,
            dragging: false,
            last_pointer: [0.0; 2],
            debug: false,
            preset,
        }
    }

    /// Advance the rotation by `dt` seconds.
    ///
    /// A drag suspends the idle spin; pause freezes everything, so this is
    /// a no-op while either is active. Drag velocity rides on top of the
    /// base rates and shrinks toward zero each tick.
    pub fn advance(&mut self, dt: f64) {
        if self.paused || self.dragging {
            return;
        }
        self.angle_x += (self.velocity[0] + BASE_RATE_X) * dt;
        self.angle_y += (self.velocity[1] + BASE_RATE_Y) * dt;
        self.velocity[0] *= DECAY;
        self.velocity[1] *= DECAY;
    }

    /// Pointer pressed over the sphere: start a drag.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.dragging = true;
        self.last_pointer = [x, y];
    }

    /// Pointer moved while dragging: overwrite the angular velocity from
    /// the delta to the previous sample.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !self.dragging {
            return;
        }
        let dx = x - self.last_pointer[0];
        let dy = y - self.last_pointer[1];
        self.velocity = [dx * DRAG_SENSITIVITY, dy * DRAG_SENSITIVITY];
        self.last_pointer = [x, y];
    }

    /// Pointer released or left the view: resume the idle spin.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Toggle the explicit pause. Independent of any drag in progress;
    /// releasing a drag never clears it.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        tracing::debug!(paused = self.paused, "pause toggled");
    }

    /// Reset to the initial orientation.
    pub fn reset(&mut self) {
        self.angle_x = 0.0;
        self.angle_y = 0.0;
        self.velocity = [0.0; 2];
    }

    /// Apply a new viewport width in pixels. Returns true when the preset
    /// changed and the caller must recompute the layout.
    pub fn apply_width(&mut self, width_px: f64) -> bool {
        let next = viewport::preset_for_width(width_px);
        if next == self.preset {
            return false;
        }
        tracing::info!(
            radius = next.radius,
            icon_size = next.icon_size,
            "viewport preset changed"
        );
        self.preset = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere;

    const TOLERANCE: f64 = 1e-9;

    fn desktop_state() -> AppState {
        AppState::new(viewport::preset_for_width(1024.0))
    }

    #[test]
    fn drag_sets_velocity_then_one_tick_applies_it() {
        let mut state = desktop_state();
        state.pointer_down(0.0, 0.0);
        state.pointer_move(100.0, 0.0);
        assert!((state.velocity[0] - 10.0).abs() < TOLERANCE);
        assert!(state.velocity[1].abs() < TOLERANCE);

        state.pointer_up();
        state.advance(1.0);
        assert!((state.angle_x - (10.0 + BASE_RATE_X)).abs() < TOLERANCE);
        assert!((state.angle_y - BASE_RATE_Y).abs() < TOLERANCE);
    }

    #[test]
    fn pointer_samples_overwrite_velocity() {
        let mut state = desktop_state();
        state.pointer_down(0.0, 0.0);
        state.pointer_move(100.0, 0.0);
        state.pointer_move(100.0, 30.0);
        assert!(state.velocity[0].abs() < TOLERANCE);
        assert!((state.velocity[1] - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn velocity_decays_monotonically() {
        let mut state = desktop_state();
        state.pointer_down(0.0, 0.0);
        state.pointer_move(100.0, -40.0);
        state.pointer_up();

        let mut previous = 10.0_f64.hypot(4.0);
        for _ in 0..100 {
            state.advance(0.016);
            let magnitude = state.velocity[0].hypot(state.velocity[1]);
            assert!(magnitude <= previous);
            assert!((magnitude - previous * DECAY).abs() < TOLERANCE);
            previous = magnitude;
        }
    }

    #[test]
    fn paused_rotation_is_invariant_across_ticks() {
        let mut state = desktop_state();
        state.advance(0.016);
        let (angle_x, angle_y) = (state.angle_x, state.angle_y);

        state.toggle_pause();
        for _ in 0..50 {
            state.advance(0.016);
        }
        assert_eq!(state.angle_x, angle_x);
        assert_eq!(state.angle_y, angle_y);

        state.toggle_pause();
        state.advance(0.016);
        assert!(state.angle_x > angle_x);
    }

    #[test]
    fn dragging_suspends_the_idle_spin() {
        let mut state = desktop_state();
        state.pointer_down(10.0, 10.0);
        state.advance(0.016);
        assert_eq!(state.angle_x, 0.0);
        assert_eq!(state.angle_y, 0.0);

        state.pointer_up();
        state.advance(0.016);
        assert!(state.angle_y > 0.0);
    }

    #[test]
    fn explicit_pause_survives_a_drag() {
        let mut state = desktop_state();
        state.toggle_pause();
        state.pointer_down(0.0, 0.0);
        state.pointer_move(50.0, 0.0);
        state.pointer_up();
        assert!(state.paused);
        state.advance(1.0);
        assert_eq!(state.angle_x, 0.0);
    }

    #[test]
    fn moves_without_a_drag_are_ignored() {
        let mut state = desktop_state();
        state.pointer_move(500.0, 500.0);
        assert_eq!(state.velocity, [0.0; 2]);
    }

    #[test]
    fn reset_restores_initial_orientation() {
        let mut state = desktop_state();
        state.pointer_down(0.0, 0.0);
        state.pointer_move(80.0, 20.0);
        state.pointer_up();
        state.advance(0.5);
        state.reset();
        assert_eq!(state.angle_x, 0.0);
        assert_eq!(state.angle_y, 0.0);
        assert_eq!(state.velocity, [0.0; 2]);
    }

    #[test]
    fn frame_dt_is_clamped_for_stalled_hosts() {
        assert_eq!(clamp_frame_dt(2.5), MAX_FRAME_DT);
        assert_eq!(clamp_frame_dt(-0.5), 0.0);
        assert_eq!(clamp_frame_dt(0.016), 0.016);
    }

    #[test]
    fn shrinking_viewport_switches_preset_and_relayouts() {
        let mut state = desktop_state();
        assert_eq!(state.preset, viewport::LARGE);

        assert!(state.apply_width(400.0));
        assert_eq!(state.preset, viewport::SMALL);
        assert!(!state.apply_width(400.0));

        // All item positions land on the new, smaller sphere.
        for p in sphere::layout(27, state.preset.radius) {
            let magnitude = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((magnitude - 150.0).abs() < 1e-6);
        }
    }
}
