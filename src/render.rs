use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate},
};

use crate::icons::ICONS;
use crate::math::{
    multiply_matrices, multiply_matrix_vector, rotation_x, rotation_y, shade_intensity,
};
use crate::sprite::{IconTransform, Sprite};
use crate::state::AppState;
use crate::viewport::{PX_PER_COL, PX_PER_ROW};

/// Per-item transforms, the engine's output to the presentation layer:
/// the fixed layout translation plus the counter-rotation that keeps each
/// icon upright while the sphere turns.
pub fn icon_transforms(state: &AppState, points: &[[f64; 3]]) -> Vec<IconTransform> {
    points
        .iter()
        .map(|&translation| IconTransform {
            translation,
            counter_rotation: [-state.angle_x, -state.angle_y],
        })
        .collect()
}

/// Rotate each transform's translation by the sphere orientation (the
/// inverse of its counter-rotation) and project it into terminal cells
/// around the screen center, back-to-front. Labels themselves are drawn
/// axis-aligned, which is what the counter-rotation amounts to in cells.
pub fn project(transforms: &[IconTransform], radius: f64, cols: u16, rows: u16) -> Vec<Sprite> {
    let center_col = cols as f64 / 2.0;
    let center_row = rows as f64 / 2.0;

    let mut sprites: Vec<Sprite> = transforms
        .iter()
        .enumerate()
        .map(|(item, transform)| {
            let [counter_x, counter_y] = transform.counter_rotation;
            let rotation = multiply_matrices(&rotation_y(-counter_y), &rotation_x(-counter_x));
            let [x, y, z] = multiply_matrix_vector(&rotation, &transform.translation);
            Sprite {
                item,
                col: center_col + x / PX_PER_COL,
                row: center_row + y / PX_PER_ROW,
                depth: z,
                intensity: shade_intensity(z, radius),
            }
        })
        .collect();

    // Far icons draw first so near ones overwrite them.
    sprites.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    sprites
}

/// Is a terminal cell inside the projected sphere disc?
pub fn hit_test(col: u16, row: u16, cols: u16, rows: u16, radius: f64) -> bool {
    let dx = (col as f64 - cols as f64 / 2.0) * PX_PER_COL;
    let dy = (row as f64 - rows as f64 / 2.0) * PX_PER_ROW;
    dx * dx + dy * dy <= radius * radius
}

/// Scale a brand color by a depth intensity.
pub fn shade(color: Color, intensity: f64) -> Color {
    match color {
        Color::Rgb { r, g, b } => Color::Rgb {
            r: (r as f64 * intensity).min(255.0) as u8,
            g: (g as f64 * intensity).min(255.0) as u8,
            b: (b as f64 * intensity).min(255.0) as u8,
        },
        other => other,
    }
}

/// Draw one frame.
pub fn draw_frame(
    out: &mut impl Write,
    state: &AppState,
    points: &[[f64; 3]],
    cols: u16,
    rows: u16,
    fps: f64,
) -> io::Result<()> {
    queue!(out, BeginSynchronizedUpdate, Clear(ClearType::All))?;

    let transforms = icon_transforms(state, points);
    for sprite in project(&transforms, state.preset.radius, cols, rows) {
        let asset = &ICONS[sprite.item];
        let label = asset.label_for_size(state.preset.icon_size);
        let col = (sprite.col - label.len() as f64 / 2.0).round();
        let row = sprite.row.round();
        if row < 0.0 || row >= rows as f64 {
            continue;
        }
        if col < 0.0 || col + label.len() as f64 > cols as f64 {
            continue;
        }
        queue!(
            out,
            MoveTo(col as u16, row as u16),
            SetForegroundColor(shade(asset.color, sprite.intensity)),
            Print(label),
        )?;
    }
    queue!(out, ResetColor)?;

    if state.debug {
        draw_debug(out, state, fps)?;
    }
    if state.paused {
        draw_paused(out, cols, rows)?;
    }

    queue!(out, EndSynchronizedUpdate)?;
    out.flush()
}

/// Debug info in the top-left corner.
fn draw_debug(out: &mut impl Write, state: &AppState, fps: f64) -> io::Result<()> {
    let lines = [
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        format!("Angle X: {:.2}, Angle Y: {:.2}", state.angle_x, state.angle_y),
        format!(
            "Velocity X: {:.2}, Y: {:.2}",
            state.velocity[0], state.velocity[1]
        ),
        format!(
            "Radius: {:.0}px, Icon: {:.0}px",
            state.preset.radius, state.preset.icon_size
        ),
        format!("FPS: {:.2}", fps),
    ];
    for (i, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(1, 1 + i as u16), Print(line))?;
    }
    Ok(())
}

/// Display 'Paused' in the middle of the screen.
fn draw_paused(out: &mut impl Write, cols: u16, rows: u16) -> io::Result<()> {
    let text = "Paused";
    let col = cols.saturating_sub(text.len() as u16) / 2;
    queue!(
        out,
        MoveTo(col, rows / 2),
        SetAttribute(Attribute::Bold),
        Print(text),
        SetAttribute(Attribute::Reset),
    )
}
