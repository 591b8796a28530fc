//! Fixed geometry shared by the composer and the rendering backend.
//!
//! All coordinates are expressed in the 600×800 content space; the backend
//! applies one uniform [`viewport_scale`] on top.

/// Width of the authored content space.
pub const CONTENT_WIDTH: f32 = 600.0;
/// Height of the authored content space.
pub const CONTENT_HEIGHT: f32 = 800.0;

/// Tile sprite size.
pub const TILE_WIDTH: f32 = 48.0;
pub const TILE_HEIGHT: f32 = 48.0;

/// Centre of the board art.
pub const BOARD_CENTER: (f32, f32) = (CONTENT_WIDTH / 2.0, CONTENT_HEIGHT / 2.0);
/// Board art display scale.
pub const BOARD_SCALE: f32 = 0.7;

/// Distance from board centre to each seat's field row.
pub const FIELD_RADIUS: f32 = 135.0;
/// Distance from board centre to each seat's hand row.
pub const HAND_RADIUS: f32 = 235.0;

// History strip metrics.
pub const HISTORY_ORIGIN: (f32, f32) = (2.0, 2.0);
pub const HISTORY_FRAME_WIDTH: f32 = 596.0;
pub const HISTORY_FRAME_HEIGHT: f32 = 130.0;
/// Horizontal inset of the strip's content inside the frame.
pub const HISTORY_INNER_X: f32 = 4.0;
/// Horizontal offset reserved for the seat labels.
pub const HISTORY_NAME_OFFSET: f32 = 50.0;
/// Gap between timeline columns.
pub const HISTORY_SLOT_MARGIN: f32 = 10.0;
/// Vertical space reserved for the round headers.
pub const HISTORY_HEADER_HEIGHT: f32 = 23.0;
/// Vertical stride between seat rows; tiles are drawn at half size, so rows
/// overlap the full tile height.
pub const HISTORY_ROW_STRIDE: f32 = (TILE_HEIGHT + 6.0) / 2.0;
/// Scale of tiles inside the strip.
pub const HISTORY_TILE_SCALE: f32 = 0.5;

// Menu metrics.
pub const MENU_ORIGIN: (f32, f32) = (20.0, 700.0);
pub const MENU_TOGGLE_SIZE: (f32, f32) = (100.0, 30.0);
pub const MENU_BUTTON_SIZE: (f32, f32) = (60.0, 60.0);
pub const MENU_UNDO_OFFSET: f32 = 220.0;
pub const MENU_REDO_OFFSET: f32 = 300.0;

/// Smallest scale [`viewport_scale`] ever produces. Keeps a collapsed
/// viewport from propagating a zero, negative, or NaN transform.
pub const MIN_VIEWPORT_SCALE: f32 = 1.0e-3;

/// Uniform letterbox scale fitting the fixed content into the viewport.
pub fn viewport_scale(viewport_width: f32, viewport_height: f32) -> f32 {
    // f32::min ignores NaN operands, so reject them before the fit
    if !(viewport_width.is_finite() && viewport_height.is_finite()) {
        return MIN_VIEWPORT_SCALE;
    }
    let scale = (viewport_width / CONTENT_WIDTH).min(viewport_height / CONTENT_HEIGHT);
    scale.max(MIN_VIEWPORT_SCALE)
}

/// Rotates a local offset by `angle` radians, for flattening a rotated tile
/// row into absolute coordinates.
pub(crate) fn rotate_offset(angle: f32, (x, y): (f32, f32)) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_fits_the_tighter_axis() {
        // twice the content size in both axes
        assert_eq!(viewport_scale(1200.0, 1600.0), 2.0);
        // width-constrained
        assert_eq!(viewport_scale(300.0, 1600.0), 0.5);
        // height-constrained
        assert_eq!(viewport_scale(1200.0, 400.0), 0.5);
    }

    #[test]
    fn degenerate_viewports_clamp_to_the_minimum() {
        assert_eq!(viewport_scale(0.0, 0.0), MIN_VIEWPORT_SCALE);
        assert_eq!(viewport_scale(-100.0, 600.0), MIN_VIEWPORT_SCALE);
        assert_eq!(viewport_scale(f32::NAN, 600.0), MIN_VIEWPORT_SCALE);
        assert_eq!(viewport_scale(f32::INFINITY, f32::INFINITY), MIN_VIEWPORT_SCALE);
        assert!(viewport_scale(0.0, 0.0) > 0.0);
    }

    #[test]
    fn rotate_offset_quarter_turn() {
        use std::f32::consts::FRAC_PI_2;
        let (x, y) = rotate_offset(-FRAC_PI_2, (48.0, 0.0));
        assert!(x.abs() < 1.0e-4);
        assert!((y + 48.0).abs() < 1.0e-4);
    }
}
