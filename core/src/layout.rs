//! Badge position calculation
//!
//! Maps a card count plus the game client rectangle to absolute screen
//! coordinates, one per card in pack order. The client lays packs out on a
//! fixed 8-column, 2-row grid for more than 8 cards and a single row
//! otherwise; cell size is always an eighth of the calibrated grid width and
//! half its height even when fewer cells are populated.

use picklens_types::GridCalibration;
use serde::{Deserialize, Serialize};

/// Largest pack the client ever shows.
pub const MAX_PACK_SIZE: usize = 15;

/// Horizontal offset subtracted from the cell center so the badge sits
/// centered over the card.
const BADGE_HALF_WIDTH: f64 = 15.0;

/// Badge vertical inset from the cell top, as a fraction of cell height.
const BADGE_TOP_FRACTION: f64 = 0.08;

/// Client rectangle in absolute screen coordinates, recomputed every poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl WindowRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Grid shape for a pack size: (columns, rows).
///
/// Packs above 8 cards wrap onto a second row of the fixed 8-column grid;
/// packs of 8 or fewer stay on a single row of exactly `count` columns.
fn grid_shape(count: usize) -> (usize, usize) {
    match count {
        9..=MAX_PACK_SIZE => (8, 2),
        1..=8 => (count, 1),
        _ => (0, 0),
    }
}

/// Compute one badge position per card index.
///
/// Returns an empty vector when `count` is outside `[1, 15]` or the window
/// rectangle has non-positive width or height; callers treat that as "hide
/// everything" rather than an error.
pub fn card_positions(
    count: usize,
    window: WindowRect,
    calib: &GridCalibration,
) -> Vec<(i32, i32)> {
    let (cols, _rows) = grid_shape(count);
    if cols == 0 {
        return Vec::new();
    }

    let w = f64::from(window.width());
    let h = f64::from(window.height());
    if w <= 0.0 || h <= 0.0 {
        return Vec::new();
    }

    let grid_w = (calib.right - calib.left) * w;
    let grid_h = (calib.bottom - calib.top) * h;
    let grid_x0 = f64::from(window.left) + calib.left * w;
    let grid_y0 = f64::from(window.top) + calib.top * h;

    // Fixed cell size regardless of populated columns/rows
    let cell_w = grid_w / 8.0;
    let cell_h = grid_h / 2.0;
    let y_offset = cell_h * BADGE_TOP_FRACTION;

    (0..count)
        .map(|idx| {
            let row = idx / cols;
            let col = idx % cols;
            // Incomplete final row stays left-aligned, as in the client
            let cx = grid_x0 + col as f64 * cell_w + cell_w / 2.0;
            let cy = grid_y0 + row as f64 * cell_h + y_offset;
            ((cx - BADGE_HALF_WIDTH) as i32, cy as i32)
        })
        .collect()
}
