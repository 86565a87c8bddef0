//! Fixed board layout
//!
//! The board is a 700x500 coordinate space (y grows downward). Five pile mats
//! sit in a row near the top; the 26 letter tokens rest in three keyboard rows
//! below them (10 / 9 / 7).

use crate::core::{Point, SLOT_COUNT};

/// Board coordinate space width
pub const BOARD_WIDTH: f32 = 700.0;
/// Board coordinate space height
pub const BOARD_HEIGHT: f32 = 500.0;

/// Half width/height of a pile mat's bounding box (105x105 mats)
pub const PILE_HALF_EXTENT: f32 = 52.5;

/// Vertical offset between stacked tokens in a present-mode pile
pub const STACK_OFFSET: f32 = 15.0;

const PILE_FIRST_X: f32 = 100.0;
const PILE_SPACING: f32 = 126.0;
const PILE_ROW_Y: f32 = 85.0;

const ROW_YS: [f32; 3] = [238.0, 320.0, 402.0];
const ROW_FIRST_XS: [f32; 3] = [65.0, 100.0, 164.0];
const ROW_LENGTHS: [usize; 3] = [10, 9, 7];
const TOKEN_SPACING: f32 = 64.0;

/// Center of the pile mat for a slot
///
/// # Panics
/// Panics if `slot >= SLOT_COUNT`.
#[must_use]
pub fn pile_center(slot: usize) -> Point {
    assert!(slot < SLOT_COUNT);
    Point::new(PILE_FIRST_X + PILE_SPACING * slot as f32, PILE_ROW_Y)
}

/// Home position of the template token at `index` in board letter order
///
/// # Panics
/// Panics if `index >= 26`.
#[must_use]
pub fn home_position(index: usize) -> Point {
    assert!(index < 26);
    let mut remaining = index;
    for row in 0..3 {
        if remaining < ROW_LENGTHS[row] {
            return Point::new(
                ROW_FIRST_XS[row] + TOKEN_SPACING * remaining as f32,
                ROW_YS[row],
            );
        }
        remaining -= ROW_LENGTHS[row];
    }
    unreachable!("row lengths sum to 26")
}
