//! Default keyboard geometry.
//!
//! Three rows of twelve character keys on a 100px pitch starting at (50, 50),
//! each key 85x85, followed by the wide Space and Delete keys on a fourth row.
//! Coordinates are fixed so renders can be compared pixel for pixel.

use super::key::{DELETE_LABEL, Key, SPACE_LABEL};

/// Character rows, in iteration order.
pub const CHARACTER_ROWS: [[&str; 12]; 3] = [
    ["A", "Z", "E", "R", "T", "Y", "U", "I", "O", "P", "^", "$"],
    ["Q", "S", "D", "F", "G", "H", "J", "K", "L", "M", "%", "*"],
    ["W", "X", "C", "V", "B", "N", ",", ";", ":", "!", ".", "?"],
];

/// Left/top offset of the first key.
pub const GRID_ORIGIN: i32 = 50;
/// Distance between the top-left corners of neighbouring keys.
pub const KEY_PITCH: i32 = 100;
/// Width and height of a character key.
pub const KEY_SIZE: i32 = 85;

const SPACE_X: i32 = 50;
const SPACE_WIDTH: i32 = 885;
const DELETE_X: i32 = 950;
const DELETE_WIDTH: i32 = 285;
const SPECIAL_ROW_Y: i32 = 350;

/// Builds the default key list: row-major characters, then Space, then Delete.
pub fn default_keys() -> Vec<Key> {
    let mut keys = Vec::with_capacity(CHARACTER_ROWS.len() * 12 + 2);

    for (row_idx, row) in CHARACTER_ROWS.iter().enumerate() {
        let y = KEY_PITCH * row_idx as i32 + GRID_ORIGIN;
        for (col_idx, label) in row.iter().enumerate() {
            let x = KEY_PITCH * col_idx as i32 + GRID_ORIGIN;
            keys.push(Key::new(*label, x, y, KEY_SIZE, KEY_SIZE));
        }
    }

    keys.push(Key::new(
        SPACE_LABEL,
        SPACE_X,
        SPECIAL_ROW_Y,
        SPACE_WIDTH,
        KEY_SIZE,
    ));
    keys.push(Key::new(
        DELETE_LABEL,
        DELETE_X,
        SPECIAL_ROW_Y,
        DELETE_WIDTH,
        KEY_SIZE,
    ));

    keys
}
