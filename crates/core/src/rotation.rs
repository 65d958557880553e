//! Rotation of bounding-box bitmaps
//!
//! A quarter turn is built from two in-place kernels over the box rows:
//!
//! - clockwise: transpose, then mirror about the vertical axis
//! - counter-clockwise: mirror about the vertical axis, then transpose
//!
//! With box rows in screen order (row 0 on top) this turns the shape visually
//! clockwise / counter-clockwise. Only 3×3 and 4×4 kernels exist. The 2×2 box
//! holds the square piece, which is symmetric under any rotation, so size 2 is
//! the identity. No wall kicks: callers test the result and undo on collision.

use crate::pieces::BoxBits;
use crate::types::RotateDir;

/// Rotate the occupied bits of an N×N box in place, N ∈ {2, 3, 4}.
pub fn rotate(bits: &mut BoxBits, box_size: u8, dir: RotateDir) {
    match box_size {
        // The square piece is its own rotation.
        2 => {}
        3 | 4 => match dir {
            RotateDir::Cw => {
                transpose(bits, box_size);
                mirror(bits, box_size);
            }
            RotateDir::Ccw => {
                mirror(bits, box_size);
                transpose(bits, box_size);
            }
        },
        _ => debug_assert!(false, "unsupported bounding box size {}", box_size),
    }
}

fn transpose(bits: &mut BoxBits, box_size: u8) {
    if box_size == 4 {
        transpose4(bits);
    } else {
        transpose3(bits);
    }
}

fn mirror(bits: &mut BoxBits, box_size: u8) {
    if box_size == 4 {
        mirror4(bits);
    } else {
        mirror3(bits);
    }
}

fn transpose3(m: &mut BoxBits) {
    let [m0, m1, m2, _] = *m;

    m[0] = (m0 & 0x1) | (m1 << 1 & 0x2) | (m2 << 2 & 0x4);
    m[1] = (m0 >> 1 & 0x1) | (m1 & 0x2) | (m2 << 1 & 0x4);
    m[2] = (m0 >> 2 & 0x1) | (m1 >> 1 & 0x2) | (m2 & 0x4);
}

fn transpose4(m: &mut BoxBits) {
    let [m0, m1, m2, m3] = *m;

    m[0] = (m0 & 0x1) | (m1 << 1 & 0x2) | (m2 << 2 & 0x4) | (m3 << 3 & 0x8);
    m[1] = (m0 >> 1 & 0x1) | (m1 & 0x2) | (m2 << 1 & 0x4) | (m3 << 2 & 0x8);
    m[2] = (m0 >> 2 & 0x1) | (m1 >> 1 & 0x2) | (m2 & 0x4) | (m3 << 1 & 0x8);
    m[3] = (m0 >> 3 & 0x1) | (m1 >> 2 & 0x2) | (m2 >> 1 & 0x4) | (m3 & 0x8);
}

fn mirror3(m: &mut BoxBits) {
    for row in m.iter_mut().take(3) {
        let r = *row;
        *row = (r << 2 & 0x4) | (r & 0x2) | (r >> 2 & 0x1);
    }
}

fn mirror4(m: &mut BoxBits) {
    for row in m.iter_mut() {
        let r = *row;
        *row = (r << 3 & 0x8) | (r << 1 & 0x4) | (r >> 1 & 0x2) | (r >> 3 & 0x1);
    }
}
