//! Pointer position to grid coordinate.

use crate::types::{BoardLayout, Coord};

/// Grid cell under the terminal cell `(x, y)`
///
/// Floor division, so positions left of or above the board give negative
/// coordinates. There is no range check; the engine rejects anything that
/// is not a playable tile.
pub fn to_coord(layout: &BoardLayout, x: u16, y: u16) -> Coord {
    let tile_w = layout.tile_w.max(1);
    let tile_h = layout.tile_h.max(1);
    Coord::new(
        (y as i32 - layout.margin_y).div_euclid(tile_h),
        (x as i32 - layout.margin_x).div_euclid(tile_w),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> BoardLayout {
        BoardLayout {
            margin_x: 10,
            margin_y: 4,
            tile_w: 6,
            tile_h: 3,
            grid_size: 4,
        }
    }

    #[test]
    fn test_inside_tiles() {
        let l = layout();
        assert_eq!(to_coord(&l, 10, 4), Coord::new(0, 0));
        assert_eq!(to_coord(&l, 15, 6), Coord::new(0, 0));
        assert_eq!(to_coord(&l, 16, 7), Coord::new(1, 1));
        assert_eq!(to_coord(&l, 33, 15), Coord::new(3, 3));
    }

    #[test]
    fn test_outside_floors_negative() {
        let l = layout();
        assert_eq!(to_coord(&l, 9, 4), Coord::new(0, -1));
        assert_eq!(to_coord(&l, 10, 0), Coord::new(-2, 0));
        assert_eq!(to_coord(&l, 34, 16), Coord::new(4, 4));
    }

    #[test]
    fn test_origin_round_trip() {
        let l = layout();
        let c = Coord::new(2, 3);
        let (x, y) = l.tile_origin(c);
        assert_eq!(to_coord(&l, x as u16, y as u16), c);
    }
}
