//! Recursive shadowcasting field of view.
//!
//! The grid is split into eight octants, each scanned row by row outward from
//! the origin while tracking the slopes still open to light. Opaque tiles are
//! themselves lit so walls bordering a room show up. Anything outside the grid
//! is treated as opaque.

use super::Position;

/// Octant transforms: `(xx, xy, yx, yy)`.
const OCTANTS: [(i32, i32, i32, i32); 8] = [
    (1, 0, 0, 1),
    (0, 1, 1, 0),
    (0, -1, 1, 0),
    (-1, 0, 0, 1),
    (-1, 0, 0, -1),
    (0, -1, -1, 0),
    (0, 1, -1, 0),
    (1, 0, 0, -1),
];

/// Computes the visible set for `origin` on a `width` x `height` grid.
///
/// `radius` is inclusive (`dx² + dy² <= radius²`). A radius of zero means
/// unlimited. The result is indexed `y * width + x`.
pub fn compute_fov<F>(
    width: u32,
    height: u32,
    origin: Position,
    radius: u32,
    transparent: F,
) -> Vec<bool>
where
    F: Fn(Position) -> bool,
{
    let mut scan = Shadowcast {
        width: width as i32,
        height: height as i32,
        origin,
        radius: if radius == 0 {
            width.max(height) as i32
        } else {
            radius as i32
        },
        transparent,
        visible: vec![false; (width as usize) * (height as usize)],
    };

    scan.mark(origin);
    for octant in OCTANTS {
        scan.cast(1, 1.0, 0.0, octant);
    }
    scan.visible
}

struct Shadowcast<F> {
    width: i32,
    height: i32,
    origin: Position,
    radius: i32,
    transparent: F,
    visible: Vec<bool>,
}

impl<F> Shadowcast<F>
where
    F: Fn(Position) -> bool,
{
    fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }

    fn mark(&mut self, position: Position) {
        if self.in_bounds(position) {
            let index = (position.y * self.width + position.x) as usize;
            self.visible[index] = true;
        }
    }

    fn opaque(&self, position: Position) -> bool {
        !self.in_bounds(position) || !(self.transparent)(position)
    }

    fn cast(&mut self, row: i32, mut start: f64, end: f64, (xx, xy, yx, yy): (i32, i32, i32, i32)) {
        if start < end {
            return;
        }
        let radius_sq = self.radius * self.radius;

        for distance in row..=self.radius {
            let dy = -distance;
            let mut dx = -distance - 1;
            let mut blocked = false;
            let mut new_start = 0.0;

            while dx <= 0 {
                dx += 1;
                let position = Position::new(
                    self.origin.x + dx * xx + dy * xy,
                    self.origin.y + dx * yx + dy * yy,
                );
                let left_slope = (f64::from(dx) - 0.5) / (f64::from(dy) + 0.5);
                let right_slope = (f64::from(dx) + 0.5) / (f64::from(dy) - 0.5);

                if start < right_slope {
                    continue;
                }
                if end > left_slope {
                    break;
                }

                if dx * dx + dy * dy <= radius_sq {
                    self.mark(position);
                }

                let opaque = self.opaque(position);
                if blocked {
                    if opaque {
                        new_start = right_slope;
                        continue;
                    }
                    blocked = false;
                    start = new_start;
                } else if opaque && distance < self.radius {
                    blocked = true;
                    self.cast(distance + 1, start, left_slope, (xx, xy, yx, yy));
                    new_start = right_slope;
                }
            }

            if blocked {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(visible: &[bool], width: u32, x: i32, y: i32) -> bool {
        visible[(y as u32 * width + x as u32) as usize]
    }

    #[test]
    fn open_field_is_a_disc() {
        let visible = compute_fov(21, 21, Position::new(10, 10), 3, |_| true);

        assert!(at(&visible, 21, 10, 10));
        assert!(at(&visible, 21, 13, 10));
        assert!(at(&visible, 21, 12, 12));
        assert!(!at(&visible, 21, 13, 13));
        assert!(!at(&visible, 21, 14, 10));
    }

    #[test]
    fn walls_cast_shadows() {
        // Vertical wall at x = 7 spanning y = 3..=7.
        let wall = |p: Position| !(p.x == 7 && (3..=7).contains(&p.y));
        let visible = compute_fov(15, 11, Position::new(5, 5), 0, wall);

        assert!(at(&visible, 15, 7, 5), "wall itself is lit");
        assert!(!at(&visible, 15, 9, 5), "tile behind the wall is hidden");
        assert!(at(&visible, 15, 3, 5));
    }
}
