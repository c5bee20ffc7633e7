//! Disc sampling for area lights.
//!
//! A square grid of `cells x cells` points is laid over a disc and the points
//! falling outside the radius are dropped. The disc centre is always part of
//! the result.

use lumen_math::{align_zero, Point, Vector};
use rand::{Rng, RngCore};

/// Default number of grid cells along each side.
pub const DEFAULT_CELLS: usize = 9;

/// Largest supported number of grid cells along each side.
pub const MAX_CELLS: usize = 64;

/// Grid sampler over a disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackBoard {
    cells: usize,
    jitter: bool,
}

impl BlackBoard {
    /// A sampler with `cells` points per side, clamped to
    /// `1..=MAX_CELLS`.
    pub fn new(cells: usize) -> Self {
        Self {
            cells: cells.clamp(1, MAX_CELLS),
            jitter: false,
        }
    }

    /// Move each grid point to a random position inside its cell.
    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn cells(&self) -> usize {
        self.cells
    }

    pub fn jitter(&self) -> bool {
        self.jitter
    }

    /// Sample the disc of `radius` around `center` spanned by `v_right` and
    /// `v_up` (unit and perpendicular).
    ///
    /// Points come out row by row, so the first and last are opposite
    /// corners of the grid and the middle entries sit near the centre.
    pub fn construct_circle(
        &self,
        center: Point,
        v_up: Vector,
        v_right: Vector,
        radius: f64,
        rng: &mut dyn RngCore,
    ) -> Vec<Point> {
        if self.cells == 1 || !(radius.is_finite() && radius > 0.0) {
            return vec![center];
        }

        let n = self.cells;
        let cell = 2.0 * radius / n as f64;
        let half = (n as f64 - 1.0) / 2.0;
        let radius2 = radius * radius;
        let mut points = Vec::with_capacity(n * n);
        let mut center_seen = false;

        for i in 0..n {
            for j in 0..n {
                let mut y = (i as f64 - half) * cell;
                let mut x = (j as f64 - half) * cell;

                let is_center = align_zero(x) == 0.0 && align_zero(y) == 0.0;
                if is_center {
                    points.push(center);
                    center_seen = true;
                    continue;
                }

                if self.jitter {
                    x += rng.gen_range(-cell / 2.0..cell / 2.0);
                    y += rng.gen_range(-cell / 2.0..cell / 2.0);
                }

                let mut p = center;
                if let Ok(dx) = v_right.scale(align_zero(x)) {
                    p = p.add(&dx);
                }
                if let Ok(dy) = v_up.scale(align_zero(y)) {
                    p = p.add(&dy);
                }

                if p.distance_squared(&center) <= radius2 {
                    points.push(p);
                }
            }
        }

        // Even grids have no cell on the centre
        if !center_seen {
            points.insert(points.len() / 2, center);
        }
        points
    }
}

impl Default for BlackBoard {
    fn default() -> Self {
        Self::new(DEFAULT_CELLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample(board: BlackBoard, radius: f64) -> Vec<Point> {
        let mut rng = StdRng::seed_from_u64(7);
        board.construct_circle(Point::ZERO, Vector::Y, Vector::X, radius, &mut rng)
    }

    #[test]
    fn test_single_cell_or_zero_radius() {
        assert_eq!(sample(BlackBoard::new(1), 2.0), vec![Point::ZERO]);
        assert_eq!(sample(BlackBoard::new(0), 2.0), vec![Point::ZERO]);
        assert_eq!(sample(BlackBoard::default(), 0.0), vec![Point::ZERO]);
    }

    #[test]
    fn test_cells_clamped() {
        assert_eq!(BlackBoard::new(usize::MAX).cells(), MAX_CELLS);
        assert_eq!(BlackBoard::new(0).cells(), 1);
    }

    #[test]
    fn test_non_finite_radius_collapses_to_center() {
        let board = BlackBoard::new(9).with_jitter(true);
        assert_eq!(sample(board, f64::INFINITY), vec![Point::ZERO]);
        assert_eq!(sample(board, f64::NAN), vec![Point::ZERO]);
    }

    #[test]
    fn test_points_inside_disc() {
        let points = sample(BlackBoard::new(9), 1.5);
        assert!(points.len() > 9 && points.len() < 81);
        assert!(points.iter().all(|p| p.distance(&Point::ZERO) <= 1.5 + 1e-12));
        assert!(points.iter().all(|p| p.z() == 0.0));
        assert!(points.contains(&Point::ZERO));
    }

    #[test]
    fn test_odd_grid_is_symmetric() {
        let points = sample(BlackBoard::new(9), 1.0);
        // Centre of a symmetric grid is the middle entry
        assert_eq!(points[points.len() / 2], Point::ZERO);
        let first = points[0];
        let last = points[points.len() - 1];
        assert!((first.x() + last.x()).abs() < 1e-12);
        assert!((first.y() + last.y()).abs() < 1e-12);
    }

    #[test]
    fn test_even_grid_includes_center() {
        let points = sample(BlackBoard::new(4), 1.0);
        assert!(points.contains(&Point::ZERO));
    }

    #[test]
    fn test_jitter_is_seeded() {
        let board = BlackBoard::new(5).with_jitter(true);
        let a = sample(board, 1.0);
        let b = sample(board, 1.0);
        assert_eq!(a, b);
        assert_ne!(a, sample(BlackBoard::new(5), 1.0));
        assert!(a.iter().all(|p| p.distance(&Point::ZERO) <= 1.0 + 1e-12));
    }
}
