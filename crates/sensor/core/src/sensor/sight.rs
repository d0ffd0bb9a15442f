//! Line-of-sight tracing between two grid cells.
//!
//! Cells are enumerated with Bresenham's integer line algorithm. The walk
//! starts one step away from the observer and stops as soon as a traced cell
//! lies at or beyond the straight-line distance to the target, so neither
//! endpoint is ever inspected.

use std::iter::FusedIterator;

use crate::config::ObstacleMask;
use crate::env::CellInfo;
use crate::state::Position;

use super::geometry::distance_squared;

/// Iterator over the intermediate cells of a sight line.
#[derive(Clone, Debug)]
pub struct SightLine {
    origin: Position,
    current: Position,
    dx: i64,
    dy: i64,
    step_x: i32,
    step_y: i32,
    error: i64,
    limit: i128,
    done: bool,
}

impl SightLine {
    pub fn new(from: Position, to: Position) -> Self {
        let dx = (i64::from(to.x) - i64::from(from.x)).abs();
        let dy = (i64::from(to.y) - i64::from(from.y)).abs();

        Self {
            origin: from,
            current: from,
            dx,
            dy,
            step_x: if from.x < to.x { 1 } else { -1 },
            step_y: if from.y < to.y { 1 } else { -1 },
            error: dx - dy,
            limit: distance_squared(from, to),
            done: false,
        }
    }

    /// Returns the first traced cell whose metadata matches `obstacles`.
    ///
    /// Cells for which `lookup` yields `None` (outside the map) never block.
    pub fn first_obstruction<F>(
        mut self,
        obstacles: &ObstacleMask,
        mut lookup: F,
    ) -> Option<Position>
    where
        F: FnMut(Position) -> Option<CellInfo>,
    {
        self.find(|&cell| lookup(cell).is_some_and(|info| obstacles.blocks(info)))
    }
}

impl Iterator for SightLine {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let doubled = 2 * self.error;
        if doubled > -self.dy {
            self.error -= self.dy;
            self.current.x += self.step_x;
        }
        if doubled < self.dx {
            self.error += self.dx;
            self.current.y += self.step_y;
        }

        // Squared lengths compare exactly the same way as their roots.
        if distance_squared(self.origin, self.current) >= self.limit {
            self.done = true;
            return None;
        }

        Some(self.current)
    }
}

impl FusedIterator for SightLine {}

/// True when no traced cell between `observer` and `target` is an obstacle.
///
/// Identical cells trace nothing and therefore always see each other.
pub fn has_line_of_sight<F>(
    observer: Position,
    target: Position,
    obstacles: &ObstacleMask,
    lookup: F,
) -> bool
where
    F: FnMut(Position) -> Option<CellInfo>,
{
    SightLine::new(observer, target)
        .first_obstruction(obstacles, lookup)
        .is_none()
}
