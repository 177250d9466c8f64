//! Grid line stepping (3-D DDA)
//!
//! Walks the cells a segment passes through, near to far. Crossing distances
//! are recomputed from the current cell on every step rather than accumulated,
//! so long walks do not drift.
//!
//! When two or three axes cross within `CROSSING_EPSILON` of each other the
//! walk advances all of them at once. A segment through an exact corner moves
//! diagonally instead of picking one neighbor arbitrarily.

use super::probe_data::{RayQuery, Termination};
use crate::constants::traversal::CROSSING_EPSILON;
use crate::world::GridCell;
use cgmath::Point3;

/// Iterator over the grid cells of a ray query
#[derive(Debug, Clone)]
pub struct GridRayCells {
    origin: [f64; 3],
    delta: [f64; 3],
    step: [i32; 3],
    end_cell: GridCell,
    next_cell: Option<GridCell>,
    steps: u32,
    max_steps: u32,
    termination: Option<Termination>,
}

impl GridRayCells {
    pub fn new(query: &RayQuery) -> Self {
        let origin = to_array(query.origin);
        let end = to_array(query.end_point);
        let delta = [end[0] - origin[0], end[1] - origin[1], end[2] - origin[2]];
        let step = [sign(delta[0]), sign(delta[1]), sign(delta[2])];

        let start_cell = GridCell::containing(query.origin);
        let end_cell = GridCell::containing(query.end_point);

        Self {
            origin,
            delta,
            step,
            end_cell,
            next_cell: Some(start_cell),
            steps: 0,
            max_steps: query.max_steps,
            termination: None,
        }
    }

    /// Why the walk ended, once it has
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Advances taken so far
    pub fn steps_taken(&self) -> u32 {
        self.steps
    }

    pub fn end_cell(&self) -> GridCell {
        self.end_cell
    }

    fn advance_from(&mut self, cell: GridCell) -> Option<GridCell> {
        if cell == self.end_cell {
            self.termination = Some(Termination::ReachedEnd);
            return None;
        }

        let t = [
            self.crossing_t(cell, 0),
            self.crossing_t(cell, 1),
            self.crossing_t(cell, 2),
        ];
        let t_min = t[0].min(t[1]).min(t[2]);
        if !t_min.is_finite() {
            self.termination = Some(Termination::NoProgress);
            return None;
        }

        let mut next = [cell.x, cell.y, cell.z];
        for axis in 0..3 {
            if (t[axis] - t_min).abs() <= CROSSING_EPSILON {
                next[axis] += self.step[axis];
            }
        }

        self.steps += 1;
        if self.steps >= self.max_steps {
            self.termination = Some(Termination::StepCap);
            return None;
        }

        Some(GridCell::new(next[0], next[1], next[2]))
    }

    /// Parametric distance along the segment to the next face on `axis`
    ///
    /// An axis already level with the end cell never crosses again. A segment
    /// ending exactly on a face of the end cell would otherwise cross it at
    /// `t == 1` and step one cell past the end.
    fn crossing_t(&self, cell: GridCell, axis: usize) -> f64 {
        if cell.axis(axis) == self.end_cell.axis(axis) {
            return f64::INFINITY;
        }

        let boundary = match self.step[axis] {
            1 => (cell.axis(axis) + 1) as f64,
            -1 => cell.axis(axis) as f64,
            _ => return f64::INFINITY,
        };
        (boundary - self.origin[axis]) / self.delta[axis]
    }
}

impl Iterator for GridRayCells {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        let cell = self.next_cell.take()?;
        self.next_cell = self.advance_from(cell);
        Some(cell)
    }
}

fn sign(value: f64) -> i32 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

fn to_array(p: Point3<f64>) -> [f64; 3] {
    [p.x, p.y, p.z]
}
