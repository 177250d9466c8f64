//! Probe Data - ray queries and traversal results
//!
//! Plain data. Construction and traversal live in probe_operations.rs.

use crate::constants::traversal::DEFAULT_MAX_STEPS;
use crate::world::GridCell;
use cgmath::{Point3, Vector3};

/// Unvalidated description of a ray query
///
/// Either `end_point` or `direction` must be set. When both are set the
/// explicit end point wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayQueryDesc {
    pub origin: Point3<f64>,
    pub end_point: Option<Point3<f64>>,
    pub direction: Option<Vector3<f64>>,
    /// Length of the derived segment; only read with `direction`
    pub distance: f64,
    /// Degrees about the global up axis; 90 turns +Z toward -X
    pub yaw_offset_degrees: f64,
    /// Degrees about the heading's right axis; 90 tilts a level heading straight up
    pub pitch_offset_degrees: f64,
    pub max_steps: u32,
    pub stop_at_first_blocker: bool,
}

impl RayQueryDesc {
    /// Query without a target yet
    pub fn from_origin(origin: Point3<f64>) -> Self {
        Self {
            origin,
            end_point: None,
            direction: None,
            distance: 0.0,
            yaw_offset_degrees: 0.0,
            pitch_offset_degrees: 0.0,
            max_steps: DEFAULT_MAX_STEPS,
            stop_at_first_blocker: true,
        }
    }

    /// Segment between two explicit points
    pub fn between(origin: Point3<f64>, end_point: Point3<f64>) -> Self {
        Self {
            end_point: Some(end_point),
            ..Self::from_origin(origin)
        }
    }

    /// Segment of `distance` along `direction`
    pub fn along(origin: Point3<f64>, direction: Vector3<f64>, distance: f64) -> Self {
        Self {
            direction: Some(direction),
            distance,
            ..Self::from_origin(origin)
        }
    }

    pub fn with_offsets(mut self, yaw_offset_degrees: f64, pitch_offset_degrees: f64) -> Self {
        self.yaw_offset_degrees = yaw_offset_degrees;
        self.pitch_offset_degrees = pitch_offset_degrees;
        self
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Keep going past blocking cells to the end of the segment
    pub fn cast_through(mut self) -> Self {
        self.stop_at_first_blocker = false;
        self
    }

    pub fn with_traversal_config(mut self, config: &crate::config::TraversalConfig) -> Self {
        self.max_steps = config.max_steps;
        self.stop_at_first_blocker = config.stop_at_first_blocker;
        self
    }
}

/// Validated ray query with a resolved end point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayQuery {
    pub origin: Point3<f64>,
    pub end_point: Point3<f64>,
    pub max_steps: u32,
    pub stop_at_first_blocker: bool,
}

/// One visited cell that the world reported content for
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeEntry<C> {
    pub cell: GridCell,
    pub content: C,
}

/// Why a traversal stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The cell containing the end point was visited
    ReachedEnd,
    /// A blocking cell was appended with `stop_at_first_blocker` set
    Blocked,
    /// `max_steps` advances were taken
    StepCap,
    /// No axis could advance
    NoProgress,
    /// The caller's cancellation check asked to stop
    Cancelled,
}

/// Traversal result with bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalReport<C> {
    /// Cells with content, near to far
    pub entries: Vec<ProbeEntry<C>>,
    /// Cells queried, with or without content
    pub cells_visited: u32,
    pub termination: Termination,
}

impl<C> TraversalReport<C> {
    /// Last appended entry when the traversal stopped on a blocker
    pub fn blocker(&self) -> Option<&ProbeEntry<C>> {
        match self.termination {
            Termination::Blocked => self.entries.last(),
            _ => None,
        }
    }
}
