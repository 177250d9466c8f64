//! Probe Operations - Pure Functions
//!
//! Build ray queries and walk them through a world. Every function here is a
//! pure function of its inputs and of the world's answers at call time.

use super::grid_walk::GridRayCells;
use super::probe_data::{ProbeEntry, RayQuery, RayQueryDesc, Termination, TraversalReport};
use crate::error::{ProbeError, ProbeResult};
use crate::math::{is_finite_point, is_finite_vector, normalize_or_zero, offset_point, rotate_direction};
use crate::world::{BlockSource, GridCell};
use cgmath::{Point3, Vector3};

// ============================================================================
// QUERY CONSTRUCTION
// ============================================================================

/// Validate a query description and resolve its end point
///
/// # Errors
/// `InvalidConfiguration` when neither a direction nor an end point is set,
/// when `max_steps` is zero, when any coordinate is not finite or falls
/// outside the `i32` grid, or when a direction-derived query has a
/// non-positive distance.
pub fn build_ray_query(desc: &RayQueryDesc) -> ProbeResult<RayQuery> {
    if desc.max_steps == 0 {
        return Err(ProbeError::invalid("max_steps must be greater than 0"));
    }

    if !is_finite_point(desc.origin) {
        return Err(ProbeError::invalid(format!(
            "origin {:?} is not finite",
            desc.origin
        )));
    }

    let end_point = match (desc.end_point, desc.direction) {
        (Some(end_point), direction) => {
            if direction.is_some() {
                log::debug!("[Probe] Query has both an end point and a direction, using the end point");
            }
            if !is_finite_point(end_point) {
                return Err(ProbeError::invalid(format!(
                    "end point {:?} is not finite",
                    end_point
                )));
            }
            end_point
        }
        (None, Some(direction)) => {
            if !is_finite_vector(direction) {
                return Err(ProbeError::invalid(format!(
                    "direction {:?} is not finite",
                    direction
                )));
            }
            if !(desc.distance.is_finite() && desc.distance > 0.0) {
                return Err(ProbeError::invalid(format!(
                    "distance must be a positive number, got {}",
                    desc.distance
                )));
            }
            if !(desc.yaw_offset_degrees.is_finite() && desc.pitch_offset_degrees.is_finite()) {
                return Err(ProbeError::invalid("yaw and pitch offsets must be finite"));
            }
            derive_end_point(
                desc.origin,
                direction,
                desc.distance,
                desc.yaw_offset_degrees,
                desc.pitch_offset_degrees,
            )
        }
        (None, None) => {
            log::warn!("[Probe] Rejected ray query from {:?}: no direction or end point", desc.origin);
            return Err(ProbeError::invalid(
                "ray query needs a direction or an end point",
            ));
        }
    };

    for (label, point) in [("origin", desc.origin), ("end point", end_point)] {
        if GridCell::try_containing(point).is_none() {
            return Err(ProbeError::invalid(format!(
                "{} {:?} lies outside the integer grid",
                label, point
            )));
        }
    }

    Ok(RayQuery {
        origin: desc.origin,
        end_point,
        max_steps: desc.max_steps,
        stop_at_first_blocker: desc.stop_at_first_blocker,
    })
}

/// End point reached by travelling `distance` along a rotated direction
/// Pure function - a zero direction yields the origin itself
pub fn derive_end_point(
    origin: Point3<f64>,
    direction: Vector3<f64>,
    distance: f64,
    yaw_offset_degrees: f64,
    pitch_offset_degrees: f64,
) -> Point3<f64> {
    let heading = rotate_direction(
        normalize_or_zero(direction),
        yaw_offset_degrees,
        pitch_offset_degrees,
    );
    offset_point(origin, heading, distance)
}

// ============================================================================
// TRAVERSAL
// ============================================================================

/// Cells of a query, near to far, without touching any world
pub fn grid_cells(query: &RayQuery) -> GridRayCells {
    GridRayCells::new(query)
}

/// Walk a query and collect every cell the world reports content for
///
/// With `stop_at_first_blocker` the walk ends right after appending the first
/// content `is_blocking` accepts. World errors abort the walk and propagate.
pub fn traverse<S, B>(
    query: &RayQuery,
    world: &S,
    is_blocking: B,
) -> Result<Vec<ProbeEntry<S::Content>>, S::Error>
where
    S: BlockSource + ?Sized,
    B: Fn(&S::Content) -> bool,
{
    traverse_detailed(query, world, is_blocking).map(|report| report.entries)
}

/// Like `traverse`, also reporting how many cells were visited and why the
/// walk stopped
pub fn traverse_detailed<S, B>(
    query: &RayQuery,
    world: &S,
    is_blocking: B,
) -> Result<TraversalReport<S::Content>, S::Error>
where
    S: BlockSource + ?Sized,
    B: Fn(&S::Content) -> bool,
{
    traverse_with_cancel(query, world, is_blocking, || false)
}

/// Like `traverse_detailed`, polling `should_cancel` once per cell before
/// the world is queried for it
pub fn traverse_with_cancel<S, B, K>(
    query: &RayQuery,
    world: &S,
    is_blocking: B,
    mut should_cancel: K,
) -> Result<TraversalReport<S::Content>, S::Error>
where
    S: BlockSource + ?Sized,
    B: Fn(&S::Content) -> bool,
    K: FnMut() -> bool,
{
    let mut walk = grid_cells(query);
    let mut entries = Vec::new();
    let mut cells_visited = 0u32;

    let termination = loop {
        let Some(cell) = walk.next() else {
            break walk.termination().unwrap_or(Termination::ReachedEnd);
        };

        if should_cancel() {
            break Termination::Cancelled;
        }

        cells_visited += 1;
        log::trace!("[Probe] Visiting cell {}", cell);

        if let Some(content) = world.block_at(cell)? {
            let blocking = query.stop_at_first_blocker && is_blocking(&content);
            entries.push(ProbeEntry { cell, content });
            if blocking {
                break Termination::Blocked;
            }
        }
    };

    log::debug!(
        "[Probe] Traversal {:?} -> {:?} visited {} cells, {} with content, stopped: {:?}",
        query.origin,
        query.end_point,
        cells_visited,
        entries.len(),
        termination
    );

    Ok(TraversalReport {
        entries,
        cells_visited,
        termination,
    })
}

/// First blocking entry along a query, if any
pub fn first_blocker<S, B>(
    query: &RayQuery,
    world: &S,
    is_blocking: B,
) -> Result<Option<ProbeEntry<S::Content>>, S::Error>
where
    S: BlockSource + ?Sized,
    B: Fn(&S::Content) -> bool,
{
    let query = RayQuery {
        stop_at_first_blocker: true,
        ..*query
    };
    let report = traverse_detailed(&query, world, is_blocking)?;
    Ok(match report.termination {
        Termination::Blocked => report.entries.into_iter().last(),
        _ => None,
    })
}
