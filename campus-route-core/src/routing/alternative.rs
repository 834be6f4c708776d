//! Alternative paths through one intermediate landmark
//!
//! A direct answer that is a single edge ("road straight there") says little
//! about how to cross campus. When the shortest path has no intermediate
//! landmark, or there is no shortest path at all, every other landmark `k` is
//! tried as a via point and one of the `start -> k -> end` routes is chosen.

use hashbrown::HashSet;
use rayon::prelude::*;

use super::dijkstra::{shortest_path, shortest_path_with_cost};
use crate::{DEFAULT_ALTERNATIVE_THRESHOLD, Error, LandmarkId, RouteGraph, WeightKey};

/// How a via-landmark candidate is picked among all reachable ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AcceptancePolicy {
    /// Candidates are visited in ascending landmark id. A candidate is taken
    /// when its cost is below `best * (1 + threshold)`, and `best` becomes
    /// its cost. The result depends on the visiting order: a later candidate
    /// within the margin replaces a slightly cheaper earlier one.
    #[default]
    RunningThreshold,
    /// Cheapest candidate, the lowest landmark id on ties
    GlobalMinimum,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlternativeOptions {
    /// Relative margin of [`AcceptancePolicy::RunningThreshold`]
    pub threshold: f64,
    pub policy: AcceptancePolicy,
}

impl Default for AlternativeOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_ALTERNATIVE_THRESHOLD,
            policy: AcceptancePolicy::default(),
        }
    }
}

#[derive(Debug)]
struct ViaCandidate {
    via: LandmarkId,
    path: Vec<LandmarkId>,
    cost: f64,
}

/// Finds a path from `start` to `end` that passes through at least one
/// intermediate landmark when possible.
///
/// - `start == end` gives `[start]`.
/// - A shortest path with an intermediate landmark is returned unchanged.
/// - Otherwise the via candidates are ranked by `options.policy`. Without an
///   acceptable candidate the direct single-edge path is kept.
/// - `Ok(None)` means the endpoints are not connected at all.
///
/// # Errors
///
/// [`Error::InvalidNode`] for unknown endpoints, [`Error::InvalidData`] for a
/// negative or non-finite threshold.
pub fn find_alternative(
    graph: &RouteGraph,
    start: LandmarkId,
    end: LandmarkId,
    key: WeightKey,
    options: &AlternativeOptions,
) -> Result<Option<Vec<LandmarkId>>, Error> {
    graph.validate_node(start)?;
    graph.validate_node(end)?;
    if !options.threshold.is_finite() || options.threshold < 0.0 {
        return Err(Error::InvalidData(format!(
            "Alternative threshold must be a non-negative number, got {}",
            options.threshold
        )));
    }

    if start == end {
        return Ok(Some(vec![start]));
    }

    let direct = match shortest_path(graph, start, end, key) {
        Ok(path) if path.len() > 2 => return Ok(Some(path)),
        Ok(path) => Some(path),
        Err(Error::NoPath { .. }) => None,
        Err(e) => return Err(e),
    };

    // Legs are independent; collecting keeps ascending landmark order
    let candidates: Vec<ViaCandidate> = graph
        .landmark_ids()
        .into_par_iter()
        .filter(|&via| via != start && via != end)
        .filter_map(|via| via_candidate(graph, start, via, end, key))
        .collect();

    log::debug!(
        "{} via candidates between {start} and {end}",
        candidates.len()
    );

    let chosen = match options.policy {
        AcceptancePolicy::RunningThreshold => select_running(candidates, options.threshold),
        AcceptancePolicy::GlobalMinimum => select_minimum(candidates),
    };

    match chosen {
        Some(candidate) => {
            log::debug!(
                "Alternative from {start} to {end} via {} (cost {:.2})",
                candidate.via,
                candidate.cost
            );
            Ok(Some(candidate.path))
        }
        // A connected pair always gets a route, so the single edge stands in
        None => Ok(direct),
    }
}

/// `start -> via -> end`, or `None` when a leg is unreachable or the legs
/// cross each other
fn via_candidate(
    graph: &RouteGraph,
    start: LandmarkId,
    via: LandmarkId,
    end: LandmarkId,
    key: WeightKey,
) -> Option<ViaCandidate> {
    let (first, first_cost) = shortest_path_with_cost(graph, start, via, key).ok()?;
    let (second, second_cost) = shortest_path_with_cost(graph, via, end, key).ok()?;

    let first_nodes: HashSet<LandmarkId> = first.iter().copied().collect();
    if second[1..].iter().any(|id| first_nodes.contains(id)) {
        log::trace!("Skipping via {via}: legs share landmarks");
        return None;
    }

    let mut path = first;
    path.extend_from_slice(&second[1..]);

    Some(ViaCandidate {
        via,
        path,
        cost: first_cost + second_cost,
    })
}

fn select_running(candidates: Vec<ViaCandidate>, threshold: f64) -> Option<ViaCandidate> {
    let mut best_cost = f64::INFINITY;
    let mut chosen = None;

    for candidate in candidates {
        if candidate.cost < best_cost * (1.0 + threshold) {
            best_cost = candidate.cost;
            chosen = Some(candidate);
        }
    }

    chosen
}

fn select_minimum(candidates: Vec<ViaCandidate>) -> Option<ViaCandidate> {
    candidates.into_iter().fold(None, |best, candidate| match best {
        Some(b) if b.cost <= candidate.cost => Some(b),
        _ => Some(candidate),
    })
}
