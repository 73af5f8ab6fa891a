// Hyper-search: enumerates every permutation of the ten potential-point
// classes and runs a local search per permutation, sharing a global-best
// utilization cell across workers.
//
// Worker model: OS threads (std::thread::scope) rather than OS processes.
// Each worker is still handed its own owned clone of items/containers/
// strategy-chunk, so no packing state is actually shared between workers;
// the only shared state is the SharedBest cell.

use std::time::{Duration, Instant};

use log::{error, info, warn};

use crate::error::PackError;
use crate::model::{Container, Item};
use crate::points::Strategy;
use crate::search::{local_search, PermutationState, SearchControl, SharedBest};
use crate::strip;

// Which container layer the hyper-search is driving: the plain fixed-set
// dispatcher, or the strip-pack adapter.
pub enum ContainerMode {
    Fixed(Vec<Container>),
    Strip { width: u32, container_min_height: Option<u32> },
}

// Result of a full hyper-search run.
pub struct HyperOutput {
    // Best solution found across all workers. `None` only if every worker
    // faulted (see `worker_errors`) or the item list was empty.
    pub best: Option<PermutationState>,
    // One entry per worker that raised during its chunk; logged and
    // counted but never fatal on their own.
    pub worker_errors: Vec<String>,
}

// Contiguous [start, end) index ranges over the 10! strategy space, one
// per worker, covering the whole space with no gaps or overlap.
fn partition_strategy_space(workers_num: usize) -> Vec<(u64, u64)> {
    let total = Strategy::permutation_count();
    let workers_num = workers_num.max(1) as u64;
    let chunk_size = total.div_ceil(workers_num);

    let mut chunks = Vec::new();
    let mut start = 0u64;
    while start < total {
        let end = (start + chunk_size).min(total);
        chunks.push((start, end));
        start = end;
    }
    chunks
}

// One worker's slice of the hyper-search: single-threaded, CPU-bound,
// iterates strategies in chunk order, polling the shared-best cell and the
// deadline between strategies. A worker operating in strip mode packs on
// its own container-height copy; its shrinking is never written back to
// the caller.
fn run_worker_chunk(
    items: Vec<Item>,
    mode: &ContainerMode,
    rotation: bool,
    range: (u64, u64),
    deadline: Instant,
    shared_best: &SharedBest,
) -> Option<PermutationState> {
    let mut local_best: Option<PermutationState> = None;

    for idx in range.0..range.1 {
        if shared_best.is_complete() || Instant::now() >= deadline {
            break;
        }

        let strategy = Strategy::at_index(idx);
        let control = SearchControl { deadline: Some(deadline), shared_best: Some(shared_best), cancelled: None };

        let result = match mode {
            ContainerMode::Fixed(containers) => local_search(items.clone(), containers, &strategy, rotation, &control),
            ContainerMode::Strip { width, container_min_height } => {
                strip::run(items.clone(), *width, &strategy, rotation, *container_min_height, None, &control).state
            }
        };

        // The shared cell tracks best per-container utilization, since the
        // 100% stop condition means a container is fully packed, not that
        // every item happened to get placed somewhere.
        let best_util = result.solution.best_container_utilization();
        if shared_best.try_update(best_util) {
            info!("hyper-search: new global best utilization {:.4}", best_util);
        }

        let is_better = local_best.as_ref().map_or(true, |b| result.objective > b.objective);
        if is_better {
            local_best = Some(result);
        }
    }

    local_best
}

// Runs the hyper-search. `items` should already have had the orientation
// and sorting preprocessors applied by the caller.
pub fn run(
    items: Vec<Item>,
    mode: ContainerMode,
    rotation: bool,
    workers_num: usize,
    max_time_in_seconds: u64,
) -> Result<HyperOutput, PackError> {
    if items.is_empty() {
        return Ok(HyperOutput { best: None, worker_errors: Vec::new() });
    }

    let deadline = Instant::now() + Duration::from_secs(max_time_in_seconds.max(1));
    let shared_best = SharedBest::new();
    let chunks = partition_strategy_space(workers_num);

    let results: Vec<std::thread::Result<Option<PermutationState>>> = std::thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .into_iter()
            .map(|range| {
                let items = items.clone();
                let mode_ref = &mode;
                let shared_best = &shared_best;
                scope.spawn(move || run_worker_chunk(items, mode_ref, rotation, range, deadline, shared_best))
            })
            .collect();
        handles.into_iter().map(|h| h.join()).collect()
    });

    let mut best: Option<PermutationState> = None;
    let mut worker_errors = Vec::new();

    for outcome in results {
        match outcome {
            Ok(Some(state)) => {
                if best.as_ref().map_or(true, |b| state.objective > b.objective) {
                    best = Some(state);
                }
            }
            Ok(None) => {}
            Err(panic) => {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                error!("hyper-search worker faulted: {message}");
                worker_errors.push(message);
            }
        }
    }

    if best.is_none() && !worker_errors.is_empty() {
        return Err(PackError::MultiProcess(format!(
            "all {} worker(s) failed: {}",
            worker_errors.len(),
            worker_errors.join("; ")
        )));
    }

    if !worker_errors.is_empty() {
        warn!("hyper-search: {} worker(s) faulted but others completed", worker_errors.len());
    }

    Ok(HyperOutput { best, worker_errors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    #[test]
    fn partitions_cover_whole_space_without_gaps() {
        let chunks = partition_strategy_space(4);
        let total = Strategy::permutation_count();
        assert_eq!(chunks.first().unwrap().0, 0);
        assert_eq!(chunks.last().unwrap().1, total);
        for w in chunks.windows(2) {
            assert_eq!(w[0].1, w[1].0);
        }
    }

    #[test]
    fn empty_items_short_circuit_without_spawning_workers() {
        let mode = ContainerMode::Fixed(vec![Container::new("c", 4, 4)]);
        let out = run(Vec::new(), mode, true, 2, 1).unwrap();
        assert!(out.best.is_none());
        assert!(out.worker_errors.is_empty());
    }

    #[test]
    fn finds_hundred_percent_packing_with_multiple_workers() {
        let mode = ContainerMode::Fixed(vec![Container::new("c", 4, 4)]);
        let items = vec![Item::new("a", 2, 2), Item::new("b", 2, 2), Item::new("c", 2, 2), Item::new("d", 2, 2)];

        let start = Instant::now();
        let out = run(items, mode, true, 4, 5).unwrap();
        let elapsed = start.elapsed();

        let best = out.best.unwrap();
        assert!(best.is_perfect());
        // The shared-best cell short-circuits every worker once one of them
        // hits 100%; this should finish well before the 5s deadline.
        assert!(elapsed < Duration::from_secs(4));
    }

    #[test]
    fn strip_mode_shrinks_height_via_hyper_search() {
        let mode = ContainerMode::Strip { width: 4, container_min_height: None };
        let items = vec![Item::new("a", 2, 2), Item::new("b", 2, 2), Item::new("c", 2, 2), Item::new("d", 2, 2)];
        let out = run(items, mode, true, 2, 5).unwrap();
        let best = out.best.unwrap();
        assert!(best.unplaced.is_empty());
    }
}
