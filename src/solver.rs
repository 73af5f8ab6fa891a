// The top-level handle tying items, containers, strategy, and settings
// together: every setter validates before committing and resets the
// solution on success.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::error::PackError;
use crate::hyper::{self, ContainerMode};
use crate::model::item::MAX_ID_LEN;
use crate::model::{Container, ContainerId, ContainerSet, Item, ItemId, Solution};
use crate::points::Strategy;
use crate::preprocess::{self, Orientation, SortKey};
use crate::search::{self, control::SearchControl};
use crate::settings::Settings;
use crate::strip;

fn validate_items(items: &HashMap<ItemId, Item>) -> Result<(), PackError> {
    if items.is_empty() {
        return Ok(());
    }
    for (id, item) in items {
        if id.is_empty() || id.len() > MAX_ID_LEN {
            return Err(PackError::Items(format!("item id {id:?} must be non-empty and at most {MAX_ID_LEN} chars")));
        }
        if id != &item.id {
            return Err(PackError::Items(format!("item key {id:?} does not match item.id {:?}", item.id)));
        }
        if item.w == 0 || item.l == 0 {
            return Err(PackError::Dimensions(format!("item {id:?} must have positive width and length")));
        }
    }
    Ok(())
}

fn validate_containers(containers: &HashMap<ContainerId, Container>) -> Result<(), PackError> {
    if containers.is_empty() {
        return Err(PackError::Containers("at least one container is required".into()));
    }
    for (id, c) in containers {
        if id != &c.id {
            return Err(PackError::Containers(format!("container key {id:?} does not match container.id {:?}", c.id)));
        }
        if c.w == 0 || c.l == 0 {
            return Err(PackError::Dimensions(format!("container {id:?} must have positive width and length")));
        }
    }
    Ok(())
}

// Owns items, containers (or a strip), the active strategy, and settings.
// Retains only the last accepted solution between search calls.
pub struct Solver {
    items: HashMap<ItemId, Item>,
    order: Vec<ItemId>,
    containers: ContainerSet,
    strategy: Strategy,
    settings: Settings,
    container_min_height: Option<u32>,
    solution: Solution,
}

impl Solver {
    pub fn new(
        containers: HashMap<ContainerId, Container>,
        items: HashMap<ItemId, Item>,
        settings: Settings,
    ) -> Result<Self, PackError> {
        validate_containers(&containers)?;
        validate_items(&items)?;
        settings.validate()?;

        let order = Self::default_order(&items);
        Ok(Self {
            items,
            order,
            containers: ContainerSet::Fixed(containers.into_values().collect()),
            strategy: Strategy::default_order(),
            settings,
            container_min_height: None,
            solution: Solution::empty(),
        })
    }

    pub fn new_strip(width: u32, items: HashMap<ItemId, Item>, settings: Settings) -> Result<Self, PackError> {
        if width == 0 {
            return Err(PackError::Dimensions("strip_pack_width must be positive".into()));
        }
        validate_items(&items)?;
        settings.validate()?;

        let order = Self::default_order(&items);
        let seed = strip::seed_height(&order.iter().map(|id| items[id].clone()).collect::<Vec<_>>());
        Ok(Self {
            items,
            order,
            containers: ContainerSet::Strip { width, height: seed.max(1) },
            strategy: Strategy::default_order(),
            settings,
            container_min_height: None,
            solution: Solution::empty(),
        })
    }

    fn default_order(items: &HashMap<ItemId, Item>) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = items.keys().cloned().collect();
        ids.sort();
        ids
    }

    fn items_in_order(&self) -> Vec<Item> {
        self.order.iter().map(|id| self.items[id].clone()).collect()
    }

    fn reset_solution(&mut self) {
        self.solution = Solution::empty();
    }

    // --- setters: validate, then commit and reset the solution ---

    pub fn set_items(&mut self, items: HashMap<ItemId, Item>) -> Result<(), PackError> {
        validate_items(&items)?;
        self.order = Self::default_order(&items);
        self.items = items;
        self.reset_solution();
        Ok(())
    }

    pub fn set_containers(&mut self, containers: HashMap<ContainerId, Container>) -> Result<(), PackError> {
        if self.containers.is_strip() {
            return Err(PackError::Containers(
                "containers cannot be set while in strip-pack mode; construct a new Solver instead".into(),
            ));
        }
        validate_containers(&containers)?;
        self.containers = ContainerSet::Fixed(containers.into_values().collect());
        self.reset_solution();
        Ok(())
    }

    pub fn set_strategy(&mut self, strategy: Strategy) -> Result<(), PackError> {
        self.strategy = strategy;
        self.reset_solution();
        Ok(())
    }

    // Settings reassignment does not reset the solution.
    pub fn set_settings(&mut self, settings: Settings) -> Result<(), PackError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    pub fn set_container_min_height(&mut self, floor: Option<u32>) -> Result<(), PackError> {
        self.container_min_height = floor;
        self.reset_solution();
        Ok(())
    }

    pub fn orient_items(&mut self, orientation: Orientation) {
        let mut items = self.items_in_order();
        preprocess::orient_items(&mut items, orientation);
        for item in items {
            self.items.insert(item.id.clone(), item);
        }
        self.reset_solution();
    }

    pub fn sort_items(&mut self, key: SortKey, reverse: bool) {
        let mut items = self.items_in_order();
        preprocess::sort_items(&mut items, key, reverse);
        self.order = items.into_iter().map(|i| i.id).collect();
        self.reset_solution();
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn containers(&self) -> &ContainerSet {
        &self.containers
    }

    // Runs the 2-opt local search once, for the currently configured
    // strategy only. For strip mode, retains the shrunk `H_current`
    // afterward.
    pub fn run_local_search(&mut self) -> Result<(), PackError> {
        self.settings.validate()?;
        let deadline = Instant::now() + Duration::from_secs(self.settings.max_time_in_seconds);
        let control = SearchControl::with_deadline(deadline);
        let items = self.items_in_order();

        match &self.containers {
            ContainerSet::Fixed(containers) => {
                let result = search::local_search(items, containers, &self.strategy, self.settings.rotation, &control);
                self.solution = result.solution;
            }
            ContainerSet::Strip { width, height } => {
                let outcome = strip::run(
                    items,
                    *width,
                    &self.strategy,
                    self.settings.rotation,
                    self.container_min_height,
                    Some(*height),
                    &control,
                );
                self.solution = outcome.state.solution;
                self.containers = ContainerSet::Strip { width: *width, height: outcome.h_current };
            }
        }
        Ok(())
    }

    // Runs the full hyper-search over all `10!` strategies. In strip mode,
    // the parent's retained strip height is left unchanged even though the
    // best solution found is kept; each worker shrinks only its own
    // container copy.
    pub fn run_hyper_search(&mut self) -> Result<(), PackError> {
        self.settings.validate()?;
        let items = self.items_in_order();

        let mode = match &self.containers {
            ContainerSet::Fixed(containers) => ContainerMode::Fixed(containers.clone()),
            ContainerSet::Strip { width, .. } => {
                ContainerMode::Strip { width: *width, container_min_height: self.container_min_height }
            }
        };

        let output = hyper::run(items, mode, self.settings.rotation, self.settings.workers_num, self.settings.max_time_in_seconds)?;

        if let Some(best) = output.best {
            self.solution = best.solution;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    fn containers(specs: &[(&str, u32, u32)]) -> HashMap<ContainerId, Container> {
        specs.iter().map(|(id, w, l)| (id.to_string(), Container::new(*id, *w, *l))).collect()
    }

    fn items(specs: &[(&str, u32, u32)]) -> HashMap<ItemId, Item> {
        specs.iter().map(|(id, w, l)| (id.to_string(), Item::new(*id, *w, *l))).collect()
    }

    #[test]
    fn rejects_empty_container_set() {
        let result = Solver::new(HashMap::new(), items(&[("a", 1, 1)]), Settings::default());
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let result = Solver::new(containers(&[("c", 0, 4)]), items(&[("a", 1, 1)]), Settings::default());
        assert!(matches!(result, Err(PackError::Dimensions(_))));
    }

    #[test]
    fn setting_items_resets_solution() {
        let mut solver = Solver::new(containers(&[("c", 4, 4)]), items(&[("a", 2, 2)]), Settings::default()).unwrap();
        solver.run_local_search().unwrap();
        assert!(!solver.solution().is_empty());

        solver.set_items(items(&[("b", 2, 2)])).unwrap();
        assert!(solver.solution().is_empty());
    }

    #[test]
    fn settings_reassignment_does_not_reset_solution() {
        let mut solver = Solver::new(containers(&[("c", 4, 4)]), items(&[("a", 2, 2)]), Settings::default()).unwrap();
        solver.run_local_search().unwrap();
        assert!(!solver.solution().is_empty());

        solver.set_settings(Settings { max_time_in_seconds: 5, ..Settings::default() }).unwrap();
        assert!(!solver.solution().is_empty());
    }

    #[test]
    fn set_containers_rejected_in_strip_mode() {
        let mut solver = Solver::new_strip(4, items(&[("a", 2, 2)]), Settings::default()).unwrap();
        let result = solver.set_containers(containers(&[("c", 4, 4)]));
        assert!(matches!(result, Err(PackError::Containers(_))));
    }

    #[test]
    fn local_search_solves_exact_fill_scenario() {
        let mut solver = Solver::new(
            containers(&[("c", 4, 4)]),
            items(&[("a", 2, 2), ("b", 2, 2), ("c", 2, 2), ("d", 2, 2)]),
            Settings::default(),
        )
        .unwrap();
        solver.run_local_search().unwrap();
        let util = *solver.solution().utilization.get("c").unwrap();
        assert!((util - 1.0).abs() < 1e-9);
    }
}
