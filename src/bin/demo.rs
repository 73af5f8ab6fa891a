// Small end-to-end demo of the packing core: a dev convenience for poking
// at the library from the command line.

use std::collections::HashMap;

use hyperpack::{Container, Item, Settings, Solver};

use support::random_instance;

fn main() {
    env_logger::init();

    println!("=== hyperpack demo ===");

    println!("\n>>> Mode 1: Solver API, local search only");
    run_solver_demo();

    println!("\n>>> Mode 2: Solver API, hyper-search over strategies");
    run_hyper_demo();

    println!("\n>>> Mode 3: ad hoc run via the unbounded local-search primitive");
    run_unbounded_primitive_demo();

    println!("\n=== demo completed ===");
}

fn run_solver_demo() {
    let (containers, items) = random_instance(20, (5, 20), (5, 20), 40);
    let mut solver = Solver::new(containers, items, Settings::default()).expect("valid instance");

    solver.run_local_search().expect("local search run");
    let solution = solver.solution();
    println!(
        "placed {} item(s), overall utilization {:.3}",
        solution.placed_item_count(),
        solution.overall_fill_ratio(solution.placements.values().flat_map(|m| m.values()).map(|p| p.area()).sum())
    );
}

fn run_hyper_demo() {
    let (containers, items) = random_instance(30, (5, 20), (5, 20), 40);
    let settings = Settings { workers_num: 4, max_time_in_seconds: 2, ..Settings::default() };
    let mut solver = Solver::new(containers, items, settings).expect("valid instance");

    solver.run_hyper_search().expect("hyper search run");
    println!("placed {} item(s) after hyper-search", solver.solution().placed_item_count());
}

// Demonstrates `algorithms::local_search::solve` directly: one fixed
// strategy climbed to a local optimum without going through `Solver`.
fn run_unbounded_primitive_demo() {
    use hyperpack::algorithms::local_search::solve;
    use hyperpack::search::{PermutationState, TwoOptNeighborhood};
    use hyperpack::Strategy;

    let containers = vec![Container::new("c", 30, 30)];
    let items: Vec<Item> = (0..8).map(|i| Item::new(format!("item-{i}"), 6, 9)).collect();
    let strategy = Strategy::default_order();

    let start = PermutationState::evaluate(items, &containers, &strategy, true);
    let neighborhood = TwoOptNeighborhood { containers, strategy, rotation: true };

    let converged = solve(start, &neighborhood);
    println!("converged to objective {} with {} item(s) unplaced", converged.objective, converged.unplaced.len());
}

// Random-instance helper shared by the demo modes above. Also builds the
// container set, so it stays out of the library's public `Generator`.
mod support {
    use super::*;
    use hyperpack::generator::Generator;
    use hyperpack::ContainerId;

    pub fn random_instance(
        num_items: usize,
        width_range: (u32, u32),
        height_range: (u32, u32),
        max_side: u32,
    ) -> (HashMap<ContainerId, Container>, HashMap<String, Item>) {
        let items = Generator::generate_items(num_items, width_range, height_range, max_side);
        let items: HashMap<String, Item> = items.into_iter().map(|i| (i.id.clone(), i)).collect();

        let box_size = max_side * 10;
        let mut containers = HashMap::new();
        containers.insert("c0".to_string(), Container::new("c0", box_size, box_size));
        (containers, items)
    }
}
