//! Property-based tests for the universal packing invariants: no two placed
//! items overlap, every placement stays in bounds, placed dimensions are
//! only ever the item's given or rotated pair, construction is
//! deterministic, and the orientation/sort preprocessors are well-behaved
//! under arbitrary inputs.

use hyperpack::construct::construct;
use hyperpack::dispatch::dispatch;
use hyperpack::preprocess::{orient_items, sort_items, Orientation, SortKey};
use hyperpack::{Container, Item, Strategy as PointStrategy};
use proptest::prelude::*;

fn arb_item(id: usize) -> impl proptest::strategy::Strategy<Value = Item> + Clone {
    (1u32..12, 1u32..12).prop_map(move |(w, l)| Item::new(format!("item-{id}"), w, l))
}

fn arb_items(max_n: usize) -> impl proptest::strategy::Strategy<Value = Vec<Item>> {
    (1..=max_n).prop_flat_map(|n| {
        let strategies: Vec<_> = (0..n).map(arb_item).collect();
        strategies
    })
}

proptest! {
    // No two placements in the same container
    // overlap, and every placement stays within the container's bounds.
    #[test]
    fn no_overlap_and_in_bounds(container_w in 1u32..40, container_l in 1u32..40, items in arb_items(10), rotation in any::<bool>()) {
        let container = Container::new("c", container_w, container_l);
        let strategy = PointStrategy::default_order();
        let out = construct(&container, &items, &strategy, rotation);

        let placements: Vec<_> = out.placements.values().collect();
        for p in &placements {
            prop_assert!(p.x + p.w <= container_w);
            prop_assert!(p.y + p.l <= container_l);
        }
        for i in 0..placements.len() {
            for j in (i + 1)..placements.len() {
                prop_assert!(!placements[i].intersects(placements[j]));
            }
        }
    }

    // A placed item's dimensions are always either its given (w, l) pair
    // or, when rotation is enabled, the swapped pair, never anything else.
    #[test]
    fn placed_dims_are_given_or_rotated(container_w in 1u32..40, container_l in 1u32..40, items in arb_items(10), rotation in any::<bool>()) {
        let container = Container::new("c", container_w, container_l);
        let strategy = PointStrategy::default_order();
        let out = construct(&container, &items, &strategy, rotation);

        for item in &items {
            if let Some(p) = out.placements.get(&item.id) {
                let given = (p.w, p.l) == (item.w, item.l);
                let rotated = rotation && (p.w, p.l) == (item.l, item.w);
                prop_assert!(given || rotated);
            }
        }
    }

    // Construction is a pure function of its inputs.
    #[test]
    fn construction_is_deterministic(container_w in 1u32..40, container_l in 1u32..40, items in arb_items(10), rotation in any::<bool>()) {
        let container = Container::new("c", container_w, container_l);
        let strategy = PointStrategy::default_order();

        let a = construct(&container, &items, &strategy, rotation);
        let b = construct(&container, &items, &strategy, rotation);

        prop_assert_eq!(a.placements.len(), b.placements.len());
        for (id, pa) in &a.placements {
            let pb = b.placements.get(id).expect("same items placed across runs");
            prop_assert_eq!(pa.as_tuple(), pb.as_tuple());
        }
        prop_assert_eq!(a.not_placed.len(), b.not_placed.len());
    }

    // Every container's utilization and the dispatcher's overall fill
    // ratio stay within [0, 1].
    #[test]
    fn utilization_is_bounded(container_w in 1u32..40, container_l in 1u32..40, items in arb_items(10), rotation in any::<bool>()) {
        let containers = vec![Container::new("c", container_w, container_l)];
        let strategy = PointStrategy::default_order();
        let out = dispatch(&containers, &items, &strategy, rotation);

        for util in out.solution.utilization.values() {
            prop_assert!(*util >= 0.0 - 1e-9 && *util <= 1.0 + 1e-9);
        }
        let total_area: u64 = items.iter().map(|i| i.area()).sum();
        let overall = out.solution.overall_fill_ratio(total_area);
        prop_assert!(overall >= 0.0 - 1e-9 && overall <= 1.0 + 1e-9);
    }

    // Round-trip property: re-orienting to the same target orientation
    // twice is a no-op, and the dimension multiset is preserved either way.
    #[test]
    fn orient_items_is_idempotent(items in arb_items(15), wide in any::<bool>()) {
        let orientation = if wide { Orientation::Wide } else { Orientation::Long };
        let mut once = items.clone();
        orient_items(&mut once, orientation);
        let mut twice = once.clone();
        orient_items(&mut twice, orientation);
        prop_assert_eq!(once, twice);

        let mut original_areas: Vec<u64> = items.iter().map(|i| i.area()).collect();
        let mut oriented_areas: Vec<u64> = once.iter().map(|i| i.area()).collect();
        original_areas.sort_unstable();
        oriented_areas.sort_unstable();
        prop_assert_eq!(original_areas, oriented_areas);
    }

    // Round-trip property: sorting twice with the same key is stable
    // (produces the same order), regardless of the input order.
    #[test]
    fn sort_items_is_stable_across_repeated_calls(items in arb_items(15), reverse in any::<bool>()) {
        let mut a = items.clone();
        let mut b = items;
        sort_items(&mut a, SortKey::Area, reverse);
        sort_items(&mut b, SortKey::Area, reverse);
        let ids_a: Vec<_> = a.iter().map(|i| i.id.clone()).collect();
        let ids_b: Vec<_> = b.iter().map(|i| i.id.clone()).collect();
        prop_assert_eq!(ids_a, ids_b);
    }
}
