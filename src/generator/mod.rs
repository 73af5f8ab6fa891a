// Random instance generation for exercising the search core (benches, demo
// binary).

use rand::Rng;

use crate::model::Item;

pub struct Generator;

impl Generator {
    pub fn generate_items(
        num_items: usize,
        width_range: (u32, u32),
        height_range: (u32, u32),
        max_side: u32,
    ) -> Vec<Item> {
        let mut rng = rand::rng();
        let mut items = Vec::with_capacity(num_items);

        let (min_w, max_w) = width_range;
        let (min_l, max_l) = height_range;
        assert!(min_w <= max_w, "min width must be <= max width");
        assert!(min_l <= max_l, "min length must be <= max length");

        for i in 0..num_items {
            let w = rng.random_range(min_w..=max_w);
            let l = rng.random_range(min_l..=max_l);
            assert!(w <= max_side && l <= max_side, "generated item ({w}, {l}) exceeds max_side ({max_side})");
            items.push(Item::new(format!("item-{i}"), w, l));
        }

        items
    }
}
