// Orientation and sorting preprocessors. Both mutate the item order (and,
// for orientation, the item dimensions) seen by the search, never the
// stored item identities.

use crate::model::Item;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    // `w >= l` for every item.
    Wide,
    // `w <= l` for every item.
    Long,
}

// Reorients every item in place by swapping `(w, l)` where needed.
// Idempotent: applying the same orientation twice is a no-op.
pub fn orient_items(items: &mut [Item], orientation: Orientation) {
    for item in items.iter_mut() {
        let should_swap = match orientation {
            Orientation::Wide => item.w < item.l,
            Orientation::Long => item.w > item.l,
        };
        if should_swap {
            std::mem::swap(&mut item.w, &mut item.l);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Area,
    Perimeter,
    LongestSideRatio,
}

// Stably sorts `items` by `key`, breaking ties by `id` so the ordering is
// deterministic regardless of input iteration order. `reverse` flips only
// the primary key's direction; the id tiebreak still resolves ascending.
pub fn sort_items(items: &mut [Item], key: SortKey, reverse: bool) {
    items.sort_by(|a, b| {
        let ka = sort_value(a, key);
        let kb = sort_value(b, key);
        let primary = ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal);
        let primary = if reverse { primary.reverse() } else { primary };
        primary.then_with(|| a.id.cmp(&b.id))
    });
}

fn sort_value(item: &Item, key: SortKey) -> f64 {
    match key {
        SortKey::Area => item.area() as f64,
        SortKey::Perimeter => item.perimeter() as f64,
        SortKey::LongestSideRatio => item.longest_side_ratio(),
    }
}
