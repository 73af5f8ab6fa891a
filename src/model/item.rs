use std::fmt;

pub type ItemId = String;

pub const MAX_ID_LEN: usize = 64;

// An axis-aligned rectangular item. Immutable once constructed; rotation is
// never applied here, only by the constructor for a single placement attempt.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: ItemId,
    pub w: u32,
    pub l: u32,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, w: u32, l: u32) -> Self {
        Self { id: id.into(), w, l }
    }

    pub fn area(&self) -> u64 {
        self.w as u64 * self.l as u64
    }

    pub fn perimeter(&self) -> u64 {
        2 * (self.w as u64 + self.l as u64)
    }

    pub fn longest_side_ratio(&self) -> f64 {
        let (small, big) = if self.w <= self.l { (self.w, self.l) } else { (self.l, self.w) };
        if small == 0 {
            f64::INFINITY
        } else {
            big as f64 / small as f64
        }
    }

    // Dimensions `(w, l)` possibly swapped, without mutating the stored item.
    pub fn dims(&self, rotated: bool) -> (u32, u32) {
        if rotated {
            (self.l, self.w)
        } else {
            (self.w, self.l)
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}x{})", self.id, self.w, self.l)
    }
}
