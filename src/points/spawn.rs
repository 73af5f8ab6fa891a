// Point-spawning rule: given a freshly placed rectangle and the set of
// rectangles already placed in the same container, compute the ten
// candidate points for the next construction step.
//
// `A`/`B` are the immediate corners of the new placement. `A'`/`B'` project
// those corners onto the nearest supporting edge (floor/left wall or an
// already-placed rectangle's top/right edge). `A"`/`B"` project onto the
// nearest obstructing edge (ceiling/right wall or an already-placed
// rectangle's bottom/left edge). `C` is the placed rectangle's own far
// corner. `D`/`E`/`F` are the three corner combinations of the four
// projected coordinates not already covered by `A`/`B`/`C`.

use crate::model::Placement;

use super::class::PointClass;

// Highest top edge, among rectangles spanning column `x`, that lies at or
// below `y_limit`. Falls back to the container floor (`0`) if none.
fn supporting_top_edge(x: u32, y_limit: u32, placed: &[Placement]) -> u32 {
    placed
        .iter()
        .filter(|p| p.x <= x && x < p.x + p.w && p.y + p.l <= y_limit)
        .map(|p| p.y + p.l)
        .max()
        .unwrap_or(0)
}

// Lowest bottom edge, among rectangles spanning column `x`, that lies at or
// above `y_limit`. Falls back to the container ceiling if none.
fn obstructing_bottom_edge(x: u32, y_limit: u32, placed: &[Placement], container_l: u32) -> u32 {
    placed
        .iter()
        .filter(|p| p.x <= x && x < p.x + p.w && p.y >= y_limit)
        .map(|p| p.y)
        .min()
        .unwrap_or(container_l)
}

// Rightmost right edge, among rectangles spanning row `y`, that lies at or
// left of `x_limit`. Falls back to the container's left wall (`0`).
fn supporting_right_edge(y: u32, x_limit: u32, placed: &[Placement]) -> u32 {
    placed
        .iter()
        .filter(|p| p.y <= y && y < p.y + p.l && p.x + p.w <= x_limit)
        .map(|p| p.x + p.w)
        .max()
        .unwrap_or(0)
}

// Leftmost left edge, among rectangles spanning row `y`, that lies at or
// right of `x_limit`. Falls back to the container's right wall.
fn obstructing_left_edge(y: u32, x_limit: u32, placed: &[Placement], container_w: u32) -> u32 {
    placed
        .iter()
        .filter(|p| p.y <= y && y < p.y + p.l && p.x >= x_limit)
        .map(|p| p.x)
        .min()
        .unwrap_or(container_w)
}

// Computes all ten candidate points for a placement just made into a
// container of size `(container_w, container_l)`, given the rectangles
// already placed there including the new one (`new` identifies which).
// Results are filtered to in-bounds coordinates; some classes can in
// principle land a coordinate exactly on the container edge.
pub fn spawn_points(
    new: Placement,
    placed_including_new: &[Placement],
    container_w: u32,
    container_l: u32,
) -> Vec<(PointClass, u32, u32)> {
    let a = (new.x + new.w, new.y);
    let b = (new.x, new.y + new.l);

    let a_prime = (a.0, supporting_top_edge(a.0, a.1, placed_including_new));
    let b_prime = (supporting_right_edge(b.1, b.0, placed_including_new), b.1);

    let a_double = (a.0, obstructing_bottom_edge(a.0, a.1, placed_including_new, container_l));
    let b_double = (obstructing_left_edge(b.1, b.0, placed_including_new, container_w), b.1);

    let c = (new.x + new.w, new.y + new.l);
    let d = (b_prime.0, a_prime.1);
    let e = (b_double.0, a_double.1);
    let f = (a_prime.0, b_double.1);

    let candidates = [
        (PointClass::A, a),
        (PointClass::B, b),
        (PointClass::APrime, a_prime),
        (PointClass::BPrime, b_prime),
        (PointClass::ADouble, a_double),
        (PointClass::BDouble, b_double),
        (PointClass::C, c),
        (PointClass::D, d),
        (PointClass::E, e),
        (PointClass::F, f),
    ];

    candidates
        .into_iter()
        .filter(|(_, (x, y))| *x <= container_w && *y <= container_l)
        .map(|(class, (x, y))| (class, x, y))
        .collect()
}
