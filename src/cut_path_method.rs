use std::collections::HashSet;

use crate::rect::{Point, Rect};

/// Counts dissections by enumerating the cut itself instead of the matrices.
///
/// The boundary between the two regions of a Graham matrix is a simple path of
/// interior lattice edges running from one side of the rect to another. A
/// boundary vertex has a single interior edge and a corner has none, so the
/// cut meets the rect boundary exactly at its two endpoints. Anti-symmetry
/// makes the path invariant under 180 degree rotation, which forces it through
/// the center of the rect. Growing one half outward from the center and
/// mirroring every step on the other half therefore reaches every cut, each
/// one twice (once per choice of which half is grown).
pub fn count(rect: Rect) -> u64 {
    if rect.m == 0 || rect.n == 0 || rect.both_odd() {
        return 0;
    }
    let completions = match rect.center_vertex() {
        Some(center) => {
            let mut used = HashSet::from([center]);
            extend(rect, center, &mut used)
        }
        None => {
            // The center sits on the midpoint of one lattice edge, which
            // every cut must contain.
            let (a, b) = central_edge(rect);
            if rect.on_boundary(a) && rect.on_boundary(b) {
                // 1 x even strip: the central edge is the whole cut
                return 1;
            }
            let mut used = HashSet::from([a, b]);
            extend(rect, a, &mut used) + extend(rect, b, &mut used)
        }
    };
    log::debug!("cut path: {}x{}: {} completions", rect.m, rect.n, completions);
    assert!(completions % 2 == 0);
    completions / 2
}

/// Endpoints of the lattice edge whose midpoint is the rect center; exists
/// exactly when one of m, n is odd. The two endpoints are rotation images of
/// each other.
fn central_edge(rect: Rect) -> (Point, Point) {
    if rect.m % 2 == 0 {
        let i = (rect.m / 2) as i32;
        let j = (rect.n / 2) as i32;
        (Point { i, j }, Point { i, j: j + 1 })
    } else {
        let i = (rect.m / 2) as i32;
        let j = (rect.n / 2) as i32;
        (Point { i, j }, Point { i: i + 1, j })
    }
}

fn extend(rect: Rect, p: Point, used: &mut HashSet<Point>) -> u64 {
    let mut total = 0;
    for q in p.neighbors() {
        if !rect.contains_vertex(q) {
            continue;
        }
        if used.contains(&q) || used.contains(&rect.rot_vertex(q)) {
            continue;
        }
        if rect.on_boundary(q) {
            total += 1;
            continue;
        }
        let partner = rect.rot_vertex(q);
        used.insert(q);
        used.insert(partner);
        total += extend(rect, q, used);
        used.remove(&q);
        used.remove(&partner);
    }
    total
}

#[test]
fn test_central_edge() {
    let rect = Rect::new(4, 3);
    let (a, b) = central_edge(rect);
    assert_eq!(rect.rot_vertex(a), b);
    assert_eq!(a, Point { i: 2, j: 1 });
    assert_eq!(b, Point { i: 2, j: 2 });

    let rect = Rect::new(3, 4);
    let (a, b) = central_edge(rect);
    assert_eq!(rect.rot_vertex(a), b);
    assert_eq!(a, Point { i: 1, j: 2 });
    assert_eq!(b, Point { i: 2, j: 2 });
}

#[test]
fn test_known_counts() {
    assert_eq!(count(Rect::new(2, 2)), 2);
    assert_eq!(count(Rect::new(4, 3)), 9);
    assert_eq!(count(Rect::new(4, 4)), 22);
    assert_eq!(count(Rect::new(8, 3)), 53);
    assert_eq!(count(Rect::new(7, 4)), 151);
}

#[test]
fn test_larger_counts() {
    assert_eq!(count(Rect::new(5, 6)), 263);
    assert_eq!(count(Rect::new(6, 6)), 1018);
    assert_eq!(count(Rect::new(7, 6)), 2947);
    assert_eq!(count(Rect::new(8, 4)), 340);
    assert_eq!(count(Rect::new(8, 6)), 11174);
    assert_eq!(count(Rect::new(2, 10)), 10);
}

#[test]
fn test_strips() {
    assert_eq!(count(Rect::new(1, 2)), 1);
    assert_eq!(count(Rect::new(1, 6)), 1);
    assert_eq!(count(Rect::new(6, 1)), 1);
    assert_eq!(count(Rect::new(1, 3)), 0);
}

#[test]
fn test_agrees_with_exhaustive() {
    for m in 1..=6 {
        for n in 1..=6 {
            let rect = Rect::new(m, n);
            assert_eq!(
                count(rect),
                crate::exhaustive_method::count(rect),
                "mismatch on {}x{}",
                m,
                n
            );
        }
    }
}

#[test]
fn test_symmetric_in_dimensions() {
    for m in 1..=7 {
        for n in 1..=7 {
            assert_eq!(count(Rect::new(m, n)), count(Rect::new(n, m)));
        }
    }
}
