use indicatif::ProgressBar;
use itertools::Itertools;

use crate::{matrix::GrahamMatrix, rect::Rect};

// Mask spaces below this size are not worth a progress bar.
const PROGRESS_THRESHOLD: u64 = 1 << 22;

fn progress_bar(total: u64) -> ProgressBar {
    if total >= PROGRESS_THRESHOLD {
        ProgressBar::new(total)
    } else {
        ProgressBar::hidden()
    }
}

/// Reference oracle: walk every anti-symmetric completion of the free cells,
/// keep the Graham ones, halve for the unordered dissection count. Exponential
/// in area/2, so only for small rects.
pub fn count(rect: Rect) -> u64 {
    if rect.m == 0 || rect.n == 0 || rect.both_odd() {
        return 0;
    }
    let free = rect.free_cells().len();
    assert!(free < 60, "rect too large for exhaustive enumeration");
    let total = 1u64 << free;
    let bar = progress_bar(total);
    let mut valid = 0u64;
    for mask in 0..total {
        if GrahamMatrix::from_mask(rect, mask).is_graham() {
            valid += 1;
        }
        if mask % 4096 == 0 {
            bar.inc(4096.min(total - mask));
        }
    }
    bar.finish_and_clear();
    log::debug!(
        "exhaustive: {}x{}: {} matrices out of {} masks",
        rect.m,
        rect.n,
        valid,
        total
    );
    // matrices come in complement pairs
    assert!(valid % 2 == 0);
    valid / 2
}

/// All Graham matrices of the rect, both orientations of every dissection.
pub fn enumerate(rect: Rect) -> Vec<GrahamMatrix> {
    if rect.m == 0 || rect.n == 0 || rect.both_odd() {
        return vec![];
    }
    let free = rect.free_cells().len();
    assert!(free < 60, "rect too large for exhaustive enumeration");
    let total = 1u64 << free;
    let bar = progress_bar(total);
    let mats = (0..total)
        .map(|mask| {
            if mask % 4096 == 0 {
                bar.inc(4096.min(total - mask));
            }
            GrahamMatrix::from_mask(rect, mask)
        })
        .filter(|mat| mat.is_graham())
        .collect_vec();
    bar.finish_and_clear();
    mats
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
fn test_both_odd_is_zero() {
    assert_eq!(count(Rect::new(3, 3)), 0);
    assert_eq!(count(Rect::new(5, 5)), 0);
    assert_eq!(count(Rect::new(1, 1)), 0);
}

#[test]
fn test_two_row_strip() {
    // a 2xn rect admits exactly n cuts
    for n in 1..=8 {
        assert_eq!(count(Rect::new(2, n)), n as u64);
    }
}

#[test]
fn test_enumerate_matches_count() {
    for (m, n) in [(2, 2), (4, 3), (4, 4), (1, 2)] {
        let rect = Rect::new(m, n);
        let mats = enumerate(rect);
        assert_eq!(mats.len() as u64, 2 * count(rect));
        for mat in mats.iter() {
            assert!(mat.is_antisymmetric());
            assert!(mats.contains(&mat.complement()));
        }
    }
}
