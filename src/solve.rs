use serde::{Deserialize, Serialize};

use crate::{cut_path_method, exhaustive_method, rect::Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Exhaustive,
    CutPath,
}

pub fn count_with(m: i64, n: i64, method: Method) -> u64 {
    if m <= 0 || n <= 0 {
        return 0;
    }
    assert!(
        m <= u32::MAX as i64 && n <= u32::MAX as i64,
        "dimensions too large to enumerate"
    );
    let rect = Rect::new(m as u32, n as u32);
    match method {
        Method::Exhaustive => exhaustive_method::count(rect),
        Method::CutPath => cut_path_method::count(rect),
    }
}

/// Number of ways to dissect an m x n rectangle into two congruent pieces
/// related by 180 degree rotation. Total over all integer inputs: degenerate
/// and odd-by-odd rectangles count 0.
pub fn count_dissections(m: i64, n: i64) -> u64 {
    let count = count_with(m, n, Method::CutPath);
    log::info!("count_dissections({}, {}) = {}", m, n, count);
    count
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRecord {
    pub m: u32,
    pub n: u32,
    pub count: u64,
}

#[test]
fn test_count_dissections() {
    assert_eq!(count_dissections(2, 2), 2);
    assert_eq!(count_dissections(4, 3), 9);
    assert_eq!(count_dissections(3, 4), 9);
    assert_eq!(count_dissections(7, 4), 151);
    assert_eq!(count_dissections(-1, 4), 0);
    assert_eq!(count_dissections(4, 0), 0);
    assert_eq!(count_dissections(5, 5), 0);
}

#[test]
#[should_panic(expected = "too large")]
fn test_count_with_rejects_oversized_dimensions() {
    // must not alias onto the 2x2 rect by truncation
    count_with((1i64 << 32) + 2, 2, Method::CutPath);
}

#[test]
fn test_methods_agree() {
    for m in 1..=5 {
        for n in 1..=5 {
            assert_eq!(
                count_with(m, n, Method::CutPath),
                count_with(m, n, Method::Exhaustive)
            );
        }
    }
}

#[test]
fn test_record_roundtrip() {
    let rec = CountRecord { m: 4, n: 4, count: 22 };
    let json = serde_json::to_string(&rec).unwrap();
    assert_eq!(serde_json::from_str::<CountRecord>(&json).unwrap(), rec);
}
