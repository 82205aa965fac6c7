use std::collections::HashSet;

use itertools::Itertools;

/// An m-row by n-column rectangle of unit cells. Lattice vertices are the
/// corner points (i, j) with 0 <= i <= m and 0 <= j <= n; cells are indexed
/// by their top-left corner, (i, j) with i < m and j < n.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rect {
    pub m: u32,
    pub n: u32,
}

/// A lattice vertex of the rectangle grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub i: i32,
    pub j: i32,
}

impl Point {
    pub fn neighbors(&self) -> Vec<Point> {
        vec![
            Point { i: self.i + 1, j: self.j },
            Point { i: self.i - 1, j: self.j },
            Point { i: self.i, j: self.j + 1 },
            Point { i: self.i, j: self.j - 1 },
        ]
    }
}

impl Rect {
    pub fn new(m: u32, n: u32) -> Rect {
        Rect { m, n }
    }

    pub fn swap(&self) -> Rect {
        Rect { m: self.n, n: self.m }
    }

    pub fn area(&self) -> u32 {
        self.m * self.n
    }

    /// Rotation by 180 degrees fixes the center cell of an odd-by-odd rect,
    /// which can never carry complementary values, so those counts are 0.
    pub fn both_odd(&self) -> bool {
        self.m % 2 == 1 && self.n % 2 == 1
    }

    /// Image of a lattice vertex under 180 degree rotation about the center.
    pub fn rot_vertex(&self, p: Point) -> Point {
        Point {
            i: self.m as i32 - p.i,
            j: self.n as i32 - p.j,
        }
    }

    /// Image of a cell under 180 degree rotation about the center.
    pub fn rot_cell(&self, cell: (u32, u32)) -> (u32, u32) {
        (self.m - 1 - cell.0, self.n - 1 - cell.1)
    }

    pub fn contains_vertex(&self, p: Point) -> bool {
        0 <= p.i && p.i <= self.m as i32 && 0 <= p.j && p.j <= self.n as i32
    }

    pub fn on_boundary(&self, p: Point) -> bool {
        p.i == 0 || p.i == self.m as i32 || p.j == 0 || p.j == self.n as i32
    }

    /// The center as a lattice vertex, present only when m and n are both even.
    pub fn center_vertex(&self) -> Option<Point> {
        if self.m % 2 == 0 && self.n % 2 == 0 {
            Some(Point {
                i: (self.m / 2) as i32,
                j: (self.n / 2) as i32,
            })
        } else {
            None
        }
    }

    pub fn cells(&self) -> Vec<(u32, u32)> {
        (0..self.m).cartesian_product(0..self.n).collect_vec()
    }

    /// One representative cell per 180 degree rotation orbit. For an even-area
    /// rect no cell is its own image, so this has exactly area/2 entries.
    pub fn free_cells(&self) -> Vec<(u32, u32)> {
        let mut seen: HashSet<(u32, u32)> = HashSet::new();
        let mut free = vec![];
        for cell in self.cells() {
            if seen.contains(&cell) {
                continue;
            }
            seen.insert(cell);
            seen.insert(self.rot_cell(cell));
            free.push(cell);
        }
        free
    }
}

#[test]
fn test_rot_vertex_involution() {
    let rect = Rect::new(4, 3);
    for i in 0..=4 {
        for j in 0..=3 {
            let p = Point { i, j };
            assert_eq!(rect.rot_vertex(rect.rot_vertex(p)), p);
        }
    }
    assert_eq!(rect.rot_vertex(Point { i: 0, j: 0 }), Point { i: 4, j: 3 });
}

#[test]
fn test_rot_cell() {
    let rect = Rect::new(4, 3);
    assert_eq!(rect.rot_cell((0, 0)), (3, 2));
    assert_eq!(rect.rot_cell((3, 2)), (0, 0));
    assert_eq!(rect.rot_cell((1, 1)), (2, 1));
}

#[test]
fn test_free_cells_cover_half() {
    for (m, n) in [(2, 2), (4, 3), (7, 4), (1, 2)] {
        let rect = Rect::new(m, n);
        let free = rect.free_cells();
        assert_eq!(free.len() as u32, rect.area() / 2);
        let mut covered: HashSet<(u32, u32)> = HashSet::new();
        for &c in free.iter() {
            covered.insert(c);
            covered.insert(rect.rot_cell(c));
        }
        assert_eq!(covered.len() as u32, rect.area());
    }
}

#[test]
fn test_boundary() {
    let rect = Rect::new(2, 2);
    assert!(rect.on_boundary(Point { i: 0, j: 1 }));
    assert!(rect.on_boundary(Point { i: 2, j: 2 }));
    assert!(!rect.on_boundary(Point { i: 1, j: 1 }));
    assert_eq!(rect.center_vertex(), Some(Point { i: 1, j: 1 }));
    assert_eq!(Rect::new(4, 3).center_vertex(), None);
}
