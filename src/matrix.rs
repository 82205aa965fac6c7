use std::{collections::VecDeque, fmt};

use crate::rect::Rect;

/// A binary filling of a rect's cells, row major. A Graham matrix is one
/// whose 1-cells and 0-cells each form a single 4-connected region and that
/// satisfies the central anti-symmetry M[i][j] = 1 - M[m-1-i][n-1-j]; the two
/// regions are then congruent under 180 degree rotation, so the matrix
/// describes a dissection of the rect into two congruent pieces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GrahamMatrix {
    pub rect: Rect,
    pub cells: Vec<bool>,
}

impl GrahamMatrix {
    /// Complete an assignment of the free cells anti-symmetrically: bit b of
    /// `mask` fills free cell b, and its rotation image gets the complement.
    pub fn from_mask(rect: Rect, mask: u64) -> GrahamMatrix {
        let free = rect.free_cells();
        assert!(free.len() < 64, "rect too large for a u64 free-cell mask");
        let mut cells = vec![false; rect.area() as usize];
        for (b, &cell) in free.iter().enumerate() {
            let v = (mask >> b) & 1 == 1;
            let partner = rect.rot_cell(cell);
            cells[(cell.0 * rect.n + cell.1) as usize] = v;
            cells[(partner.0 * rect.n + partner.1) as usize] = !v;
        }
        GrahamMatrix { rect, cells }
    }

    fn idx(&self, i: u32, j: u32) -> usize {
        (i * self.rect.n + j) as usize
    }

    pub fn get(&self, i: u32, j: u32) -> bool {
        self.cells[self.idx(i, j)]
    }

    pub fn complement(&self) -> GrahamMatrix {
        GrahamMatrix {
            rect: self.rect,
            cells: self.cells.iter().map(|&v| !v).collect(),
        }
    }

    pub fn is_antisymmetric(&self) -> bool {
        self.rect.cells().into_iter().all(|cell| {
            let partner = self.rect.rot_cell(cell);
            self.get(cell.0, cell.1) != self.get(partner.0, partner.1)
        })
    }

    /// Flood fill from the first cell holding `value`; the region is connected
    /// when the fill reaches every such cell. An empty region does not count
    /// as a piece of a dissection.
    pub fn region_connected(&self, value: bool) -> bool {
        let total = self.cells.iter().filter(|&&v| v == value).count();
        if total == 0 {
            return false;
        }
        let start = self.cells.iter().position(|&v| v == value).unwrap();
        let mut visited = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        visited[start] = true;
        queue.push_back((start as u32 / self.rect.n, start as u32 % self.rect.n));
        let mut reached = 1;
        while let Some((i, j)) = queue.pop_front() {
            for (di, dj) in [(1i32, 0i32), (-1, 0), (0, 1), (0, -1)] {
                let ni = i as i32 + di;
                let nj = j as i32 + dj;
                if ni < 0 || nj < 0 || ni >= self.rect.m as i32 || nj >= self.rect.n as i32 {
                    continue;
                }
                let idx = (ni as u32 * self.rect.n + nj as u32) as usize;
                if visited[idx] || self.cells[idx] != value {
                    continue;
                }
                visited[idx] = true;
                reached += 1;
                queue.push_back((ni as u32, nj as u32));
            }
        }
        reached == total
    }

    /// Both regions nonempty and connected. Simple connectivity comes for
    /// free: a hole in one region would trap the whole complement away from
    /// the rect boundary, contradicting the rotation symmetry.
    pub fn is_graham(&self) -> bool {
        self.region_connected(true) && self.region_connected(false)
    }
}

impl fmt::Display for GrahamMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.rect.m {
            for j in 0..self.rect.n {
                write!(f, "{}", if self.get(i, j) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[test]
fn test_from_mask_antisymmetric() {
    let rect = Rect::new(4, 3);
    for mask in 0..(1u64 << 6) {
        assert!(GrahamMatrix::from_mask(rect, mask).is_antisymmetric());
    }
}

#[test]
fn test_horizontal_cut_is_graham() {
    // top row of a 2x2 against the bottom row
    let rect = Rect::new(2, 2);
    let mat = GrahamMatrix {
        rect,
        cells: vec![true, true, false, false],
    };
    assert!(mat.is_antisymmetric());
    assert!(mat.is_graham());
    assert!(mat.complement().is_graham());
}

#[test]
fn test_checkerboard_is_not_graham() {
    let rect = Rect::new(2, 2);
    let mat = GrahamMatrix {
        rect,
        cells: vec![true, false, false, true],
    };
    assert!(mat.is_antisymmetric());
    assert!(!mat.region_connected(true));
    assert!(!mat.is_graham());
}

#[test]
fn test_display() {
    let rect = Rect::new(2, 2);
    let mat = GrahamMatrix {
        rect,
        cells: vec![true, true, false, false],
    };
    assert_eq!(format!("{}", mat), "##\n..\n");
}
