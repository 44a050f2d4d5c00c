//! Decorative QR-look pattern grid.
//!
//! This is NOT a QR encoder: the grid carries no payload and no error
//! correction. It borrows the visual landmarks of a real code (finder,
//! timing, and alignment patterns) and fills the rest from a seeded
//! pseudo-random sequence so that every input string gets its own stable,
//! plausible-looking texture. For a scannable code use a real encoder.

/// Grid edge length in modules. The original artwork drew 10px modules on a
/// 200px canvas.
pub const GRID_SIZE: usize = 20;

const FINDER_CORNERS: [(usize, usize); 3] = [(1, 1), (13, 1), (1, 13)];
const FINDER_SPAN: usize = 5;
const TIMING_LINE: usize = 6;
const DATA_MIN: usize = 2;
const DATA_MAX: usize = 17;

/// Square boolean grid of "ink" modules, indexed as `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternGrid {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl PatternGrid {
    /// Derives the grid for an input string.
    ///
    /// Pure: the same input always produces a bit-identical grid.
    #[must_use]
    pub fn generate(input: &str) -> Self {
        let mut grid = Self {
            cells: [[false; GRID_SIZE]; GRID_SIZE],
        };

        for (corner_x, corner_y) in FINDER_CORNERS {
            grid.paint_finder(corner_x, corner_y);
        }
        grid.paint_timing();
        grid.paint_alignment();

        let mut random = SeededRandom::new(hash_input(input));
        for x in DATA_MIN..=DATA_MAX {
            for y in DATA_MIN..=DATA_MAX {
                if !Self::is_reserved(x, y) && random.next() > 0.5 {
                    grid.cells[x][y] = true;
                }
            }
        }

        grid
    }

    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[x][y]
    }

    /// Rows of the grid, top to bottom, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = [bool; GRID_SIZE]> + '_ {
        (0..GRID_SIZE).map(|y| {
            let mut row = [false; GRID_SIZE];
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self.cells[x][y];
            }
            row
        })
    }

    /// Whether a module belongs to a fixed landmark and must never be
    /// touched by the pseudo-random fill.
    #[must_use]
    pub fn is_reserved(x: usize, y: usize) -> bool {
        for (corner_x, corner_y) in FINDER_CORNERS {
            if (corner_x..corner_x + FINDER_SPAN).contains(&x)
                && (corner_y..corner_y + FINDER_SPAN).contains(&y)
            {
                return true;
            }
        }
        if y == TIMING_LINE && (DATA_MIN..=12).contains(&x) {
            return true;
        }
        if x == TIMING_LINE && (DATA_MIN..=12).contains(&y) {
            return true;
        }
        // Central alignment area, one module of margin around the block.
        (8..=11).contains(&x) && (8..=11).contains(&y)
    }

    /// 5x5 filled square, 3x3 hollow ring, 1x1 filled center.
    fn paint_finder(&mut self, corner_x: usize, corner_y: usize) {
        for x in corner_x..corner_x + FINDER_SPAN {
            for y in corner_y..corner_y + FINDER_SPAN {
                self.cells[x][y] = true;
            }
        }
        for x in corner_x + 1..corner_x + FINDER_SPAN - 1 {
            for y in corner_y + 1..corner_y + FINDER_SPAN - 1 {
                self.cells[x][y] = false;
            }
        }
        self.cells[corner_x + 2][corner_y + 2] = true;
    }

    /// Alternating cells along one row and one column between the finders.
    fn paint_timing(&mut self) {
        for module in (DATA_MIN..=12).step_by(2) {
            self.cells[module][TIMING_LINE] = true;
            self.cells[TIMING_LINE][module] = true;
        }
    }

    fn paint_alignment(&mut self) {
        for x in 9..=10 {
            for y in 9..=10 {
                self.cells[x][y] = true;
            }
        }
    }
}

/// 31-based string hash over UTF-16 code units, wrapped to 32-bit signed,
/// absolute value taken. Matches the usual `h = h * 31 + unit` loop.
#[must_use]
pub fn hash_input(input: &str) -> f64 {
    let mut hash: i32 = 0;
    for unit in input.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    f64::from(hash).abs()
}

/// Tiny sine-folding pseudo-random sequence.
///
/// Statistically weak, which is fine: it only has to look noisy and be
/// perfectly reproducible for a given seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeededRandom {
    x: f64,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: f64) -> Self {
        Self {
            x: seed.sin() * 10_000.0,
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        self.x = self.x.sin() * 10_000.0;
        self.x - self.x.floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_input_gives_bit_identical_grids() {
        let first = PatternGrid::generate("abc");
        let second = PatternGrid::generate("abc");
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_inputs_differ_in_the_open_region() {
        let first = PatternGrid::generate("https://example.com/a");
        let second = PatternGrid::generate("https://example.com/b");

        let differing = (0..GRID_SIZE)
            .flat_map(|x| (0..GRID_SIZE).map(move |y| (x, y)))
            .filter(|&(x, y)| !PatternGrid::is_reserved(x, y))
            .filter(|&(x, y)| first.get(x, y) != second.get(x, y))
            .count();
        assert!(differing > 0, "expected the data region to diverge");
    }

    #[test]
    fn reserved_landmarks_are_input_independent() {
        let first = PatternGrid::generate("one input");
        let second = PatternGrid::generate("a completely different input");

        for x in 0..GRID_SIZE {
            for y in 0..GRID_SIZE {
                if PatternGrid::is_reserved(x, y) {
                    assert_eq!(
                        first.get(x, y),
                        second.get(x, y),
                        "reserved module ({x}, {y}) must not depend on input"
                    );
                }
            }
        }
    }

    #[test]
    fn finder_markers_have_ring_and_center() {
        let grid = PatternGrid::generate("abc");
        for (corner_x, corner_y) in FINDER_CORNERS {
            // Outer border filled.
            assert!(grid.get(corner_x, corner_y));
            assert!(grid.get(corner_x + 4, corner_y + 4));
            // Hollow ring.
            assert!(!grid.get(corner_x + 1, corner_y + 1));
            assert!(!grid.get(corner_x + 3, corner_y + 1));
            // Filled center.
            assert!(grid.get(corner_x + 2, corner_y + 2));
        }
    }

    #[test]
    fn timing_cells_alternate() {
        let grid = PatternGrid::generate("abc");
        for module in 2..=12 {
            let expected = module % 2 == 0;
            assert_eq!(grid.get(module, TIMING_LINE), expected);
            assert_eq!(grid.get(TIMING_LINE, module), expected);
        }
    }

    #[test]
    fn alignment_block_is_filled() {
        let grid = PatternGrid::generate("abc");
        for x in 9..=10 {
            for y in 9..=10 {
                assert!(grid.get(x, y));
            }
        }
    }

    #[test]
    fn hash_is_stable_and_non_negative() {
        assert_eq!(hash_input("abc"), hash_input("abc"));
        assert!(hash_input("abc") >= 0.0);
        assert!(hash_input("") == 0.0);
        assert_ne!(hash_input("abc"), hash_input("abd"));
    }

    #[test]
    fn seeded_sequence_is_reproducible_and_in_range() {
        let mut first = SeededRandom::new(hash_input("abc"));
        let mut second = SeededRandom::new(hash_input("abc"));
        for _ in 0..64 {
            let value = first.next();
            assert_eq!(value, second.next());
            assert!((0.0..1.0).contains(&value));
        }
    }
}
