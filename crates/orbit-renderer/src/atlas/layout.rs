//! Atlas grid arithmetic.

/// Square grid of `cells_per_row²` cells, each `cell_size` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasLayout {
    pub item_count: u32,
    pub cells_per_row: u32,
    pub cell_size: u32,
}

impl AtlasLayout {
    /// `item_count` is raised to 1 so the grid is never empty.
    pub fn new(item_count: usize, cell_size: u32) -> Self {
        let item_count = item_count.max(1) as u32;
        Self {
            item_count,
            cells_per_row: cells_per_row(item_count),
            cell_size: cell_size.max(1),
        }
    }

    /// Edge length of the whole atlas in pixels.
    pub fn side_px(&self) -> u32 {
        self.cells_per_row * self.cell_size
    }

    /// Grid cell (column, row) of item `index`.
    pub fn cell(&self, index: u32) -> (u32, u32) {
        (index % self.cells_per_row, index / self.cells_per_row)
    }

    /// Top-left pixel of item `index`'s cell.
    pub fn cell_origin_px(&self, index: u32) -> (u32, u32) {
        let (x, y) = self.cell(index);
        (x * self.cell_size, y * self.cell_size)
    }

    /// Cells that no item occupies.
    pub fn unused_cells(&self) -> u32 {
        self.cells_per_row * self.cells_per_row - self.item_count
    }
}

/// Smallest `n` with `n² >= count` (and at least 1).
pub fn cells_per_row(count: u32) -> u32 {
    let count = count.max(1);
    let mut n = (count as f64).sqrt().ceil() as u32;
    // Guard against float rounding on large counts.
    while n * n < count {
        n += 1;
    }
    while n > 1 && (n - 1) * (n - 1) >= count {
        n -= 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_per_row_is_ceil_sqrt() {
        assert_eq!(cells_per_row(0), 1);
        assert_eq!(cells_per_row(1), 1);
        assert_eq!(cells_per_row(2), 2);
        assert_eq!(cells_per_row(4), 2);
        assert_eq!(cells_per_row(5), 3);
        assert_eq!(cells_per_row(9), 3);
        assert_eq!(cells_per_row(10), 4);
        assert_eq!(cells_per_row(42), 7);
    }

    #[test]
    fn ten_items_use_four_per_row() {
        let layout = AtlasLayout::new(10, 512);
        assert_eq!(layout.cells_per_row, 4);
        assert_eq!(layout.side_px(), 2048);
        assert_eq!(layout.unused_cells(), 6);
    }

    #[test]
    fn cell_index_math() {
        let layout = AtlasLayout::new(10, 100);
        for i in 0..10 {
            assert_eq!(layout.cell(i), (i % 4, i / 4));
        }
        assert_eq!(layout.cell_origin_px(9), (100, 200));
    }

    #[test]
    fn empty_item_list_gets_one_cell() {
        let layout = AtlasLayout::new(0, 64);
        assert_eq!(layout.item_count, 1);
        assert_eq!(layout.cells_per_row, 1);
        assert_eq!(layout.side_px(), 64);
    }
}
