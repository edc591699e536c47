/// My personal coordinate type for the sand box
/// col is the horizontal axis, kinda like x,
///   0 is the left edge of the board
/// row is the vertical axis, kinda like y but screen oriented,
///   0 is the top edge of the board and it grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellVector {
    pub col: usize,
    pub row: usize,
}

impl CellVector {
    pub const ZERO: Self = Self { col: 0, row: 0 };

    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Offsets this cell by a signed amount on each axis
    /// Returns None if the result would fall outside a grid of the given width and height
    pub fn checked_offset(
        &self,
        dcol: isize,
        drow: isize,
        width: usize,
        height: usize,
    ) -> Option<CellVector> {
        let col = self.col.checked_add_signed(dcol)?;
        let row = self.row.checked_add_signed(drow)?;
        if col >= width || row >= height {
            return None;
        }
        Some(CellVector { col, row })
    }
}
