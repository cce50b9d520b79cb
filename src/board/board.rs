//! Fixed-size board stored as a flat row-major grid

use super::{Player, Pos, Stone};

/// Game board. The size is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    /// Number of occupied cells, kept in sync by `place_stone`/`remove_stone`
    occupied: usize,
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// Callers are expected to validate `size` first (see `EngineConfig`).
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            occupied: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N * N)
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn to_index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    #[inline]
    pub fn from_index(&self, idx: usize) -> Pos {
        Pos::new((idx / self.size) as u8, (idx % self.size) as u8)
    }

    /// Check signed coordinates against the board bounds
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.size && col >= 0 && (col as usize) < self.size
    }

    /// Convert signed coordinates into a position, `None` when out of bounds
    #[inline]
    pub fn pos(&self, row: i32, col: i32) -> Option<Pos> {
        self.in_bounds(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    /// Center cell (floor(N/2), floor(N/2))
    #[inline]
    pub fn center(&self) -> Pos {
        let c = (self.size / 2) as u8;
        Pos::new(c, c)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.to_index(pos)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Place a stone on an empty cell.
    ///
    /// The engine checks occupancy before calling; an occupied target is a logic error.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, player: Player) {
        let idx = self.to_index(pos);
        debug_assert!(self.cells[idx].is_empty(), "place_stone on occupied cell {pos}");
        self.cells[idx] = Stone::from(player);
        self.occupied += 1;
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = self.to_index(pos);
        if !self.cells[idx].is_empty() {
            self.cells[idx] = Stone::Empty;
            self.occupied -= 1;
        }
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
        self.occupied = 0;
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.occupied
    }

    /// True iff every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied == self.cells.len()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_empty())
            .map(|(idx, _)| self.from_index(idx))
    }
}
