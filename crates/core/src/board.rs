//! Board module - the grid of tiles for one level
//!
//! The board is a square grid stored as a flat row-major array of
//! `Option<Tile>`; `None` marks a masked hole that has no tile at all.
//! Dealing guarantees the pairing invariant: every face value sits on exactly
//! two playable cells.

use std::fmt;

use crate::level::LevelParams;
use crate::rng::TileRng;
use crate::tile::Tile;
use crate::types::{Coord, FaceId, MAX_CELLS, MAX_GRID_SIZE};

/// Invalid level parameters, reported when a board is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Grid edge is zero or larger than [`MAX_GRID_SIZE`]
    GridSize(usize),
    /// A mask coordinate lies outside the grid
    MaskOutOfRange(Coord),
    /// Playable cells cannot be split into pairs
    OddCellCount(usize),
    /// The palette has fewer faces than the board has pairs
    PaletteTooSmall { needed: usize, available: usize },
    /// A fixed layout does not cover the whole grid
    LayoutLength { expected: usize, actual: usize },
    /// A face in a fixed layout does not appear exactly twice
    Unpaired(FaceId),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::GridSize(n) => {
                write!(f, "grid size {} is outside 1..={}", n, MAX_GRID_SIZE)
            }
            BoardError::MaskOutOfRange(c) => {
                write!(f, "mask cell ({}, {}) is outside the grid", c.row, c.col)
            }
            BoardError::OddCellCount(n) => {
                write!(f, "{} playable cells cannot be split into pairs", n)
            }
            BoardError::PaletteTooSmall { needed, available } => write!(
                f,
                "palette has {} faces but the board needs {} pairs",
                available, needed
            ),
            BoardError::LayoutLength { expected, actual } => write!(
                f,
                "layout has {} cells but the grid has {}",
                actual, expected
            ),
            BoardError::Unpaired(face) => {
                write!(f, "face {} does not appear exactly twice", face.0)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// The tiles of one level
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid_size: usize,
    /// Row-major cells, only the first `grid_size * grid_size` are used
    cells: [Option<Tile>; MAX_CELLS],
}

impl Board {
    /// Deal a fresh board for `params`
    ///
    /// Picks `pairs` distinct faces from the palette, puts each on two cells
    /// and shuffles them over every non-masked cell.
    pub fn build(params: &LevelParams, rng: &mut TileRng) -> Result<Self, BoardError> {
        let n = params.grid_size;
        if n == 0 || n > MAX_GRID_SIZE {
            return Err(BoardError::GridSize(n));
        }

        let mut masked = [false; MAX_CELLS];
        for &c in params.mask {
            let idx = c.index(n).ok_or(BoardError::MaskOutOfRange(c))?;
            masked[idx] = true;
        }

        let playable = masked[..n * n].iter().filter(|&&m| !m).count();
        if playable == 0 || playable % 2 != 0 {
            return Err(BoardError::OddCellCount(playable));
        }

        let pairs = playable / 2;
        let available = params.palette_size as usize;
        if available < pairs {
            return Err(BoardError::PaletteTooSmall {
                needed: pairs,
                available,
            });
        }

        let mut palette: Vec<FaceId> = (0..params.palette_size).map(FaceId).collect();
        rng.shuffle(&mut palette);

        let mut faces: Vec<FaceId> = palette
            .into_iter()
            .take(pairs)
            .flat_map(|face| [face, face])
            .collect();
        rng.shuffle(&mut faces);

        let mut cells = [None; MAX_CELLS];
        let mut faces = faces.into_iter();
        for (idx, cell) in cells[..n * n].iter_mut().enumerate() {
            if !masked[idx] {
                *cell = faces.next().map(Tile::new);
            }
        }

        Ok(Self {
            grid_size: n,
            cells,
        })
    }

    /// Build a board with a fixed face layout (row-major, `None` = hole)
    ///
    /// The layout must cover every cell and put each face on exactly two of
    /// them, the same guarantee [`Board::build`] gives.
    pub fn from_faces(grid_size: usize, faces: &[Option<FaceId>]) -> Result<Self, BoardError> {
        if grid_size == 0 || grid_size > MAX_GRID_SIZE {
            return Err(BoardError::GridSize(grid_size));
        }
        let expected = grid_size * grid_size;
        if faces.len() != expected {
            return Err(BoardError::LayoutLength {
                expected,
                actual: faces.len(),
            });
        }

        let playable = faces.iter().flatten().count();
        if playable == 0 || playable % 2 != 0 {
            return Err(BoardError::OddCellCount(playable));
        }

        let mut counts = [0u8; 256];
        for face in faces.iter().flatten() {
            counts[face.index()] = counts[face.index()].saturating_add(1);
        }
        if let Some(face) = faces
            .iter()
            .flatten()
            .find(|face| counts[face.index()] != 2)
        {
            return Err(BoardError::Unpaired(*face));
        }

        let mut cells = [None; MAX_CELLS];
        for (cell, face) in cells[..grid_size * grid_size].iter_mut().zip(faces) {
            *cell = face.map(Tile::new);
        }
        Ok(Self { grid_size, cells })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Tile at `coord`, `None` if out of bounds or masked
    pub fn cell_at(&self, coord: Coord) -> Option<&Tile> {
        coord
            .index(self.grid_size)
            .and_then(|idx| self.cells[idx].as_ref())
    }

    /// Mutable tile at `coord`, `None` if out of bounds or masked
    pub fn cell_at_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        coord
            .index(self.grid_size)
            .and_then(|idx| self.cells[idx].as_mut())
    }

    /// True for in-grid cells that have no tile
    pub fn is_masked(&self, coord: Coord) -> bool {
        coord
            .index(self.grid_size)
            .is_some_and(|idx| self.cells[idx].is_none())
    }

    /// Every tile with its coordinate, row-major
    pub fn tiles(&self) -> impl Iterator<Item = (Coord, &Tile)> + '_ {
        let n = self.grid_size;
        self.cells[..n * n]
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.as_ref().map(|t| (Coord::from_index(idx, n), t)))
    }

    /// Every tile, mutable, with its coordinate
    pub fn tiles_mut(&mut self) -> impl Iterator<Item = (Coord, &mut Tile)> + '_ {
        let n = self.grid_size;
        self.cells[..n * n]
            .iter_mut()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.as_mut().map(|t| (Coord::from_index(idx, n), t)))
    }

    /// Number of cells holding a tile
    pub fn playable_cells(&self) -> usize {
        self.tiles().count()
    }

    pub fn pair_count(&self) -> usize {
        self.playable_cells() / 2
    }

    /// Two mutable tiles at once, `None` if either is missing or they coincide
    pub(crate) fn pair_mut(&mut self, a: Coord, b: Coord) -> Option<(&mut Tile, &mut Tile)> {
        let ia = a.index(self.grid_size)?;
        let ib = b.index(self.grid_size)?;
        if ia == ib {
            return None;
        }
        let (lo, hi, swapped) = if ia < ib { (ia, ib, false) } else { (ib, ia, true) };
        let (head, tail) = self.cells.split_at_mut(hi);
        let first = head[lo].as_mut()?;
        let second = tail[0].as_mut()?;
        if swapped {
            Some((second, first))
        } else {
            Some((first, second))
        }
    }
}
