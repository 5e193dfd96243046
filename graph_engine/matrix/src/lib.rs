// Copyright 2020 - present Alex Dukhno
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    fmt::{self, Display, Formatter},
    sync::Arc,
};

pub mod ops;

/// Shared read-only handle in which the graph store lends adjacency matrices
/// to evaluations.
pub type MatrixHandle = Arc<BoolMatrix>;

const BLOCK_BITS: usize = 64;

/// Dense boolean matrix over a row-major bitset.
#[derive(Debug, PartialEq, Clone)]
pub struct BoolMatrix {
    rows: usize,
    cols: usize,
    blocks_per_row: usize,
    bits: Vec<u64>,
}

impl BoolMatrix {
    pub fn new(rows: usize, cols: usize) -> BoolMatrix {
        let blocks_per_row = (cols + BLOCK_BITS - 1) / BLOCK_BITS;
        BoolMatrix {
            rows,
            cols,
            blocks_per_row,
            bits: vec![0; rows * blocks_per_row],
        }
    }

    pub fn identity(size: usize) -> BoolMatrix {
        let mut matrix = BoolMatrix::new(size, size);
        for index in 0..size {
            matrix.set(index, index);
        }
        matrix
    }

    pub fn from_entries(rows: usize, cols: usize, entries: &[(usize, usize)]) -> BoolMatrix {
        let mut matrix = BoolMatrix::new(rows, cols);
        for (row, col) in entries {
            matrix.set(*row, *col);
        }
        matrix
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.rows && col < self.cols, "index ({}, {}) is out of {}x{} bounds", row, col, self.rows, self.cols);
        self.bits[row * self.blocks_per_row + col / BLOCK_BITS] & (1 << (col % BLOCK_BITS)) != 0
    }

    pub fn set(&mut self, row: usize, col: usize) {
        assert!(row < self.rows && col < self.cols, "index ({}, {}) is out of {}x{} bounds", row, col, self.rows, self.cols);
        self.bits[row * self.blocks_per_row + col / BLOCK_BITS] |= 1 << (col % BLOCK_BITS);
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        assert!(row < self.rows && col < self.cols, "index ({}, {}) is out of {}x{} bounds", row, col, self.rows, self.cols);
        self.bits[row * self.blocks_per_row + col / BLOCK_BITS] &= !(1 << (col % BLOCK_BITS));
    }

    /// Number of nonzero entries.
    pub fn nvals(&self) -> usize {
        self.bits.iter().map(|block| block.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|block| *block == 0)
    }

    pub fn entries(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).filter(move |col| self.get(row, *col)).map(move |col| (row, col)))
    }

    pub fn transposed(&self) -> BoolMatrix {
        let mut transposed = BoolMatrix::new(self.cols, self.rows);
        for (row, col) in self.entries() {
            transposed.set(col, row);
        }
        transposed
    }

    pub fn transpose_in_place(&mut self) {
        *self = self.transposed();
    }

    pub(crate) fn or_row_from(&mut self, row: usize, source: &BoolMatrix, source_row: usize) {
        debug_assert_eq!(self.cols, source.cols, "row-wise OR requires equal column counts");
        let offset = row * self.blocks_per_row;
        let source_offset = source_row * source.blocks_per_row;
        for block in 0..self.blocks_per_row {
            self.bits[offset + block] |= source.bits[source_offset + block];
        }
    }
}

/// Orientation of a single descriptor input slot.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputMode {
    Standard,
    Transposed,
}

/// Per-operation toggle set that lets a binary operation read its inputs
/// transposed without materializing the transposed matrices.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Descriptor {
    inp0: InputMode,
    inp1: InputMode,
}

impl Default for Descriptor {
    fn default() -> Descriptor {
        Descriptor {
            inp0: InputMode::Standard,
            inp1: InputMode::Standard,
        }
    }
}

impl Descriptor {
    pub fn inp0(&self) -> InputMode {
        self.inp0
    }

    pub fn inp1(&self) -> InputMode {
        self.inp1
    }

    pub fn set_inp0(&mut self, mode: InputMode) {
        self.inp0 = mode;
    }

    pub fn set_inp1(&mut self, mode: InputMode) {
        self.inp1 = mode;
    }

    pub fn reset_inp0(&mut self) {
        self.inp0 = InputMode::Standard;
    }

    pub fn reset_inp1(&mut self) {
        self.inp1 = InputMode::Standard;
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum MatrixError {
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
}

impl MatrixError {
    pub fn dimension_mismatch(operation: &'static str, left: (usize, usize), right: (usize, usize)) -> MatrixError {
        MatrixError::DimensionMismatch { operation, left, right }
    }
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch { operation, left, right } => write!(
                f,
                "dimension mismatch in {}: left operand is {}x{}, right operand is {}x{}",
                operation, left.0, left.1, right.0, right.1
            ),
        }
    }
}

#[cfg(test)]
mod tests;
