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

//! Any-pair boolean semiring operations. Descriptor-marked transposition is
//! applied while reading the operand, never by building a transposed copy.

use crate::{BoolMatrix, Descriptor, InputMode, MatrixError};

struct Oriented<'m> {
    matrix: &'m BoolMatrix,
    transposed: bool,
}

impl<'m> Oriented<'m> {
    fn new(matrix: &'m BoolMatrix, mode: InputMode) -> Oriented<'m> {
        Oriented {
            matrix,
            transposed: mode == InputMode::Transposed,
        }
    }

    fn nrows(&self) -> usize {
        if self.transposed {
            self.matrix.ncols()
        } else {
            self.matrix.nrows()
        }
    }

    fn ncols(&self) -> usize {
        if self.transposed {
            self.matrix.nrows()
        } else {
            self.matrix.ncols()
        }
    }

    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn get(&self, row: usize, col: usize) -> bool {
        if self.transposed {
            self.matrix.get(col, row)
        } else {
            self.matrix.get(row, col)
        }
    }
}

/// Boolean matrix product. The "any" selector of the semiring means a single
/// witnessing pair sets an output entry, so a set entry of the left operand
/// contributes a whole row of the right operand to the output row.
pub fn mxm(a: &BoolMatrix, b: &BoolMatrix, desc: &Descriptor) -> Result<BoolMatrix, MatrixError> {
    let left = Oriented::new(a, desc.inp0());
    let right = Oriented::new(b, desc.inp1());
    if left.ncols() != right.nrows() {
        return Err(MatrixError::dimension_mismatch("mxm", left.shape(), right.shape()));
    }

    let mut product = BoolMatrix::new(left.nrows(), right.ncols());
    for row in 0..left.nrows() {
        for pair in 0..left.ncols() {
            if !left.get(row, pair) {
                continue;
            }
            if right.transposed {
                for col in 0..right.ncols() {
                    if right.get(pair, col) {
                        product.set(row, col);
                    }
                }
            } else {
                product.or_row_from(row, b, pair);
            }
        }
    }
    Ok(product)
}

/// Element-wise OR.
pub fn ewise_add(a: &BoolMatrix, b: &BoolMatrix, desc: &Descriptor) -> Result<BoolMatrix, MatrixError> {
    let left = Oriented::new(a, desc.inp0());
    let right = Oriented::new(b, desc.inp1());
    if left.shape() != right.shape() {
        return Err(MatrixError::dimension_mismatch("eWiseAdd", left.shape(), right.shape()));
    }

    if !left.transposed && !right.transposed {
        let mut sum = a.clone();
        for (block, source) in sum.bits.iter_mut().zip(&b.bits) {
            *block |= *source;
        }
        return Ok(sum);
    }

    let mut sum = BoolMatrix::new(left.nrows(), left.ncols());
    for row in 0..left.nrows() {
        for col in 0..left.ncols() {
            if left.get(row, col) || right.get(row, col) {
                sum.set(row, col);
            }
        }
    }
    Ok(sum)
}

/// Identity-apply: a copy of the operand, transposed when `INP0` says so.
pub fn apply(a: &BoolMatrix, desc: &Descriptor) -> BoolMatrix {
    match desc.inp0() {
        InputMode::Standard => a.clone(),
        InputMode::Transposed => a.transposed(),
    }
}
