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

use matrix::BoolMatrix;

/// Scratch state of a single binary-operation activation. The destination can
/// hold one operand's intermediate value while it is free; once it is taken, a
/// single auxiliary matrix serves every remaining operand of the activation.
/// Dropping the activation releases the auxiliary matrix on every exit path.
pub(crate) struct Activation {
    res_in_use: bool,
    inter: Option<BoolMatrix>,
}

impl Activation {
    pub(crate) fn new() -> Activation {
        Activation {
            res_in_use: false,
            inter: None,
        }
    }

    pub(crate) fn res_in_use(&self) -> bool {
        self.res_in_use
    }

    pub(crate) fn mark_res_in_use(&mut self) {
        self.res_in_use = true;
    }

    pub(crate) fn inter_mut(&mut self, (rows, cols): (usize, usize)) -> &mut BoolMatrix {
        self.inter.get_or_insert_with(|| BoolMatrix::new(rows, cols))
    }

    pub(crate) fn inter(&self) -> Option<&BoolMatrix> {
        self.inter.as_ref()
    }
}
