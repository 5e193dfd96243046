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

use crate::EvaluationError;
use algebraic_expression::{AlgebraicExpression, Operand};
use graph_store::{Graph, MatrixLookup};

/// Binds every unresolved operand of the tree to the graph's current matrix
/// for its label. Operands bound by an earlier pass are left as they are,
/// which makes the pass idempotent and keeps repeat evaluations of one tree
/// from re-fetching.
pub fn fetch_operands(exp: &mut AlgebraicExpression, graph: &Graph) -> Result<(), EvaluationError> {
    match exp {
        AlgebraicExpression::Operand(operand) => {
            if let Operand::Reference { label, .. } = operand {
                let bound = match graph.matrix_for(label) {
                    MatrixLookup::Matrix(handle) => Operand::Matrix {
                        label: Some(label.clone()),
                        handle,
                    },
                    MatrixLookup::Identity => Operand::Identity,
                    MatrixLookup::NotFound => return Err(EvaluationError::unresolved_operand(label.as_str())),
                };
                *operand = bound;
            }
            Ok(())
        }
        AlgebraicExpression::Operation { children, .. } => {
            for child in children {
                fetch_operands(child, graph)?;
            }
            Ok(())
        }
    }
}
