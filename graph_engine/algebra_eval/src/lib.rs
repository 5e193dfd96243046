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

use algebraic_expression::AlgebraicExpression;
use graph_store::Graph;
use matrix::{BoolMatrix, MatrixError};
use std::fmt::{self, Display, Formatter};

mod eval;
mod fetch;
mod scratch;

pub use fetch::fetch_operands;

#[derive(Debug, PartialEq)]
pub enum EvaluationError {
    /// The graph has no matrix for a referenced relation label.
    UnresolvedOperand(String),
    /// A matrix primitive failed. Fatal for the running evaluation.
    Backend(MatrixError),
    /// A structural precondition of the tree does not hold.
    MalformedTree(String),
}

impl EvaluationError {
    pub fn unresolved_operand<L: ToString>(label: L) -> EvaluationError {
        EvaluationError::UnresolvedOperand(label.to_string())
    }

    pub fn malformed<M: ToString>(message: M) -> EvaluationError {
        EvaluationError::MalformedTree(message.to_string())
    }
}

impl From<MatrixError> for EvaluationError {
    fn from(error: MatrixError) -> EvaluationError {
        EvaluationError::Backend(error)
    }
}

impl Display for EvaluationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::UnresolvedOperand(label) => write!(f, "graph has no matrix for relation {:?}", label),
            EvaluationError::Backend(error) => write!(f, "matrix backend failure: {}", error),
            EvaluationError::MalformedTree(message) => write!(f, "malformed expression tree: {}", message),
        }
    }
}

/// Evaluates an algebraic expression into the caller-owned destination.
///
/// Operands are fetched from the graph on the first evaluation of the tree;
/// repeat evaluations reuse the bound matrices. On failure the destination
/// holds an intermediate value and should be discarded.
pub fn evaluate(exp: &mut AlgebraicExpression, graph: &Graph, res: &mut BoolMatrix) -> Result<(), EvaluationError> {
    if !exp.is_operation() {
        return Err(EvaluationError::malformed("expression root must be an operation"));
    }
    fetch::fetch_operands(exp, graph)?;
    match eval::eval_into(exp, res) {
        Ok(_) => Ok(()),
        Err(error) => {
            log::error!("evaluation of {} failed: {}", exp, error);
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests;
