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

use itertools::Itertools;
use matrix::MatrixHandle;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Multiply,
    Add,
    Transpose,
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Multiply => write!(f, "*"),
            Operator::Add => write!(f, "+"),
            Operator::Transpose => write!(f, "T"),
        }
    }
}

/// Traversal direction of the edge an operand stands for. An incoming edge
/// reads its adjacency matrix transposed.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Direction {
    Outgoing,
    Incoming,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operand {
    /// A named matrix that has not been fetched from the graph yet.
    Reference { label: String, direction: Direction },
    /// A matrix lent by the graph store. The label is kept for rendering.
    Matrix { label: Option<String>, handle: MatrixHandle },
    /// The symbolic identity matrix. Recognized by this tag, never by
    /// comparing matrix content.
    Identity,
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Reference { label, .. } => write!(f, "{}", label),
            Operand::Matrix { label: Some(label), .. } => write!(f, "{}", label),
            Operand::Matrix { label: None, .. } => write!(f, "[matrix]"),
            Operand::Identity => write!(f, "I"),
        }
    }
}

/// A node of the matrix-algebra tree a path pattern compiles to.
#[derive(Debug, PartialEq, Clone)]
pub enum AlgebraicExpression {
    Operand(Operand),
    Operation {
        op: Operator,
        children: Vec<AlgebraicExpression>,
    },
}

impl AlgebraicExpression {
    pub fn multiply(children: Vec<AlgebraicExpression>) -> AlgebraicExpression {
        debug_assert!(children.len() >= 2, "multiplication takes at least two operands");
        AlgebraicExpression::Operation {
            op: Operator::Multiply,
            children,
        }
    }

    pub fn add(children: Vec<AlgebraicExpression>) -> AlgebraicExpression {
        debug_assert!(children.len() >= 2, "addition takes at least two operands");
        AlgebraicExpression::Operation {
            op: Operator::Add,
            children,
        }
    }

    pub fn transpose(child: AlgebraicExpression) -> AlgebraicExpression {
        AlgebraicExpression::Operation {
            op: Operator::Transpose,
            children: vec![child],
        }
    }

    /// Operand referencing the adjacency matrix of `label`. An incoming edge
    /// is wrapped in a transposition, which the evaluator later folds into a
    /// descriptor instead of materializing.
    pub fn reference<L: ToString>(label: L, direction: Direction) -> AlgebraicExpression {
        let operand = AlgebraicExpression::Operand(Operand::Reference {
            label: label.to_string(),
            direction,
        });
        match direction {
            Direction::Outgoing => operand,
            Direction::Incoming => AlgebraicExpression::transpose(operand),
        }
    }

    pub fn matrix(handle: MatrixHandle) -> AlgebraicExpression {
        AlgebraicExpression::Operand(Operand::Matrix { label: None, handle })
    }

    pub fn identity() -> AlgebraicExpression {
        AlgebraicExpression::Operand(Operand::Identity)
    }

    pub fn is_operation(&self) -> bool {
        matches!(self, AlgebraicExpression::Operation { .. })
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, AlgebraicExpression::Operand(_))
    }

    pub fn child_count(&self) -> usize {
        match self {
            AlgebraicExpression::Operand(_) => 0,
            AlgebraicExpression::Operation { children, .. } => children.len(),
        }
    }

    pub fn child(&self, index: usize) -> Option<&AlgebraicExpression> {
        match self {
            AlgebraicExpression::Operand(_) => None,
            AlgebraicExpression::Operation { children, .. } => children.get(index),
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            AlgebraicExpression::Operand(_) => None,
            AlgebraicExpression::Operation { op, .. } => Some(*op),
        }
    }

    pub fn operand_matrix(&self) -> Option<&MatrixHandle> {
        match self {
            AlgebraicExpression::Operand(Operand::Matrix { handle, .. }) => Some(handle),
            _ => None,
        }
    }
}

impl Display for AlgebraicExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AlgebraicExpression::Operand(operand) => write!(f, "{}", operand),
            AlgebraicExpression::Operation {
                op: Operator::Transpose,
                children,
            } => write!(f, "T({})", children.iter().map(ToString::to_string).join(", ")),
            AlgebraicExpression::Operation { op, children } => write!(
                f,
                "({})",
                children.iter().map(ToString::to_string).join(&format!(" {} ", op))
            ),
        }
    }
}

#[cfg(test)]
mod tests;
