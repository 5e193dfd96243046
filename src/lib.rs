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

//! Algebraic evaluation core of a property-graph query engine. A path
//! pattern compiles to a tree of matrix operations over boolean adjacency
//! matrices; evaluating the tree yields a matrix whose nonzero pattern is
//! the set of endpoint pairs matched by the pattern.

pub use algebra_eval::{evaluate, fetch_operands, EvaluationError};
pub use algebraic_expression::{AlgebraicExpression, Direction, Operand, Operator};
pub use graph_store::{Graph, GraphError, MatrixLookup};
pub use matrix::{ops, BoolMatrix, Descriptor, InputMode, MatrixError, MatrixHandle};
