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

use super::*;
use algebraic_expression::{AlgebraicExpression, Direction, Operand, Operator};
use graph_store::Graph;
use std::sync::Arc;


/// Builds a matrix from row bit patterns, leftmost character is column zero.
fn matrix(rows: &[&str]) -> BoolMatrix {
    let cols = rows.first().map(|row| row.len()).unwrap_or(0);
    let mut matrix = BoolMatrix::new(rows.len(), cols);
    for (row, pattern) in rows.iter().enumerate() {
        for (col, bit) in pattern.chars().enumerate() {
            if bit == '1' {
                matrix.set(row, col);
            }
        }
    }
    matrix
}

fn graph_with(relations: &[(&str, BoolMatrix)]) -> Graph {
    let node_count = relations.first().map(|(_, matrix)| matrix.nrows()).unwrap_or(4);
    let graph = Graph::new("queries", node_count);
    for (label, matrix) in relations {
        graph.add_relation(*label, matrix.clone()).unwrap();
    }
    graph
}

fn outgoing(label: &str) -> AlgebraicExpression {
    AlgebraicExpression::reference(label, Direction::Outgoing)
}

fn eval(exp: &mut AlgebraicExpression, graph: &Graph) -> Result<BoolMatrix, EvaluationError> {
    let mut res = BoolMatrix::new(graph.node_count(), graph.node_count());
    evaluate(exp, graph, &mut res)?;
    Ok(res)
}

fn shift() -> BoolMatrix {
    matrix(&["0100", "0010", "0001", "0000"])
}

fn double_shift() -> BoolMatrix {
    matrix(&["0010", "0001", "0000", "0000"])
}
