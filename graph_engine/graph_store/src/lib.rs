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

use dashmap::DashMap;
use matrix::{BoolMatrix, MatrixHandle};
use std::{
    fmt::{self, Display, Formatter},
    sync::Arc,
};

#[derive(Debug, Clone)]
enum Relation {
    Adjacency(MatrixHandle),
    Identity,
}

/// Outcome of resolving a relation label to its adjacency matrix.
#[derive(Debug, PartialEq, Clone)]
pub enum MatrixLookup {
    Matrix(MatrixHandle),
    Identity,
    NotFound,
}

#[derive(Debug, PartialEq)]
pub enum GraphError {
    RelationAlreadyExists(String),
    RelationShape {
        label: String,
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

impl GraphError {
    pub fn relation_already_exists<L: ToString>(label: L) -> GraphError {
        GraphError::RelationAlreadyExists(label.to_string())
    }

    pub fn relation_shape<L: ToString>(label: L, expected: (usize, usize), actual: (usize, usize)) -> GraphError {
        GraphError::RelationShape {
            label: label.to_string(),
            expected,
            actual,
        }
    }
}

impl Display for GraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::RelationAlreadyExists(label) => write!(f, "relation {:?} is already registered", label),
            GraphError::RelationShape { label, expected, actual } => write!(
                f,
                "relation {:?} matrix is {}x{}, the graph requires {}x{}",
                label, actual.0, actual.1, expected.0, expected.1
            ),
        }
    }
}

/// In-memory property-graph adjacency store. Every relation matrix is square
/// at the node count of the graph; handles are lent to evaluations as
/// read-only borrows.
#[derive(Debug)]
pub struct Graph {
    name: String,
    node_count: usize,
    relations: DashMap<String, Relation>,
}

impl Graph {
    pub fn new<N: ToString>(name: N, node_count: usize) -> Graph {
        Graph {
            name: name.to_string(),
            node_count,
            relations: DashMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    pub fn add_relation<L: ToString>(&self, label: L, matrix: BoolMatrix) -> Result<(), GraphError> {
        let label = label.to_string();
        let expected = (self.node_count, self.node_count);
        if matrix.shape() != expected {
            log::error!("relation {:?} matrix has shape {:?}", label, matrix.shape());
            return Err(GraphError::relation_shape(label, expected, matrix.shape()));
        }
        if self.relations.contains_key(&label) {
            log::error!("relation {:?} is already registered in graph {:?}", label, self.name);
            return Err(GraphError::relation_already_exists(label));
        }
        log::debug!("registering relation {:?} with {} edges in graph {:?}", label, matrix.nvals(), self.name);
        self.relations.insert(label, Relation::Adjacency(Arc::new(matrix)));
        Ok(())
    }

    /// Registers a label that resolves to the symbolic identity matrix, the
    /// algebraic form of a zero-length path pattern.
    pub fn mark_identity<L: ToString>(&self, label: L) {
        let label = label.to_string();
        log::debug!("registering identity relation {:?} in graph {:?}", label, self.name);
        self.relations.insert(label, Relation::Identity);
    }

    pub fn matrix_for(&self, label: &str) -> MatrixLookup {
        match self.relations.get(label).map(|entry| entry.value().clone()) {
            Some(Relation::Adjacency(handle)) => MatrixLookup::Matrix(handle),
            Some(Relation::Identity) => MatrixLookup::Identity,
            None => {
                log::debug!("no relation {:?} in graph {:?}", label, self.name);
                MatrixLookup::NotFound
            }
        }
    }
}

#[cfg(test)]
mod tests;
