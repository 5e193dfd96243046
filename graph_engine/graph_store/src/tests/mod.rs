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

#[test]
fn registered_relation_is_resolved_to_its_matrix() {
    let graph = Graph::new("social", 4);
    let knows = BoolMatrix::from_entries(4, 4, &[(0, 1), (1, 2)]);

    assert_eq!(graph.add_relation("KNOWS", knows.clone()), Ok(()));

    assert_eq!(graph.matrix_for("KNOWS"), MatrixLookup::Matrix(Arc::new(knows)));
    assert_eq!(graph.relation_count(), 1);
}

#[test]
fn unknown_label_is_not_found() {
    let graph = Graph::new("social", 4);

    assert_eq!(graph.matrix_for("LIKES"), MatrixLookup::NotFound);
}

#[test]
fn identity_label_resolves_to_the_sentinel() {
    let graph = Graph::new("social", 4);

    graph.mark_identity("EPSILON");

    assert_eq!(graph.matrix_for("EPSILON"), MatrixLookup::Identity);
}

#[test]
fn relation_matrix_must_match_the_node_count() {
    let graph = Graph::new("social", 4);

    assert_eq!(
        graph.add_relation("KNOWS", BoolMatrix::new(3, 4)),
        Err(GraphError::relation_shape("KNOWS", (4, 4), (3, 4)))
    );
    assert_eq!(graph.matrix_for("KNOWS"), MatrixLookup::NotFound);
}

#[test]
fn duplicate_relation_label_is_rejected() {
    let graph = Graph::new("social", 4);

    assert_eq!(graph.add_relation("KNOWS", BoolMatrix::new(4, 4)), Ok(()));
    assert_eq!(
        graph.add_relation("KNOWS", BoolMatrix::new(4, 4)),
        Err(GraphError::relation_already_exists("KNOWS"))
    );
}

#[test]
fn lookups_share_a_single_matrix() {
    let graph = Graph::new("social", 2);
    graph.add_relation("KNOWS", BoolMatrix::identity(2)).unwrap();

    let first = graph.matrix_for("KNOWS");
    let second = graph.matrix_for("KNOWS");

    match (first, second) {
        (MatrixLookup::Matrix(first), MatrixLookup::Matrix(second)) => assert!(Arc::ptr_eq(&first, &second)),
        other => panic!("both lookups resolve to matrices, got {:?}", other),
    }
}
