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
use matrix::BoolMatrix;
use std::sync::Arc;

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn reference_to_an_outgoing_edge_is_a_bare_operand() {
        let exp = AlgebraicExpression::reference("KNOWS", Direction::Outgoing);

        assert_eq!(
            exp,
            AlgebraicExpression::Operand(Operand::Reference {
                label: "KNOWS".to_owned(),
                direction: Direction::Outgoing,
            })
        );
        assert!(exp.is_operand());
        assert_eq!(exp.child_count(), 0);
    }

    #[test]
    fn reference_to_an_incoming_edge_is_wrapped_in_a_transposition() {
        let exp = AlgebraicExpression::reference("KNOWS", Direction::Incoming);

        assert_eq!(
            exp,
            AlgebraicExpression::transpose(AlgebraicExpression::Operand(Operand::Reference {
                label: "KNOWS".to_owned(),
                direction: Direction::Incoming,
            }))
        );
        assert!(exp.is_operation());
        assert_eq!(exp.operator(), Some(Operator::Transpose));
    }

    #[test]
    fn operation_children_are_inspectable_in_order() {
        let exp = AlgebraicExpression::multiply(vec![
            AlgebraicExpression::reference("A", Direction::Outgoing),
            AlgebraicExpression::reference("B", Direction::Outgoing),
            AlgebraicExpression::identity(),
        ]);

        assert_eq!(exp.operator(), Some(Operator::Multiply));
        assert_eq!(exp.child_count(), 3);
        assert_eq!(exp.child(2), Some(&AlgebraicExpression::identity()));
        assert_eq!(exp.child(3), None);
    }

    #[test]
    fn bound_operand_exposes_its_matrix() {
        let handle = Arc::new(BoolMatrix::identity(2));
        let exp = AlgebraicExpression::matrix(handle.clone());

        assert_eq!(exp.operand_matrix(), Some(&handle));
        assert_eq!(AlgebraicExpression::identity().operand_matrix(), None);
    }

    #[test]
    fn clone_is_independent_of_the_original() {
        let original = AlgebraicExpression::add(vec![
            AlgebraicExpression::reference("A", Direction::Outgoing),
            AlgebraicExpression::reference("B", Direction::Outgoing),
        ]);

        let copy = original.clone();

        assert_eq!(copy, original);
    }
}

#[cfg(test)]
mod rendering {
    use super::*;

    #[test]
    fn multiplication_chain() {
        let exp = AlgebraicExpression::multiply(vec![
            AlgebraicExpression::reference("A", Direction::Outgoing),
            AlgebraicExpression::reference("B", Direction::Outgoing),
            AlgebraicExpression::identity(),
        ]);

        assert_eq!(exp.to_string(), "(A * B * I)");
    }

    #[test]
    fn addition_over_a_transposed_operand() {
        let exp = AlgebraicExpression::add(vec![
            AlgebraicExpression::reference("A", Direction::Outgoing),
            AlgebraicExpression::reference("B", Direction::Incoming),
        ]);

        assert_eq!(exp.to_string(), "(A + T(B))");
    }

    #[test]
    fn nested_operations_are_parenthesized() {
        let exp = AlgebraicExpression::multiply(vec![
            AlgebraicExpression::add(vec![
                AlgebraicExpression::reference("A", Direction::Outgoing),
                AlgebraicExpression::reference("B", Direction::Outgoing),
            ]),
            AlgebraicExpression::reference("C", Direction::Outgoing),
        ]);

        assert_eq!(exp.to_string(), "((A + B) * C)");
    }

    #[test]
    fn bound_operand_renders_its_label() {
        let exp = AlgebraicExpression::Operand(Operand::Matrix {
            label: Some("KNOWS".to_owned()),
            handle: Arc::new(BoolMatrix::new(2, 2)),
        });

        assert_eq!(exp.to_string(), "KNOWS");
        assert_eq!(AlgebraicExpression::matrix(Arc::new(BoolMatrix::new(2, 2))).to_string(), "[matrix]");
    }
}
