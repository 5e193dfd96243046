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

use crate::{scratch::Activation, EvaluationError};
use algebraic_expression::{AlgebraicExpression, Operand, Operator};
use matrix::{ops, BoolMatrix, Descriptor, InputMode, MatrixHandle};

/// What a recursive evaluation produced: the destination it was handed was
/// filled, or the subtree was a bare operand and the destination was left
/// untouched.
pub(crate) enum Evaluated {
    Dest,
    Operand(MatrixHandle),
    Identity,
}

/// Where an operand of a binary operation lives during its activation.
enum Slot {
    Res,
    Inter,
    Operand(MatrixHandle),
    Identity,
}

pub(crate) fn eval_into(exp: &AlgebraicExpression, dest: &mut BoolMatrix) -> Result<Evaluated, EvaluationError> {
    match exp {
        AlgebraicExpression::Operand(operand) => operand_value(operand),
        AlgebraicExpression::Operation {
            op: Operator::Multiply,
            children,
        } => {
            eval_multiply(children, dest)?;
            Ok(Evaluated::Dest)
        }
        AlgebraicExpression::Operation {
            op: Operator::Add,
            children,
        } => {
            eval_add(children, dest)?;
            Ok(Evaluated::Dest)
        }
        AlgebraicExpression::Operation {
            op: Operator::Transpose,
            children,
        } => eval_transpose(children, dest),
    }
}

fn operand_value(operand: &Operand) -> Result<Evaluated, EvaluationError> {
    match operand {
        Operand::Matrix { handle, .. } => Ok(Evaluated::Operand(handle.clone())),
        Operand::Identity => Ok(Evaluated::Identity),
        Operand::Reference { label, .. } => Err(EvaluationError::unresolved_operand(label.as_str())),
    }
}

fn eval_transpose(children: &[AlgebraicExpression], dest: &mut BoolMatrix) -> Result<Evaluated, EvaluationError> {
    if children.len() != 1 {
        return Err(transposition_arity(children.len()));
    }
    match eval_into(&children[0], dest)? {
        Evaluated::Dest => dest.transpose_in_place(),
        // a bare operand never wrote `dest`, so it is materialized there
        // already transposed instead of transposing `dest` in place
        Evaluated::Operand(handle) => {
            let mut desc = Descriptor::default();
            desc.set_inp0(InputMode::Transposed);
            *dest = ops::apply(&handle, &desc);
        }
        Evaluated::Identity => return Err(identity_outside_multiplication()),
    }
    Ok(Evaluated::Dest)
}

fn eval_multiply(children: &[AlgebraicExpression], res: &mut BoolMatrix) -> Result<(), EvaluationError> {
    if children.len() < 2 {
        return Err(EvaluationError::malformed(format!(
            "multiplication takes at least two operands, got {}",
            children.len()
        )));
    }

    let mut desc = Descriptor::default();
    let mut activation = Activation::new();

    let a = resolve_left(&children[0], res, &mut desc, &mut activation)?;
    let inter_shape = match &a {
        Slot::Identity => res.shape(),
        slot => operand_ref(slot, res, &activation).shape(),
    };
    let b = resolve_right(&children[1], res, &mut desc, &mut activation, inter_shape)?;

    let product = match (&a, &b) {
        (Slot::Identity, Slot::Identity) => BoolMatrix::identity(res.nrows()),
        (a, Slot::Identity) => ops::apply(operand_ref(a, res, &activation), &desc),
        (Slot::Identity, b) => {
            let mut transposition = Descriptor::default();
            transposition.set_inp0(desc.inp1());
            ops::apply(operand_ref(b, res, &activation), &transposition)
        }
        (a, b) => ops::mxm(operand_ref(a, res, &activation), operand_ref(b, res, &activation), &desc)?,
    };
    *res = product;
    // the accumulator lives in `res` for the rest of the activation
    activation.mark_res_in_use();
    desc.reset_inp0();

    if res.nvals() == 0 {
        // an empty accumulator stays empty under boolean multiplication
        log::debug!("product emptied after 2 of {} operands, short-circuiting", children.len());
        return Ok(());
    }

    for (index, child) in children.iter().enumerate().skip(2) {
        desc.reset_inp1();
        let shape = res.shape();
        let b = resolve_right(child, res, &mut desc, &mut activation, shape)?;
        match &b {
            Slot::Identity => {}
            b => {
                let product = ops::mxm(res, operand_ref(b, res, &activation), &desc)?;
                *res = product;
            }
        }
        if res.nvals() == 0 {
            log::debug!("product emptied after {} of {} operands, short-circuiting", index + 1, children.len());
            break;
        }
    }
    Ok(())
}

fn eval_add(children: &[AlgebraicExpression], res: &mut BoolMatrix) -> Result<(), EvaluationError> {
    if children.len() < 2 {
        return Err(EvaluationError::malformed(format!(
            "addition takes at least two operands, got {}",
            children.len()
        )));
    }

    let mut desc = Descriptor::default();
    let mut activation = Activation::new();

    let a = resolve_left(&children[0], res, &mut desc, &mut activation)?;
    let inter_shape = match &a {
        Slot::Identity => return Err(identity_outside_multiplication()),
        slot => operand_ref(slot, res, &activation).shape(),
    };
    let b = resolve_right(&children[1], res, &mut desc, &mut activation, inter_shape)?;
    if let Slot::Identity = b {
        return Err(identity_outside_multiplication());
    }

    let sum = ops::ewise_add(operand_ref(&a, res, &activation), operand_ref(&b, res, &activation), &desc)?;
    *res = sum;
    activation.mark_res_in_use();
    desc.reset_inp0();

    for child in children.iter().skip(2) {
        desc.reset_inp1();
        let shape = res.shape();
        let b = resolve_right(child, res, &mut desc, &mut activation, shape)?;
        if let Slot::Identity = b {
            return Err(identity_outside_multiplication());
        }
        let sum = ops::ewise_add(res, operand_ref(&b, res, &activation), &desc)?;
        *res = sum;
    }
    Ok(())
}

/// Resolves the first operand of a binary operation. A transposition is
/// folded into the `INP0` descriptor slot and its grandchild becomes the
/// effective operand; operand leaves are borrowed directly, anything else is
/// evaluated into `res`, which stays free otherwise.
fn resolve_left(
    left: &AlgebraicExpression,
    res: &mut BoolMatrix,
    desc: &mut Descriptor,
    activation: &mut Activation,
) -> Result<Slot, EvaluationError> {
    let mut left = left;
    if let AlgebraicExpression::Operation {
        op: Operator::Transpose,
        children,
    } = left
    {
        if children.len() != 1 {
            return Err(transposition_arity(children.len()));
        }
        desc.set_inp0(InputMode::Transposed);
        left = &children[0];
    }
    match left {
        AlgebraicExpression::Operand(operand) => Ok(slot_of(operand_value(operand)?)),
        operation => {
            eval_into(operation, res)?;
            activation.mark_res_in_use();
            Ok(Slot::Res)
        }
    }
}

/// Resolves the second and every following operand. A transposition is folded
/// into the `INP1` descriptor slot; an operand that needs evaluation goes
/// into `res` while it is free and into the auxiliary matrix afterwards.
fn resolve_right(
    right: &AlgebraicExpression,
    res: &mut BoolMatrix,
    desc: &mut Descriptor,
    activation: &mut Activation,
    inter_shape: (usize, usize),
) -> Result<Slot, EvaluationError> {
    let mut right = right;
    if let AlgebraicExpression::Operation {
        op: Operator::Transpose,
        children,
    } = right
    {
        if children.len() != 1 {
            return Err(transposition_arity(children.len()));
        }
        desc.set_inp1(InputMode::Transposed);
        right = &children[0];
    }
    match right {
        AlgebraicExpression::Operand(operand) => Ok(slot_of(operand_value(operand)?)),
        operation => {
            if activation.res_in_use() {
                let inter = activation.inter_mut(inter_shape);
                eval_into(operation, inter)?;
                Ok(Slot::Inter)
            } else {
                eval_into(operation, res)?;
                activation.mark_res_in_use();
                Ok(Slot::Res)
            }
        }
    }
}

fn slot_of(value: Evaluated) -> Slot {
    match value {
        Evaluated::Dest => Slot::Res,
        Evaluated::Operand(handle) => Slot::Operand(handle),
        Evaluated::Identity => Slot::Identity,
    }
}

fn operand_ref<'a>(slot: &'a Slot, res: &'a BoolMatrix, activation: &'a Activation) -> &'a BoolMatrix {
    match slot {
        Slot::Res => res,
        Slot::Inter => activation.inter().expect("auxiliary matrix is allocated before it is referenced"),
        Slot::Operand(handle) => handle,
        Slot::Identity => unreachable!("the identity matrix never reaches a backend primitive"),
    }
}

fn transposition_arity(count: usize) -> EvaluationError {
    EvaluationError::malformed(format!("transposition takes exactly one operand, got {}", count))
}

fn identity_outside_multiplication() -> EvaluationError {
    EvaluationError::malformed("the identity matrix is only valid inside a multiplication")
}
