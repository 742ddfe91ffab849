//! `elem.*` constructors; the operand is an element-segment name.

use crate::instruction::{Immediates, Instruction};

pub fn drop(elem: impl Into<String>) -> Instruction {
    Instruction::with("elem.drop", Immediates::Elem(elem.into()))
}
