//! `data.*` constructors; the operand is a data-segment name.

use crate::instruction::{Immediates, Instruction};

pub fn drop(data: impl Into<String>) -> Instruction {
    Instruction::with("data.drop", Immediates::Data(data.into()))
}
