//! `local.*` constructors; the operand is a parameter or local name within
//! the enclosing function.

use crate::instruction::{Immediates, Instruction};

pub fn get(name: impl Into<String>) -> Instruction {
    Instruction::with("local.get", Immediates::Local(name.into()))
}

pub fn set(name: impl Into<String>) -> Instruction {
    Instruction::with("local.set", Immediates::Local(name.into()))
}

pub fn tee(name: impl Into<String>) -> Instruction {
    Instruction::with("local.tee", Immediates::Local(name.into()))
}
