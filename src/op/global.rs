//! `global.*` constructors.

use crate::instruction::{Immediates, Instruction};

pub fn get(name: impl Into<String>) -> Instruction {
    Instruction::with("global.get", Immediates::Global(name.into()))
}

pub fn set(name: impl Into<String>) -> Instruction {
    Instruction::with("global.set", Immediates::Global(name.into()))
}
