//! `struct.*` constructors; operands are a type name and, for field access,
//! a 0-based field index.

use super::type_ops;
use crate::instruction::{Immediates, Instruction};

type_ops! {
    new => "struct.new",
    new_default => "struct.new_default",
}

pub fn get(type_name: impl Into<String>, field: u32) -> Instruction {
    Instruction::with(
        "struct.get",
        Immediates::StructField {
            type_name: type_name.into(),
            field,
        },
    )
}

pub fn get_s(type_name: impl Into<String>, field: u32) -> Instruction {
    Instruction::with(
        "struct.get_s",
        Immediates::StructField {
            type_name: type_name.into(),
            field,
        },
    )
}

pub fn get_u(type_name: impl Into<String>, field: u32) -> Instruction {
    Instruction::with(
        "struct.get_u",
        Immediates::StructField {
            type_name: type_name.into(),
            field,
        },
    )
}

pub fn set(type_name: impl Into<String>, field: u32) -> Instruction {
    Instruction::with(
        "struct.set",
        Immediates::StructField {
            type_name: type_name.into(),
            field,
        },
    )
}
