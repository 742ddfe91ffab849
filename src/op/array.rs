//! `array.*` constructors.

use super::{leaf_ops, type_ops};
use crate::instruction::{Immediates, Instruction};

type_ops! {
    new => "array.new",
    new_default => "array.new_default",
    get => "array.get",
    get_s => "array.get_s",
    get_u => "array.get_u",
    set => "array.set",
    fill => "array.fill",
}

/// `array.new_fixed`: type name plus the number of operands taken from the
/// stack.
pub fn new_fixed(type_name: impl Into<String>, length: u32) -> Instruction {
    Instruction::with(
        "array.new_fixed",
        Immediates::ArrayNewFixed {
            type_name: type_name.into(),
            length,
        },
    )
}

pub fn new_data(type_name: impl Into<String>, data: impl Into<String>) -> Instruction {
    Instruction::with(
        "array.new_data",
        Immediates::ArrayWithData {
            type_name: type_name.into(),
            data: data.into(),
        },
    )
}

pub fn init_data(type_name: impl Into<String>, data: impl Into<String>) -> Instruction {
    Instruction::with(
        "array.init_data",
        Immediates::ArrayWithData {
            type_name: type_name.into(),
            data: data.into(),
        },
    )
}

pub fn new_elem(type_name: impl Into<String>, elem: impl Into<String>) -> Instruction {
    Instruction::with(
        "array.new_elem",
        Immediates::ArrayWithElem {
            type_name: type_name.into(),
            elem: elem.into(),
        },
    )
}

pub fn init_elem(type_name: impl Into<String>, elem: impl Into<String>) -> Instruction {
    Instruction::with(
        "array.init_elem",
        Immediates::ArrayWithElem {
            type_name: type_name.into(),
            elem: elem.into(),
        },
    )
}

/// Copies between arrays; emitted as destination type index then source
/// type index.
pub fn copy(dst_type: impl Into<String>, src_type: impl Into<String>) -> Instruction {
    Instruction::with(
        "array.copy",
        Immediates::ArrayCopy {
            dst_type: dst_type.into(),
            src_type: src_type.into(),
        },
    )
}

leaf_ops! {
    len => "array.len",
}
