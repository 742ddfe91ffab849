//! `f32.*` constructors.

use super::{leaf_ops, memarg_ops};
use crate::instruction::{Immediates, Instruction};

/// `f32.const`; little-endian IEEE 754 immediate.
pub fn const_(value: f32) -> Instruction {
    Instruction::with("f32.const", Immediates::F32(value))
}

memarg_ops! {
    load => "f32.load",
    store => "f32.store",
}

leaf_ops! {
    eq => "f32.eq",
    ne => "f32.ne",
    lt => "f32.lt",
    gt => "f32.gt",
    le => "f32.le",
    ge => "f32.ge",
    abs => "f32.abs",
    neg => "f32.neg",
    ceil => "f32.ceil",
    floor => "f32.floor",
    trunc => "f32.trunc",
    nearest => "f32.nearest",
    sqrt => "f32.sqrt",
    add => "f32.add",
    sub => "f32.sub",
    mul => "f32.mul",
    div => "f32.div",
    min => "f32.min",
    max => "f32.max",
    copysign => "f32.copysign",
    convert_i32_s => "f32.convert_i32_s",
    convert_i32_u => "f32.convert_i32_u",
    convert_i64_s => "f32.convert_i64_s",
    convert_i64_u => "f32.convert_i64_u",
    demote_f64 => "f32.demote_f64",
    reinterpret_i32 => "f32.reinterpret_i32",
}
