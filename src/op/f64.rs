//! `f64.*` constructors.

use super::{leaf_ops, memarg_ops};
use crate::instruction::{Immediates, Instruction};

/// `f64.const`; little-endian IEEE 754 immediate.
pub fn const_(value: f64) -> Instruction {
    Instruction::with("f64.const", Immediates::F64(value))
}

memarg_ops! {
    load => "f64.load",
    store => "f64.store",
}

leaf_ops! {
    eq => "f64.eq",
    ne => "f64.ne",
    lt => "f64.lt",
    gt => "f64.gt",
    le => "f64.le",
    ge => "f64.ge",
    abs => "f64.abs",
    neg => "f64.neg",
    ceil => "f64.ceil",
    floor => "f64.floor",
    trunc => "f64.trunc",
    nearest => "f64.nearest",
    sqrt => "f64.sqrt",
    add => "f64.add",
    sub => "f64.sub",
    mul => "f64.mul",
    div => "f64.div",
    min => "f64.min",
    max => "f64.max",
    copysign => "f64.copysign",
    convert_i32_s => "f64.convert_i32_s",
    convert_i32_u => "f64.convert_i32_u",
    convert_i64_s => "f64.convert_i64_s",
    convert_i64_u => "f64.convert_i64_u",
    promote_f32 => "f64.promote_f32",
    reinterpret_i64 => "f64.reinterpret_i64",
}
