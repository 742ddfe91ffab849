//! `i32.*` constructors: constants, memory access, comparison, arithmetic,
//! conversions, and the `i32.atomic.*` families.

use super::{leaf_ops, memarg_ops};
use crate::instruction::{Immediates, Instruction};

/// `i32.const`; the signed LEB128 immediate.
pub fn const_(value: i32) -> Instruction {
    Instruction::with("i32.const", Immediates::I32(value))
}

memarg_ops! {
    load => "i32.load",
    load8_s => "i32.load8_s",
    load8_u => "i32.load8_u",
    load16_s => "i32.load16_s",
    load16_u => "i32.load16_u",
    store => "i32.store",
    store8 => "i32.store8",
    store16 => "i32.store16",
}

leaf_ops! {
    eqz => "i32.eqz",
    eq => "i32.eq",
    ne => "i32.ne",
    lt_s => "i32.lt_s",
    lt_u => "i32.lt_u",
    gt_s => "i32.gt_s",
    gt_u => "i32.gt_u",
    le_s => "i32.le_s",
    le_u => "i32.le_u",
    ge_s => "i32.ge_s",
    ge_u => "i32.ge_u",
    clz => "i32.clz",
    ctz => "i32.ctz",
    popcnt => "i32.popcnt",
    add => "i32.add",
    sub => "i32.sub",
    mul => "i32.mul",
    div_s => "i32.div_s",
    div_u => "i32.div_u",
    rem_s => "i32.rem_s",
    rem_u => "i32.rem_u",
    and => "i32.and",
    or => "i32.or",
    xor => "i32.xor",
    shl => "i32.shl",
    shr_s => "i32.shr_s",
    shr_u => "i32.shr_u",
    rotl => "i32.rotl",
    rotr => "i32.rotr",
    wrap_i64 => "i32.wrap_i64",
    trunc_f32_s => "i32.trunc_f32_s",
    trunc_f32_u => "i32.trunc_f32_u",
    trunc_f64_s => "i32.trunc_f64_s",
    trunc_f64_u => "i32.trunc_f64_u",
    reinterpret_f32 => "i32.reinterpret_f32",
    extend8_s => "i32.extend8_s",
    extend16_s => "i32.extend16_s",
    trunc_sat_f32_s => "i32.trunc_sat_f32_s",
    trunc_sat_f32_u => "i32.trunc_sat_f32_u",
    trunc_sat_f64_s => "i32.trunc_sat_f64_s",
    trunc_sat_f64_u => "i32.trunc_sat_f64_u",
}

/// `i32.atomic.*`: sequentially consistent loads, stores, and
/// read-modify-write operations.
pub mod atomic {
    use crate::op::memarg_ops;

    memarg_ops! {
        load => "i32.atomic.load",
        load8_u => "i32.atomic.load8_u",
        load16_u => "i32.atomic.load16_u",
        store => "i32.atomic.store",
        store8 => "i32.atomic.store8",
        store16 => "i32.atomic.store16",
    }

    pub mod rmw {
        use crate::op::memarg_ops;

        memarg_ops! {
            add => "i32.atomic.rmw.add",
            sub => "i32.atomic.rmw.sub",
            and => "i32.atomic.rmw.and",
            or => "i32.atomic.rmw.or",
            xor => "i32.atomic.rmw.xor",
            xchg => "i32.atomic.rmw.xchg",
            cmpxchg => "i32.atomic.rmw.cmpxchg",
        }
    }

    pub mod rmw8 {
        use crate::op::memarg_ops;

        memarg_ops! {
            add_u => "i32.atomic.rmw8.add_u",
            sub_u => "i32.atomic.rmw8.sub_u",
            and_u => "i32.atomic.rmw8.and_u",
            or_u => "i32.atomic.rmw8.or_u",
            xor_u => "i32.atomic.rmw8.xor_u",
            xchg_u => "i32.atomic.rmw8.xchg_u",
            cmpxchg_u => "i32.atomic.rmw8.cmpxchg_u",
        }
    }

    pub mod rmw16 {
        use crate::op::memarg_ops;

        memarg_ops! {
            add_u => "i32.atomic.rmw16.add_u",
            sub_u => "i32.atomic.rmw16.sub_u",
            and_u => "i32.atomic.rmw16.and_u",
            or_u => "i32.atomic.rmw16.or_u",
            xor_u => "i32.atomic.rmw16.xor_u",
            xchg_u => "i32.atomic.rmw16.xchg_u",
            cmpxchg_u => "i32.atomic.rmw16.cmpxchg_u",
        }
    }
}
