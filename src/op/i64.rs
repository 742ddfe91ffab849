//! `i64.*` constructors.

use super::{leaf_ops, memarg_ops};
use crate::instruction::{Immediates, Instruction};

/// `i64.const`; the signed LEB128 immediate.
pub fn const_(value: i64) -> Instruction {
    Instruction::with("i64.const", Immediates::I64(value))
}

memarg_ops! {
    load => "i64.load",
    load8_s => "i64.load8_s",
    load8_u => "i64.load8_u",
    load16_s => "i64.load16_s",
    load16_u => "i64.load16_u",
    load32_s => "i64.load32_s",
    load32_u => "i64.load32_u",
    store => "i64.store",
    store8 => "i64.store8",
    store16 => "i64.store16",
    store32 => "i64.store32",
}

leaf_ops! {
    eqz => "i64.eqz",
    eq => "i64.eq",
    ne => "i64.ne",
    lt_s => "i64.lt_s",
    lt_u => "i64.lt_u",
    gt_s => "i64.gt_s",
    gt_u => "i64.gt_u",
    le_s => "i64.le_s",
    le_u => "i64.le_u",
    ge_s => "i64.ge_s",
    ge_u => "i64.ge_u",
    clz => "i64.clz",
    ctz => "i64.ctz",
    popcnt => "i64.popcnt",
    add => "i64.add",
    sub => "i64.sub",
    mul => "i64.mul",
    div_s => "i64.div_s",
    div_u => "i64.div_u",
    rem_s => "i64.rem_s",
    rem_u => "i64.rem_u",
    and => "i64.and",
    or => "i64.or",
    xor => "i64.xor",
    shl => "i64.shl",
    shr_s => "i64.shr_s",
    shr_u => "i64.shr_u",
    rotl => "i64.rotl",
    rotr => "i64.rotr",
    extend_i32_s => "i64.extend_i32_s",
    extend_i32_u => "i64.extend_i32_u",
    trunc_f32_s => "i64.trunc_f32_s",
    trunc_f32_u => "i64.trunc_f32_u",
    trunc_f64_s => "i64.trunc_f64_s",
    trunc_f64_u => "i64.trunc_f64_u",
    reinterpret_f64 => "i64.reinterpret_f64",
    extend8_s => "i64.extend8_s",
    extend16_s => "i64.extend16_s",
    extend32_s => "i64.extend32_s",
    trunc_sat_f32_s => "i64.trunc_sat_f32_s",
    trunc_sat_f32_u => "i64.trunc_sat_f32_u",
    trunc_sat_f64_s => "i64.trunc_sat_f64_s",
    trunc_sat_f64_u => "i64.trunc_sat_f64_u",
}

/// `i64.atomic.*` families.
pub mod atomic {
    use crate::op::memarg_ops;

    memarg_ops! {
        load => "i64.atomic.load",
        load8_u => "i64.atomic.load8_u",
        load16_u => "i64.atomic.load16_u",
        load32_u => "i64.atomic.load32_u",
        store => "i64.atomic.store",
        store8 => "i64.atomic.store8",
        store16 => "i64.atomic.store16",
        store32 => "i64.atomic.store32",
    }

    pub mod rmw {
        use crate::op::memarg_ops;

        memarg_ops! {
            add => "i64.atomic.rmw.add",
            sub => "i64.atomic.rmw.sub",
            and => "i64.atomic.rmw.and",
            or => "i64.atomic.rmw.or",
            xor => "i64.atomic.rmw.xor",
            xchg => "i64.atomic.rmw.xchg",
            cmpxchg => "i64.atomic.rmw.cmpxchg",
        }
    }

    pub mod rmw8 {
        use crate::op::memarg_ops;

        memarg_ops! {
            add_u => "i64.atomic.rmw8.add_u",
            sub_u => "i64.atomic.rmw8.sub_u",
            and_u => "i64.atomic.rmw8.and_u",
            or_u => "i64.atomic.rmw8.or_u",
            xor_u => "i64.atomic.rmw8.xor_u",
            xchg_u => "i64.atomic.rmw8.xchg_u",
            cmpxchg_u => "i64.atomic.rmw8.cmpxchg_u",
        }
    }

    pub mod rmw16 {
        use crate::op::memarg_ops;

        memarg_ops! {
            add_u => "i64.atomic.rmw16.add_u",
            sub_u => "i64.atomic.rmw16.sub_u",
            and_u => "i64.atomic.rmw16.and_u",
            or_u => "i64.atomic.rmw16.or_u",
            xor_u => "i64.atomic.rmw16.xor_u",
            xchg_u => "i64.atomic.rmw16.xchg_u",
            cmpxchg_u => "i64.atomic.rmw16.cmpxchg_u",
        }
    }

    pub mod rmw32 {
        use crate::op::memarg_ops;

        memarg_ops! {
            add_u => "i64.atomic.rmw32.add_u",
            sub_u => "i64.atomic.rmw32.sub_u",
            and_u => "i64.atomic.rmw32.and_u",
            or_u => "i64.atomic.rmw32.or_u",
            xor_u => "i64.atomic.rmw32.xor_u",
            xchg_u => "i64.atomic.rmw32.xchg_u",
            cmpxchg_u => "i64.atomic.rmw32.cmpxchg_u",
        }
    }
}
