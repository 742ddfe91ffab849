//! `v128.*` constructors: whole-vector loads/stores, the 16-byte constant,
//! lane-indexed memory access, and bitwise operations.

use super::{lane_memarg_ops, leaf_ops, memarg_ops};
use crate::instruction::{Immediates, Instruction};

/// `v128.const`; the 16 bytes are copied to the output verbatim.
pub fn const_(bytes: [u8; 16]) -> Instruction {
    Instruction::with("v128.const", Immediates::V128(bytes))
}

memarg_ops! {
    load => "v128.load",
    load8x8_s => "v128.load8x8_s",
    load8x8_u => "v128.load8x8_u",
    load16x4_s => "v128.load16x4_s",
    load16x4_u => "v128.load16x4_u",
    load32x2_s => "v128.load32x2_s",
    load32x2_u => "v128.load32x2_u",
    load8_splat => "v128.load8_splat",
    load16_splat => "v128.load16_splat",
    load32_splat => "v128.load32_splat",
    load64_splat => "v128.load64_splat",
    load32_zero => "v128.load32_zero",
    load64_zero => "v128.load64_zero",
    store => "v128.store",
}

lane_memarg_ops! { 16 =>
    load8_lane => "v128.load8_lane",
    store8_lane => "v128.store8_lane",
}

lane_memarg_ops! { 8 =>
    load16_lane => "v128.load16_lane",
    store16_lane => "v128.store16_lane",
}

lane_memarg_ops! { 4 =>
    load32_lane => "v128.load32_lane",
    store32_lane => "v128.store32_lane",
}

lane_memarg_ops! { 2 =>
    load64_lane => "v128.load64_lane",
    store64_lane => "v128.store64_lane",
}

leaf_ops! {
    not => "v128.not",
    and => "v128.and",
    andnot => "v128.andnot",
    or => "v128.or",
    xor => "v128.xor",
    bitselect => "v128.bitselect",
    any_true => "v128.any_true",
}
