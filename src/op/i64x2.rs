//! `i64x2.*` constructors.

use super::{lane_ops, leaf_ops};

lane_ops! { 2 =>
    extract_lane => "i64x2.extract_lane",
    replace_lane => "i64x2.replace_lane",
}

leaf_ops! {
    splat => "i64x2.splat",
    eq => "i64x2.eq",
    ne => "i64x2.ne",
    lt_s => "i64x2.lt_s",
    gt_s => "i64x2.gt_s",
    le_s => "i64x2.le_s",
    ge_s => "i64x2.ge_s",
    abs => "i64x2.abs",
    neg => "i64x2.neg",
    all_true => "i64x2.all_true",
    bitmask => "i64x2.bitmask",
    extend_low_i32x4_s => "i64x2.extend_low_i32x4_s",
    extend_high_i32x4_s => "i64x2.extend_high_i32x4_s",
    extend_low_i32x4_u => "i64x2.extend_low_i32x4_u",
    extend_high_i32x4_u => "i64x2.extend_high_i32x4_u",
    shl => "i64x2.shl",
    shr_s => "i64x2.shr_s",
    shr_u => "i64x2.shr_u",
    add => "i64x2.add",
    sub => "i64x2.sub",
    mul => "i64x2.mul",
    extmul_low_i32x4_s => "i64x2.extmul_low_i32x4_s",
    extmul_high_i32x4_s => "i64x2.extmul_high_i32x4_s",
    extmul_low_i32x4_u => "i64x2.extmul_low_i32x4_u",
    extmul_high_i32x4_u => "i64x2.extmul_high_i32x4_u",
    relaxed_laneselect => "i64x2.relaxed_laneselect",
}
