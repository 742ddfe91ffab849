//! `i32x4.*` constructors.

use super::{lane_ops, leaf_ops};

lane_ops! { 4 =>
    extract_lane => "i32x4.extract_lane",
    replace_lane => "i32x4.replace_lane",
}

leaf_ops! {
    splat => "i32x4.splat",
    eq => "i32x4.eq",
    ne => "i32x4.ne",
    lt_s => "i32x4.lt_s",
    lt_u => "i32x4.lt_u",
    gt_s => "i32x4.gt_s",
    gt_u => "i32x4.gt_u",
    le_s => "i32x4.le_s",
    le_u => "i32x4.le_u",
    ge_s => "i32x4.ge_s",
    ge_u => "i32x4.ge_u",
    abs => "i32x4.abs",
    neg => "i32x4.neg",
    all_true => "i32x4.all_true",
    bitmask => "i32x4.bitmask",
    extend_low_i16x8_s => "i32x4.extend_low_i16x8_s",
    extend_high_i16x8_s => "i32x4.extend_high_i16x8_s",
    extend_low_i16x8_u => "i32x4.extend_low_i16x8_u",
    extend_high_i16x8_u => "i32x4.extend_high_i16x8_u",
    extadd_pairwise_i16x8_s => "i32x4.extadd_pairwise_i16x8_s",
    extadd_pairwise_i16x8_u => "i32x4.extadd_pairwise_i16x8_u",
    shl => "i32x4.shl",
    shr_s => "i32x4.shr_s",
    shr_u => "i32x4.shr_u",
    add => "i32x4.add",
    sub => "i32x4.sub",
    mul => "i32x4.mul",
    min_s => "i32x4.min_s",
    min_u => "i32x4.min_u",
    max_s => "i32x4.max_s",
    max_u => "i32x4.max_u",
    dot_i16x8_s => "i32x4.dot_i16x8_s",
    extmul_low_i16x8_s => "i32x4.extmul_low_i16x8_s",
    extmul_high_i16x8_s => "i32x4.extmul_high_i16x8_s",
    extmul_low_i16x8_u => "i32x4.extmul_low_i16x8_u",
    extmul_high_i16x8_u => "i32x4.extmul_high_i16x8_u",
    trunc_sat_f32x4_s => "i32x4.trunc_sat_f32x4_s",
    trunc_sat_f32x4_u => "i32x4.trunc_sat_f32x4_u",
    trunc_sat_f64x2_s_zero => "i32x4.trunc_sat_f64x2_s_zero",
    trunc_sat_f64x2_u_zero => "i32x4.trunc_sat_f64x2_u_zero",
    relaxed_trunc_f32x4_s => "i32x4.relaxed_trunc_f32x4_s",
    relaxed_trunc_f32x4_u => "i32x4.relaxed_trunc_f32x4_u",
    relaxed_trunc_f64x2_s_zero => "i32x4.relaxed_trunc_f64x2_s_zero",
    relaxed_trunc_f64x2_u_zero => "i32x4.relaxed_trunc_f64x2_u_zero",
    relaxed_laneselect => "i32x4.relaxed_laneselect",
    relaxed_dot_i8x16_i7x16_add_s => "i32x4.relaxed_dot_i8x16_i7x16_add_s",
}
