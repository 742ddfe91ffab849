//! `i16x8.*` constructors.

use super::{lane_ops, leaf_ops};

lane_ops! { 8 =>
    extract_lane_s => "i16x8.extract_lane_s",
    extract_lane_u => "i16x8.extract_lane_u",
    replace_lane => "i16x8.replace_lane",
}

leaf_ops! {
    splat => "i16x8.splat",
    eq => "i16x8.eq",
    ne => "i16x8.ne",
    lt_s => "i16x8.lt_s",
    lt_u => "i16x8.lt_u",
    gt_s => "i16x8.gt_s",
    gt_u => "i16x8.gt_u",
    le_s => "i16x8.le_s",
    le_u => "i16x8.le_u",
    ge_s => "i16x8.ge_s",
    ge_u => "i16x8.ge_u",
    abs => "i16x8.abs",
    neg => "i16x8.neg",
    q15mulr_sat_s => "i16x8.q15mulr_sat_s",
    all_true => "i16x8.all_true",
    bitmask => "i16x8.bitmask",
    narrow_i32x4_s => "i16x8.narrow_i32x4_s",
    narrow_i32x4_u => "i16x8.narrow_i32x4_u",
    extend_low_i8x16_s => "i16x8.extend_low_i8x16_s",
    extend_high_i8x16_s => "i16x8.extend_high_i8x16_s",
    extend_low_i8x16_u => "i16x8.extend_low_i8x16_u",
    extend_high_i8x16_u => "i16x8.extend_high_i8x16_u",
    extadd_pairwise_i8x16_s => "i16x8.extadd_pairwise_i8x16_s",
    extadd_pairwise_i8x16_u => "i16x8.extadd_pairwise_i8x16_u",
    shl => "i16x8.shl",
    shr_s => "i16x8.shr_s",
    shr_u => "i16x8.shr_u",
    add => "i16x8.add",
    add_sat_s => "i16x8.add_sat_s",
    add_sat_u => "i16x8.add_sat_u",
    sub => "i16x8.sub",
    sub_sat_s => "i16x8.sub_sat_s",
    sub_sat_u => "i16x8.sub_sat_u",
    mul => "i16x8.mul",
    min_s => "i16x8.min_s",
    min_u => "i16x8.min_u",
    max_s => "i16x8.max_s",
    max_u => "i16x8.max_u",
    avgr_u => "i16x8.avgr_u",
    extmul_low_i8x16_s => "i16x8.extmul_low_i8x16_s",
    extmul_high_i8x16_s => "i16x8.extmul_high_i8x16_s",
    extmul_low_i8x16_u => "i16x8.extmul_low_i8x16_u",
    extmul_high_i8x16_u => "i16x8.extmul_high_i8x16_u",
    relaxed_laneselect => "i16x8.relaxed_laneselect",
    relaxed_q15mulr_s => "i16x8.relaxed_q15mulr_s",
    relaxed_dot_i8x16_i7x16_s => "i16x8.relaxed_dot_i8x16_i7x16_s",
}
