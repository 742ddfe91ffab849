//! `i8x16.*` constructors.

use super::{lane_ops, leaf_ops};
use crate::instruction::{Immediates, Instruction};

/// `i8x16.shuffle`; each of the 16 indices selects a lane from the 32
/// concatenated input lanes.
pub fn shuffle(lanes: [u8; 16]) -> Instruction {
    Instruction::with("i8x16.shuffle", Immediates::ShuffleLanes(lanes))
}

lane_ops! { 16 =>
    extract_lane_s => "i8x16.extract_lane_s",
    extract_lane_u => "i8x16.extract_lane_u",
    replace_lane => "i8x16.replace_lane",
}

leaf_ops! {
    swizzle => "i8x16.swizzle",
    splat => "i8x16.splat",
    eq => "i8x16.eq",
    ne => "i8x16.ne",
    lt_s => "i8x16.lt_s",
    lt_u => "i8x16.lt_u",
    gt_s => "i8x16.gt_s",
    gt_u => "i8x16.gt_u",
    le_s => "i8x16.le_s",
    le_u => "i8x16.le_u",
    ge_s => "i8x16.ge_s",
    ge_u => "i8x16.ge_u",
    abs => "i8x16.abs",
    neg => "i8x16.neg",
    popcnt => "i8x16.popcnt",
    all_true => "i8x16.all_true",
    bitmask => "i8x16.bitmask",
    narrow_i16x8_s => "i8x16.narrow_i16x8_s",
    narrow_i16x8_u => "i8x16.narrow_i16x8_u",
    shl => "i8x16.shl",
    shr_s => "i8x16.shr_s",
    shr_u => "i8x16.shr_u",
    add => "i8x16.add",
    add_sat_s => "i8x16.add_sat_s",
    add_sat_u => "i8x16.add_sat_u",
    sub => "i8x16.sub",
    sub_sat_s => "i8x16.sub_sat_s",
    sub_sat_u => "i8x16.sub_sat_u",
    min_s => "i8x16.min_s",
    min_u => "i8x16.min_u",
    max_s => "i8x16.max_s",
    max_u => "i8x16.max_u",
    avgr_u => "i8x16.avgr_u",
    relaxed_swizzle => "i8x16.relaxed_swizzle",
    relaxed_laneselect => "i8x16.relaxed_laneselect",
}
