//! `f32x4.*` constructors.

use super::{lane_ops, leaf_ops};

lane_ops! { 4 =>
    extract_lane => "f32x4.extract_lane",
    replace_lane => "f32x4.replace_lane",
}

leaf_ops! {
    splat => "f32x4.splat",
    eq => "f32x4.eq",
    ne => "f32x4.ne",
    lt => "f32x4.lt",
    gt => "f32x4.gt",
    le => "f32x4.le",
    ge => "f32x4.ge",
    ceil => "f32x4.ceil",
    floor => "f32x4.floor",
    trunc => "f32x4.trunc",
    nearest => "f32x4.nearest",
    abs => "f32x4.abs",
    neg => "f32x4.neg",
    sqrt => "f32x4.sqrt",
    add => "f32x4.add",
    sub => "f32x4.sub",
    mul => "f32x4.mul",
    div => "f32x4.div",
    min => "f32x4.min",
    max => "f32x4.max",
    pmin => "f32x4.pmin",
    pmax => "f32x4.pmax",
    convert_i32x4_s => "f32x4.convert_i32x4_s",
    convert_i32x4_u => "f32x4.convert_i32x4_u",
    demote_f64x2_zero => "f32x4.demote_f64x2_zero",
    relaxed_madd => "f32x4.relaxed_madd",
    relaxed_nmadd => "f32x4.relaxed_nmadd",
    relaxed_min => "f32x4.relaxed_min",
    relaxed_max => "f32x4.relaxed_max",
}
