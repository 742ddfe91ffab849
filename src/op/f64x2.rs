//! `f64x2.*` constructors.

use super::{lane_ops, leaf_ops};

lane_ops! { 2 =>
    extract_lane => "f64x2.extract_lane",
    replace_lane => "f64x2.replace_lane",
}

leaf_ops! {
    splat => "f64x2.splat",
    eq => "f64x2.eq",
    ne => "f64x2.ne",
    lt => "f64x2.lt",
    gt => "f64x2.gt",
    le => "f64x2.le",
    ge => "f64x2.ge",
    ceil => "f64x2.ceil",
    floor => "f64x2.floor",
    trunc => "f64x2.trunc",
    nearest => "f64x2.nearest",
    abs => "f64x2.abs",
    neg => "f64x2.neg",
    sqrt => "f64x2.sqrt",
    add => "f64x2.add",
    sub => "f64x2.sub",
    mul => "f64x2.mul",
    div => "f64x2.div",
    min => "f64x2.min",
    max => "f64x2.max",
    pmin => "f64x2.pmin",
    pmax => "f64x2.pmax",
    convert_low_i32x4_s => "f64x2.convert_low_i32x4_s",
    convert_low_i32x4_u => "f64x2.convert_low_i32x4_u",
    promote_low_f32x4 => "f64x2.promote_low_f32x4",
    relaxed_madd => "f64x2.relaxed_madd",
    relaxed_nmadd => "f64x2.relaxed_nmadd",
    relaxed_min => "f64x2.relaxed_min",
    relaxed_max => "f64x2.relaxed_max",
}
