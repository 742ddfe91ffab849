//! The static mnemonic → opcode registry.
//!
//! Every instruction the DSL can construct appears here with its opcode as an
//! integer of up to 20 bits. Single-byte opcodes are stored as-is. Prefixed
//! opcodes (`0xFB` GC, `0xFC` saturating truncation / bulk memory / table,
//! `0xFD` SIMD, `0xFE` threads) are packed as `prefix << 8 | sub` when the
//! sub-opcode fits in 7 bits, and `prefix << 12 | sub` otherwise, so that
//! re-encoding the low component as unsigned LEB128 reproduces the multi-byte
//! `u32` sub-opcode form the binary format requires.
//!
//! The byte encodings are computed once at first use and cached; the
//! instruction emitter copies the cached array and then writes immediates
//! after it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::encoder::EncodeError;
use crate::encoding::write_u32;

/// Packs a `0xFB`-prefixed (GC) opcode.
const fn fb(sub: u32) -> u32 {
    0xFB00 | sub
}

/// Packs a `0xFC`-prefixed (saturating truncation, bulk memory, table) opcode.
const fn fc(sub: u32) -> u32 {
    0xFC00 | sub
}

/// Packs a `0xFD`-prefixed (SIMD) opcode. Sub-opcodes of 0x80 and above move
/// to the 20-bit form so their LEB128 re-encoding spans two bytes.
const fn fd(sub: u32) -> u32 {
    if sub < 0x80 {
        0xFD00 | sub
    } else {
        0xFD000 | sub
    }
}

/// Packs a `0xFE`-prefixed (threads/atomics) opcode.
const fn fe(sub: u32) -> u32 {
    0xFE00 | sub
}

/// Every mnemonic the DSL produces, with its packed opcode.
pub static TABLE: &[(&str, u32)] = &[
    // Control instructions
    ("unreachable", 0x00),
    ("nop", 0x01),
    ("block", 0x02),
    ("loop", 0x03),
    ("if", 0x04),
    ("else", 0x05),
    ("end", 0x0B),
    ("br", 0x0C),
    ("br_if", 0x0D),
    ("br_table", 0x0E),
    ("return", 0x0F),
    ("call", 0x10),
    ("call_indirect", 0x11),
    ("return_call", 0x12),
    ("return_call_indirect", 0x13),
    ("call_ref", 0x14),
    ("return_call_ref", 0x15),
    // Parametric instructions
    ("drop", 0x1A),
    ("select", 0x1B),
    ("select_with_type", 0x1C),
    // Variable instructions
    ("local.get", 0x20),
    ("local.set", 0x21),
    ("local.tee", 0x22),
    ("global.get", 0x23),
    ("global.set", 0x24),
    // Table instructions
    ("table.get", 0x25),
    ("table.set", 0x26),
    ("table.init", fc(0x0C)),
    ("elem.drop", fc(0x0D)),
    ("table.copy", fc(0x0E)),
    ("table.grow", fc(0x0F)),
    ("table.size", fc(0x10)),
    ("table.fill", fc(0x11)),
    // Memory instructions
    ("i32.load", 0x28),
    ("i64.load", 0x29),
    ("f32.load", 0x2A),
    ("f64.load", 0x2B),
    ("i32.load8_s", 0x2C),
    ("i32.load8_u", 0x2D),
    ("i32.load16_s", 0x2E),
    ("i32.load16_u", 0x2F),
    ("i64.load8_s", 0x30),
    ("i64.load8_u", 0x31),
    ("i64.load16_s", 0x32),
    ("i64.load16_u", 0x33),
    ("i64.load32_s", 0x34),
    ("i64.load32_u", 0x35),
    ("i32.store", 0x36),
    ("i64.store", 0x37),
    ("f32.store", 0x38),
    ("f64.store", 0x39),
    ("i32.store8", 0x3A),
    ("i32.store16", 0x3B),
    ("i64.store8", 0x3C),
    ("i64.store16", 0x3D),
    ("i64.store32", 0x3E),
    ("memory.size", 0x3F),
    ("memory.grow", 0x40),
    ("memory.init", fc(0x08)),
    ("data.drop", fc(0x09)),
    ("memory.copy", fc(0x0A)),
    ("memory.fill", fc(0x0B)),
    // Numeric constants
    ("i32.const", 0x41),
    ("i64.const", 0x42),
    ("f32.const", 0x43),
    ("f64.const", 0x44),
    // i32 comparison
    ("i32.eqz", 0x45),
    ("i32.eq", 0x46),
    ("i32.ne", 0x47),
    ("i32.lt_s", 0x48),
    ("i32.lt_u", 0x49),
    ("i32.gt_s", 0x4A),
    ("i32.gt_u", 0x4B),
    ("i32.le_s", 0x4C),
    ("i32.le_u", 0x4D),
    ("i32.ge_s", 0x4E),
    ("i32.ge_u", 0x4F),
    // i64 comparison
    ("i64.eqz", 0x50),
    ("i64.eq", 0x51),
    ("i64.ne", 0x52),
    ("i64.lt_s", 0x53),
    ("i64.lt_u", 0x54),
    ("i64.gt_s", 0x55),
    ("i64.gt_u", 0x56),
    ("i64.le_s", 0x57),
    ("i64.le_u", 0x58),
    ("i64.ge_s", 0x59),
    ("i64.ge_u", 0x5A),
    // f32 comparison
    ("f32.eq", 0x5B),
    ("f32.ne", 0x5C),
    ("f32.lt", 0x5D),
    ("f32.gt", 0x5E),
    ("f32.le", 0x5F),
    ("f32.ge", 0x60),
    // f64 comparison
    ("f64.eq", 0x61),
    ("f64.ne", 0x62),
    ("f64.lt", 0x63),
    ("f64.gt", 0x64),
    ("f64.le", 0x65),
    ("f64.ge", 0x66),
    // i32 arithmetic
    ("i32.clz", 0x67),
    ("i32.ctz", 0x68),
    ("i32.popcnt", 0x69),
    ("i32.add", 0x6A),
    ("i32.sub", 0x6B),
    ("i32.mul", 0x6C),
    ("i32.div_s", 0x6D),
    ("i32.div_u", 0x6E),
    ("i32.rem_s", 0x6F),
    ("i32.rem_u", 0x70),
    ("i32.and", 0x71),
    ("i32.or", 0x72),
    ("i32.xor", 0x73),
    ("i32.shl", 0x74),
    ("i32.shr_s", 0x75),
    ("i32.shr_u", 0x76),
    ("i32.rotl", 0x77),
    ("i32.rotr", 0x78),
    // i64 arithmetic
    ("i64.clz", 0x79),
    ("i64.ctz", 0x7A),
    ("i64.popcnt", 0x7B),
    ("i64.add", 0x7C),
    ("i64.sub", 0x7D),
    ("i64.mul", 0x7E),
    ("i64.div_s", 0x7F),
    ("i64.div_u", 0x80),
    ("i64.rem_s", 0x81),
    ("i64.rem_u", 0x82),
    ("i64.and", 0x83),
    ("i64.or", 0x84),
    ("i64.xor", 0x85),
    ("i64.shl", 0x86),
    ("i64.shr_s", 0x87),
    ("i64.shr_u", 0x88),
    ("i64.rotl", 0x89),
    ("i64.rotr", 0x8A),
    // f32 arithmetic
    ("f32.abs", 0x8B),
    ("f32.neg", 0x8C),
    ("f32.ceil", 0x8D),
    ("f32.floor", 0x8E),
    ("f32.trunc", 0x8F),
    ("f32.nearest", 0x90),
    ("f32.sqrt", 0x91),
    ("f32.add", 0x92),
    ("f32.sub", 0x93),
    ("f32.mul", 0x94),
    ("f32.div", 0x95),
    ("f32.min", 0x96),
    ("f32.max", 0x97),
    ("f32.copysign", 0x98),
    // f64 arithmetic
    ("f64.abs", 0x99),
    ("f64.neg", 0x9A),
    ("f64.ceil", 0x9B),
    ("f64.floor", 0x9C),
    ("f64.trunc", 0x9D),
    ("f64.nearest", 0x9E),
    ("f64.sqrt", 0x9F),
    ("f64.add", 0xA0),
    ("f64.sub", 0xA1),
    ("f64.mul", 0xA2),
    ("f64.div", 0xA3),
    ("f64.min", 0xA4),
    ("f64.max", 0xA5),
    ("f64.copysign", 0xA6),
    // Conversions
    ("i32.wrap_i64", 0xA7),
    ("i32.trunc_f32_s", 0xA8),
    ("i32.trunc_f32_u", 0xA9),
    ("i32.trunc_f64_s", 0xAA),
    ("i32.trunc_f64_u", 0xAB),
    ("i64.extend_i32_s", 0xAC),
    ("i64.extend_i32_u", 0xAD),
    ("i64.trunc_f32_s", 0xAE),
    ("i64.trunc_f32_u", 0xAF),
    ("i64.trunc_f64_s", 0xB0),
    ("i64.trunc_f64_u", 0xB1),
    ("f32.convert_i32_s", 0xB2),
    ("f32.convert_i32_u", 0xB3),
    ("f32.convert_i64_s", 0xB4),
    ("f32.convert_i64_u", 0xB5),
    ("f32.demote_f64", 0xB6),
    ("f64.convert_i32_s", 0xB7),
    ("f64.convert_i32_u", 0xB8),
    ("f64.convert_i64_s", 0xB9),
    ("f64.convert_i64_u", 0xBA),
    ("f64.promote_f32", 0xBB),
    ("i32.reinterpret_f32", 0xBC),
    ("i64.reinterpret_f64", 0xBD),
    ("f32.reinterpret_i32", 0xBE),
    ("f64.reinterpret_i64", 0xBF),
    // Sign extension
    ("i32.extend8_s", 0xC0),
    ("i32.extend16_s", 0xC1),
    ("i64.extend8_s", 0xC2),
    ("i64.extend16_s", 0xC3),
    ("i64.extend32_s", 0xC4),
    // Reference instructions
    ("ref.null", 0xD0),
    ("ref.is_null", 0xD1),
    ("ref.func", 0xD2),
    ("ref.eq", 0xD3),
    ("ref.as_non_null", 0xD4),
    ("br_on_null", 0xD5),
    ("br_on_non_null", 0xD6),
    // Saturating truncation
    ("i32.trunc_sat_f32_s", fc(0x00)),
    ("i32.trunc_sat_f32_u", fc(0x01)),
    ("i32.trunc_sat_f64_s", fc(0x02)),
    ("i32.trunc_sat_f64_u", fc(0x03)),
    ("i64.trunc_sat_f32_s", fc(0x04)),
    ("i64.trunc_sat_f32_u", fc(0x05)),
    ("i64.trunc_sat_f64_s", fc(0x06)),
    ("i64.trunc_sat_f64_u", fc(0x07)),
    // GC: struct and array
    ("struct.new", fb(0x00)),
    ("struct.new_default", fb(0x01)),
    ("struct.get", fb(0x02)),
    ("struct.get_s", fb(0x03)),
    ("struct.get_u", fb(0x04)),
    ("struct.set", fb(0x05)),
    ("array.new", fb(0x06)),
    ("array.new_default", fb(0x07)),
    ("array.new_fixed", fb(0x08)),
    ("array.new_data", fb(0x09)),
    ("array.new_elem", fb(0x0A)),
    ("array.get", fb(0x0B)),
    ("array.get_s", fb(0x0C)),
    ("array.get_u", fb(0x0D)),
    ("array.set", fb(0x0E)),
    ("array.len", fb(0x0F)),
    ("array.fill", fb(0x10)),
    ("array.copy", fb(0x11)),
    ("array.init_data", fb(0x12)),
    ("array.init_elem", fb(0x13)),
    // GC: casts and conversions
    ("ref.test", fb(0x14)),
    ("ref.test_null", fb(0x15)),
    ("ref.cast", fb(0x16)),
    ("ref.cast_null", fb(0x17)),
    ("br_on_cast", fb(0x18)),
    ("br_on_cast_fail", fb(0x19)),
    ("any.convert_extern", fb(0x1A)),
    ("extern.convert_any", fb(0x1B)),
    ("ref.i31", fb(0x1C)),
    ("i31.get_s", fb(0x1D)),
    ("i31.get_u", fb(0x1E)),
    // SIMD: memory
    ("v128.load", fd(0x00)),
    ("v128.load8x8_s", fd(0x01)),
    ("v128.load8x8_u", fd(0x02)),
    ("v128.load16x4_s", fd(0x03)),
    ("v128.load16x4_u", fd(0x04)),
    ("v128.load32x2_s", fd(0x05)),
    ("v128.load32x2_u", fd(0x06)),
    ("v128.load8_splat", fd(0x07)),
    ("v128.load16_splat", fd(0x08)),
    ("v128.load32_splat", fd(0x09)),
    ("v128.load64_splat", fd(0x0A)),
    ("v128.store", fd(0x0B)),
    ("v128.const", fd(0x0C)),
    // SIMD: shuffles, splats, lanes
    ("i8x16.shuffle", fd(0x0D)),
    ("i8x16.swizzle", fd(0x0E)),
    ("i8x16.splat", fd(0x0F)),
    ("i16x8.splat", fd(0x10)),
    ("i32x4.splat", fd(0x11)),
    ("i64x2.splat", fd(0x12)),
    ("f32x4.splat", fd(0x13)),
    ("f64x2.splat", fd(0x14)),
    ("i8x16.extract_lane_s", fd(0x15)),
    ("i8x16.extract_lane_u", fd(0x16)),
    ("i8x16.replace_lane", fd(0x17)),
    ("i16x8.extract_lane_s", fd(0x18)),
    ("i16x8.extract_lane_u", fd(0x19)),
    ("i16x8.replace_lane", fd(0x1A)),
    ("i32x4.extract_lane", fd(0x1B)),
    ("i32x4.replace_lane", fd(0x1C)),
    ("i64x2.extract_lane", fd(0x1D)),
    ("i64x2.replace_lane", fd(0x1E)),
    ("f32x4.extract_lane", fd(0x1F)),
    ("f32x4.replace_lane", fd(0x20)),
    ("f64x2.extract_lane", fd(0x21)),
    ("f64x2.replace_lane", fd(0x22)),
    // SIMD: i8x16 comparison
    ("i8x16.eq", fd(0x23)),
    ("i8x16.ne", fd(0x24)),
    ("i8x16.lt_s", fd(0x25)),
    ("i8x16.lt_u", fd(0x26)),
    ("i8x16.gt_s", fd(0x27)),
    ("i8x16.gt_u", fd(0x28)),
    ("i8x16.le_s", fd(0x29)),
    ("i8x16.le_u", fd(0x2A)),
    ("i8x16.ge_s", fd(0x2B)),
    ("i8x16.ge_u", fd(0x2C)),
    // SIMD: i16x8 comparison
    ("i16x8.eq", fd(0x2D)),
    ("i16x8.ne", fd(0x2E)),
    ("i16x8.lt_s", fd(0x2F)),
    ("i16x8.lt_u", fd(0x30)),
    ("i16x8.gt_s", fd(0x31)),
    ("i16x8.gt_u", fd(0x32)),
    ("i16x8.le_s", fd(0x33)),
    ("i16x8.le_u", fd(0x34)),
    ("i16x8.ge_s", fd(0x35)),
    ("i16x8.ge_u", fd(0x36)),
    // SIMD: i32x4 comparison
    ("i32x4.eq", fd(0x37)),
    ("i32x4.ne", fd(0x38)),
    ("i32x4.lt_s", fd(0x39)),
    ("i32x4.lt_u", fd(0x3A)),
    ("i32x4.gt_s", fd(0x3B)),
    ("i32x4.gt_u", fd(0x3C)),
    ("i32x4.le_s", fd(0x3D)),
    ("i32x4.le_u", fd(0x3E)),
    ("i32x4.ge_s", fd(0x3F)),
    ("i32x4.ge_u", fd(0x40)),
    // SIMD: f32x4 comparison
    ("f32x4.eq", fd(0x41)),
    ("f32x4.ne", fd(0x42)),
    ("f32x4.lt", fd(0x43)),
    ("f32x4.gt", fd(0x44)),
    ("f32x4.le", fd(0x45)),
    ("f32x4.ge", fd(0x46)),
    // SIMD: f64x2 comparison
    ("f64x2.eq", fd(0x47)),
    ("f64x2.ne", fd(0x48)),
    ("f64x2.lt", fd(0x49)),
    ("f64x2.gt", fd(0x4A)),
    ("f64x2.le", fd(0x4B)),
    ("f64x2.ge", fd(0x4C)),
    // SIMD: v128 bitwise
    ("v128.not", fd(0x4D)),
    ("v128.and", fd(0x4E)),
    ("v128.andnot", fd(0x4F)),
    ("v128.or", fd(0x50)),
    ("v128.xor", fd(0x51)),
    ("v128.bitselect", fd(0x52)),
    ("v128.any_true", fd(0x53)),
    // SIMD: lane memory
    ("v128.load8_lane", fd(0x54)),
    ("v128.load16_lane", fd(0x55)),
    ("v128.load32_lane", fd(0x56)),
    ("v128.load64_lane", fd(0x57)),
    ("v128.store8_lane", fd(0x58)),
    ("v128.store16_lane", fd(0x59)),
    ("v128.store32_lane", fd(0x5A)),
    ("v128.store64_lane", fd(0x5B)),
    ("v128.load32_zero", fd(0x5C)),
    ("v128.load64_zero", fd(0x5D)),
    // SIMD: float conversion
    ("f32x4.demote_f64x2_zero", fd(0x5E)),
    ("f64x2.promote_low_f32x4", fd(0x5F)),
    // SIMD: i8x16 arithmetic
    ("i8x16.abs", fd(0x60)),
    ("i8x16.neg", fd(0x61)),
    ("i8x16.popcnt", fd(0x62)),
    ("i8x16.all_true", fd(0x63)),
    ("i8x16.bitmask", fd(0x64)),
    ("i8x16.narrow_i16x8_s", fd(0x65)),
    ("i8x16.narrow_i16x8_u", fd(0x66)),
    ("f32x4.ceil", fd(0x67)),
    ("f32x4.floor", fd(0x68)),
    ("f32x4.trunc", fd(0x69)),
    ("f32x4.nearest", fd(0x6A)),
    ("i8x16.shl", fd(0x6B)),
    ("i8x16.shr_s", fd(0x6C)),
    ("i8x16.shr_u", fd(0x6D)),
    ("i8x16.add", fd(0x6E)),
    ("i8x16.add_sat_s", fd(0x6F)),
    ("i8x16.add_sat_u", fd(0x70)),
    ("i8x16.sub", fd(0x71)),
    ("i8x16.sub_sat_s", fd(0x72)),
    ("i8x16.sub_sat_u", fd(0x73)),
    ("f64x2.ceil", fd(0x74)),
    ("f64x2.floor", fd(0x75)),
    ("i8x16.min_s", fd(0x76)),
    ("i8x16.min_u", fd(0x77)),
    ("i8x16.max_s", fd(0x78)),
    ("i8x16.max_u", fd(0x79)),
    ("f64x2.trunc", fd(0x7A)),
    ("i8x16.avgr_u", fd(0x7B)),
    ("i16x8.extadd_pairwise_i8x16_s", fd(0x7C)),
    ("i16x8.extadd_pairwise_i8x16_u", fd(0x7D)),
    ("i32x4.extadd_pairwise_i16x8_s", fd(0x7E)),
    ("i32x4.extadd_pairwise_i16x8_u", fd(0x7F)),
    // SIMD: i16x8 arithmetic
    ("i16x8.abs", fd(0x80)),
    ("i16x8.neg", fd(0x81)),
    ("i16x8.q15mulr_sat_s", fd(0x82)),
    ("i16x8.all_true", fd(0x83)),
    ("i16x8.bitmask", fd(0x84)),
    ("i16x8.narrow_i32x4_s", fd(0x85)),
    ("i16x8.narrow_i32x4_u", fd(0x86)),
    ("i16x8.extend_low_i8x16_s", fd(0x87)),
    ("i16x8.extend_high_i8x16_s", fd(0x88)),
    ("i16x8.extend_low_i8x16_u", fd(0x89)),
    ("i16x8.extend_high_i8x16_u", fd(0x8A)),
    ("i16x8.shl", fd(0x8B)),
    ("i16x8.shr_s", fd(0x8C)),
    ("i16x8.shr_u", fd(0x8D)),
    ("i16x8.add", fd(0x8E)),
    ("i16x8.add_sat_s", fd(0x8F)),
    ("i16x8.add_sat_u", fd(0x90)),
    ("i16x8.sub", fd(0x91)),
    ("i16x8.sub_sat_s", fd(0x92)),
    ("i16x8.sub_sat_u", fd(0x93)),
    ("f64x2.nearest", fd(0x94)),
    ("i16x8.mul", fd(0x95)),
    ("i16x8.min_s", fd(0x96)),
    ("i16x8.min_u", fd(0x97)),
    ("i16x8.max_s", fd(0x98)),
    ("i16x8.max_u", fd(0x99)),
    ("i16x8.avgr_u", fd(0x9B)),
    ("i16x8.extmul_low_i8x16_s", fd(0x9C)),
    ("i16x8.extmul_high_i8x16_s", fd(0x9D)),
    ("i16x8.extmul_low_i8x16_u", fd(0x9E)),
    ("i16x8.extmul_high_i8x16_u", fd(0x9F)),
    // SIMD: i32x4 arithmetic
    ("i32x4.abs", fd(0xA0)),
    ("i32x4.neg", fd(0xA1)),
    ("i32x4.all_true", fd(0xA3)),
    ("i32x4.bitmask", fd(0xA4)),
    ("i32x4.extend_low_i16x8_s", fd(0xA7)),
    ("i32x4.extend_high_i16x8_s", fd(0xA8)),
    ("i32x4.extend_low_i16x8_u", fd(0xA9)),
    ("i32x4.extend_high_i16x8_u", fd(0xAA)),
    ("i32x4.shl", fd(0xAB)),
    ("i32x4.shr_s", fd(0xAC)),
    ("i32x4.shr_u", fd(0xAD)),
    ("i32x4.add", fd(0xAE)),
    ("i32x4.sub", fd(0xB1)),
    ("i32x4.mul", fd(0xB5)),
    ("i32x4.min_s", fd(0xB6)),
    ("i32x4.min_u", fd(0xB7)),
    ("i32x4.max_s", fd(0xB8)),
    ("i32x4.max_u", fd(0xB9)),
    ("i32x4.dot_i16x8_s", fd(0xBA)),
    ("i32x4.extmul_low_i16x8_s", fd(0xBC)),
    ("i32x4.extmul_high_i16x8_s", fd(0xBD)),
    ("i32x4.extmul_low_i16x8_u", fd(0xBE)),
    ("i32x4.extmul_high_i16x8_u", fd(0xBF)),
    // SIMD: i64x2 arithmetic
    ("i64x2.abs", fd(0xC0)),
    ("i64x2.neg", fd(0xC1)),
    ("i64x2.all_true", fd(0xC3)),
    ("i64x2.bitmask", fd(0xC4)),
    ("i64x2.extend_low_i32x4_s", fd(0xC7)),
    ("i64x2.extend_high_i32x4_s", fd(0xC8)),
    ("i64x2.extend_low_i32x4_u", fd(0xC9)),
    ("i64x2.extend_high_i32x4_u", fd(0xCA)),
    ("i64x2.shl", fd(0xCB)),
    ("i64x2.shr_s", fd(0xCC)),
    ("i64x2.shr_u", fd(0xCD)),
    ("i64x2.add", fd(0xCE)),
    ("i64x2.sub", fd(0xD1)),
    ("i64x2.mul", fd(0xD5)),
    ("i64x2.eq", fd(0xD6)),
    ("i64x2.ne", fd(0xD7)),
    ("i64x2.lt_s", fd(0xD8)),
    ("i64x2.gt_s", fd(0xD9)),
    ("i64x2.le_s", fd(0xDA)),
    ("i64x2.ge_s", fd(0xDB)),
    ("i64x2.extmul_low_i32x4_s", fd(0xDC)),
    ("i64x2.extmul_high_i32x4_s", fd(0xDD)),
    ("i64x2.extmul_low_i32x4_u", fd(0xDE)),
    ("i64x2.extmul_high_i32x4_u", fd(0xDF)),
    // SIMD: f32x4 arithmetic
    ("f32x4.abs", fd(0xE0)),
    ("f32x4.neg", fd(0xE1)),
    ("f32x4.sqrt", fd(0xE3)),
    ("f32x4.add", fd(0xE4)),
    ("f32x4.sub", fd(0xE5)),
    ("f32x4.mul", fd(0xE6)),
    ("f32x4.div", fd(0xE7)),
    ("f32x4.min", fd(0xE8)),
    ("f32x4.max", fd(0xE9)),
    ("f32x4.pmin", fd(0xEA)),
    ("f32x4.pmax", fd(0xEB)),
    // SIMD: f64x2 arithmetic
    ("f64x2.abs", fd(0xEC)),
    ("f64x2.neg", fd(0xED)),
    ("f64x2.sqrt", fd(0xEF)),
    ("f64x2.add", fd(0xF0)),
    ("f64x2.sub", fd(0xF1)),
    ("f64x2.mul", fd(0xF2)),
    ("f64x2.div", fd(0xF3)),
    ("f64x2.min", fd(0xF4)),
    ("f64x2.max", fd(0xF5)),
    ("f64x2.pmin", fd(0xF6)),
    ("f64x2.pmax", fd(0xF7)),
    // SIMD: conversions
    ("i32x4.trunc_sat_f32x4_s", fd(0xF8)),
    ("i32x4.trunc_sat_f32x4_u", fd(0xF9)),
    ("f32x4.convert_i32x4_s", fd(0xFA)),
    ("f32x4.convert_i32x4_u", fd(0xFB)),
    ("i32x4.trunc_sat_f64x2_s_zero", fd(0xFC)),
    ("i32x4.trunc_sat_f64x2_u_zero", fd(0xFD)),
    ("f64x2.convert_low_i32x4_s", fd(0xFE)),
    ("f64x2.convert_low_i32x4_u", fd(0xFF)),
    // Relaxed SIMD
    ("i8x16.relaxed_swizzle", fd(0x100)),
    ("i32x4.relaxed_trunc_f32x4_s", fd(0x101)),
    ("i32x4.relaxed_trunc_f32x4_u", fd(0x102)),
    ("i32x4.relaxed_trunc_f64x2_s_zero", fd(0x103)),
    ("i32x4.relaxed_trunc_f64x2_u_zero", fd(0x104)),
    ("f32x4.relaxed_madd", fd(0x105)),
    ("f32x4.relaxed_nmadd", fd(0x106)),
    ("f64x2.relaxed_madd", fd(0x107)),
    ("f64x2.relaxed_nmadd", fd(0x108)),
    ("i8x16.relaxed_laneselect", fd(0x109)),
    ("i16x8.relaxed_laneselect", fd(0x10A)),
    ("i32x4.relaxed_laneselect", fd(0x10B)),
    ("i64x2.relaxed_laneselect", fd(0x10C)),
    ("f32x4.relaxed_min", fd(0x10D)),
    ("f32x4.relaxed_max", fd(0x10E)),
    ("f64x2.relaxed_min", fd(0x10F)),
    ("f64x2.relaxed_max", fd(0x110)),
    ("i16x8.relaxed_q15mulr_s", fd(0x111)),
    ("i16x8.relaxed_dot_i8x16_i7x16_s", fd(0x112)),
    ("i32x4.relaxed_dot_i8x16_i7x16_add_s", fd(0x113)),
    // Threads: notify/wait and fence
    ("memory.atomic.notify", fe(0x00)),
    ("memory.atomic.wait32", fe(0x01)),
    ("memory.atomic.wait64", fe(0x02)),
    ("atomic.fence", fe(0x03)),
    // Threads: atomic loads and stores
    ("i32.atomic.load", fe(0x10)),
    ("i64.atomic.load", fe(0x11)),
    ("i32.atomic.load8_u", fe(0x12)),
    ("i32.atomic.load16_u", fe(0x13)),
    ("i64.atomic.load8_u", fe(0x14)),
    ("i64.atomic.load16_u", fe(0x15)),
    ("i64.atomic.load32_u", fe(0x16)),
    ("i32.atomic.store", fe(0x17)),
    ("i64.atomic.store", fe(0x18)),
    ("i32.atomic.store8", fe(0x19)),
    ("i32.atomic.store16", fe(0x1A)),
    ("i64.atomic.store8", fe(0x1B)),
    ("i64.atomic.store16", fe(0x1C)),
    ("i64.atomic.store32", fe(0x1D)),
    // Threads: read-modify-write
    ("i32.atomic.rmw.add", fe(0x1E)),
    ("i64.atomic.rmw.add", fe(0x1F)),
    ("i32.atomic.rmw8.add_u", fe(0x20)),
    ("i32.atomic.rmw16.add_u", fe(0x21)),
    ("i64.atomic.rmw8.add_u", fe(0x22)),
    ("i64.atomic.rmw16.add_u", fe(0x23)),
    ("i64.atomic.rmw32.add_u", fe(0x24)),
    ("i32.atomic.rmw.sub", fe(0x25)),
    ("i64.atomic.rmw.sub", fe(0x26)),
    ("i32.atomic.rmw8.sub_u", fe(0x27)),
    ("i32.atomic.rmw16.sub_u", fe(0x28)),
    ("i64.atomic.rmw8.sub_u", fe(0x29)),
    ("i64.atomic.rmw16.sub_u", fe(0x2A)),
    ("i64.atomic.rmw32.sub_u", fe(0x2B)),
    ("i32.atomic.rmw.and", fe(0x2C)),
    ("i64.atomic.rmw.and", fe(0x2D)),
    ("i32.atomic.rmw8.and_u", fe(0x2E)),
    ("i32.atomic.rmw16.and_u", fe(0x2F)),
    ("i64.atomic.rmw8.and_u", fe(0x30)),
    ("i64.atomic.rmw16.and_u", fe(0x31)),
    ("i64.atomic.rmw32.and_u", fe(0x32)),
    ("i32.atomic.rmw.or", fe(0x33)),
    ("i64.atomic.rmw.or", fe(0x34)),
    ("i32.atomic.rmw8.or_u", fe(0x35)),
    ("i32.atomic.rmw16.or_u", fe(0x36)),
    ("i64.atomic.rmw8.or_u", fe(0x37)),
    ("i64.atomic.rmw16.or_u", fe(0x38)),
    ("i64.atomic.rmw32.or_u", fe(0x39)),
    ("i32.atomic.rmw.xor", fe(0x3A)),
    ("i64.atomic.rmw.xor", fe(0x3B)),
    ("i32.atomic.rmw8.xor_u", fe(0x3C)),
    ("i32.atomic.rmw16.xor_u", fe(0x3D)),
    ("i64.atomic.rmw8.xor_u", fe(0x3E)),
    ("i64.atomic.rmw16.xor_u", fe(0x3F)),
    ("i64.atomic.rmw32.xor_u", fe(0x40)),
    ("i32.atomic.rmw.xchg", fe(0x41)),
    ("i64.atomic.rmw.xchg", fe(0x42)),
    ("i32.atomic.rmw8.xchg_u", fe(0x43)),
    ("i32.atomic.rmw16.xchg_u", fe(0x44)),
    ("i64.atomic.rmw8.xchg_u", fe(0x45)),
    ("i64.atomic.rmw16.xchg_u", fe(0x46)),
    ("i64.atomic.rmw32.xchg_u", fe(0x47)),
    ("i32.atomic.rmw.cmpxchg", fe(0x48)),
    ("i64.atomic.rmw.cmpxchg", fe(0x49)),
    ("i32.atomic.rmw8.cmpxchg_u", fe(0x4A)),
    ("i32.atomic.rmw16.cmpxchg_u", fe(0x4B)),
    ("i64.atomic.rmw8.cmpxchg_u", fe(0x4C)),
    ("i64.atomic.rmw16.cmpxchg_u", fe(0x4D)),
    ("i64.atomic.rmw32.cmpxchg_u", fe(0x4E)),
];

/// Mnemonic → packed opcode lookup.
pub static OPCODES: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| TABLE.iter().copied().collect());

/// Mnemonic → pre-encoded opcode bytes, computed once.
static OPCODE_BYTES: Lazy<HashMap<&'static str, Vec<u8>>> = Lazy::new(|| {
    TABLE
        .iter()
        .map(|&(name, code)| {
            let bytes = encode_opcode(code)
                .unwrap_or_else(|_| panic!("opcode table entry {name} exceeds 20 bits"));
            (name, bytes)
        })
        .collect()
});

/// Looks up the packed opcode for a mnemonic.
pub fn opcode(mnemonic: &str) -> Option<u32> {
    OPCODES.get(mnemonic).copied()
}

/// Returns the cached wire bytes for a mnemonic.
pub fn opcode_bytes(mnemonic: &str) -> Result<&'static [u8], EncodeError> {
    OPCODE_BYTES
        .get(mnemonic)
        .map(|v| v.as_slice())
        .ok_or_else(|| EncodeError::MalformedInput(format!("unknown opcode mnemonic: {mnemonic}")))
}

/// Encodes a packed opcode integer to its wire bytes.
///
/// Single-byte opcodes are emitted as-is; for prefixed opcodes the leading
/// byte is the prefix and the remaining component is unsigned LEB128, which
/// yields the `u32` sub-opcode encoding the binary format specifies.
pub fn encode_opcode(n: u32) -> Result<Vec<u8>, EncodeError> {
    let mut bytes = Vec::with_capacity(3);
    if n <= 0xFF {
        bytes.push(n as u8);
    } else if n <= 0xFFFF {
        bytes.push((n >> 8) as u8);
        write_u32(&mut bytes, n & 0xFF);
    } else if n <= 0xFFFFF {
        bytes.push((n >> 12) as u8);
        write_u32(&mut bytes, n & 0xFFF);
    } else {
        return Err(EncodeError::InvalidValue {
            what: "opcode",
            value: n as i128,
        });
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_duplicate_mnemonics() {
        assert_eq!(TABLE.len(), OPCODES.len(), "duplicate mnemonic in table");
    }

    #[test]
    fn cached_bytes_match_fresh_encoding() {
        for &(name, code) in TABLE {
            let fresh = encode_opcode(code).unwrap();
            assert_eq!(
                opcode_bytes(name).unwrap(),
                fresh.as_slice(),
                "cache mismatch for {name}"
            );
        }
    }

    #[test]
    fn single_byte_opcodes() {
        assert_eq!(opcode_bytes("unreachable").unwrap(), [0x00]);
        assert_eq!(opcode_bytes("i32.add").unwrap(), [0x6A]);
        assert_eq!(opcode_bytes("end").unwrap(), [0x0B]);
        assert_eq!(opcode_bytes("ref.null").unwrap(), [0xD0]);
    }

    #[test]
    fn prefixed_opcodes() {
        assert_eq!(opcode_bytes("memory.copy").unwrap(), [0xFC, 0x0A]);
        assert_eq!(opcode_bytes("table.fill").unwrap(), [0xFC, 0x11]);
        assert_eq!(opcode_bytes("struct.new").unwrap(), [0xFB, 0x00]);
        assert_eq!(opcode_bytes("br_on_cast").unwrap(), [0xFB, 0x18]);
        assert_eq!(opcode_bytes("memory.atomic.notify").unwrap(), [0xFE, 0x00]);
        assert_eq!(
            opcode_bytes("i64.atomic.rmw32.cmpxchg_u").unwrap(),
            [0xFE, 0x4E]
        );
    }

    /// SIMD sub-opcodes of 0x80 and above must come out as the two-byte
    /// unsigned LEB128 form of the sub-opcode.
    #[test]
    fn simd_wide_subopcodes() {
        assert_eq!(opcode_bytes("v128.load").unwrap(), [0xFD, 0x00]);
        assert_eq!(opcode_bytes("i8x16.shuffle").unwrap(), [0xFD, 0x0D]);
        assert_eq!(opcode_bytes("i16x8.abs").unwrap(), [0xFD, 0x80, 0x01]);
        assert_eq!(opcode_bytes("f32x4.add").unwrap(), [0xFD, 0xE4, 0x01]);
        assert_eq!(
            opcode_bytes("f64x2.convert_low_i32x4_u").unwrap(),
            [0xFD, 0xFF, 0x01]
        );
        assert_eq!(
            opcode_bytes("i8x16.relaxed_swizzle").unwrap(),
            [0xFD, 0x80, 0x02]
        );
        assert_eq!(
            opcode_bytes("i32x4.relaxed_dot_i8x16_i7x16_add_s").unwrap(),
            [0xFD, 0x93, 0x02]
        );
    }

    #[test]
    fn oversized_opcode_rejected() {
        assert!(matches!(
            encode_opcode(0x100000),
            Err(EncodeError::InvalidValue { .. })
        ));
    }

    #[test]
    fn unknown_mnemonic_rejected() {
        assert!(matches!(
            opcode_bytes("i32.frobnicate"),
            Err(EncodeError::MalformedInput(_))
        ));
        assert_eq!(opcode("i32.frobnicate"), None);
    }
}
