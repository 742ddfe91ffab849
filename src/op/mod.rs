//! The instruction DSL: one constructor per mnemonic, grouped by family.
//!
//! Constructors are the only public producers of [`Instruction`] values.
//! Cross-references are symbolic: `call("add")`, `local::get("num1")`,
//! `br("outer")`. Nothing is resolved or validated here; resolution happens
//! when the module is encoded.
//!
//! Control-family constructors live at the top of this module; the typed
//! families are submodules named after their mnemonic prefix (`i32::add()`
//! builds `i32.add`). Prefixes that collide with Rust keywords take a
//! trailing underscore (`struct_`, `ref_`, `extern_`), as do the control
//! keywords (`loop_`, `if_`, `else_`, `return_`, `const_`).
//!
//! Blocks carry their body as a nested list and are closed by an explicit
//! [`end`] inside that body; nothing inserts `end` for you. [`seq`] embeds a
//! nested instruction list anywhere a single instruction is expected.

use crate::instruction::{CastType, Immediates, Instruction};
use crate::types::{BlockType, ValueType};

pub mod any;
pub mod array;
pub mod data;
pub mod elem;
pub mod extern_;
pub mod f32;
pub mod f32x4;
pub mod f64;
pub mod f64x2;
pub mod global;
pub mod i16x8;
pub mod i31;
pub mod i32;
pub mod i32x4;
pub mod i64;
pub mod i64x2;
pub mod i8x16;
pub mod local;
pub mod memory;
pub mod ref_;
pub mod struct_;
pub mod table;
pub mod v128;

/// Defines constructors for instructions with no immediates.
macro_rules! leaf_ops {
    ($($name:ident => $mnemonic:literal),* $(,)?) => {
        $(
            pub fn $name() -> $crate::instruction::Instruction {
                $crate::instruction::Instruction::leaf($mnemonic)
            }
        )*
    };
}
pub(crate) use leaf_ops;

/// Defines constructors for memory access instructions taking an alignment
/// exponent and a static offset.
macro_rules! memarg_ops {
    ($($name:ident => $mnemonic:literal),* $(,)?) => {
        $(
            pub fn $name(align: u32, offset: u64) -> $crate::instruction::Instruction {
                $crate::instruction::Instruction::with(
                    $mnemonic,
                    $crate::instruction::Immediates::MemArg { align, offset },
                )
            }
        )*
    };
}
pub(crate) use memarg_ops;

/// Defines constructors for SIMD lane accessors; the lane count bounds the
/// index at emission time.
macro_rules! lane_ops {
    ($lanes:literal => $($name:ident => $mnemonic:literal),* $(,)?) => {
        $(
            pub fn $name(lane: u8) -> $crate::instruction::Instruction {
                $crate::instruction::Instruction::with(
                    $mnemonic,
                    $crate::instruction::Immediates::Lane { lane, lanes: $lanes },
                )
            }
        )*
    };
}
pub(crate) use lane_ops;

/// Defines constructors for SIMD lane-indexed loads and stores.
macro_rules! lane_memarg_ops {
    ($lanes:literal => $($name:ident => $mnemonic:literal),* $(,)?) => {
        $(
            pub fn $name(align: u32, offset: u64, lane: u8) -> $crate::instruction::Instruction {
                $crate::instruction::Instruction::with(
                    $mnemonic,
                    $crate::instruction::Immediates::LaneMemArg {
                        align,
                        offset,
                        lane,
                        lanes: $lanes,
                    },
                )
            }
        )*
    };
}
pub(crate) use lane_memarg_ops;

/// Defines constructors for GC instructions whose sole immediate is a type
/// referenced by name.
macro_rules! type_ops {
    ($($name:ident => $mnemonic:literal),* $(,)?) => {
        $(
            pub fn $name(type_name: impl Into<String>) -> $crate::instruction::Instruction {
                $crate::instruction::Instruction::with(
                    $mnemonic,
                    $crate::instruction::Immediates::TypeName(type_name.into()),
                )
            }
        )*
    };
}
pub(crate) use type_ops;

// ---------------------------------------------------------------------------
// Control instructions
// ---------------------------------------------------------------------------

leaf_ops! {
    unreachable => "unreachable",
    nop => "nop",
    else_ => "else",
    end => "end",
    return_ => "return",
    drop => "drop",
    select => "select",
}

/// A `block` with a label, result shape, and nested body. The body must end
/// with [`end`].
pub fn block(
    label: impl Into<String>,
    block_type: BlockType,
    body: Vec<Instruction>,
) -> Instruction {
    Instruction::with(
        "block",
        Immediates::Block {
            label: label.into(),
            block_type,
            body,
        },
    )
}

/// A `loop` block; branching to its label re-enters the loop.
pub fn loop_(
    label: impl Into<String>,
    block_type: BlockType,
    body: Vec<Instruction>,
) -> Instruction {
    Instruction::with(
        "loop",
        Immediates::Block {
            label: label.into(),
            block_type,
            body,
        },
    )
}

/// An `if` block. Place an [`else_`] inside the body to start the
/// alternative branch; close with [`end`].
pub fn if_(
    label: impl Into<String>,
    block_type: BlockType,
    body: Vec<Instruction>,
) -> Instruction {
    Instruction::with(
        "if",
        Immediates::Block {
            label: label.into(),
            block_type,
            body,
        },
    )
}

/// Embeds a nested instruction list; flattened depth-first at emission.
/// Purely structural: it contributes no opcode of its own.
pub fn seq(instructions: Vec<Instruction>) -> Instruction {
    Instruction::with("seq", Immediates::Seq(instructions))
}

pub fn br(label: impl Into<String>) -> Instruction {
    Instruction::with("br", Immediates::Label(label.into()))
}

pub fn br_if(label: impl Into<String>) -> Instruction {
    Instruction::with("br_if", Immediates::Label(label.into()))
}

/// A branch table: `targets` in order, then the default label.
pub fn br_table(targets: &[&str], default: impl Into<String>) -> Instruction {
    Instruction::with(
        "br_table",
        Immediates::BrTable {
            targets: targets.iter().map(|s| s.to_string()).collect(),
            default: default.into(),
        },
    )
}

pub fn br_on_null(label: impl Into<String>) -> Instruction {
    Instruction::with("br_on_null", Immediates::Label(label.into()))
}

pub fn br_on_non_null(label: impl Into<String>) -> Instruction {
    Instruction::with("br_on_non_null", Immediates::Label(label.into()))
}

/// Branches to `label` if the reference casts to `dst`; the flags byte is
/// assembled from the two nullability bits.
pub fn br_on_cast(label: impl Into<String>, src: CastType, dst: CastType) -> Instruction {
    Instruction::with(
        "br_on_cast",
        Immediates::BrOnCast {
            label: label.into(),
            src,
            dst,
        },
    )
}

pub fn br_on_cast_fail(label: impl Into<String>, src: CastType, dst: CastType) -> Instruction {
    Instruction::with(
        "br_on_cast_fail",
        Immediates::BrOnCast {
            label: label.into(),
            src,
            dst,
        },
    )
}

pub fn call(function: impl Into<String>) -> Instruction {
    Instruction::with("call", Immediates::Func(function.into()))
}

pub fn return_call(function: impl Into<String>) -> Instruction {
    Instruction::with("return_call", Immediates::Func(function.into()))
}

pub fn call_indirect(type_name: impl Into<String>, table: impl Into<String>) -> Instruction {
    Instruction::with(
        "call_indirect",
        Immediates::CallIndirect {
            type_name: type_name.into(),
            table: table.into(),
        },
    )
}

pub fn return_call_indirect(type_name: impl Into<String>, table: impl Into<String>) -> Instruction {
    Instruction::with(
        "return_call_indirect",
        Immediates::CallIndirect {
            type_name: type_name.into(),
            table: table.into(),
        },
    )
}

pub fn call_ref(type_name: impl Into<String>) -> Instruction {
    Instruction::with("call_ref", Immediates::TypeName(type_name.into()))
}

pub fn return_call_ref(type_name: impl Into<String>) -> Instruction {
    Instruction::with("return_call_ref", Immediates::TypeName(type_name.into()))
}

/// `select` with explicit result types.
pub fn select_with_type(types: Vec<ValueType>) -> Instruction {
    Instruction::with("select_with_type", Immediates::ValueTypes(types))
}

/// `atomic.fence`; the trailing byte is the reserved ordering field.
pub fn atomic_fence() -> Instruction {
    Instruction::with("atomic.fence", Immediates::RawByte(0x00))
}
