//! The instruction representation consumed by the encoder.
//!
//! An [`Instruction`] pairs a mnemonic with a tagged [`Immediates`] payload.
//! Symbolic references (function, local, table, label names, …) stay names at
//! construction time and resolve against an [`EmitScope`] during emission, so
//! a dangling reference surfaces where the module is encoded, not where the
//! instruction was built.
//!
//! Block-structured instructions carry their label and nested body inside
//! their variant; `Seq` holds an arbitrarily nested instruction list that is
//! flattened depth-first at emission.

use std::fmt;

use crate::context::EmitScope;
use crate::encoder::EncodeError;
use crate::encoding::{write_f32, write_f64, write_s32, write_s64, write_u32, write_u64};
use crate::opcodes;
use crate::types::{BlockType, HeapType, ValueType};

/// A cast operand for `br_on_cast` / `br_on_cast_fail`: an abstract heap
/// type plus nullability, which supplies one bit of the flags byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastType {
    pub nullable: bool,
    pub heap: HeapType,
}

impl CastType {
    pub fn nullable(heap: HeapType) -> CastType {
        CastType { nullable: true, heap }
    }

    pub fn non_nullable(heap: HeapType) -> CastType {
        CastType { nullable: false, heap }
    }
}

/// Operand payload of an instruction, one variant per immediate layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Immediates {
    None,
    /// A nested instruction list; emitted by flattening, no opcode of its own.
    Seq(Vec<Instruction>),
    /// `block` / `loop` / `if`: block type, then the nested body. The body
    /// must contain its own `end` (and `else`, for an `if` with an
    /// alternative).
    Block {
        label: String,
        block_type: BlockType,
        body: Vec<Instruction>,
    },
    Local(String),
    Global(String),
    /// `call`, `return_call`, `ref.func`.
    Func(String),
    /// `call_indirect`, `return_call_indirect`: type index then table index.
    CallIndirect { type_name: String, table: String },
    /// `call_ref`, `return_call_ref`, and the GC type-indexed operations.
    TypeName(String),
    /// `br`, `br_if`, `br_on_null`, `br_on_non_null`: a block label.
    Label(String),
    BrTable { targets: Vec<String>, default: String },
    BrOnCast {
        label: String,
        src: CastType,
        dst: CastType,
    },
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    V128([u8; 16]),
    /// Memory loads and stores: alignment exponent, then offset.
    MemArg { align: u32, offset: u64 },
    /// SIMD lane loads/stores: memarg plus a lane index.
    LaneMemArg {
        align: u32,
        offset: u64,
        lane: u8,
        lanes: u8,
    },
    /// SIMD extract/replace lane: a single lane index.
    Lane { lane: u8, lanes: u8 },
    /// `i8x16.shuffle`: 16 lane indices into the 32 concatenated input lanes.
    ShuffleLanes([u8; 16]),
    /// Typed `select`: explicit result types.
    ValueTypes(Vec<ValueType>),
    /// `memory.size` / `memory.grow` / `memory.fill`: a memory name.
    Memory(String),
    MemoryInit { data: String, memory: String },
    MemoryCopy { dst: String, src: String },
    Table(String),
    TableInit { elem: String, table: String },
    TableCopy { dst: String, src: String },
    /// `elem.drop`.
    Elem(String),
    /// `data.drop`.
    Data(String),
    /// `ref.null`, `ref.test`, `ref.cast`: one abstract heap-type id byte.
    Heap(HeapType),
    StructField { type_name: String, field: u32 },
    ArrayNewFixed { type_name: String, length: u32 },
    ArrayWithData { type_name: String, data: String },
    ArrayWithElem { type_name: String, elem: String },
    ArrayCopy { dst_type: String, src_type: String },
    /// `atomic.fence` and the multi-byte zero flags other ops reserve.
    RawByte(u8),
}

/// A single instruction: its mnemonic plus operand payload.
///
/// Constructed only through the [`crate::op`] DSL; consumed once during
/// encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    mnemonic: &'static str,
    immediates: Immediates,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic)
    }
}

impl Instruction {
    pub(crate) fn leaf(mnemonic: &'static str) -> Instruction {
        Instruction {
            mnemonic,
            immediates: Immediates::None,
        }
    }

    pub(crate) fn with(mnemonic: &'static str, immediates: Immediates) -> Instruction {
        Instruction { mnemonic, immediates }
    }

    /// The instruction's mnemonic, e.g. `i32.add`.
    pub fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    pub fn immediates(&self) -> &Immediates {
        &self.immediates
    }

    /// Appends the wire encoding of this instruction to `buf`, resolving
    /// symbolic references against `scope`. Blocks push their label onto a
    /// copy of the scope's block stack and recurse into their body.
    pub fn emit(&self, buf: &mut Vec<u8>, scope: &EmitScope<'_>) -> Result<(), EncodeError> {
        // A sequence is pure structure: no opcode, just its children in order.
        if let Immediates::Seq(items) = &self.immediates {
            for inst in items {
                inst.emit(buf, scope)?;
            }
            return Ok(());
        }

        buf.extend_from_slice(opcodes::opcode_bytes(self.mnemonic)?);

        match &self.immediates {
            Immediates::None => {}
            Immediates::Seq(_) => unreachable!("handled above"),
            Immediates::Block {
                label,
                block_type,
                body,
            } => {
                block_type.write(buf);
                let inner = scope.with_block(label);
                for inst in body {
                    inst.emit(buf, &inner)?;
                }
            }
            Immediates::Local(name) => write_u32(buf, scope.local(name)?),
            Immediates::Global(name) => write_u32(buf, scope.spaces().global(name)?),
            Immediates::Func(name) => write_u32(buf, scope.spaces().function(name)?),
            Immediates::CallIndirect { type_name, table } => {
                write_u32(buf, scope.spaces().type_index(type_name)?);
                write_u32(buf, scope.spaces().table(table)?);
            }
            Immediates::TypeName(name) => write_u32(buf, scope.spaces().type_index(name)?),
            Immediates::Label(label) => write_u32(buf, scope.branch_depth(label)?),
            Immediates::BrTable { targets, default } => {
                write_u32(buf, targets.len() as u32);
                for target in targets {
                    write_u32(buf, scope.branch_depth(target)?);
                }
                write_u32(buf, scope.branch_depth(default)?);
            }
            Immediates::BrOnCast { label, src, dst } => {
                let flags = src.nullable as u8 | (dst.nullable as u8) << 1;
                buf.push(flags);
                write_u32(buf, scope.branch_depth(label)?);
                buf.push(src.heap.id_byte());
                buf.push(dst.heap.id_byte());
            }
            Immediates::I32(value) => write_s32(buf, *value),
            Immediates::I64(value) => write_s64(buf, *value),
            Immediates::F32(value) => write_f32(buf, *value),
            Immediates::F64(value) => write_f64(buf, *value),
            Immediates::V128(bytes) => buf.extend_from_slice(bytes),
            Immediates::MemArg { align, offset } => {
                write_u32(buf, *align);
                write_u64(buf, *offset);
            }
            Immediates::LaneMemArg {
                align,
                offset,
                lane,
                lanes,
            } => {
                self.check_lane(*lane, *lanes)?;
                write_u32(buf, *align);
                write_u64(buf, *offset);
                buf.push(*lane);
            }
            Immediates::Lane { lane, lanes } => {
                self.check_lane(*lane, *lanes)?;
                buf.push(*lane);
            }
            Immediates::ShuffleLanes(lanes) => {
                for &lane in lanes {
                    // Shuffle indices address the 32 lanes of both inputs.
                    self.check_lane(lane, 32)?;
                }
                buf.extend_from_slice(lanes);
            }
            Immediates::ValueTypes(types) => {
                write_u32(buf, types.len() as u32);
                for vt in types {
                    vt.write(buf);
                }
            }
            Immediates::Memory(name) => write_u32(buf, scope.spaces().memory(name)?),
            Immediates::MemoryInit { data, memory } => {
                write_u32(buf, scope.spaces().data_segment(data)?);
                write_u32(buf, scope.spaces().memory(memory)?);
            }
            Immediates::MemoryCopy { dst, src } => {
                write_u32(buf, scope.spaces().memory(dst)?);
                write_u32(buf, scope.spaces().memory(src)?);
            }
            Immediates::Table(name) => write_u32(buf, scope.spaces().table(name)?),
            Immediates::TableInit { elem, table } => {
                write_u32(buf, scope.spaces().element(elem)?);
                write_u32(buf, scope.spaces().table(table)?);
            }
            Immediates::TableCopy { dst, src } => {
                write_u32(buf, scope.spaces().table(dst)?);
                write_u32(buf, scope.spaces().table(src)?);
            }
            Immediates::Elem(name) => write_u32(buf, scope.spaces().element(name)?),
            Immediates::Data(name) => write_u32(buf, scope.spaces().data_segment(name)?),
            Immediates::Heap(heap) => buf.push(heap.id_byte()),
            Immediates::StructField { type_name, field } => {
                write_u32(buf, scope.spaces().type_index(type_name)?);
                write_u32(buf, *field);
            }
            Immediates::ArrayNewFixed { type_name, length } => {
                write_u32(buf, scope.spaces().type_index(type_name)?);
                write_u32(buf, *length);
            }
            Immediates::ArrayWithData { type_name, data } => {
                write_u32(buf, scope.spaces().type_index(type_name)?);
                write_u32(buf, scope.spaces().data_segment(data)?);
            }
            Immediates::ArrayWithElem { type_name, elem } => {
                write_u32(buf, scope.spaces().type_index(type_name)?);
                write_u32(buf, scope.spaces().element(elem)?);
            }
            Immediates::ArrayCopy { dst_type, src_type } => {
                write_u32(buf, scope.spaces().type_index(dst_type)?);
                write_u32(buf, scope.spaces().type_index(src_type)?);
            }
            Immediates::RawByte(byte) => buf.push(*byte),
        }

        Ok(())
    }

    fn check_lane(&self, lane: u8, lanes: u8) -> Result<(), EncodeError> {
        if lane >= lanes {
            return Err(EncodeError::InvalidValue {
                what: self.mnemonic,
                value: lane as i128,
            });
        }
        Ok(())
    }
}

/// Emits an instruction sequence (a function body or initializer
/// expression) verbatim. The caller's sequence carries its own `end`.
pub(crate) fn emit_all(
    instructions: &[Instruction],
    buf: &mut Vec<u8>,
    scope: &EmitScope<'_>,
) -> Result<(), EncodeError> {
    for inst in instructions {
        inst.emit(buf, scope)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{EmitScope, IndexSpaces};
    use crate::module::ModuleDef;
    use crate::op;

    fn empty_spaces() -> IndexSpaces {
        IndexSpaces::build(&ModuleDef::default()).unwrap()
    }

    #[test]
    fn leaf_emits_opcode_only() {
        let spaces = empty_spaces();
        let scope = EmitScope::module_scope(&spaces);
        let mut buf = Vec::new();
        op::i32::add().emit(&mut buf, &scope).unwrap();
        assert_eq!(buf, [0x6A]);
    }

    #[test]
    fn const_emits_signed_leb() {
        let spaces = empty_spaces();
        let scope = EmitScope::module_scope(&spaces);

        let mut buf = Vec::new();
        op::i32::const_(-1).emit(&mut buf, &scope).unwrap();
        assert_eq!(buf, [0x41, 0x7F]);

        buf.clear();
        op::i64::const_(1 << 40).emit(&mut buf, &scope).unwrap();
        assert_eq!(buf[0], 0x42);
        assert_eq!(buf.len() - 1, 6, "2^40 takes six LEB groups");
    }

    #[test]
    fn seq_flattens_depth_first() {
        let spaces = empty_spaces();
        let scope = EmitScope::module_scope(&spaces);
        let mut buf = Vec::new();
        op::seq(vec![
            op::nop(),
            op::seq(vec![op::drop(), op::seq(vec![op::nop()])]),
            op::unreachable(),
        ])
        .emit(&mut buf, &scope)
        .unwrap();
        assert_eq!(buf, [0x01, 0x1A, 0x01, 0x00]);
    }

    #[test]
    fn block_scopes_nest_and_restore() {
        let spaces = empty_spaces();
        let scope = EmitScope::module_scope(&spaces);
        let mut buf = Vec::new();
        // [outer [middle [inner br(outer)]]] must emit depth 2.
        op::block(
            "outer",
            BlockType::Empty,
            vec![op::block(
                "middle",
                BlockType::Empty,
                vec![op::block(
                    "inner",
                    BlockType::Empty,
                    vec![op::br("outer"), op::end()],
                ), op::end()],
            ), op::end()],
        )
        .emit(&mut buf, &scope)
        .unwrap();
        assert_eq!(
            buf,
            [0x02, 0x40, 0x02, 0x40, 0x02, 0x40, 0x0C, 0x02, 0x0B, 0x0B, 0x0B]
        );
    }

    #[test]
    fn lane_bounds_are_checked() {
        let spaces = empty_spaces();
        let scope = EmitScope::module_scope(&spaces);
        let mut buf = Vec::new();
        assert!(op::i8x16::extract_lane_s(15).emit(&mut buf, &scope).is_ok());
        assert!(matches!(
            op::i8x16::extract_lane_s(16).emit(&mut buf, &scope),
            Err(EncodeError::InvalidValue { .. })
        ));
        assert!(matches!(
            op::f64x2::replace_lane(2).emit(&mut buf, &scope),
            Err(EncodeError::InvalidValue { .. })
        ));
    }

    #[test]
    fn unknown_block_label_is_unresolved() {
        let spaces = empty_spaces();
        let scope = EmitScope::module_scope(&spaces);
        let mut buf = Vec::new();
        let err = op::br("nowhere").emit(&mut buf, &scope).unwrap_err();
        match err {
            EncodeError::UnresolvedName { name, .. } => assert_eq!(name, "nowhere"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn br_on_cast_flags_byte() {
        let spaces = empty_spaces();
        let scope = EmitScope::module_scope(&spaces);
        let mut buf = Vec::new();
        op::block(
            "target",
            BlockType::Empty,
            vec![
                op::br_on_cast(
                    "target",
                    CastType::nullable(HeapType::Any),
                    CastType::non_nullable(HeapType::Struct),
                ),
                op::end(),
            ],
        )
        .emit(&mut buf, &scope)
        .unwrap();
        // block, empty type, 0xFB 0x18, flags=0b01, depth 0, any, struct, end
        assert_eq!(buf, [0x02, 0x40, 0xFB, 0x18, 0x01, 0x00, 0x6E, 0x6B, 0x0B]);
    }
}
