//! The WebAssembly type vocabulary: value types, storage types, heap and
//! reference types, composite (GC) types, and limits.
//!
//! Each shape knows its own wire encoding. The tag bytes of the type
//! grammar are private to this module; integer fields go through
//! [`crate::encoding`].

use std::fmt;

use crate::encoding;

// Type-section and reference-type tags (binary format §5.3). These appear
// only in the writers below; section-level framing bytes live with the
// encoder.
const TAG_FUNC: u8 = 0x60;
const TAG_STRUCT: u8 = 0x5F;
const TAG_ARRAY: u8 = 0x5E;
const TAG_SUB_OPEN: u8 = 0x50;
const TAG_SUB_FINAL: u8 = 0x4F;
const TAG_REC_GROUP: u8 = 0x4E;
const REF_PREFIX_NULLABLE: u8 = 0x63;
const REF_PREFIX_NON_NULL: u8 = 0x64;
const EMPTY_BLOCK_TYPE: u8 = 0x40;

/// Value types (§5.3.4): numeric, vector, and reference types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueType {
    I32,
    I64,
    F32,
    F64,
    V128,
    Ref(RefType),
}

impl ValueType {
    /// Appends the wire encoding of this value type to `buf`.
    pub fn write(&self, buf: &mut Vec<u8>) {
        match self {
            ValueType::I32 => buf.push(0x7f),
            ValueType::I64 => buf.push(0x7e),
            ValueType::F32 => buf.push(0x7d),
            ValueType::F64 => buf.push(0x7c),
            ValueType::V128 => buf.push(0x7b),
            ValueType::Ref(rt) => rt.write(buf),
        }
    }

    pub fn emit_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write(&mut buf);
        buf
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::I32 => write!(f, "i32"),
            ValueType::I64 => write!(f, "i64"),
            ValueType::F32 => write!(f, "f32"),
            ValueType::F64 => write!(f, "f64"),
            ValueType::V128 => write!(f, "v128"),
            ValueType::Ref(rt) => write!(f, "{rt}"),
        }
    }
}

/// Storage types (GC proposal §5.3.3): value types plus the packed field
/// types, which appear only in struct and array field definitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageType {
    Val(ValueType),
    I8,
    I16,
}

impl StorageType {
    pub fn write(&self, buf: &mut Vec<u8>) {
        match self {
            StorageType::Val(vt) => vt.write(buf),
            StorageType::I8 => buf.push(0x78),
            StorageType::I16 => buf.push(0x77),
        }
    }
}

/// The abstract heap types (GC proposal §5.3.2), each a single id byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapType {
    NoFunc,
    NoExtern,
    None,
    Func,
    Extern,
    Any,
    Eq,
    I31,
    Struct,
    Array,
}

impl HeapType {
    /// The one-byte heap-type id.
    pub fn id_byte(&self) -> u8 {
        match self {
            HeapType::NoFunc => 0x73,
            HeapType::NoExtern => 0x72,
            HeapType::None => 0x71,
            HeapType::Func => 0x70,
            HeapType::Extern => 0x6f,
            HeapType::Any => 0x6e,
            HeapType::Eq => 0x6d,
            HeapType::I31 => 0x6c,
            HeapType::Struct => 0x6b,
            HeapType::Array => 0x6a,
        }
    }
}

impl fmt::Display for HeapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeapType::NoFunc => "nofunc",
            HeapType::NoExtern => "noextern",
            HeapType::None => "none",
            HeapType::Func => "func",
            HeapType::Extern => "extern",
            HeapType::Any => "any",
            HeapType::Eq => "eq",
            HeapType::I31 => "i31",
            HeapType::Struct => "struct",
            HeapType::Array => "array",
        };
        write!(f, "{name}")
    }
}

/// A heap-type operand: either an abstract heap type or a concrete type index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heap {
    Id(HeapType),
    Index(u32),
}

impl Heap {
    /// Heap-type position encoding: abstract id byte, or the *signed* LEB128
    /// of a concrete type index (s33 in the spec grammar).
    pub fn write(&self, buf: &mut Vec<u8>) {
        match self {
            Heap::Id(ht) => buf.push(ht.id_byte()),
            Heap::Index(idx) => encoding::write_s64(buf, i64::from(*idx)),
        }
    }
}

/// Reference types (§5.3.4 extended by typed function references).
///
/// The short form is the one-byte shorthand (abstract heap id, or a small
/// type index in heap-type position); the long form is the explicit
/// `0x63`/`0x64` prefix carrying nullability, followed by the heap operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefType {
    Short(Heap),
    Long { nullable: bool, heap: Heap },
}

impl RefType {
    /// The nullable `funcref` shorthand.
    pub const FUNCREF: RefType = RefType::Short(Heap::Id(HeapType::Func));
    /// The nullable `externref` shorthand.
    pub const EXTERNREF: RefType = RefType::Short(Heap::Id(HeapType::Extern));

    pub fn write(&self, buf: &mut Vec<u8>) {
        match self {
            RefType::Short(heap) => heap.write(buf),
            RefType::Long { nullable, heap } => {
                buf.push(if *nullable {
                    REF_PREFIX_NULLABLE
                } else {
                    REF_PREFIX_NON_NULL
                });
                heap.write(buf);
            }
        }
    }
}

impl fmt::Display for RefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefType::Short(Heap::Id(ht)) => write!(f, "{ht}ref"),
            RefType::Short(Heap::Index(idx)) => write!(f, "(ref {idx})"),
            RefType::Long { nullable, heap } => {
                let null = if *nullable { " null" } else { "" };
                match heap {
                    Heap::Id(ht) => write!(f, "(ref{null} {ht})"),
                    Heap::Index(idx) => write!(f, "(ref{null} {idx})"),
                }
            }
        }
    }
}

/// Block result shape (§5.4.1): empty (`0x40`) or a single value type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockType {
    Empty,
    Value(ValueType),
}

impl BlockType {
    pub fn write(&self, buf: &mut Vec<u8>) {
        match self {
            BlockType::Empty => buf.push(EMPTY_BLOCK_TYPE),
            BlockType::Value(vt) => vt.write(buf),
        }
    }
}

impl From<ValueType> for BlockType {
    fn from(vt: ValueType) -> Self {
        BlockType::Value(vt)
    }
}

/// Limits (§5.3.7): minimum and optional maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub min: u32,
    pub max: Option<u32>,
}

impl Limits {
    pub fn at_least(min: u32) -> Limits {
        Limits { min, max: None }
    }

    pub fn bounded(min: u32, max: u32) -> Limits {
        Limits { min, max: Some(max) }
    }

    pub fn write(&self, buf: &mut Vec<u8>) {
        match self.max {
            Some(max) => {
                buf.push(0x01);
                encoding::write_u32(buf, self.min);
                encoding::write_u32(buf, max);
            }
            None => {
                buf.push(0x00);
                encoding::write_u32(buf, self.min);
            }
        }
    }
}

impl fmt::Display for Limits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "min = {}, max = {}", self.min, max),
            None => write!(f, "min = {}", self.min),
        }
    }
}

/// A function signature: parameter and result value types.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FunctionSignature {
    pub params: Vec<ValueType>,
    pub results: Vec<ValueType>,
}

impl FunctionSignature {
    pub fn new(params: Vec<ValueType>, results: Vec<ValueType>) -> FunctionSignature {
        FunctionSignature { params, results }
    }

    /// `0x60` + length-prefixed params + length-prefixed results.
    pub fn write(&self, buf: &mut Vec<u8>) {
        buf.push(TAG_FUNC);
        encoding::write_u32(buf, self.params.len() as u32);
        for p in &self.params {
            p.write(buf);
        }
        encoding::write_u32(buf, self.results.len() as u32);
        for r in &self.results {
            r.write(buf);
        }
    }
}

/// A single struct or array field: storage type plus mutability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldType {
    pub storage: StorageType,
    pub mutable: bool,
}

impl FieldType {
    pub fn new(storage: StorageType, mutable: bool) -> FieldType {
        FieldType { storage, mutable }
    }

    pub fn write(&self, buf: &mut Vec<u8>) {
        self.storage.write(buf);
        buf.push(self.mutable as u8);
    }
}

/// Composite types (GC proposal): array, struct, or function shape.
#[derive(Debug, Clone, PartialEq)]
pub enum CompositeType {
    Array(FieldType),
    Struct(Vec<FieldType>),
    Func(FunctionSignature),
}

impl CompositeType {
    pub fn write(&self, buf: &mut Vec<u8>) {
        match self {
            CompositeType::Array(field) => {
                buf.push(TAG_ARRAY);
                field.write(buf);
            }
            CompositeType::Struct(fields) => {
                buf.push(TAG_STRUCT);
                encoding::write_u32(buf, fields.len() as u32);
                for field in fields {
                    field.write(buf);
                }
            }
            CompositeType::Func(sig) => sig.write(buf),
        }
    }
}

/// A subtype: a composite type with optional supertype indices and finality.
///
/// The `0x4F`/`0x50` wrapper is emitted only when the subtype is open or has
/// supertypes; a final subtype with no supertypes uses the bare shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct SubType {
    pub composite: CompositeType,
    pub supertypes: Vec<u32>,
    pub is_final: bool,
}

impl SubType {
    /// A final subtype with no declared supertypes.
    pub fn plain(composite: CompositeType) -> SubType {
        SubType {
            composite,
            supertypes: Vec::new(),
            is_final: true,
        }
    }

    pub fn write(&self, buf: &mut Vec<u8>) {
        if !self.supertypes.is_empty() || !self.is_final {
            buf.push(if self.is_final { TAG_SUB_FINAL } else { TAG_SUB_OPEN });
            encoding::write_u32(buf, self.supertypes.len() as u32);
            for idx in &self.supertypes {
                encoding::write_u32(buf, *idx);
            }
        }
        self.composite.write(buf);
    }
}

/// Writes a recursive type group: the `rec` wrapper plus its subtypes.
pub fn write_rec_group(buf: &mut Vec<u8>, subtypes: &[SubType]) {
    buf.push(TAG_REC_GROUP);
    encoding::write_u32(buf, subtypes.len() as u32);
    for sub in subtypes {
        sub.write(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_type_bytes() {
        assert_eq!(ValueType::I32.emit_bytes(), [0x7f]);
        assert_eq!(ValueType::I64.emit_bytes(), [0x7e]);
        assert_eq!(ValueType::F32.emit_bytes(), [0x7d]);
        assert_eq!(ValueType::F64.emit_bytes(), [0x7c]);
        assert_eq!(ValueType::V128.emit_bytes(), [0x7b]);
        assert_eq!(ValueType::Ref(RefType::FUNCREF).emit_bytes(), [0x70]);
        assert_eq!(ValueType::Ref(RefType::EXTERNREF).emit_bytes(), [0x6f]);
    }

    #[test]
    fn heap_type_ids() {
        assert_eq!(HeapType::NoFunc.id_byte(), 0x73);
        assert_eq!(HeapType::NoExtern.id_byte(), 0x72);
        assert_eq!(HeapType::None.id_byte(), 0x71);
        assert_eq!(HeapType::Func.id_byte(), 0x70);
        assert_eq!(HeapType::Extern.id_byte(), 0x6f);
        assert_eq!(HeapType::Any.id_byte(), 0x6e);
        assert_eq!(HeapType::Eq.id_byte(), 0x6d);
        assert_eq!(HeapType::I31.id_byte(), 0x6c);
        assert_eq!(HeapType::Struct.id_byte(), 0x6b);
        assert_eq!(HeapType::Array.id_byte(), 0x6a);
    }

    #[test]
    fn ref_type_long_forms() {
        let mut buf = Vec::new();
        RefType::Long {
            nullable: true,
            heap: Heap::Id(HeapType::Any),
        }
        .write(&mut buf);
        assert_eq!(buf, [0x63, 0x6e]);

        buf.clear();
        RefType::Long {
            nullable: false,
            heap: Heap::Index(3),
        }
        .write(&mut buf);
        assert_eq!(buf, [0x64, 0x03]);

        // Type indices in heap position are signed LEB128: index 64 takes
        // two bytes so the sign bit stays clear.
        buf.clear();
        RefType::Long {
            nullable: true,
            heap: Heap::Index(64),
        }
        .write(&mut buf);
        assert_eq!(buf, [0x63, 0xc0, 0x00]);
    }

    #[test]
    fn limits_encoding() {
        let mut buf = Vec::new();
        Limits::at_least(1).write(&mut buf);
        assert_eq!(buf, [0x00, 0x01]);

        buf.clear();
        Limits::bounded(1, 2).write(&mut buf);
        assert_eq!(buf, [0x01, 0x01, 0x02]);
    }

    #[test]
    fn signature_encoding() {
        let mut buf = Vec::new();
        FunctionSignature::new(vec![ValueType::I32, ValueType::I32], vec![ValueType::I32])
            .write(&mut buf);
        assert_eq!(buf, [0x60, 0x02, 0x7f, 0x7f, 0x01, 0x7f]);
    }

    #[test]
    fn composite_encoding() {
        let mut buf = Vec::new();
        CompositeType::Array(FieldType::new(StorageType::I8, true)).write(&mut buf);
        assert_eq!(buf, [0x5e, 0x78, 0x01]);

        buf.clear();
        CompositeType::Struct(vec![
            FieldType::new(StorageType::Val(ValueType::I32), false),
            FieldType::new(StorageType::I16, true),
        ])
        .write(&mut buf);
        assert_eq!(buf, [0x5f, 0x02, 0x7f, 0x00, 0x77, 0x01]);
    }

    #[test]
    fn subtype_encoding() {
        // Final with no supertypes: bare composite.
        let mut buf = Vec::new();
        SubType::plain(CompositeType::Array(FieldType::new(StorageType::I8, false))).write(&mut buf);
        assert_eq!(buf, [0x5e, 0x78, 0x00]);

        // Open with one supertype: 0x50 wrapper.
        buf.clear();
        SubType {
            composite: CompositeType::Array(FieldType::new(StorageType::I8, false)),
            supertypes: vec![0],
            is_final: false,
        }
        .write(&mut buf);
        assert_eq!(buf, [0x50, 0x01, 0x00, 0x5e, 0x78, 0x00]);

        // Final with supertypes: 0x4F wrapper.
        buf.clear();
        SubType {
            composite: CompositeType::Array(FieldType::new(StorageType::I8, false)),
            supertypes: vec![1],
            is_final: true,
        }
        .write(&mut buf);
        assert_eq!(buf, [0x4f, 0x01, 0x01, 0x5e, 0x78, 0x00]);
    }

    #[test]
    fn rec_group_encoding() {
        let mut buf = Vec::new();
        write_rec_group(
            &mut buf,
            &[
                SubType {
                    composite: CompositeType::Array(FieldType::new(StorageType::I8, false)),
                    supertypes: vec![],
                    is_final: false,
                },
                SubType::plain(CompositeType::Array(FieldType::new(StorageType::I16, true))),
            ],
        );
        assert_eq!(buf, [0x4e, 0x02, 0x50, 0x00, 0x5e, 0x78, 0x00, 0x5e, 0x77, 0x01]);
    }
}
