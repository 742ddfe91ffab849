//! A declarative WebAssembly module builder and binary encoder.
//!
//! wembly turns an in-memory description of a WebAssembly module into the
//! canonical binary format of the WebAssembly 2.0 specification, including
//! the bulk memory, multi-memory, multi-value, reference type, tail call,
//! typed function reference, GC, SIMD, relaxed SIMD, and threads proposals.
//! Cross-references inside the description are symbolic: functions, types,
//! tables, memories, globals, element and data segments, locals, and block
//! labels are all addressed by name, and the encoder resolves them to
//! indices in a single preparation pass.
//!
//! # Modules
//!
//! - [`module`] -- The module definition schema: [`ModuleDef`] and its entry
//!   records.
//! - [`op`] -- The instruction DSL, one constructor per mnemonic.
//! - [`encoder`] -- The module encoder: [`encode_module`] and the
//!   incremental [`Encoder`].
//! - [`types`] -- Value, reference, and composite (GC) types.
//! - [`opcodes`] -- The mnemonic → opcode registry.
//! - [`encoding`] -- LEB128 and raw-value encoding primitives.
//!
//! # Example
//!
//! Build a module with one exported function and encode it:
//!
//! ```
//! use wembly::{encode_module, op, FunctionDef, ModuleDef, ValueType};
//!
//! let mut module = ModuleDef::new();
//! module.functions.push(
//!     FunctionDef::new("answer")
//!         .exported()
//!         .returns(ValueType::I32)
//!         .body(vec![op::i32::const_(42), op::end()]),
//! );
//!
//! let wasm = encode_module(&module).unwrap();
//! assert_eq!(&wasm[0..8], b"\0asm\x01\x00\x00\x00");
//! ```
//!
//! The encoder does not type-check instruction sequences; it guarantees a
//! structurally well-formed binary and leaves validation to the consuming
//! engine.

pub mod context;
pub mod encoder;
pub mod encoding;
pub mod instruction;
pub mod module;
pub mod op;
pub mod opcodes;
pub mod types;

pub use encoder::{encode_module, EncodeError, Encoder, NameSpace};
pub use encoding::{encode_int, encode_uint};
pub use instruction::{CastType, Immediates, Instruction};
pub use module::{
    CustomSection, DataDef, DataMode, ElementDef, ElementInit, ElementMode, FunctionDef,
    GlobalDef, ImportDef, ImportKind, MemoryDef, ModuleDef, TableDef, TypeDef, TypeKind,
};
pub use types::{
    BlockType, CompositeType, FieldType, FunctionSignature, Heap, HeapType, Limits, RefType,
    StorageType, SubType, ValueType,
};
