//! Encodes a [`ModuleDef`] to WebAssembly binary format (`.wasm`).
//!
//! # Binary format overview
//!
//! A WebAssembly binary begins with a magic number (`\0asm`) and version (1),
//! followed by sections in a fixed order. Each section is encoded as:
//!
//! ```text
//! section_id: u8 | byte_length: vu32 | contents: byte*
//! ```
//!
//! Sections with no entries are omitted. The encoder produces minimal LEB128
//! encoding for all integer values, and given the same definition it produces
//! byte-identical output on every call.
//!
//! Encoding runs in two phases. The preparation phase ([`Encoder::new`])
//! walks the definition once, assigning indices to every named entity and
//! deriving the export list. The emission phase writes the preamble and each
//! section in wire order; section bodies are assembled in a fresh buffer and
//! spliced in behind their length prefix. Instructions resolve their symbolic
//! references during this phase, so a dangling name fails the encode at the
//! site of the offending construct.
//!
//! # Example
//!
//! ```
//! use wembly::{encode_module, op, FunctionDef, ModuleDef, ValueType};
//!
//! let mut module = ModuleDef::new();
//! module.functions.push(
//!     FunctionDef::new("add")
//!         .exported()
//!         .param("a", ValueType::I32)
//!         .param("b", ValueType::I32)
//!         .returns(ValueType::I32)
//!         .body(vec![
//!             op::local::get("a"),
//!             op::local::get("b"),
//!             op::i32::add(),
//!             op::end(),
//!         ]),
//! );
//! let bytes = encode_module(&module).unwrap();
//! assert_eq!(&bytes[0..4], b"\0asm");
//! ```

use std::fmt;

use crate::context::{build_locals, check_import, EmitScope, IndexSpaces};
use crate::encoding::{write_bytes, write_name, write_u32};
use crate::instruction::emit_all;
use crate::module::{DataMode, ElementInit, ElementMode, FunctionDef, ImportKind, ModuleDef, TypeKind};
use crate::types::{write_rec_group, FunctionSignature};

/// Section ids (§5.5.2), in the wire order the encoder emits them.
#[repr(u8)]
#[derive(Debug, Clone, Copy)]
enum SectionId {
    Custom = 0,
    Type = 1,
    Import = 2,
    Function = 3,
    Table = 4,
    Memory = 5,
    Global = 6,
    Export = 7,
    Start = 8,
    Element = 9,
    Code = 10,
    Data = 11,
    DataCount = 12,
}

/// Import/export descriptor kinds (§5.5.5, §5.5.10).
#[repr(u8)]
#[derive(Debug, Clone, Copy)]
enum ExternKind {
    Func = 0,
    Table = 1,
    Memory = 2,
    Global = 3,
}

/// The element-kind byte for function-index element segments.
const FUNCREF_ELEM_KIND: u8 = 0x00;

// ===========================================================================
// Error type
// ===========================================================================

/// The name kind a failed lookup was performed in; carried by
/// [`EncodeError::UnresolvedName`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSpace {
    Function,
    Type,
    Table,
    Memory,
    Global,
    Element,
    Data,
    Local,
    Block,
}

impl fmt::Display for NameSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NameSpace::Function => "function",
            NameSpace::Type => "type",
            NameSpace::Table => "table",
            NameSpace::Memory => "memory",
            NameSpace::Global => "global",
            NameSpace::Element => "element",
            NameSpace::Data => "data",
            NameSpace::Local => "local",
            NameSpace::Block => "block",
        };
        write!(f, "{name}")
    }
}

/// Errors that can occur during encoding. Any error aborts the encode; the
/// partially built output is discarded.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// A symbolic reference does not appear in its lookup (including block
    /// labels missing from the block stack).
    #[error("unresolved {space} name: {name}")]
    UnresolvedName { space: NameSpace, name: String },
    /// A numeric precondition was violated: negative unsigned LEB128 input,
    /// out-of-range lane index, opcode beyond 20 bits.
    #[error("invalid value for {what}: {value}")]
    InvalidValue { what: &'static str, value: i128 },
    /// A discriminator outside its enumerated set: duplicate names within a
    /// kind, unknown mnemonics.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

// ===========================================================================
// Public API
// ===========================================================================

/// Encodes a module definition to binary format in one call.
pub fn encode_module(module: &ModuleDef) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = Encoder::new(module)?;
    encoder.write_preamble();
    encoder.write_type_section()?;
    encoder.write_import_section()?;
    encoder.write_function_section();
    encoder.write_table_section();
    encoder.write_memory_section();
    encoder.write_global_section()?;
    encoder.write_export_section();
    encoder.write_start_section()?;
    encoder.write_element_section()?;
    encoder.write_data_count_section();
    encoder.write_code_section()?;
    encoder.write_data_section()?;
    encoder.write_custom_sections();
    Ok(encoder.finish())
}

/// A derived export entry: name, descriptor kind, index.
#[derive(Debug)]
struct Export {
    name: String,
    kind: ExternKind,
    index: u32,
}

/// An incremental module encoder.
///
/// [`encode_module`] drives the full section order; callers that need to
/// interleave custom sections or emit sections individually can call the
/// `write_*` methods themselves. Construction runs the preparation pass:
/// index assignment, import checking, and export derivation.
pub struct Encoder<'m> {
    module: &'m ModuleDef,
    spaces: IndexSpaces,
    exports: Vec<Export>,
    buf: Vec<u8>,
}

impl<'m> Encoder<'m> {
    pub fn new(module: &'m ModuleDef) -> Result<Encoder<'m>, EncodeError> {
        let spaces = IndexSpaces::build(module)?;
        for import in &module.imports {
            check_import(&spaces, &import.kind)?;
        }
        let exports = derive_exports(module);
        Ok(Encoder {
            module,
            spaces,
            exports,
            buf: Vec::new(),
        })
    }

    /// Magic number `\0asm` and version 1.
    pub fn write_preamble(&mut self) {
        self.buf.extend_from_slice(b"\0asm");
        self.buf.extend_from_slice(&1u32.to_le_bytes());
    }

    /// Consumes the encoder, returning the assembled bytes.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    /// Type section (id 1): function signatures first, one per function in
    /// function order, then the named custom types. This layout is what lets
    /// the function section use index `i` as the type index of function `i`.
    pub fn write_type_section(&mut self) -> Result<(), EncodeError> {
        let count = self.module.functions.len() + self.module.custom_types.len();
        if count == 0 {
            return Ok(());
        }

        let mut contents = Vec::new();
        write_u32(&mut contents, count as u32);
        for func in &self.module.functions {
            function_signature(func).write(&mut contents);
        }
        for ty in &self.module.custom_types {
            match &ty.kind {
                TypeKind::Sub(sub) => sub.write(&mut contents),
                TypeKind::Rec(subs) => write_rec_group(&mut contents, subs),
            }
        }
        self.emit_section(SectionId::Type, &contents);
        Ok(())
    }

    /// Import section (id 2).
    ///
    /// ```text
    /// import     ::= module:name name:name importdesc
    /// importdesc ::= 0x00 typeidx | 0x01 tabletype | 0x02 memtype | 0x03 globaltype
    /// ```
    pub fn write_import_section(&mut self) -> Result<(), EncodeError> {
        let imports = &self.module.imports;
        if imports.is_empty() {
            return Ok(());
        }

        let mut contents = Vec::new();
        write_u32(&mut contents, imports.len() as u32);
        for imp in imports {
            write_name(&mut contents, &imp.module);
            write_name(&mut contents, &imp.name);
            match &imp.kind {
                ImportKind::Function { type_name } => {
                    contents.push(ExternKind::Func as u8);
                    write_u32(&mut contents, self.spaces.type_index(type_name)?);
                }
                ImportKind::Table { ref_type, limits } => {
                    contents.push(ExternKind::Table as u8);
                    ref_type.write(&mut contents);
                    limits.write(&mut contents);
                }
                ImportKind::Memory { limits } => {
                    contents.push(ExternKind::Memory as u8);
                    limits.write(&mut contents);
                }
                ImportKind::Global { value_type, mutable } => {
                    contents.push(ExternKind::Global as u8);
                    value_type.write(&mut contents);
                    contents.push(*mutable as u8);
                }
            }
        }
        self.emit_section(SectionId::Import, &contents);
        Ok(())
    }

    /// Function section (id 3): the type index per function, which by the
    /// type-section layout is the function's own index.
    pub fn write_function_section(&mut self) {
        let functions = &self.module.functions;
        if functions.is_empty() {
            return;
        }

        let mut contents = Vec::new();
        write_u32(&mut contents, functions.len() as u32);
        for i in 0..functions.len() {
            write_u32(&mut contents, i as u32);
        }
        self.emit_section(SectionId::Function, &contents);
    }

    /// Table section (id 4): reference type + limits per table.
    pub fn write_table_section(&mut self) {
        let tables = &self.module.tables;
        if tables.is_empty() {
            return;
        }

        let mut contents = Vec::new();
        write_u32(&mut contents, tables.len() as u32);
        for table in tables {
            table.ref_type.write(&mut contents);
            table.limits.write(&mut contents);
        }
        self.emit_section(SectionId::Table, &contents);
    }

    /// Memory section (id 5): limits per memory.
    pub fn write_memory_section(&mut self) {
        let memories = &self.module.memories;
        if memories.is_empty() {
            return;
        }

        let mut contents = Vec::new();
        write_u32(&mut contents, memories.len() as u32);
        for memory in memories {
            memory.limits.write(&mut contents);
        }
        self.emit_section(SectionId::Memory, &contents);
    }

    /// Global section (id 6): value type, mutability, and the initializer
    /// expression (terminated by the caller's `end`).
    pub fn write_global_section(&mut self) -> Result<(), EncodeError> {
        let globals = &self.module.globals;
        if globals.is_empty() {
            return Ok(());
        }

        let mut contents = Vec::new();
        write_u32(&mut contents, globals.len() as u32);
        let scope = EmitScope::module_scope(&self.spaces);
        for global in globals {
            global.value_type.write(&mut contents);
            contents.push(global.mutable as u8);
            emit_all(&global.init, &mut contents, &scope)?;
        }
        self.emit_section(SectionId::Global, &contents);
        Ok(())
    }

    /// Export section (id 7): the entries derived from `export` flags during
    /// preparation, each under its definition's own name.
    pub fn write_export_section(&mut self) {
        if self.exports.is_empty() {
            return;
        }

        let mut contents = Vec::new();
        write_u32(&mut contents, self.exports.len() as u32);
        for export in &self.exports {
            write_name(&mut contents, &export.name);
            contents.push(export.kind as u8);
            write_u32(&mut contents, export.index);
        }
        self.emit_section(SectionId::Export, &contents);
    }

    /// Start section (id 8): the start function's index.
    pub fn write_start_section(&mut self) -> Result<(), EncodeError> {
        let Some(start) = &self.module.start else {
            return Ok(());
        };

        let mut contents = Vec::new();
        write_u32(&mut contents, self.spaces.function(start)?);
        self.emit_section(SectionId::Start, &contents);
        Ok(())
    }

    /// Element section (id 9).
    ///
    /// The flags byte (0-7) is chosen from the segment's mode and init kind:
    /// bit 0 set for non-active or explicit-table placement, bit 1
    /// distinguishing declarative/explicit-table from passive, bit 2 set for
    /// expression initializers. Each variant's layout follows the flag.
    pub fn write_element_section(&mut self) -> Result<(), EncodeError> {
        let elements = &self.module.elements;
        if elements.is_empty() {
            return Ok(());
        }

        let mut contents = Vec::new();
        write_u32(&mut contents, elements.len() as u32);
        let scope = EmitScope::module_scope(&self.spaces);

        for elem in elements {
            let exprs = matches!(elem.init, ElementInit::Expressions(_));
            let (mode_bits, table, offset) = match &elem.mode {
                ElementMode::Active { table: None, offset } => (0u32, None, Some(offset)),
                ElementMode::Passive => (1, None, None),
                ElementMode::Active {
                    table: Some(table),
                    offset,
                } => (2, Some(table.as_str()), Some(offset)),
                ElementMode::Declarative => (3, None, None),
            };
            let flags = if exprs { mode_bits | 4 } else { mode_bits };
            write_u32(&mut contents, flags);

            if let Some(table) = table {
                write_u32(&mut contents, self.spaces.table(table)?);
            }
            if let Some(offset) = offset {
                emit_all(offset, &mut contents, &scope)?;
            }

            match &elem.init {
                ElementInit::Functions(names) => {
                    // Variants 1-3 carry the elemkind byte; variant 0 implies it.
                    if flags != 0 {
                        contents.push(FUNCREF_ELEM_KIND);
                    }
                    write_u32(&mut contents, names.len() as u32);
                    for name in names {
                        write_u32(&mut contents, self.spaces.function(name)?);
                    }
                }
                ElementInit::Expressions(init_exprs) => {
                    // Variants 5-7 carry the reference type; variant 4 implies it.
                    if flags != 4 {
                        elem.ref_type.write(&mut contents);
                    }
                    write_u32(&mut contents, init_exprs.len() as u32);
                    for expr in init_exprs {
                        emit_all(expr, &mut contents, &scope)?;
                    }
                }
            }
        }
        self.emit_section(SectionId::Element, &contents);
        Ok(())
    }

    /// DataCount section (id 12): the number of data segments, emitted ahead
    /// of the code section whenever the module has any data.
    pub fn write_data_count_section(&mut self) {
        let count = self.module.data.len();
        if count == 0 {
            return;
        }

        let mut contents = Vec::new();
        write_u32(&mut contents, count as u32);
        self.emit_section(SectionId::DataCount, &contents);
    }

    /// Code section (id 10): length-prefixed function bodies. Each body
    /// holds its locals (one group per declared local) and the function's
    /// instruction sequence, which must carry its own terminating `end`.
    pub fn write_code_section(&mut self) -> Result<(), EncodeError> {
        let functions = &self.module.functions;
        if functions.is_empty() {
            return Ok(());
        }

        let mut contents = Vec::new();
        write_u32(&mut contents, functions.len() as u32);

        for func in functions {
            let locals = build_locals(&func.params, &func.locals)?;
            let scope = EmitScope::function_scope(&self.spaces, &locals);

            let mut func_buf = Vec::new();
            write_u32(&mut func_buf, func.locals.len() as u32);
            for (_, vt) in &func.locals {
                write_u32(&mut func_buf, 1);
                vt.write(&mut func_buf);
            }
            emit_all(&func.instructions, &mut func_buf, &scope)?;

            write_u32(&mut contents, func_buf.len() as u32);
            contents.extend_from_slice(&func_buf);
        }
        self.emit_section(SectionId::Code, &contents);
        Ok(())
    }

    /// Data section (id 11).
    ///
    /// ```text
    /// data ::= 0x00 expr vec(byte)         (active, memory 0)
    ///        | 0x01 vec(byte)              (passive)
    ///        | 0x02 memidx expr vec(byte)  (active, explicit memory)
    /// ```
    pub fn write_data_section(&mut self) -> Result<(), EncodeError> {
        let data = &self.module.data;
        if data.is_empty() {
            return Ok(());
        }

        let mut contents = Vec::new();
        write_u32(&mut contents, data.len() as u32);
        let scope = EmitScope::module_scope(&self.spaces);

        for seg in data {
            match &seg.mode {
                DataMode::Active {
                    memory: None,
                    offset,
                } => {
                    write_u32(&mut contents, 0);
                    emit_all(offset, &mut contents, &scope)?;
                }
                DataMode::Passive => {
                    write_u32(&mut contents, 1);
                }
                DataMode::Active {
                    memory: Some(memory),
                    offset,
                } => {
                    write_u32(&mut contents, 2);
                    write_u32(&mut contents, self.spaces.memory(memory)?);
                    emit_all(offset, &mut contents, &scope)?;
                }
            }
            write_bytes(&mut contents, &seg.bytes);
        }
        self.emit_section(SectionId::Data, &contents);
        Ok(())
    }

    /// Custom sections (id 0): the definition's user-supplied sections, in
    /// order, after all standard sections.
    pub fn write_custom_sections(&mut self) {
        for custom in &self.module.custom_sections {
            let mut contents = Vec::new();
            write_name(&mut contents, &custom.name);
            contents.extend_from_slice(&custom.data);
            self.emit_section(SectionId::Custom, &contents);
        }
    }

    /// Writes one custom section at the current position, for callers that
    /// interleave customs between standard sections.
    pub fn write_custom_section(&mut self, name: &str, data: &[u8]) {
        let mut contents = Vec::new();
        write_name(&mut contents, name);
        contents.extend_from_slice(data);
        self.emit_section(SectionId::Custom, &contents);
    }

    /// Wraps section contents with the section ID and length prefix.
    fn emit_section(&mut self, id: SectionId, contents: &[u8]) {
        self.buf.push(id as u8);
        write_u32(&mut self.buf, contents.len() as u32);
        self.buf.extend_from_slice(contents);
    }
}

// ===========================================================================
// Preparation helpers
// ===========================================================================

fn function_signature(func: &FunctionDef) -> FunctionSignature {
    FunctionSignature {
        params: func.params.iter().map(|(_, vt)| *vt).collect(),
        results: func.returns.clone(),
    }
}

/// Collects the export entries from `export` flags: functions, then tables,
/// memories, and globals, each in declaration order under its own name.
fn derive_exports(module: &ModuleDef) -> Vec<Export> {
    let mut exports = Vec::new();
    for (i, func) in module.functions.iter().enumerate() {
        if func.export {
            exports.push(Export {
                name: func.name.clone(),
                kind: ExternKind::Func,
                index: i as u32,
            });
        }
    }
    for (i, table) in module.tables.iter().enumerate() {
        if table.export {
            exports.push(Export {
                name: table.name.clone(),
                kind: ExternKind::Table,
                index: i as u32,
            });
        }
    }
    for (i, memory) in module.memories.iter().enumerate() {
        if memory.export {
            exports.push(Export {
                name: memory.name.clone(),
                kind: ExternKind::Memory,
                index: i as u32,
            });
        }
    }
    for (i, global) in module.globals.iter().enumerate() {
        if global.export {
            exports.push(Export {
                name: global.name.clone(),
                kind: ExternKind::Global,
                index: i as u32,
            });
        }
    }
    exports
}
