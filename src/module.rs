//! The module definition schema: the declarative input the encoder consumes.
//!
//! Every cross-reference is a name. Indices are assigned by the encoder's
//! preparation pass in declaration order, so a definition can be assembled in
//! any order without index bookkeeping.

use crate::instruction::Instruction;
use crate::types::{Limits, RefType, SubType, ValueType};

/// A complete module description. All fields are optional in the sense that
/// an empty `Vec`/`None` omits the corresponding section.
#[derive(Debug, Clone, Default)]
pub struct ModuleDef {
    pub functions: Vec<FunctionDef>,
    pub globals: Vec<GlobalDef>,
    pub custom_types: Vec<TypeDef>,
    pub imports: Vec<ImportDef>,
    pub tables: Vec<TableDef>,
    pub memories: Vec<MemoryDef>,
    pub elements: Vec<ElementDef>,
    pub data: Vec<DataDef>,
    /// Name of the start function, if any.
    pub start: Option<String>,
    pub custom_sections: Vec<CustomSection>,
}

impl ModuleDef {
    pub fn new() -> ModuleDef {
        ModuleDef::default()
    }
}

/// A function definition.
///
/// Parameters and locals are ordered name→type pairs; the parameters occupy
/// local indices first, then the declared locals, in declaration order. The
/// instruction list must terminate with an explicit `end`.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    pub name: String,
    pub export: bool,
    pub params: Vec<(String, ValueType)>,
    pub returns: Vec<ValueType>,
    pub locals: Vec<(String, ValueType)>,
    pub instructions: Vec<Instruction>,
}

impl FunctionDef {
    pub fn new(name: impl Into<String>) -> FunctionDef {
        FunctionDef {
            name: name.into(),
            export: false,
            params: Vec::new(),
            returns: Vec::new(),
            locals: Vec::new(),
            instructions: Vec::new(),
        }
    }

    pub fn exported(mut self) -> FunctionDef {
        self.export = true;
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: ValueType) -> FunctionDef {
        self.params.push((name.into(), ty));
        self
    }

    pub fn returns(mut self, ty: ValueType) -> FunctionDef {
        self.returns.push(ty);
        self
    }

    pub fn local(mut self, name: impl Into<String>, ty: ValueType) -> FunctionDef {
        self.locals.push((name.into(), ty));
        self
    }

    pub fn body(mut self, instructions: Vec<Instruction>) -> FunctionDef {
        self.instructions = instructions;
        self
    }
}

/// A global definition. The initializer is a constant expression terminated
/// by an explicit `end`.
#[derive(Debug, Clone)]
pub struct GlobalDef {
    pub name: String,
    pub export: bool,
    pub value_type: ValueType,
    pub mutable: bool,
    pub init: Vec<Instruction>,
}

impl GlobalDef {
    pub fn new(
        name: impl Into<String>,
        value_type: ValueType,
        mutable: bool,
        init: Vec<Instruction>,
    ) -> GlobalDef {
        GlobalDef {
            name: name.into(),
            export: false,
            value_type,
            mutable,
            init,
        }
    }

    pub fn exported(mut self) -> GlobalDef {
        self.export = true;
        self
    }
}

/// A named type-section entry: either a single subtype or a recursive group.
#[derive(Debug, Clone)]
pub struct TypeDef {
    pub name: String,
    pub kind: TypeKind,
}

#[derive(Debug, Clone)]
pub enum TypeKind {
    Sub(SubType),
    Rec(Vec<SubType>),
}

impl TypeDef {
    pub fn sub(name: impl Into<String>, sub: SubType) -> TypeDef {
        TypeDef {
            name: name.into(),
            kind: TypeKind::Sub(sub),
        }
    }

    pub fn rec(name: impl Into<String>, subs: Vec<SubType>) -> TypeDef {
        TypeDef {
            name: name.into(),
            kind: TypeKind::Rec(subs),
        }
    }
}

/// An import: two-level name plus the imported entity's shape.
#[derive(Debug, Clone)]
pub struct ImportDef {
    pub module: String,
    pub name: String,
    pub kind: ImportKind,
}

#[derive(Debug, Clone)]
pub enum ImportKind {
    /// A function import referencing a type-section entry by name.
    Function { type_name: String },
    Table { ref_type: RefType, limits: Limits },
    Memory { limits: Limits },
    Global { value_type: ValueType, mutable: bool },
}

impl ImportDef {
    pub fn new(module: impl Into<String>, name: impl Into<String>, kind: ImportKind) -> ImportDef {
        ImportDef {
            module: module.into(),
            name: name.into(),
            kind,
        }
    }
}

/// A table definition.
#[derive(Debug, Clone)]
pub struct TableDef {
    pub name: String,
    pub export: bool,
    pub ref_type: RefType,
    pub limits: Limits,
}

impl TableDef {
    pub fn new(name: impl Into<String>, ref_type: RefType, limits: Limits) -> TableDef {
        TableDef {
            name: name.into(),
            export: false,
            ref_type,
            limits,
        }
    }

    pub fn exported(mut self) -> TableDef {
        self.export = true;
        self
    }
}

/// A memory definition.
#[derive(Debug, Clone)]
pub struct MemoryDef {
    pub name: String,
    pub export: bool,
    pub limits: Limits,
}

impl MemoryDef {
    pub fn new(name: impl Into<String>, limits: Limits) -> MemoryDef {
        MemoryDef {
            name: name.into(),
            export: false,
            limits,
        }
    }

    pub fn exported(mut self) -> MemoryDef {
        self.export = true;
        self
    }
}

/// Placement of an element segment.
#[derive(Debug, Clone)]
pub enum ElementMode {
    /// Applied to a table at instantiation. `table: None` targets table 0
    /// through the compact flag variants; a named table uses the
    /// explicit-table variants. The offset is a constant expression
    /// terminated by `end`.
    Active {
        table: Option<String>,
        offset: Vec<Instruction>,
    },
    Passive,
    Declarative,
}

/// The initializer payload of an element segment.
#[derive(Debug, Clone)]
pub enum ElementInit {
    /// Function names, encoded as the compact function-index variants.
    Functions(Vec<String>),
    /// Constant expressions (each terminated by `end`), encoded as the
    /// expression variants.
    Expressions(Vec<Vec<Instruction>>),
}

/// An element segment.
#[derive(Debug, Clone)]
pub struct ElementDef {
    pub name: String,
    pub mode: ElementMode,
    /// Element reference type; written only by the expression variants.
    pub ref_type: RefType,
    pub init: ElementInit,
}

impl ElementDef {
    pub fn new(name: impl Into<String>, mode: ElementMode, init: ElementInit) -> ElementDef {
        ElementDef {
            name: name.into(),
            mode,
            ref_type: RefType::FUNCREF,
            init,
        }
    }

    pub fn ref_type(mut self, ref_type: RefType) -> ElementDef {
        self.ref_type = ref_type;
        self
    }
}

/// Placement of a data segment.
#[derive(Debug, Clone)]
pub enum DataMode {
    /// Applied to a memory at instantiation; `memory: None` targets memory 0
    /// through flag variant 0, a named memory uses variant 2. The offset is
    /// a constant expression terminated by `end`.
    Active {
        memory: Option<String>,
        offset: Vec<Instruction>,
    },
    Passive,
}

/// A data segment.
#[derive(Debug, Clone)]
pub struct DataDef {
    pub name: String,
    pub mode: DataMode,
    pub bytes: Vec<u8>,
}

impl DataDef {
    pub fn new(name: impl Into<String>, mode: DataMode, bytes: Vec<u8>) -> DataDef {
        DataDef {
            name: name.into(),
            mode,
            bytes,
        }
    }
}

/// A custom section: name plus raw contents, written after the standard
/// sections in definition order.
#[derive(Debug, Clone)]
pub struct CustomSection {
    pub name: String,
    pub data: Vec<u8>,
}

impl CustomSection {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> CustomSection {
        CustomSection {
            name: name.into(),
            data,
        }
    }
}
