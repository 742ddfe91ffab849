//! Name resolution for the module encoder.
//!
//! [`IndexSpaces`] holds the module-wide name→index mappings, built in a
//! single preparation pass over the module definition. [`EmitScope`] is the
//! per-emission view: it borrows the module-wide spaces, borrows the current
//! function's locals (if any), and owns the block stack. Entering a block
//! copies the stack, so sibling blocks never observe each other's labels.

use std::collections::HashMap;
use std::fmt;

use crate::encoder::{EncodeError, NameSpace};
use crate::module::{ImportKind, ModuleDef};

/// Module-wide name→index mappings, immutable once built.
#[derive(Debug, Default)]
pub struct IndexSpaces {
    functions: HashMap<String, u32>,
    types: HashMap<String, u32>,
    tables: HashMap<String, u32>,
    memories: HashMap<String, u32>,
    globals: HashMap<String, u32>,
    elements: HashMap<String, u32>,
    data: HashMap<String, u32>,
}

fn insert_unique(
    map: &mut HashMap<String, u32>,
    space: NameSpace,
    name: &str,
    index: u32,
) -> Result<(), EncodeError> {
    if map.insert(name.to_string(), index).is_some() {
        return Err(EncodeError::MalformedInput(format!(
            "duplicate {space} name: {name}"
        )));
    }
    Ok(())
}

fn resolve(map: &HashMap<String, u32>, space: NameSpace, name: &str) -> Result<u32, EncodeError> {
    map.get(name).copied().ok_or_else(|| EncodeError::UnresolvedName {
        space,
        name: name.to_string(),
    })
}

impl IndexSpaces {
    /// Builds every index space from the module definition in declaration
    /// order. Duplicate names within a kind are rejected.
    ///
    /// Function signatures occupy the first type indices, one per function,
    /// so a function's name resolves to the same value in both the function
    /// and type spaces. Named custom types follow.
    pub fn build(module: &ModuleDef) -> Result<IndexSpaces, EncodeError> {
        let mut spaces = IndexSpaces::default();

        for (i, func) in module.functions.iter().enumerate() {
            insert_unique(&mut spaces.functions, NameSpace::Function, &func.name, i as u32)?;
            insert_unique(&mut spaces.types, NameSpace::Type, &func.name, i as u32)?;
        }
        let type_base = module.functions.len() as u32;
        for (i, ty) in module.custom_types.iter().enumerate() {
            insert_unique(&mut spaces.types, NameSpace::Type, &ty.name, type_base + i as u32)?;
        }
        for (i, table) in module.tables.iter().enumerate() {
            insert_unique(&mut spaces.tables, NameSpace::Table, &table.name, i as u32)?;
        }
        for (i, memory) in module.memories.iter().enumerate() {
            insert_unique(&mut spaces.memories, NameSpace::Memory, &memory.name, i as u32)?;
        }
        for (i, global) in module.globals.iter().enumerate() {
            insert_unique(&mut spaces.globals, NameSpace::Global, &global.name, i as u32)?;
        }
        for (i, elem) in module.elements.iter().enumerate() {
            insert_unique(&mut spaces.elements, NameSpace::Element, &elem.name, i as u32)?;
        }
        for (i, seg) in module.data.iter().enumerate() {
            insert_unique(&mut spaces.data, NameSpace::Data, &seg.name, i as u32)?;
        }

        Ok(spaces)
    }

    pub fn function(&self, name: &str) -> Result<u32, EncodeError> {
        resolve(&self.functions, NameSpace::Function, name)
    }

    pub fn type_index(&self, name: &str) -> Result<u32, EncodeError> {
        resolve(&self.types, NameSpace::Type, name)
    }

    pub fn table(&self, name: &str) -> Result<u32, EncodeError> {
        resolve(&self.tables, NameSpace::Table, name)
    }

    pub fn memory(&self, name: &str) -> Result<u32, EncodeError> {
        resolve(&self.memories, NameSpace::Memory, name)
    }

    pub fn global(&self, name: &str) -> Result<u32, EncodeError> {
        resolve(&self.globals, NameSpace::Global, name)
    }

    pub fn element(&self, name: &str) -> Result<u32, EncodeError> {
        resolve(&self.elements, NameSpace::Element, name)
    }

    pub fn data_segment(&self, name: &str) -> Result<u32, EncodeError> {
        resolve(&self.data, NameSpace::Data, name)
    }
}

/// Builds a function's locals map: parameters first, then declared locals,
/// each in declaration order.
pub fn build_locals(
    params: &[(String, crate::types::ValueType)],
    locals: &[(String, crate::types::ValueType)],
) -> Result<HashMap<String, u32>, EncodeError> {
    let mut map = HashMap::with_capacity(params.len() + locals.len());
    for (i, (name, _)) in params.iter().chain(locals.iter()).enumerate() {
        insert_unique(&mut map, NameSpace::Local, name, i as u32)?;
    }
    Ok(map)
}

/// The resolution view threaded through instruction emission.
pub struct EmitScope<'a> {
    spaces: &'a IndexSpaces,
    locals: Option<&'a HashMap<String, u32>>,
    blocks: Vec<String>,
}

impl fmt::Debug for EmitScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmitScope")
            .field("locals", &self.locals.map(|l| l.len()))
            .field("blocks", &self.blocks)
            .finish()
    }
}

impl<'a> EmitScope<'a> {
    /// Scope for module-level expressions (global initializers, element
    /// offsets): no locals, empty block stack.
    pub fn module_scope(spaces: &'a IndexSpaces) -> EmitScope<'a> {
        EmitScope {
            spaces,
            locals: None,
            blocks: Vec::new(),
        }
    }

    /// Scope for a function body.
    pub fn function_scope(spaces: &'a IndexSpaces, locals: &'a HashMap<String, u32>) -> EmitScope<'a> {
        EmitScope {
            spaces,
            locals: Some(locals),
            blocks: Vec::new(),
        }
    }

    /// A copy of this scope with `label` pushed as the innermost block.
    pub fn with_block(&self, label: &str) -> EmitScope<'a> {
        let mut blocks = self.blocks.clone();
        blocks.push(label.to_string());
        EmitScope {
            spaces: self.spaces,
            locals: self.locals,
            blocks,
        }
    }

    /// Branch depth of a named enclosing block: innermost is 0.
    pub fn branch_depth(&self, label: &str) -> Result<u32, EncodeError> {
        self.blocks
            .iter()
            .rev()
            .position(|b| b == label)
            .map(|d| d as u32)
            .ok_or_else(|| EncodeError::UnresolvedName {
                space: NameSpace::Block,
                name: label.to_string(),
            })
    }

    pub fn local(&self, name: &str) -> Result<u32, EncodeError> {
        match self.locals {
            Some(locals) => resolve(locals, NameSpace::Local, name),
            None => Err(EncodeError::UnresolvedName {
                space: NameSpace::Local,
                name: name.to_string(),
            }),
        }
    }

    pub fn spaces(&self) -> &'a IndexSpaces {
        self.spaces
    }
}

/// Resolves an import's type reference, if it has one; used by the encoder's
/// preparation pass to fail fast on dangling imports.
pub fn check_import(spaces: &IndexSpaces, kind: &ImportKind) -> Result<(), EncodeError> {
    if let ImportKind::Function { type_name } = kind {
        spaces.type_index(type_name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::{FunctionDef, ModuleDef};
    use crate::types::ValueType;

    fn module_with_functions(names: &[&str]) -> ModuleDef {
        let mut module = ModuleDef::default();
        for name in names {
            module.functions.push(FunctionDef::new(*name));
        }
        module
    }

    #[test]
    fn function_indices_in_declaration_order() {
        let module = module_with_functions(&["a", "b", "c"]);
        let spaces = IndexSpaces::build(&module).unwrap();
        assert_eq!(spaces.function("a").unwrap(), 0);
        assert_eq!(spaces.function("c").unwrap(), 2);
        // Function signatures double as type entries at the same index.
        assert_eq!(spaces.type_index("b").unwrap(), 1);
    }

    #[test]
    fn unresolved_name_reports_verbatim() {
        let module = module_with_functions(&["a"]);
        let spaces = IndexSpaces::build(&module).unwrap();
        let err = spaces.function("missing").unwrap_err();
        match err {
            EncodeError::UnresolvedName { space, name } => {
                assert_eq!(space, NameSpace::Function);
                assert_eq!(name, "missing");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_names_rejected() {
        let module = module_with_functions(&["dup", "dup"]);
        assert!(matches!(
            IndexSpaces::build(&module),
            Err(EncodeError::MalformedInput(_))
        ));
    }

    #[test]
    fn branch_depth_counts_from_innermost() {
        let module = ModuleDef::default();
        let spaces = IndexSpaces::build(&module).unwrap();
        let scope = EmitScope::module_scope(&spaces);
        let outer = scope.with_block("outer");
        let middle = outer.with_block("middle");
        let inner = middle.with_block("inner");

        assert_eq!(inner.branch_depth("inner").unwrap(), 0);
        assert_eq!(inner.branch_depth("middle").unwrap(), 1);
        assert_eq!(inner.branch_depth("outer").unwrap(), 2);
        assert!(matches!(
            inner.branch_depth("nowhere"),
            Err(EncodeError::UnresolvedName { .. })
        ));
    }

    #[test]
    fn sibling_blocks_are_isolated() {
        let module = ModuleDef::default();
        let spaces = IndexSpaces::build(&module).unwrap();
        let scope = EmitScope::module_scope(&spaces);
        let outer = scope.with_block("outer");
        let first = outer.with_block("first");
        let second = outer.with_block("second");

        assert!(first.branch_depth("second").is_err());
        assert!(second.branch_depth("first").is_err());
        assert_eq!(second.branch_depth("outer").unwrap(), 1);
    }

    #[test]
    fn locals_params_first() {
        let params = vec![
            ("x".to_string(), ValueType::I32),
            ("y".to_string(), ValueType::I32),
        ];
        let locals = vec![("tmp".to_string(), ValueType::I64)];
        let map = build_locals(&params, &locals).unwrap();
        assert_eq!(map["x"], 0);
        assert_eq!(map["y"], 1);
        assert_eq!(map["tmp"], 2);
    }

    #[test]
    fn duplicate_local_rejected() {
        let params = vec![("x".to_string(), ValueType::I32)];
        let locals = vec![("x".to_string(), ValueType::I32)];
        assert!(matches!(
            build_locals(&params, &locals),
            Err(EncodeError::MalformedInput(_))
        ));
    }
}
