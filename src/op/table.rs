//! `table.*` constructors; operands are table and element-segment names.

use crate::instruction::{Immediates, Instruction};

pub fn get(table: impl Into<String>) -> Instruction {
    Instruction::with("table.get", Immediates::Table(table.into()))
}

pub fn set(table: impl Into<String>) -> Instruction {
    Instruction::with("table.set", Immediates::Table(table.into()))
}

/// Copies an element segment into a table; emitted as element index then
/// table index.
pub fn init(table: impl Into<String>, elem: impl Into<String>) -> Instruction {
    Instruction::with(
        "table.init",
        Immediates::TableInit {
            elem: elem.into(),
            table: table.into(),
        },
    )
}

/// Copies between tables; emitted as destination then source index.
pub fn copy(dst: impl Into<String>, src: impl Into<String>) -> Instruction {
    Instruction::with(
        "table.copy",
        Immediates::TableCopy {
            dst: dst.into(),
            src: src.into(),
        },
    )
}

pub fn grow(table: impl Into<String>) -> Instruction {
    Instruction::with("table.grow", Immediates::Table(table.into()))
}

pub fn size(table: impl Into<String>) -> Instruction {
    Instruction::with("table.size", Immediates::Table(table.into()))
}

pub fn fill(table: impl Into<String>) -> Instruction {
    Instruction::with("table.fill", Immediates::Table(table.into()))
}
