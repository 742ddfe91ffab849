//! `memory.*` constructors; operands are memory and data-segment names.

use crate::instruction::{Immediates, Instruction};

pub fn size(memory: impl Into<String>) -> Instruction {
    Instruction::with("memory.size", Immediates::Memory(memory.into()))
}

pub fn grow(memory: impl Into<String>) -> Instruction {
    Instruction::with("memory.grow", Immediates::Memory(memory.into()))
}

pub fn fill(memory: impl Into<String>) -> Instruction {
    Instruction::with("memory.fill", Immediates::Memory(memory.into()))
}

/// Copies a data segment into a memory; emitted as data index then memory
/// index.
pub fn init(data: impl Into<String>, memory: impl Into<String>) -> Instruction {
    Instruction::with(
        "memory.init",
        Immediates::MemoryInit {
            data: data.into(),
            memory: memory.into(),
        },
    )
}

/// Copies between memories; emitted as destination then source index, each
/// resolved from its own name.
pub fn copy(dst: impl Into<String>, src: impl Into<String>) -> Instruction {
    Instruction::with(
        "memory.copy",
        Immediates::MemoryCopy {
            dst: dst.into(),
            src: src.into(),
        },
    )
}

/// `memory.atomic.*`: notify and wait take memargs like every other memory
/// access.
pub mod atomic {
    use crate::op::memarg_ops;

    memarg_ops! {
        notify => "memory.atomic.notify",
        wait32 => "memory.atomic.wait32",
        wait64 => "memory.atomic.wait64",
    }
}
