//! `ref.*` constructors: null references, function references, and the GC
//! test/cast family. The nullable test/cast variants are separate
//! constructors selecting their own opcodes, so the emitter needs no
//! dispatch.

use super::leaf_ops;
use crate::instruction::{Immediates, Instruction};
use crate::types::HeapType;

/// `ref.null`; the immediate is the abstract heap-type id byte.
pub fn null(heap: HeapType) -> Instruction {
    Instruction::with("ref.null", Immediates::Heap(heap))
}

/// `ref.func`; the operand is a function name.
pub fn func(function: impl Into<String>) -> Instruction {
    Instruction::with("ref.func", Immediates::Func(function.into()))
}

/// `ref.test` on a non-nullable target.
pub fn test(heap: HeapType) -> Instruction {
    Instruction::with("ref.test", Immediates::Heap(heap))
}

/// `ref.test` on a nullable target.
pub fn test_null(heap: HeapType) -> Instruction {
    Instruction::with("ref.test_null", Immediates::Heap(heap))
}

/// `ref.cast` to a non-nullable target.
pub fn cast(heap: HeapType) -> Instruction {
    Instruction::with("ref.cast", Immediates::Heap(heap))
}

/// `ref.cast` to a nullable target.
pub fn cast_null(heap: HeapType) -> Instruction {
    Instruction::with("ref.cast_null", Immediates::Heap(heap))
}

leaf_ops! {
    is_null => "ref.is_null",
    eq => "ref.eq",
    as_non_null => "ref.as_non_null",
    i31 => "ref.i31",
}
