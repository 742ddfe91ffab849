//! Encoder tests: concrete byte scenarios, section ordering, resolution
//! failures, and third-party validation.
//!
//! Testing strategy: the module definitions here are small enough that the
//! expected binary can be written out by hand, so most tests assert exact
//! bytes. Where a body is long, the test pins the structurally interesting
//! spans and hands the whole module to `wasmparser` to confirm a reference
//! decoder accepts it.

#[cfg(test)]
mod tests {
    use wembly::{
        encode_module, op, BlockType, CustomSection, DataDef, DataMode, ElementDef, ElementInit,
        ElementMode, EncodeError, Encoder, FieldType, FunctionDef, GlobalDef, ImportDef,
        ImportKind, Limits, MemoryDef, ModuleDef, RefType, StorageType, SubType, TableDef,
        TypeDef, ValueType,
    };
    use wembly::{CompositeType, HeapType};

    // =======================================================================
    // Helpers
    // =======================================================================

    /// True if `needle` appears as a contiguous byte run in `haystack`.
    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    /// Walks the section framing and returns the section ids in order.
    fn section_ids(bytes: &[u8]) -> Vec<u8> {
        let mut ids = Vec::new();
        let mut i = 8;
        while i < bytes.len() {
            let id = bytes[i];
            i += 1;
            let mut len: u64 = 0;
            let mut shift = 0;
            loop {
                let byte = bytes[i];
                i += 1;
                len |= ((byte & 0x7f) as u64) << shift;
                shift += 7;
                if byte & 0x80 == 0 {
                    break;
                }
            }
            i += len as usize;
            ids.push(id);
        }
        assert_eq!(i, bytes.len(), "trailing bytes after last section");
        ids
    }

    fn validate(bytes: &[u8]) {
        wasmparser::validate(bytes).unwrap_or_else(|e| panic!("validation failed: {e}"));
    }

    // =======================================================================
    // Concrete scenarios
    // =======================================================================

    #[test]
    fn empty_module_is_preamble_only() {
        let bytes = encode_module(&ModuleDef::new()).unwrap();
        assert_eq!(bytes, hex::decode("0061736d01000000").unwrap());
        assert_eq!(bytes.len(), 8);
        validate(&bytes);
    }

    #[test]
    fn do_nothing_function() {
        let mut module = ModuleDef::new();
        module.functions.push(
            FunctionDef::new("doNothing")
                .exported()
                .returns(ValueType::I32)
                .body(vec![op::i32::const_(0), op::end()]),
        );

        let bytes = encode_module(&module).unwrap();
        let expected = hex::decode(concat!(
            "0061736d01000000",               // preamble
            "0105016000017f",                 // type: () -> i32
            "03020100",                       // function: type 0
            "070d0109646f4e6f7468696e670000", // export "doNothing" func 0
            "0a0601040041000b",               // code: [i32.const 0, end]
        ))
        .unwrap();
        assert_eq!(bytes, expected);
        validate(&bytes);
    }

    #[test]
    fn add_function() {
        let mut module = ModuleDef::new();
        module.functions.push(
            FunctionDef::new("add")
                .exported()
                .param("num1", ValueType::I32)
                .param("num2", ValueType::I32)
                .returns(ValueType::I32)
                .body(vec![
                    op::local::get("num1"),
                    op::local::get("num2"),
                    op::i32::add(),
                    op::end(),
                ]),
        );

        let bytes = encode_module(&module).unwrap();
        let expected = hex::decode(concat!(
            "0061736d01000000",
            "01070160027f7f017f",     // type: (i32, i32) -> i32
            "03020100",
            "070701036164640000",     // export "add" func 0
            "0a09010700200020016a0b", // locals 0; get 0; get 1; i32.add; end
        ))
        .unwrap();
        assert_eq!(bytes, expected);
        validate(&bytes);
    }

    #[test]
    fn is_greater_than_with_if_else() {
        let mut module = ModuleDef::new();
        module.functions.push(
            FunctionDef::new("isGreaterThan")
                .exported()
                .param("num1", ValueType::I32)
                .param("num2", ValueType::I32)
                .returns(ValueType::I32)
                .body(vec![
                    op::local::get("num1"),
                    op::local::get("num2"),
                    op::i32::gt_s(),
                    op::if_(
                        "pick",
                        BlockType::Value(ValueType::I32),
                        vec![
                            op::i32::const_(1),
                            op::else_(),
                            op::i32::const_(0),
                            op::end(),
                        ],
                    ),
                    op::end(),
                ]),
        );

        let bytes = encode_module(&module).unwrap();
        let expected = hex::decode(concat!(
            "0061736d01000000",
            "01070160027f7f017f",
            "03020100",
            "0711010d6973477265617465725468616e0000",
            // locals 0; get 0; get 1; gt_s; if (result i32); const 1; else;
            // const 0; end; end
            "0a11010f00200020014a047f41010541000b0b",
        ))
        .unwrap();
        assert_eq!(bytes, expected);
        // The i32 block type must be the raw value-type byte.
        assert!(contains(&bytes, &[0x04, 0x7f]));
        validate(&bytes);
    }

    #[test]
    fn add10_k_times_loop() {
        let mut module = ModuleDef::new();
        module.functions.push(
            FunctionDef::new("add10_KTimes")
                .exported()
                .param("num", ValueType::I32)
                .param("times", ValueType::I32)
                .returns(ValueType::I32)
                .local("counter", ValueType::I32)
                .body(vec![
                    op::block(
                        "done",
                        BlockType::Empty,
                        vec![
                            op::loop_(
                                "top",
                                BlockType::Empty,
                                vec![
                                    op::local::get("counter"),
                                    op::local::get("times"),
                                    op::i32::ge_u(),
                                    op::br_if("done"),
                                    op::local::get("num"),
                                    op::i32::const_(10),
                                    op::i32::add(),
                                    op::local::set("num"),
                                    op::local::get("counter"),
                                    op::i32::const_(1),
                                    op::i32::add(),
                                    op::local::set("counter"),
                                    op::br("top"),
                                    op::end(),
                                ],
                            ),
                            op::end(),
                        ],
                    ),
                    op::local::get("num"),
                    op::end(),
                ]),
        );

        let bytes = encode_module(&module).unwrap();
        let code_section = hex::decode(concat!(
            "0a250123",
            "01017f", // one locals group: 1 x i32
            "0240",   // block (empty)
            "0340",   // loop (empty)
            "2002",   // local.get counter
            "2001",   // local.get times
            "4f",     // i32.ge_u
            "0d01",   // br_if done (depth 1)
            "2000",   // local.get num
            "410a",   // i32.const 10
            "6a",     // i32.add
            "2100",   // local.set num
            "2002",   // local.get counter
            "4101",   // i32.const 1
            "6a",     // i32.add
            "2102",   // local.set counter
            "0c00",   // br top (depth 0)
            "0b0b",   // end loop, end block
            "2000",   // local.get num
            "0b",     // end function
        ))
        .unwrap();
        assert!(
            bytes.ends_with(&code_section),
            "code section mismatch:\n  got {}",
            hex::encode(&bytes)
        );
        validate(&bytes);
    }

    #[test]
    fn br_table_depths() {
        let mut module = ModuleDef::new();
        module.functions.push(
            FunctionDef::new("dispatch")
                .param("selector", ValueType::I32)
                .body(vec![
                    op::block(
                        "a",
                        BlockType::Empty,
                        vec![
                            op::block(
                                "b",
                                BlockType::Empty,
                                vec![
                                    op::block(
                                        "c",
                                        BlockType::Empty,
                                        vec![
                                            op::local::get("selector"),
                                            op::br_table(&["a", "c"], "b"),
                                            op::end(),
                                        ],
                                    ),
                                    op::end(),
                                ],
                            ),
                            op::end(),
                        ],
                    ),
                    op::end(),
                ]),
        );

        let bytes = encode_module(&module).unwrap();
        // Stack innermost-first is [c, b, a]: a = 2, c = 0, default b = 1.
        assert!(contains(&bytes, &[0x0e, 0x02, 0x02, 0x00, 0x01]));
        validate(&bytes);
    }

    // =======================================================================
    // Determinism and ordering
    // =======================================================================

    fn kitchen_sink_module() -> ModuleDef {
        let mut module = ModuleDef::new();
        module.functions.push(
            FunctionDef::new("noop").body(vec![op::end()]),
        );
        module.functions.push(
            FunctionDef::new("main")
                .exported()
                .returns(ValueType::I32)
                .body(vec![op::i32::const_(7), op::end()]),
        );
        module.imports.push(ImportDef::new(
            "env",
            "tick",
            ImportKind::Function {
                type_name: "noop".to_string(),
            },
        ));
        module.tables.push(TableDef::new(
            "calls",
            RefType::FUNCREF,
            Limits::bounded(1, 1),
        ));
        module.memories.push(MemoryDef::new("heap", Limits::at_least(1)));
        module.globals.push(GlobalDef::new(
            "answer",
            ValueType::I32,
            false,
            vec![op::i32::const_(42), op::end()],
        ));
        module.start = Some("noop".to_string());
        module.elements.push(ElementDef::new(
            "boot",
            ElementMode::Active {
                table: None,
                offset: vec![op::i32::const_(0), op::end()],
            },
            ElementInit::Functions(vec!["noop".to_string()]),
        ));
        module.data.push(DataDef::new(
            "greeting",
            DataMode::Active {
                memory: None,
                offset: vec![op::i32::const_(0), op::end()],
            },
            b"hi".to_vec(),
        ));
        module
            .custom_sections
            .push(CustomSection::new("producers", vec![0x00]));
        module
    }

    #[test]
    fn encoding_is_deterministic() {
        let module = kitchen_sink_module();
        let first = encode_module(&module).unwrap();
        let second = encode_module(&module).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn sections_emitted_in_wire_order() {
        let bytes = encode_module(&kitchen_sink_module()).unwrap();
        assert_eq!(section_ids(&bytes), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 12, 10, 11, 0]);
        validate(&bytes);
    }

    #[test]
    fn empty_sections_are_omitted() {
        let mut module = ModuleDef::new();
        module.memories.push(MemoryDef::new("m", Limits::at_least(1)));
        let bytes = encode_module(&module).unwrap();
        assert_eq!(section_ids(&bytes), vec![5]);
        validate(&bytes);
    }

    /// The DataCount section tracks the presence of data segments.
    #[test]
    fn data_count_follows_data_presence() {
        let mut module = ModuleDef::new();
        module.memories.push(MemoryDef::new("m", Limits::at_least(1)));
        module.data.push(DataDef::new(
            "seg",
            DataMode::Passive,
            vec![1, 2, 3],
        ));
        let bytes = encode_module(&module).unwrap();
        assert_eq!(section_ids(&bytes), vec![5, 12, 11]);
        validate(&bytes);
    }

    #[test]
    fn incremental_encoder_interleaves_custom_sections() {
        let mut module = ModuleDef::new();
        module.functions.push(
            FunctionDef::new("one")
                .returns(ValueType::I32)
                .body(vec![op::i32::const_(1), op::end()]),
        );

        let mut encoder = Encoder::new(&module).unwrap();
        encoder.write_preamble();
        encoder.write_type_section().unwrap();
        encoder.write_function_section();
        encoder.write_custom_section("notes", b"mid-stream");
        encoder.write_code_section().unwrap();
        let bytes = encoder.finish();

        assert_eq!(section_ids(&bytes), vec![1, 3, 0, 10]);
        validate(&bytes);
    }

    // =======================================================================
    // Resolution failures
    // =======================================================================

    fn unresolved_name(err: EncodeError) -> String {
        match err {
            EncodeError::UnresolvedName { name, .. } => name,
            other => panic!("expected UnresolvedName, got: {other:?}"),
        }
    }

    #[test]
    fn unknown_call_target_fails() {
        let mut module = ModuleDef::new();
        module.functions.push(
            FunctionDef::new("caller").body(vec![op::call("missing"), op::end()]),
        );
        let err = encode_module(&module).unwrap_err();
        assert_eq!(unresolved_name(err), "missing");
    }

    #[test]
    fn unknown_local_fails() {
        let mut module = ModuleDef::new();
        module.functions.push(
            FunctionDef::new("f").body(vec![op::local::get("ghost"), op::end()]),
        );
        let err = encode_module(&module).unwrap_err();
        assert_eq!(unresolved_name(err), "ghost");
    }

    #[test]
    fn unknown_start_function_fails() {
        let mut module = ModuleDef::new();
        module.start = Some("nonexistent".to_string());
        let err = encode_module(&module).unwrap_err();
        assert_eq!(unresolved_name(err), "nonexistent");
    }

    #[test]
    fn unknown_element_function_fails() {
        let mut module = ModuleDef::new();
        module.tables.push(TableDef::new(
            "t",
            RefType::FUNCREF,
            Limits::at_least(1),
        ));
        module.elements.push(ElementDef::new(
            "e",
            ElementMode::Active {
                table: None,
                offset: vec![op::i32::const_(0), op::end()],
            },
            ElementInit::Functions(vec!["absent".to_string()]),
        ));
        let err = encode_module(&module).unwrap_err();
        assert_eq!(unresolved_name(err), "absent");
    }

    #[test]
    fn duplicate_function_names_rejected() {
        let mut module = ModuleDef::new();
        module.functions.push(FunctionDef::new("twice").body(vec![op::end()]));
        module.functions.push(FunctionDef::new("twice").body(vec![op::end()]));
        assert!(matches!(
            encode_module(&module),
            Err(EncodeError::MalformedInput(_))
        ));
    }

    #[test]
    fn partial_output_is_not_returned() {
        let mut module = ModuleDef::new();
        module.functions.push(
            FunctionDef::new("broken").body(vec![op::call("missing"), op::end()]),
        );
        assert!(encode_module(&module).is_err());
    }

    // =======================================================================
    // Globals, tables, memories, segments
    // =======================================================================

    #[test]
    fn global_section_bytes() {
        let mut module = ModuleDef::new();
        module.globals.push(
            GlobalDef::new(
                "counter",
                ValueType::I64,
                true,
                vec![op::i64::const_(0), op::end()],
            )
            .exported(),
        );

        let bytes = encode_module(&module).unwrap();
        // global: i64, mutable, [i64.const 0, end]
        assert!(contains(&bytes, &[0x06, 0x06, 0x01, 0x7e, 0x01, 0x42, 0x00, 0x0b]));
        // export: "counter" kind 3 index 0
        assert!(contains(
            &bytes,
            &[0x01, 0x07, b'c', b'o', b'u', b'n', b't', b'e', b'r', 0x03, 0x00]
        ));
        validate(&bytes);
    }

    #[test]
    fn passive_and_explicit_memory_data_segments() {
        let mut module = ModuleDef::new();
        module.memories.push(MemoryDef::new("a", Limits::at_least(1)));
        module.data.push(DataDef::new("p", DataMode::Passive, vec![0xAA]));
        module.data.push(DataDef::new(
            "q",
            DataMode::Active {
                memory: Some("a".to_string()),
                offset: vec![op::i32::const_(8), op::end()],
            },
            vec![0xBB, 0xCC],
        ));

        let bytes = encode_module(&module).unwrap();
        // passive: flags 1, one byte
        assert!(contains(&bytes, &[0x01, 0x01, 0xAA]));
        // explicit: flags 2, memory 0, [i32.const 8, end], two bytes
        assert!(contains(&bytes, &[0x02, 0x00, 0x41, 0x08, 0x0b, 0x02, 0xBB, 0xCC]));
        validate(&bytes);
    }

    #[test]
    fn element_expression_variant() {
        let mut module = ModuleDef::new();
        module.functions.push(FunctionDef::new("f").body(vec![op::end()]));
        module.elements.push(
            ElementDef::new(
                "refs",
                ElementMode::Passive,
                ElementInit::Expressions(vec![vec![op::ref_::func("f"), op::end()]]),
            )
            .ref_type(RefType::FUNCREF),
        );

        let bytes = encode_module(&module).unwrap();
        // flags 5, funcref, 1 expr: [ref.func 0, end]
        assert!(contains(&bytes, &[0x05, 0x70, 0x01, 0xd2, 0x00, 0x0b]));
    }

    #[test]
    fn declarative_element_variant() {
        let mut module = ModuleDef::new();
        module.functions.push(FunctionDef::new("f").body(vec![op::end()]));
        module.elements.push(ElementDef::new(
            "declared",
            ElementMode::Declarative,
            ElementInit::Functions(vec!["f".to_string()]),
        ));

        let bytes = encode_module(&module).unwrap();
        // flags 3, elemkind 0, one func index
        assert!(contains(&bytes, &[0x09, 0x05, 0x01, 0x03, 0x00, 0x01, 0x00]));
        validate(&bytes);
    }

    // =======================================================================
    // GC types
    // =======================================================================

    #[test]
    fn struct_type_and_instructions() {
        let mut module = ModuleDef::new();
        module.custom_types.push(TypeDef::sub(
            "point",
            SubType::plain(CompositeType::Struct(vec![
                FieldType::new(StorageType::Val(ValueType::I32), true),
                FieldType::new(StorageType::Val(ValueType::I32), true),
            ])),
        ));
        module.functions.push(
            FunctionDef::new("origin").body(vec![
                op::i32::const_(0),
                op::i32::const_(0),
                op::struct_::new("point"),
                op::drop(),
                op::end(),
            ]),
        );

        let bytes = encode_module(&module).unwrap();
        // type section: function signature then the struct shape
        assert!(contains(&bytes, &[0x60, 0x00, 0x00, 0x5f, 0x02, 0x7f, 0x01, 0x7f, 0x01]));
        // struct.new with type index 1 (one function signature precedes it)
        assert!(contains(&bytes, &[0xfb, 0x00, 0x01]));
    }

    #[test]
    fn recursive_type_group() {
        let mut module = ModuleDef::new();
        module.custom_types.push(TypeDef::rec(
            "tree",
            vec![
                SubType {
                    composite: CompositeType::Array(FieldType::new(StorageType::I8, false)),
                    supertypes: vec![],
                    is_final: false,
                },
                SubType::plain(CompositeType::Array(FieldType::new(StorageType::I16, true))),
            ],
        ));

        let bytes = encode_module(&module).unwrap();
        // rec wrapper, 2 subtypes: open array(i8 const), final array(i16 mut)
        assert!(contains(
            &bytes,
            &[0x4e, 0x02, 0x50, 0x00, 0x5e, 0x78, 0x00, 0x5e, 0x77, 0x01]
        ));
    }

    #[test]
    fn ref_cast_family_bytes() {
        let mut module = ModuleDef::new();
        module.functions.push(
            FunctionDef::new("probe")
                .param("r", ValueType::Ref(RefType::Short(wembly::Heap::Id(HeapType::Any))))
                .returns(ValueType::I32)
                .body(vec![
                    op::local::get("r"),
                    op::ref_::test_null(HeapType::I31),
                    op::end(),
                ]),
        );

        let bytes = encode_module(&module).unwrap();
        assert!(contains(&bytes, &[0xfb, 0x15, 0x6c]));
    }

    // =======================================================================
    // SIMD and atomics
    // =======================================================================

    #[test]
    fn simd_immediates() {
        let mut module = ModuleDef::new();
        module.memories.push(MemoryDef::new("m", Limits::at_least(1)));
        module.functions.push(
            FunctionDef::new("mix").body(vec![
                op::v128::const_([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]),
                op::v128::const_([0; 16]),
                op::i8x16::shuffle([0, 16, 1, 17, 2, 18, 3, 19, 4, 20, 5, 21, 6, 22, 7, 23]),
                op::f32x4::extract_lane(2),
                op::drop(),
                op::end(),
            ]),
        );

        let bytes = encode_module(&module).unwrap();
        // v128.const carries its 16 bytes verbatim
        assert!(contains(
            &bytes,
            &[0xfd, 0x0c, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]
        ));
        // shuffle: 16 raw lane indices
        assert!(contains(
            &bytes,
            &[0xfd, 0x0d, 0, 16, 1, 17, 2, 18, 3, 19, 4, 20, 5, 21, 6, 22, 7, 23]
        ));
        // f32x4.extract_lane 2
        assert!(contains(&bytes, &[0xfd, 0x1f, 0x02]));
    }

    #[test]
    fn wide_simd_subopcode_in_body() {
        let mut module = ModuleDef::new();
        module.functions.push(
            FunctionDef::new("sum").body(vec![
                op::v128::const_([0; 16]),
                op::v128::const_([0; 16]),
                op::f32x4::add(),
                op::drop(),
                op::end(),
            ]),
        );

        let bytes = encode_module(&module).unwrap();
        // f32x4.add is sub-opcode 228: 0xFD then two-byte LEB128
        assert!(contains(&bytes, &[0xfd, 0xe4, 0x01]));
    }

    #[test]
    fn atomic_immediates() {
        let mut module = ModuleDef::new();
        module.memories.push(MemoryDef::new("m", Limits::at_least(1)));
        module.functions.push(
            FunctionDef::new("bump").body(vec![
                op::i32::const_(0),
                op::i32::const_(1),
                op::i32::atomic::rmw::add(2, 0),
                op::drop(),
                op::atomic_fence(),
                op::end(),
            ]),
        );

        let bytes = encode_module(&module).unwrap();
        // i32.atomic.rmw.add align=2 offset=0
        assert!(contains(&bytes, &[0xfe, 0x1e, 0x02, 0x00]));
        // atomic.fence with its reserved zero byte
        assert!(contains(&bytes, &[0xfe, 0x03, 0x00]));
    }

    // =======================================================================
    // Tail calls and typed function references
    // =======================================================================

    #[test]
    fn tail_call_bytes() {
        let mut module = ModuleDef::new();
        module.functions.push(
            FunctionDef::new("leaf")
                .returns(ValueType::I32)
                .body(vec![op::i32::const_(3), op::end()]),
        );
        module.functions.push(
            FunctionDef::new("trampoline")
                .returns(ValueType::I32)
                .body(vec![op::return_call("leaf"), op::end()]),
        );

        let bytes = encode_module(&module).unwrap();
        assert!(contains(&bytes, &[0x12, 0x00]));
    }

    #[test]
    fn call_indirect_resolves_type_and_table() {
        let mut module = ModuleDef::new();
        module.functions.push(
            FunctionDef::new("target")
                .returns(ValueType::I32)
                .body(vec![op::i32::const_(9), op::end()]),
        );
        module.functions.push(
            FunctionDef::new("caller")
                .returns(ValueType::I32)
                .body(vec![
                    op::i32::const_(0),
                    op::call_indirect("target", "dispatch"),
                    op::end(),
                ]),
        );
        module.tables.push(TableDef::new(
            "dispatch",
            RefType::FUNCREF,
            Limits::at_least(1),
        ));

        let bytes = encode_module(&module).unwrap();
        // call_indirect: type 0 (target's signature), table 0
        assert!(contains(&bytes, &[0x11, 0x00, 0x00]));
        validate(&bytes);
    }

    // =======================================================================
    // Opcode coverage
    // =======================================================================

    /// A sweep of constructors across every family: each built instruction's
    /// mnemonic must resolve in the opcode registry.
    #[test]
    fn dsl_mnemonics_have_opcodes() {
        let samples = vec![
            op::unreachable(),
            op::nop(),
            op::block("b", BlockType::Empty, vec![]),
            op::loop_("l", BlockType::Empty, vec![]),
            op::if_("i", BlockType::Empty, vec![]),
            op::else_(),
            op::end(),
            op::br("x"),
            op::br_if("x"),
            op::br_table(&[], "x"),
            op::br_on_null("x"),
            op::br_on_non_null("x"),
            op::return_(),
            op::call("f"),
            op::call_indirect("t", "tbl"),
            op::call_ref("t"),
            op::return_call("f"),
            op::return_call_indirect("t", "tbl"),
            op::return_call_ref("t"),
            op::drop(),
            op::select(),
            op::select_with_type(vec![ValueType::I32]),
            op::atomic_fence(),
            op::local::get("x"),
            op::local::set("x"),
            op::local::tee("x"),
            op::global::get("g"),
            op::global::set("g"),
            op::table::get("t"),
            op::table::init("t", "e"),
            op::table::copy("t", "t"),
            op::table::fill("t"),
            op::elem::drop("e"),
            op::data::drop("d"),
            op::memory::size("m"),
            op::memory::grow("m"),
            op::memory::init("d", "m"),
            op::memory::copy("m", "m"),
            op::memory::fill("m"),
            op::memory::atomic::notify(2, 0),
            op::memory::atomic::wait64(3, 0),
            op::i32::const_(0),
            op::i32::load(2, 0),
            op::i32::popcnt(),
            op::i32::trunc_sat_f64_u(),
            op::i32::atomic::rmw16::cmpxchg_u(1, 0),
            op::i64::const_(0),
            op::i64::store32(2, 0),
            op::i64::extend32_s(),
            op::i64::atomic::rmw32::xchg_u(2, 0),
            op::f32::const_(0.0),
            op::f32::copysign(),
            op::f64::const_(0.0),
            op::f64::nearest(),
            op::v128::const_([0; 16]),
            op::v128::load64_lane(3, 0, 1),
            op::v128::bitselect(),
            op::i8x16::shuffle([0; 16]),
            op::i8x16::narrow_i16x8_s(),
            op::i16x8::q15mulr_sat_s(),
            op::i16x8::extmul_high_i8x16_u(),
            op::i32x4::dot_i16x8_s(),
            op::i32x4::relaxed_trunc_f32x4_s(),
            op::i64x2::extend_high_i32x4_u(),
            op::f32x4::pmax(),
            op::f32x4::relaxed_nmadd(),
            op::f64x2::convert_low_i32x4_u(),
            op::ref_::null(HeapType::Func),
            op::ref_::is_null(),
            op::ref_::func("f"),
            op::ref_::eq(),
            op::ref_::as_non_null(),
            op::ref_::test(HeapType::Struct),
            op::ref_::cast_null(HeapType::Array),
            op::ref_::i31(),
            op::br_on_cast(
                "x",
                wembly::CastType::nullable(HeapType::Any),
                wembly::CastType::non_nullable(HeapType::Eq),
            ),
            op::struct_::new("t"),
            op::struct_::get_s("t", 0),
            op::array::new_fixed("t", 2),
            op::array::new_elem("t", "e"),
            op::array::init_data("t", "d"),
            op::array::copy("t", "t"),
            op::array::len(),
            op::any::convert_extern(),
            op::extern_::convert_any(),
            op::i31::get_u(),
        ];
        for inst in &samples {
            assert!(
                wembly::opcodes::opcode(inst.mnemonic()).is_some(),
                "mnemonic missing from opcode table: {}",
                inst.mnemonic()
            );
        }
    }

    // =======================================================================
    // Select
    // =======================================================================

    #[test]
    fn typed_select_bytes() {
        let mut module = ModuleDef::new();
        module.functions.push(
            FunctionDef::new("pick")
                .param("c", ValueType::I32)
                .returns(ValueType::F64)
                .body(vec![
                    op::f64::const_(1.0),
                    op::f64::const_(2.0),
                    op::local::get("c"),
                    op::select_with_type(vec![ValueType::F64]),
                    op::end(),
                ]),
        );

        let bytes = encode_module(&module).unwrap();
        assert!(contains(&bytes, &[0x1c, 0x01, 0x7c]));
        validate(&bytes);
    }
}
