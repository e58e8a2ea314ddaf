use super::*;
use crate::AccessPath;
use pretty_assertions::assert_eq;
use symval_ir::{IrTable, Span};

fn ir_with_literals() -> (IrTable, InstId, InstId, InstId) {
    let mut ir = IrTable::new();
    let int = ir.add_integer_literal(ApInt::from_u64(64, 7), Some(Span::new(0, 1)));
    let float = ir.add_float_literal(ApFloat::from_f64(0.5), None);
    let string = ir.add_string_literal("lit", None);
    (ir, int, float, string)
}

#[test]
fn test_direct_factories_roundtrip() {
    let node = NodeId::new(3);
    let ty = TypeId::new(4);
    let func = FuncId::new(5);
    let case = EnumCaseId::new(6);

    assert_eq!(SymbolicValue::metatype(ty).kind(), Kind::Metatype);
    assert_eq!(SymbolicValue::metatype(ty).metatype_value(), ty);
    assert_eq!(SymbolicValue::function(func).kind(), Kind::Function);
    assert_eq!(SymbolicValue::function(func).function_value(), func);
    assert_eq!(SymbolicValue::enum_case(case).kind(), Kind::Enum);
    assert_eq!(SymbolicValue::uninit_memory().kind(), Kind::UninitMemory);

    let unknown = SymbolicValue::unknown(node, UnknownReason::Loop);
    assert_eq!(unknown.kind(), Kind::Unknown);
    assert!(unknown.is_unknown());
    assert_eq!(unknown.unknown_value(), (node, UnknownReason::Loop));
}

#[test]
fn test_unknown_reason_roundtrip() {
    for (i, reason) in UnknownReason::ALL.iter().enumerate() {
        let node = NodeId::new(100 + u32::try_from(i).unwrap_or(0));
        let value = SymbolicValue::unknown(node, *reason);
        assert_eq!(value.unknown_value(), (node, *reason));
        assert_eq!(value.as_unknown(), Some((node, *reason)));
    }
}

#[test]
fn test_default_reason_is_unclassified() {
    assert_eq!(UnknownReason::default(), UnknownReason::Unclassified);
}

#[test]
fn test_is_constant_per_kind() {
    let mut arena = ConstArena::new();
    let (ir, int_inst, _, _) = ir_with_literals();
    let values = [
        SymbolicValue::unknown(NodeId::new(0), UnknownReason::Trap),
        SymbolicValue::uninit_memory(),
        SymbolicValue::metatype(TypeId::new(0)),
        SymbolicValue::function(FuncId::new(0)),
        SymbolicValue::constant_inst(int_inst, &ir),
        SymbolicValue::integer(&ApInt::from_u64(8, 1), &mut arena),
        SymbolicValue::float(&ApFloat::from_f32(1.0), &mut arena),
        SymbolicValue::string("s", &mut arena),
        SymbolicValue::aggregate(&[], &mut arena),
        SymbolicValue::enum_case(EnumCaseId::new(0)),
        SymbolicValue::enum_with_payload(
            EnumCaseId::new(1),
            SymbolicValue::function(FuncId::new(2)),
            &mut arena,
        ),
        SymbolicValue::address(ObjectId::new(0)),
        SymbolicValue::address_with_path(ObjectId::new(0), &[1], &mut arena),
    ];
    for value in values {
        let expected = !matches!(value.kind(), Kind::Unknown | Kind::UninitMemory);
        assert_eq!(value.is_constant(), expected, "{:?}", value.kind());
    }
    assert!(!Kind::Unknown.is_constant());
    assert!(!Kind::UninitMemory.is_constant());
}

#[test]
fn test_arena_scalars_roundtrip() {
    let mut arena = ConstArena::new();
    let ir = IrTable::new();
    let wide = ApInt::from_str_radix("123456789012345678901234567890", 10, 128);
    let Ok(wide) = wide else {
        panic!("literal should parse");
    };

    let int = SymbolicValue::integer(&wide, &mut arena);
    let float = SymbolicValue::float(&ApFloat::from_f64(-2.5), &mut arena);
    let string = SymbolicValue::string("héllo", &mut arena);

    let cx = ConstCx::new(&arena, &ir);
    assert_eq!(int.kind(), Kind::Integer);
    assert_eq!(int.integer_value(cx), wide);
    assert_eq!(float.kind(), Kind::Float);
    assert_eq!(float.float_value(cx), ApFloat::from_f64(-2.5));
    assert_eq!(string.kind(), Kind::String);
    assert_eq!(string.string_value(cx), "héllo");
    assert_eq!(int.constant_inst_if_present(), None);
}

#[test]
fn test_constant_inst_reads_through_ir() {
    let arena = ConstArena::new();
    let (ir, int_inst, float_inst, string_inst) = ir_with_literals();
    let cx = ConstCx::new(&arena, &ir);

    let int = SymbolicValue::constant_inst(int_inst, &ir);
    let float = SymbolicValue::constant_inst(float_inst, &ir);
    let string = SymbolicValue::constant_inst(string_inst, &ir);

    assert_eq!(int.kind(), Kind::Integer);
    assert_eq!(int.integer_value(cx), ApInt::from_u64(64, 7));
    assert_eq!(float.kind(), Kind::Float);
    assert_eq!(float.float_value(cx), ApFloat::from_f64(0.5));
    assert_eq!(string.kind(), Kind::String);
    assert_eq!(string.string_value(cx), "lit");
    assert_eq!(string.constant_inst_if_present(), Some(string_inst));
    assert!(arena.is_empty());
}

#[test]
#[should_panic(expected = "is not a literal instruction")]
fn test_constant_inst_rejects_non_literal() {
    let mut ir = IrTable::new();
    let node = ir.add_node("call to @f", None);
    let _ = SymbolicValue::constant_inst(InstId::new(node.raw()), &ir);
}

#[test]
fn test_enum_with_payload_scenario() {
    let mut arena = ConstArena::new();
    let ir = IrTable::new();
    let case_x = EnumCaseId::new(9);
    let payload = SymbolicValue::integer(&ApInt::from_u64(32, 42), &mut arena);
    let value = SymbolicValue::enum_with_payload(case_x, payload, &mut arena);

    assert_eq!(value.kind(), Kind::EnumWithPayload);
    assert_eq!(value.enum_value(&arena), case_x);
    let cx = ConstCx::new(&arena, &ir);
    let inner = value.enum_payload_value(&arena);
    assert_eq!(inner.integer_value(cx).to_u64(), Some(42));
}

#[test]
fn test_enum_value_without_payload() {
    let arena = ConstArena::new();
    let case = EnumCaseId::new(1);
    assert_eq!(SymbolicValue::enum_case(case).enum_value(&arena), case);
}

#[test]
fn test_empty_aggregate() {
    let mut arena = ConstArena::new();
    let value = SymbolicValue::aggregate(&[], &mut arena);
    assert_eq!(value.kind(), Kind::Aggregate);
    assert!(value.aggregate_value(&arena).is_empty());
    assert!(value.is_constant());
}

#[test]
fn test_nested_aggregate_with_unknown() {
    let mut arena = ConstArena::new();
    let ir = IrTable::new();
    let a = SymbolicValue::integer(&ApInt::from_u64(8, 1), &mut arena);
    let b = SymbolicValue::unknown(NodeId::new(2), UnknownReason::Overflow);
    let inner = SymbolicValue::aggregate(&[a, b], &mut arena);
    let c = SymbolicValue::string("c", &mut arena);
    let outer = SymbolicValue::aggregate(&[inner, c], &mut arena);

    let cx = ConstCx::new(&arena, &ir);
    let elements = outer.aggregate_value(&arena);
    assert_eq!(elements.len(), 2);
    assert_eq!(cx.view(elements[0]), cx.view(inner));
    assert_eq!(cx.view(elements[1]), cx.view(c));

    let nested = elements[0].aggregate_value(&arena);
    assert_eq!(nested[0].integer_value(cx), ApInt::from_u64(8, 1));
    assert_eq!(nested[1].unknown_value(), (NodeId::new(2), UnknownReason::Overflow));
}

#[test]
fn test_address_paths() {
    let mut arena = ConstArena::new();
    let id = ObjectId::new(12);

    let derived = SymbolicValue::address_with_path(id, &[1, 2, 3], &mut arena);
    let mut path = AccessPath::new();
    assert_eq!(derived.address_value(&arena, &mut path), id);
    assert_eq!(path.as_slice(), &[1, 2, 3]);

    let direct = SymbolicValue::address(id);
    let mut empty: Vec<u32> = Vec::new();
    assert_eq!(direct.address_value(&arena, &mut empty), id);
    assert!(empty.is_empty());

    let bare = SymbolicValue::address_with_path(id, &[], &mut arena);
    assert_eq!(bare.address_value_object_id(&arena), direct.address_value_object_id(&arena));
    assert_eq!(derived.as_address_object_id(&arena), Some(id));
    assert_eq!(direct.kind(), Kind::Address);
    assert_eq!(derived.kind(), Kind::Address);
}

#[test]
fn test_address_value_appends() {
    let mut arena = ConstArena::new();
    let value = SymbolicValue::address_with_path(ObjectId::new(1), &[5], &mut arena);
    let mut path = vec![9];
    value.address_value(&arena, &mut path);
    assert_eq!(path, vec![9, 5]);
}

#[test]
fn test_option_accessors_on_wrong_kind() {
    let arena = ConstArena::new();
    let value = SymbolicValue::uninit_memory();
    assert_eq!(value.as_unknown(), None);
    assert_eq!(value.as_metatype(), None);
    assert_eq!(value.as_function(), None);
    assert_eq!(value.as_address_object_id(&arena), None);
    assert_eq!(value.constant_inst_if_present(), None);
}

#[test]
#[should_panic(expected = "expected integer value, found string")]
fn test_integer_accessor_on_string_panics() {
    let mut arena = ConstArena::new();
    let ir = IrTable::new();
    let value = SymbolicValue::string("x", &mut arena);
    let _ = value.integer_value(ConstCx::new(&arena, &ir));
}

#[test]
#[should_panic(expected = "expected enum_with_payload value, found enum")]
fn test_payload_accessor_on_plain_enum_panics() {
    let arena = ConstArena::new();
    let _ = SymbolicValue::enum_case(EnumCaseId::new(0)).enum_payload_value(&arena);
}

#[test]
#[should_panic(expected = "expected unknown value")]
fn test_unknown_accessor_on_constant_panics() {
    let _ = SymbolicValue::function(FuncId::new(0)).unknown_value();
}

#[test]
#[should_panic(expected = "did not allocate it")]
fn test_reading_after_reset_panics() {
    let mut arena = ConstArena::new();
    let value = SymbolicValue::aggregate(&[SymbolicValue::uninit_memory()], &mut arena);
    arena.reset();
    let _ = value.aggregate_value(&arena);
}

#[test]
fn test_kind_names() {
    assert_eq!(Kind::EnumWithPayload.to_string(), "enum_with_payload");
    assert_eq!(Kind::ALL.len(), 11);
    assert_eq!(UnknownReason::TooManyInstructions.to_string(), "too_many_instructions");
}
