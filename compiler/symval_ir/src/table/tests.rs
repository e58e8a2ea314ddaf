use super::*;
use crate::LiteralKind;
use pretty_assertions::assert_eq;

#[test]
fn test_literal_lookup() {
    let mut ir = IrTable::new();
    let int = ir.add_integer_literal(ApInt::from_u64(32, 42), Some(Span::new(0, 2)));
    let float = ir.add_float_literal(ApFloat::from_f64(1.5), None);
    let string = ir.add_string_literal("hi", None);
    let plain = ir.add_node("apply @f", None);

    assert_eq!(ir.literal(int), Some(Literal::Integer(&ApInt::from_u64(32, 42))));
    assert_eq!(ir.literal(float).map(|l| l.kind()), Some(LiteralKind::Float));
    assert_eq!(ir.literal(string), Some(Literal::String("hi")));
    assert_eq!(ir.literal(InstId::new(plain.raw())), None);
    assert_eq!(ir.node_count(), 4);
}

#[test]
fn test_literal_out_of_range_is_none() {
    let ir = IrTable::new();
    assert_eq!(ir.literal(InstId::new(3)), None);
    assert_eq!(ir.node_span(NodeId::new(3)), None);
}

#[test]
fn test_node_span_and_description() {
    let mut ir = IrTable::new();
    let node = ir.add_node("builtin.sadd_with_overflow", Some(Span::new(4, 9)));
    let silent = ir.add_node("struct_extract", None);

    assert_eq!(ir.node_span(node), Some(Span::new(4, 9)));
    assert_eq!(ir.node_span(silent), None);
    assert_eq!(
        ir.node_description(node).as_deref(),
        Some("builtin.sadd_with_overflow")
    );
}

#[test]
fn test_literal_descriptions() {
    let mut ir = IrTable::new();
    let int = ir.add_integer_literal(ApInt::from_i64(8, -1), None);
    let string = ir.add_string_literal("a\"b", None);
    assert_eq!(
        ir.node_description(int.as_node()).as_deref(),
        Some("integer_literal -1")
    );
    assert_eq!(
        ir.node_description(string.as_node()).as_deref(),
        Some("string_literal \"a\\\"b\"")
    );
}

#[test]
fn test_names() {
    let mut ir = IrTable::new();
    let ty = ir.add_type("Int64");
    let func = ir.add_function("main");
    let case = ir.add_enum_case("Optional", "some");

    assert_eq!(ir.type_name(ty), "Int64");
    assert_eq!(ir.function_name(func), "main");
    assert_eq!(ir.enum_case_name(case), "Optional.some");
    assert_eq!(ir.type_name(TypeId::new(9)), "type#9");
    assert_eq!(ir.enum_case_name(EnumCaseId::new(9)), "case#9");
}
