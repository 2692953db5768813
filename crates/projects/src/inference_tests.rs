use super::*;
use serde_json::json;
use yare::parameterized;

fn field(id: &str) -> FieldId {
    FieldId::new(id).unwrap()
}

#[parameterized(
    single_select = { "PVTSSF_lADO", Some(FieldIdKind::SingleSelect) },
    iteration = { "PVTIF_lADO", Some(FieldIdKind::Iteration) },
    text = { "PVTF_lADO", Some(FieldIdKind::Text) },
    date = { "PVTDF_lADO", Some(FieldIdKind::Date) },
    number = { "PVTNU_123", Some(FieldIdKind::Number) },
    unrecognized = { "PVTX_123", None },
    lowercase = { "pvtf_123", None },
)]
fn test_classify_field_id(id: &str, expected: Option<FieldIdKind>) {
    assert_eq!(classify_field_id(&field(id)), expected);
}

#[parameterized(
    single_select = { "PVTSSF_1", InputValue::from("opt_1"), FieldValueInput::SingleSelectOptionId("opt_1".to_string()) },
    iteration = { "PVTIF_1", InputValue::from("it_1"), FieldValueInput::IterationId("it_1".to_string()) },
    date = { "PVTDF_1", InputValue::from("2025-03-01"), FieldValueInput::Date("2025-03-01".to_string()) },
    number_from_integer = { "PVTNU_123", InputValue::Integer(42), FieldValueInput::Number(42.0) },
    number_from_float = { "PVTNU_123", InputValue::Float(2.5), FieldValueInput::Number(2.5) },
    text_from_text = { "PVTF_1", InputValue::from("hello"), FieldValueInput::Text("hello".to_string()) },
    text_from_integer = { "PVTF_1", InputValue::Integer(7), FieldValueInput::Text("7".to_string()) },
    text_from_bool = { "PVTF_1", InputValue::Bool(true), FieldValueInput::Text("true".to_string()) },
)]
fn test_infer_compatible_values(id: &str, value: InputValue, expected: FieldValueInput) {
    assert_eq!(infer_mutation_input(&field(id), value).unwrap(), expected);
}

#[parameterized(
    single_select_number = { "PVTSSF_1", InputValue::Integer(3) },
    iteration_float = { "PVTIF_1", InputValue::Float(1.5) },
    date_number = { "PVTDF_1", InputValue::Integer(20250301) },
    number_text = { "PVTNU_123", InputValue::from("not-a-number") },
    number_bool = { "PVTNU_123", InputValue::Bool(true) },
)]
fn test_infer_rejects_incompatible_values(id: &str, value: InputValue) {
    let err = infer_mutation_input(&field(id), value).unwrap_err();
    assert!(err.is_invalid_input(), "{err}");
    assert!(err.to_string().contains(id));
}

#[parameterized(
    text = { InputValue::from("anything") },
    integer = { InputValue::Integer(-1) },
    float = { InputValue::Float(0.25) },
    boolean = { InputValue::Bool(false) },
)]
fn test_unrecognized_prefix_always_falls_back_to_text(value: InputValue) {
    let expected = value.to_string();
    assert_eq!(
        infer_mutation_input(&field("CUSTOM_99"), value).unwrap(),
        FieldValueInput::Text(expected)
    );
}

fn numeric(raw: &str, value: f64) -> InputValue {
    InputValue::Numeric {
        raw: raw.to_string(),
        value,
    }
}

#[parameterized(
    integer = { "42", numeric("42", 42.0) },
    integral_float = { "42.0", numeric("42.0", 42.0) },
    float = { "2.5", numeric("2.5", 2.5) },
    negative = { "-3", numeric("-3", -3.0) },
    leading_zeros = { "007", numeric("007", 7.0) },
    text = { "not-a-number", InputValue::Text("not-a-number".to_string()) },
    infinity_is_text = { "inf", InputValue::Text("inf".to_string()) },
    option_id = { "f75ad846", InputValue::Text("f75ad846".to_string()) },
)]
fn test_parse_raw_value(raw: &str, expected: InputValue) {
    assert_eq!(InputValue::parse(raw), expected);
}

#[parameterized(
    number = { "PVTNU_123", "42", FieldValueInput::Number(42.0) },
    number_from_exponent = { "PVTNU_123", "1e3", FieldValueInput::Number(1000.0) },
    text_keeps_leading_zeros = { "PVTF_1", "007", FieldValueInput::Text("007".to_string()) },
    text_keeps_trailing_zero = { "PVTF_1", "42.0", FieldValueInput::Text("42.0".to_string()) },
    numeric_option_id = { "PVTSSF_1", "12345e67", FieldValueInput::SingleSelectOptionId("12345e67".to_string()) },
    numeric_iteration_id = { "PVTIF_1", "98765432", FieldValueInput::IterationId("98765432".to_string()) },
    unrecognized_prefix_keeps_raw = { "CUSTOM_1", "1.50", FieldValueInput::Text("1.50".to_string()) },
)]
fn test_infer_from_command_line_text(id: &str, raw: &str, expected: FieldValueInput) {
    assert_eq!(
        infer_mutation_input(&field(id), InputValue::parse(raw)).unwrap(),
        expected
    );
}

#[test]
fn test_input_serializes_as_single_member_object() {
    assert_eq!(
        serde_json::to_value(FieldValueInput::Number(42.0)).unwrap(),
        json!({"number": 42.0})
    );
    assert_eq!(
        serde_json::to_value(FieldValueInput::SingleSelectOptionId("opt".to_string())).unwrap(),
        json!({"singleSelectOptionId": "opt"})
    );
}
