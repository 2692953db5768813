use super::*;

#[test]
fn test_empty_string_is_not_an_id() {
    assert!(ProjectId::new("").is_none());
    assert!(FieldId::new(String::new()).is_none());
}

#[test]
fn test_id_deserializes_from_bare_string() {
    let id: ItemId = serde_json::from_str("\"PVTI_lADOAB\"").unwrap();
    assert_eq!(id.as_str(), "PVTI_lADOAB");
    assert_eq!(id.to_string(), "PVTI_lADOAB");
}

#[test]
fn test_invocation_ids_are_unique() {
    assert_ne!(InvocationId::new_random(), InvocationId::new_random());
}
