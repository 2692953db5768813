use super::*;
use yare::parameterized;

#[parameterized(
    one = { "1", true },
    true_word = { "TRUE", true },
    yes_padded = { " yes ", true },
    zero = { "0", false },
    other = { "enabled", false },
)]
fn test_env_bool_reads_flag_values(value: &str, expected: bool) {
    let name = format!("GHPROJECTS_TEST_FLAG_{}", value.trim().to_ascii_uppercase());
    std::env::set_var(&name, value);
    assert_eq!(env_bool(&name, !expected), expected);
    std::env::remove_var(&name);
}

#[test]
fn test_env_bool_default_when_unset() {
    assert!(env_bool("GHPROJECTS_TEST_FLAG_UNSET", true));
    assert!(!env_bool("GHPROJECTS_TEST_FLAG_UNSET", false));
}

#[test]
fn test_shutdown_reports_failure() {
    let provider = TracerProvider::builder().build();
    assert!(shutdown(&provider).is_ok());

    let err = shutdown(&provider).unwrap_err();
    assert!(format!("{err:#}").starts_with("failed to flush OpenTelemetry spans"));
}
