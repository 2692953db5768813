use super::*;
use yare::parameterized;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["ghprojects", "--token", "ghp_test"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_items_defaults() {
    let cli = parse(&["items", "acme", "3"]);
    assert_eq!(
        cli.command,
        Command::Items {
            owner: "acme".to_string(),
            number: 3,
            limit: 20,
            state: None,
        }
    );
}

#[test]
fn test_items_with_state_and_limit() {
    let cli = parse(&["items", "acme", "3", "--limit", "5", "--state", "open"]);
    let Command::Items { limit, state, .. } = cli.command else {
        panic!("expected items command");
    };
    assert_eq!(limit, 5);
    assert_eq!(state.as_deref(), Some("open"));
}

#[test]
fn test_search_default_limit() {
    let cli = parse(&["search", "acme", "1", "bug repo:acme/app"]);
    let Command::Search { query, limit, .. } = cli.command else {
        panic!("expected search command");
    };
    assert_eq!(query, "bug repo:acme/app");
    assert_eq!(limit, 10);
}

#[test]
fn test_update_field_keeps_raw_value() {
    let cli = parse(&["update-field", "acme", "1", "PVTI_1", "PVTNU_123", "42"]);
    let Command::UpdateField { value, field_id, .. } = cli.command else {
        panic!("expected update-field command");
    };
    assert_eq!(field_id, "PVTNU_123");
    assert_eq!(value, "42");
}

#[test]
fn test_update_project_optional_settings() {
    let cli = parse(&["update-project", "acme", "1", "--public", "false"]);
    assert_eq!(
        cli.command,
        Command::UpdateProject {
            owner: "acme".to_string(),
            number: 1,
            title: None,
            description: None,
            public: Some(false),
        }
    );
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = parse(&["projects", "acme", "--timeout-secs", "5", "--api-url", "http://x"]);
    assert_eq!(cli.timeout(), Some(Duration::from_secs(5)));
    assert_eq!(cli.api_url.as_deref(), Some("http://x"));
}

#[parameterized(
    missing_number = { &["fields", "acme"] },
    non_numeric_number = { &["fields", "acme", "one"] },
    negative_issue_number = { &["add-issue", "acme", "1", "acme", "app", "-4"] },
    bad_public_flag = { &["update-project", "acme", "1", "--public", "maybe"] },
    unknown_command = { &["archive", "acme"] },
)]
fn test_rejects_bad_arguments(args: &[&str]) {
    let mut argv = vec!["ghprojects"];
    argv.extend_from_slice(args);
    assert!(Cli::try_parse_from(argv).is_err());
}

#[test]
fn test_failure_summary_names_the_target() {
    let cli = parse(&["create-issue", "acme", "app", "Broken"]);
    assert_eq!(cli.command.failure_summary(), "Could not create issue in acme/app");
    assert_eq!(cli.command.name(), "create-issue");
}
