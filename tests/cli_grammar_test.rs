use opconsole::{cli, OptionsError, ParsedOptions};

#[test]
fn test_unknown_long_flag_reports_the_token() {
    let error = ParsedOptions::try_parse(["--frobnicate"]).unwrap_err();

    assert_eq!(error, OptionsError::unknown_flag("--frobnicate"));
}

#[test]
fn test_unknown_short_flag_reports_the_token() {
    let error = ParsedOptions::try_parse(["-Z"]).unwrap_err();

    assert!(matches!(error, OptionsError::UnknownFlag { .. }));
}

#[test]
fn test_invalid_environment_value_names_the_value() {
    let error = ParsedOptions::try_parse(["-E", "bogus"]).unwrap_err();

    match error {
        OptionsError::InvalidArgument { message } => {
            assert!(message.contains("bogus"), "message was: {message}");
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_value_flag_without_value_is_invalid() {
    for tokens in [&["--yaml"][..], &["-M"][..], &["-c"][..], &["-m"][..]] {
        let error = ParsedOptions::try_parse(tokens.iter().copied()).unwrap_err();

        assert!(
            matches!(error, OptionsError::InvalidArgument { .. }),
            "{tokens:?} should be rejected as InvalidArgument"
        );
    }
}

#[test]
fn test_usage_text_documents_every_flag() {
    let text = cli::usage();

    for flag in [
        "--environment",
        "--migration-path",
        "--no-database",
        "--yaml",
        "-c",
        "--version",
        "--module-path",
        "--help",
    ] {
        assert!(text.contains(flag), "usage is missing {flag}");
    }
}

#[test]
fn test_usage_text_groups_flags_under_labeled_sections() {
    let text = cli::usage();

    let common = text.find("Common options").expect("Common options");
    let database = text.find("Database options").expect("Database options");
    let framework = text.find("Framework options").expect("Framework options");
    let modules = text.find("Module options").expect("Module options");

    // Declaration order is help-text order.
    assert!(common < database);
    assert!(database < framework);
    assert!(framework < modules);
}
