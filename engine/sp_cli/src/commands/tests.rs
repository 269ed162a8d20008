use super::*;
use pretty_assertions::assert_eq;
use sp_coerce::SpecSet;
use sp_spec::SpecErrorKind;
use sp_value::Key;

fn run(data: &str, specs: &str) -> Result<String, CliError> {
    coerce_command(data, specs, &mut std::io::empty())
}

mod coerce_cmd {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_spec() {
        assert_eq!(run("\"  42abc\"", "int").unwrap(), "42");
        assert_eq!(run("[1,2]", "string").unwrap(), "\"Array\"");
        assert_eq!(run("-1", "uint64").unwrap(), "\"0\"");
        assert_eq!(run("null", "float").unwrap(), "0.0");
        assert_eq!(run("5", "array").unwrap(), "[5]");
    }

    #[test]
    fn field_specs() {
        let data = r#"{"name":"  jack  ","id":29,"hobbies":[21,"baseball",3.25]}"#;
        let specs = r#"{"name":"string.trim","id":"uint64","hobbies":"array.int"}"#;
        assert_eq!(
            run(data, specs).unwrap(),
            r#"{"name":"jack","id":"29","hobbies":[21,0,3]}"#
        );
    }

    #[test]
    fn field_specs_on_json_array_data() {
        let specs = r#"{"1":"int","missing":"bool"}"#;
        assert_eq!(
            run(r#"["a","7"]"#, specs).unwrap(),
            r#"{"1":7,"missing":false}"#
        );
    }

    #[test]
    fn huge_unsigned_json_numbers_clamp() {
        assert_eq!(
            run("321342123415218446744073709551616", "uint64").unwrap(),
            "\"18446744073709551615\""
        );
    }

    #[test]
    fn reads_stdin() {
        let mut stdin = "[\" a \",\"b \"]".as_bytes();
        assert_eq!(
            coerce_command("-", "array.string.trim", &mut stdin).unwrap(),
            r#"["a","b"]"#
        );
    }

    #[test]
    fn reads_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(&path, r#"{"id":"0093"}"#).unwrap();
        let arg = format!("@{}", path.display());
        assert_eq!(run(&arg, r#"{"id":"uint64"}"#).unwrap(), r#"{"id":"93"}"#);
    }

    #[test]
    fn missing_data_file_is_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let arg = format!("@{}", dir.path().join("absent.json").display());
        let err = run(&arg, "int").unwrap_err();
        assert!(matches!(err, CliError::Read { .. }), "{err}");
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }

    #[test]
    fn invalid_json_is_usage_error() {
        let err = run("{not json", "int").unwrap_err();
        assert!(matches!(err, CliError::Json { what: "data", .. }), "{err}");
        assert_eq!(err.exit_code(), EXIT_USAGE);

        let err = run("1", "{\"id\":").unwrap_err();
        assert!(matches!(err, CliError::Json { what: "specs", .. }), "{err}");
    }

    #[test]
    fn malformed_spec_exit_code() {
        let err = run("1", "array.array").unwrap_err();
        assert_eq!(err.exit_code(), EXIT_MALFORMED_SPEC);
        assert_eq!(
            err.to_string(),
            "malformed spec `array.array`: nested `array.array` specs are not supported"
        );

        let err = run("1", r#"{"id":3}"#).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_MALFORMED_SPEC);
    }

    #[test]
    fn spec_errors_win_over_bad_data() {
        // Specs are read before the data.
        let err = run("{not json", r#"{"id":false}"#).unwrap_err();
        assert!(matches!(err, CliError::Spec(_)), "{err}");
    }
}

mod parse_specs_arg {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_is_single_spec() {
        assert_eq!(parse_specs("int").unwrap(), SpecSet::from("int"));
        assert_eq!(parse_specs("abc").unwrap(), SpecSet::from("abc"));
    }

    #[test]
    fn json_object_is_field_specs() {
        assert_eq!(
            parse_specs(r#" {"b":"int","a":"string"}"#).unwrap(),
            SpecSet::fields([(Key::from("b"), "int"), (Key::from("a"), "string")])
        );
    }

    #[test]
    fn non_string_field_spec() {
        let Err(CliError::Spec(err)) = parse_specs(r#"{"a":["int"]}"#) else {
            panic!("expected a spec error");
        };
        assert_eq!(
            err.kind(),
            &SpecErrorKind::NonStringSpec {
                field: "a".to_owned(),
                got: "array"
            }
        );
    }
}

mod check_cmd {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn describes_valid_specs() {
        assert_eq!(check_spec("int").unwrap(), "ok int -> int (default 0)");
        assert_eq!(check_spec("float").unwrap(), "ok float -> float (default 0.0)");
        assert_eq!(check_spec("bool").unwrap(), "ok bool -> bool (default false)");
        assert_eq!(
            check_spec("string.trim").unwrap(),
            "ok string.trim -> string (default \"\")"
        );
        assert_eq!(
            check_spec("array.uint64").unwrap(),
            "ok array.uint64 -> array (default [])"
        );
        assert_eq!(check_spec("uint64").unwrap(), "ok uint64 -> uint64 (default \"0\")");
    }

    #[test]
    fn reports_each_spec() {
        let (lines, all_ok) = check_specs(&["int", "int.trim", " int"]);
        assert!(!all_ok);
        assert_eq!(
            lines,
            [
                "ok int -> int (default 0)",
                "error: malformed spec `int.trim`: type `int` takes no modifiers, found `trim`",
                "error: malformed spec ` int`: unknown type ` int`",
            ]
        );

        let (lines, all_ok) = check_specs(&["array", "string"]);
        assert!(all_ok);
        assert_eq!(lines.len(), 2);
    }
}

#[test]
fn read_source_passes_text_through() {
    let mut stdin = std::io::empty();
    assert_eq!(read_source("[1]", &mut stdin).unwrap(), "[1]");
    assert_eq!(read_source("", &mut stdin).unwrap(), "");
}
