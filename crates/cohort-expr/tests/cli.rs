//! Command helpers behind the `cohort-expr` binary
#![cfg(feature = "cli")]

use cohort_expr::cli::{check, inspect, output};
use cohort_expr::{Compiler, FieldMaps};
use insta::assert_snapshot;
use rstest::rstest;

fn compiler() -> Compiler {
    Compiler::new(
        FieldMaps::new()
            .with_field("foo", "table1.foo", 0)
            .with_field("bar", "table2.bar", 0)
            .with_field("baz", "other", ""),
    )
}

#[test]
fn test_token_listing() {
    let listing = inspect::token_listing("foo AND (bar > 3 OR baz = \"hi\")")
        .unwrap()
        .join("\n");
    assert_snapshot!(listing, @r#"
    1:1    identifier   foo
    1:5    connective   AND
    1:9    paren        (
    1:10   identifier   bar
    1:14   comparison   >
    1:16   number       3
    1:18   connective   OR
    1:21   identifier   baz
    1:25   comparison   =
    1:27   string       "hi"
    1:31   paren        )
    "#);
}

#[rstest]
#[case("foo", &["foo"])]
#[case("foo = bar", &["foo", "bar"])]
#[case("baz OR (baz = 'x' AND qux > 1)", &["baz", "qux"])]
#[case("'just a value'", &[])]
fn test_field_listing(#[case] expression: &str, #[case] expected: &[&str]) {
    assert_eq!(inspect::field_listing(expression).unwrap(), expected);
}

#[test]
fn test_check_reports_line_numbers() {
    let text = "\
# inclusion criteria
foo AND bar > 3
baz = 'has space'

foo OR OR bar
";
    let reports = check::check_source(&compiler(), text);
    let failed: Vec<_> = reports
        .iter()
        .filter(|r| r.result.is_err())
        .map(|r| r.line)
        .collect();
    assert_eq!(reports.len(), 3);
    assert_eq!(failed, vec![3, 5]);
}

#[test]
fn test_diagnostic_points_at_fragment() {
    colored::control::set_override(false);
    let err = compiler().compile("foo AND AND bar").unwrap_err();
    assert_snapshot!(output::format_diagnostic(&err), @r"
    grammar error[CX0007]: 'AND' directly follows 'AND'
      |
    1 | foo AND AND bar
      |         ^^^
      = help: AND/OR must be separated by a condition
    ");
}
