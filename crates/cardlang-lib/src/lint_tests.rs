use crate::lint;
use crate::query::parse_query;
use crate::template::parse_template;

#[test]
fn valid_query_has_no_diagnostics() {
    let program = parse_query(r#"tag:a -deck:"b c" (d OR e)"#);
    assert!(lint(program.as_cst()).is_empty());
}

#[test]
fn query_errors_in_pre_order() {
    let program = parse_query(r#"(a "b"#);
    insta::assert_snapshot!(lint(program.as_cst()).printer().render(), @r"
    error at 0..5: Syntax error.
    error at 3..5: Syntax error.
    ");
}

#[test]
fn query_errors_render_with_source() {
    let source = "a OR";
    let program = parse_query(source);
    let diagnostics = lint(program.as_cst());

    assert_eq!(diagnostics.len(), 1);
    let rendered = diagnostics.render(source);
    assert!(rendered.contains("Syntax error."));
    assert!(rendered.contains("a OR"));
}

#[test]
fn template_syntax_errors() {
    let document = parse_template("{{}}ok{{/X}}");
    insta::assert_snapshot!(lint(document.as_cst()).printer().render(), @r"
    error at 0..4: Syntax error.
    error at 6..12: Syntax error.
    ");
}

#[test]
fn relinting_is_deterministic() {
    let program = parse_query("-( OR tag:");
    assert_eq!(lint(program.as_cst()), lint(program.as_cst()));
}
