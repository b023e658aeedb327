use rowan::TextRange;

use super::*;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::SyntaxError, range(0, 5)).emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    assert_eq!(diagnostics.as_slice()[0].message(), "Syntax error.");
}

#[test]
fn syntax_error_ignores_detail() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::SyntaxError, range(0, 5))
        .message("unterminated string")
        .emit();

    assert_eq!(diagnostics.as_slice()[0].message(), "Syntax error.");
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnknownField, range(2, 9))
        .message("Extra")
        .emit();

    let diag = &diagnostics.as_slice()[0];
    assert_eq!(diag.message(), "unknown field `Extra`, rendered as text");
    assert_eq!(diag.severity(), Severity::Warning);
    assert!(!diagnostics.has_errors());
    assert!(diagnostics.has_warnings());
}

#[test]
fn counts_and_partition_keep_order() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::UnknownField, range(0, 1)).emit();
    diagnostics.report(DiagnosticKind::SyntaxError, range(2, 3)).emit();
    diagnostics.report(DiagnosticKind::UnclosedConditional, range(4, 5)).emit();
    diagnostics.report(DiagnosticKind::UnknownTransformer, range(6, 7)).emit();

    assert_eq!(diagnostics.error_count(), 2);
    assert_eq!(diagnostics.warning_count(), 2);

    let (errors, warnings) = diagnostics.partition();
    let error_starts: Vec<u32> = errors.iter().map(|d| d.from()).collect();
    let warning_starts: Vec<u32> = warnings.iter().map(|d| d.from()).collect();
    assert_eq!(error_starts, vec![2, 6]);
    assert_eq!(warning_starts, vec![0, 4]);
}

#[test]
fn diagnostic_serializes_to_flat_record() {
    let diag = Diagnostic::new(DiagnosticKind::SyntaxError, range(3, 8), "Syntax error.");
    let json = serde_json::to_string(&diag).unwrap();
    assert_eq!(
        json,
        r#"{"from":3,"to":8,"severity":"error","message":"Syntax error."}"#
    );
}

#[test]
fn render_plain_without_source() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::SyntaxError, range(0, 1)).emit();
    diagnostics
        .report(DiagnosticKind::UnknownField, range(4, 11))
        .message("Back")
        .emit();

    insta::assert_snapshot!(diagnostics.printer().render(), @r"
    error at 0..1: Syntax error.
    warning at 4..11: unknown field `Back`, rendered as text
    ");
}

#[test]
fn render_with_source_mentions_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::SyntaxError, range(4, 5)).emit();

    let rendered = diagnostics.render("tag: (");
    assert!(rendered.contains("Syntax error."));
    assert!(rendered.contains("tag: ("));
}

#[test]
fn render_empty_is_empty() {
    let diagnostics = Diagnostics::new();
    assert_eq!(diagnostics.render("anything"), "");
    assert_eq!(diagnostics.printer().render(), "");
}
