use std::fmt::Write;

use rowan::NodeOrToken;

use super::{HighlightClass, HighlightSpan, highlight};
use crate::query::parse_query;
use crate::template::parse_template;

fn render(source: &str, spans: &[HighlightSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        let text = &source[span.from as usize..span.to as usize];
        writeln!(out, "{}..{} {} {:?}", span.from, span.to, span.class, text)
            .expect("String write never fails");
    }
    out
}

#[test]
fn query_prefixes_and_operators() {
    let source = "tag:a -b (c)";
    let program = parse_query(source);
    insta::assert_snapshot!(render(source, &highlight(program.as_cst())), @r#"
    0..4 attributeName "tag:"
    4..5 tagName "a"
    6..7 controlOperator "-"
    7..8 text "b"
    9..10 brace "("
    10..11 text "c"
    11..12 brace ")"
    "#);
}

#[test]
fn query_error_tokens_are_invalid() {
    let source = r#"a OR "b"#;
    let program = parse_query(source);
    insta::assert_snapshot!(render(source, &highlight(program.as_cst())), @r#"
    0..1 text "a"
    2..4 controlOperator "OR"
    5..6 invalid "\""
    6..7 invalid "b"
    "#);
}

#[test]
fn template_tags() {
    let source = "{{#A}}x{{type:B}}{{/A}}";
    let document = parse_template(source);
    insta::assert_snapshot!(render(source, &highlight(document.as_cst())), @r##"
    0..2 brace "{{"
    2..3 controlOperator "#"
    3..4 tagName "A"
    4..6 brace "}}"
    6..7 text "x"
    7..9 brace "{{"
    9..13 attributeName "type"
    13..14 separator ":"
    14..15 tagName "B"
    15..17 brace "}}"
    17..20 brace "{{/"
    20..21 tagName "A"
    21..23 brace "}}"
    "##);
}

#[test]
fn template_stray_close_is_invalid() {
    let document = parse_template("a{{/A}}");
    let classes: Vec<HighlightClass> = highlight(document.as_cst())
        .into_iter()
        .map(|span| span.class)
        .collect();
    assert_eq!(
        classes,
        vec![
            HighlightClass::Text,
            HighlightClass::Invalid,
            HighlightClass::Invalid,
            HighlightClass::Invalid,
        ]
    );
}

#[test]
fn covers_every_non_trivia_token_in_order() {
    let source = r#"-(a) spider-man -"(quote\"d) str" OR "l o l" ((a "c") b) tag:what -deck:"x y" )"#;
    let program = parse_query(source);
    let spans = highlight(program.as_cst());

    let tokens: Vec<(u32, u32)> = program
        .as_cst()
        .descendants_with_tokens()
        .filter_map(NodeOrToken::into_token)
        .filter(|token| !token.kind().is_trivia())
        .map(|token| {
            let range = token.text_range();
            (u32::from(range.start()), u32::from(range.end()))
        })
        .collect();
    let covered: Vec<(u32, u32)> = spans.iter().map(|span| (span.from, span.to)).collect();

    assert_eq!(covered, tokens);
    assert!(spans.windows(2).all(|pair| pair[0].to <= pair[1].from));
}

#[test]
fn class_serializes_camel_case() {
    let span = HighlightSpan {
        from: 0,
        to: 2,
        class: HighlightClass::ControlOperator,
    };
    assert_eq!(
        serde_json::to_string(&span).unwrap(),
        r#"{"from":0,"to":2,"class":"controlOperator"}"#
    );
}
