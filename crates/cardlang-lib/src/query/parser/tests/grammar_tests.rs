use indoc::indoc;

use crate::query::{SyntaxKind, parse_query};

fn assert_no_errors(input: &str) {
    let program = parse_query(input);
    let errors = program
        .as_cst()
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::Error)
        .count();
    assert_eq!(errors, 0, "unexpected error node in {input:?}");
}

#[test]
fn empty_program() {
    let program = parse_query("");
    insta::assert_snapshot!(program.dump_cst(), @"Program");
}

#[test]
fn simple_words() {
    let program = parse_query("hola mundo");
    insta::assert_snapshot!(program.dump_cst(), @r#"
    Program
      SimpleString
        Word "hola"
      SimpleString
        Word "mundo"
    "#);
}

#[test]
fn whitespace_preserved() {
    let program = parse_query(" ( a ) ");
    insta::assert_snapshot!(program.dump_cst_full(), @r#"
    Program
      Whitespace " "
      ParenthesizedExpression
        ParenOpen "("
        Whitespace " "
        SimpleString
          Word "a"
        Whitespace " "
        ParenClose ")"
      Whitespace " "
    "#);
}

#[test]
fn negated_group() {
    let program = parse_query("-(a) b");
    insta::assert_snapshot!(program.dump_cst(), @r#"
    Program
      Not
        Minus "-"
        ParenthesizedExpression
          ParenOpen "("
          SimpleString
            Word "a"
          ParenClose ")"
      SimpleString
        Word "b"
    "#);
}

#[test]
fn double_negation() {
    let program = parse_query("--a");
    insta::assert_snapshot!(program.dump_cst(), @r#"
    Program
      Not
        Minus "-"
        Not
          Minus "-"
          SimpleString
            Word "a"
    "#);
}

#[test]
fn or_holds_only_the_keyword() {
    let program = parse_query("a OR b");
    insta::assert_snapshot!(program.dump_cst(), @r#"
    Program
      SimpleString
        Word "a"
      Or
        KwOr "OR"
      SimpleString
        Word "b"
    "#);
}

#[test]
fn quoted_string() {
    let program = parse_query(r#""l o l""#);
    insta::assert_snapshot!(program.dump_cst(), @r#"
    Program
      QuotedString
        DoubleQuote "\""
        StrVal "l o l"
        DoubleQuote "\""
    "#);
}

#[test]
fn prefixed_terms() {
    let program = parse_query(r#"tag:what deck:"x y" template:Basic"#);
    insta::assert_snapshot!(program.dump_cst(), @r#"
    Program
      Tag
        TagPrefix "tag:"
        SimpleString
          Word "what"
      Deck
        DeckPrefix "deck:"
        QuotedString
          DoubleQuote "\""
          StrVal "x y"
          DoubleQuote "\""
      Template
        TemplatePrefix "template:"
        SimpleString
          Word "Basic"
    "#);
}

#[test]
fn mixed_query_outline() {
    let input = r#"-(a) spider-man -a b -c -"(quote\"d) str" OR "l o l" OR  a b c ((a "c") b) tag:what -deck:"x y""#;

    let program = parse_query(input);
    insta::assert_snapshot!(program.dump_outline(), @r"
    Program
      Not
        ParenthesizedExpression
          SimpleString
      SimpleString
      Not
        SimpleString
      SimpleString
      Not
        SimpleString
      Not
        QuotedString
      Or
      QuotedString
      Or
      SimpleString
      SimpleString
      SimpleString
      ParenthesizedExpression
        ParenthesizedExpression
          SimpleString
          QuotedString
        SimpleString
      Tag
        SimpleString
      Not
        Deck
          QuotedString
    ");
}

#[test]
fn multiline_input() {
    let input = indoc! {r#"
    tag:verbs
      (hablar OR comer)
    "#};

    let program = parse_query(input);
    insta::assert_snapshot!(program.dump_outline(), @r"
    Program
      Tag
        SimpleString
      ParenthesizedExpression
        SimpleString
        Or
        SimpleString
    ");
}

#[test]
fn valid_queries_have_no_error_nodes() {
    for input in [
        "",
        "a",
        "a b c",
        "-a",
        "a OR b OR c",
        "(a OR b) -(c d)",
        r#""a \"quoted\" word""#,
        r#""""#,
        "tag:x deck:y template:z",
        r#"-tag:"a b" OR deck:c"#,
        "or and not",
        "spider-man",
        "a*b_c%",
    ] {
        assert_no_errors(input);
    }
}

#[test]
fn lossless_for_any_input() {
    for input in [
        "",
        "   ",
        "-(a) b",
        "((a",
        "a))",
        r#""unterminated \"#,
        "tag: deck:",
        "OR OR -",
        "-- - (- )",
        "größe \u{a0} 日本",
    ] {
        let program = parse_query(input);
        assert_eq!(program.as_cst().text().to_string(), input);
    }
}
