use crate::query::lexer::{lex, token_text};

/// Format tokens without trivia (default for most tests)
fn snapshot(input: &str) -> String {
    format_tokens(input, false)
}

/// Format tokens with trivia included
fn snapshot_raw(input: &str) -> String {
    format_tokens(input, true)
}

fn format_tokens(input: &str, include_trivia: bool) -> String {
    let tokens = lex(input);
    let mut out = String::new();
    for token in tokens {
        if include_trivia || !token.kind.is_trivia() {
            out.push_str(&format!(
                "{:?} {:?}\n",
                token.kind,
                token_text(input, &token)
            ));
        }
    }
    out
}

#[test]
fn punctuation() {
    insta::assert_snapshot!(snapshot("( ) -a"), @r#"
    ParenOpen "("
    ParenClose ")"
    Minus "-"
    Word "a"
    "#);
}

#[test]
fn hyphen_inside_word() {
    insta::assert_snapshot!(snapshot("spider-man"), @r#"Word "spider-man""#);
}

#[test]
fn whitespace_is_trivia() {
    insta::assert_snapshot!(snapshot_raw("a \t b"), @r#"
    Word "a"
    Whitespace " \t "
    Word "b"
    "#);
}

#[test]
fn quoted_string_splits_into_quotes_and_content() {
    insta::assert_snapshot!(snapshot(r#""l o l""#), @r#"
    DoubleQuote "\""
    StrVal "l o l"
    DoubleQuote "\""
    "#);
}

#[test]
fn quoted_string_keeps_escapes() {
    insta::assert_snapshot!(snapshot(r#""a\"b\\""#), @r#"
    DoubleQuote "\""
    StrVal "a\\\"b\\\\"
    DoubleQuote "\""
    "#);
}

#[test]
fn empty_quoted_string_has_no_content() {
    insta::assert_snapshot!(snapshot(r#""""#), @r#"
    DoubleQuote "\""
    DoubleQuote "\""
    "#);
}

#[test]
fn unterminated_string_runs_to_end() {
    insta::assert_snapshot!(snapshot(r#"a "b c"#), @r#"
    Word "a"
    DoubleQuote "\""
    StrVal "b c"
    "#);
}

#[test]
fn or_is_case_sensitive() {
    insta::assert_snapshot!(snapshot("a OR b or c Or"), @r#"
    Word "a"
    KwOr "OR"
    Word "b"
    Word "or"
    Word "c"
    Word "Or"
    "#);
}

#[test]
fn prefixes_split_off_their_value() {
    insta::assert_snapshot!(snapshot("tag:verbs DECK:spanish template:Basic"), @r#"
    TagPrefix "tag:"
    Word "verbs"
    DeckPrefix "DECK:"
    Word "spanish"
    TemplatePrefix "template:"
    Word "Basic"
    "#);
}

#[test]
fn prefix_before_quoted_value() {
    insta::assert_snapshot!(snapshot(r#"deck:"x y""#), @r#"
    DeckPrefix "deck:"
    DoubleQuote "\""
    StrVal "x y"
    DoubleQuote "\""
    "#);
}

#[test]
fn bare_prefix() {
    insta::assert_snapshot!(snapshot("tag: x"), @r#"
    TagPrefix "tag:"
    Word "x"
    "#);
}

#[test]
fn prefix_must_start_the_word() {
    insta::assert_snapshot!(snapshot("mytag:x"), @r#"Word "mytag:x""#);
}

#[test]
fn non_ascii_words() {
    insta::assert_snapshot!(snapshot("größe 日本"), @r#"
    Word "größe"
    Word "日本"
    "#);
}
