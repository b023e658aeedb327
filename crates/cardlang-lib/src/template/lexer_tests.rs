use crate::template::lexer::{lex, token_text};

fn snapshot(input: &str) -> String {
    let mut out = String::new();
    for token in lex(input) {
        out.push_str(&format!(
            "{:?} {:?}\n",
            token.kind,
            token_text(input, &token)
        ));
    }
    out
}

#[test]
fn plain_text() {
    insta::assert_snapshot!(snapshot("just text"), @r#"TextContent "just text""#);
}

#[test]
fn self_closing_tag() {
    insta::assert_snapshot!(snapshot("{{Front}}"), @r#"
    StartTag "{{"
    Name "Front"
    EndTag "}}"
    "#);
}

#[test]
fn transformer_chain() {
    insta::assert_snapshot!(snapshot("{{type:cloze:Text}}"), @r#"
    StartTag "{{"
    Name "type"
    TransformerDelimiter ":"
    Name "cloze"
    TransformerDelimiter ":"
    Name "Text"
    EndTag "}}"
    "#);
}

#[test]
fn conditional_markers() {
    insta::assert_snapshot!(snapshot("{{#A}}x{{/A}}{{^B}}"), @r##"
    StartTag "{{"
    If "#"
    Name "A"
    EndTag "}}"
    TextContent "x"
    StartCloseTag "{{/"
    Name "A"
    EndTag "}}"
    StartTag "{{"
    Unless "^"
    Name "B"
    EndTag "}}"
    "##);
}

#[test]
fn names_keep_spaces() {
    insta::assert_snapshot!(snapshot("{{ Back Side }}"), @r#"
    StartTag "{{"
    Name " Back Side "
    EndTag "}}"
    "#);
}

#[test]
fn single_braces_are_text() {
    insta::assert_snapshot!(snapshot("words{foo}"), @r#"
    TextContent "words"
    TextContent "{"
    TextContent "foo}"
    "#);
}

#[test]
fn newline_ends_tag() {
    insta::assert_snapshot!(snapshot("{{Front\nrest}}"), @r#"
    StartTag "{{"
    Name "Front"
    TextContent "\nrest}}"
    "#);
}

#[test]
fn brace_ends_tag() {
    insta::assert_snapshot!(snapshot("{{a{{b}}"), @r#"
    StartTag "{{"
    Name "a"
    StartTag "{{"
    Name "b"
    EndTag "}}"
    "#);
}

#[test]
fn lone_close_brace_in_tag_is_garbage() {
    insta::assert_snapshot!(snapshot("{{a}b}}"), @r#"
    StartTag "{{"
    Name "a"
    Garbage "}"
    Name "b"
    EndTag "}}"
    "#);
}

#[test]
fn unterminated_tag_at_end() {
    insta::assert_snapshot!(snapshot("x {{Front"), @r#"
    TextContent "x "
    StartTag "{{"
    Name "Front"
    "#);
}
