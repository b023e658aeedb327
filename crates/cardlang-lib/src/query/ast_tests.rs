use crate::query::ast::{Program, Term, Value};
use crate::query::{SyntaxNode, parse_query};

fn terms(input: &str) -> Vec<Term> {
    parse_query(input).terms().collect()
}

#[test]
fn terms_in_source_order() {
    let kinds: Vec<String> = terms(r#"a "b" -c (d) OR tag:e deck:f template:g )"#)
        .iter()
        .map(|t| format!("{:?}", t.as_cst().kind()))
        .collect();
    insta::assert_snapshot!(kinds.join(" "), @"SimpleString QuotedString Not ParenthesizedExpression Or Tag Deck Template Error");
}

#[test]
fn quoted_value_is_unescaped() {
    let Term::Quoted(quoted) = &terms(r#""say \"hi\" \\ \n""#)[0] else {
        panic!("expected quoted string");
    };
    assert!(quoted.is_terminated());
    assert_eq!(quoted.value(), r#"say "hi" \ \n"#);
}

#[test]
fn empty_quoted_value() {
    let Term::Quoted(quoted) = &terms(r#""""#)[0] else {
        panic!("expected quoted string");
    };
    assert_eq!(quoted.value(), "");
    assert!(quoted.content().is_none());
}

#[test]
fn not_operand() {
    let Term::Not(not) = &terms("-tag:x")[0] else {
        panic!("expected not");
    };
    let Some(Term::Tag(tag)) = not.operand() else {
        panic!("expected tag operand");
    };
    assert_eq!(tag.value().map(|v| v.text()), Some("x".to_string()));
}

#[test]
fn prefixed_values() {
    let terms = terms(r#"deck:"Spanish::Old" template:Basic"#);
    let Term::Deck(deck) = &terms[0] else {
        panic!("expected deck");
    };
    assert!(matches!(deck.value(), Some(Value::Quoted(_))));
    assert_eq!(deck.value().unwrap().text(), "Spanish::Old");

    let Term::Template(template) = &terms[1] else {
        panic!("expected template");
    };
    assert!(matches!(template.value(), Some(Value::Simple(_))));
}

#[test]
fn group_terms() {
    let Term::Group(group) = &terms("(a OR b)")[0] else {
        panic!("expected group");
    };
    assert_eq!(group.terms().count(), 3);
}

#[test]
fn program_try_from_rejects_other_nodes() {
    let program = parse_query("a");
    let word: SyntaxNode = program.as_cst().first_child().unwrap();

    let err = Program::try_from(word).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"expected a `Program` root node, found `SimpleString`");

    assert!(Program::try_from(program.as_cst().clone()).is_ok());
}
