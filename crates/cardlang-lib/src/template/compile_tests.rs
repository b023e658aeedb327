use crate::template::{
    CompiledTemplate, Fields, RenderContext, Side, compile, lint, parse_template,
};

fn render(input: &str, fields: &Fields, context: &RenderContext) -> CompiledTemplate {
    compile(&parse_template(input), fields, context)
}

fn render_question(input: &str, fields: &Fields) -> CompiledTemplate {
    render(input, fields, &RenderContext::default())
}

fn messages(compiled: &CompiledTemplate) -> String {
    compiled
        .errors
        .iter()
        .chain(&compiled.warnings)
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn text_passes_through() {
    let compiled = render_question("<b>hi</b> {x} ", &Fields::new());
    assert_eq!(compiled.body, "<b>hi</b> {x} ");
    assert!(compiled.errors.is_empty());
    assert!(compiled.warnings.is_empty());
}

#[test]
fn field_values_are_escaped() {
    let fields = Fields::new().with("Front", "a < b & \"c\"");
    let compiled = render_question("Q: {{Front}}", &fields);
    assert_eq!(compiled.body, "Q: a &lt; b &amp; &quot;c&quot;");
}

#[test]
fn raw_fields_are_not_escaped() {
    let mut fields = Fields::new();
    fields.insert_raw("Front", "<i>x</i>");
    let compiled = render_question("{{ Front }}", &fields);
    assert_eq!(compiled.body, "<i>x</i>");
}

#[test]
fn cloze_on_answer_side() {
    let fields = Fields::new().with("Text", "hello");
    let context = RenderContext::new().with_side(Side::Answer);
    let compiled = render("{{type:cloze:Text}}words{foo", &fields, &context);

    insta::assert_snapshot!(compiled.body, @r#"<div class="type-answer">hello</div>words{foo"#);
    assert!(compiled.errors.is_empty());
    assert!(compiled.warnings.is_empty());
}

#[test]
fn cloze_deletion_for_ordinal() {
    let fields = Fields::new().with("Text", "{{c1::Paris}} is in {{c2::France::country}}");

    let question = render(
        "{{cloze:Text}}",
        &fields,
        &RenderContext::new().with_ordinal(2),
    );
    insta::assert_snapshot!(question.body, @r#"Paris is in <span class="cloze">[country]</span>"#);

    let answer = render(
        "{{cloze:Text}}",
        &fields,
        &RenderContext::new().with_ordinal(2).with_side(Side::Answer),
    );
    insta::assert_snapshot!(answer.body, @r#"Paris is in <span class="cloze">France</span>"#);
}

#[test]
fn cloze_without_deletion_for_ordinal_warns() {
    let fields = Fields::new().with("Text", "{{c2::Paris}} is in {{c3::France}}");
    let compiled = render_question("{{cloze:Text}}", &fields);

    assert_eq!(compiled.body, "Paris is in France");
    insta::assert_snapshot!(messages(&compiled), @"warning at 8..12: `Text` has no cloze deletion for this card");

    let card_two = render("{{cloze:Text}}", &fields, &RenderContext::new().with_ordinal(2));
    assert!(card_two.warnings.is_empty());
    assert!(lint(&parse_template("{{cloze:Text}}"), &fields).is_empty());
}

#[test]
fn type_on_question_side_is_an_input() {
    let fields = Fields::new().with("Back", "perro");
    let compiled = render_question("{{type:Back}}", &fields);
    insta::assert_snapshot!(compiled.body, @r#"<input type="text" class="type-answer" data-field="Back">"#);
}

#[test]
fn type_over_cloze_keeps_the_blank_on_question_side() {
    let fields = Fields::new().with("Text", "{{c1::hello}} world");
    let compiled = render_question("{{type:cloze:Text}}", &fields);
    insta::assert_snapshot!(compiled.body, @r#"<span class="cloze">[...]</span> world<input type="text" class="type-answer" data-field="Text">"#);
    assert!(compiled.errors.is_empty());
    assert!(compiled.warnings.is_empty());
}

#[test]
fn text_and_hint_transformers() {
    let mut fields = Fields::new().with("Extra", "");
    fields.insert_raw("Notes", "see <b>p. 4</b>");

    let compiled = render_question("{{text:Notes}}|{{hint:Notes}}|{{hint:Extra}}", &fields);
    insta::assert_snapshot!(
        compiled.body,
        @r#"see p. 4|<details class="hint"><summary>Hint</summary>see <b>p. 4</b></details>|"#
    );
}

#[test]
fn transformers_apply_right_to_left() {
    let mut fields = Fields::new();
    fields.insert_raw("Notes", "<b>bold</b>");
    let compiled = render_question("{{hint:text:Notes}}", &fields);
    insta::assert_snapshot!(
        compiled.body,
        @r#"<details class="hint"><summary>Hint</summary>bold</details>"#
    );
}

#[test]
fn front_side_is_raw() {
    let context = RenderContext::new()
        .with_side(Side::Answer)
        .with_front_side("<p>Q</p>");
    let compiled = render("{{FrontSide}}<hr>", &Fields::new(), &context);
    assert_eq!(compiled.body, "<p>Q</p><hr>");
    assert!(compiled.warnings.is_empty());
}

#[test]
fn unknown_field_is_literal_with_warning() {
    let fields = Fields::new().with("Text", "hello");
    let compiled = render_question("a {{Missing}} b {{Text}}", &fields);

    assert_eq!(compiled.body, "a {{Missing}} b hello");
    assert!(compiled.errors.is_empty());
    insta::assert_snapshot!(messages(&compiled), @"warning at 4..11: unknown field `Missing`, rendered as text");
}

#[test]
fn unknown_transformer_omits_element() {
    let fields = Fields::new().with("Text", "hello");
    let compiled = render_question("[{{shout:Text}}] {{Text}}", &fields);

    assert_eq!(compiled.body, "[] hello");
    insta::assert_snapshot!(messages(&compiled), @"error at 3..8: unknown transformer `shout`");
}

#[test]
fn if_and_unless_blocks() {
    let template = "{{#Extra}}[{{Extra}}]{{/Extra}}{{^Extra}}none{{/Extra}}";

    let filled = Fields::new().with("Extra", "more");
    assert_eq!(render_question(template, &filled).body, "[more]");

    let blank = Fields::new().with("Extra", "  \n");
    assert_eq!(render_question(template, &blank).body, "none");
}

#[test]
fn unknown_conditional_field_is_empty() {
    let compiled = render_question("{{#Nope}}x{{/Nope}}{{^Nope}}y{{/Nope}}", &Fields::new());
    assert_eq!(compiled.body, "y");
    insta::assert_snapshot!(messages(&compiled), @r"
    warning at 3..7: unknown field `Nope`, treated as empty
    warning at 22..26: unknown field `Nope`, treated as empty
    ");
}

#[test]
fn conditional_with_transformers_is_omitted() {
    let fields = Fields::new().with("A", "x");
    let compiled = render_question("<{{#cloze:A}}body{{/A}}>", &fields);
    assert_eq!(compiled.body, "<>");
    insta::assert_snapshot!(messages(&compiled), @"error at 1..13: conditional blocks cannot use transformers");
}

#[test]
fn unclosed_conditional_renders_to_end() {
    let fields = Fields::new().with("A", "x");
    let compiled = render_question("{{#A}}shown {{A}}", &fields);
    assert_eq!(compiled.body, "shown x");
    insta::assert_snapshot!(messages(&compiled), @"warning at 0..6: `A` is never closed");
}

#[test]
fn hidden_bodies_still_report() {
    let compiled = render_question("{{#Empty}}{{Missing}}{{}}{{/Empty}}", &Fields::new().with("Empty", ""));
    assert_eq!(compiled.body, "");
    insta::assert_snapshot!(messages(&compiled), @r"
    error at 21..25: Syntax error.
    warning at 12..19: unknown field `Missing`, rendered as text
    ");
}

#[test]
fn syntax_errors_are_omitted() {
    let compiled = render_question("a{{x}y}}b{{/Z}}c", &Fields::new().with("x", "1"));
    assert_eq!(compiled.body, "abc");
    insta::assert_snapshot!(messages(&compiled), @r"
    error at 1..8: Syntax error.
    error at 9..15: Syntax error.
    ");
}

#[test]
fn css_passes_through() {
    let context = RenderContext::new().with_css(".card { color: red }");
    let compiled = render("x", &Fields::new(), &context);
    assert_eq!(compiled.css.as_deref(), Some(".card { color: red }"));

    let compiled = render("x", &Fields::new(), &RenderContext::default());
    assert_eq!(compiled.css, None);
}

#[test]
fn lint_reports_in_document_order() {
    let document = parse_template("{{Missing}} {{}} {{bad:Front}}");
    let fields = Fields::new().with("Front", "f");
    let diagnostics = lint(&document, &fields);

    insta::assert_snapshot!(diagnostics.printer().render(), @r"
    warning at 2..9: unknown field `Missing`, rendered as text
    error at 12..16: Syntax error.
    error at 19..22: unknown transformer `bad`
    ");
    assert_eq!(lint(&document, &fields), diagnostics);
}

#[test]
fn compiled_template_serializes() {
    let compiled = render_question("{{X}}", &Fields::new());
    insta::assert_snapshot!(
        serde_json::to_string(&compiled).unwrap(),
        @r#"{"body":"{{X}}","css":null,"errors":[],"warnings":[{"from":2,"to":3,"severity":"warning","message":"unknown field `X`, rendered as text"}]}"#
    );
}

#[test]
fn context_deserializes_with_defaults() {
    let context: RenderContext = serde_json::from_str(r#"{"side": "answer"}"#).unwrap();
    assert_eq!(context.side, Side::Answer);
    assert_eq!(context.ordinal, 1);
    assert_eq!(context.front_side, None);

    let fields: Fields =
        serde_json::from_str(r#"{"Front": {"value": "<b>"}, "Back": {"value": "<i>", "raw": true}}"#)
            .unwrap();
    assert_eq!(fields.names().collect::<Vec<_>>(), vec!["Front", "Back"]);
    assert!(fields.get("Back").unwrap().raw);
}
