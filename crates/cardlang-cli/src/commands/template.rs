use std::path::PathBuf;
use std::process::ExitCode;

use cardlang_lib::Diagnostics;
use cardlang_lib::template::{self, CompiledTemplate, Document, Fields, RenderContext, Side};

use super::input::{load_input, read_file};
use super::status;
use crate::error::CliError;

pub struct TemplateArgs {
    pub template_text: Option<String>,
    pub file: Option<PathBuf>,
    pub fields: Vec<(String, String)>,
    pub raw_fields: Vec<(String, String)>,
    pub side: Side,
    pub ordinal: u32,
    pub front_side: Option<String>,
    pub css: Option<PathBuf>,
    pub cst: bool,
    pub spans: bool,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: TemplateArgs) -> Result<ExitCode, CliError> {
    let input = load_input(args.template_text.as_deref(), args.file.as_deref())?;
    let document = template::parse_template(&input.text);

    if args.cst {
        let diagnostics = check(&document, &args);
        if !diagnostics.is_empty() {
            eprint!("{}", input.render(&diagnostics, args.color));
        }
        print!("{}", document.printer().with_spans(args.spans).dump());
        return Ok(status(diagnostics.has_errors()));
    }

    let (compiled, diagnostics) = render(&document, &args)?;
    if !diagnostics.is_empty() {
        eprint!("{}", input.render(&diagnostics, args.color));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&compiled)?);
    } else {
        print!("{}", format_rendered(&compiled));
    }

    Ok(status(!compiled.errors.is_empty()))
}

/// Syntax and field diagnostics without rendering, in document order.
pub fn check(document: &Document, args: &TemplateArgs) -> Diagnostics {
    template::lint(document, &collect_fields(args))
}

/// Rendered card plus its diagnostics in the order they were found.
pub fn render(
    document: &Document,
    args: &TemplateArgs,
) -> Result<(CompiledTemplate, Diagnostics), CliError> {
    let context = render_context(args)?;
    let fields = collect_fields(args);
    Ok(template::compile_with_diagnostics(document, &fields, &context))
}

fn collect_fields(args: &TemplateArgs) -> Fields {
    let mut fields = Fields::new();
    for (name, value) in &args.fields {
        fields.insert(name.as_str(), value.as_str());
    }
    for (name, value) in &args.raw_fields {
        fields.insert_raw(name.as_str(), value.as_str());
    }
    fields
}

fn render_context(args: &TemplateArgs) -> Result<RenderContext, CliError> {
    let mut context = RenderContext::new()
        .with_side(args.side)
        .with_ordinal(args.ordinal);
    if let Some(front) = &args.front_side {
        context = context.with_front_side(front.as_str());
    }
    if let Some(path) = &args.css {
        context = context.with_css(read_file(path)?);
    }
    Ok(context)
}

/// Body HTML, preceded by the card stylesheet when there is one.
pub fn format_rendered(compiled: &CompiledTemplate) -> String {
    let mut out = String::new();
    if let Some(css) = &compiled.css {
        out.push_str("<style>\n");
        out.push_str(css.trim_end());
        out.push_str("\n</style>\n");
    }
    out.push_str(&compiled.body);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
