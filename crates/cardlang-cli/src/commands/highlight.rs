use std::fmt::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use cardlang_lib::assist::{HighlightSpan, highlight};
use cardlang_lib::{query, template};

use super::input::load_input;
use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Query,
    Template,
}

pub struct HighlightArgs {
    pub lang: Lang,
    pub source_text: Option<String>,
    pub file: Option<PathBuf>,
    pub json: bool,
}

pub fn run(args: HighlightArgs) -> Result<ExitCode, CliError> {
    let input = load_input(args.source_text.as_deref(), args.file.as_deref())?;
    let spans = match args.lang {
        Lang::Query => highlight(query::parse_query(&input.text).as_cst()),
        Lang::Template => highlight(template::parse_template(&input.text).as_cst()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&spans)?);
    } else {
        print!("{}", format_spans(&input.text, &spans));
    }

    Ok(ExitCode::SUCCESS)
}

/// One line per token: range, class, quoted token text.
pub fn format_spans(source: &str, spans: &[HighlightSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        let text = source
            .get(span.from as usize..span.to as usize)
            .unwrap_or_default();
        writeln!(out, "{}..{} {} {:?}", span.from, span.to, span.class, text)
            .expect("String write never fails");
    }
    out
}
