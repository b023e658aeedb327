use std::fmt::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use cardlang_lib::query::{self, CompiledQuery, QueryCompiler, QueryCompilerConfig};

use super::input::{load_input, read_json};
use super::status;
use crate::error::CliError;

pub struct QueryArgs {
    pub query_text: Option<String>,
    pub file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub cst: bool,
    pub spans: bool,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: QueryArgs) -> Result<ExitCode, CliError> {
    let input = load_input(args.query_text.as_deref(), args.file.as_deref())?;
    let config: QueryCompilerConfig = match &args.config {
        Some(path) => read_json(path)?,
        None => QueryCompilerConfig::default(),
    };

    let program = query::parse_query(&input.text);
    let diagnostics = cardlang_lib::lint(program.as_cst());
    if !diagnostics.is_empty() {
        eprint!("{}", input.render(&diagnostics, args.color));
    }

    if args.cst {
        print!("{}", program.printer().with_spans(args.spans).dump());
    } else {
        let compiled = QueryCompiler::new(&config).compile(&program);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&compiled)?);
        } else {
            print!("{}", format_compiled(&compiled));
        }
    }

    Ok(status(diagnostics.has_errors()))
}

/// Predicate on the first line, then one numbered line per parameter.
pub fn format_compiled(compiled: &CompiledQuery) -> String {
    let mut out = String::new();
    writeln!(out, "{}", compiled.predicate).expect("String write never fails");
    for (i, param) in compiled.params.iter().enumerate() {
        writeln!(out, "  ?{} = {:?}", i + 1, param).expect("String write never fails");
    }
    out
}
