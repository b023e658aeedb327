use std::fmt::Write;
use std::process::ExitCode;

use cardlang_lib::assist::{CompletionResult, complete_query};
use cardlang_lib::query;

use crate::error::CliError;

pub struct CompleteArgs {
    pub query_text: String,
    pub offset: u32,
    pub explicit: bool,
    pub json: bool,
}

pub fn run(args: CompleteArgs) -> Result<ExitCode, CliError> {
    if args.query_text.get(..args.offset as usize).is_none() {
        return Err(CliError::Argument(format!(
            "offset {} is outside the query or not on a character boundary",
            args.offset
        )));
    }

    let program = query::parse_query(&args.query_text);
    let result = complete_query(&program, args.offset, args.explicit);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(result) = &result {
        print!("{}", format_completions(result));
    }

    Ok(ExitCode::SUCCESS)
}

/// One line per option: replaced range, then the inserted text.
pub fn format_completions(result: &CompletionResult) -> String {
    let mut out = String::new();
    for option in &result.options {
        writeln!(out, "{}..{} {}", result.from, result.to, option.apply)
            .expect("String write never fails");
    }
    out
}
