//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Inline query text (-q/--query).
pub fn query_text_arg() -> Arg {
    Arg::new("query_text")
        .short('q')
        .long("query")
        .value_name("TEXT")
        .help("Inline query text")
}

/// Inline template text (-t/--template).
pub fn template_text_arg() -> Arg {
    Arg::new("template_text")
        .short('t')
        .long("template")
        .value_name("TEXT")
        .help("Inline template text")
}

/// Inline source text for either language (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline source text")
}

/// Input file, `-` for stdin (-f/--file).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read input from file (- for stdin)")
}

/// Language of the highlighted source (positional).
pub fn lang_arg() -> Arg {
    Arg::new("lang")
        .value_name("LANG")
        .required(true)
        .value_parser(["query", "template"])
        .help("Source language")
}

/// Compiler configuration (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON file with SQL fragments for each filter kind")
}

/// Field value (--field NAME=VALUE), repeatable.
pub fn field_arg() -> Arg {
    Arg::new("field")
        .long("field")
        .value_name("NAME=VALUE")
        .action(ArgAction::Append)
        .value_parser(parse_assignment)
        .help("Field value, HTML-escaped when rendered")
}

/// Raw HTML field value (--raw-field NAME=VALUE), repeatable.
pub fn raw_field_arg() -> Arg {
    Arg::new("raw_field")
        .long("raw-field")
        .value_name("NAME=VALUE")
        .action(ArgAction::Append)
        .value_parser(parse_assignment)
        .help("Field value inserted as HTML")
}

/// Card side (--side).
pub fn side_arg() -> Arg {
    Arg::new("side")
        .long("side")
        .value_name("SIDE")
        .default_value("question")
        .value_parser(["question", "answer"])
        .help("Card side to render")
}

/// Cloze number of the card (--ordinal).
pub fn ordinal_arg() -> Arg {
    Arg::new("ordinal")
        .long("ordinal")
        .value_name("N")
        .default_value("1")
        .value_parser(value_parser!(u32).range(1..))
        .help("Cloze number of the card")
}

/// Rendered question side for `{{FrontSide}}` (--front-side).
pub fn front_side_arg() -> Arg {
    Arg::new("front_side")
        .long("front-side")
        .value_name("HTML")
        .help("Rendered question side, shown by {{FrontSide}}")
}

/// Stylesheet passed through with the card (--css).
pub fn css_arg() -> Arg {
    Arg::new("css")
        .long("css")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Stylesheet of the card")
}

/// Cursor byte offset (--offset).
pub fn offset_arg() -> Arg {
    Arg::new("offset")
        .long("offset")
        .value_name("N")
        .required(true)
        .value_parser(value_parser!(u32))
        .help("Cursor byte offset")
}

/// Explicit completion request (--explicit).
pub fn explicit_arg() -> Arg {
    Arg::new("explicit")
        .long("explicit")
        .action(ArgAction::SetTrue)
        .help("Complete even when no word was typed")
}

/// Print the syntax tree (--cst).
pub fn cst_arg() -> Arg {
    Arg::new("cst")
        .long("cst")
        .action(ArgAction::SetTrue)
        .help("Print the concrete syntax tree instead of compiling")
}

/// Show source positions in the syntax tree (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .global(true)
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Log verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .global(true)
        .action(ArgAction::Count)
        .help("Log more (-v info, -vv debug, -vvv trace)")
}

/// `NAME=VALUE` -> `(NAME, VALUE)`. The value may contain `=`.
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let Some((name, value)) = s.split_once('=') else {
        return Err(format!("expected NAME=VALUE, got '{s}'"));
    };
    if name.is_empty() {
        return Err(format!("missing field name in '{s}'"));
    }
    Ok((name.to_string(), value.to_string()))
}
