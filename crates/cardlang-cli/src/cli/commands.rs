//! Command builders for the CLI.

use clap::{ArgGroup, Command};

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("cardlang")
        .about("Search queries and card templates for flashcards")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(color_arg())
        .arg(verbose_arg())
        .subcommand(query_command())
        .subcommand(template_command())
        .subcommand(complete_command())
        .subcommand(highlight_command())
}

/// Compile a search query to an SQL predicate.
pub fn query_command() -> Command {
    Command::new("query")
        .about("Compile a search query to an SQL predicate")
        .override_usage(
            "\
  cardlang query -q <TEXT> [--json] [--config <FILE>]
  cardlang query -f <FILE> [--json] [--config <FILE>]
  cardlang query -q <TEXT> --cst [--spans]",
        )
        .after_help(
            r#"EXAMPLES:
  cardlang query -q 'tag:verbs -deck:"Spanish::Old" hablar'
  cardlang query -q 'a OR b' --json
  cardlang query -q '(a "b' --cst          # syntax tree with error nodes
  cardlang query -f search.txt --config schema.json"#,
        )
        .arg(query_text_arg())
        .arg(file_arg())
        .group(input_group(["query_text", "file"]))
        .arg(config_arg())
        .arg(cst_arg())
        .arg(spans_arg().requires("cst"))
        .arg(json_arg().conflicts_with("cst"))
}

/// Render a card template.
pub fn template_command() -> Command {
    Command::new("template")
        .about("Render a card template to HTML")
        .override_usage(
            "\
  cardlang template -t <TEXT> [--field <NAME=VALUE>]... [--side <SIDE>] [--ordinal <N>]
  cardlang template -f <FILE> [--field <NAME=VALUE>]... [--json]
  cardlang template -t <TEXT> --cst [--spans]",
        )
        .after_help(
            r#"EXAMPLES:
  cardlang template -t '{{Front}}' --field Front=hola
  cardlang template -t '{{cloze:Text}}' --field 'Text={{c1::Paris}} is in France'
  cardlang template -t '{{#Extra}}<hr>{{Extra}}{{/Extra}}' --raw-field 'Extra=<b>!</b>'
  cardlang template -f back.html --side answer --front-side '<p>Q</p>'"#,
        )
        .arg(template_text_arg())
        .arg(file_arg())
        .group(input_group(["template_text", "file"]))
        .arg(field_arg())
        .arg(raw_field_arg())
        .arg(side_arg())
        .arg(ordinal_arg())
        .arg(front_side_arg())
        .arg(css_arg())
        .arg(cst_arg())
        .arg(spans_arg().requires("cst"))
        .arg(json_arg().conflicts_with("cst"))
}

/// Complete a query at a cursor position.
pub fn complete_command() -> Command {
    Command::new("complete")
        .about("List query completions at a cursor offset")
        .after_help(
            r#"EXAMPLES:
  cardlang complete -q 'spider ta' --offset 9
  cardlang complete -q 'a ' --offset 2 --explicit"#,
        )
        .arg(query_text_arg().required(true))
        .arg(offset_arg())
        .arg(explicit_arg())
        .arg(json_arg())
}

/// Print semantic highlight spans.
pub fn highlight_command() -> Command {
    Command::new("highlight")
        .about("Print highlight classes of every token")
        .after_help(
            r#"EXAMPLES:
  cardlang highlight query -s 'tag:a -b'
  cardlang highlight template -f front.html --json"#,
        )
        .arg(lang_arg())
        .arg(source_text_arg())
        .arg(file_arg())
        .group(input_group(["source_text", "file"]))
        .arg(json_arg())
}

/// Exactly one of inline text or file.
fn input_group(args: [&'static str; 2]) -> ArgGroup {
    ArgGroup::new("input").args(args).required(true)
}
