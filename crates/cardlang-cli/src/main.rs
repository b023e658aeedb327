mod cli;
mod commands;
mod error;
mod logging;

use std::process::ExitCode;

use cli::{
    CompleteParams, GlobalParams, HighlightParams, QueryParams, TemplateParams, build_cli,
};

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    let global = GlobalParams::from_matches(&matches);
    logging::init_logging(global.verbosity, global.color.should_colorize());

    let result = match matches.subcommand() {
        Some(("query", m)) => commands::query::run(QueryParams::from_matches(m).into()),
        Some(("template", m)) => commands::template::run(TemplateParams::from_matches(m).into()),
        Some(("complete", m)) => commands::complete::run(CompleteParams::from_matches(m).into()),
        Some(("highlight", m)) => {
            commands::highlight::run(HighlightParams::from_matches(m).into())
        }
        _ => unreachable!("clap should have caught this"),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
