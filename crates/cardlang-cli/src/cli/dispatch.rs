//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `Into<*Args>` impls bridge dispatch to command handlers, resolving
//!   terminal-dependent choices such as color

use std::path::PathBuf;

use cardlang_lib::template::Side;
use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::complete::CompleteArgs;
use crate::commands::highlight::{HighlightArgs, Lang};
use crate::commands::query::QueryArgs;
use crate::commands::template::TemplateArgs;

/// Options shared by every subcommand.
pub struct GlobalParams {
    pub color: ColorChoice,
    pub verbosity: u8,
}

impl GlobalParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            color: parse_color(m),
            verbosity: m.get_count("verbose"),
        }
    }
}

pub struct QueryParams {
    pub query_text: Option<String>,
    pub file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub cst: bool,
    pub spans: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl QueryParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_text: m.get_one::<String>("query_text").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            config: m.get_one::<PathBuf>("config").cloned(),
            cst: m.get_flag("cst"),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<QueryParams> for QueryArgs {
    fn from(p: QueryParams) -> Self {
        Self {
            query_text: p.query_text,
            file: p.file,
            config: p.config,
            cst: p.cst,
            spans: p.spans,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TemplateParams {
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
    pub color: ColorChoice,
}

impl TemplateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            template_text: m.get_one::<String>("template_text").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            fields: assignments(m, "field"),
            raw_fields: assignments(m, "raw_field"),
            side: parse_side(m),
            ordinal: m.get_one::<u32>("ordinal").copied().unwrap_or(1),
            front_side: m.get_one::<String>("front_side").cloned(),
            css: m.get_one::<PathBuf>("css").cloned(),
            cst: m.get_flag("cst"),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<TemplateParams> for TemplateArgs {
    fn from(p: TemplateParams) -> Self {
        Self {
            template_text: p.template_text,
            file: p.file,
            fields: p.fields,
            raw_fields: p.raw_fields,
            side: p.side,
            ordinal: p.ordinal,
            front_side: p.front_side,
            css: p.css,
            cst: p.cst,
            spans: p.spans,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CompleteParams {
    pub query_text: String,
    pub offset: u32,
    pub explicit: bool,
    pub json: bool,
}

impl CompleteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_text: m.get_one::<String>("query_text").cloned().unwrap_or_default(),
            offset: m.get_one::<u32>("offset").copied().unwrap_or(0),
            explicit: m.get_flag("explicit"),
            json: m.get_flag("json"),
        }
    }
}

impl From<CompleteParams> for CompleteArgs {
    fn from(p: CompleteParams) -> Self {
        Self {
            query_text: p.query_text,
            offset: p.offset,
            explicit: p.explicit,
            json: p.json,
        }
    }
}

pub struct HighlightParams {
    pub lang: Lang,
    pub source_text: Option<String>,
    pub file: Option<PathBuf>,
    pub json: bool,
}

impl HighlightParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let lang = match m.get_one::<String>("lang").map(|s| s.as_str()) {
            Some("template") => Lang::Template,
            _ => Lang::Query,
        };
        Self {
            lang,
            source_text: m.get_one::<String>("source_text").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            json: m.get_flag("json"),
        }
    }
}

impl From<HighlightParams> for HighlightArgs {
    fn from(p: HighlightParams) -> Self {
        Self {
            lang: p.lang,
            source_text: p.source_text,
            file: p.file,
            json: p.json,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_side(m: &ArgMatches) -> Side {
    match m.get_one::<String>("side").map(|s| s.as_str()) {
        Some("answer") => Side::Answer,
        _ => Side::Question,
    }
}

fn assignments(m: &ArgMatches, id: &str) -> Vec<(String, String)> {
    m.get_many::<(String, String)>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
