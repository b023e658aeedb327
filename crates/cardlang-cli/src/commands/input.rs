use std::fs;
use std::io::{self, Read};
use std::path::Path;

use cardlang_lib::Diagnostics;

use crate::error::CliError;

/// Source text and where it came from.
pub struct Input {
    pub text: String,
    /// File path for diagnostics headers; `None` for inline text.
    pub path: Option<String>,
}

impl Input {
    pub fn inline(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            path: None,
        }
    }

    /// Diagnostics as annotated source snippets.
    pub fn render(&self, diagnostics: &Diagnostics, color: bool) -> String {
        let mut printer = diagnostics.printer().source(&self.text).colored(color);
        if let Some(path) = &self.path {
            printer = printer.path(path);
        }
        printer.render()
    }
}

pub fn load_input(text: Option<&str>, path: Option<&Path>) -> Result<Input, CliError> {
    if let Some(text) = text {
        return Ok(Input::inline(text));
    }

    let Some(path) = path else {
        return Err(CliError::Argument(
            "input is required: use inline text or -f/--file".to_string(),
        ));
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::io(path, e))?;
        return Ok(Input {
            text: buf,
            path: Some("<stdin>".to_string()),
        });
    }

    let text = read_file(path)?;
    tracing::debug!(path = %path.display(), len = text.len(), "loaded input");
    Ok(Input {
        text,
        path: Some(path.display().to_string()),
    })
}

pub fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}

pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = read_file(path)?;
    serde_json::from_str(&text).map_err(|e| CliError::json(path, e))
}
