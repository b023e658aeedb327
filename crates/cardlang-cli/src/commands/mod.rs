pub mod complete;
pub mod highlight;
pub mod input;
pub mod query;
pub mod template;


use std::process::ExitCode;

/// Exit status for a command that reported diagnostics with `has_errors`.
pub fn status(has_errors: bool) -> ExitCode {
    if has_errors {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
