//! Reading template variables handed over by the template engine.
//!
//! Three JSON shapes are accepted:
//!
//! ```text
//! {"package_name": "...", "project_name": "...", "project_slug": "..."}
//! {"template_dir": "...", "output_dir": "...", "answers": { ...same keys... }}
//! {"cookiecutter": { ...same keys... }}
//! ```
//!
//! The second is what hook-running template tools write to a post-generation
//! hook's stdin. Unknown keys are ignored in every shape.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use pyseed_core::{
    application::ApplicationError, domain::ProjectContextBuilder, error::PyseedResult,
};

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Hook { answers: ProjectContextBuilder },
    Cookiecutter { cookiecutter: ProjectContextBuilder },
    Flat(ProjectContextBuilder),
}

/// Parse a JSON context payload into a (not yet validated) builder.
pub fn parse_context(raw: &str) -> PyseedResult<ProjectContextBuilder> {
    if raw.trim().is_empty() {
        return Err(ApplicationError::ContextUnavailable {
            reason: "context payload is empty".into(),
        }
        .into());
    }

    let payload: Payload =
        serde_json::from_str(raw).map_err(|e| ApplicationError::ContextUnavailable {
            reason: format!("invalid JSON context: {e}"),
        })?;

    Ok(match payload {
        Payload::Hook { answers } => {
            debug!("Context read from hook payload answers");
            answers
        }
        Payload::Cookiecutter { cookiecutter } => {
            debug!("Context read from cookiecutter object");
            cookiecutter
        }
        Payload::Flat(builder) => builder,
    })
}

/// Read a JSON context payload from any reader (usually stdin).
pub fn read_context<R: Read>(mut reader: R) -> PyseedResult<ProjectContextBuilder> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(|e| ApplicationError::ContextUnavailable {
            reason: format!("failed to read context: {e}"),
        })?;
    parse_context(&raw)
}

/// Read a JSON context payload from a file.
pub fn read_context_file(path: &Path) -> PyseedResult<ProjectContextBuilder> {
    let raw = std::fs::read_to_string(path).map_err(|e| ApplicationError::ContextUnavailable {
        reason: format!("failed to read '{}': {e}", path.display()),
    })?;
    parse_context(&raw)
}
