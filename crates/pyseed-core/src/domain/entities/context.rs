//! The `ProjectContext` value and its builder.
//!
//! A `ProjectContext` is the set of template variables the template engine
//! resolved before the bootstrapper runs. Once built it is immutable and
//! guaranteed usable: the package name and slug are single path segments, and
//! the project name is non-blank.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Resolved template variables for one generated project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectContext {
    package_name: String,
    project_name: String,
    project_slug: String,
}

impl ProjectContext {
    /// Build and validate a context in one call.
    pub fn new(
        package_name: impl Into<String>,
        project_name: impl Into<String>,
        project_slug: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::builder()
            .package_name(package_name)
            .project_name(project_name)
            .project_slug(project_slug)
            .build()
    }

    pub fn builder() -> ProjectContextBuilder {
        ProjectContextBuilder::default()
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_slug(&self) -> &str {
        &self.project_slug
    }

    /// `src/<package_name>`, relative to the project root.
    pub fn package_dir(&self) -> PathBuf {
        PathBuf::from("src").join(&self.package_name)
    }

    /// Re-check every invariant.
    ///
    /// Called by the builder; available after external construction.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_path_segment("package_name", &self.package_name)?;
        validate_path_segment("project_slug", &self.project_slug)?;

        if self.project_name.trim().is_empty() {
            return Err(DomainError::InvalidContextValue {
                field: "project_name",
                value: self.project_name.clone(),
                reason: "cannot be blank".into(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for ProjectContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, package {})",
            self.project_name, self.project_slug, self.package_name
        )
    }
}

/// A value must be usable as exactly one directory name.
fn validate_path_segment(field: &'static str, value: &str) -> Result<(), DomainError> {
    let reason = if value.is_empty() {
        Some("cannot be empty")
    } else if value == "." || value == ".." {
        Some("cannot be a relative directory reference")
    } else if value.contains('/') || value.contains('\\') {
        Some("cannot contain path separators")
    } else if value.contains('\0') {
        Some("cannot contain NUL bytes")
    } else if value.trim() != value {
        Some("cannot start or end with whitespace")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(DomainError::InvalidContextValue {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }),
        None => Ok(()),
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`ProjectContext`].
///
/// Deserializable so that partially-filled JSON payloads can be merged with
/// values given on the command line before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectContextBuilder {
    package_name: Option<String>,
    project_name: Option<String>,
    project_slug: Option<String>,
}

impl ProjectContextBuilder {
    pub fn package_name(mut self, value: impl Into<String>) -> Self {
        self.package_name = Some(value.into());
        self
    }

    pub fn project_name(mut self, value: impl Into<String>) -> Self {
        self.project_name = Some(value.into());
        self
    }

    pub fn project_slug(mut self, value: impl Into<String>) -> Self {
        self.project_slug = Some(value.into());
        self
    }

    /// Overlay every field that `other` sets on top of `self`.
    pub fn merge(self, other: ProjectContextBuilder) -> Self {
        Self {
            package_name: other.package_name.or(self.package_name),
            project_name: other.project_name.or(self.project_name),
            project_slug: other.project_slug.or(self.project_slug),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.package_name.is_none() && self.project_name.is_none() && self.project_slug.is_none()
    }

    pub fn build(self) -> Result<ProjectContext, DomainError> {
        let context = ProjectContext {
            package_name: self.package_name.ok_or(DomainError::MissingRequiredField {
                field: "package_name",
            })?,
            project_name: self.project_name.ok_or(DomainError::MissingRequiredField {
                field: "project_name",
            })?,
            project_slug: self.project_slug.ok_or(DomainError::MissingRequiredField {
                field: "project_slug",
            })?,
        };
        context.validate()?;
        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_valid_context() {
        let ctx = ProjectContext::new("demo_pkg", "Demo Project", "demo-project").unwrap();
        assert_eq!(ctx.package_name(), "demo_pkg");
        assert_eq!(ctx.project_name(), "Demo Project");
        assert_eq!(ctx.project_slug(), "demo-project");
        assert_eq!(ctx.package_dir(), PathBuf::from("src").join("demo_pkg"));
    }

    #[test]
    fn rejects_separator_in_package_name() {
        let err = ProjectContext::new("demo/pkg", "Demo", "demo").unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidContextValue {
                field: "package_name",
                ..
            }
        ));
    }

    #[test]
    fn rejects_dot_segments() {
        assert!(ProjectContext::new("..", "Demo", "demo").is_err());
        assert!(ProjectContext::new("pkg", "Demo", ".").is_err());
    }

    #[test]
    fn rejects_blank_project_name() {
        let err = ProjectContext::new("pkg", "   ", "demo").unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidContextValue {
                field: "project_name",
                ..
            }
        ));
    }

    #[test]
    fn missing_field_is_reported() {
        let err = ProjectContext::builder()
            .package_name("pkg")
            .project_name("Demo")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingRequiredField {
                field: "project_slug"
            }
        );
    }

    #[test]
    fn merge_prefers_overlay_values() {
        let base = ProjectContext::builder()
            .package_name("from_json")
            .project_name("From Json")
            .project_slug("from-json");
        let overlay = ProjectContext::builder().package_name("from_flag");

        let ctx = base.merge(overlay).build().unwrap();
        assert_eq!(ctx.package_name(), "from_flag");
        assert_eq!(ctx.project_name(), "From Json");
    }

    #[test]
    fn builder_deserializes_partial_json() {
        let builder: ProjectContextBuilder =
            serde_json::from_str(r#"{"package_name":"demo_pkg"}"#).unwrap();
        assert!(!builder.is_empty());
        assert!(builder.build().is_err());
    }
}
