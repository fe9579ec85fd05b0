//! External process descriptions and the policy applied when they fail.

use std::fmt;

use crate::domain::error::DomainError;

/// What a failing invocation does to the surrounding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
    /// Abort the whole bootstrap.
    Fatal,
    /// Stop the current step, warn, and keep going.
    Warn,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fatal => write!(f, "fatal"),
            Self::Warn => write!(f, "warn"),
        }
    }
}

/// One external command: program, arguments, and failure policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcessInvocation {
    program: String,
    args: Vec<String>,
    policy: FailurePolicy,
}

impl ProcessInvocation {
    pub fn new(program: impl Into<String>, policy: FailurePolicy) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            policy,
        }
    }

    pub fn fatal(program: impl Into<String>) -> Self {
        Self::new(program, FailurePolicy::Fatal)
    }

    pub fn warn(program: impl Into<String>) -> Self {
        Self::new(program, FailurePolicy::Warn)
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub const fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn is_fatal(&self) -> bool {
        self.policy == FailurePolicy::Fatal
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.program.trim().is_empty() {
            return Err(DomainError::EmptyProgram);
        }
        Ok(())
    }

    /// Shell-like rendering for logs and dry runs. Not meant to be re-parsed.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ProcessInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

fn quote(word: &str) -> String {
    if word.is_empty() || word.chars().any(char::is_whitespace) {
        format!("\"{}\"", word.replace('"', "\\\""))
    } else {
        word.to_string()
    }
}

/// Result of running a group of invocations under their policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    /// A `Warn` invocation failed; the remaining invocations were not run.
    Skipped { reason: String },
}

impl StepOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}
