//! Bootstrap Service - main application orchestrator.
//!
//! This service finalizes a directory the template engine has just
//! materialized:
//! 1. Ensure the package skeleton exists
//! 2. Initialize version control with one commit
//! 3. Install commit hooks (soft-fail)
//! 4. Produce the completion report
//!
//! Steps run strictly in that order. A failure in 1 or 2 aborts the run.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{CommandRunner, Filesystem},
        services::{
            settings::{BootstrapSettings, HOOKS_ADVISORY},
            step::run_step,
        },
    },
    domain::{
        DomainValidator as validator, ProcessInvocation, ProjectContext, SkeletonEntry,
        SkeletonPlan, StepOutcome,
    },
    error::{PyseedError, PyseedResult},
};

/// What happened to hook installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookStatus {
    Installed,
    /// Turned off by configuration; nothing was run.
    Disabled,
    /// An invocation failed; the rest of the hook step was not run.
    Skipped { reason: String },
}

impl HookStatus {
    /// Instructional text to show the user, if any.
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            Self::Skipped { .. } => Some(HOOKS_ADVISORY),
            _ => None,
        }
    }
}

/// Outcome of a full bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub context: ProjectContext,
    pub hooks: HookStatus,
    pub completion: String,
}

/// Everything a run would do, without doing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPlan {
    pub root: PathBuf,
    pub skeleton: SkeletonPlan,
    pub vcs: Vec<ProcessInvocation>,
    pub hooks: Vec<ProcessInvocation>,
}

/// Post-generation bootstrapper.
pub struct BootstrapService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    root: PathBuf,
    settings: BootstrapSettings,
}

impl BootstrapService {
    /// Create a new bootstrap service working inside `root`.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        root: impl Into<PathBuf>,
        settings: BootstrapSettings,
    ) -> Self {
        Self {
            filesystem,
            runner,
            root: root.into(),
            settings,
        }
    }

    /// Run the whole bootstrap.
    #[instrument(
        skip_all,
        fields(
            project = %context.project_name(),
            root = %self.root.display()
        )
    )]
    pub fn run(&self, context: &ProjectContext) -> PyseedResult<BootstrapReport> {
        info!("Bootstrapping project");

        validator::validate_context(context).map_err(PyseedError::Domain)?;
        self.validate_invocations()?;

        self.ensure_skeleton(context)?;
        self.initialize_version_control()?;
        let hooks = self.install_hooks()?;
        let completion = self.completion_message(context);

        info!("Bootstrap completed successfully");
        Ok(BootstrapReport {
            context: context.clone(),
            hooks,
            completion,
        })
    }

    /// Describe the run for `context` without touching anything.
    pub fn plan(&self, context: &ProjectContext) -> PyseedResult<BootstrapPlan> {
        validator::validate_context(context)?;
        let skeleton = SkeletonPlan::for_context(context);
        validator::validate_skeleton(&skeleton)?;
        self.validate_invocations()?;

        Ok(BootstrapPlan {
            root: self.root.clone(),
            skeleton,
            vcs: self.vcs_invocations(),
            hooks: if self.settings.hooks_enabled {
                self.hook_invocations()
            } else {
                Vec::new()
            },
        })
    }

    /// Create the package and tests directories and their marker files.
    ///
    /// Existing directories are accepted and existing files are left as they
    /// are. Any IO failure aborts before version control is touched.
    #[instrument(skip_all, fields(package = %context.package_name()))]
    pub fn ensure_skeleton(&self, context: &ProjectContext) -> PyseedResult<()> {
        let plan = SkeletonPlan::for_context(context);
        validator::validate_skeleton(&plan)?;

        for entry in plan.entries() {
            let path = self.root.join(entry.path());
            match entry {
                SkeletonEntry::Directory(_) => {
                    debug!(path = %path.display(), "Ensuring directory");
                    self.filesystem.create_dir_all(&path)?;
                }
                SkeletonEntry::EmptyFile(_) => {
                    debug!(path = %path.display(), "Ensuring file");
                    self.filesystem.touch(&path)?;
                }
            }
        }

        info!(entries = plan.entry_count(), "Skeleton ensured");
        Ok(())
    }

    /// `init`, `add .`, optionally `config commit.gpgsign false`, `commit`.
    ///
    /// Every invocation is fatal.
    #[instrument(skip_all, fields(program = %self.settings.vcs_program))]
    pub fn initialize_version_control(&self) -> PyseedResult<()> {
        let invocations = self.vcs_invocations();
        validator::validate_invocations(&invocations)?;

        run_step(&*self.runner, &self.root, "version-control", &invocations)?;

        info!("Repository initialized with initial commit");
        Ok(())
    }

    /// `install` then `autoupdate` on the hook manager. Never fails the run
    /// because of the hook manager itself.
    #[instrument(skip_all, fields(program = %self.settings.hook_program))]
    pub fn install_hooks(&self) -> PyseedResult<HookStatus> {
        if !self.settings.hooks_enabled {
            info!("Hook installation disabled");
            return Ok(HookStatus::Disabled);
        }

        let invocations = self.hook_invocations();
        validator::validate_invocations(&invocations)?;

        match run_step(&*self.runner, &self.root, "hooks", &invocations)? {
            StepOutcome::Completed => {
                info!("Commit hooks installed");
                Ok(HookStatus::Installed)
            }
            StepOutcome::Skipped { reason } => {
                debug!(%reason, "Commit hooks not installed");
                Ok(HookStatus::Skipped { reason })
            }
        }
    }

    /// The success message and next-step instructions for `context`.
    pub fn completion_message(&self, context: &ProjectContext) -> String {
        format!(
            "Project {name} created successfully!\n\
             \n\
             Next steps:\n\
             1. Change to the project directory:\n\
             \x20  cd {slug}\n\
             \n\
             2. Run CI tasks:\n\
             \x20  {ci}",
            name = context.project_name(),
            slug = context.project_slug(),
            ci = self.settings.ci_command,
        )
    }

    /// Reject unusable program settings before anything touches the disk.
    fn validate_invocations(&self) -> PyseedResult<()> {
        validator::validate_invocations(&self.vcs_invocations())?;
        if self.settings.hooks_enabled {
            validator::validate_invocations(&self.hook_invocations())?;
        }
        Ok(())
    }

    pub fn vcs_invocations(&self) -> Vec<ProcessInvocation> {
        let git = &self.settings.vcs_program;

        let mut invocations = vec![
            ProcessInvocation::fatal(git).arg("init"),
            ProcessInvocation::fatal(git).args(["add", "."]),
        ];
        if self.settings.disable_signing {
            invocations
                .push(ProcessInvocation::fatal(git).args(["config", "commit.gpgsign", "false"]));
        }
        invocations.push(
            ProcessInvocation::fatal(git)
                .args(["commit", "-m"])
                .arg(&self.settings.commit_message),
        );
        invocations
    }

    pub fn hook_invocations(&self) -> Vec<ProcessInvocation> {
        let tool = &self.settings.hook_program;

        let mut invocations = vec![ProcessInvocation::warn(tool).arg("install")];
        if self.settings.hook_autoupdate {
            invocations.push(ProcessInvocation::warn(tool).arg("autoupdate"));
        }
        invocations
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockCommandRunner, MockFilesystem},
    };
    use crate::domain::DomainError;
    use mockall::Sequence;
    use std::path::Path;

    fn demo() -> ProjectContext {
        ProjectContext::new("demo_pkg", "Demo Project", "demo-project").unwrap()
    }

    fn ok_filesystem() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_touch().returning(|_| Ok(()));
        fs
    }

    fn service(fs: MockFilesystem, runner: MockCommandRunner) -> BootstrapService {
        BootstrapService::new(
            Box::new(fs),
            Box::new(runner),
            "/work/demo-project",
            BootstrapSettings::default(),
        )
    }

    fn is(command: &'static str) -> impl Fn(&ProcessInvocation, &Path) -> bool + Send + 'static {
        move |inv, _| inv.command_line() == command
    }

    #[test]
    fn full_run_executes_steps_in_order() {
        let mut seq = Sequence::new();
        let mut fs = MockFilesystem::new();
        let mut runner = MockCommandRunner::new();

        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/work/demo-project/src/demo_pkg"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/work/demo-project/tests"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_touch()
            .times(3)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        for command in [
            "git init",
            "git add .",
            "git config commit.gpgsign false",
            r#"git commit -m "Initial commit from cookiecutter-python-windsurf""#,
            "pre-commit install",
            "pre-commit autoupdate",
        ] {
            runner
                .expect_run()
                .withf(is(command))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }

        let report = service(fs, runner).run(&demo()).unwrap();
        assert_eq!(report.hooks, HookStatus::Installed);
        assert_eq!(report.hooks.advisory(), None);
    }

    #[test]
    fn commands_run_in_project_root() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|_, dir| dir == Path::new("/work/demo-project"))
            .times(6)
            .returning(|_, _| Ok(()));

        service(ok_filesystem(), runner).run(&demo()).unwrap();
    }

    #[test]
    fn skeleton_failure_prevents_version_control() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Not a directory".into(),
            }
            .into())
        });
        fs.expect_touch().never();

        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let err = service(fs, runner).run(&demo()).unwrap_err();
        assert!(matches!(
            err,
            PyseedError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn vcs_failure_aborts_before_hooks() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().withf(is("git init")).returning(|_, _| Ok(()));
        runner.expect_run().withf(is("git add .")).returning(|_, _| {
            Err(ApplicationError::CommandFailed {
                command: "git add .".into(),
                code: Some(128),
            }
            .into())
        });
        runner
            .expect_run()
            .withf(|inv, _| inv.program() == "pre-commit")
            .never();
        runner
            .expect_run()
            .withf(|inv, _| inv.arguments().first().map(String::as_str) == Some("commit"))
            .never();

        let err = service(ok_filesystem(), runner).run(&demo()).unwrap_err();
        assert_eq!(err.tool_exit_code(), Some(128));
    }

    #[test]
    fn missing_vcs_binary_is_fatal() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(1).returning(|inv, _| {
            Err(ApplicationError::CommandNotFound {
                program: inv.program().into(),
            }
            .into())
        });

        let err = service(ok_filesystem(), runner).run(&demo()).unwrap_err();
        assert!(err.to_string().contains("Command not found: git"));
    }

    #[test]
    fn empty_hook_program_fails_before_any_side_effect() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_touch().never();
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let settings = BootstrapSettings {
            hook_program: String::new(),
            ..BootstrapSettings::default()
        };
        let service = BootstrapService::new(
            Box::new(fs),
            Box::new(runner),
            "/work/demo-project",
            settings,
        );

        let err = service.run(&demo()).unwrap_err();
        assert_eq!(err, PyseedError::Domain(DomainError::EmptyProgram));
        assert!(service.plan(&demo()).is_err());
    }

    #[test]
    fn empty_hook_program_is_ignored_when_hooks_disabled() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|inv, _| inv.program() == "git")
            .times(4)
            .returning(|_, _| Ok(()));

        let settings = BootstrapSettings {
            hooks_enabled: false,
            hook_program: String::new(),
            ..BootstrapSettings::default()
        };
        let service = BootstrapService::new(
            Box::new(ok_filesystem()),
            Box::new(runner),
            "/work/demo-project",
            settings,
        );

        assert_eq!(service.run(&demo()).unwrap().hooks, HookStatus::Disabled);
    }

    #[test]
    fn missing_hook_manager_is_soft() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|inv, _| inv.program() == "git")
            .times(4)
            .returning(|_, _| Ok(()));
        runner
            .expect_run()
            .withf(is("pre-commit install"))
            .times(1)
            .returning(|inv, _| {
                Err(ApplicationError::CommandNotFound {
                    program: inv.program().into(),
                }
                .into())
            });
        runner
            .expect_run()
            .withf(is("pre-commit autoupdate"))
            .never();

        let report = service(ok_filesystem(), runner).run(&demo()).unwrap();
        assert!(matches!(report.hooks, HookStatus::Skipped { .. }));
        assert_eq!(report.hooks.advisory(), Some(HOOKS_ADVISORY));
    }

    #[test]
    fn autoupdate_failure_is_soft() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|inv, _| inv.command_line() != "pre-commit autoupdate")
            .returning(|_, _| Ok(()));
        runner
            .expect_run()
            .withf(is("pre-commit autoupdate"))
            .times(1)
            .returning(|_, _| {
                Err(ApplicationError::CommandFailed {
                    command: "pre-commit autoupdate".into(),
                    code: Some(1),
                }
                .into())
            });

        let report = service(ok_filesystem(), runner).run(&demo()).unwrap();
        assert!(report.hooks.advisory().is_some());
    }

    #[test]
    fn disabled_hooks_run_nothing() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|inv, _| inv.program() == "git")
            .returning(|_, _| Ok(()));
        runner
            .expect_run()
            .withf(|inv, _| inv.program() == "pre-commit")
            .never();

        let settings = BootstrapSettings {
            hooks_enabled: false,
            ..BootstrapSettings::default()
        };
        let service =
            BootstrapService::new(Box::new(ok_filesystem()), Box::new(runner), ".", settings);

        let report = service.run(&demo()).unwrap();
        assert_eq!(report.hooks, HookStatus::Disabled);
        assert_eq!(report.hooks.advisory(), None);
    }

    #[test]
    fn completion_message_names_project_and_next_steps() {
        let svc = service(MockFilesystem::new(), MockCommandRunner::new());
        let msg = svc.completion_message(&demo());

        assert!(msg.starts_with("Project Demo Project created successfully!"));
        assert!(msg.contains("cd demo-project"));
        assert!(msg.contains("task ci"));
    }

    #[test]
    fn signing_step_can_be_omitted() {
        let settings = BootstrapSettings {
            disable_signing: false,
            ..BootstrapSettings::default()
        };
        let svc = BootstrapService::new(
            Box::new(MockFilesystem::new()),
            Box::new(MockCommandRunner::new()),
            ".",
            settings,
        );
        let lines: Vec<_> = svc
            .vcs_invocations()
            .iter()
            .map(ProcessInvocation::command_line)
            .collect();
        assert_eq!(lines.len(), 3);
        assert!(!lines.iter().any(|l| l.contains("gpgsign")));
    }

    #[test]
    fn plan_lists_everything_without_side_effects() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_touch().never();
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let plan = service(fs, runner).plan(&demo()).unwrap();
        assert_eq!(plan.skeleton.entry_count(), 5);
        assert_eq!(plan.vcs.len(), 4);
        assert_eq!(plan.hooks.len(), 2);
        assert!(plan.vcs.iter().all(ProcessInvocation::is_fatal));
        assert!(!plan.hooks.iter().any(ProcessInvocation::is_fatal));
    }
}
