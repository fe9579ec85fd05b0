//! Implementation of the `pyseed bootstrap` command.
//!
//! Responsibility: turn CLI arguments and config into a `ProjectContext` and
//! `BootstrapSettings`, call the core bootstrap service, and display results.
//! No business logic lives here.

use std::io;
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use pyseed_adapters::{LocalFilesystem, SystemCommandRunner, read_context, read_context_file};
use pyseed_core::{
    application::{BootstrapPlan, BootstrapReport, BootstrapService},
    domain::{ProjectContext, ProjectContextBuilder, SkeletonEntry},
    error::PyseedError,
};

use crate::{
    cli::BootstrapArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `pyseed bootstrap` command.
///
/// 1. Check the project directory exists
/// 2. Resolve template variables (JSON source, then flag overrides)
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Run the bootstrap via `BootstrapService`
/// 5. Print the hook advisory (if any) and the completion report
#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(args: BootstrapArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    ensure_project_dir(&args.dir)?;

    let context = resolve_context(&args)?;
    debug!(context = %context, "Context resolved");

    let mut settings = config.to_settings();
    if args.skip_hooks {
        settings.hooks_enabled = false;
    }

    let service = BootstrapService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemCommandRunner::new()),
        &args.dir,
        settings,
    );

    if args.dry_run {
        let plan = service.plan(&context)?;
        return show_plan(&context, &plan, &output);
    }

    info!(project = %context.project_name(), "Bootstrap started");
    let report = service.run(&context)?;
    print_report(&report, |line| output.print(line));

    Ok(())
}

/// Print the hook advisory (if any) and the completion report.
///
/// The project is bootstrapped by the time this runs, so a write failure is
/// logged and does not change the exit status.
fn print_report(report: &BootstrapReport, mut print: impl FnMut(&str) -> io::Result<()>) {
    let mut lines = Vec::with_capacity(4);
    if let Some(advisory) = report.hooks.advisory() {
        lines.extend(["", advisory]);
    }
    lines.extend(["", report.completion.as_str()]);

    if let Err(e) = lines.into_iter().try_for_each(&mut print) {
        warn!(error = %e, "Could not write the completion report");
    }
}

// ── Context resolution ────────────────────────────────────────────────────────

/// Read the JSON source (stdin or file), then let explicit flags win.
fn resolve_context(args: &BootstrapArgs) -> CliResult<ProjectContext> {
    let base = if args.stdin {
        read_context(io::stdin().lock())?
    } else if let Some(path) = &args.context {
        read_context_file(path)?
    } else {
        ProjectContext::builder()
    };

    base.merge(flag_overrides(args))
        .build()
        .map_err(|e| CliError::Core(PyseedError::Domain(e)))
}

fn flag_overrides(args: &BootstrapArgs) -> ProjectContextBuilder {
    let mut builder = ProjectContext::builder();
    if let Some(v) = &args.package_name {
        builder = builder.package_name(v);
    }
    if let Some(v) = &args.project_name {
        builder = builder.project_name(v);
    }
    if let Some(v) = &args.project_slug {
        builder = builder.project_slug(v);
    }
    builder
}

fn ensure_project_dir(dir: &Path) -> CliResult<()> {
    if dir.is_dir() {
        return Ok(());
    }
    Err(CliError::InvalidInput {
        message: format!("'{}' is not an existing directory", dir.display()),
        source: None,
    })
}

// ── Dry run ───────────────────────────────────────────────────────────────────

fn show_plan(context: &ProjectContext, plan: &BootstrapPlan, output: &OutputManager) -> CliResult<()> {
    output.header(&format!(
        "Dry run: would bootstrap '{}' in {}",
        context.project_name(),
        plan.root.display()
    ))?;

    for entry in plan.skeleton.entries() {
        let line = match entry {
            SkeletonEntry::Directory(path) => format!("mkdir  {}/", path.display()),
            SkeletonEntry::EmptyFile(path) => format!("touch  {}", path.display()),
        };
        output.item(&line)?;
    }
    for invocation in &plan.vcs {
        output.item(&format!("run    {}", invocation.command_line()))?;
    }
    for invocation in &plan.hooks {
        output.item(&format!("run    {}  (optional)", invocation.command_line()))?;
    }
    if plan.hooks.is_empty() {
        output.item("hooks  disabled")?;
    }

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
