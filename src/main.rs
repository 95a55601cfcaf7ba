//! deploy - set runtime, publish and restart a Python Azure Function app
//!
//! Usage: deploy [OPTIONS] [APP_NAME] [RESOURCE_GROUP]
//!
//! Exit status:
//!   0  deployed (including when only the restart failed), or dry run
//!   1  runtime configuration or publish failed, or config could not be loaded
//!   2  invalid command line

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use funcship::config;
use funcship::presentation::{factory, Cli};
use funcship::ui::output::{print_config_source, print_config_warnings};
use funcship::ui::UiContext;
use funcship::{DeployOptions, DeploymentTarget};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("failed to resolve the working directory")?;
    let loaded = config::discover(&cwd, cli.config.as_deref())?;
    let config =
        config::apply_env_overrides(loaded.config, |k| std::env::var(k).ok(), &mut io::stderr());

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    print_config_warnings(&mut io::stderr(), &loaded.warnings, &ui);
    print_config_source(&mut io::stderr(), loaded.path.as_deref(), &ui);

    let target = DeploymentTarget::resolve(
        cli.app_name.as_deref(),
        cli.resource_group.as_deref(),
        &config.default_target(),
    );

    let use_case = factory::create_deploy_use_case(&config, &ui);
    let sink = factory::create_event_sink(&ui);
    let options = DeployOptions {
        dry_run: cli.dry_run,
    };

    let outcome = use_case.execute(&target, &options, sink.as_ref());
    Ok(ExitCode::from(outcome.exit_code()))
}
