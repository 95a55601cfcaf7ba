use crate::domain::value_objects::{DeployState, DeploymentTarget, RuntimeIdentifier, Stage};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Title line followed by the resolved target, one `label: value` per line.
pub fn render_deploy_header(
    target: &DeploymentTarget,
    runtime: RuntimeIdentifier,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run { "Deploy (dry run)" } else { "Deploy" };
    let mut out = line(
        Icon::Deploy,
        &ColoredText::info(title).bold().render(supports_color),
        supports_color,
        supports_unicode,
    );
    let fx_version = runtime.linux_fx_version();
    for (label, value) in [
        ("App", target.app_name.as_str()),
        ("Resource group", target.resource_group.as_str()),
        ("Runtime", fx_version.as_str()),
    ] {
        out.push_str(&format!("{}: {}\n", label, value));
    }
    out
}

pub fn render_stage_started(
    stage: Stage,
    target: &DeploymentTarget,
    runtime: RuntimeIdentifier,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let text = match stage {
        Stage::ConfigureRuntime => {
            format!("Setting runtime of {} to {}...", target.app_name, runtime)
        }
        Stage::Publish => format!("Publishing {}...", target.app_name),
        Stage::Restart => format!("Restarting {}...", target.app_name),
    };
    line(Icon::Progress, &text, supports_color, supports_unicode)
}

pub fn render_stage_succeeded(
    stage: Stage,
    target: &DeploymentTarget,
    runtime: RuntimeIdentifier,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let text = match stage {
        Stage::ConfigureRuntime => format!("Runtime set to {}", runtime),
        Stage::Publish => format!("Published {}", target.app_name),
        Stage::Restart => format!("Restarted {}", target.app_name),
    };
    line(Icon::Success, &text, supports_color, supports_unicode)
}

/// Fatal stages render as errors; the advisory restart renders as a warning.
pub fn render_stage_failed(
    stage: Stage,
    target: &DeploymentTarget,
    message: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match stage {
        Stage::ConfigureRuntime => line(
            Icon::Error,
            &ColoredText::error(format!("Failed to set runtime: {}", message))
                .render(supports_color),
            supports_color,
            supports_unicode,
        ),
        Stage::Publish => line(
            Icon::Error,
            &ColoredText::error(format!("Publish failed: {}", message)).render(supports_color),
            supports_color,
            supports_unicode,
        ),
        Stage::Restart => line(
            Icon::Warning,
            &ColoredText::warning(format!(
                "Restart failed: {}. The new code is live; restart {} manually if it is not picked up.",
                message, target.app_name
            ))
            .render(supports_color),
            supports_color,
            supports_unicode,
        ),
    }
}

/// Verbose echo of the command a stage is about to run.
pub fn render_command(command: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "  {} {}\n",
        Icon::Arrow.colored(supports_color, supports_unicode),
        ColoredText::dim(command).render(supports_color)
    )
}

pub fn render_planned(
    stage: Stage,
    command: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    line(
        Icon::Pending,
        &format!("{}: {}", stage.label(), command),
        supports_color,
        supports_unicode,
    )
}

pub fn render_completion(
    state: DeployState,
    target: &DeploymentTarget,
    duration_ms: u64,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let elapsed = format!("{:.1}s", duration_ms as f64 / 1000.0);
    match state {
        DeployState::Restarted => line(
            Icon::Success,
            &ColoredText::success(format!(
                "Deployed {} to {} ({})",
                target.app_name, target.resource_group, elapsed
            ))
            .bold()
            .render(supports_color),
            supports_color,
            supports_unicode,
        ),
        DeployState::RestartFailed => line(
            Icon::Warning,
            &format!("Deployed {} without restart ({})", target.app_name, elapsed),
            supports_color,
            supports_unicode,
        ),
        DeployState::RuntimeFailed | DeployState::PublishFailed => line(
            Icon::Error,
            &ColoredText::error(format!("Deployment of {} aborted", target.app_name))
                .bold()
                .render(supports_color),
            supports_color,
            supports_unicode,
        ),
        // Dry run, or an interrupted state that never ran a stage.
        DeployState::Start | DeployState::RuntimeSet | DeployState::Published => line(
            Icon::Pending,
            "Dry run: no commands were executed",
            supports_color,
            supports_unicode,
        ),
    }
}

fn line(icon: Icon, text: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!("{} {}\n", icon.colored(supports_color, supports_unicode), text)
}
