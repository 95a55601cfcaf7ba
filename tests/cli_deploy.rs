#![cfg(unix)]

mod common;

use common::{FakeExits, TestEnv};

#[test]
fn test_no_args_targets_default_app_and_group() {
    let env = TestEnv::new(FakeExits::all_ok());
    let result = env.run(&[]);

    assert_eq!(result.exit_code, Some(0), "stderr:\n{}", result.stderr);
    assert_eq!(
        env.calls(),
        vec![
            "az functionapp config set --name az-ss-sync --resource-group phx-sh-automation-us-1 --linux-fx-version PYTHON|3.11",
            "func azure functionapp publish az-ss-sync --python",
            "az functionapp restart --name az-ss-sync --resource-group phx-sh-automation-us-1",
        ]
    );
}

#[test]
fn test_positionals_parameterize_every_invocation() {
    let env = TestEnv::new(FakeExits::all_ok());
    let result = env.run(&["myapp", "myrg"]);

    assert_eq!(result.exit_code, Some(0));
    assert_eq!(
        env.calls(),
        vec![
            "az functionapp config set --name myapp --resource-group myrg --linux-fx-version PYTHON|3.11",
            "func azure functionapp publish myapp --python",
            "az functionapp restart --name myapp --resource-group myrg",
        ]
    );
}

#[test]
fn test_success_prints_status_lines() {
    let env = TestEnv::new(FakeExits::all_ok());
    let result = env.run(&["myapp", "myrg"]);

    assert!(result.stdout.contains("✓ Runtime set to PYTHON|3.11"));
    assert!(result.stdout.contains("✓ Published myapp"));
    assert!(result.stdout.contains("✓ Restarted myapp"));
    assert!(
        result.stdout.contains("✓ Deployed myapp to myrg"),
        "missing success line; got:\n{}",
        result.stdout
    );
}

#[test]
fn test_runtime_failure_stops_before_publish() {
    let env = TestEnv::new(FakeExits {
        config_set: 1,
        ..FakeExits::default()
    });
    let result = env.run(&[]);

    assert_eq!(result.exit_code, Some(1));
    assert_eq!(env.calls().len(), 1);
    assert!(env.calls()[0].starts_with("az functionapp config set"));
    assert!(result.stdout.contains("✗ Failed to set runtime"));
    assert!(!result.stdout.contains("Publishing"));
}

#[test]
fn test_runtime_failure_with_unusual_status_still_exits_one() {
    let env = TestEnv::new(FakeExits {
        config_set: 42,
        ..FakeExits::default()
    });
    let result = env.run(&[]);

    assert_eq!(result.exit_code, Some(1));
    assert!(result.stdout.contains("exited with status 42"));
}

#[test]
fn test_publish_failure_stops_before_restart() {
    let env = TestEnv::new(FakeExits {
        publish: 1,
        ..FakeExits::default()
    });
    let result = env.run(&["myapp", "myrg"]);

    assert_eq!(result.exit_code, Some(1));
    let calls = env.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[1].starts_with("func azure functionapp publish myapp"));
    assert!(result.stdout.contains("✗ Publish failed"));
    assert!(!calls.iter().any(|c| c.contains("restart")));
}

#[test]
fn test_restart_failure_warns_without_failing() {
    let env = TestEnv::new(FakeExits {
        restart: 1,
        ..FakeExits::default()
    });
    let result = env.run(&["myapp", "myrg"]);

    assert_eq!(
        result.exit_code,
        Some(0),
        "restart failure must not force a failing exit"
    );
    assert_eq!(env.calls().len(), 3);
    assert!(result.stdout.contains("⚠ Restart failed"));
    assert!(!result.stdout.contains("✓ Deployed"));
}

#[test]
fn test_missing_platform_cli_is_fatal() {
    let env = TestEnv::new(FakeExits::all_ok())
        .with_env("FUNCSHIP_AZ", "/nonexistent/funcship-test/az");
    let result = env.run(&[]);

    assert_eq!(result.exit_code, Some(1));
    assert!(env.calls().is_empty());
    assert!(result.stdout.contains("failed to run '/nonexistent/funcship-test/az'"));
}

#[test]
fn test_empty_positional_falls_back_to_default() {
    let env = TestEnv::new(FakeExits::all_ok());
    let result = env.run(&["", "myrg"]);

    assert_eq!(result.exit_code, Some(0));
    assert!(env.calls()[0].contains("--name az-ss-sync --resource-group myrg"));
}

#[test]
fn test_platform_output_is_passed_through() {
    let env = TestEnv::new(FakeExits::all_ok());
    let result = env.run(&[]);

    assert!(result.stdout.contains("fake az output"));
    assert!(result.stdout.contains("fake func output"));
}

#[test]
fn test_verbose_echoes_quoted_commands() {
    let env = TestEnv::new(FakeExits::all_ok());
    let result = env.run(&["-v", "myapp", "myrg"]);

    assert!(result.stdout.contains("--linux-fx-version 'PYTHON|3.11'"));
    assert!(result.stderr.contains("No config file found; using built-in defaults"));
}
