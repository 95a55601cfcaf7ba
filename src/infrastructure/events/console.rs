//! Console Event Sink
//!
//! Renders deploy events as one status line per stage transition.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::domain::value_objects::{DeploymentTarget, RuntimeIdentifier};
use crate::ui::views::deploy as view;
use crate::ui::UiContext;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that prints human-readable progress to stdout
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    /// Target and runtime captured from `Started`, needed to phrase later lines
    run: Mutex<Option<(DeploymentTarget, RuntimeIdentifier)>>,
    color: bool,
    unicode: bool,
    verbose: u8,
}

impl ConsoleEventSink {
    pub fn stdout(ui: &UiContext) -> Self {
        Self::with_writer(io::stdout(), ui)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, ui: &UiContext) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            run: Mutex::new(None),
            color: ui.color,
            unicode: ui.unicode,
            verbose: ui.verbose,
        }
    }

    fn write(&self, text: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(text.as_bytes());
            let _ = writer.flush();
        }
    }

    fn run(&self) -> (DeploymentTarget, RuntimeIdentifier) {
        self.run
            .lock()
            .ok()
            .and_then(|run| run.clone())
            .unwrap_or_default()
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let (c, u) = (self.color, self.unicode);
        let text = match event {
            DeployEvent::Started {
                target,
                runtime,
                dry_run,
            } => {
                let header = view::render_deploy_header(&target, runtime, dry_run, c, u);
                if let Ok(mut run) = self.run.lock() {
                    *run = Some((target, runtime));
                }
                format!("{header}\n")
            }
            DeployEvent::Planned { stage, command } => view::render_planned(stage, &command, c, u),
            DeployEvent::StageStarted { stage, command } => {
                let (target, runtime) = self.run();
                let mut text = view::render_stage_started(stage, &target, runtime, c, u);
                if self.verbose > 0 {
                    text.push_str(&view::render_command(&command, c, u));
                }
                text
            }
            DeployEvent::StageSucceeded { stage } => {
                let (target, runtime) = self.run();
                view::render_stage_succeeded(stage, &target, runtime, c, u)
            }
            DeployEvent::StageFailed { stage, message, .. } => {
                let (target, _) = self.run();
                view::render_stage_failed(stage, &target, &message, c, u)
            }
            DeployEvent::Completed { state, duration_ms } => {
                let (target, _) = self.run();
                view::render_completion(state, &target, duration_ms, c, u)
            }
        };
        self.write(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::value_objects::{DeployState, Stage};
    use crate::ui::terminal::TerminalCapabilities;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn plain_ui(verbose: u8) -> UiContext {
        let caps = TerminalCapabilities {
            is_tty: false,
            supports_color: false,
            supports_unicode: true,
            is_ci: false,
        };
        UiContext::from_caps(false, verbose, None, &Config::default(), caps)
    }

    fn started() -> DeployEvent {
        DeployEvent::Started {
            target: DeploymentTarget::new("myapp", "myrg"),
            runtime: RuntimeIdentifier::PYTHON,
            dry_run: false,
        }
    }

    #[test]
    fn success_run_prints_success_line() {
        let buf = SharedBuf::default();
        let sink = ConsoleEventSink::with_writer(buf.clone(), &plain_ui(0));

        sink.on_event(started());
        sink.on_event(DeployEvent::StageSucceeded {
            stage: Stage::Restart,
        });
        sink.on_event(DeployEvent::Completed {
            state: DeployState::Restarted,
            duration_ms: 2000,
        });

        let out = buf.contents();
        assert!(out.contains("App: myapp"));
        assert!(out.contains("✓ Restarted myapp"));
        assert!(out.contains("✓ Deployed myapp to myrg (2.0s)"));
    }

    #[test]
    fn verbose_echoes_command() {
        let buf = SharedBuf::default();
        let sink = ConsoleEventSink::with_writer(buf.clone(), &plain_ui(1));

        sink.on_event(started());
        sink.on_event(DeployEvent::StageStarted {
            stage: Stage::Restart,
            command: "az functionapp restart --name myapp --resource-group myrg".into(),
        });

        let out = buf.contents();
        assert!(out.contains("● Restarting myapp..."));
        assert!(out.contains("↳ az functionapp restart --name myapp"));
    }

    #[test]
    fn quiet_does_not_echo_command() {
        let buf = SharedBuf::default();
        let sink = ConsoleEventSink::with_writer(buf.clone(), &plain_ui(0));

        sink.on_event(started());
        sink.on_event(DeployEvent::StageStarted {
            stage: Stage::Publish,
            command: "func azure functionapp publish myapp --python".into(),
        });

        assert!(!buf.contents().contains("func azure"));
    }

    #[test]
    fn restart_failure_prints_warning() {
        let buf = SharedBuf::default();
        let sink = ConsoleEventSink::with_writer(buf.clone(), &plain_ui(0));

        sink.on_event(started());
        sink.on_event(DeployEvent::StageFailed {
            stage: Stage::Restart,
            fatal: false,
            exit_code: Some(1),
            message: "'az' exited with status 1".into(),
        });

        assert!(buf.contents().contains("⚠ Restart failed"));
    }
}
