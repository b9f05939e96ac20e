//! Scenario replay loop
//!
//! Feeds every step through a [`Navigator`] backed by a [`ScriptedHost`] and
//! writes one or more [`NavEvent`]s per step. When a command makes the host
//! activate a window, the resulting activation notification is forwarded to
//! the navigator, just as a live editor would raise it.

use std::io::Write;
use tabnav_app::{Navigator, Outcome, TrackerState};
use tabnav_core::prelude::*;
use tabnav_core::{Command, OpenTarget, WindowId};

use super::{Scenario, ScriptedHost, Step};
use crate::headless::NavEvent;

/// Final state after a replay
#[derive(Debug)]
pub struct RunReport {
    pub host: ScriptedHost,
    pub tracker: TrackerState,
    /// Steps that ended in a recoverable error
    pub failed_steps: usize,
}

/// Replay `scenario`, writing NDJSON events to `out`.
///
/// Recoverable errors are reported as events and the replay continues;
/// fatal ones abort and are returned.
pub fn run<W: Write>(scenario: &Scenario, out: &mut W) -> Result<RunReport> {
    let mut host = ScriptedHost::from_scenario(scenario)?;
    let mut nav = Navigator::new();
    let mut failed_steps = 0;

    NavEvent::scenario_loaded(
        scenario.windows.len(),
        scenario.projects.len(),
        scenario.steps.len(),
    )
    .emit_to(out)?;

    for (i, step) in scenario.steps.iter().enumerate() {
        trace!("Step {}: {:?}", i, step);
        let before = nav.tracker_state();

        match apply_step(step, &mut nav, &mut host, out) {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => {
                warn!("Step {} ({}) failed: {}", i, step.label(), e);
                failed_steps += 1;
                NavEvent::error(e.to_string(), false).emit_to(out)?;
            }
            Err(e) => {
                error!("Step {} ({}) aborted the run: {}", i, step.label(), e);
                NavEvent::error(e.to_string(), true).emit_to(out)?;
                return Err(e);
            }
        }

        let after = nav.tracker_state();
        if after != before {
            NavEvent::tracker_changed(after).emit_to(out)?;
        }
    }

    info!(
        "Replayed {} steps, {} activations, {} failed",
        scenario.steps.len(),
        host.activations.len(),
        failed_steps
    );

    Ok(RunReport {
        tracker: nav.tracker_state(),
        host,
        failed_steps,
    })
}

fn apply_step<W: Write>(
    step: &Step,
    nav: &mut Navigator,
    host: &mut ScriptedHost,
    out: &mut W,
) -> Result<()> {
    match step {
        Step::Command { command } => run_command(*command, step, nav, host, out),
        Step::CommandId { id } => {
            let command = Command::from_id(*id)?;
            run_command(command, step, nav, host, out)
        }
        Step::Activated { got, lost } => {
            let previous = host.focused();
            let (got, _) = host.focus(WindowId(*got))?;
            let lost_id = lost.map(WindowId).or(previous);
            let lost = lost_id.and_then(|id| host.window(id)).cloned();

            nav.on_window_activated(&got, lost.as_ref());
            NavEvent::focus_changed(got.id, lost_id).emit_to(out)
        }
        Step::Closing { window } => {
            let id = WindowId(*window);
            nav.on_window_closing(id);
            host.close(id)?;
            NavEvent::window_closed(id).emit_to(out)
        }
        Step::QuickOpen {
            query,
            other_target,
        } => {
            let target = if *other_target {
                OpenTarget::Other
            } else {
                OpenTarget::Primary
            };
            let outcome = nav.quick_open(query, target, host)?;
            report(outcome, None, step, host, out)
        }
    }
}

/// Echoes the host's activation back to the navigator, so a replayed ping-pong
/// alternates; a held tracker state is only observable on `Navigator` itself.
fn run_command<W: Write>(
    command: Command,
    step: &Step,
    nav: &mut Navigator,
    host: &mut ScriptedHost,
    out: &mut W,
) -> Result<()> {
    let previous = host.focused();
    let outcome = nav.execute(command, host)?;

    // The host raises an activation event for the window it just focused
    if let Some(window) = outcome.activated() {
        if previous != Some(window) {
            if let Some(got) = host.window(window).cloned() {
                let lost = previous.and_then(|id| host.window(id)).cloned();
                nav.on_window_activated(&got, lost.as_ref());
            }
        }
    }

    report(outcome, Some(command), step, host, out)
}

fn report<W: Write>(
    outcome: Outcome,
    command: Option<Command>,
    step: &Step,
    host: &ScriptedHost,
    out: &mut W,
) -> Result<()> {
    let event = match outcome {
        Outcome::Activated { window } => {
            let title = host.window(window).map(|w| w.title.as_str()).unwrap_or("");
            NavEvent::window_activated(window, title, command)
        }
        Outcome::FilesIndexed { target, .. } => {
            let files = host
                .presented
                .last()
                .map(|(paths, _)| paths.clone())
                .unwrap_or_default();
            NavEvent::files_indexed(target, files)
        }
        Outcome::FileOpened { path, target } => NavEvent::file_opened(&path, target),
        Outcome::NoOp { reason } => NavEvent::no_op(step.label(), reason),
    };
    event.emit_to(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(buf: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8_lossy(buf)
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    const THREE_PANES: &str = r#"
active = 1

[[windows]]
id = 1
title = "a.cpp"
top = 10
left = 0

[[windows]]
id = 2
title = "b.cpp"
top = 10
left = 10

[[windows]]
id = 3
title = "c.cpp"
top = 10
left = 20

[[windows]]
id = 9
title = "Output"
kind = "tool"
top = 400
"#;

    fn scenario_with_steps(steps: &str) -> Scenario {
        Scenario::parse(&format!("{}\n{}", THREE_PANES, steps)).unwrap()
    }

    #[test]
    fn test_jump_left_wraps_and_reports_window() {
        let scenario = scenario_with_steps("[[steps]]\ntype = \"command\"\ncommand = \"jump_left\"\n");
        let mut out = Vec::new();

        let report = run(&scenario, &mut out).unwrap();
        assert_eq!(report.host.activations, vec![WindowId(3)]);

        let events = events(&out);
        assert_eq!(events[0]["event"], "scenario_loaded");
        assert_eq!(events[1]["event"], "window_activated");
        assert_eq!(events[1]["title"], "c.cpp");
    }

    #[test]
    fn test_ping_pong_after_tool_window_returns_to_document() {
        let scenario = scenario_with_steps(
            r#"
[[steps]]
type = "activated"
got = 9

[[steps]]
type = "command"
command = "ping_pong"
"#,
        );
        let mut out = Vec::new();

        let report = run(&scenario, &mut out).unwrap();
        assert_eq!(report.host.activations, vec![WindowId(1)]);
        // Returning to the document is a document activation, which clears memory
        assert_eq!(report.tracker, TrackerState::Empty);

        let kinds: Vec<String> = events(&out)
            .iter()
            .map(|e| e["event"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            kinds,
            vec![
                "scenario_loaded",
                "focus_changed",
                "tracker_changed",
                "window_activated",
                "tracker_changed",
            ]
        );
    }

    #[test]
    fn test_closing_remembered_window_clears_tracker() {
        let scenario = scenario_with_steps(
            r#"
[[steps]]
type = "activated"
got = 9

[[steps]]
type = "closing"
window = 1
"#,
        );
        let mut out = Vec::new();

        let report = run(&scenario, &mut out).unwrap();
        assert_eq!(report.tracker, TrackerState::Empty);
        assert!(report.host.window(WindowId(1)).is_none());
    }

    #[test]
    fn test_unknown_command_id_is_recoverable() {
        let scenario = scenario_with_steps(
            r#"
[[steps]]
type = "command_id"
id = 4096

[[steps]]
type = "command_id"
id = 258
"#,
        );
        let mut out = Vec::new();

        let report = run(&scenario, &mut out).unwrap();
        assert_eq!(report.failed_steps, 1);
        assert_eq!(report.host.activations, vec![WindowId(2)]);

        let events = events(&out);
        assert_eq!(events[1]["event"], "error");
        assert_eq!(events[1]["fatal"], false);
    }

    #[test]
    fn test_jump_with_only_tool_windows_reports_no_op() {
        let scenario = Scenario::parse(
            r#"
[[windows]]
id = 9
kind = "tool"
top = 400

[[steps]]
type = "command"
command = "jump_up"
"#,
        )
        .unwrap();
        let mut out = Vec::new();

        run(&scenario, &mut out).unwrap();
        let events = events(&out);
        assert_eq!(events[1]["event"], "no_op");
        assert_eq!(events[1]["step"], "jump_up");
        assert_eq!(events[1]["reason"], "no_candidates");
    }
}
