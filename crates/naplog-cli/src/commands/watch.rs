//! `naplog watch`: a live tracker screen driven by stdin.
//!
//! The screen is redrawn whenever tracker state changes, whether from a
//! command typed here or from the background active-session poll.

use std::time::Duration;

use anyhow::bail;
use chrono::NaiveDate;
use naplog_core::time::{parse_clock, parse_date, today};
use naplog_tracker::{Tracker, TrackerView, messages};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use crate::cli::root_commands::WatchArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::prompt::is_yes;
use crate::context::AppContext;
use crate::output::output;

const HELP: &str = "\
commands:
  start | end                 start or end a sleep session
  nap HH:MM HH:MM             add a completed nap on the shown day
  form                        show or hide the manual nap form
  update ID START|- END|-     move a nap's bounds (- keeps the current value)
  delete ID                   delete a nap
  clear                       delete every nap on the shown day
  date YYYY-MM-DD | next | prev | today
  refresh | dismiss | help | quit";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Start,
    End,
    Nap { start: String, end: String },
    Form,
    Update {
        id: i64,
        start: Option<String>,
        end: Option<String>,
    },
    Delete(i64),
    Clear,
    Date(NaiveDate),
    Next,
    Prev,
    Today,
    Refresh,
    Dismiss,
    Help,
    Quit,
}

/// Parse a line; blank lines yield `Ok(None)`. Errors are usage messages.
fn parse_input(line: &str) -> Result<Option<Input>, String> {
    let words = line.split_whitespace().collect::<Vec<_>>();
    let Some((command, args)) = words.split_first() else {
        return Ok(None);
    };

    let input = match (command.to_ascii_lowercase().as_str(), args) {
        ("start", []) => Input::Start,
        ("end", []) => Input::End,
        ("nap", [start, end]) => Input::Nap {
            start: clock(start)?,
            end: clock(end)?,
        },
        ("form", []) => Input::Form,
        ("update", [id, start, end]) => {
            let bound = |value: &str| (value != "-").then(|| clock(value)).transpose();
            Input::Update {
                id: nap_id(id)?,
                start: bound(*start)?,
                end: bound(*end)?,
            }
        }
        ("delete", [id]) => Input::Delete(nap_id(id)?),
        ("clear", []) => Input::Clear,
        ("date", [date]) => Input::Date(parse_date(date).map_err(|error| error.to_string())?),
        ("next", []) => Input::Next,
        ("prev", []) => Input::Prev,
        ("today", []) => Input::Today,
        ("refresh", []) => Input::Refresh,
        ("dismiss", []) => Input::Dismiss,
        ("help" | "?", []) => Input::Help,
        ("quit" | "exit" | "q", []) => Input::Quit,
        _ => return Err(format!("unrecognized input '{}'; type 'help'", line.trim())),
    };
    Ok(Some(input))
}

fn clock(value: &str) -> Result<String, String> {
    parse_clock(value)
        .map(|_| value.to_string())
        .map_err(|error| error.to_string())
}

fn nap_id(value: &str) -> Result<i64, String> {
    value
        .parse()
        .map_err(|_| format!("invalid nap id '{value}'"))
}

/// Redraws only when the view actually changed.
struct Screen {
    format: OutputFormat,
    last: Option<TrackerView>,
}

impl Screen {
    fn draw(&mut self, view: TrackerView) -> anyhow::Result<()> {
        if self.last.as_ref() == Some(&view) {
            return Ok(());
        }
        if self.format == OutputFormat::Text && self.last.is_some() {
            println!();
        }
        output(&view, self.format)?;
        self.last = Some(view);
        Ok(())
    }
}

/// Handle `naplog watch`.
pub async fn handle(args: &WatchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let interval = args
        .interval
        .map_or_else(|| ctx.config.tracker.poll_interval(), Duration::from_secs);
    if interval.is_zero() {
        bail!("--interval must be at least 1 second");
    }

    let tracker = &ctx.tracker;
    tracker.refresh().await;
    let _poll = tracker.spawn_active_poll(interval);
    tracing::info!(?interval, "watching active session");

    let mut changes = tracker.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut screen = Screen {
        format: flags.format,
        last: None,
    };
    screen.draw(tracker.view())?;
    if !flags.quiet {
        eprintln!("{HELP}");
    }

    loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                screen.draw(tracker.view())?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_input(&line) {
                    Ok(None) => {}
                    Ok(Some(Input::Quit)) => break,
                    Ok(Some(Input::Help)) => eprintln!("{HELP}"),
                    Ok(Some(input)) => {
                        apply(input, tracker, &mut lines).await?;
                        screen.draw(tracker.view())?;
                    }
                    Err(usage) => eprintln!("{usage}"),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(())
}

/// Run one input against the tracker. Failures land on the banner.
async fn apply<R>(input: Input, tracker: &Tracker, lines: &mut Lines<R>) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    match input {
        Input::Start => {
            tracker.start_sleep().await;
        }
        Input::End => {
            tracker.end_sleep().await;
        }
        Input::Nap { start, end } => {
            tracker.set_manual_start(start);
            tracker.set_manual_end(end);
            tracker.submit_manual_entry().await;
        }
        Input::Form => tracker.toggle_manual_entry(),
        Input::Update { id, start, end } => {
            tracker.update_nap(id, start.as_deref(), end.as_deref()).await;
        }
        Input::Delete(id) => {
            let answer = ask(&format!("Delete nap {id}?"), lines).await?;
            tracker.delete_nap(id, &answer).await;
        }
        Input::Clear => {
            let answer = ask(messages::CLEAR_DAY_PROMPT, lines).await?;
            tracker.clear_day_data(&answer).await;
        }
        Input::Date(date) => tracker.select_date(date).await,
        Input::Next => {
            let current = tracker.selected_date();
            tracker.select_date(current.succ_opt().unwrap_or(current)).await;
        }
        Input::Prev => {
            let current = tracker.selected_date();
            tracker.select_date(current.pred_opt().unwrap_or(current)).await;
        }
        Input::Today => tracker.select_date(today()).await,
        Input::Refresh => tracker.refresh().await,
        Input::Dismiss => tracker.dismiss_error(),
        Input::Help | Input::Quit => {}
    }
    Ok(())
}

/// Prompt and read the answer from the same input stream as commands.
async fn ask<R>(prompt: &str, lines: &mut Lines<R>) -> anyhow::Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    eprint!("{prompt} [y/N] ");
    Ok(lines.next_line().await?.is_some_and(|answer| is_yes(&answer)))
}
