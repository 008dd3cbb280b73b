use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use coldleads_core::{update, AppState, Msg};
use coldleads_logging::{leads_info, leads_warn};

use super::effects::EffectRunner;
use super::settings::{self, FileSettings};
use super::ui::commands::{messages_for, parse_command, ConsoleCommand};
use super::ui::render::{render, render_help};
use super::{logging, ui};
use crate::args::Args;

/// Everything the UI loop reacts to, from stdin or from background work.
pub enum Inbound {
    Line(String),
    InputClosed,
    Msg(Msg),
}

pub fn run_app(args: Args) -> anyhow::Result<()> {
    let loaded = settings::load_settings(&args.config);
    let destination = args
        .log_to
        .or_else(|| {
            loaded
                .as_ref()
                .ok()
                .and_then(|file| file.as_ref())
                .and_then(|file| file.log_destination)
        })
        .unwrap_or_default();
    logging::initialize(destination, args.log_level.into());

    let file_settings = match loaded {
        Ok(Some(file_settings)) => {
            leads_info!("Loaded settings from {:?}", args.config);
            file_settings
        }
        Ok(None) => FileSettings::default(),
        Err(err) => {
            leads_warn!("{}; using defaults", err);
            FileSettings::default()
        }
    };
    let config = settings::resolve(file_settings, &args).context("invalid lead service URL")?;
    leads_info!("Lead service endpoint: {}", config.client.endpoint);

    let (tx, rx) = mpsc::channel::<Inbound>();
    let mut runner =
        EffectRunner::new(config.client, tx.clone()).context("starting request engine")?;
    spawn_stdin_reader(tx)?;

    let mut screen = Screen::new(io::stdout());
    let mut state = AppState::new().with_mail_subject(config.mail_subject);
    screen.print(&render_help())?;
    screen.print(&render(&state.view()))?;

    if let Some(url) = &args.url {
        let command = ConsoleCommand::Submit(url.clone());
        dispatch(&mut state, &mut runner, &mut screen, messages_for(&command))?;
    }

    let mut input_closed = false;
    for inbound in rx {
        match inbound {
            Inbound::Line(line) => {
                let command = parse_command(&line);
                match &command {
                    ConsoleCommand::Quit => break,
                    ConsoleCommand::Help => screen.print(&render_help())?,
                    ConsoleCommand::Unknown(name) => screen.print(&[format!(
                        "Unknown command {name}; try {}",
                        ui::constants::CMD_HELP
                    )])?,
                    ConsoleCommand::Submit(_) if state.is_loading() => {
                        screen.print(&["Still generating, please wait…".to_string()])?
                    }
                    ConsoleCommand::Submit(_) | ConsoleCommand::Copy | ConsoleCommand::Compose => {
                        dispatch(&mut state, &mut runner, &mut screen, messages_for(&command))?
                    }
                }
            }
            Inbound::InputClosed => input_closed = true,
            Inbound::Msg(msg) => dispatch(&mut state, &mut runner, &mut screen, vec![msg])?,
        }
        // With stdin gone, stay only until the pending request resolves.
        if input_closed && !state.is_loading() {
            break;
        }
    }

    leads_info!("Shutting down");
    runner.shutdown();
    Ok(())
}

fn dispatch(
    state: &mut AppState,
    runner: &mut EffectRunner,
    screen: &mut Screen<impl Write>,
    msgs: Vec<Msg>,
) -> io::Result<()> {
    for msg in msgs {
        let (next, effects) = update(std::mem::take(state), msg);
        *state = next;
        runner.run(effects);
    }
    if state.consume_dirty() {
        screen.print(&render(&state.view()))?;
    }
    Ok(())
}

fn spawn_stdin_reader(tx: mpsc::Sender<Inbound>) -> io::Result<()> {
    thread::Builder::new()
        .name("coldleads-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(Inbound::Line(line)).is_err() {
                    return;
                }
            }
            let _ = tx.send(Inbound::InputClosed);
        })?;
    Ok(())
}

struct Screen<W: Write> {
    out: W,
}

impl<W: Write> Screen<W> {
    fn new(out: W) -> Self {
        Self { out }
    }

    fn print(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}
