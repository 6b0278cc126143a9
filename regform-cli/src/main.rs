mod args;
mod command;
mod error;
mod logging;
mod settings;
mod terminal;

use std::io::{self, Stdout};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{debug, info};
use regform::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::args::Args;
use crate::command::{Command, HELP};
use crate::error::CliError;
use crate::settings::Settings;
use crate::terminal::{Slot, TerminalPresentation};

type Session = FormSession<TerminalPresentation<Stdout>>;

#[tokio::main]
async fn main() -> ExitCode {
    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let log_file = match args.log_file.clone() {
        Some(path) => path,
        None => logging::default_log_file().ok_or(CliError::NoLogDir)?,
    };
    logging::init(&log_file, args.log_level.into())?;

    let mut config = match &args.config {
        Some(path) => Settings::load(path)?.apply(FormConfig::default()),
        None => FormConfig::default(),
    };
    if args.include_optional {
        config = config.include_optional_on_submit();
    }
    if args.reduce_motion {
        config = config.reduce_motion(true);
    }

    let bindings = config.fields.iter().fold(FieldRegistry::builder(), |b, f| {
        b.bind(*f, Slot::Input(*f), Slot::Error(*f))
    });
    let mut session = FormSession::new(config, TerminalPresentation::new(io::stdout()), bindings)?;

    session.dispatch(FormEvent::Load, Instant::now());
    session.presentation_mut().notice("Registration form ready. Type 'help' for commands.");
    event_loop(&mut session).await?;

    // Let anything still scheduled play out, so piped scripts end in a settled state.
    while let Some(deadline) = session.next_deadline() {
        tokio::time::sleep_until(deadline.into()).await;
        session.run_due(Instant::now());
    }
    info!("Session ended");
    Ok(())
}

/// Interleave stdin commands with scheduled task deadlines until EOF or quit.
async fn event_loop(session: &mut Session) -> Result<(), CliError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let deadline = session.next_deadline();
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("stdin closed");
                    return Ok(());
                };
                match Command::parse(&line) {
                    Ok(Some(Command::Quit)) => return Ok(()),
                    Ok(Some(command)) => execute(session, command).await,
                    Ok(None) => {}
                    Err(e) => session.presentation_mut().notice(e),
                }
            }
            _ = sleep_until(deadline) => {
                session.run_due(Instant::now());
            }
        }
    }
}

async fn execute(session: &mut Session, command: Command) {
    debug!("Command: {:?}", command);
    let now = Instant::now();
    let event = match command {
        Command::Focus(field) => FormEvent::Focus(field),
        Command::Blur(field) => FormEvent::Blur(field),
        Command::Type(field, text) => {
            session.presentation_mut().set_value(field, text);
            FormEvent::Input(field)
        }
        Command::Set(field, text) => {
            session.presentation_mut().set_value(field, text);
            return;
        }
        Command::Submit => FormEvent::Submit,
        Command::Reset => FormEvent::Reset,
        Command::Hover(control) => FormEvent::PointerEnter(control),
        Command::Leave(control) => FormEvent::PointerLeave(control),
        Command::Wait(duration) => {
            wait(session, duration).await;
            return;
        }
        Command::Show => {
            let fields: Vec<FieldId> = session.registry().fields().collect();
            session.presentation_mut().snapshot(fields);
            return;
        }
        Command::Help => {
            session.presentation_mut().notice(HELP);
            return;
        }
        Command::Quit => return,
    };

    match session.dispatch(event, now) {
        Dispatch::Ignored => session
            .presentation_mut()
            .notice(format!("{:?} does not apply to this form", event)),
        Dispatch::Submitted(SubmissionResult::Rejected(errors)) => {
            let fields: Vec<String> = errors.iter().map(|e| e.field.to_string()).collect();
            session
                .presentation_mut()
                .notice(format!("Submission rejected: {}", fields.join(", ")));
        }
        Dispatch::Submitted(SubmissionResult::Accepted) | Dispatch::Handled => {}
    }
}

/// Let `duration` pass, firing tasks as their deadlines come up.
async fn wait(session: &mut Session, duration: Duration) {
    let until = Instant::now() + duration;
    loop {
        let next = session
            .next_deadline()
            .filter(|d| *d < until)
            .unwrap_or(until);
        tokio::time::sleep_until(next.into()).await;
        session.run_due(Instant::now());
        if next == until {
            return;
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
        None => std::future::pending().await,
    }
}
