//! Interaction commands read from stdin.

use std::time::Duration;

use regform::field::{FieldId, UnknownField};
use regform::presentation::Control;
use thiserror::Error;

/// One line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Focus(FieldId),
    Blur(FieldId),
    /// Replace the value and fire an input event.
    Type(FieldId, String),
    /// Replace the value silently (select boxes, pasted values).
    Set(FieldId, String),
    Submit,
    Reset,
    Hover(Control),
    Leave(Control),
    /// Let time pass, firing scheduled tasks.
    Wait(Duration),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
    #[error("unknown button '{0}' (expected submit or reset)")]
    UnknownButton(String),
    #[error("invalid duration '{0}' (milliseconds)")]
    InvalidDuration(String),
}

pub const HELP: &str = "\
focus <field>         give a field focus
blur <field>          take focus away from a field
type <field> <text>   replace a field's text as if typed
set <field> <text>    replace a field's value without an input event
submit                submit the form
reset                 press the reset button
hover <button>        move the pointer over submit|reset
leave <button>        move the pointer away from submit|reset
wait <ms>             let time pass
show                  print the form
quit                  exit
fields: name email password age sex";

impl Command {
    /// Parse a line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim_start();
        if line.trim().is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));
        let command = match word {
            "focus" => Command::Focus(field(rest, "focus")?),
            "blur" => Command::Blur(field(rest, "blur")?),
            "type" => {
                let (f, text) = field_and_text(rest, "type")?;
                Command::Type(f, text)
            }
            "set" => {
                let (f, text) = field_and_text(rest, "set")?;
                Command::Set(f, text)
            }
            "submit" => Command::Submit,
            "reset" => Command::Reset,
            "hover" => Command::Hover(button(rest, "hover")?),
            "leave" => Command::Leave(button(rest, "leave")?),
            "wait" => {
                let arg = required(rest, "wait")?;
                let ms = arg
                    .parse::<u64>()
                    .map_err(|_| ParseError::InvalidDuration(arg.to_string()))?;
                Command::Wait(Duration::from_millis(ms))
            }
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, ParseError> {
    let arg = rest.trim();
    if arg.is_empty() {
        Err(ParseError::MissingArgument(command))
    } else {
        Ok(arg)
    }
}

fn field(rest: &str, command: &'static str) -> Result<FieldId, ParseError> {
    Ok(required(rest, command)?.parse::<FieldId>()?)
}

/// Field name, then the remainder of the line verbatim (spaces included).
fn field_and_text(rest: &str, command: &'static str) -> Result<(FieldId, String), ParseError> {
    let rest = rest.trim_start();
    let (name, text) = rest.split_once(' ').unwrap_or((rest.trim_end(), ""));
    if name.is_empty() {
        return Err(ParseError::MissingArgument(command));
    }
    Ok((name.parse::<FieldId>()?, text.to_string()))
}

fn button(rest: &str, command: &'static str) -> Result<Control, ParseError> {
    match required(rest, command)? {
        "submit" => Ok(Control::Submit),
        "reset" => Ok(Control::Reset),
        other => Err(ParseError::UnknownButton(other.to_string())),
    }
}
