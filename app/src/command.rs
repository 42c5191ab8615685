//! Parsing one input line into one user intent.

use std::str::FromStr;

use contacts_core::{Field, UnknownField};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-render without touching the network.
    List,
    Refresh,
    /// Set one field of the new-contact form.
    Draft(Field, String),
    /// Submit the new-contact form.
    Add,
    Delete(String),
    /// Open the edit modal for the contact with this id.
    Edit(String),
    /// Set one field in the edit modal.
    Set(Field, String),
    Save,
    Close,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),

    #[error("`{0}` needs {1}")]
    MissingArgument(&'static str, &'static str),

    #[error(transparent)]
    Field(#[from] UnknownField),
}

pub const USAGE: &str = "\
commands:
  list                     show contacts
  refresh                  reload contacts from the server
  draft <field> <value>    fill the new-contact form (name, phone, email, address)
  add                      create a contact from the form
  delete <id>              delete a contact
  edit <id>                open the edit modal for a contact
  set <field> <value>      change a field in the edit modal
  save                     save the edit modal
  close                    close the edit modal without saving
  help                     show this text
  quit                     exit";

/// Split off the first whitespace-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim()),
        None => (s, ""),
    }
}

fn field_and_value(verb: &'static str, rest: &str) -> Result<(Field, String), CommandError> {
    let (field, value) = split_word(rest);
    if field.is_empty() {
        return Err(CommandError::MissingArgument(verb, "a field name"));
    }
    Ok((field.parse()?, value.to_string()))
}

fn id(verb: &'static str, rest: &str) -> Result<String, CommandError> {
    let (id, _) = split_word(rest);
    if id.is_empty() {
        return Err(CommandError::MissingArgument(verb, "a contact id"));
    }
    Ok(id.to_string())
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = split_word(line);
        match verb {
            "list" | "" => Ok(Command::List),
            "refresh" => Ok(Command::Refresh),
            "add" => Ok(Command::Add),
            "save" => Ok(Command::Save),
            "close" => Ok(Command::Close),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "delete" => Ok(Command::Delete(id("delete", rest)?)),
            "edit" => Ok(Command::Edit(id("edit", rest)?)),
            "draft" => {
                let (field, value) = field_and_value("draft", rest)?;
                Ok(Command::Draft(field, value))
            }
            "set" => {
                let (field, value) = field_and_value("set", rest)?;
                Ok(Command::Set(field, value))
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
