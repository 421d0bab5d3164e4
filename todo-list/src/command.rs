//! Line commands for the terminal front end.

use crate::error::TodoError;
use crate::types::TodoId;
use std::str::FromStr;

/// Usage text printed by `help`
pub const HELP: &str = "\
commands:
  add <text>     add a todo
  type <text>    replace the input text
  submit         submit the input text
  toggle <id>    toggle a todo
  remove <id>    remove a todo
  all            complete all
  clear          remove completed
  json           print the state as JSON
  help           show this help
  quit           exit";

/// A parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a todo directly
    Add(String),
    /// Replace the input draft
    Type(String),
    /// Submit the draft
    Submit,
    /// Toggle a todo
    Toggle(TodoId),
    /// Remove a todo
    Remove(TodoId),
    /// Complete all todos
    CompleteAll,
    /// Remove completed todos
    RemoveCompleted,
    /// Dump the state as JSON
    Json,
    /// Show usage
    Help,
    /// Leave the program
    Quit,
}

impl FromStr for Command {
    type Err = TodoError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match word.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add(rest.to_string())),
            "type" => Ok(Self::Type(rest.to_string())),
            "submit" => Ok(Self::Submit),
            "toggle" => Ok(Self::Toggle(parse_id(rest)?)),
            "remove" | "rm" => Ok(Self::Remove(parse_id(rest)?)),
            "all" => Ok(Self::CompleteAll),
            "clear" => Ok(Self::RemoveCompleted),
            "json" => Ok(Self::Json),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(TodoError::UnknownCommand(word.to_string())),
        }
    }
}

fn parse_id(arg: &str) -> Result<TodoId, TodoError> {
    if arg.trim().is_empty() {
        return Err(TodoError::MissingArgument("id"));
    }
    arg.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_keeps_text() {
        assert_eq!(
            "add buy  milk".parse::<Command>(),
            Ok(Command::Add("buy  milk".to_string()))
        );
        assert_eq!("add".parse::<Command>(), Ok(Command::Add(String::new())));
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!("toggle 3".parse::<Command>(), Ok(Command::Toggle(TodoId::new(3))));
        assert_eq!("rm 12".parse::<Command>(), Ok(Command::Remove(TodoId::new(12))));
        assert_eq!(
            "toggle".parse::<Command>(),
            Err(TodoError::MissingArgument("id"))
        );
        assert_eq!(
            "remove x".parse::<Command>(),
            Err(TodoError::InvalidId("x".to_string()))
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("ALL".parse::<Command>(), Ok(Command::CompleteAll));
        assert_eq!("  clear".parse::<Command>(), Ok(Command::RemoveCompleted));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "frobnicate 1".parse::<Command>(),
            Err(TodoError::UnknownCommand("frobnicate".to_string()))
        );
    }
}
