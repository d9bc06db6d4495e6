//! Interactive command parsing.

use std::str::FromStr;

use thiserror::Error;

/// Command line input errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("unknown command '{0}' (type 'help')")]
    UnknownCommand(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{command}': invalid value '{value}', expected {expected}")]
    InvalidArgument {
        command: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// One line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Home,
    Rooms,
    Search(String),
    Public(Option<bool>),
    Possible(Option<bool>),
    Resize(u32),
    /// The last rendered room scrolled into view
    Scroll,
    /// 1-based index in the current list
    Open(usize),
    Password(String),
    Cancel,
    Start,
    Pause,
    Leave,
    Timer,
    Login,
    Register,
    Go(String),
    Back,
    Quit,
}

fn parse_toggle(command: &'static str, value: &str) -> Result<Option<bool>, CliError> {
    match value {
        "on" | "yes" | "true" => Ok(Some(true)),
        "off" | "no" | "false" => Ok(Some(false)),
        "any" | "" => Ok(None),
        other => Err(CliError::InvalidArgument {
            command,
            value: other.to_string(),
            expected: "on, off or any",
        }),
    }
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        // `raw` keeps surrounding spaces; only the password takes it verbatim
        let (name, raw) = match line.split_once(char::is_whitespace) {
            Some((name, raw)) => (name, raw),
            None => (line.trim_end(), ""),
        };
        let rest = raw.trim();

        match name.to_ascii_lowercase().as_str() {
            "help" | "?" => Ok(Command::Help),
            "home" => Ok(Command::Home),
            "rooms" => Ok(Command::Rooms),
            // An empty search clears the keyword
            "search" => Ok(Command::Search(rest.to_string())),
            "public" => parse_toggle("public", rest).map(Command::Public),
            "possible" => parse_toggle("possible", rest).map(Command::Possible),
            "resize" => rest
                .parse()
                .map(Command::Resize)
                .map_err(|_| CliError::InvalidArgument {
                    command: "resize",
                    value: rest.to_string(),
                    expected: "a width in pixels",
                }),
            "scroll" | "more" => Ok(Command::Scroll),
            "open" => {
                if rest.is_empty() {
                    return Err(CliError::MissingArgument {
                        command: "open",
                        expected: "a room number",
                    });
                }
                match rest.parse::<usize>() {
                    Ok(n) if n > 0 => Ok(Command::Open(n)),
                    _ => Err(CliError::InvalidArgument {
                        command: "open",
                        value: rest.to_string(),
                        expected: "a room number starting at 1",
                    }),
                }
            }
            "password" | "pw" => {
                if rest.is_empty() {
                    return Err(CliError::MissingArgument {
                        command: "password",
                        expected: "the room password",
                    });
                }
                Ok(Command::Password(raw.to_string()))
            }
            "cancel" => Ok(Command::Cancel),
            "start" => Ok(Command::Start),
            "pause" => Ok(Command::Pause),
            "leave" => Ok(Command::Leave),
            "timer" => Ok(Command::Timer),
            "login" => Ok(Command::Login),
            "register" => Ok(Command::Register),
            "go" => {
                if rest.is_empty() {
                    return Err(CliError::MissingArgument {
                        command: "go",
                        expected: "a path such as /planner",
                    });
                }
                Ok(Command::Go(rest.to_string()))
            }
            "back" => Ok(Command::Back),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CliError::UnknownCommand(other.to_string())),
        }
    }
}

pub fn help_text() -> &'static str {
    "\
Commands:
  home                   room preview (anonymous home page)
  rooms                  room list
  search <text>          filter by keyword (empty clears)
  public <on|off|any>    public rooms only / private only / both
  possible <on|off|any>  rooms with free seats only
  resize <px>            set the list container width
  scroll                 the last room scrolled into view (loads more)
  open <n>               open room number n
  password <pw>          answer the private room prompt
  cancel                 close the password prompt
  start | pause | timer  study timer inside a room
  leave                  leave the room
  login | register       header buttons on the room list
  go <path> | back       navigate
  quit"
}
