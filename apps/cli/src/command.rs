//! # Commands
//!
//! One line of input is one command.
//!
//! | Input            | Action                                  |
//! |------------------|-----------------------------------------|
//! | `0`-`9`, `.`     | keypad key (`12.5` presses four keys)   |
//! | `back`, `⌫`      | backspace                               |
//! | `clear`          | long-press backspace                    |
//! | `type <text>`    | free-text bill entry                    |
//! | `+` / `-`        | split increment / decrement             |
//! | `edit`           | start typing the split count            |
//! | `split <text>`   | replace the split edit text             |
//! | `done`           | submit the split edit                   |
//! | `tip <percent>`  | set the tip rate                        |
//! | `preset <n>`     | pick quick tip `n` (1-based)            |
//! | `show`, `json`   | print the screen / the result as JSON   |
//! | `help`, `quit`   |                                         |

use tipcalc_core::Key;

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Keys(Vec<Key>),
    TypeBill(String),
    Increment,
    Decrement,
    BeginSplitEdit,
    SplitText(String),
    SubmitSplit,
    Tip(f64),
    Preset(usize),
    Show,
    Json,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> CliResult<Option<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "back" | "⌫" => Command::Keys(vec![Key::Backspace]),
            "clear" => Command::Keys(vec![Key::Clear]),
            "type" => Command::TypeBill(rest.to_string()),
            "+" => Command::Increment,
            "-" => Command::Decrement,
            "edit" => Command::BeginSplitEdit,
            "split" => Command::SplitText(rest.to_string()),
            "done" => Command::SubmitSplit,
            "tip" => Command::Tip(parse_percent(rest)?),
            "preset" => Command::Preset(parse_preset(rest)?),
            "show" => Command::Show,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return parse_keys(line).map(Some),
        };

        Ok(Some(command))
    }
}

/// Treats the whole line as a run of keypad keys, e.g. `12.5`.
fn parse_keys(line: &str) -> CliResult<Command> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Key::from_label(&c.to_string()))
        .collect::<Option<Vec<Key>>>()
        .map(Command::Keys)
        .ok_or_else(|| CliError::UnknownCommand(line.to_string()))
}

fn parse_percent(arg: &str) -> CliResult<f64> {
    if arg.is_empty() {
        return Err(CliError::MissingArgument { command: "tip" });
    }
    arg.trim_end_matches('%')
        .parse()
        .map_err(|_| CliError::UnknownCommand(format!("tip {arg}")))
}

fn parse_preset(arg: &str) -> CliResult<usize> {
    if arg.is_empty() {
        return Err(CliError::MissingArgument { command: "preset" });
    }
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CliError::UnknownCommand(format!("preset {arg}"))),
    }
}

pub const HELP: &str = "\
Keypad:  0-9 .   (several at once: 12.5)   back   clear
Bill:    type <text>
Split:   +  -  edit  split <n>  done
Tip:     tip <percent>   preset <1-5>
Other:   show  json  help  quit";
