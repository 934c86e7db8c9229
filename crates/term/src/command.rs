//! Line commands for interactive sessions.
//!
//! One command per line: a keyword followed by its argument. Participants
//! are addressed by ID (`2`, `#2`) or by exact name.

use std::str::FromStr;

use dutchpay_core::calculator::{Action, CalculatorState, SimpleAction};
use dutchpay_core::roster::Roster;
use dutchpay_core::split::RoundingUnit;
use dutchpay_core::split::types::validate_extra_payer_choice;
use dutchpay_shared::types::ParticipantId;
use dutchpay_shared::{AppError, AppResult};

/// A parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Multi-payer form action.
    Split(Action),
    /// Single-absorber form action.
    Simple(SimpleAction),
    /// Re-render the current report.
    Show,
    /// Print command help.
    Help,
    /// End the session.
    Quit,
}

/// Help text for the multi-payer form.
pub const SPLIT_HELP: &str = "\
Commands:
  total <amount>        set the total (empty clears it)
  add                   add a participant
  remove <id|name>      remove a participant
  toggle <id|name>      include/exclude a participant
  rename <id|name> <new name>
  unit <100|1000|10000> set the rounding unit
  extra <1-4>           set how many people pay the remainder
  reset                 start over
  show | help | quit";

/// Help text for the single-absorber form.
pub const SIMPLE_HELP: &str = "\
Commands:
  total <amount>        set the total (empty clears it)
  people <count>        set the number of people
  + | inc               one more person
  - | dec               one less person (not below 2)
  unit <100|1000|10000> set the rounding unit
  reset                 start over
  show | help | quit";

fn split_keyword(line: &str) -> (String, &str) {
    let trimmed = line.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword.to_lowercase(), rest.trim()),
        None => (trimmed.to_lowercase(), ""),
    }
}

fn parse_common(keyword: &str) -> Option<Command> {
    match keyword {
        "" | "show" => Some(Command::Show),
        "help" | "?" => Some(Command::Help),
        "quit" | "exit" | "q" => Some(Command::Quit),
        _ => None,
    }
}

fn parse_unit(arg: &str) -> AppResult<RoundingUnit> {
    RoundingUnit::from_str(arg).map_err(|e| AppError::InvalidInput(e.to_string()))
}

fn require_arg<'a>(keyword: &str, arg: &'a str) -> AppResult<&'a str> {
    if arg.is_empty() {
        Err(AppError::InvalidInput(format!("'{keyword}' needs an argument")))
    } else {
        Ok(arg)
    }
}

/// Resolves an ID (`3`, `#3`) or exact participant name.
pub fn resolve_participant(roster: &Roster, who: &str) -> AppResult<ParticipantId> {
    if let Ok(id) = ParticipantId::from_str(who)
        && roster.get(id).is_some()
    {
        return Ok(id);
    }
    roster
        .find_by_name(who)
        .map(|p| p.id)
        .ok_or_else(|| AppError::InvalidInput(format!("no participant '{who}'")))
}

/// Parses a multi-payer form line against the current state.
pub fn parse_split_command(line: &str, state: &CalculatorState) -> AppResult<Command> {
    let (keyword, arg) = split_keyword(line);
    if let Some(command) = parse_common(&keyword) {
        return Ok(command);
    }

    let action = match keyword.as_str() {
        "total" => Action::SetTotal(arg.to_string()),
        "add" => Action::AddParticipant,
        "remove" | "rm" => {
            Action::RemoveParticipant(resolve_participant(&state.roster, require_arg(&keyword, arg)?)?)
        }
        "toggle" => {
            Action::ToggleParticipant(resolve_participant(&state.roster, require_arg(&keyword, arg)?)?)
        }
        "rename" => {
            let arg = require_arg(&keyword, arg)?;
            let (who, name) = arg.split_once(char::is_whitespace).unwrap_or((arg, ""));
            Action::RenameParticipant {
                id: resolve_participant(&state.roster, who)?,
                name: name.trim().to_string(),
            }
        }
        "unit" => Action::SetRoundingUnit(parse_unit(require_arg(&keyword, arg)?)?),
        "extra" => {
            let raw = require_arg(&keyword, arg)?;
            let count = raw
                .parse::<usize>()
                .map_err(|_| AppError::InvalidInput(format!("'{raw}' is not a count")))?;
            let count =
                validate_extra_payer_choice(count).map_err(|e| AppError::InvalidInput(e.to_string()))?;
            Action::SetExtraPayers(count)
        }
        "reset" => Action::Reset,
        other => {
            return Err(AppError::InvalidInput(format!(
                "unknown command '{other}' (try 'help')"
            )));
        }
    };

    Ok(Command::Split(action))
}

/// Parses a single-absorber form line.
pub fn parse_simple_command(line: &str) -> AppResult<Command> {
    let (keyword, arg) = split_keyword(line);
    if let Some(command) = parse_common(&keyword) {
        return Ok(command);
    }

    let action = match keyword.as_str() {
        "total" => SimpleAction::SetTotal(arg.to_string()),
        "people" => SimpleAction::SetPeopleCount(arg.to_string()),
        "+" | "inc" => SimpleAction::Increment,
        "-" | "dec" => SimpleAction::Decrement,
        "unit" => SimpleAction::SetRoundingUnit(parse_unit(require_arg(&keyword, arg)?)?),
        "reset" => SimpleAction::Reset,
        other => {
            return Err(AppError::InvalidInput(format!(
                "unknown command '{other}' (try 'help')"
            )));
        }
    };

    Ok(Command::Simple(action))
}
