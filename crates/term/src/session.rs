//! Interactive line-oriented sessions.
//!
//! Each line is parsed into a command, applied to the owned state through the
//! reducer, and the freshly derived report is written back.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use dutchpay_core::calculator::{
    Action, CalculatorDefaults, CalculatorState, FocusTarget, SimpleCalculatorState,
};

use crate::command::{Command, SIMPLE_HELP, SPLIT_HELP, parse_simple_command, parse_split_command};
use crate::render::Renderer;
use dutchpay_shared::AppResult;

/// Which form the session drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Named participants, several extra payers.
    Split,
    /// People count, one absorbing payer.
    Simple,
}

impl std::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Split => write!(f, "split"),
            Self::Simple => write!(f, "simple"),
        }
    }
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines that were applied or answered.
    pub commands: usize,
    /// Lines rejected as invalid.
    pub rejected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// An interactive session over a reader/writer pair.
pub struct Session<R, W> {
    input: R,
    output: W,
    renderer: Renderer,
    mode: SessionMode,
    split: CalculatorState,
    simple: SimpleCalculatorState,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session starting from `defaults`.
    pub fn new(
        input: R,
        output: W,
        renderer: Renderer,
        defaults: &CalculatorDefaults,
        mode: SessionMode,
    ) -> Self {
        Self {
            input,
            output,
            renderer,
            mode,
            split: CalculatorState::new(defaults.clone()),
            simple: SimpleCalculatorState::new(defaults.clone()),
            summary: SessionSummary::default(),
        }
    }

    /// Current multi-payer state.
    pub fn split_state(&self) -> &CalculatorState {
        &self.split
    }

    /// Current single-absorber state.
    pub fn simple_state(&self) -> &SimpleCalculatorState {
        &self.simple
    }

    /// Reads lines until end of input or `quit`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if reading or writing fails. Invalid commands
    /// are reported to the output and do not end the session.
    pub fn run(&mut self) -> AppResult<SessionSummary> {
        info!(mode = %self.mode, "session started");
        self.write_report()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            if self.handle_line(&line)? == Flow::Stop {
                break;
            }
        }

        info!(
            commands = self.summary.commands,
            rejected = self.summary.rejected,
            "session ended"
        );
        Ok(self.summary)
    }

    fn handle_line(&mut self, line: &str) -> AppResult<Flow> {
        let parsed = match self.mode {
            SessionMode::Split => parse_split_command(line, &self.split),
            SessionMode::Simple => parse_simple_command(line),
        };

        let command = match parsed {
            Ok(command) => command,
            Err(err) => {
                warn!(error = %err, line = line.trim(), "rejected command");
                self.summary.rejected += 1;
                writeln!(self.output, "error: {err}")?;
                return Ok(Flow::Continue);
            }
        };
        self.summary.commands += 1;

        match command {
            Command::Quit => return Ok(Flow::Stop),
            Command::Help => {
                let help = match self.mode {
                    SessionMode::Split => SPLIT_HELP,
                    SessionMode::Simple => SIMPLE_HELP,
                };
                writeln!(self.output, "{help}")?;
            }
            Command::Show => self.write_report()?,
            Command::Split(action) => {
                if let Action::SetExtraPayers(count) = action
                    && !self.split.is_extra_payer_choice_enabled(count)
                {
                    warn!(count, "extra payer choice disabled");
                    writeln!(
                        self.output,
                        "note: {count} extra payers is unavailable with {} selected",
                        self.split.roster.selected_count()
                    )?;
                }
                if action == Action::Reset {
                    info!("calculator reset");
                }
                self.split = self.split.reduce(action.clone());
                let result = self.split.split_result();
                debug!(
                    ?action,
                    base_amount = %result.base_amount,
                    remainder = %result.remainder,
                    extra_per_person = %result.extra_per_person,
                    extra_payers = result.extra_payers,
                    "applied action"
                );
                self.write_report()?;
            }
            Command::Simple(action) => {
                self.simple = self.simple.reduce(action.clone());
                let result = self.simple.split_result();
                debug!(
                    ?action,
                    base_amount = %result.base_amount,
                    remainder = %result.remainder,
                    people_count = result.people_count,
                    "applied action"
                );
                self.write_report()?;
                if self.simple.focus == Some(FocusTarget::TotalAmount) {
                    info!("calculator reset");
                    writeln!(self.output, "Enter the total amount (total <amount>).")?;
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn write_report(&mut self) -> AppResult<()> {
        let text = match self.mode {
            SessionMode::Split => self.renderer.render_split(&self.split.report()),
            SessionMode::Simple => self.renderer.render_simple(&self.simple.report()),
        };
        write!(self.output, "{text}")?;
        Ok(())
    }
}
