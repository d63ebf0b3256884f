//! # tipcalc-cli
//!
//! Terminal front end for the tip calculator.
//!
//! ## Module Organization
//! ```text
//! tipcalc_cli/
//! ├── lib.rs       ◄─── You are here (startup, session loop)
//! ├── config.rs    ◄─── AppConfig from TIPCALC_* variables
//! ├── command.rs   ◄─── Input line → Command
//! ├── render.rs    ◄─── Calculator → text screen
//! └── error.rs     ◄─── CliError
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize Logging ─────► tracing-subscriber, RUST_LOG, stderr     │
//! │  2. Load Configuration ─────► AppConfig::from_env()                    │
//! │  3. Build Session ──────────► TipCalculator + TracingHaptics           │
//! │  4. Read-Eval-Print ────────► stdin lines until `quit` or EOF          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod render;

use std::io::{BufRead, Write};

use tipcalc_core::{BillEdit, CoreError, Feedback, Haptics, SplitChange, TipCalculator, TipRate};
use crossterm::tty::IsTty;
use tracing::{debug, info, trace, warn};
use tracing_subscriber::EnvFilter;

use crate::command::{Command, HELP};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

// =============================================================================
// Haptics
// =============================================================================

/// A terminal has no motor; feedback becomes a trace event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHaptics;

impl Haptics for TracingHaptics {
    fn trigger(&self, feedback: Feedback) {
        trace!(feedback = feedback.as_str(), "haptic");
    }
}

// =============================================================================
// Session
// =============================================================================

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One interactive session: the calculator plus its configuration.
pub struct Session<H: Haptics + Clone> {
    calc: TipCalculator<H>,
    config: AppConfig,
}

impl<H: Haptics + Clone> Session<H> {
    pub fn new(config: AppConfig, haptics: H) -> Self {
        let calc = TipCalculator::with_settings(config.tip_rate, config.split_options(), haptics);
        Session { calc, config }
    }

    pub fn calculator(&self) -> &TipCalculator<H> {
        &self.calc
    }

    /// Runs one command, writing any output to `out`.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> CliResult<Flow> {
        debug!(?command, "executing");

        match command {
            Command::Keys(keys) => {
                for key in keys {
                    if self.calc.press_key(key) == BillEdit::Rejected {
                        warn!(?key, bill = %self.calc.bill(), "key rejected: bill limit reached");
                        writeln!(out, "! bill cannot exceed $999,999.99")?;
                    }
                }
                self.print_screen(out)?;
            }
            Command::TypeBill(text) => {
                if self.calc.type_bill(&text) == BillEdit::Rejected {
                    warn!(%text, "typed bill rejected");
                    writeln!(out, "! bill cannot exceed $999,999.99")?;
                }
                self.print_screen(out)?;
            }
            Command::Increment => {
                self.calc.increment_split();
                self.print_screen(out)?;
            }
            Command::Decrement => {
                self.calc.decrement_split();
                self.print_screen(out)?;
            }
            Command::BeginSplitEdit => {
                if !self.calc.begin_split_edit() {
                    writeln!(out, "! split count editing is disabled")?;
                }
                self.print_screen(out)?;
            }
            Command::SplitText(text) => {
                self.calc.edit_split_text(&text);
                self.print_screen(out)?;
            }
            Command::SubmitSplit => {
                let editing = self.calc.split_selector().is_editing();
                if self.calc.submit_split_edit() == SplitChange::Unchanged && editing {
                    warn!(split = %self.calc.split(), "split edit reverted");
                    writeln!(out, "! split count must be between 1 and 1000")?;
                }
                self.print_screen(out)?;
            }
            Command::Tip(pct) => {
                let rate = TipRate::from_percentage(pct)?;
                self.calc.set_tip_rate(rate)?;
                info!(%rate, "tip rate changed");
                self.print_screen(out)?;
            }
            Command::Preset(index) => {
                let rate = self.calc.select_preset(index).map_err(|err| match err {
                    CoreError::UnknownPreset { index, available } => CliError::UnknownPreset {
                        number: index + 1,
                        available,
                    },
                    other => CliError::Core(other),
                })?;
                info!(%rate, "tip preset selected");
                self.print_screen(out)?;
            }
            Command::Show => self.print_screen(out)?,
            Command::Json => {
                let snapshot = serde_json::json!({
                    "bill": self.calc.bill(),
                    "split": self.calc.split(),
                    "tipRateBps": self.calc.tip_rate().bps(),
                    "result": self.calc.result(),
                    "summary": self.calc.summary(),
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn print_screen(&self, out: &mut impl Write) -> CliResult<()> {
        let screen = render::render_screen(&self.calc, self.config.layout(), self.config.palette());
        write!(out, "{screen}")?;
        Ok(())
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Recoverable errors (unknown commands, bad arguments) are reported on
    /// `out` and the loop continues.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> CliResult<()> {
        self.print_screen(out)?;

        for line in input.lines() {
            let line = line?;
            let outcome = Command::parse(&line).and_then(|command| match command {
                Some(command) => self.execute(command, out),
                None => Ok(Flow::Continue),
            });

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) if err.is_recoverable() => {
                    warn!(error = %err, "command failed");
                    writeln!(out, "! {err}")?;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}

// =============================================================================
// Entry Point
// =============================================================================

/// Starts the application on stdin/stdout.
pub fn run() -> Result<(), CliError> {
    init_tracing();

    info!("Starting tipcalc");

    let mut config = AppConfig::from_env()?;
    let stdout = std::io::stdout();
    if !stdout.is_tty() {
        config.color = false;
    }
    info!(
        tip_rate = %config.tip_rate,
        split_editable = config.split_editable,
        color = config.color,
        layout = ?config.layout(),
        "Configuration loaded"
    );

    let stdin = std::io::stdin();
    let mut out = stdout.lock();

    let mut session = Session::new(config, TracingHaptics);
    session.run(stdin.lock(), &mut out)?;

    info!(
        bill = %session.calculator().bill(),
        split = %session.calculator().split(),
        "Session finished"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=trace` - Also show haptic events
/// - Default: `info,tipcalc=debug`
///
/// Logs go to stderr so they never mix with the rendered screen.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tipcalc=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tipcalc_core::{NoopHaptics, Theme};

    fn run_script(config: AppConfig, script: &str) -> (String, Session<NoopHaptics>) {
        let mut session = Session::new(config, NoopHaptics);
        let mut out = Vec::new();
        session.run(Cursor::new(script), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), session)
    }

    #[test]
    fn test_full_scenario() {
        let (output, session) = run_script(
            AppConfig::default(),
            "100\ntip 20\nedit\nsplit 4\ndone\n",
        );
        let result = session.calculator().result();

        assert_eq!(result.tip_amount.cents(), 2000);
        assert_eq!(result.total_with_tip.cents(), 12_000);
        assert_eq!(result.per_person_total.cents(), 3000);
        assert!(output.contains("Per Person (4 people)"));
    }

    #[test]
    fn test_recoverable_errors_do_not_stop_the_loop() {
        let (output, session) = run_script(AppConfig::default(), "bogus\npreset 9\ntip 500\n5\n");
        assert!(output.contains("! Unknown command: bogus"));
        assert!(output.contains("! Tip preset 9 does not exist (choose 1-5)"));
        assert!(output.contains("! Validation error"));
        assert_eq!(session.calculator().bill().cents(), 500);
    }

    #[test]
    fn test_quit_stops_reading() {
        let (_, session) = run_script(AppConfig::default(), "1\nquit\n2\n");
        assert_eq!(session.calculator().bill().cents(), 100);
    }

    #[test]
    fn test_rejections_are_reported() {
        let (output, session) = run_script(
            AppConfig::default(),
            "type 999999.99\n9\nedit\nsplit\ndone\n",
        );
        assert!(output.contains("! bill cannot exceed $999,999.99"));
        assert!(output.contains("! split count must be between 1 and 1000"));
        assert_eq!(session.calculator().split().get(), 1);
    }

    #[test]
    fn test_disabled_split_edit() {
        let config = AppConfig {
            split_editable: false,
            ..AppConfig::default()
        };
        let (output, _) = run_script(config, "edit\n");
        assert!(output.contains("! split count editing is disabled"));
    }

    #[test]
    fn test_theme_changes_output() {
        crossterm::style::force_color_output(true);

        let with_theme = |theme: Theme| AppConfig {
            theme,
            ..AppConfig::default()
        };
        let (light, _) = run_script(with_theme(Theme::light()), "12\n+\n");
        let (dark, _) = run_script(with_theme(Theme::dark()), "12\n+\n");
        assert_ne!(light, dark);

        let plain = AppConfig {
            color: false,
            ..AppConfig::default()
        };
        let (output, _) = run_script(plain, "12\n+\n");
        assert!(!output.contains('\x1b'));
        assert!(output.contains("[-]  2 people  [+]"));
    }

    #[test]
    fn test_json_snapshot() {
        let (output, _) = run_script(AppConfig::default(), "type 40\njson\n");
        let start = output.find('{').unwrap();
        let end = output.rfind('}').unwrap();
        let value: serde_json::Value = serde_json::from_str(&output[start..=end]).unwrap();

        assert_eq!(value["bill"], 4000);
        assert_eq!(value["result"]["tipAmount"], 600);
        assert_eq!(value["summary"]["title"], "Summary");
    }
}
