//! Text and JSON rendering of calculator reports.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use dutchpay_core::calculator::{SimpleReport, SplitReport};
use dutchpay_core::split::RoundingUnit;
use dutchpay_shared::config::DisplayConfig;
use dutchpay_shared::types::{AmountFormatter, Locale};
use dutchpay_shared::{AppError, AppResult};

/// Turns reports into terminal text.
#[derive(Debug, Clone)]
pub struct Renderer {
    formatter: AmountFormatter,
    locale: Locale,
}

impl Renderer {
    /// Creates a renderer.
    #[must_use]
    pub const fn new(formatter: AmountFormatter, locale: Locale) -> Self {
        Self { formatter, locale }
    }

    /// Creates a renderer from display configuration.
    #[must_use]
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self::new(display.formatter(), display.locale)
    }

    fn money(&self, amount: Decimal) -> String {
        self.formatter.format(amount)
    }

    fn unit_label(&self, unit: RoundingUnit) -> String {
        format!("{} ({})", unit.label(self.locale), unit.value())
    }

    /// Renders the multi-payer report.
    #[must_use]
    pub fn render_split(&self, report: &SplitReport) -> String {
        SplitView {
            renderer: self,
            report,
        }
        .to_string()
    }

    /// Renders the single-absorber report.
    #[must_use]
    pub fn render_simple(&self, report: &SimpleReport) -> String {
        SimpleView {
            renderer: self,
            report,
        }
        .to_string()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

struct SplitView<'a> {
    renderer: &'a Renderer,
    report: &'a SplitReport,
}

impl SplitView<'_> {
    fn write_roster(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        writeln!(
            f,
            "Participants ({} of {} participating)",
            report.selected_count, report.participant_count
        )?;
        for entry in &report.participants {
            let mark = if entry.is_selected { "x" } else { " " };
            let badge = if entry.pays_extra { "  [extra]" } else { "" };
            writeln!(f, "  [{mark}] #{} {}{badge}", entry.id, entry.name)?;
        }

        writeln!(
            f,
            "Rounding unit: {}",
            self.renderer.unit_label(report.rounding_unit)
        )?;

        let choices: Vec<String> = report
            .extra_payer_choices
            .iter()
            .map(|c| match (c.active, c.enabled) {
                (true, _) => format!("[{}]", c.count),
                (false, true) => c.count.to_string(),
                (false, false) => format!("({})", c.count),
            })
            .collect();
        writeln!(
            f,
            "Extra payers: {} (up to {} selectable)",
            choices.join(" "),
            report.selected_count
        )
    }

    fn write_result(&self, f: &mut fmt::Formatter<'_>, total: Decimal) -> fmt::Result {
        let renderer = self.renderer;
        let report = self.report;
        let result = &report.result;

        writeln!(f, "Result")?;
        writeln!(f, "  Base per person: {}", renderer.money(result.base_amount))?;
        if result.remainder > Decimal::ZERO {
            writeln!(
                f,
                "  +{} each for {} extra payer(s)",
                renderer.money(result.extra_per_person),
                result.extra_payers
            )?;
        }
        writeln!(
            f,
            "  Total: {} | Participating: {} | Unit: {}",
            renderer.money(total),
            report.selected_count,
            report.rounding_unit.label(renderer.locale)
        )?;
        writeln!(
            f,
            "  Check: {} = {} ✓",
            renderer.money(report.reconstructed_total),
            renderer.money(total)
        )
    }

    fn write_breakdown(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let renderer = self.renderer;
        let report = self.report;
        let result = &report.result;

        writeln!(f, "Breakdown")?;
        for line in &report.lines {
            if line.pays_extra {
                writeln!(
                    f,
                    "  {}  {}  (+{})",
                    line.name,
                    renderer.money(line.amount),
                    renderer.money(line.extra)
                )?;
            } else {
                writeln!(f, "  {}  {}", line.name, renderer.money(line.amount))?;
            }
        }

        if result.remainder > Decimal::ZERO {
            write!(
                f,
                "Top {} pay {} extra each so the total comes out exactly.",
                result.extra_payers,
                renderer.money(result.extra_per_person)
            )?;
            if result.extra_payers > 1 {
                write!(f, " (total extra: {})", renderer.money(result.total_extra()))?;
            }
            writeln!(f)?;
        }
        if report.surplus > Decimal::ZERO {
            writeln!(f, "Rounding surplus: {}", renderer.money(report.surplus))?;
        }
        Ok(())
    }
}

impl fmt::Display for SplitView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_roster(f)?;

        match self.report.total {
            Some(total) if self.report.has_result => {
                self.write_result(f, total)?;
                self.write_breakdown(f)
            }
            Some(_) => writeln!(f, "Select at least one participant to see the split."),
            None => writeln!(f, "Enter a total amount to see the split."),
        }
    }
}

struct SimpleView<'a> {
    renderer: &'a Renderer,
    report: &'a SimpleReport,
}

impl fmt::Display for SimpleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let renderer = self.renderer;
        let report = self.report;

        writeln!(
            f,
            "People: {} | Rounding unit: {}",
            report.people_count,
            renderer.unit_label(report.rounding_unit)
        )?;

        if !report.has_result {
            return writeln!(f, "Enter a total amount to see the split.");
        }

        let result = &report.result;
        writeln!(f, "Base per person: {}", renderer.money(result.base_amount))?;
        if result.has_absorber() {
            writeln!(
                f,
                "One person pays {} (+{})",
                renderer.money(result.absorber_total),
                renderer.money(result.remainder)
            )?;
        } else {
            writeln!(f, "Splits evenly, nobody pays extra.")?;
        }

        writeln!(f, "Breakdown")?;
        for share in &report.shares {
            let note = if share.is_absorber { "  (absorbs remainder)" } else { "" };
            writeln!(f, "  #{} {}{note}", share.position, renderer.money(share.amount))?;
        }
        Ok(())
    }
}

/// Serializes a report as pretty JSON.
pub fn to_json<T: Serialize>(report: &T) -> AppResult<String> {
    serde_json::to_string_pretty(report).map_err(|e| AppError::Internal(e.to_string()))
}
