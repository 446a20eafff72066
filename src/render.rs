//! Text rendering for the menu, results and step traces.
//!
//! Rendering only ever builds strings; callers decide where they go. Colors
//! come from the session's [`ColorScheme`] and are skipped entirely when the
//! renderer is not colored, which keeps test output plain.

use crossterm::style::{Color, Stylize};
use serde::{Deserialize, Serialize};

use crate::engine::{base_name, CodePointView, Conversion, Step, StepKind, Trace};
use crate::operation::{MenuGroup, Operation};
use crate::ops::{DetectOutcome, FloatOutcome, FractionOutcome, IntegerOutcome, Outcome};

const RULE_WIDTH: usize = 50;

/// Palette choice. Dark terminals get the bright ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(ColorScheme::Dark),
            "light" => Some(ColorScheme::Light),
            _ => None,
        }
    }

    fn color(&self, role: Role) -> Color {
        match (self, role) {
            (ColorScheme::Dark, Role::Title) => Color::Cyan,
            (ColorScheme::Dark, Role::Heading) => Color::Magenta,
            (ColorScheme::Dark, Role::Key) => Color::Yellow,
            (ColorScheme::Dark, Role::Value) => Color::Green,
            (ColorScheme::Dark, Role::Error) => Color::Red,
            (ColorScheme::Dark, Role::Muted) => Color::Blue,
            (ColorScheme::Light, Role::Title) => Color::DarkCyan,
            (ColorScheme::Light, Role::Heading) => Color::DarkMagenta,
            (ColorScheme::Light, Role::Key) => Color::DarkYellow,
            (ColorScheme::Light, Role::Value) => Color::DarkGreen,
            (ColorScheme::Light, Role::Error) => Color::DarkRed,
            (ColorScheme::Light, Role::Muted) => Color::DarkBlue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Title,
    Heading,
    Key,
    Value,
    Error,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    scheme: ColorScheme,
    colored: bool,
}

impl Renderer {
    pub fn new(scheme: ColorScheme, colored: bool) -> Self {
        Self { scheme, colored }
    }

    /// Renderer that never emits escape codes.
    pub fn plain() -> Self {
        Self::new(ColorScheme::default(), false)
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Switch palettes and return the new one.
    pub fn toggle_scheme(&mut self) -> ColorScheme {
        self.scheme = self.scheme.toggled();
        self.scheme
    }

    fn paint(&self, text: &str, role: Role) -> String {
        if !self.colored {
            return text.to_string();
        }
        let styled = text.with(self.scheme.color(role));
        match role {
            Role::Title | Role::Heading | Role::Key => styled.bold().to_string(),
            _ => styled.to_string(),
        }
    }

    pub fn header(&self) -> String {
        let rule = "═".repeat(RULE_WIDTH);
        let title = format!(
            "{:^width$}",
            "Number Base Converter",
            width = RULE_WIDTH
        );
        let version = format!(
            "{:^width$}",
            format!("Version {}", env!("CARGO_PKG_VERSION")),
            width = RULE_WIDTH
        );
        format!(
            "{}\n{}\n{}\n{}\n",
            self.paint(&format!("╔{}╗", rule), Role::Title),
            self.paint(&format!("║{}║", title), Role::Value),
            self.paint(&format!("║{}║", version), Role::Muted),
            self.paint(&format!("╚{}╝", rule), Role::Title),
        )
    }

    pub fn menu(&self) -> String {
        let mut out = format!("\n{}\n", self.paint("Available Conversions:", Role::Heading));
        for group in MenuGroup::ALL {
            out.push_str(&format!("\n{}\n", self.paint(group.title(), Role::Heading)));
            for op in Operation::ALL.iter().filter(|op| op.group() == Some(group)) {
                out.push_str(&self.menu_line(*op));
            }
        }
        out.push('\n');
        out.push_str(&self.menu_line(Operation::Quit));
        out
    }

    fn menu_line(&self, op: Operation) -> String {
        let key = format!("{:2})", op.menu_number());
        format!("{} {}\n", self.paint(&key, Role::Key), op.label())
    }

    /// Section heading framed by rules.
    pub fn banner(&self, title: &str) -> String {
        let rule = self.paint(&"=".repeat(RULE_WIDTH), Role::Title);
        format!(
            "\n{}\n{}\n{}\n",
            rule,
            self.paint(title, Role::Value),
            rule
        )
    }

    pub fn error(&self, message: &str) -> String {
        format!("{}\n", self.paint(&format!("✗  {}", message), Role::Error))
    }

    pub fn notice(&self, message: &str) -> String {
        format!("{}\n", self.paint(message, Role::Muted))
    }

    fn result_block(&self, line: &str) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        format!(
            "\n{}\n{} {}\n{}\n",
            rule,
            self.paint("Result:", Role::Key),
            self.paint(line, Role::Value),
            rule
        )
    }

    /// Render a trace as one table per step kind, in order of appearance.
    pub fn trace_table(&self, trace: &Trace) -> String {
        let mut out = String::new();
        let mut kinds: Vec<StepKind> = Vec::new();
        for step in trace {
            if !kinds.contains(&step.kind()) {
                kinds.push(step.kind());
            }
        }

        for kind in kinds {
            let rows: Vec<Vec<String>> = trace
                .iter()
                .filter(|step| step.kind() == kind)
                .enumerate()
                .map(|(index, step)| step_row(index + 1, step))
                .collect();
            out.push_str(&self.table(headers(kind), &rows));
        }
        out
    }

    fn table(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(column, header)| {
                rows.iter()
                    .map(|row| row[column].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header_line = headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| format!("{:<width$}", header, width = *width))
            .collect::<Vec<_>>()
            .join(" | ");
        let separator = widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join(" | ");

        let mut out = format!(
            "{}\n{}\n",
            self.paint(header_line.trim_end(), Role::Heading),
            separator
        );
        for row in rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:>width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join(" | ");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Human-readable rendering of an outcome.
    pub fn outcome(&self, outcome: &Outcome, show_steps: bool) -> String {
        match outcome {
            Outcome::Integer(integer) => self.integer(integer, show_steps),
            Outcome::DecimalFloat(float) => self.float(float, show_steps),
            Outcome::Fraction(fraction) => self.fraction(fraction, show_steps),
            Outcome::CodePoint(view) => self.code_point(view),
            Outcome::Detection(detect) => self.detection(detect),
        }
    }

    fn integer(&self, outcome: &IntegerOutcome, show_steps: bool) -> String {
        let mut out = String::new();
        if show_steps {
            let mut phase = 1;
            if let Some(trace) = &outcome.parse_trace {
                out.push_str(&self.notice(&format!(
                    "Step {}: {} to decimal (multiply the running value by {} and add each digit)",
                    phase,
                    describe_base(outcome.from_base),
                    outcome.from_base
                )));
                out.push_str(&self.trace_table(trace));
                out.push_str(&format!("Decimal value: {}\n\n", outcome.pivot));
                phase += 1;
            }
            if let Some(trace) = &outcome.trace {
                if trace.is_empty() {
                    out.push_str(&format!(
                        "0 in decimal is 0 in {}\n",
                        describe_base(outcome.to_base)
                    ));
                } else {
                    out.push_str(&self.notice(&format!(
                        "Step {}: decimal to {} (divide by {} until the quotient is 0)",
                        phase,
                        describe_base(outcome.to_base),
                        outcome.to_base
                    )));
                    out.push_str(&self.trace_table(trace));
                    let unsigned = outcome.result.trim_start_matches('-');
                    out.push_str(&format!(
                        "Reading remainders from bottom to top: {}\n",
                        unsigned
                    ));
                    if outcome.pivot < 0 {
                        out.push_str(&format!("Adding negative sign: {}\n", outcome.result));
                    }
                }
            }
        }
        if let Some(bits) = &outcome.twos_complement {
            out.push_str(&format!(
                "Two's complement ({} bits): {}\n",
                bits.len(),
                bits
            ));
        }
        out.push_str(&self.result_block(&format!(
            "{} ({}) = {} ({})",
            outcome.input,
            describe_base(outcome.from_base),
            outcome.result,
            describe_base(outcome.to_base)
        )));
        out
    }

    fn float(&self, outcome: &FloatOutcome, show_steps: bool) -> String {
        let mut out = String::new();
        if show_steps {
            if let Some(trace) = &outcome.integer.trace {
                out.push_str(&self.notice(&format!(
                    "Integer part: {}",
                    outcome.integer.digits
                )));
                out.push_str(&self.trace_table(trace));
            }
            if let Some(trace) = &outcome.fraction.trace {
                out.push_str(&self.notice(&format!(
                    "Fractional part {}: multiply by {} and keep the integer part",
                    outcome.fractional_value, outcome.to_base
                )));
                out.push_str(&self.trace_table(trace));
            }
            if outcome.negative {
                out.push_str(&format!("Adding negative sign: {}\n", outcome.result));
            }
        }
        out.push_str(&self.truncation_note(&outcome.fraction));
        out.push_str(&self.result_block(&format!(
            "{} (decimal) = {} ({})",
            outcome.input,
            outcome.result,
            describe_base(outcome.to_base)
        )));
        out
    }

    fn fraction(&self, outcome: &FractionOutcome, show_steps: bool) -> String {
        let mut out = String::new();
        if show_steps {
            if let Some(trace) = &outcome.conversion.trace {
                out.push_str(&self.trace_table(trace));
            }
        }
        out.push_str(&self.truncation_note(&outcome.conversion));
        let digits = &outcome.conversion.digits;
        let shown = if digits.is_empty() { "0" } else { digits.as_str() };
        out.push_str(&self.result_block(&format!(
            "{} (decimal) = 0.{} ({})",
            outcome.input,
            shown,
            describe_base(outcome.to_base)
        )));
        out
    }

    fn truncation_note(&self, conversion: &Conversion) -> String {
        if !conversion.truncated {
            return String::new();
        }
        self.notice(&format!(
            "Stopped at the limit of {} digits (truncated, not rounded)",
            conversion.digits.len()
        ))
    }

    fn code_point(&self, view: &CodePointView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} '{}'\n",
            self.paint("Character:  ", Role::Key),
            view.character.escape_debug()
        ));
        out.push_str(&format!(
            "{} {}\n",
            self.paint("Code point: ", Role::Key),
            view.code_point
        ));
        out.push_str(&format!(
            "{} {}\n",
            self.paint("Binary:     ", Role::Key),
            view.binary
        ));
        out.push_str(&format!(
            "{} {}\n",
            self.paint("Hexadecimal:", Role::Key),
            view.hex
        ));
        out.push_str(&self.result_block(&format!(
            "'{}' = {} (U+{:04X})",
            view.character.escape_debug(),
            view.code_point,
            view.code_point
        )));
        out
    }

    fn detection(&self, outcome: &DetectOutcome) -> String {
        let detection = &outcome.detection;
        let mut out = String::new();
        if let Some(base) = outcome.declared_base {
            out.push_str(&format!(
                "Prefix declares {}\n",
                describe_base(base)
            ));
        }
        out.push_str(&format!(
            "Smallest base accepting every digit: {}\n",
            detection.minimal_base
        ));
        let candidates = detection
            .candidates
            .iter()
            .map(|base| describe_base(*base))
            .collect::<Vec<_>>()
            .join(", ");
        if candidates.is_empty() {
            out.push_str("Not valid in any of binary, octal, decimal or hexadecimal\n");
        } else {
            out.push_str(&format!("Valid as: {}\n", candidates));
        }
        if detection.is_ambiguous() {
            out.push_str(&self.notice(
                "This is a guess: the same digits mean different values in each listed base.",
            ));
        }

        if let (Some(base), true) = (outcome.declared_base, outcome.prefix_conflict) {
            out.push_str(&self.error(&format!(
                "The digits do not fit {}: they need base {} or higher",
                describe_base(base),
                detection.minimal_base
            )));
        }

        let declared = outcome.declared_base.filter(|_| !outcome.prefix_conflict);
        let verdict = match (declared, detection.preferred()) {
            (Some(base), _) => describe_base(base),
            (None, Some(base)) => format!("{} (advisory)", describe_base(base)),
            (None, None) => format!("base {} or higher", detection.minimal_base),
        };
        out.push_str(&self.result_block(&format!("{} looks like {}", outcome.input, verdict)));
        out
    }
}

fn describe_base(base: u32) -> String {
    match base_name(base) {
        Some(name) => name.to_string(),
        None => format!("base {}", base),
    }
}

fn headers(kind: StepKind) -> &'static [&'static str] {
    match kind {
        StepKind::Accumulate => &["Step", "Running", "× Base", "Digit", "Digit Value", "= Value"],
        StepKind::Divide => &["Step", "Decimal", "÷ Base", "Quotient", "Remainder", "Digit"],
        StepKind::Multiply => &["Step", "Fraction", "× Base", "Product", "Digit"],
    }
}

fn step_row(index: usize, step: &Step) -> Vec<String> {
    match step {
        Step::Accumulate {
            accumulated,
            base,
            digit,
            digit_value,
            result,
        } => vec![
            index.to_string(),
            accumulated.to_string(),
            base.to_string(),
            digit.to_string(),
            digit_value.to_string(),
            result.to_string(),
        ],
        Step::Divide {
            dividend,
            base,
            remainder,
            quotient,
            digit,
        } => vec![
            index.to_string(),
            dividend.to_string(),
            base.to_string(),
            quotient.to_string(),
            remainder.to_string(),
            digit.to_string(),
        ],
        Step::Multiply {
            remainder,
            base,
            product,
            digit,
            ..
        } => vec![
            index.to_string(),
            remainder.to_string(),
            base.to_string(),
            product.to_string(),
            digit.to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops;

    #[test]
    fn test_plain_renderer_has_no_escape_codes() {
        let renderer = Renderer::plain();
        assert!(!renderer.header().contains('\u{1b}'));
        assert!(!renderer.menu().contains('\u{1b}'));
    }

    #[test]
    fn test_colored_renderer_emits_escape_codes() {
        let renderer = Renderer::new(ColorScheme::Dark, true);
        assert!(renderer.error("boom").contains('\u{1b}'));
    }

    #[test]
    fn test_toggle_scheme() {
        let mut renderer = Renderer::plain();
        assert_eq!(renderer.toggle_scheme(), ColorScheme::Light);
        assert_eq!(renderer.toggle_scheme(), ColorScheme::Dark);
    }

    #[test]
    fn test_scheme_from_name() {
        assert_eq!(ColorScheme::from_name("Light"), Some(ColorScheme::Light));
        assert_eq!(ColorScheme::from_name(" dark "), Some(ColorScheme::Dark));
        assert_eq!(ColorScheme::from_name("sepia"), None);
    }

    #[test]
    fn test_menu_lists_every_operation() {
        let menu = Renderer::plain().menu();
        for op in Operation::ALL {
            assert!(menu.contains(op.label()), "menu is missing {}", op.label());
        }
        assert!(menu.contains(" 0) Quit"));
        assert!(menu.contains(" 1) Decimal → Binary"));
    }

    #[test]
    fn test_division_table_rows() {
        let outcome = ops::integer("42", 10, 2, true).unwrap();
        let table = Renderer::plain().trace_table(outcome.trace.as_ref().unwrap());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Step | Decimal | ÷ Base | Quotient | Remainder | Digit"));
        assert_eq!(lines[2], "   1 |      42 |      2 |       21 |         0 |     0");
        assert_eq!(lines[7], "   6 |       1 |      2 |        0 |         1 |     1");
    }

    #[test]
    fn test_integer_outcome_text() {
        let outcome = Outcome::Integer(ops::integer("-42", 10, 2, true).unwrap());
        let text = Renderer::plain().outcome(&outcome, true);
        assert!(text.contains("Reading remainders from bottom to top: 101010"));
        assert!(text.contains("Adding negative sign: -101010"));
        assert!(text.contains("Result: -42 (decimal) = -101010 (binary)"));
    }

    #[test]
    fn test_steps_hidden_when_disabled() {
        let outcome = Outcome::Integer(ops::integer("1A3F", 16, 10, true).unwrap());
        let text = Renderer::plain().outcome(&outcome, false);
        assert!(!text.contains("Step 1"));
        assert!(text.contains("Result: 1A3F (hexadecimal) = 6719 (decimal)"));
    }

    #[test]
    fn test_detection_text_is_advisory() {
        let outcome = Outcome::Detection(ops::detect("17").unwrap());
        let text = Renderer::plain().outcome(&outcome, true);
        assert!(text.contains("Valid as: octal, decimal, hexadecimal"));
        assert!(text.contains("This is a guess"));
        assert!(text.contains("17 looks like octal (advisory)"));
    }

    #[test]
    fn test_detection_reports_prefix_conflict() {
        let outcome = Outcome::Detection(ops::detect("0b12").unwrap());
        let text = Renderer::plain().outcome(&outcome, true);
        assert!(text.contains("Prefix declares binary"));
        assert!(text.contains("The digits do not fit binary: they need base 3 or higher"));
        assert!(text.contains("0b12 looks like octal (advisory)"));
        assert!(!text.contains("looks like binary"));
    }

    #[test]
    fn test_exact_fraction_at_cap_has_no_truncation_note() {
        let outcome = Outcome::Fraction(ops::fraction(0.5, 2, 1, false).unwrap());
        let text = Renderer::plain().outcome(&outcome, true);
        assert!(!text.contains("truncated"));
        assert!(text.contains("Result: 0.5 (decimal) = 0.1 (binary)"));
    }

    #[test]
    fn test_truncated_fraction_has_note() {
        let outcome = Outcome::Fraction(ops::fraction(0.1, 2, 4, false).unwrap());
        let text = Renderer::plain().outcome(&outcome, false);
        assert!(text.contains("Stopped at the limit of 4 digits (truncated, not rounded)"));
    }

    #[test]
    fn test_float_shows_truncation_note() {
        let outcome = Outcome::DecimalFloat(ops::decimal_float("2.1", 2, 4, false).unwrap());
        let text = Renderer::plain().outcome(&outcome, false);
        assert!(text.contains("Stopped at the limit of 4 digits (truncated, not rounded)"));
        assert!(text.contains("Result: 2.1 (decimal) = 10.0001 (binary)"));

        let outcome = Outcome::DecimalFloat(ops::decimal_float("2.5", 2, 1, false).unwrap());
        let text = Renderer::plain().outcome(&outcome, false);
        assert!(!text.contains("truncated"));
    }

    #[test]
    fn test_code_point_text_escapes_control_characters() {
        let outcome = Outcome::CodePoint(ops::code_point(10).unwrap());
        let text = Renderer::plain().outcome(&outcome, true);
        assert!(text.contains("'\\n'"));
        assert!(text.contains("U+000A"));
    }
}
