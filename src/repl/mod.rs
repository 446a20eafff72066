//! Interactive menu session.
//!
//! A [`Session`] owns its input, output and renderer, so a scripted
//! `Cursor` drives it exactly like a terminal does.

mod prompt;

pub use prompt::{ask, confirm, read_line, read_raw};

use std::io::{self, BufRead, Write};

use crate::config::Settings;
use crate::engine::base_name;
use crate::operation::{Operation, OperationKind};
use crate::ops::{self, Outcome};
use crate::render::Renderer;
use crate::validate::{parse_base, parse_code_point, parse_decimal_float, parse_digits};

const FAREWELL: &str = "Thank you for using Number Base Converter. Good-bye!";

/// Exit status after Ctrl+C. Interrupting the menu is a normal way to leave it.
pub const INTERRUPT_EXIT_CODE: i32 = 0;

/// Whether the menu loop keeps going after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    renderer: Renderer,
    settings: Settings,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        let renderer = Renderer::new(settings.theme, settings.color);
        Self::with_renderer(input, output, renderer, settings)
    }

    pub fn with_renderer(input: R, output: W, renderer: Renderer, settings: Settings) -> Self {
        Self {
            input,
            output,
            renderer,
            settings,
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Give back the output sink, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until Quit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let header = self.renderer.header();
        write!(self.output, "{}", header)?;

        loop {
            let menu = self.renderer.menu();
            write!(self.output, "{}", menu)?;

            let prompt = format!("\nSelect an option (1-{}): ", Operation::ALL.len());
            let Some(choice) = read_line(&mut self.input, &mut self.output, &prompt)? else {
                log::debug!("input closed at menu prompt");
                break;
            };

            let operation = match choice.parse::<Operation>() {
                Ok(operation) => operation,
                Err(message) => {
                    self.print_error(&message)?;
                    continue;
                }
            };

            if self.execute(operation)? == Flow::Quit {
                break;
            }
        }

        let farewell = self.renderer.notice(FAREWELL);
        write!(self.output, "\n{}", farewell)?;
        Ok(())
    }

    /// Perform one menu operation, prompting for whatever it needs.
    pub fn execute(&mut self, operation: Operation) -> io::Result<Flow> {
        log::debug!("menu operation: {}", operation);

        let outcome = match operation.kind() {
            OperationKind::Quit => return Ok(Flow::Quit),
            OperationKind::ToggleTheme => {
                let scheme = self.renderer.toggle_scheme();
                let notice = self
                    .renderer
                    .notice(&format!("Switched to {} color scheme", scheme.name()));
                write!(self.output, "{}", notice)?;
                return Ok(Flow::Continue);
            }
            OperationKind::Integer { from, to } => self.integer(from, to)?,
            OperationKind::DecimalFloat => self.decimal_float()?,
            OperationKind::CodePointToChar => self.code_point()?,
            OperationKind::CharToCodePoint => self.character()?,
            OperationKind::DetectBase => self.detect()?,
        };

        let Some(outcome) = outcome else {
            return Ok(Flow::Quit);
        };

        let banner = self.renderer.banner(operation.label());
        let text = self.renderer.outcome(&outcome, self.settings.show_steps);
        write!(self.output, "{}{}", banner, text)?;

        let another = confirm(
            &mut self.input,
            &mut self.output,
            "\nWould you like to perform another conversion? (y/n): ",
        )?;
        Ok(if another { Flow::Continue } else { Flow::Quit })
    }

    /// Source base (when prompted), then the value, then the target base.
    fn integer(&mut self, from: Option<u32>, mut to: Option<u32>) -> io::Result<Option<Outcome>> {
        let from = match from {
            Some(base) => base,
            None => match self.ask("Enter source base (2-16): ", parse_base)? {
                Some(base) => base,
                None => return Ok(None),
            },
        };

        let prompt = format!("Enter {} number: ", describe(from));
        loop {
            let Some(value) = self.ask(&prompt, |s| parse_digits(s, from))? else {
                return Ok(None);
            };
            let Some(to) = self.target_base(&mut to)? else {
                return Ok(None);
            };
            match ops::integer(&value, from, to, self.settings.show_steps) {
                Ok(outcome) => return Ok(Some(Outcome::Integer(outcome))),
                Err(e) => self.print_error(&e.to_string())?,
            }
        }
    }

    fn decimal_float(&mut self) -> io::Result<Option<Outcome>> {
        let mut to = None;
        loop {
            let Some(value) = self.ask("Enter decimal float: ", parse_decimal_float)? else {
                return Ok(None);
            };
            let Some(to) = self.target_base(&mut to)? else {
                return Ok(None);
            };
            let steps = self.settings.show_steps;
            match ops::decimal_float(&value, to, self.settings.max_digits, steps) {
                Ok(outcome) => return Ok(Some(Outcome::DecimalFloat(outcome))),
                Err(e) => self.print_error(&e.to_string())?,
            }
        }
    }

    /// Target base, asked for once and remembered across re-prompts.
    fn target_base(&mut self, known: &mut Option<u32>) -> io::Result<Option<u32>> {
        if known.is_none() {
            *known = self.ask("Enter target base (2-16): ", parse_base)?;
        }
        Ok(*known)
    }

    fn code_point(&mut self) -> io::Result<Option<Outcome>> {
        loop {
            let Some(code) = self.ask("Enter code point: ", parse_code_point)? else {
                return Ok(None);
            };
            match ops::code_point(code) {
                Ok(view) => return Ok(Some(Outcome::CodePoint(view))),
                Err(e) => self.print_error(&e.to_string())?,
            }
        }
    }

    fn character(&mut self) -> io::Result<Option<Outcome>> {
        loop {
            // A space is a valid character, so nothing but the newline is stripped.
            let Some(line) = read_raw(&mut self.input, &mut self.output, "Enter character: ")?
            else {
                return Ok(None);
            };
            match ops::character(&line) {
                Ok(view) => return Ok(Some(Outcome::CodePoint(view))),
                Err(e) => self.print_error(&e.to_string())?,
            }
        }
    }

    fn detect(&mut self) -> io::Result<Option<Outcome>> {
        loop {
            let Some(line) = read_line(&mut self.input, &mut self.output, "Enter number: ")? else {
                return Ok(None);
            };
            match ops::detect(&line) {
                Ok(outcome) => return Ok(Some(Outcome::Detection(outcome))),
                Err(e) => self.print_error(&e.to_string())?,
            }
        }
    }

    fn ask<T, F>(&mut self, prompt: &str, parse: F) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        ask(&mut self.input, &mut self.output, &self.renderer, prompt, parse)
    }

    fn print_error(&mut self, message: &str) -> io::Result<()> {
        let line = self.renderer.error(message);
        write!(self.output, "{}", line)
    }
}

fn describe(base: u32) -> String {
    match base_name(base) {
        Some(name) => name.to_string(),
        None => format!("base-{}", base),
    }
}

/// Install a Ctrl+C handler that says good-bye and exits cleanly.
pub fn setup_ctrlc_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        eprintln!("\n\nInterrupted by user. Good-bye!");
        std::process::exit(INTERRUPT_EXIT_CODE);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let settings = Settings::resolve(&Config::default(), None, true, false, None);
        let mut session = Session::new(Cursor::new(script.to_string()), Vec::new(), settings);
        session.run().unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_quit_immediately() {
        let output = run_script("20\n");
        assert!(output.contains("Number Base Converter"));
        assert!(output.contains(FAREWELL));
    }

    #[test]
    fn test_eof_at_menu_ends_session() {
        let output = run_script("");
        assert!(output.contains(FAREWELL));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let output = run_script("42\nq\n");
        assert!(output.contains("Invalid choice '42'"));
        assert_eq!(output.matches("Select an option").count(), 2);
    }

    #[test]
    fn test_toggle_theme_only_changes_session() {
        let settings = Settings::from(&Config::default());
        let mut session = Session::new(Cursor::new(String::new()), Vec::new(), settings);
        assert_eq!(
            session.execute(Operation::ToggleTheme).unwrap(),
            Flow::Continue
        );
        assert_eq!(session.renderer().scheme(), crate::render::ColorScheme::Light);
        assert_eq!(settings.theme, crate::render::ColorScheme::Dark);
    }

    #[test]
    fn test_decimal_to_binary_then_stop() {
        let output = run_script("1\n42\nn\n");
        assert!(output.contains("Enter decimal number: "));
        assert!(output.contains("Result: 42 (decimal) = 101010 (binary)"));
        assert_eq!(output.matches("Select an option").count(), 1);
    }

    #[test]
    fn test_character_keeps_space() {
        let output = run_script("17\n \nn\n");
        assert!(output.contains("Code point:  32"));
    }

    #[test]
    fn test_float_asks_value_before_base() {
        let output = run_script("15\n0.5\n2\nn\n");
        let value_at = output.find("Enter decimal float: ").unwrap();
        let base_at = output.find("Enter target base (2-16): ").unwrap();
        assert!(value_at < base_at);
        assert!(output.contains("Result: 0.5 (decimal) = 0.1 (binary)"));
    }

    #[test]
    fn test_target_base_not_asked_again_after_core_error() {
        let huge = "9".repeat(45);
        let output = run_script(&format!("13\n{}\n8\n10\nn\n", huge));
        assert_eq!(output.matches("Enter target base (2-16): ").count(), 1);
        assert!(output.contains("Result: 10 (decimal) = 12 (octal)"));
    }

    #[test]
    fn test_interrupt_exits_cleanly() {
        assert_eq!(INTERRUPT_EXIT_CODE, 0);
    }
}
