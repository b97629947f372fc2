use std::io::{self, BufRead, Write};

use log::debug;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::{core::evaluate, operator::OPERATOR_TAGS},
        parser::core::parse_line,
    },
};

const BANNER: &str = "Enter expressions in pre-order format with spaces\n\
                      eg   ( * ( + 4 5 8 3 -10 ) 7 ( / 6 4 ) 18 )";
const PROMPT: &str = "expr: ";
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// What a single line of input amounted to.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// The line held an expression; this is its value, possibly `NaN`.
    Value(f64),
    /// The line could not be parsed.
    Failed(ParseError),
    /// Nothing but whitespace.
    Blank,
    /// The `clear` command.
    Clear,
    /// The `help` command.
    Help,
    /// The `quit` or `exit` command.
    Quit,
}

/// Classifies one line of input and evaluates it if it is an expression.
///
/// # Example
/// ```
/// use cpncalc::repl::{LineOutcome, interpret_line};
///
/// assert_eq!(interpret_line("(- 10 2 3)"), LineOutcome::Value(5.0));
/// assert_eq!(interpret_line("quit"), LineOutcome::Quit);
/// assert!(matches!(interpret_line("(+ 1 2"), LineOutcome::Failed(_)));
/// ```
#[must_use]
pub fn interpret_line(line: &str) -> LineOutcome {
    match line.trim() {
        "" => LineOutcome::Blank,
        "quit" | "exit" => LineOutcome::Quit,
        "clear" => LineOutcome::Clear,
        "help" => LineOutcome::Help,
        source => match parse_line(source) {
            Ok(expr) => {
                debug!("parsed {expr}");
                LineOutcome::Value(evaluate(&expr))
            },
            Err(e) => LineOutcome::Failed(e),
        },
    }
}

/// A read-eval-print loop over any line source.
///
/// Every line is handled independently; a line that fails to parse is
/// reported and the loop moves on. The loop ends on `quit`, `exit` or end of
/// input.
pub struct Repl<R, W> {
    input:       R,
    output:      W,
    interactive: bool,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Creates an interactive loop reading from `input` and printing to
    /// `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input,
               output,
               interactive: true }
    }

    /// Turns the banner and prompt on or off.
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Runs until `quit` or end of input.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and handled like
    /// any other line.
    ///
    /// # Errors
    /// Only I/O failures on the input or output end the loop early.
    ///
    /// # Example
    /// ```
    /// use cpncalc::repl::Repl;
    ///
    /// let input = "(+ 1 2)\n(+ 1 2\n(avg 2 4 6)\n".as_bytes();
    /// let mut output = Vec::new();
    ///
    /// Repl::new(input, &mut output).interactive(false).run().unwrap();
    ///
    /// let text = String::from_utf8(output).unwrap();
    /// assert_eq!(text,
    ///            " -> 3\nSomething went wrong! Unexpected end of input.\n -> 4\n");
    /// ```
    pub fn run(&mut self) -> io::Result<()> {
        if self.interactive {
            writeln!(self.output, "{BANNER}")?;
        }

        let mut buf = Vec::new();
        loop {
            if self.interactive {
                write!(self.output, "{PROMPT}")?;
                self.output.flush()?;
            }

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            // Invalid UTF-8 becomes U+FFFD and fails like any unknown name.
            let line = String::from_utf8_lossy(&buf);
            match interpret_line(&line) {
                LineOutcome::Value(v) => writeln!(self.output, " -> {v}")?,
                LineOutcome::Failed(e) => writeln!(self.output, "Something went wrong! {e}")?,
                LineOutcome::Blank => {},
                LineOutcome::Clear => write!(self.output, "{CLEAR_SCREEN}")?,
                LineOutcome::Help => writeln!(self.output, "Operators: {}", OPERATOR_TAGS.join(" "))?,
                LineOutcome::Quit => break,
            }
        }

        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, interactive: bool) -> String {
        let mut output = Vec::new();
        Repl::new(input.as_bytes(), &mut output).interactive(interactive)
                                                .run()
                                                .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn commands_are_recognised() {
        assert_eq!(interpret_line("  exit "), LineOutcome::Quit);
        assert_eq!(interpret_line("clear"), LineOutcome::Clear);
        assert_eq!(interpret_line("help"), LineOutcome::Help);
        assert_eq!(interpret_line(" \t"), LineOutcome::Blank);
    }

    #[test]
    fn unknown_operator_still_yields_a_value() {
        assert!(matches!(interpret_line("(foo 1 2)"), LineOutcome::Value(v) if v.is_nan()));
    }

    #[test]
    fn parse_failures_are_reported() {
        assert_eq!(interpret_line("(+ 1 2"),
                   LineOutcome::Failed(ParseError::UnexpectedEndOfInput));
    }

    #[test]
    fn loop_survives_bad_lines() {
        let out = run(")\n(foo 1)\n\n(* 2 3 4)\n", false);
        assert_eq!(out,
                   "Something went wrong! Error at column 1: Unexpected token ')'.\n -> NaN\n -> 24\n");
    }

    #[test]
    fn invalid_utf8_line_does_not_end_the_loop() {
        let mut output = Vec::new();
        Repl::new(&b"(+ 1 1)\n(+ \xff 1)\n(* 2 3)\n"[..], &mut output).interactive(false)
                                                                    .run()
                                                                    .unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), " -> 2\n -> NaN\n -> 6\n");
    }

    #[test]
    fn quit_stops_reading() {
        let out = run("(+ 1 1)\nquit\n(+ 2 2)\n", false);
        assert_eq!(out, " -> 2\n");
    }

    #[test]
    fn interactive_mode_prints_banner_and_prompts() {
        let out = run("(sqrt 16)\n", true);
        assert!(out.starts_with(BANNER));
        assert!(out.contains("expr:  -> 4\n"));
        assert!(out.ends_with(PROMPT));
    }

    #[test]
    fn clear_and_help() {
        let out = run("clear\nhelp\n", false);
        assert!(out.starts_with(CLEAR_SCREEN));
        assert!(out.contains("Operators: + - * / sqrt log ln sin cos tan dist avg PI E"));
    }
}
