//! Where the booking flows get their answers from.
//!
//! A real terminal gets dialoguer prompts. Anything else (a pipe, a script,
//! a test) is read one line at a time, with the same wording and the same
//! re-prompting rules.

use std::io::{BufRead, Write};

use anyhow::Result;
use console::Term;
use dialoguer::{Confirm, Input};
use thiserror::Error;

use trimtime_core::validate::is_valid_phone;

pub const PHONE_PROMPT: &str = "Enter customer phone number (11 digits, starts with '09')";
pub const PHONE_HINT: &str =
    "Invalid phone number. Please enter exactly 11 digits starting with '09'.";

/// Input ran out before the session ended.
#[derive(Debug, Error)]
#[error("input closed")]
pub struct InputClosed;

pub trait Prompter {
    /// One trimmed answer. Unless `allow_empty`, blank answers are asked again.
    fn text(&mut self, prompt: &str, allow_empty: bool) -> Result<String>;

    /// A phone number, asked again until the format is right.
    fn phone(&mut self) -> Result<String>;

    /// Yes or no, defaulting to no.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    fn pause(&mut self) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}

/// Interactive prompts on an attended terminal.
pub struct TerminalPrompter {
    term: Term,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str, allow_empty: bool) -> Result<String> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()?;
        Ok(answer.trim().to_string())
    }

    fn phone(&mut self) -> Result<String> {
        let phone: String = Input::new()
            .with_prompt(PHONE_PROMPT)
            .validate_with(|input: &String| -> Result<(), &str> {
                if is_valid_phone(input.trim()) {
                    Ok(())
                } else {
                    Err(PHONE_HINT)
                }
            })
            .interact_text()?;
        Ok(phone.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }

    fn pause(&mut self) -> Result<()> {
        self.term.write_str("Press Enter to continue...")?;
        self.term.read_line()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.term.clear_screen()?;
        Ok(())
    }
}

/// Line-at-a-time prompts for unattended input.
///
/// Prompts and re-prompt hints go to `output`; end of input surfaces as
/// [`InputClosed`].
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn text(&mut self, prompt: &str, allow_empty: bool) -> Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            if allow_empty || !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    fn phone(&mut self) -> Result<String> {
        loop {
            let answer = self.ask(PHONE_PROMPT)?;
            if is_valid_phone(&answer) {
                return Ok(answer);
            }
            writeln!(self.output, "{PHONE_HINT}")?;
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(&format!("{prompt} (yes/no)"))?;
        Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
    }

    fn pause(&mut self) -> Result<()> {
        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lines(script: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn written(prompter: &LinePrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(prompter.output()).into_owned()
    }

    #[test]
    fn test_text_trims_and_skips_blank_lines() {
        let mut p = lines("\n  juan dela cruz  \n");
        assert_eq!(p.text("Name", false).unwrap(), "juan dela cruz");
        assert_eq!(written(&p).matches("Name: ").count(), 2);
    }

    #[test]
    fn test_text_allow_empty_returns_blank() {
        let mut p = lines("\n");
        assert_eq!(p.text("Enter your choice", true).unwrap(), "");
    }

    #[test]
    fn test_phone_repeats_until_valid() {
        let mut p = lines("123\n0917123456a\n09171234567\n");
        assert_eq!(p.phone().unwrap(), "09171234567");
        assert_eq!(written(&p).matches(PHONE_HINT).count(), 2);
    }

    #[test]
    fn test_confirm_accepts_yes_or_y() {
        let mut p = lines("yes\nY\nno\n\nmaybe\n");
        assert!(p.confirm("Cancel?").unwrap());
        assert!(p.confirm("Cancel?").unwrap());
        assert!(!p.confirm("Cancel?").unwrap());
        assert!(!p.confirm("Cancel?").unwrap());
        assert!(!p.confirm("Cancel?").unwrap());
        assert!(written(&p).contains("Cancel? (yes/no): "));
    }

    #[test]
    fn test_end_of_input_is_input_closed() {
        let mut p = lines("");
        let err = p.text("Name", false).unwrap_err();
        assert!(err.is::<InputClosed>());

        let mut p = lines("");
        assert!(p.pause().unwrap_err().is::<InputClosed>());
    }
}
