//! Line-oriented console: prompts, validated reads and styled output.
//!
//! Every read re-prompts until the input is acceptable. End of input surfaces
//! as [`RegistryError::InputClosed`] so the loop can stop instead of spinning.

use std::io::{BufRead, Write};

use crate::app::{Theme, Tone};
use crate::error::{RegistryError, Result};

pub struct Console<R, W> {
    input: R,
    output: W,
    theme: Theme,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, theme: Theme) -> Self {
        Self { input, output, theme }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line in the given tone.
    pub fn say(&mut self, tone: Tone, text: &str) -> Result<()> {
        writeln!(self.output, "{}", self.theme.paint(tone, text))?;
        Ok(())
    }

    pub fn blank_line(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Print `prompt` and return the raw line without its terminator.
    /// Bytes that are not valid UTF-8 are replaced, so a bad line is rejected
    /// by the caller's validation rather than ending the session.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", self.theme.paint(Tone::Prompt, prompt))?;
        self.output.flush()?;
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(RegistryError::InputClosed);
        }
        let buf = String::from_utf8_lossy(&bytes);
        let line = buf.trim_end_matches(['\r', '\n']).to_string();
        Ok(line)
    }

    /// Menu selection, trimmed. Validation happens in the caller.
    pub fn read_choice(&mut self, prompt: &str) -> Result<String> {
        Ok(self.ask(prompt)?.trim().to_string())
    }

    /// Integer in `min..=max`.
    pub fn read_int(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64> {
        loop {
            let raw = self.ask(prompt)?;
            if let Some(v) = self.check_int(&raw, min, max)? {
                return Ok(v);
            }
        }
    }

    /// Integer in `min..=max`, or `None` when the line is blank.
    pub fn read_optional_int(&mut self, prompt: &str, min: i64, max: i64) -> Result<Option<i64>> {
        loop {
            let raw = self.ask(prompt)?;
            if raw.trim().is_empty() {
                return Ok(None);
            }
            if let Some(v) = self.check_int(&raw, min, max)? {
                return Ok(Some(v));
            }
        }
    }

    /// Non-blank text, trimmed.
    pub fn read_string(&mut self, prompt: &str) -> Result<String> {
        loop {
            let raw = self.ask(prompt)?;
            let t = raw.trim();
            if !t.is_empty() {
                return Ok(t.to_string());
            }
            self.say(Tone::Error, "Input cannot be empty.")?;
        }
    }

    /// Trimmed text, or `None` when the line is blank.
    pub fn read_optional(&mut self, prompt: &str) -> Result<Option<String>> {
        let raw = self.ask(prompt)?;
        let t = raw.trim();
        Ok(if t.is_empty() { None } else { Some(t.to_string()) })
    }

    // Reports the problem and returns None when the line must be asked again.
    fn check_int(&mut self, raw: &str, min: i64, max: i64) -> Result<Option<i64>> {
        match parse_int(raw) {
            Ok(v) if v < min || v > max => {
                self.say(Tone::Error, &format!("Please enter a number between {min} and {max}."))?;
                Ok(None)
            }
            Ok(v) => Ok(Some(v)),
            Err(e) => {
                tracing::debug!(error = %e, "rejected numeric input");
                self.say(Tone::Error, "Invalid number, try again.")?;
                Ok(None)
            }
        }
    }
}

pub fn parse_int(text: &str) -> Result<i64> {
    let t = text.trim();
    t.parse::<i64>().map_err(|_| RegistryError::InputFormat(t.to_string()))
}
