//! Line-oriented prompts over any reader/writer pair

use std::io::{BufRead, Write};

use crate::core::error::{ConquestError, Result};

const INVALID_INTEGER: &str = "Entrada invalida! Digite um numero inteiro.";

/// Terminal prompt service
///
/// Generic over its streams so scripted sessions can drive it from memory.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` and read lines until one starts with an integer
    pub fn read_integer(&mut self, message: &str) -> Result<i64> {
        loop {
            let line = self.read_line(message)?;
            if let Some(value) = parse_leading_integer(&line) {
                return Ok(value);
            }
            self.say(INVALID_INTEGER)?;
        }
    }

    /// Print `message` and read one line, without its line ending
    pub fn read_line(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        // Raw bytes: a Latin-1 terminal must not end the game
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(ConquestError::InputClosed);
        }
        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Write a line of output
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write pre-rendered output as-is
    pub fn show(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse an integer at the start of `text`, the way `scanf("%d")` does
///
/// Leading whitespace and one sign are accepted; anything after the digits
/// is ignored. Values outside `i64` are rejected.
pub fn parse_leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits_len = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    text[..sign_len + digits_len].parse().ok()
}
