/// Line-oriented console
///
/// Wraps any reader/writer pair so the session can run against stdin/stdout
/// or against in-memory buffers in tests.

use crate::error::Result;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show `message` and read one line
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so
    /// garbage input reaches the menus as an unknown option.
    ///
    /// # Returns
    /// * `Ok(Some(line))` - The line with surrounding whitespace trimmed
    /// * `Ok(None)` - Input is exhausted
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            // Keep the transcript tidy when input ends mid-prompt
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_trimmed_lines() {
        let mut console = Console::new(Cursor::new("  hello \nworld\n"), Vec::new());

        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("world"));
        assert_eq!(console.prompt("> ").unwrap(), None);

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out.matches("> ").count(), 3);
    }

    #[test]
    fn test_prompt_replaces_invalid_utf8() {
        let mut console = Console::new(Cursor::new(b"\xff\xfe 7\nok\n".to_vec()), Vec::new());

        let line = console.prompt("> ").unwrap().unwrap();
        assert!(line.contains('\u{FFFD}'));
        assert!(line.ends_with('7'));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("ok"));
    }

    #[test]
    fn test_say() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.say("line one").unwrap();
        console.say("line two").unwrap();

        assert_eq!(console.output().as_slice(), b"line one\nline two\n");
    }
}
