use std::io::{self, BufRead, Write};

use crate::terminal::Palette;

/// Line-oriented access to the player's terminal.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    palette: Palette,
    rule_width: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W, palette: Palette, rule_width: usize) -> Self {
        Self {
            input,
            output,
            palette,
            rule_width,
        }
    }

    pub const fn palette(&self) -> Palette {
        self.palette
    }

    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    pub fn warn(&mut self, text: &str) -> io::Result<()> {
        let styled = self.palette.warning(text);
        self.say(styled)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    pub fn rule(&mut self) -> io::Result<()> {
        if self.rule_width == 0 {
            return Ok(());
        }
        let rule = self.palette.dim(&"-".repeat(self.rule_width));
        self.say(rule)
    }

    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// The next non-blank line, trimmed, or `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if self.input.read_until(b'\n', &mut buffer)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&buffer);
            let line = line.trim();
            if !line.is_empty() {
                return Ok(Some(line.to_owned()));
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
