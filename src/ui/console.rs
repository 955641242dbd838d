//! Line-based console: screen clearing, the GEOGAMR header and prompts.

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Console over any line reader and writer, so flows can be driven by scripted input.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Clear the terminal and print the header with an optional status message.
    pub fn clear(&mut self, message: &str) -> io::Result<()> {
        queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(self.output, "/////////////")?;
        writeln!(self.output, "{}", "|| GEOGAMR ||".bold().cyan())?;
        writeln!(self.output, "|| {}\n", message)?;
        self.output.flush()
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print `label` and read one line, without the trailing newline.
    /// End of input is an `UnexpectedEof` error.
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(buf.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    pub fn wait_for_enter(&mut self) -> io::Result<()> {
        self.prompt("Press Enter to continue...").map(|_| ())
    }
}
