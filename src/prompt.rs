//! Line-oriented prompting for human-facing tools.
//!
//! Bad input is reported and asked again in a loop; the only ways out are a successful
//! parse, end of input, or an I/O failure.

use std::fmt;
use std::io::{self, BufRead, Read, Stdout, Write};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum PromptError {
    #[error("input closed")]
    Closed,
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Reads answers from `input` and writes prompts and complaints to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> fmt::Debug for Prompter<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prompter")
    }
}

/// Line-at-a-time reader over the process's stdin.
///
/// Holds no lock between reads and never buffers past the line it asked for, so several
/// prompters can share the terminal without stealing each other's input.
#[derive(Debug, Default)]
pub struct StdinLines {
    line: String,
    pos: usize,
}

impl Read for StdinLines {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let avail = self.fill_buf()?;
        let n = avail.len().min(buf.len());
        buf[..n].copy_from_slice(&avail[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for StdinLines {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.line.len() {
            self.line.clear();
            self.pos = 0;
            io::stdin().read_line(&mut self.line)?;
        }
        Ok(&self.line.as_bytes()[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.line.len());
    }
}

impl Prompter<StdinLines, Stdout> {
    /// Prompt on the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(StdinLines::default(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Ask until `parse` accepts the answer. Rejections are echoed back before reprompting.
    pub fn ask<T, E, F>(&mut self, prompt: &str, mut parse: F) -> Result<T, PromptError>
    where
        E: fmt::Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        loop {
            let line = self.read_line(prompt)?.ok_or(PromptError::Closed)?;
            match parse(&line) {
                Ok(v) => return Ok(v),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    /// Yes/no question; an empty answer takes `default`.
    pub fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        self.ask(prompt, |s| match s.to_ascii_lowercase().as_str() {
            "" => Ok(default),
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            other => Err(format!("Please answer y or n, not '{other}'")),
        })
    }

    /// Write a line of output.
    pub fn say(&mut self, msg: impl fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_reprompts_until_valid() {
        let mut p = prompter("x\nnope\n42\n");
        let n: u32 = p.ask("n? ", |s| s.parse::<u32>()).unwrap();
        assert_eq!(n, 42);
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("n? ").count(), 3);
    }

    #[test]
    fn many_bad_answers_do_not_grow_the_stack() {
        let mut input = "bad\n".repeat(10_000);
        input.push_str("ok\n");
        let mut p = prompter(&input);
        let v = p.ask("? ", |s| if s == "ok" { Ok(s.to_string()) } else { Err("again") }).unwrap();
        assert_eq!(v, "ok");
    }

    #[test]
    fn end_of_input_is_closed() {
        let mut p = prompter("bad\n");
        let r: Result<u8, _> = p.ask("? ", |s| s.parse::<u8>());
        assert!(matches!(r, Err(PromptError::Closed)));
    }

    #[test]
    fn confirm_defaults_on_empty() {
        let mut p = prompter("\nmaybe\nY\n");
        assert!(!p.confirm("call? ", false).unwrap());
        assert!(p.confirm("call? ", false).unwrap());
    }
}
