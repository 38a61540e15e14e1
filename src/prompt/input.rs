//! Line input capability.

use std::io::{self, BufRead, Write};

/// "Ask one question, get one line of text."
pub trait LineInput {
    /// Show `prompt` and block until a line is available.
    ///
    /// The returned text has its line terminator removed and is otherwise
    /// untouched. End of input yields an empty string. Bytes that are not
    /// valid UTF-8 are replaced with U+FFFD.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;

    /// Release the channel. No further questions are asked afterwards.
    fn close(&mut self) {}
}

/// [`LineInput`] over a buffered reader and a writer, normally stdin/stdout.
///
/// Each prompt is preceded by a blank line and prefixed with ` > `.
pub struct StdioInput<R, W> {
    reader: R,
    writer: W,
    closed: bool,
}

impl StdioInput<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            closed: false,
        }
    }

    #[cfg(test)]
    fn is_closed(&self) -> bool {
        self.closed
    }

    #[cfg(test)]
    fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> LineInput for StdioInput<R, W> {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        if self.closed {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "input channel is closed",
            ));
        }

        writeln!(self.writer)?;
        write!(self.writer, " > {}", prompt)?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        self.reader.read_until(b'\n', &mut buf)?;
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn close(&mut self) {
        let _ = self.writer.flush();
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_writes_prompt_and_strips_terminator() {
        let mut input = StdioInput::new(Cursor::new("My Tool\r\n"), Vec::new());

        let answer = input.ask("Name: ").unwrap();

        assert_eq!(answer, "My Tool");
        assert_eq!(String::from_utf8(input.into_writer()).unwrap(), "\n > Name: ");
    }

    #[test]
    fn test_ask_keeps_surrounding_spaces() {
        let mut input = StdioInput::new(Cursor::new("  spaced  \n"), Vec::new());
        assert_eq!(input.ask("Name: ").unwrap(), "  spaced  ");
    }

    #[test]
    fn test_end_of_input_is_empty_answer() {
        let mut input = StdioInput::new(Cursor::new(""), Vec::new());
        assert_eq!(input.ask("Name: ").unwrap(), "");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input = StdioInput::new(Cursor::new("a\nb"), Vec::new());
        assert_eq!(input.ask("1: ").unwrap(), "a");
        assert_eq!(input.ask("2: ").unwrap(), "b");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut input = StdioInput::new(Cursor::new(&b"Caf\xe9 Tool\n"[..]), Vec::new());
        assert_eq!(input.ask("Name: ").unwrap(), "Caf\u{FFFD} Tool");
    }

    #[test]
    fn test_ask_after_close_fails() {
        let mut input = StdioInput::new(Cursor::new("a\n"), Vec::new());
        input.close();

        assert!(input.is_closed());
        let err = input.ask("Name: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
