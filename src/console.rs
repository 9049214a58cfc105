//! Colored console presentation for the demos
//!
//! Every demo talks to the terminal through a [`Presenter`], so input echoes,
//! tool notices, errors, and model responses keep one color scheme across the
//! whole playground, including responses that arrive token by token.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// ANSI escape sequence that clears any active color.
const RESET: &str = "\x1b[0m";

/// Display colors, one per message category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Bright cyan, for prompts and echoed input.
    Input,
    /// Bright magenta, for the `Thinking...` placeholder.
    Thinking,
    /// Bright green, for model responses.
    Response,
    /// Bright magenta, for tool notices.
    Tool,
    /// Bright red, for errors.
    Error,
    /// The terminal's default rendering.
    Default,
}

impl Color {
    /// The ANSI escape sequence that activates this color.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Input => "\x1b[96m",
            Self::Thinking | Self::Tool => "\x1b[95m",
            Self::Response => "\x1b[92m",
            Self::Error => "\x1b[91m",
            Self::Default => RESET,
        }
    }
}

/// Colored console logger and input reader.
///
/// A presenter owns the color applied to streamed output; discrete log lines
/// carry their own color instead. Construct one per program, or one per test
/// case with [`Presenter::with_io`], and pass it around explicitly.
pub struct Presenter<R, W> {
    reader: R,
    writer: W,
    stream_color: Color,
}

impl Presenter<BufReader<Stdin>, Stdout> {
    /// Create a presenter bound to stdin and stdout.
    pub fn new() -> Self {
        Self::with_io(BufReader::new(io::stdin()), io::stdout())
    }
}

impl Default for Presenter<BufReader<Stdin>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> Presenter<R, W> {
    /// Create a presenter over arbitrary input and output.
    pub fn with_io(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            stream_color: Color::Default,
        }
    }

    /// Log a colored line.
    ///
    /// Postcondition: the stream color is reset to [`Color::Default`]. A
    /// discrete log line ends any prior streaming sequence's visual context,
    /// so the next [`log_streaming`](Self::log_streaming) call is uncolored
    /// unless a stream color is set again.
    pub fn log(&mut self, message: &str, color: Color) -> io::Result<()> {
        self.stream_color = Color::Default;
        writeln!(self.writer, "{}{message}{RESET}", color.code())
    }

    /// Log a colored `"{prefix}: {message}"` line.
    ///
    /// Resets the stream color, like [`log`](Self::log).
    pub fn log_prefixed(&mut self, prefix: &str, message: &str, color: Color) -> io::Result<()> {
        self.stream_color = Color::Default;
        writeln!(self.writer, "{}{prefix}: {message}{RESET}", color.code())
    }

    /// Log with the `INPUT` prefix and input color.
    pub fn log_input(&mut self, text: &str) -> io::Result<()> {
        self.log_prefixed("INPUT", text, Color::Input)
    }

    /// Log the `Thinking...` placeholder, framed by blank lines, while a
    /// blocking model call is in flight. Leaves the stream color untouched.
    pub fn log_thinking(&mut self) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}Thinking...{RESET}", Color::Thinking.code())?;
        writeln!(self.writer)
    }

    /// Log with the `RESPONSE` prefix and response color.
    pub fn log_response(&mut self, text: &str) -> io::Result<()> {
        self.log_prefixed("RESPONSE", text, Color::Response)
    }

    /// Log with the `TOOL` prefix and tool color.
    pub fn log_tool(&mut self, text: &str) -> io::Result<()> {
        self.log_prefixed("TOOL", text, Color::Tool)
    }

    /// Log with the `ERROR` prefix and error color.
    pub fn log_error(&mut self, text: &str) -> io::Result<()> {
        self.log_prefixed("ERROR", text, Color::Error)
    }

    /// Write one streamed token in the active stream color, with no trailing
    /// newline, and flush so partial output is visible immediately.
    pub fn log_streaming(&mut self, token: &str) -> io::Result<()> {
        write!(self.writer, "{}{token}", self.stream_color.code())?;
        self.writer.flush()
    }

    /// Set the color for subsequent streamed output.
    pub fn set_stream_color(&mut self, color: Color) {
        self.stream_color = color;
    }

    /// Color subsequent streamed output as a model response.
    pub fn set_response_stream_color(&mut self) {
        self.set_stream_color(Color::Response);
    }

    /// Return subsequent streamed output to the terminal's default color.
    pub fn set_default_stream_color(&mut self) {
        self.set_stream_color(Color::Default);
    }

    /// The color currently applied to streamed output.
    pub const fn stream_color(&self) -> Color {
        self.stream_color
    }

    /// Print a colored prompt and read one line of input.
    pub fn input(&mut self, prompt: &str) -> io::Result<String> {
        self.input_colored(prompt, Color::Input)
    }

    /// Print a prompt in the given color and read one line of input.
    ///
    /// The returned text is verbatim except for the trailing line ending.
    /// A closed input source surfaces as [`io::ErrorKind::UnexpectedEof`].
    pub fn input_colored(&mut self, prompt: &str, color: Color) -> io::Result<String> {
        write!(self.writer, "{}{prompt}{RESET}", color.code())?;
        self.writer.flush()?;
        self.read_line()
    }

    /// Prompt with a default value, which is returned on an empty reply.
    pub fn input_with_default(
        &mut self,
        prompt: &str,
        default: &str,
        show_default: bool,
    ) -> io::Result<String> {
        let prompt = if show_default {
            format!("{prompt} (default - {default}): ")
        } else {
            format!("{prompt}: ")
        };
        let entered = self.input_colored(&prompt, Color::Input)?;
        if entered.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(entered)
        }
    }

    /// Prompt until the reply parses as an integer.
    ///
    /// Each failed parse prints an error line and reprompts; the loop only
    /// ends with a valid integer or an input error.
    pub fn input_int(&mut self, prompt: &str) -> io::Result<i64> {
        loop {
            let entered = self.input_colored(prompt, Color::Input)?;
            match entered.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(
                    self.writer,
                    "{}Invalid input! Please enter an integer.{RESET}",
                    Color::Error.code()
                )?,
            }
        }
    }

    /// Consume the presenter and return its output sink.
    ///
    /// Lets tests inspect the exact bytes that were written.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
