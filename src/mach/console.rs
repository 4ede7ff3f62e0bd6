use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// ## Terminal seam of the runtime
///
/// `PRINT` hands each finished line to [`Console::print`] as soon as it is
/// produced. `INPUT` writes its prompt with [`Console::prompt`] and then
/// blocks in [`Console::read_line`].

pub trait Console {
    fn print(&mut self, line: &str) -> io::Result<()>;
    fn prompt(&mut self, prompt: &str) -> io::Result<()>;
    /// One line without its line ending, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Process standard output and standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdio;

impl Console for Stdio {
    fn print(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt)?;
        stdout.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut s = String::new();
        if io::stdin().lock().read_line(&mut s)? == 0 {
            return Ok(None);
        }
        Ok(Some(s.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

/// In-memory console. Input lines are queued up front and everything a
/// terminal would show, typed input included, lands in the transcript.
#[derive(Debug, Default, Clone)]
pub struct Scripted {
    input: VecDeque<String>,
    transcript: String,
}

impl Scripted {
    pub fn new<I, S>(input: I) -> Scripted
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Scripted {
            input: input.into_iter().map(Into::into).collect(),
            transcript: String::new(),
        }
    }

    pub fn push_input<S: Into<String>>(&mut self, line: S) {
        self.input.push_back(line.into());
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }
}

impl Console for Scripted {
    fn print(&mut self, line: &str) -> io::Result<()> {
        self.transcript.push_str(line);
        self.transcript.push('\n');
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        self.transcript.push_str(prompt);
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let line = self.input.pop_front();
        if let Some(line) = &line {
            self.transcript.push_str(line);
            self.transcript.push('\n');
        }
        Ok(line)
    }
}
