use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::resolver::Directory;

/// Interactive decisions the directory search needs from the user.
pub trait CandidatePrompt {
    /// Asked once per matching directory as soon as it is found.
    /// `true` ends the search with this directory.
    fn confirm(&mut self, candidate: &Path) -> io::Result<bool>;

    /// Asked after the search when more than one declined match remains.
    /// Returns an index into `candidates`.
    fn choose(&mut self, candidates: &[Directory]) -> io::Result<usize>;
}

/// Line-oriented prompt over any reader/writer pair (stdin/stdout in the binary).
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Startup prompt: one line naming a directory path or a directory name.
    pub fn read_query(&mut self) -> io::Result<String> {
        write!(self.output, "Enter full path or name of directory: ")?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

impl<R: BufRead, W: Write> CandidatePrompt for ConsolePrompt<R, W> {
    fn confirm(&mut self, candidate: &Path) -> io::Result<bool> {
        loop {
            write!(
                self.output,
                "Found {}, do you wish to use this directory? (Y/N)\t",
                candidate.display()
            )?;
            let answer = self.read_line()?;
            match answer.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => {}
            }
        }
    }

    fn choose(&mut self, candidates: &[Directory]) -> io::Result<usize> {
        writeln!(self.output, "Found the following directories:")?;
        for (i, dir) in candidates.iter().enumerate() {
            writeln!(self.output, "{}: {}", i, dir.path().display())?;
        }
        loop {
            write!(self.output, "Which one do you wish to use? ")?;
            let answer = self.read_line()?;
            match answer.trim().parse::<usize>() {
                Ok(i) if i < candidates.len() => return Ok(i),
                _ => writeln!(self.output, "Invalid input...")?,
            }
        }
    }
}
