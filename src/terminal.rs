use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Instant;

use crossbeam_channel::{Receiver, RecvTimeoutError};

use crate::random::Randomness;
use crate::session::{Advance, QuizSession, ResetPrompt};
use crate::view::{OptionHighlight, Phase, SessionView};

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based option index.
    Pick(usize),
    Reset,
    Quit,
    Unknown,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "r" | "reset" => Self::Reset,
            "q" | "quit" | "exit" => Self::Quit,
            other => match other.parse::<usize>() {
                Ok(number) if number >= 1 => Self::Pick(number - 1),
                _ => Self::Unknown,
            },
        }
    }
}

/// Lines read on a background thread, so the loop can tell when each one was typed.
struct LineFeed {
    lines: Receiver<io::Result<String>>,
}

impl LineFeed {
    fn spawn<I>(mut input: I) -> Self
    where
        I: BufRead + Send + 'static,
    {
        let (sender, lines) = crossbeam_channel::unbounded();
        thread::spawn(move || {
            loop {
                let mut line = String::new();
                match input.read_line(&mut line) {
                    Ok(0) => break,
                    Ok(_) => {
                        if sender.send(Ok(line)).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        let _ = sender.send(Err(error));
                        break;
                    }
                }
            }
        });

        Self { lines }
    }

    /// Blocks for the next line. `None` once input has ended.
    fn next_line(&self) -> io::Result<Option<String>> {
        match self.lines.recv() {
            Ok(line) => line.map(Some),
            Err(_) => Ok(None),
        }
    }

    /// Waits until `deadline`, dropping every line that arrives before it.
    fn discard_until(&self, deadline: Instant) -> io::Result<usize> {
        let mut discarded = 0;
        loop {
            let wait = deadline.saturating_duration_since(Instant::now());
            match self.lines.recv_timeout(wait) {
                Ok(line) => {
                    line?;
                    discarded += 1;
                }
                Err(RecvTimeoutError::Timeout) => return Ok(discarded),
                Err(RecvTimeoutError::Disconnected) => {
                    thread::sleep(deadline.saturating_duration_since(Instant::now()));
                    return Ok(discarded);
                }
            }
        }
    }
}

/// `Reset? [y/N]` asked on the terminal's own input and output.
struct LinePrompt<'a, O> {
    input: &'a LineFeed,
    output: &'a mut O,
}

impl<O: Write> ResetPrompt for LinePrompt<'_, O> {
    fn confirm_reset(&mut self) -> bool {
        let answer = write!(self.output, "Reset? [y/N] ")
            .and_then(|_| self.output.flush())
            .and_then(|_| self.input.next_line());

        match answer {
            Ok(Some(line)) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(error) => {
                log::warn!("reset prompt failed: {error}");
                false
            }
        }
    }
}

/// Renders a view as plain text.
pub fn render(view: &SessionView) -> String {
    let mut text = format!("[{}]\n", view.progress);

    if view.phase == Phase::Exhausted {
        text.push_str("All radicals seen. Type r to start over.\n");
        return text;
    }

    if let (Some(glyph), Some(pronunciation)) = (view.glyph, view.pronunciation.as_deref()) {
        text.push_str(&format!("\n    {glyph}    {pronunciation}\n\n"));
    }

    for (index, option) in view.options.iter().enumerate() {
        let marker = match option.highlight {
            OptionHighlight::Neutral => " ",
            OptionHighlight::Correct => "✓",
            OptionHighlight::Incorrect => "✗",
            OptionHighlight::Faded => "·",
        };
        text.push_str(&format!("  {marker} {}) {}\n", index + 1, option.value));
    }

    match view.picked_correctly() {
        Some(true) => text.push_str("Correct!\n"),
        Some(false) => text.push_str("Not quite.\n"),
        None => {}
    }

    text
}

/// Runs the quiz against line-oriented input until `q` or end of input.
///
/// Input is read on its own thread. Lines typed during a reveal window are dropped,
/// so they never answer a round the user has not seen yet.
pub fn run<R, I, O>(session: &mut QuizSession<'_, R>, input: I, mut output: O) -> io::Result<()>
where
    R: Randomness,
    I: BufRead + Send + 'static,
    O: Write,
{
    let input = LineFeed::spawn(input);
    write!(output, "{}", render(&session.view()))?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = input.next_line()? else {
            break;
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Reset => {
                let mut prompt = LinePrompt {
                    input: &input,
                    output: &mut output,
                };
                if session.request_reset(&mut prompt) {
                    write!(output, "{}", render(&session.view()))?;
                }
            }
            Command::Pick(option) => match session.pick(option) {
                Ok(reveal) => {
                    let deadline = Instant::now() + reveal.delay;
                    write!(output, "{}", render(&session.view()))?;
                    output.flush()?;

                    let discarded = input.discard_until(deadline)?;
                    if discarded > 0 {
                        log::debug!("ignored {discarded} line(s) typed during the reveal");
                    }

                    if session.advance(reveal.ticket) != Advance::Stale {
                        write!(output, "{}", render(&session.view()))?;
                    }
                }
                Err(error) => writeln!(output, "{error}")?,
            },
            Command::Unknown => {
                writeln!(output, "Type 1-4 to answer, r to reset, q to quit.")?;
            }
        }
    }

    Ok(())
}
