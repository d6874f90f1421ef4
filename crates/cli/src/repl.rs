//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, history, TAB completion.
//! Pipe mode: read lines from stdin, execute each.
//! Both feed lines through [`respond`], so the two produce identical output.

use std::io::{self, BufRead, Write};
use std::path::Path;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};
use tracing::{debug, warn};

use simpledb_executor::{Keyword, Output};

use crate::format::{format_error, format_output, OutputMode};
use crate::state::SessionState;

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The END command was executed.
    End,
    /// Input ran out or was interrupted.
    Eof,
}

/// Execute one line and write its response.
///
/// Returns `Some(SessionEnd::End)` once END has been answered, `None` to
/// keep reading. Blank lines produce no response.
pub fn respond<W: Write>(
    state: &mut SessionState,
    line: &[u8],
    output: &mut W,
    mode: OutputMode,
) -> io::Result<Option<SessionEnd>> {
    let Some(result) = state.execute_bytes(line) else {
        return Ok(None);
    };

    let (text, end) = match result {
        Ok(out) => (format_output(&out, mode), out == Output::End),
        Err(e) => (format_error(&e, mode), false),
    };
    writeln!(output, "{}", text)?;
    output.flush()?;

    Ok(end.then_some(SessionEnd::End))
}

/// Run the line loop over any reader and writer.
///
/// A line that is not valid UTF-8 gets an error response and the session
/// continues.
pub fn run_session<R: BufRead, W: Write>(
    state: &mut SessionState,
    mut input: R,
    mut output: W,
    mode: OutputMode,
) -> io::Result<SessionEnd> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!(target: "simpledb::session", "End of input");
            return Ok(SessionEnd::Eof);
        }
        if let Some(end) = respond(state, &buf, &mut output, mode)? {
            return Ok(end);
        }
    }
}

/// Run in pipe mode: read lines from stdin, execute each.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> io::Result<SessionEnd> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(state, stdin.lock(), stdout.lock(), mode)
}

/// Run the interactive REPL.
pub fn run_repl(
    state: &mut SessionState,
    mode: OutputMode,
    history: Option<&Path>,
) -> rustyline::Result<SessionEnd> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<KeywordHelper, _> = Editor::with_config(config)?;
    rl.set_helper(Some(KeywordHelper));

    if let Some(path) = history {
        // A missing file on first run is expected.
        if let Err(e) = rl.load_history(path) {
            debug!(target: "simpledb::session", error = %e, "No history loaded");
        }
    }

    let stdout = io::stdout();
    let end = loop {
        match rl.readline(&state.prompt()) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                if let Some(end) = respond(state, line.as_bytes(), &mut stdout.lock(), mode)? {
                    break end;
                }
            }
            // Ctrl-C and Ctrl-D both end the session
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break SessionEnd::Eof,
            Err(err) => return Err(err),
        }
    };

    if let Some(path) = history {
        if let Err(e) = rl.save_history(path) {
            warn!(target: "simpledb::session", error = %e, path = %path.display(), "Failed to save history");
        }
    }
    Ok(end)
}

// =========================================================================
// TAB Completion
// =========================================================================

/// Completes the keyword at the start of the line.
struct KeywordHelper;

impl Helper for KeywordHelper {}
impl Validator for KeywordHelper {}
impl Highlighter for KeywordHelper {}
impl Hinter for KeywordHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for KeywordHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(complete_keyword(&line[..pos]))
    }
}

/// Candidates for the partial keyword in `line_to_pos`.
fn complete_keyword(line_to_pos: &str) -> (usize, Vec<Pair>) {
    let pos = line_to_pos.len();
    let prefix = line_to_pos.trim_start();

    // Only the first word is a keyword
    if prefix.contains(char::is_whitespace) {
        return (pos, vec![]);
    }

    let candidates = Keyword::ALL
        .iter()
        .map(|kw| kw.as_str())
        .filter(|kw| {
            kw.len() >= prefix.len() && kw[..prefix.len()].eq_ignore_ascii_case(prefix)
        })
        .map(|kw| Pair {
            display: kw.to_string(),
            replacement: kw.to_string(),
        })
        .collect();
    (pos - prefix.len(), candidates)
}
