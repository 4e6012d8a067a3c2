use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::{error, Pebble};

const HISTORY_FILE: &str = ".pebble_history";

fn history_path() -> Option<std::path::PathBuf> {
    home::home_dir().map(|dir| dir.join(HISTORY_FILE))
}

/// Interactive prompt: reads one line at a time, runs it through the same
/// pipeline a file would use, and resets the two status flags between
/// lines so one line's mistake doesn't poison the rest of the session. The
/// interpreter's globals and resolver side table are not reset: a REPL
/// session accumulates definitions across lines.
pub fn run(pebble: &mut Pebble) {
    let mut editor = DefaultEditor::new().expect("terminal to support line editing");

    let history_path = history_path();
    if let Some(path) = &history_path {
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                pebble.run(&line);
                error::reset_error();
            }
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => continue,
            Err(e) => {
                log::debug!("repl readline error: {e}");
                break;
            }
        }
    }

    if let Some(path) = &history_path {
        let _ = editor.save_history(path);
    }
}
