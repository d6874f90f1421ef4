//! Output → protocol/json string formatting.
//!
//! Two modes:
//! - **Protocol** (default): one tab-prefixed line per response, `NULL` for
//!   an absent value, an empty line for END
//! - **JSON** (`--json`): one compact object per line, `{"ok":…}` or `{"error":…}`

use simpledb_executor::{Error, Output, NULL_SENTINEL};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Protocol,
    Json,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json("ok", output),
        OutputMode::Protocol => format_protocol(output),
    }
}

/// Format an error.
///
/// Unknown keywords are reported by the dispatcher rather than as a command
/// response, so the protocol line carries no tab.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json("error", err),
        OutputMode::Protocol => match err {
            Error::UnknownCommand { .. } => err.to_string(),
            _ => format!("\t{}", err),
        },
    }
}

fn format_protocol(output: &Output) -> String {
    match output {
        Output::Unit => "\t".to_string(),
        Output::Value(Some(v)) => format!("\t{}", v),
        Output::Value(None) => format!("\t{}", NULL_SENTINEL),
        Output::Count(n) => format!("\t{}", n),
        Output::End => String::new(),
    }
}

fn format_json<T: serde::Serialize>(tag: &str, body: &T) -> String {
    let mut map = serde_json::Map::new();
    match serde_json::to_value(body) {
        Ok(value) => {
            map.insert(tag.to_string(), value);
        }
        Err(e) => {
            map.insert("error".to_string(), e.to_string().into());
        }
    }
    serde_json::Value::Object(map).to_string()
}
