//! Plain-text message scripts.
//!
//! One message per line: an inlet index followed by integer values.
//! Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! # envelope, then true reverse
//! 1 1 2 3
//! 2 2
//! 0 60 -1 64
//! ```

use sm_ir::{Error, Inlet, Output, Payload};
use thiserror::Error as ThisError;

use crate::Controller;

/// A script line that could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("line {line}: {reason}")]
pub struct ScriptError {
    pub line: usize,
    pub reason: String,
}

/// One message from a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// 1-based source line
    pub line: usize,
    pub inlet: usize,
    pub payload: Payload,
}

/// Parse a whole script.
pub fn parse_script(text: &str) -> Result<Vec<Message>, ScriptError> {
    let mut messages = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        messages.push(parse_line(line, trimmed)?);
    }
    Ok(messages)
}

fn parse_line(line: usize, text: &str) -> Result<Message, ScriptError> {
    let fail = |reason: String| ScriptError { line, reason };

    let mut tokens = text.split_whitespace();
    let inlet: usize = tokens
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| fail(format!("expected inlet index in {:?}", text)))?;
    let values = tokens
        .map(|t| t.parse::<i32>().map_err(|_| fail(format!("not an integer: {:?}", t))))
        .collect::<Result<Vec<_>, _>>()?;

    // unknown inlets still parse; the controller reports them
    let takes_list = Inlet::from_index(inlet).map_or(true, Inlet::takes_list);
    let payload = if takes_list {
        Payload::List(values)
    } else if let &[value] = values.as_slice() {
        Payload::Int(value)
    } else {
        return Err(fail(format!("inlet {} takes exactly one value", inlet)));
    };
    Ok(Message { line, inlet, payload })
}

/// Render an emission the way the CLI prints it.
pub fn format_output(output: &Output) -> String {
    let values: Vec<String> = output.to_values().iter().map(|v| v.to_string()).collect();
    let label = format!("out{}:", output.outlet().index());
    if values.is_empty() {
        label
    } else {
        format!("{} {}", label, values.join(" "))
    }
}

/// Feed every message to `ctrl` and collect the printed lines.
///
/// Failed messages are logged and skipped; they emit nothing.
pub fn replay(ctrl: &mut Controller, messages: &[Message]) -> (Vec<String>, Vec<(usize, Error)>) {
    let mut printed = Vec::new();
    let mut errors = Vec::new();
    for msg in messages {
        match ctrl.handle(msg.inlet, msg.payload.clone()) {
            Ok(outputs) => printed.extend(outputs.iter().map(format_output)),
            Err(err) => {
                log::error!("line {}: {}", msg.line, err);
                errors.push((msg.line, err));
            }
        }
    }
    (printed, errors)
}
