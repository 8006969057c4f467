use serde_json::Value;
use std::io::{self, Read};

/// JSON piped on stdin, if any. An interactive terminal or an empty pipe
/// means the caller is using flags instead.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    match buffer.trim() {
        "" => Ok(None),
        json => Ok(Some(
            serde_json::from_str(json).map_err(|e| format!("Invalid loan input on stdin: {}", e))?,
        )),
    }
}
