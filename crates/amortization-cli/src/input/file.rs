use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Deserialise a loan input file into a typed struct.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let (location, contents) = read_input_file(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Invalid loan input in '{}': {}", location.display(), e).into())
}

/// Read a loan input file as untyped JSON, for inputs with optional extras.
pub fn read_json_value(path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    read_json(path)
}

fn read_input_file(path: &str) -> Result<(PathBuf, String), Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let location = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !location.is_file() {
        return Err(format!("Input file not found: {}", location.display()).into());
    }

    let contents = fs::read_to_string(&location)
        .map_err(|e| format!("Failed to read '{}': {}", location.display(), e))?;
    Ok((location, contents))
}
