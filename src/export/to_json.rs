use crate::errors::AppResult;
use serde_json::{Map, Value};
use std::path::Path;

/// Write the rows as a pretty-printed array of flat objects keyed by header.
pub fn write_json(path: &Path, headers: &[&str], rows: &[Vec<String>]) -> AppResult<()> {
    let objects: Vec<Value> = rows
        .iter()
        .map(|row| {
            let map: Map<String, Value> = headers
                .iter()
                .zip(row)
                .map(|(h, v)| (h.to_string(), Value::String(v.clone())))
                .collect();
            Value::Object(map)
        })
        .collect();

    let json = serde_json::to_string_pretty(&objects)?;
    std::fs::write(path, json)?;
    Ok(())
}
