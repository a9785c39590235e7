use std::{
    fs::{self, File},
    io,
    path::Path,
};

use anyhow::Context;
use lexigrid_engine::Dictionary;

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read a word list with one word per line
///
/// # Errors
///
/// Returns error if the file cannot be read
pub fn read_dictionary_file<P>(path: P) -> anyhow::Result<Dictionary>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary file: {}", path.display()))?;
    Ok(Dictionary::parse(&text))
}
