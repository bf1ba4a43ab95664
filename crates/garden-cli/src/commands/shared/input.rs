use std::io::Read;
use std::path::Path;

use anyhow::Context;
use garden_core::entities::ContentItem;
use serde_json::Value;

/// One element of an input file.
///
/// A file that is not JSON fails as a whole; an element that does not
/// deserialize as a content item only fails itself.
#[derive(Debug)]
pub enum InputEntry {
    Item(ContentItem),
    Malformed { id: String, error: String },
}

/// Read content items from a JSON file, or stdin when `path` is `-`.
///
/// The file holds either one content item or an array of them. Items
/// without an id are labelled `item-<n>` (1-based position in the file).
pub fn read_entries(path: &Path) -> anyhow::Result<Vec<InputEntry>> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read content items from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    let entries = parse_entries(&raw)
        .with_context(|| format!("invalid content item JSON in {}", path.display()))?;
    tracing::debug!(count = entries.len(), path = %path.display(), "content items loaded");
    Ok(entries)
}

/// Read exactly one content item. A malformed item is an error here.
pub fn read_single(path: &Path) -> anyhow::Result<ContentItem> {
    let mut entries = read_entries(path)?;
    match entries.len() {
        1 => match entries.remove(0) {
            InputEntry::Item(item) => Ok(item),
            InputEntry::Malformed { error, .. } => Err(anyhow::anyhow!(error))
                .with_context(|| format!("invalid content item JSON in {}", path.display())),
        },
        0 => anyhow::bail!("{} contains no content items", path.display()),
        n => anyhow::bail!(
            "{} contains {n} content items; use `garden batch` for more than one",
            path.display()
        ),
    }
}

fn parse_entries(raw: &str) -> anyhow::Result<Vec<InputEntry>> {
    let values = match serde_json::from_str::<Value>(raw)? {
        Value::Array(values) => values,
        value @ Value::Object(_) => vec![value],
        other => anyhow::bail!("expected an object or an array of objects, found {other}"),
    };

    Ok(values
        .into_iter()
        .enumerate()
        .map(|(index, value)| entry_from_value(index, value))
        .collect())
}

fn entry_from_value(index: usize, value: Value) -> InputEntry {
    let id = value
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.trim().is_empty())
        .map_or_else(|| format!("item-{}", index + 1), ToString::to_string);

    match serde_json::from_value::<ContentItem>(value) {
        Ok(mut item) => {
            item.id = id;
            InputEntry::Item(item)
        }
        Err(error) => {
            tracing::warn!(%id, %error, "input: skipping malformed content item");
            InputEntry::Malformed {
                id,
                error: format!("invalid content item: {error}"),
            }
        }
    }
}
