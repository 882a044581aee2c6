//! Language list decoding and display.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::ui::Style;

/// Source language sentinel asking the mirror to detect the language.
pub const AUTO_DETECT: &str = "auto";

const COLUMN_WIDTH: usize = 25;

/// One entry of the `source_languages` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Id")]
    pub id: String,
}

/// Folds entries into a name → code map. Later duplicates win.
pub fn languages_by_name(entries: Vec<LanguageEntry>) -> BTreeMap<String, String> {
    entries
        .into_iter()
        .map(|entry| (entry.name, entry.id))
        .collect()
}

/// Renders the language table printed by `--list-languages`.
pub fn format_languages(languages: &BTreeMap<String, String>) -> String {
    let mut out = Style::header(format!(
        "{:<width$} {:<width$}",
        "Name",
        "Code",
        width = COLUMN_WIDTH
    ));
    out.push('\n');

    for (name, code) in languages {
        out.push_str(&format!(
            "{:<width$} {}\n",
            name,
            Style::code(format!("{code:<width$}", width = COLUMN_WIDTH)),
            width = COLUMN_WIDTH
        ));
    }

    out
}

/// Prints the language table to stdout.
pub fn print_languages(languages: &BTreeMap<String, String>) {
    print!("{}", format_languages(languages));
}
