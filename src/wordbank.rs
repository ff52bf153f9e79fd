use crate::error::WordbankError;
use crate::word::Word;
use log::{debug, info};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Common five letter words, most frequent first.
pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.csv");

const WORD_COLUMN: &str = "word";

/// Parse a word bank, keeping its order.
///
/// Accepts either a CSV document whose header has a `word` column, or a plain
/// list with one word per line. Entries that aren't five letters are skipped,
/// as are repeats of a word already seen.
pub fn load_wordbank_from_str(data: &str) -> Result<Vec<Word>, WordbankError> {
    let is_csv = data
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .is_some_and(|header| header.contains(','));

    let entries = if is_csv {
        read_csv_column(data)?
    } else {
        data.lines().map(|line| line.trim().to_string()).collect()
    };

    let mut seen = HashSet::new();
    let mut words = Vec::with_capacity(entries.len());
    for entry in entries.iter().filter(|entry| !entry.is_empty()) {
        match Word::parse(entry) {
            Ok(word) if seen.insert(word) => words.push(word),
            Ok(word) => debug!("Skipping duplicate word '{word}'"),
            Err(e) => debug!("Skipping word bank entry '{entry}': {e}"),
        }
    }

    if words.is_empty() {
        return Err(WordbankError::Empty);
    }
    info!("Loaded {} words", words.len());
    Ok(words)
}

fn read_csv_column(data: &str) -> Result<Vec<String>, WordbankError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let column = reader
        .headers()?
        .iter()
        .position(|name| name.eq_ignore_ascii_case(WORD_COLUMN))
        .ok_or(WordbankError::MissingWordColumn)?;

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(field) = record.get(column) {
            entries.push(field.to_string());
        }
    }
    Ok(entries)
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordbankError> {
    let path = path.as_ref();
    info!("Reading word bank from {}", path.display());
    let data = fs::read_to_string(path)?;
    load_wordbank_from_str(&data)
}
