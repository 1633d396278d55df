//! Translation corpus reader.
//!
//! Reads two-column, comma-separated files whose first line is a header.
//! Fields may be wrapped in double quotes, in which case commas are literal
//! and a doubled quote stands for one quote character. The first column holds
//! the target language and the second the source language.

use log::info;
use mergewise_core::{Result, VocabError};
use std::mem;
use std::path::Path;

/// One row of the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Source-language sentence (second column)
    pub source: String,
    /// Target-language sentence (first column)
    pub target: String,
}

/// Which text column(s) feed training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Column {
    /// Source sentences only
    #[default]
    Source,
    /// Target sentences only
    Target,
    /// Source sentences followed by target sentences, as one shared corpus
    Both,
}

impl Column {
    /// Collect the sentences of the selected column(s) in corpus order.
    pub fn select(self, translations: &[Translation]) -> Vec<String> {
        let sources = || translations.iter().map(|t| t.source.clone());
        let targets = || translations.iter().map(|t| t.target.clone());

        match self {
            Column::Source => sources().collect(),
            Column::Target => targets().collect(),
            Column::Both => sources().chain(targets()).collect(),
        }
    }
}

/// Corpus reader - loads translation pairs from disk.
pub struct CorpusReader;

impl CorpusReader {
    /// Read a corpus file.
    ///
    /// # Arguments
    /// * `path` - Path of the CSV file
    pub fn read(path: &Path) -> Result<Vec<Translation>> {
        let content = std::fs::read_to_string(path).map_err(|err| VocabError::Io {
            path: path.to_path_buf(),
            err,
        })?;

        let translations = Self::parse(&content)?;
        info!(
            "read {} translations from {}",
            translations.len(),
            path.display()
        );
        Ok(translations)
    }

    /// Parse corpus text already in memory.
    ///
    /// The first line is skipped as a header. Blank lines at the end of the
    /// input are ignored; a blank row followed by more data is a parse error.
    pub fn parse(content: &str) -> Result<Vec<Translation>> {
        let lines: Vec<&str> = content.lines().collect();
        let end = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(0, |last| last + 1);

        let mut translations = Vec::new();

        for (line_num, line) in lines[..end].iter().enumerate().skip(1) {
            let fields = Self::split_record(line);
            let [target, source]: [String; 2] =
                fields
                    .try_into()
                    .map_err(|fields: Vec<String>| VocabError::Parse {
                        line: line_num + 1,
                        fields: fields.len(),
                    })?;

            translations.push(Translation { source, target });
        }

        Ok(translations)
    }

    /// Split one record into its fields.
    pub fn split_record(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes && chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => fields.push(mem::take(&mut field)),
                _ => field.push(c),
            }
        }

        fields.push(field);
        fields
    }
}
