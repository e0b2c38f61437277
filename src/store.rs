use crate::pagination::{Page, PageRequest};
use crate::quote::Quote;
use crate::FolioResult;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// An in-memory quote collection, loaded wholesale from a JSON fixture.
///
/// The store owns the records; pagination borrows them read-only and
/// never reorders or mutates them.
#[derive(Debug, Clone, Default)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    pub fn new(quotes: Vec<Quote>) -> QuoteStore {
        QuoteStore { quotes }
    }

    /// Reads an entire fixture file into memory.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<QuoteStore> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl Read) -> FolioResult<QuoteStore> {
        let quotes = serde_json::from_reader(reader)?;
        Ok(QuoteStore { quotes })
    }

    pub fn from_json(json: &str) -> FolioResult<QuoteStore> {
        let quotes = serde_json::from_str(json)?;
        Ok(QuoteStore { quotes })
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// One page of the collection along with its pagination metadata.
    pub fn page(&self, request: &PageRequest) -> Page<Quote> {
        Page::of(&self.quotes, request)
    }
}
