use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One quotation from the collection.
///
/// The serialized form uses `quote` for the text field; line breaks
/// inside the text are carried as literal `<br>` markers, as published
/// in the source collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "quote")]
    pub text: String,
    pub author: String,
    pub date: NaiveDate,
    pub explanation: String,
}

impl Quote {
    /// The quoted text split on its embedded `<br>` markers.
    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        self.text.split("<br>")
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.text_lines() {
            writeln!(f, "{line}")?;
        }
        write!(f, "- {}", self.author)
    }
}
