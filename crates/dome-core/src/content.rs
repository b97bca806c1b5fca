//! Content items shown on the dome tiles.

use serde::Deserialize;

/// One photo with its alt text and optional caption.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentItem {
    pub id: Option<u32>,
    pub src: String,
    pub alt: String,
    pub note: Option<String>,
}

impl ContentItem {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = (!note.is_empty()).then_some(note);
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn has_note(&self) -> bool {
        self.note.is_some()
    }
}

/// Pool entry as written in configuration: a bare image path or a full record.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum PoolEntry {
    Path(String),
    Record {
        #[serde(default)]
        id: Option<u32>,
        #[serde(default, alias = "image")]
        src: Option<String>,
        #[serde(default)]
        alt: Option<String>,
        #[serde(default, alias = "message")]
        note: Option<String>,
    },
}

impl From<PoolEntry> for ContentItem {
    fn from(entry: PoolEntry) -> Self {
        match entry {
            PoolEntry::Path(src) => ContentItem::new(src),
            PoolEntry::Record { id, src, alt, note } => ContentItem {
                id,
                src: src.unwrap_or_default(),
                alt: alt.unwrap_or_default(),
                note: note.filter(|n| !n.is_empty()),
            },
        }
    }
}

impl<'de> Deserialize<'de> for ContentItem {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        PoolEntry::deserialize(deserializer).map(Into::into)
    }
}
