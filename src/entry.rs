//! The bibliographic entry model consumed by the citation formatter.
//!
//! Entries are produced by an external bibliography parser; this module only
//! defines the shape they arrive in: an entry type tag plus a field map with
//! ASCII-case-insensitive keys. Multi-person author and editor fields hold a
//! single string with the people joined by the literal separator `" and "`.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use unicase::{Ascii, UniCase};

/// The entry types with a defined reference format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Article,
    InProceedings,
    InBook,
    PhdThesis,
    /// Any entry type without a defined reference format.
    Other,
}

/// The field map of an entry, keyed case-insensitively by field name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Fields(pub BTreeMap<Ascii<String>, String>);

/// A single bibliographic entry: a type tag and its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The raw entry type tag, e.g. `article` in `@article{...`.
    pub entry_type: String,
    /// Field values keyed by field name.
    pub fields: Fields,
}

impl Entry {
    /// Create an empty entry of the given type.
    pub fn new(entry_type: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into(),
            fields: Fields::default(),
        }
    }

    /// Insert a field, returning the entry for chained construction.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.0.insert(Ascii::new(key.into()), value.into());
        self
    }

    /// Look up a field case-insensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.0.get(&Ascii::new(key.to_owned())).map(String::as_str)
    }

    /// Classify the entry type tag, comparing case-insensitively.
    ///
    /// # Example
    /// ```
    /// use bibcite::entry::{Entry, EntryKind};
    ///
    /// assert_eq!(Entry::new("ARTICLE").kind(), EntryKind::Article);
    /// assert_eq!(Entry::new("misc").kind(), EntryKind::Other);
    /// ```
    pub fn kind(&self) -> EntryKind {
        let tag = UniCase::unicode(self.entry_type.as_str());
        if tag == UniCase::ascii("article") {
            EntryKind::Article
        } else if tag == UniCase::ascii("inproceedings") {
            EntryKind::InProceedings
        } else if tag == UniCase::ascii("inbook") {
            EntryKind::InBook
        } else if tag == UniCase::ascii("phdthesis") {
            EntryKind::PhdThesis
        } else {
            EntryKind::Other
        }
    }
}

struct FieldsVisitor;

impl<'de> Visitor<'de> for FieldsVisitor {
    type Value = Fields;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("fields map")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut map = BTreeMap::default();

        while let Some((key, value)) = access.next_entry::<String, String>()? {
            map.insert(Ascii::new(key), value);
        }

        Ok(Fields(map))
    }
}

impl<'de> Deserialize<'de> for Fields {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FieldsVisitor)
    }
}

impl Serialize for Fields {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.0.iter().map(|(k, v)| (AsRef::<str>::as_ref(k), v)))
    }
}
