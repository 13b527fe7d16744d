use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::radical::{RADICAL_COUNT, RadicalEntry, glyph_for_index};

const BUNDLED_RADICALS: &str = include_str!("../data/radicals.json");

/// Read-only lookup table of the 214 Kangxi radicals, keyed by zero-based index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadicalCatalog {
    entries: Vec<RadicalEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read dataset file at {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse radical dataset: {source}")]
    ParseError { source: serde_json::Error },
    #[error("dataset must contain {expected} radicals but {found} were provided")]
    WrongEntryCount { expected: usize, found: usize },
    #[error("radical at position {position} is numbered {number}, expected {expected}")]
    OutOfOrder {
        position: usize,
        number: usize,
        expected: usize,
    },
}

impl PartialEq for CatalogLoadError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ReadError { path: left, .. }, Self::ReadError { path: right, .. }) => {
                left == right
            }
            (Self::ParseError { .. }, Self::ParseError { .. }) => true,
            (
                Self::WrongEntryCount {
                    expected: left_expected,
                    found: left_found,
                },
                Self::WrongEntryCount {
                    expected: right_expected,
                    found: right_found,
                },
            ) => left_expected == right_expected && left_found == right_found,
            (
                Self::OutOfOrder {
                    position: left_position,
                    number: left_number,
                    ..
                },
                Self::OutOfOrder {
                    position: right_position,
                    number: right_number,
                    ..
                },
            ) => left_position == right_position && left_number == right_number,
            _ => false,
        }
    }
}

impl Eq for CatalogLoadError {}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
struct RadicalRecord {
    number: usize,
    meaning: String,
    pinyin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
struct RadicalList {
    radicals: Vec<RadicalRecord>,
}

impl RadicalCatalog {
    /// The Kangxi dataset compiled into the crate, parsed on first use.
    pub fn builtin() -> &'static RadicalCatalog {
        static BUILTIN: OnceLock<RadicalCatalog> = OnceLock::new();

        BUILTIN.get_or_init(|| {
            RadicalCatalog::from_json(BUNDLED_RADICALS.as_bytes())
                .expect("bundled radical dataset must be valid")
        })
    }

    pub fn from_json(data: &[u8]) -> Result<Self, CatalogLoadError> {
        let parsed: RadicalList = serde_json::from_slice(data)
            .map_err(|source| CatalogLoadError::ParseError { source })?;

        Self::from_records(parsed.radicals)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| CatalogLoadError::ReadError {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_json(&data)?;
        log::debug!("loaded radical catalog from {}", path.display());
        Ok(catalog)
    }

    fn from_records(records: Vec<RadicalRecord>) -> Result<Self, CatalogLoadError> {
        if records.len() != RADICAL_COUNT {
            return Err(CatalogLoadError::WrongEntryCount {
                expected: RADICAL_COUNT,
                found: records.len(),
            });
        }

        let mut entries = Vec::with_capacity(RADICAL_COUNT);

        for (position, record) in records.into_iter().enumerate() {
            if record.number != position + 1 {
                return Err(CatalogLoadError::OutOfOrder {
                    position,
                    number: record.number,
                    expected: position + 1,
                });
            }

            entries.push(RadicalEntry {
                index: position,
                glyph: glyph_for_index(position).expect("position is within the Kangxi block"),
                meaning: record.meaning,
                pronunciation: record.pinyin,
            });
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RadicalEntry> {
        self.entries.get(index)
    }

    /// Looks up an index the caller already knows to be in range.
    ///
    /// # Panics
    /// Panics when `index >= self.len()`.
    pub fn entry(&self, index: usize) -> &RadicalEntry {
        &self.entries[index]
    }

    pub fn meaning(&self, index: usize) -> &str {
        &self.entry(index).meaning
    }

    pub fn iter(&self) -> impl Iterator<Item = &RadicalEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn records(count: usize) -> Vec<RadicalRecord> {
        (0..count)
            .map(|position| RadicalRecord {
                number: position + 1,
                meaning: format!("meaning {}", position + 1),
                pinyin: format!("pinyin {}", position + 1),
            })
            .collect()
    }

    fn write_radical_list(path: impl Into<PathBuf>, radicals: Vec<RadicalRecord>) {
        let payload = RadicalList { radicals };
        let serialized =
            serde_json::to_string(&payload).expect("radical list should serialize to JSON");
        fs::write(path.into(), serialized).expect("radical list should be written");
    }

    #[test]
    fn builtin_catalog_covers_every_radical() {
        let catalog = RadicalCatalog::builtin();

        assert_eq!(catalog.len(), RADICAL_COUNT);
        for (position, entry) in catalog.iter().enumerate() {
            assert_eq!(entry.index, position);
            assert!(!entry.meaning.is_empty());
            assert!(!entry.pronunciation.is_empty());
        }
    }

    #[test]
    fn builtin_catalog_knows_familiar_radicals() {
        let catalog = RadicalCatalog::builtin();

        let one = catalog.entry(0);
        assert_eq!(one.glyph, '\u{2F00}');
        assert_eq!(one.meaning, "one");
        assert_eq!(one.pronunciation, "yī");

        let water = catalog.entry(84);
        assert_eq!(water.meaning, "water");
        assert_eq!(water.pronunciation, "shuǐ");

        let flute = catalog.entry(213);
        assert_eq!(flute.glyph, '\u{2FD5}');
        assert_eq!(flute.meaning, "flute");
    }

    #[test]
    fn get_rejects_out_of_range_index() {
        assert!(RadicalCatalog::builtin().get(RADICAL_COUNT).is_none());
    }

    #[test]
    fn errors_on_short_dataset() {
        let payload = serde_json::to_vec(&RadicalList {
            radicals: records(3),
        })
        .expect("payload should serialize");

        let error = RadicalCatalog::from_json(&payload).expect_err("short dataset should error");
        assert_eq!(
            error,
            CatalogLoadError::WrongEntryCount {
                expected: RADICAL_COUNT,
                found: 3
            }
        );
    }

    #[test]
    fn errors_on_misnumbered_entry() {
        let mut radicals = records(RADICAL_COUNT);
        radicals.swap(10, 11);
        let payload =
            serde_json::to_vec(&RadicalList { radicals }).expect("payload should serialize");

        let error =
            RadicalCatalog::from_json(&payload).expect_err("misnumbered dataset should error");
        assert_eq!(
            error,
            CatalogLoadError::OutOfOrder {
                position: 10,
                number: 12,
                expected: 11
            }
        );
    }

    #[test]
    fn errors_on_malformed_json() {
        let error = RadicalCatalog::from_json(b"{\"radicals\": [")
            .expect_err("truncated JSON should error");

        assert!(matches!(error, CatalogLoadError::ParseError { .. }));
    }

    #[test]
    fn loads_dataset_from_file() {
        let root = tempfile::tempdir().expect("temporary directory should be created");
        let path = root.path().join("radicals.json");
        write_radical_list(&path, records(RADICAL_COUNT));

        let catalog = RadicalCatalog::from_path(&path).expect("catalog should load");

        assert_eq!(catalog.len(), RADICAL_COUNT);
        assert_eq!(catalog.meaning(41), "meaning 42");
        assert_eq!(catalog.entry(41).pronunciation, "pinyin 42");
    }

    #[test]
    fn errors_when_file_missing() {
        let root = tempfile::tempdir().expect("temporary directory should be created");
        let path = root.path().join("missing.json");

        let error = RadicalCatalog::from_path(&path).expect_err("missing file should error");
        assert_eq!(
            error,
            CatalogLoadError::ReadError {
                path: path.display().to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }
        );
    }
}
