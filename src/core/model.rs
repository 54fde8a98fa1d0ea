//! Report model
//!
//! Every processed candidate maps to one ResultItem before rendering.

use serde::Serialize;

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    File,
    Error,
}

/// Byte range within a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }
}

/// Metadata for a result item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meta {
    /// File size in bytes after the run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// XXH3 hash of the content after the run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Whether the file was cut at the marker
    pub truncated: bool,
}

/// Error information for a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StubtrimError {
    pub code: String,
    pub message: String,
}

impl StubtrimError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// One line of the report
#[derive(Debug, Clone, Serialize)]
pub struct ResultItem {
    pub kind: Kind,

    /// File name relative to the scanned directory, '/' separated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Discarded span `[marker_offset, original_len)`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<ByteRange>,

    pub meta: Meta,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<StubtrimError>,
}

impl ResultItem {
    /// Create a new file result
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            kind: Kind::File,
            path: Some(path.into()),
            range: None,
            meta: Meta::default(),
            errors: Vec::new(),
        }
    }

    /// Create a new error result
    pub fn error(error: StubtrimError) -> Self {
        Self {
            kind: Kind::Error,
            path: None,
            range: None,
            meta: Meta::default(),
            errors: vec![error],
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_range(mut self, range: ByteRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[allow(dead_code)]
    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    /// Sort items by path for stable output
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| match (&a.path, &b.path) {
            (Some(pa), Some(pb)) => pa.cmp(pb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_item_file() {
        let item = ResultItem::file("foo_grpc.pb.go");
        assert_eq!(item.kind, Kind::File);
        assert_eq!(item.path, Some("foo_grpc.pb.go".to_string()));
        assert!(item.range.is_none());
    }

    #[test]
    fn test_result_item_error() {
        let item = ResultItem::error(StubtrimError::new("IO_ERROR", "denied"))
            .with_path("x_grpc.pb.go");
        assert_eq!(item.kind, Kind::Error);
        assert_eq!(item.errors.len(), 1);
        assert_eq!(item.errors[0].code, "IO_ERROR");
        assert_eq!(item.path.as_deref(), Some("x_grpc.pb.go"));
    }

    #[test]
    fn test_result_set_sort() {
        let mut set = ResultSet::new();
        set.push(ResultItem::error(StubtrimError::new("E", "no path")));
        set.push(ResultItem::file("b_grpc.pb.go"));
        set.push(ResultItem::file("a_grpc.pb.go"));
        set.sort();
        assert_eq!(set.items[0].path.as_deref(), Some("a_grpc.pb.go"));
        assert_eq!(set.items[1].path.as_deref(), Some("b_grpc.pb.go"));
        assert!(set.items[2].path.is_none());
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let item = ResultItem::file("a_grpc.pb.go");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""kind":"file""#));
        assert!(!json.contains("range"));
        assert!(!json.contains("errors"));
        assert!(json.contains(r#""truncated":false"#));
    }

    #[test]
    fn test_serialize_range() {
        let item = ResultItem::file("a_grpc.pb.go").with_range(ByteRange::new(4, 34));
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["range"]["start"], 4);
        assert_eq!(value["range"]["end"], 34);
        assert_eq!(ByteRange::new(4, 34).len(), 30);
    }
}
