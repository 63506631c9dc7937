use serde::Serialize;
use std::fmt;

/// One CSV data row as it appeared in the file, kept for audit output.
///
/// `line` is the 1-based physical line reported by the CSV reader, so the
/// first data row after the header is usually line 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawRecord {
    pub line: u64,
    pub fields: Vec<(String, String)>,
}

impl RawRecord {
    /// Pair header names with row values. Short rows leave trailing headers
    /// with an empty value, extra values beyond the header are dropped.
    pub fn from_parts(line: u64, headers: &csv::StringRecord, row: &csv::StringRecord) -> Self {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.to_string(), row.get(i).unwrap_or_default().to_string()))
            .collect();

        Self { line, fields }
    }

    /// Raw (untrimmed) value of a named column. The last column wins when
    /// a header name repeats.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(h, _)| h == column)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for RawRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {{", self.line)?;
        for (i, (h, v)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{h:?}: {v:?}")?;
        }
        f.write_str("}")
    }
}
