//! Reading a delimited file into trimmed, header-aligned rows.

use std::borrow::Cow;
use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::Encoding;
use tracing::{debug, warn};

use crate::error::{AuditError, Result};

/// One data row, with a trimmed value for every declared header, in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    values: Vec<String>,
}

impl Row {
    /// Value in column `index`; `""` past the end.
    pub fn value(&self, index: usize) -> &str {
        self.values.get(index).map_or("", String::as_str)
    }

    /// The ordered cell values, used as the duplicate-detection signature.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// A parsed CSV file: trimmed headers plus every data row.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// Read and parse `path`, decoding it with `encoding`.
///
/// # Errors
///
/// Fails when the path is missing or not a regular file, when the file
/// cannot be read, when it has no usable header row, or when a record is
/// malformed.
pub fn read_csv_table(path: &Path, delimiter: u8, encoding: &'static Encoding) -> Result<CsvTable> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AuditError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AuditError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if !metadata.is_file() {
        return Err(AuditError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| AuditError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = decode(&bytes, encoding, path);
    parse_csv_table(&text, delimiter, path)
}

/// Decode `bytes`, honouring a leading BOM over the requested encoding.
fn decode<'a>(bytes: &'a [u8], encoding: &'static Encoding, path: &Path) -> Cow<'a, str> {
    let (text, used, had_errors) = encoding.decode(bytes);
    if used != encoding {
        debug!(
            path = %path.display(),
            requested = encoding.name(),
            detected = used.name(),
            "byte order mark overrides requested encoding"
        );
    }
    if had_errors {
        warn!(
            path = %path.display(),
            encoding = used.name(),
            "malformed byte sequences replaced while decoding"
        );
    }
    text
}

/// Parse already-decoded CSV text.
///
/// Blank lines are skipped, short rows are padded with empty values, and
/// cells beyond the last header are ignored.
///
/// # Errors
///
/// Fails when there is no header row, when every header name is blank, or
/// when a record cannot be parsed.
pub fn parse_csv_table(text: &str, delimiter: u8, path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let raw_headers = reader.headers().map_err(|e| AuditError::CsvParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    if raw_headers.is_empty() {
        return Err(AuditError::MissingHeader {
            path: path.to_path_buf(),
        });
    }
    let headers: Vec<String> = raw_headers.iter().map(normalize_header).collect();
    if headers.iter().all(String::is_empty) {
        return Err(AuditError::EmptyHeader {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AuditError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        let values = (0..headers.len())
            .map(|index| record.get(index).unwrap_or("").trim().to_string())
            .collect();
        rows.push(Row { values });
    }

    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "csv parsed"
    );
    Ok(CsvTable { headers, rows })
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<CsvTable> {
        parse_csv_table(text, b',', Path::new("test.csv"))
    }

    #[test]
    fn short_rows_are_padded_and_long_rows_truncated() {
        let table = parse("a,b,c\n1\n1,2,3,4\n").unwrap();
        assert_eq!(table.headers, vec!["a", "b", "c"]);
        assert_eq!(table.rows[0].values(), ["1", "", ""]);
        assert_eq!(table.rows[1].values(), ["1", "2", "3"]);
    }

    #[test]
    fn cells_and_headers_are_trimmed() {
        let table = parse(" id , name \n 7 ,  Ann  \n").unwrap();
        assert_eq!(table.headers, vec!["id", "name"]);
        assert_eq!(table.rows[0].values(), ["7", "Ann"]);
    }

    #[test]
    fn quoted_fields_keep_embedded_delimiters() {
        let table = parse("name,city\n\"Doe, Jane\",Oslo\n").unwrap();
        assert_eq!(table.rows[0].value(0), "Doe, Jane");
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(parse(""), Err(AuditError::MissingHeader { .. })));
    }

    #[test]
    fn blank_header_names_are_rejected() {
        assert!(matches!(parse(" , \n1,2\n"), Err(AuditError::EmptyHeader { .. })));
    }

    #[test]
    fn header_only_file_has_no_rows() {
        let table = parse("a,b\n").unwrap();
        assert!(table.rows.is_empty());
    }

    #[test]
    fn alternative_delimiter() {
        let table = parse_csv_table("a;b\n1;2\n", b';', Path::new("semi.csv")).unwrap();
        assert_eq!(table.rows[0].values(), ["1", "2"]);
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let bytes = b"\xEF\xBB\xBFid,name\n1,x\n";
        let text = decode(bytes, encoding_rs::UTF_8, Path::new("bom.csv"));
        let table = parse(&text).unwrap();
        assert_eq!(table.headers[0], "id");
    }

    #[test]
    fn latin1_is_decoded() {
        let bytes = b"name\ncaf\xE9\n";
        let text = decode(bytes, encoding_rs::WINDOWS_1252, Path::new("latin.csv"));
        let table = parse(&text).unwrap();
        assert_eq!(table.rows[0].value(0), "café");
    }
}
