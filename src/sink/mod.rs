/// Output router: where the decoded response body ends up.
pub mod table;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::client::ClientError;

/// The one sink a run writes to, resolved from `-o/--output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Pretty JSON on standard output.
    Stdout,
    /// Pretty JSON, file created or truncated.
    JsonFile(PathBuf),
    /// Header plus one row per object, file created or truncated.
    CsvFile(PathBuf),
}

impl OutputTarget {
    /// Pick the sink from the output path's extension (case-sensitive).
    ///
    /// # Errors
    ///
    /// `UnsupportedOutputFormat` for anything but `.json` or `.csv`.
    pub fn from_path(path: Option<&Path>) -> Result<Self, ClientError> {
        let Some(path) = path else {
            return Ok(Self::Stdout);
        };
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::JsonFile(path.to_owned())),
            Some("csv") => Ok(Self::CsvFile(path.to_owned())),
            _ => Err(ClientError::UnsupportedOutputFormat {
                path: path.to_owned(),
            }),
        }
    }

    /// Write `body` to this sink.
    ///
    /// CSV shape is checked before the file is created, so a rejected body
    /// leaves no file behind.
    ///
    /// # Errors
    ///
    /// `UnsupportedCsvShape` for a CSV target with unsuitable data, `Io` or
    /// `Csv` when writing fails.
    pub fn emit(&self, body: &Value) -> Result<(), ClientError> {
        match self {
            Self::Stdout => {
                let stdout = io::stdout();
                write_json(&mut stdout.lock(), body).map_err(|source| ClientError::Io {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
            }
            Self::JsonFile(path) => {
                let mut out = create(path)?;
                write_json(&mut out, body)
                    .and_then(|()| out.flush())
                    .map_err(|source| ClientError::Io {
                        path: path.clone(),
                        source,
                    })
            }
            Self::CsvFile(path) => {
                let rows = table::Table::from_value(body)?;
                let out = create(path)?;
                rows.write(out)
            }
        }
    }
}

/// JSON with 2-space indentation and a trailing newline.
///
/// # Errors
///
/// Propagates any write failure.
pub fn write_json<W: Write>(out: &mut W, body: &Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, body)?;
    writeln!(out)
}

fn create(path: &Path) -> Result<BufWriter<File>, ClientError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| ClientError::Io {
            path: path.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::CsvShape;

    #[test]
    fn test_target_from_extension() {
        assert_eq!(OutputTarget::from_path(None).unwrap(), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_path(Some(Path::new("out.json"))).unwrap(),
            OutputTarget::JsonFile(PathBuf::from("out.json"))
        );
        assert_eq!(
            OutputTarget::from_path(Some(Path::new("dir/out.csv"))).unwrap(),
            OutputTarget::CsvFile(PathBuf::from("dir/out.csv"))
        );
    }

    #[test]
    fn test_unsupported_extensions() {
        for p in ["foo.txt", "foo", "foo.JSON", "foo.csv.bak"] {
            let result = OutputTarget::from_path(Some(Path::new(p)));
            assert!(
                matches!(result, Err(ClientError::UnsupportedOutputFormat { .. })),
                "{p}"
            );
        }
    }

    #[test]
    fn test_json_is_two_space_indented() {
        let mut buf = Vec::new();
        write_json(&mut buf, &json!({"id": 1, "tags": ["a"]})).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\n  \"id\": 1,\n  \"tags\": [\n    \"a\"\n  ]\n}\n"
        );
    }

    #[test]
    fn test_json_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "stale contents that are longer than the new ones").unwrap();

        let body = json!([{"id": 1, "title": "a"}, null, 2.5, "s", {"nested": {"k": [true]}}]);
        OutputTarget::JsonFile(path.clone()).emit(&body).unwrap();

        let back: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, body);
    }

    #[test]
    fn test_csv_file_from_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let body = json!([{"id": 1, "title": "a"}, {"id": 2, "title": "b"}]);
        OutputTarget::CsvFile(path.clone()).emit(&body).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "id,title\n1,a\n2,b\n");
    }

    #[test]
    fn test_csv_rejection_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let result = OutputTarget::CsvFile(path.clone()).emit(&json!({"id": 1}));
        assert!(matches!(
            result,
            Err(ClientError::UnsupportedCsvShape(CsvShape::NotAList))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let result = OutputTarget::JsonFile(path).emit(&json!(1));
        assert!(matches!(result, Err(ClientError::Io { .. })));
    }
}
