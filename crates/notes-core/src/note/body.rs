//! Bounded reads of a note body

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::{Note, CATEGORY_PREFIX, CREATED_PREFIX, TAGS_PREFIX};
use crate::error::{NoteError, Result};

#[derive(Debug, Default)]
struct SeenMarkers {
    category: bool,
    tags: bool,
    created: bool,
}

impl SeenMarkers {
    fn observe(&mut self, line: &[u8]) {
        if line.starts_with(CATEGORY_PREFIX.as_bytes()) {
            self.category = true;
        } else if line.starts_with(TAGS_PREFIX.as_bytes()) {
            self.tags = true;
        } else if line.starts_with(CREATED_PREFIX.as_bytes()) {
            self.created = true;
        }
    }

    fn all(&self) -> bool {
        self.category && self.tags && self.created
    }
}

impl Note {
    /// Read at most `max_bytes` of the body, starting at its first non-blank line
    pub fn read_body_n(&self, max_bytes: usize) -> Result<String> {
        let path = self.file_path();
        let file = File::open(&path)
            .map_err(|e| NoteError::io_operation("open note file", path.display(), e))?;
        read_body(BufReader::new(file), max_bytes, &self.rel_file_path())
    }
}

pub(crate) fn read_body<R: BufRead>(
    mut reader: R,
    max_bytes: usize,
    rel_path: &Path,
) -> Result<String> {
    let read_err = |e: std::io::Error| NoteError::io_operation("read note file", rel_path.display(), e);

    let mut seen = SeenMarkers::default();
    let mut line = Vec::new();
    loop {
        line.clear();
        reader.read_until(b'\n', &mut line).map_err(read_err)?;
        seen.observe(&line);
        if seen.all() {
            break;
        }
        if !line.ends_with(b"\n") {
            return Err(NoteError::io_operation(
                "read metadata of",
                rel_path.display(),
                "unexpected end of file. Some metadata may be missing",
            ));
        }
    }

    let mut buf = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).map_err(read_err)? == 0 {
            break;
        }
        if line != b"\n" {
            buf.extend_from_slice(&line);
            break;
        }
    }

    if buf.len() > max_bytes {
        buf.truncate(max_bytes);
        return Ok(into_string(buf));
    }

    let remaining = (max_bytes - buf.len()) as u64;
    reader
        .by_ref()
        .take(remaining)
        .read_to_end(&mut buf)
        .map_err(read_err)?;

    Ok(into_string(buf))
}

/// Decode bytes, dropping a multi-byte character cut off by the byte budget
fn into_string(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            let utf8_error = e.utf8_error();
            let mut bytes = e.into_bytes();
            if utf8_error.error_len().is_none() {
                bytes.truncate(utf8_error.valid_up_to());
            }
            String::from_utf8_lossy(&bytes).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const HEADER: &str =
        "Title\n=====\n- Category: blog\n- Tags: a\n- Created: 2020-01-01T00:00:00Z\n";

    fn body(content: &str, max: usize) -> Result<String> {
        read_body(content.as_bytes(), max, Path::new("blog/a.md"))
    }

    #[test]
    fn test_skips_blank_lines_after_metadata() {
        let content = format!("{HEADER}\n\n\nfirst line\nsecond line\n");
        assert_eq!(body(&content, 100).unwrap(), "first line\nsecond line\n");
    }

    #[test]
    fn test_truncates_long_first_line() {
        let content = format!("{HEADER}\nabcdefghij\nmore\n");
        assert_eq!(body(&content, 4).unwrap(), "abcd");
    }

    #[test]
    fn test_reads_remaining_budget_after_first_line() {
        let content = format!("{HEADER}\nabc\ndefgh\n");
        // "abc\n" uses 4 bytes, 3 remain
        assert_eq!(body(&content, 7).unwrap(), "abc\ndef");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(body(HEADER, 10).unwrap(), "");
        let content = format!("{HEADER}\n\n");
        assert_eq!(body(&content, 10).unwrap(), "");
    }

    #[test]
    fn test_metadata_complete_at_end_of_file() {
        let content = HEADER.trim_end_matches('\n');
        assert_eq!(body(content, 10).unwrap(), "");
    }

    #[test]
    fn test_incomplete_metadata_is_io_error() {
        let err = body("Title\n=====\n- Category: blog\n- Tags: a\n", 10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("blog/a.md"));
    }

    #[test]
    fn test_does_not_split_multibyte_characters() {
        let content = format!("{HEADER}\nあいう\n");
        // Each character is 3 bytes; 4 bytes keep only the first one.
        assert_eq!(body(&content, 4).unwrap(), "あ");
    }

    #[test]
    fn test_read_body_n_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config = crate::config::Config::new(dir.path(), None);
        let note = Note::new("blog", "a", "post", "Post", &config).unwrap();
        note.create().unwrap();

        let path = note.file_path();
        let mut content = std::fs::read_to_string(&path).unwrap();
        content.push_str("Hello body\n");
        std::fs::write(&path, content).unwrap();

        assert_eq!(note.read_body_n(5).unwrap(), "Hello");
        assert_eq!(note.read_body_n(200).unwrap(), "Hello body\n");
    }
}
