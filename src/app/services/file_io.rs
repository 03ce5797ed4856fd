use std::borrow::Cow;
use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, WINDOWS_1252};

use crate::app::infrastructure::error::{AppError, Result};

/// Encoding used when the caller doesn't ask for one.
pub use encoding_rs::UTF_8 as DEFAULT_ENCODING;

/// Encodings offered when a file fails to decode as UTF-8.
pub const COMMON_ENCODINGS: &[&str] = &[
    "utf-8",
    "gbk",
    "gb2312",
    "big5",
    "shift_jis",
    "utf-16",
    "utf-16-le",
    "utf-16-be",
    "iso-8859-1",
];

/// Resolve an encoding label (as shown in the retry prompt) to an encoding.
///
/// Accepts the labels in [`COMMON_ENCODINGS`] plus anything `encoding_rs`
/// knows as a WHATWG label.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    let normalized = label.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "utf-16" | "utf-16-le" | "utf16" => Ok(UTF_16LE),
        "utf-16-be" | "utf16be" => Ok(UTF_16BE),
        // WHATWG treats Latin-1 as windows-1252: 0x80-0x9F decode to
        // printable characters instead of C1 controls
        "iso-8859-1" | "latin-1" | "latin1" => Ok(WINDOWS_1252),
        other => Encoding::for_label(other.as_bytes())
            .ok_or_else(|| AppError::UnknownEncoding(label.to_string())),
    }
}

/// Replace `\r\n` and bare `\r` with `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Read a whole file and decode it strictly under `encoding`.
/// Line endings come back normalized to `\n`.
pub fn read_text(path: &Path, encoding: &'static Encoding) -> Result<String> {
    let bytes = fs::read(path)?;
    let text = decode(&bytes, encoding).ok_or_else(|| AppError::Decode {
        path: path.to_path_buf(),
        encoding: encoding.name(),
    })?;
    if text.contains('\r') {
        return Ok(normalize_newlines(&text).into_owned());
    }
    Ok(text)
}

/// Write `text` to `path` under `encoding`, normalizing newlines first.
/// Missing parent directories are created.
pub fn write_text(path: &Path, text: &str, encoding: &'static Encoding) -> Result<()> {
    let content = normalize_newlines(text);
    let bytes = encode(&content, encoding)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, bytes)?;
    Ok(())
}

/// A leading BOM matching `encoding` is dropped, not kept as U+FEFF, and
/// `write_text` never writes one back.
fn decode(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        // "utf-16" without an explicit byte order follows the BOM
        Some((bom_encoding, bom_len))
            if bom_encoding == encoding || (is_utf16(encoding) && is_utf16(bom_encoding)) =>
        {
            (bom_encoding, &bytes[bom_len..])
        }
        _ => (encoding, bytes),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(Cow::into_owned)
}

fn encode<'a>(text: &'a str, encoding: &'static Encoding) -> Result<Cow<'a, [u8]>> {
    // encoding_rs only decodes UTF-16; its encoder falls back to UTF-8.
    if encoding == UTF_16LE {
        return Ok(Cow::Owned(
            text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        ));
    }
    if encoding == UTF_16BE {
        return Ok(Cow::Owned(
            text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
        ));
    }

    let (bytes, _, had_unmappable) = encoding.encode(text);
    if had_unmappable {
        return Err(AppError::Encode {
            encoding: encoding.name(),
        });
    }
    Ok(bytes)
}

fn is_utf16(encoding: &'static Encoding) -> bool {
    encoding == UTF_16LE || encoding == UTF_16BE
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{GBK, SHIFT_JIS, UTF_8};
    use tempfile::tempdir;

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalize_newlines("\r\r\n"), "\n\n");
        assert!(matches!(normalize_newlines("plain\n"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_write_then_read_normalizes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        write_text(&path, "a\r\nb\rc\n", DEFAULT_ENCODING).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"a\nb\nc\n");
        assert_eq!(read_text(&path, DEFAULT_ENCODING).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_read_normalizes_line_endings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mixed.txt");
        fs::write(&path, b"a\r\nb\rc\n").unwrap();
        assert_eq!(read_text(&path, DEFAULT_ENCODING).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_utf8_bom_is_dropped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bom.txt");
        fs::write(&path, b"\xEF\xBB\xBFhi").unwrap();
        assert_eq!(read_text(&path, DEFAULT_ENCODING).unwrap(), "hi");

        write_text(&path, "hi", DEFAULT_ENCODING).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"hi");
    }

    #[test]
    fn test_latin1_label_decodes_as_windows_1252() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin.txt");
        fs::write(&path, [0x80, 0x93, 0xE9]).unwrap();
        let latin1 = encoding_for_label("iso-8859-1").unwrap();
        assert_eq!(read_text(&path, latin1).unwrap(), "\u{20AC}\u{201C}\u{E9}");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("note.txt");
        write_text(&path, "hello", DEFAULT_ENCODING).unwrap();
        assert_eq!(read_text(&path, DEFAULT_ENCODING).unwrap(), "hello");
    }

    #[test]
    fn test_gbk_fails_as_utf8_and_reads_as_gbk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gbk.txt");
        // "中文" in GBK
        fs::write(&path, [0xD6, 0xD0, 0xCE, 0xC4]).unwrap();

        let err = read_text(&path, DEFAULT_ENCODING).unwrap_err();
        assert!(matches!(err, AppError::Decode { encoding: "UTF-8", .. }));

        assert_eq!(read_text(&path, GBK).unwrap(), "中文");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = read_text(&dir.path().join("nope.txt"), DEFAULT_ENCODING).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_utf16_bom_selects_byte_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("be.txt");
        fs::write(&path, [0xFE, 0xFF, 0x00, 0x68, 0x00, 0x69]).unwrap();

        let utf16 = encoding_for_label("utf-16").unwrap();
        assert_eq!(read_text(&path, utf16).unwrap(), "hi");
    }

    #[test]
    fn test_utf16_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("le.txt");
        write_text(&path, "héllo\n", UTF_16LE).unwrap();
        assert_eq!(fs::read(&path).unwrap().len(), 12);
        assert_eq!(read_text(&path, UTF_16LE).unwrap(), "héllo\n");
    }

    #[test]
    fn test_unmappable_character_is_encode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sjis.txt");
        let err = write_text(&path, "crab 🦀", SHIFT_JIS).unwrap_err();
        assert!(matches!(err, AppError::Encode { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_encoding_labels() {
        for label in COMMON_ENCODINGS {
            assert!(encoding_for_label(label).is_ok(), "label {label} should resolve");
        }
        assert_eq!(encoding_for_label("GB2312").unwrap(), GBK);
        assert_eq!(encoding_for_label(" UTF-8 ").unwrap(), UTF_8);
        assert!(matches!(
            encoding_for_label("klingon"),
            Err(AppError::UnknownEncoding(_))
        ));
    }
}
