//! Files served by the data server's download phase.

use crate::messages::bb::{FileListEntry, MAX_FILE_LIST_ENTRIES};
use crate::network::crc32;
use anyhow::{Context, Result};
use bytes::Bytes;
use std::path::Path;

const MAX_FILENAME_LEN: usize = 64;

/// Offset and size of a file appended at `offset`, if both and their end
/// fit the u32 fields of a file list entry.
fn entry_span(offset: usize, size: usize) -> Option<(u32, u32)> {
    let offset = u32::try_from(offset).ok()?;
    let size = u32::try_from(size).ok()?;
    offset.checked_add(size)?;
    Some((offset, size))
}

/// A read-only file list plus the concatenation of all file contents.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    entries: Vec<FileListEntry>,
    data: Bytes,
}

impl FileStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a store from `(filename, contents)` pairs, in the given order.
    /// Empty files, names over 64 bytes, anything that would push offsets
    /// past 4 GiB and entries beyond what one FileList frame holds are
    /// skipped.
    pub fn from_files<I>(files: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<u8>)>,
    {
        let mut entries = Vec::new();
        let mut data = Vec::new();
        for (filename, contents) in files {
            if contents.is_empty() {
                continue;
            }
            if filename.len() > MAX_FILENAME_LEN {
                tracing::warn!("[data] [file_skipped] name={} reason=name_too_long", filename);
                continue;
            }
            if entries.len() >= MAX_FILE_LIST_ENTRIES {
                tracing::warn!("[data] [file_skipped] name={} reason=too_many_files", filename);
                continue;
            }
            let Some((offset, size)) = entry_span(data.len(), contents.len()) else {
                tracing::warn!("[data] [file_skipped] name={} reason=too_large", filename);
                continue;
            };
            entries.push(FileListEntry {
                size,
                checksum: crc32(&contents),
                offset,
                filename,
            });
            data.extend_from_slice(&contents);
        }
        Self {
            entries,
            data: data.into(),
        }
    }

    /// Loads every regular file directly inside `dir`, sorted by name.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut files = Vec::new();
        let listing = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to list files dir: {}", dir.display()))?;
        for entry in listing {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let contents = std::fs::read(entry.path())
                .with_context(|| format!("Failed to read {}", entry.path().display()))?;
            files.push((name, contents));
        }
        files.sort_by(|a, b| a.0.cmp(&b.0));

        let store = Self::from_files(files);
        tracing::info!(
            "[data] [files_loaded] dir={} count={} bytes={}",
            dir.display(),
            store.entries.len(),
            store.data.len()
        );
        Ok(store)
    }

    pub fn entries(&self) -> &[FileListEntry] {
        &self.entries
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_cumulative() {
        let store = FileStore::from_files([
            ("a.bin".to_string(), vec![1u8; 10]),
            ("empty.bin".to_string(), Vec::new()),
            ("b.bin".to_string(), vec![2u8; 5]),
        ]);
        let entries = store.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].offset, 0);
        assert_eq!(entries[1].offset, 10);
        assert_eq!(entries[1].size, 5);
        assert_eq!(entries[1].checksum, crc32(&[2u8; 5]));
        assert_eq!(store.data().len(), 15);
    }

    #[test]
    fn test_long_names_skipped() {
        let store = FileStore::from_files([("x".repeat(65), vec![1u8])]);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_entry_span_rejects_u32_overflow() {
        assert_eq!(entry_span(10, 5), Some((10, 5)));
        assert_eq!(entry_span(0, u32::MAX as usize), Some((0, u32::MAX)));
        assert_eq!(entry_span(0, u32::MAX as usize + 1), None);
        assert_eq!(entry_span(u32::MAX as usize + 1, 1), None);
        assert_eq!(entry_span(u32::MAX as usize - 1, 2), None);
    }

    #[test]
    fn test_file_list_capped_to_one_frame() {
        use crate::messages::{BbMessage, Message};

        let files = (0..900).map(|i| (format!("f{:03}.bin", i), vec![i as u8 | 1]));
        let store = FileStore::from_files(files);
        assert_eq!(store.entries().len(), MAX_FILE_LIST_ENTRIES);
        assert_eq!(store.data().len(), MAX_FILE_LIST_ENTRIES);
        assert_eq!(store.entries().last().unwrap().filename, "f861.bin");

        let buf = BbMessage::FileList(store.entries().to_vec()).encode();
        let header = BbMessage::read_header(&buf).unwrap();
        assert_eq!(header.size, buf.len());
        assert_eq!(header.flags as usize, MAX_FILE_LIST_ENTRIES);
    }

    #[test]
    fn test_load_dir_sorted() {
        let dir = std::env::temp_dir().join(format!("psoserv-files-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("sub")).unwrap();
        std::fs::write(dir.join("b.dat"), b"bbbb").unwrap();
        std::fs::write(dir.join("a.dat"), b"aa").unwrap();

        let store = FileStore::load_dir(&dir).unwrap();
        let names: Vec<&str> = store.entries().iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, ["a.dat", "b.dat"]);
        assert_eq!(&store.data()[..], b"aabbbb");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_dir_fails() {
        assert!(FileStore::load_dir("/nonexistent/psoserv/files").is_err());
    }
}
