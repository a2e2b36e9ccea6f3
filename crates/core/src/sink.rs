// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Append only text sinks for the game log and final scores.
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// An append only text sink.
pub trait Sink {
    /// Appends `text` followed by a newline.
    fn append(&mut self, text: &str) -> io::Result<()>;
}

impl<T: Sink + ?Sized> Sink for &mut T {
    fn append(&mut self, text: &str) -> io::Result<()> {
        (**self).append(text)
    }
}

/// A sink that writes to a text file, opening it for each write.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    truncate: bool,
}

impl FileSink {
    /// A sink that truncates the file on the first write and appends after.
    pub fn overwrite<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            truncate: true,
        }
    }

    /// A sink that always appends to the file, keeping previous content.
    pub fn appending<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            truncate: false,
        }
    }
}

impl Sink for FileSink {
    fn append(&mut self, text: &str) -> io::Result<()> {
        let mut options = OpenOptions::new();
        if self.truncate {
            options.write(true).create(true).truncate(true);
        } else {
            options.append(true).create(true);
        }

        let mut file = options.open(&self.path)?;
        writeln!(file, "{text}")?;

        // Only the first successful write truncates.
        self.truncate = false;

        Ok(())
    }
}

/// An in memory sink.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    entries: Vec<String>,
}

impl MemorySink {
    /// The appended entries in order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The text as it would appear in a file.
    pub fn contents(&self) -> String {
        self.entries.iter().map(|e| format!("{e}\n")).collect()
    }
}

impl Sink for MemorySink {
    fn append(&mut self, text: &str) -> io::Result<()> {
        self.entries.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // A path in the temp directory unique to this process and test.
    fn temp_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("numbergame-{}-{name}", std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn memory_sink() {
        let mut sink = MemorySink::default();
        sink.append("one").unwrap();
        sink.append("two\n").unwrap();
        assert_eq!(sink.entries(), ["one", "two\n"]);
        assert_eq!(sink.contents(), "one\ntwo\n\n");
    }

    #[test]
    fn overwrite_truncates_once() {
        let path = temp_path("overwrite.txt");
        fs::write(&path, "previous session\n").unwrap();

        let mut sink = FileSink::overwrite(&path);
        sink.append("first").unwrap();
        sink.append("second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn appending_keeps_content() {
        let path = temp_path("appending.txt");
        fs::write(&path, "previous session\n").unwrap();

        let mut sink = FileSink::appending(&path);
        sink.append("next").unwrap();

        // A second sink on the same file keeps appending.
        let mut sink = FileSink::appending(&path);
        sink.append("last").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "previous session\nnext\nlast\n"
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn write_failure() {
        // A directory cannot be opened as a file.
        let mut sink = FileSink::appending(std::env::temp_dir());
        assert!(sink.append("lost").is_err());
    }
}
