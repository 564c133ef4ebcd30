// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::Error;
use crate::append::Append;
use crate::layout::Layout;
use crate::layout::TextLayout;
use crate::record::Record;

/// Compose the dated logical filename for `name`: `<name>-<YYYY-MM-DD>`.
///
/// The date is today's UTC date, computed at call time and never cached; a
/// sink built before midnight and one built after midnight target different
/// files.
pub fn dated_filename(name: &str) -> String {
    let today = Timestamp::now().to_zoned(TimeZone::UTC).date();
    format!("{name}-{today}")
}

/// A builder to configure and create a [`FileSink`].
#[derive(Debug)]
pub struct FileSinkBuilder {
    filename: String,
    dir: PathBuf,
    layout: Arc<dyn Layout>,
}

impl FileSinkBuilder {
    /// Create a new builder for a sink writing to `filename`.
    ///
    /// A `.log` suffix is appended unless the name already carries one.
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        let mut filename = filename.into();
        if !filename.ends_with(".log") {
            filename.push_str(".log");
        }
        Self {
            filename,
            dir: PathBuf::from("."),
            layout: Arc::new(TextLayout::default()),
        }
    }

    /// Set the directory the log file lives in.
    ///
    /// Default to the working directory. The directory is created if missing.
    #[must_use]
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Sets the layout for the sink.
    ///
    /// Default to [`TextLayout`].
    pub fn layout(mut self, layout: impl Into<Arc<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Build the [`FileSink`], creating the file if absent and appending to
    /// it if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the log directory or file cannot be created.
    pub fn build(self) -> Result<FileSink, Error> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(self.filename);
        let writer = OpenOptions::new().append(true).create(true).open(path)?;
        Ok(FileSink {
            layout: self.layout,
            writer: Mutex::new(writer),
        })
    }
}

/// A sink that writes log records to a single file.
///
/// The sink owns the lifetime of its file handle: the file is opened when the
/// sink is built, every write is flushed, and the handle is flushed once more
/// and closed when the sink is dropped.
#[derive(Debug)]
pub struct FileSink {
    layout: Arc<dyn Layout>,
    writer: Mutex<File>,
}

impl FileSink {
    /// Create a new builder.
    pub fn builder(filename: impl Into<String>) -> FileSinkBuilder {
        FileSinkBuilder::new(filename)
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.flush();
    }
}

impl Append for FileSink {
    fn append(&self, record: &Record) -> anyhow::Result<()> {
        let mut bytes = self.layout.format(record)?;
        bytes.push(b'\n');
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rand::Rng;
    use rand::distr::Alphanumeric;
    use tempfile::tempdir;

    use super::*;
    use crate::record::Severity;

    fn generate_random_string() -> String {
        let mut rng = rand::rng();
        let len = rng.random_range(50..=100);
        std::iter::repeat(())
            .map(|()| rng.sample(Alphanumeric))
            .map(char::from)
            .take(len)
            .collect()
    }

    #[test]
    fn test_log_suffix_appended_once() {
        let dir = tempdir().unwrap();
        FileSink::builder("audit").dir(dir.path()).build().unwrap();
        FileSink::builder("trace.log")
            .dir(dir.path())
            .build()
            .unwrap();

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, ["audit.log", "trace.log"]);
    }

    #[test]
    fn test_append_writes_and_flushes() {
        let dir = tempdir().unwrap();
        let sink = FileSink::builder("writes").dir(dir.path()).build().unwrap();

        let message = generate_random_string();
        let record = Record::builder()
            .name("MAIN")
            .severity(Severity::Info)
            .module("file")
            .line(1)
            .message(&message)
            .build();
        sink.append(&record).unwrap();

        let content = fs::read_to_string(dir.path().join("writes.log")).unwrap();
        assert!(content.contains(&message));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempdir().unwrap();
        let record = Record::builder().name("MAIN").message("pass").build();

        let sink = FileSink::builder("again").dir(dir.path()).build().unwrap();
        sink.append(&record).unwrap();
        drop(sink);

        let sink = FileSink::builder("again").dir(dir.path()).build().unwrap();
        sink.append(&record).unwrap();
        drop(sink);

        let content = fs::read_to_string(dir.path().join("again.log")).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_dated_filename_shape() {
        let filename = dated_filename("MAIN");
        let date = filename.strip_prefix("MAIN-").unwrap();
        assert!(date.parse::<jiff::civil::Date>().is_ok());
    }

    #[test]
    fn test_unopenable_path_is_io_error() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("taken.log")).unwrap();
        let result = FileSink::builder("taken").dir(dir.path()).build();
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
