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

//! The process-wide table of named loggers.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::io::Write;
use std::panic::Location;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::sync::PoisonError;

use crate::Error;
use crate::append::Append;
use crate::append::FileSink;
use crate::append::Stderr;
use crate::append::Stdout;
use crate::append::dated_filename;
use crate::layout::Layout;
use crate::layout::TextLayout;
use crate::record::Record;
use crate::record::Severity;

/// The console stream newly created loggers write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    /// The standard output stream.
    Stdout,
    /// The standard error stream. This is the default.
    Stderr,
}

/// A builder to configure and create a [`Registry`].
#[derive(Debug)]
pub struct RegistryBuilder {
    dir: PathBuf,
    console: ConsoleStream,
    layout: Arc<dyn Layout>,
    min_severity: Severity,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            console: ConsoleStream::Stderr,
            layout: Arc::new(TextLayout::default()),
            min_severity: Severity::Debug,
        }
    }
}

impl RegistryBuilder {
    /// Set the directory log files are created in.
    ///
    /// Default to the working directory.
    #[must_use]
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Set the console stream loggers write to.
    ///
    /// Default to [`ConsoleStream::Stderr`].
    #[must_use]
    pub fn console(mut self, console: ConsoleStream) -> Self {
        self.console = console;
        self
    }

    /// Set the layout shared by every sink the registry creates.
    ///
    /// Default to [`TextLayout`].
    pub fn layout(mut self, layout: impl Into<Arc<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Set the minimum severity newly created loggers pass to their sinks.
    ///
    /// Default to [`Severity::Debug`], i.e. everything.
    #[must_use]
    pub fn min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Build the [`Registry`].
    pub fn build(self) -> Registry {
        Registry {
            dir: self.dir,
            console: self.console,
            layout: self.layout,
            min_severity: self.min_severity,
            entries: Mutex::new(BTreeMap::new()),
        }
    }
}

/// The table of named loggers.
///
/// A registry hands out [`Logger`] handles through [`get_or_create`]; an
/// entry is created on first use of a name and lives for the rest of the
/// process. Every logger starts with a console sink attached; file output is
/// toggled per logger at runtime through its handle.
///
/// [`get_or_create`]: Registry::get_or_create
#[derive(Debug)]
pub struct Registry {
    dir: PathBuf,
    console: ConsoleStream,
    layout: Arc<dyn Layout>,
    min_severity: Severity,
    entries: Mutex<BTreeMap<String, Logger>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a registry with default configuration.
    pub fn new() -> Registry {
        Self::builder().build()
    }

    /// Returns a new builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Return the logger registered under `name`, creating it on first use.
    ///
    /// A new logger starts with a console sink attached and file output
    /// inactive. Repeated calls with the same name return handles to the same
    /// underlying entry.
    pub fn get_or_create(&self, name: &str) -> Logger {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(logger) = entries.get(name) {
            return logger.clone();
        }

        let console: Box<dyn Append> = match self.console {
            ConsoleStream::Stdout => Box::new(Stdout::new(self.layout.clone())),
            ConsoleStream::Stderr => Box::new(Stderr::new(self.layout.clone())),
        };
        let logger = Logger(Arc::new(LoggerState {
            name: name.to_string(),
            dir: self.dir.clone(),
            layout: self.layout.clone(),
            min_severity: self.min_severity,
            console,
            file: Mutex::new(None),
        }));
        entries.insert(name.to_string(), logger.clone());
        logger
    }

    /// Return all registered names, in sorted order.
    pub fn names(&self) -> Vec<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.keys().cloned().collect()
    }
}

static DEFAULT_REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Install `registry` as the process-wide default.
///
/// Must be called before the first use of [`default_registry`], and at most
/// once.
///
/// # Errors
///
/// Returns an error if a default registry is already installed.
pub fn set_default_registry(registry: Registry) -> Result<(), Error> {
    DEFAULT_REGISTRY
        .set(registry)
        .map_err(|_| Error::Config("default registry already initialized".to_string()))
}

/// Return the process-wide default registry.
///
/// Initialized once, on first use, with [`set_default_registry`]'s registry
/// or with default configuration.
pub fn default_registry() -> &'static Registry {
    DEFAULT_REGISTRY.get_or_init(Registry::new)
}

/// A handle to a registered logger.
///
/// Handles are cheap to clone; every clone refers to the same registry entry.
/// The handle carries its entry name, so no registry scan is ever needed to
/// resolve it.
#[derive(Debug, Clone)]
pub struct Logger(Arc<LoggerState>);

#[derive(Debug)]
struct LoggerState {
    name: String,
    dir: PathBuf,
    layout: Arc<dyn Layout>,
    min_severity: Severity,
    console: Box<dyn Append>,
    file: Mutex<Option<Arc<FileSink>>>,
}

impl Logger {
    /// The name this logger is registered under.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The minimum severity this logger passes to its sinks.
    pub fn min_severity(&self) -> Severity {
        self.0.min_severity
    }

    /// Whether file output is currently active.
    pub fn file_output_active(&self) -> bool {
        self.0
            .file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Start writing records to `<name>-<YYYY-MM-DD>.log`.
    ///
    /// The file is created if absent and appended to if present. When file
    /// output is already active, the previous sink is detached and closed
    /// once the new one is successfully built; two file sinks are never
    /// attached at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened. Failure leaves the
    /// previous file-output state untouched.
    #[track_caller]
    pub fn start_file_output(&self) -> Result<(), Error> {
        let location = Location::caller();
        self.emit_console(
            Severity::Info,
            location,
            &format!("Starting file log for {}", self.0.name),
        );

        let sink = FileSink::builder(dated_filename(&self.0.name))
            .dir(&self.0.dir)
            .layout(self.0.layout.clone())
            .build()?;

        let mut file = self.0.file.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(old) = file.take() {
            let _ = old.flush();
        }
        *file = Some(Arc::new(sink));
        Ok(())
    }

    /// Stop file output, flushing and closing the active file sink.
    ///
    /// A no-op when file output is inactive.
    #[track_caller]
    pub fn stop_file_output(&self) {
        let location = Location::caller();
        let previous = self
            .0
            .file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(sink) = previous {
            let _ = sink.flush();
            self.emit_console(
                Severity::Info,
                location,
                &format!("Stopping file log for {}", self.0.name),
            );
        }
    }

    /// Emit a record at the given severity, capturing the caller's source
    /// location.
    #[track_caller]
    pub fn emit(&self, severity: Severity, message: impl AsRef<str>) {
        let location = Location::caller();
        self.emit_at(severity, location, message.as_ref());
    }

    /// Emit a record at [`Severity::Debug`].
    #[track_caller]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.emit(Severity::Debug, message);
    }

    /// Emit a record at [`Severity::Info`].
    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) {
        self.emit(Severity::Info, message);
    }

    /// Emit a record at [`Severity::Warning`].
    #[track_caller]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.emit(Severity::Warning, message);
    }

    /// Emit a record at [`Severity::Error`].
    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>) {
        self.emit(Severity::Error, message);
    }

    /// Emit a record at [`Severity::Critical`].
    #[track_caller]
    pub fn critical(&self, message: impl AsRef<str>) {
        self.emit(Severity::Critical, message);
    }

    /// Dispatch a pre-built record to every attached sink.
    ///
    /// Records below the logger's minimum severity are dropped.
    pub fn emit_record(&self, record: &Record) {
        if record.severity() < self.0.min_severity {
            return;
        }

        if let Err(err) = self.0.console.append(record) {
            handle_error(record, err);
        }

        let file = self
            .0
            .file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(sink) = file {
            if let Err(err) = sink.append(record) {
                handle_error(record, err);
            }
        }
    }

    fn emit_at(&self, severity: Severity, location: &Location, message: &str) {
        let record = Record::builder()
            .name(&self.0.name)
            .severity(severity)
            .module(module_of(location))
            .line(location.line())
            .message(message)
            .build();
        self.emit_record(&record);
    }

    // File-output toggles are announced on the console sink only, so the
    // notice never lands in the file being opened or closed.
    fn emit_console(&self, severity: Severity, location: &Location, message: &str) {
        let record = Record::builder()
            .name(&self.0.name)
            .severity(severity)
            .module(module_of(location))
            .line(location.line())
            .message(message)
            .build();
        if let Err(err) = self.0.console.append(&record) {
            handle_error(&record, err);
        }
    }
}

fn module_of<'a>(location: &'a Location<'a>) -> &'a str {
    Path::new(location.file())
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or_default()
}

fn handle_error(record: &Record, error: anyhow::Error) {
    let Err(fallback_error) = write!(
        std::io::stderr(),
        r###"
Error performing logging.
    Attempted to log: {message}
    Record: {record:?}
    Error: {error}
"###,
        message = record.message(),
        record = record,
        error = error,
    ) else {
        return;
    };

    panic!(
        r###"
Error performing stderr logging after error occurred during regular logging.
    Attempted to log: {message}
    Record: {record:?}
    Error: {error}
    Fallback error: {fallback_error}
"###,
        message = record.message(),
        record = record,
        error = error,
        fallback_error = fallback_error,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_idempotent() {
        let registry = Registry::new();
        let a = registry.get_or_create("MAIN");
        let b = registry.get_or_create("MAIN");
        assert!(Arc::ptr_eq(&a.0, &b.0));

        let c = registry.get_or_create("BOOT");
        assert!(!Arc::ptr_eq(&a.0, &c.0));
    }

    #[test]
    fn test_names_sorted() {
        let registry = Registry::new();
        registry.get_or_create("MAIN");
        registry.get_or_create("BOOT");
        registry.get_or_create("WORLD");
        assert_eq!(registry.names(), ["BOOT", "MAIN", "WORLD"]);
    }

    #[test]
    fn test_stop_without_start_is_noop() {
        let registry = Registry::new();
        let logger = registry.get_or_create("IDLE");
        assert!(!logger.file_output_active());
        logger.stop_file_output();
        assert!(!logger.file_output_active());
    }

    #[test]
    fn test_min_severity_from_builder() {
        let registry = Registry::builder().min_severity(Severity::Warning).build();
        let logger = registry.get_or_create("QUIET");
        assert_eq!(logger.min_severity(), Severity::Warning);
    }

    #[test]
    fn test_default_registry_is_shared() {
        let a = default_registry();
        let b = default_registry();
        assert!(std::ptr::eq(a, b));
    }
}
