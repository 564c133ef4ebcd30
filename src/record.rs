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

//! Log record and severity types.

use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;

use crate::Error;

/// An enum representing the available severities of a log record.
///
/// Severities are ordered from least to most important:
/// `Debug < Info < Warning < Error < Critical`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Designates lower priority information.
    Debug,
    /// Designates useful information.
    Info,
    /// Designates hazardous situations.
    Warning,
    /// Designates serious errors.
    Error,
    /// Designates errors after which the process is unlikely to continue.
    Critical,
}

impl Severity {
    /// Return the string representation of the `Severity`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Debug for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Severity {
    type Err = Error;
    fn from_str(s: &str) -> Result<Severity, Self::Err> {
        for (name, severity) in [
            ("debug", Severity::Debug),
            ("info", Severity::Info),
            ("warning", Severity::Warning),
            ("error", Severity::Error),
            ("critical", Severity::Critical),
        ] {
            if s.eq_ignore_ascii_case(name) {
                return Ok(severity);
            }
        }

        Err(Error::Config(format!("malformed severity: {s:?}")))
    }
}

/// The payload of a single log emission.
///
/// A record is created once per emission call and consumed by each attached
/// sink independently; it is never mutated. The source location fields are
/// for diagnostic display only.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    // the observed time
    time: Timestamp,

    // the metadata
    name: &'a str,
    severity: Severity,
    module: &'a str,
    line: u32,

    // the payload; may contain internal line breaks
    message: &'a str,
}

impl<'a> Record<'a> {
    /// The observed time.
    pub fn time(&self) -> Timestamp {
        self.time
    }

    /// The name of the logger that emitted the record.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The severity of the record.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The source module the record was emitted from.
    pub fn module(&self) -> &'a str {
        self.module
    }

    /// The source line the record was emitted from.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The message body.
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// Returns a new builder.
    pub fn builder() -> RecordBuilder<'a> {
        RecordBuilder::default()
    }
}

/// Builder for [`Record`].
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    record: Record<'a>,
}

impl Default for RecordBuilder<'_> {
    fn default() -> Self {
        RecordBuilder {
            record: Record {
                time: Timestamp::now(),
                name: "",
                severity: Severity::Info,
                module: "",
                line: 0,
                message: "",
            },
        }
    }
}

impl<'a> RecordBuilder<'a> {
    /// Set [`time`](Record::time).
    ///
    /// Default to the instant the builder was created.
    pub fn time(mut self, time: Timestamp) -> Self {
        self.record.time = time;
        self
    }

    /// Set [`name`](Record::name).
    pub fn name(mut self, name: &'a str) -> Self {
        self.record.name = name;
        self
    }

    /// Set [`severity`](Record::severity).
    pub fn severity(mut self, severity: Severity) -> Self {
        self.record.severity = severity;
        self
    }

    /// Set [`module`](Record::module).
    pub fn module(mut self, module: &'a str) -> Self {
        self.record.module = module;
        self
    }

    /// Set [`line`](Record::line).
    pub fn line(mut self, line: u32) -> Self {
        self.record.line = line;
        self
    }

    /// Set [`message`](Record::message).
    pub fn message(mut self, message: &'a str) -> Self {
        self.record.message = message;
        self
    }

    /// Invoke the builder and return a `Record`.
    pub fn build(self) -> Record<'a> {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("CRITICAL".parse::<Severity>().unwrap(), Severity::Critical);
        assert!(matches!(
            "verbose".parse::<Severity>(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_severity_display_pads() {
        assert_eq!(format!("{:<8}", Severity::Info), "INFO    ");
        assert_eq!(format!("{:<8}", Severity::Critical), "CRITICAL");
    }

    #[test]
    fn test_record_builder() {
        let time: Timestamp = "2026-08-07T09:15:42.123Z".parse().unwrap();
        let record = Record::builder()
            .time(time)
            .name("MAIN")
            .severity(Severity::Warning)
            .module("server")
            .line(42)
            .message("Stuff happens!")
            .build();
        assert_eq!(record.time(), time);
        assert_eq!(record.name(), "MAIN");
        assert_eq!(record.severity(), Severity::Warning);
        assert_eq!(record.module(), "server");
        assert_eq!(record.line(), 42);
        assert_eq!(record.message(), "Stuff happens!");
    }
}
