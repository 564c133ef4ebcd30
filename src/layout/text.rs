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

use std::fmt::Write;

use jiff::Timestamp;

use crate::layout::Layout;
use crate::layout::align::SEPARATOR;
use crate::layout::align::align_continuations;
use crate::layout::timestamp::format_timestamp;
use crate::record::Record;

/// A layout that formats log records as aligned text.
///
/// Output format:
///
/// ```text
/// 2026-08-07 09:15:42.123 UTC MAIN     INFO           server:   42| System initializing.
/// 2026-08-07 09:15:42.125 UTC MAIN     WARNING        server:   57| first line
///                                                                   second line
/// ```
///
/// The header columns are: logger name left-justified to 8 characters,
/// severity left-justified to 8 characters, source module right-justified to
/// 12 characters, and source line right-justified to 5 digits. Continuation
/// lines of a multi-line message are re-indented to start at the column where
/// the first line's message begins.
///
/// # Examples
///
/// ```
/// use logkeep::layout::TextLayout;
///
/// let layout = TextLayout::default();
/// ```
#[derive(Debug, Clone)]
pub struct TextLayout {
    name_width: usize,
    severity_width: usize,
    module_width: usize,
    line_width: usize,
    timestamp_format: Option<fn(Timestamp) -> String>,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            name_width: 8,
            severity_width: 8,
            module_width: 12,
            line_width: 5,
            timestamp_format: None,
        }
    }
}

impl TextLayout {
    /// Set the column width the logger name is left-justified to.
    ///
    /// Default to 8.
    pub fn name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    /// Set the column width the severity is left-justified to.
    ///
    /// Default to 8.
    pub fn severity_width(mut self, width: usize) -> Self {
        self.severity_width = width;
        self
    }

    /// Set the column width the source module is right-justified to.
    ///
    /// Default to 12.
    pub fn module_width(mut self, width: usize) -> Self {
        self.module_width = width;
        self
    }

    /// Set the column width the source line is right-justified to.
    ///
    /// Default to 5.
    pub fn line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    /// Set a user-defined timestamp format function.
    ///
    /// Default to rendering the instant as `YYYY-MM-DD HH:MM:SS.mmm UTC`.
    pub fn timestamp_format(mut self, format: fn(Timestamp) -> String) -> Self {
        self.timestamp_format = Some(format);
        self
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &Record) -> anyhow::Result<Vec<u8>> {
        let time = match self.timestamp_format {
            Some(format) => format(record.time()),
            None => format_timestamp(record.time()),
        };
        let name = record.name();
        let severity = record.severity();
        let module = record.module();
        let line = record.line();
        let message = record.message();

        let mut text = String::new();
        write!(
            &mut text,
            "{time} {name:<nw$} {severity:<sw$} {module:>mw$}:{line:>lw$}{SEPARATOR}{message}",
            nw = self.name_width,
            sw = self.severity_width,
            mw = self.module_width,
            lw = self.line_width,
        )?;

        Ok(align_continuations(text).into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::TextLayout;
    use crate::layout::Layout;
    use crate::record::Record;
    use crate::record::Severity;

    fn record(message: &str) -> Record<'_> {
        Record::builder()
            .time("2026-08-07T09:15:42.123Z".parse::<Timestamp>().unwrap())
            .name("MAIN")
            .severity(Severity::Info)
            .module("server")
            .line(42)
            .message(message)
            .build()
    }

    fn render(layout: &TextLayout, record: &Record) -> String {
        String::from_utf8(layout.format(record).unwrap()).unwrap()
    }

    #[test]
    fn test_header_columns() {
        let text = render(&TextLayout::default(), &record("System initializing."));
        assert_eq!(
            text,
            "2026-08-07 09:15:42.123 UTC MAIN     INFO           server:   42| System initializing."
        );
    }

    #[test]
    fn test_multiline_message_aligns() {
        let text = render(&TextLayout::default(), &record("line one\nline two"));
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 2);

        let pos = lines[0].find("| ").unwrap();
        assert!(lines[0].ends_with("| line one"));
        assert_eq!(lines[1], format!("{}line two", " ".repeat(pos + 2)));
    }

    #[test]
    fn test_custom_widths() {
        let layout = TextLayout::default()
            .name_width(4)
            .severity_width(4)
            .module_width(6)
            .line_width(3);
        let text = render(&layout, &record("hi"));
        assert_eq!(
            text,
            "2026-08-07 09:15:42.123 UTC MAIN INFO server: 42| hi"
        );
    }

    #[test]
    fn test_custom_timestamp_format() {
        let layout = TextLayout::default().timestamp_format(|ts| ts.as_millisecond().to_string());
        let text = render(&layout, &record("hi"));
        assert!(text.starts_with("1786094142123 MAIN"));
    }
}
