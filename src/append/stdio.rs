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

use std::io::Write;
use std::sync::Arc;

use crate::append::Append;
use crate::layout::Layout;
use crate::layout::TextLayout;
use crate::record::Record;

/// A sink that prints log records to stderr.
///
/// This is the console sink every registered logger starts with.
#[derive(Debug)]
pub struct Stderr {
    layout: Arc<dyn Layout>,
}

impl Default for Stderr {
    fn default() -> Self {
        Self::new(TextLayout::default())
    }
}

impl Stderr {
    /// Creates a new `Stderr` sink with the given layout.
    pub fn new(layout: impl Into<Arc<dyn Layout>>) -> Self {
        Self {
            layout: layout.into(),
        }
    }
}

impl Append for Stderr {
    fn append(&self, record: &Record) -> anyhow::Result<()> {
        let mut bytes = self.layout.format(record)?;
        bytes.push(b'\n');
        std::io::stderr().write_all(&bytes)?;
        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        std::io::stderr().flush()?;
        Ok(())
    }
}

/// A sink that prints log records to stdout.
#[derive(Debug)]
pub struct Stdout {
    layout: Arc<dyn Layout>,
}

impl Default for Stdout {
    fn default() -> Self {
        Self::new(TextLayout::default())
    }
}

impl Stdout {
    /// Creates a new `Stdout` sink with the given layout.
    pub fn new(layout: impl Into<Arc<dyn Layout>>) -> Self {
        Self {
            layout: layout.into(),
        }
    }
}

impl Append for Stdout {
    fn append(&self, record: &Record) -> anyhow::Result<()> {
        let mut bytes = self.layout.format(record)?;
        bytes.push(b'\n');
        std::io::stdout().write_all(&bytes)?;
        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }
}
