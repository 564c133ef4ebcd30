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

//! Sinks that receive formatted log records.

use std::fmt;

use crate::record::Record;

mod file;
mod stdio;

pub use self::file::FileSink;
pub use self::file::FileSinkBuilder;
pub use self::file::dated_filename;
pub use self::stdio::Stderr;
pub use self::stdio::Stdout;

/// A sink that can process log records.
///
/// Each sink formats records through its layout and writes them to its own
/// destination; writes to one destination are serialized, but different sinks
/// write concurrently without coordination.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Dispatch a log record to the sink target.
    fn append(&self, record: &Record) -> anyhow::Result<()>;

    /// Flush any buffered records.
    ///
    /// Default to a no-op.
    fn flush(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<T: Append> From<T> for Box<dyn Append> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
