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

//! Layouts for formatting log records.

use std::fmt;
use std::sync::Arc;

use crate::record::Record;

mod align;
mod text;
mod timestamp;

pub use self::text::TextLayout;

/// A layout for formatting log records.
///
/// Every sink attached to a logger formats records through the same shared
/// layout, so console and file output render identically.
pub trait Layout: fmt::Debug + Send + Sync + 'static {
    /// Formats a log record into a rendered line.
    fn format(&self, record: &Record) -> anyhow::Result<Vec<u8>>;
}

impl<T: Layout> From<T> for Arc<dyn Layout> {
    fn from(value: T) -> Self {
        Arc::new(value)
    }
}
