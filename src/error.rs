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

/// Errors surfaced by sink construction and registry configuration.
///
/// Emission itself never returns an error to the logging call site; write
/// failures are reported on stderr instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A log file could not be created, opened, or written.
    #[error("failed to perform IO action: {0}")]
    Io(#[from] std::io::Error),
    /// A malformed configuration value was supplied.
    #[error("malformed configuration: {0}")]
    Config(String),
}
