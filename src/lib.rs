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

//! Logkeep is a registry of named loggers with aligned multi-line formatting
//! and on-demand per-logger file output.
//!
//! # Overview
//!
//! Applications ask a [`Registry`] for loggers by name. Every logger writes to
//! the console through a shared text layout; file output can be started and
//! stopped per logger at runtime and targets a file named after the logger and
//! the current UTC date.
//!
//! # Examples
//!
//! Simple console logging through the registry:
//!
//! ```
//! use logkeep::Registry;
//!
//! let registry = Registry::new();
//! let main = registry.get_or_create("MAIN");
//! main.info("System initializing.");
//! ```
//!
//! Toggling file output at runtime:
//!
//! ```no_run
//! use logkeep::Registry;
//!
//! fn main() -> Result<(), logkeep::Error> {
//!     let registry = Registry::builder().dir("logs").build();
//!     let main = registry.get_or_create("MAIN");
//!
//!     main.start_file_output()?;
//!     main.warning("Stuff happens!");
//!     main.stop_file_output();
//!     main.warning("Sneaky stuff happens!");
//!     Ok(())
//! }
//! ```

pub mod append;
pub mod layout;

pub use append::Append;
pub use layout::Layout;

mod error;
pub use error::Error;

mod record;
pub use record::Record;
pub use record::RecordBuilder;
pub use record::Severity;

mod registry;
pub use registry::ConsoleStream;
pub use registry::Logger;
pub use registry::Registry;
pub use registry::RegistryBuilder;
pub use registry::default_registry;
pub use registry::set_default_registry;
