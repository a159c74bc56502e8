// Copyright 2025 eraflo
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

//! # Aozora Config
//!
//! The settings layer of the Aozora framework: source resolution
//! (TOML-backed or custom), the explicit registration table that dotted
//! reference paths resolve against, and the load-once validated
//! [`Settings`] value handed to collaborators.

#![warn(missing_docs)]

pub mod error;
pub mod registry;
pub mod settings;
pub mod source;

pub use error::{SettingError, SettingsError};
pub use registry::ModuleRegistry;
pub use settings::{Settings, INITIAL_SCENE, WINDOW_CAPTION, WINDOW_SIZE};
pub use source::{Namespace, SettingsSource, SourceError, TomlFileSource};
