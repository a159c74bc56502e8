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

//! An explicit registration table for by-name references.
//!
//! Settings refer to application objects (the initial scene, for example) by
//! dotted path: `"scenes.title"` names the `title` attribute of the `scenes`
//! module. The [`ModuleRegistry`] is the table those paths resolve against:
//! the application registers its objects at startup, under names it chooses,
//! and validation looks them up through the
//! [`ReferenceResolver`](aozora_core::ReferenceResolver) seam.
//!
//! Registration is explicit and enumerable; nothing is discovered by
//! scanning.

use aozora_core::{Reference, ReferenceResolver, ResolveError};
use std::collections::HashMap;
use std::sync::Arc;

/// A registration table mapping `module -> attribute -> object`.
///
/// Objects are stored as [`Reference`]s (`Arc<dyn Any + Send + Sync>`);
/// consumers downcast to the concrete type they registered.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, HashMap<String, Reference>>,
}

impl ModuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// Registers `object` as `module`.`attribute`.
    ///
    /// If the same path was already registered, the object is replaced.
    pub fn register<T: Send + Sync + 'static>(&mut self, module: &str, attribute: &str, object: T) {
        self.modules
            .entry(module.to_string())
            .or_default()
            .insert(attribute.to_string(), Arc::new(object));
    }

    /// Returns `true` if a module is registered under `module`.
    #[must_use]
    pub fn contains_module(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    /// Returns the number of registered attributes across all modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.values().map(HashMap::len).sum()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl ReferenceResolver for ModuleRegistry {
    fn resolve(&self, module: &str, attribute: &str) -> Result<Reference, ResolveError> {
        let attributes = self
            .modules
            .get(module)
            .ok_or_else(|| ResolveError::UnknownModule {
                module: module.to_string(),
            })?;
        attributes
            .get(attribute)
            .cloned()
            .ok_or_else(|| ResolveError::UnknownAttribute {
                module: module.to_string(),
                attribute: attribute.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeScene {
        name: String,
    }

    #[test]
    fn register_and_resolve() {
        let mut registry = ModuleRegistry::new();
        registry.register(
            "scenes",
            "title",
            FakeScene {
                name: "title".to_string(),
            },
        );

        let reference = registry.resolve("scenes", "title").unwrap();
        let scene = reference.downcast_ref::<FakeScene>().unwrap();
        assert_eq!(scene.name, "title");
    }

    #[test]
    fn unknown_module_is_reported_as_such() {
        let registry = ModuleRegistry::new();
        let Err(err) = registry.resolve("scenes", "title") else {
            panic!("resolution should fail");
        };
        assert_eq!(
            err,
            ResolveError::UnknownModule {
                module: "scenes".to_string(),
            }
        );
    }

    #[test]
    fn unknown_attribute_is_reported_as_such() {
        let mut registry = ModuleRegistry::new();
        registry.register("scenes", "title", ());

        let Err(err) = registry.resolve("scenes", "credits") else {
            panic!("resolution should fail");
        };
        assert_eq!(
            err,
            ResolveError::UnknownAttribute {
                module: "scenes".to_string(),
                attribute: "credits".to_string(),
            }
        );
    }

    #[test]
    fn replace_registration() {
        let mut registry = ModuleRegistry::new();
        registry.register("scenes", "title", 1_u32);
        registry.register("scenes", "title", 2_u32);

        let reference = registry.resolve("scenes", "title").unwrap();
        assert_eq!(reference.downcast_ref::<u32>(), Some(&2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn default_is_empty() {
        let registry = ModuleRegistry::default();
        assert!(registry.is_empty());
        assert!(!registry.contains_module("scenes"));
    }
}
