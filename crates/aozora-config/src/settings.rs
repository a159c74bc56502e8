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

//! Validated project settings.
//!
//! [`Settings::load`] resolves a settings source once, runs the validator of
//! every recognized key — all of them, even after earlier failures — and
//! either returns an immutable [`Settings`] or a
//! [`SettingsError::Validation`] carrying every per-key failure. There is no
//! reload and no partial re-validation; callers thread the loaded value to
//! whoever needs it, so settings cannot be observed half-built or mutated
//! after the fact.

use crate::error::{SettingError, SettingsError};
use crate::source::{Namespace, SettingsSource};
use aozora_core::math::validate_vector2;
use aozora_core::validation::{validate_reference, validate_str, ValidationError};
use aozora_core::{Reference, ReferenceResolver, Value, Vector2};
use std::collections::BTreeMap;

/// The caption shown in the window title bar. A string.
pub const WINDOW_CAPTION: &str = "WINDOW_CAPTION";
/// The window size in pixels. A `Vector2` shape.
pub const WINDOW_SIZE: &str = "WINDOW_SIZE";
/// The scene shown at startup. A dotted reference path.
pub const INITIAL_SCENE: &str = "INITIAL_SCENE";

/// A recognized setting after validation.
enum Validated {
    Caption(String),
    Size(Vector2),
    Scene(Reference),
}

type Validator = fn(&Value, &dyn ReferenceResolver) -> Result<Validated, ValidationError>;

fn validate_caption(value: &Value, _: &dyn ReferenceResolver) -> Result<Validated, ValidationError> {
    validate_str(value).map(|s| Validated::Caption(s.to_string()))
}

fn validate_size(value: &Value, _: &dyn ReferenceResolver) -> Result<Validated, ValidationError> {
    validate_vector2(value).map(Validated::Size)
}

fn validate_scene(
    value: &Value,
    resolver: &dyn ReferenceResolver,
) -> Result<Validated, ValidationError> {
    validate_reference(value, resolver).map(Validated::Scene)
}

/// The recognized settings and their validators, in validation order.
const RECOGNIZED: [(&str, Validator); 3] = [
    (WINDOW_CAPTION, validate_caption),
    (WINDOW_SIZE, validate_size),
    (INITIAL_SCENE, validate_scene),
];

/// The validated, immutable settings of a project.
///
/// Produced exactly once per process by [`Settings::load`] and threaded to
/// collaborators by the caller. Recognized settings are exposed through
/// typed accessors; every raw binding of the source — unrecognized names
/// included — remains readable through [`Settings::get`].
pub struct Settings {
    window_caption: String,
    window_size: Vector2,
    initial_scene: Reference,
    bindings: Namespace,
}

impl Settings {
    /// Loads and validates the settings source named `name`.
    ///
    /// Every recognized key is validated even when earlier keys have already
    /// failed, so one load reports every misconfigured setting at once. A
    /// missing recognized key is one of those per-key failures, not a fatal
    /// error; an unresolvable source is fatal
    /// ([`SettingsError::NotFound`]).
    ///
    /// On any validation failure no state is produced: the error carries the
    /// full per-name report and there is nothing partially loaded to observe.
    pub fn load(
        source: &dyn SettingsSource,
        name: &str,
        resolver: &dyn ReferenceResolver,
    ) -> Result<Self, SettingsError> {
        let bindings = source.resolve(name).map_err(|e| {
            log::error!("Could not resolve settings source \"{name}\": {e}");
            SettingsError::NotFound {
                source: name.to_string(),
                detail: e.to_string(),
            }
        })?;

        let mut errors: BTreeMap<String, SettingError> = BTreeMap::new();
        let mut caption = None;
        let mut size = None;
        let mut scene = None;

        for (key, validator) in RECOGNIZED {
            match bindings.get(key) {
                None => {
                    errors.insert(key.to_string(), SettingError::Missing);
                }
                Some(value) => match validator(value, resolver) {
                    Ok(Validated::Caption(c)) => caption = Some(c),
                    Ok(Validated::Size(s)) => size = Some(s),
                    Ok(Validated::Scene(r)) => scene = Some(r),
                    Err(e) => {
                        errors.insert(key.to_string(), SettingError::Invalid(e));
                    }
                },
            }
        }

        match (caption, size, scene) {
            (Some(window_caption), Some(window_size), Some(initial_scene))
                if errors.is_empty() =>
            {
                log::info!("Settings loaded from \"{name}\".");
                Ok(Self {
                    window_caption,
                    window_size,
                    initial_scene,
                    bindings,
                })
            }
            _ => {
                log::warn!(
                    "Rejected settings from \"{name}\": {} setting(s) failed validation.",
                    errors.len()
                );
                Err(SettingsError::Validation { errors })
            }
        }
    }

    /// The caption shown in the window title bar.
    #[must_use]
    pub fn window_caption(&self) -> &str {
        &self.window_caption
    }

    /// The window size in pixels.
    #[must_use]
    pub fn window_size(&self) -> Vector2 {
        self.window_size
    }

    /// The resolved initial scene object.
    ///
    /// Consumers downcast to the concrete type they registered for the path.
    #[must_use]
    pub fn initial_scene(&self) -> &Reference {
        &self.initial_scene
    }

    /// Looks up a raw binding by name.
    ///
    /// Serves every name the source bound, recognized or not. Fails with
    /// [`SettingsError::NotConfigured`] for a name the source does not bind.
    pub fn get(&self, name: &str) -> Result<&Value, SettingsError> {
        self.bindings
            .get(name)
            .ok_or_else(|| SettingsError::NotConfigured {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ModuleRegistry;
    use crate::source::SourceError;
    use std::collections::HashMap;

    struct FakeScene {
        drawables: Vec<&'static str>,
    }

    struct MapSource {
        namespaces: HashMap<String, Namespace>,
    }

    impl MapSource {
        fn with(name: &str, namespace: Namespace) -> Self {
            let mut namespaces = HashMap::new();
            namespaces.insert(name.to_string(), namespace);
            Self { namespaces }
        }
    }

    impl SettingsSource for MapSource {
        fn resolve(&self, name: &str) -> Result<Namespace, SourceError> {
            self.namespaces
                .get(name)
                .cloned()
                .ok_or_else(|| SourceError::NotFound {
                    location: name.to_string(),
                })
        }
    }

    fn scene_registry() -> ModuleRegistry {
        let mut registry = ModuleRegistry::new();
        registry.register(
            "scenes",
            "title",
            FakeScene {
                drawables: vec!["logo", "press start"],
            },
        );
        registry
    }

    fn valid_namespace() -> Namespace {
        let mut namespace = Namespace::new();
        namespace.insert("WINDOW_CAPTION".to_string(), Value::from("Aozora"));
        namespace.insert(
            "WINDOW_SIZE".to_string(),
            Value::List(vec![Value::Int(800), Value::Int(600)]),
        );
        namespace.insert("INITIAL_SCENE".to_string(), Value::from("scenes.title"));
        namespace
    }

    #[test]
    fn load_validates_and_exposes_typed_settings() {
        let source = MapSource::with("src.settings", valid_namespace());
        let settings = Settings::load(&source, "src.settings", &scene_registry()).unwrap();

        assert_eq!(settings.window_caption(), "Aozora");
        assert_eq!(settings.window_size(), Vector2::new(800.0, 600.0));
        let scene = settings
            .initial_scene()
            .downcast_ref::<FakeScene>()
            .unwrap();
        assert_eq!(scene.drawables, vec!["logo", "press start"]);
    }

    #[test]
    fn load_reports_every_invalid_setting_at_once() {
        let mut namespace = valid_namespace();
        namespace.insert("WINDOW_CAPTION".to_string(), Value::Int(3));
        namespace.insert("WINDOW_SIZE".to_string(), Value::from("big"));
        let source = MapSource::with("src.settings", namespace);

        let Err(SettingsError::Validation { errors }) =
            Settings::load(&source, "src.settings", &scene_registry())
        else {
            panic!("load should fail validation");
        };

        assert_eq!(errors.len(), 2);
        assert!(matches!(
            errors.get("WINDOW_CAPTION"),
            Some(SettingError::Invalid(ValidationError::TypeMismatch { .. }))
        ));
        assert!(matches!(
            errors.get("WINDOW_SIZE"),
            Some(SettingError::Invalid(ValidationError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn missing_recognized_key_is_a_validation_error() {
        let mut namespace = valid_namespace();
        namespace.remove("INITIAL_SCENE");
        let source = MapSource::with("src.settings", namespace);

        let Err(SettingsError::Validation { errors }) =
            Settings::load(&source, "src.settings", &scene_registry())
        else {
            panic!("load should fail validation");
        };

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("INITIAL_SCENE"), Some(&SettingError::Missing));
    }

    #[test]
    fn unresolvable_scene_is_aggregated_not_fatal() {
        let mut namespace = valid_namespace();
        namespace.insert("INITIAL_SCENE".to_string(), Value::from("menus.title"));
        let source = MapSource::with("src.settings", namespace);

        let Err(SettingsError::Validation { errors }) =
            Settings::load(&source, "src.settings", &scene_registry())
        else {
            panic!("load should fail validation");
        };

        assert!(matches!(
            errors.get("INITIAL_SCENE"),
            Some(SettingError::Invalid(
                ValidationError::UnresolvedReference { .. }
            ))
        ));
    }

    #[test]
    fn unresolvable_source_is_fatal() {
        let source = MapSource {
            namespaces: HashMap::new(),
        };

        let Err(err) = Settings::load(&source, "src.settings", &scene_registry()) else {
            panic!("load should fail");
        };
        assert!(matches!(err, SettingsError::NotFound { .. }));
    }

    #[test]
    fn get_serves_every_raw_binding() {
        let mut namespace = valid_namespace();
        namespace.insert("FRAME_RATE".to_string(), Value::Int(60));
        let source = MapSource::with("src.settings", namespace);
        let settings = Settings::load(&source, "src.settings", &scene_registry()).unwrap();

        // Unrecognized bindings are carried through untouched.
        assert_eq!(settings.get("FRAME_RATE"), Ok(&Value::Int(60)));
        // Recognized names stay readable in raw form too.
        assert_eq!(settings.get("INITIAL_SCENE"), Ok(&Value::from("scenes.title")));
    }

    #[test]
    fn get_with_unbound_name_is_not_configured() {
        let source = MapSource::with("src.settings", valid_namespace());
        let settings = Settings::load(&source, "src.settings", &scene_registry()).unwrap();

        let Err(err) = settings.get("VSYNC") else {
            panic!("lookup should fail");
        };
        assert_eq!(
            err,
            SettingsError::NotConfigured {
                name: "VSYNC".to_string(),
            }
        );
    }
}
