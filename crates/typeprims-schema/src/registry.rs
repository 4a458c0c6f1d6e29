use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info};
use typeprims_types::{
    any, array, boolean, integer, null, number, object, string, Type, BUILTIN_NAMES,
};

use crate::config::RegistryConfig;
use crate::error::{Result, SchemaError};
use crate::schema_type::SchemaType;

const SCHEMA_SUFFIX: &str = ".schema.json";

/// Where a registered type came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeOrigin {
    /// One of the primitive descriptors.
    Builtin,
    /// Compiled from a JSON Schema.
    Schema,
    /// A caller-supplied [`Type`] implementation.
    Custom,
}

impl TypeOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeOrigin::Builtin => "builtin",
            TypeOrigin::Schema => "schema",
            TypeOrigin::Custom => "custom",
        }
    }
}

struct Entry {
    ty: Arc<dyn Type>,
    origin: TypeOrigin,
}

/// Name-keyed registry of type descriptors.
pub struct TypeRegistry {
    types: BTreeMap<String, Entry>,
    config: RegistryConfig,
}

impl TypeRegistry {
    /// Create a registry holding the builtin primitives, with default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a registry holding the builtin primitives, with explicit config.
    pub fn with_config(config: RegistryConfig) -> Self {
        let builtins: [Arc<dyn Type>; 8] = [
            Arc::new(any()),
            Arc::new(array()),
            Arc::new(boolean()),
            Arc::new(integer()),
            Arc::new(null()),
            Arc::new(number()),
            Arc::new(object()),
            Arc::new(string()),
        ];

        let types = builtins
            .into_iter()
            .map(|ty| {
                let entry = Entry {
                    ty,
                    origin: TypeOrigin::Builtin,
                };
                (entry.ty.name().to_string(), entry)
            })
            .collect();

        Self { types, config }
    }

    /// Register a schema type from JSON text.
    pub fn register(&mut self, name: &str, schema_json: &str) -> Result<()> {
        let schema: Value = serde_json::from_str(schema_json)?;
        self.register_value(name, &schema)
    }

    /// Register a schema type from a JSON value.
    pub fn register_value(&mut self, name: &str, schema: &Value) -> Result<()> {
        self.ensure_assignable(name)?;

        let compiled = if self.config.strict_mode {
            let mut strict = schema.clone();
            apply_strict_mode(&mut strict);
            SchemaType::compile(name, &strict)?
        } else {
            SchemaType::compile(name, schema)?
        };

        self.insert(Arc::new(compiled), TypeOrigin::Schema);
        Ok(())
    }

    /// Register a caller-supplied descriptor under its own name.
    pub fn register_type(&mut self, ty: Arc<dyn Type>) -> Result<()> {
        self.ensure_assignable(ty.name())?;
        self.insert(ty, TypeOrigin::Custom);
        Ok(())
    }

    /// Load schemas from a directory.
    pub fn from_directory(path: &Path) -> Result<Self> {
        Self::from_directory_with_config(path, RegistryConfig::default())
    }

    /// Load every `<name>.schema.json` file in `path`, with explicit config.
    ///
    /// Other files and subdirectories are skipped. Symlinked schema files,
    /// unusable names and files over the size limit are errors.
    pub fn from_directory_with_config(path: &Path, config: RegistryConfig) -> Result<Self> {
        let mut registry = Self::with_config(config);
        let mut loaded = 0usize;

        let entries = std::fs::read_dir(path)
            .map_err(|err| SchemaError::LoadFailed(format!("{}: {err}", path.display())))?;

        for entry in entries {
            let entry = entry.map_err(|err| SchemaError::LoadFailed(err.to_string()))?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            let Some(name) = file_name.strip_suffix(SCHEMA_SUFFIX) else {
                continue;
            };

            let entry_path = entry.path();
            let path_metadata = std::fs::symlink_metadata(&entry_path)
                .map_err(|err| SchemaError::LoadFailed(err.to_string()))?;
            let file_type = path_metadata.file_type();
            if file_type.is_symlink() {
                return Err(SchemaError::LoadFailed(format!(
                    "refusing to load schema symlink: {file_name}"
                )));
            }
            if !file_type.is_file() {
                continue;
            }
            if !is_valid_type_name(name) {
                return Err(SchemaError::LoadFailed(format!(
                    "unusable schema filename: {file_name}"
                )));
            }

            loaded = loaded.saturating_add(1);
            if loaded > registry.config.max_types_from_directory {
                return Err(SchemaError::LoadFailed(format!(
                    "schema count exceeds configured max ({}): {loaded}",
                    registry.config.max_types_from_directory
                )));
            }

            let content = read_schema_file(&entry_path, &path_metadata, &registry.config)?;
            registry.register(name, &content)?;
            debug!(name, path = %entry_path.display(), "loaded schema type");
        }

        info!(count = loaded, dir = %path.display(), "loaded schema types from directory");
        Ok(registry)
    }

    /// Load from embedded `(name, schema)` pairs.
    pub fn from_embedded(schemas: &[(&str, &str)]) -> Result<Self> {
        let mut registry = Self::new();
        for (name, schema) in schemas {
            registry.register(name, schema)?;
        }
        Ok(registry)
    }

    /// Look up a type by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Type>> {
        self.types.get(name).map(|entry| Arc::clone(&entry.ty))
    }

    /// Look up a type by name, failing if it is unknown.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Type>> {
        self.get(name)
            .ok_or_else(|| SchemaError::UnknownType(name.to_string()))
    }

    /// Resolve several names, preserving order.
    pub fn resolve_all<I, S>(&self, names: I) -> Result<Vec<Arc<dyn Type>>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.resolve(name.as_ref()))
            .collect()
    }

    /// Check if a type is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Origin of the type registered under `name`.
    pub fn origin(&self, name: &str) -> Option<TypeOrigin> {
        self.types.get(name).map(|entry| entry.origin)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    /// Get registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn ensure_assignable(&self, name: &str) -> Result<()> {
        if !is_valid_type_name(name) {
            return Err(SchemaError::InvalidName(name.to_string()));
        }
        if BUILTIN_NAMES.contains(&name) && !self.config.allow_builtin_override {
            return Err(SchemaError::Reserved(name.to_string()));
        }
        Ok(())
    }

    fn insert(&mut self, ty: Arc<dyn Type>, origin: TypeOrigin) {
        let name = ty.name().to_string();
        if let Some(previous) = self.types.insert(name, Entry { ty, origin }) {
            debug!(
                name = previous.ty.name(),
                previous = previous.origin.as_str(),
                "replaced registered type"
            );
        }
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_type_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

fn read_schema_file(
    path: &Path,
    path_metadata: &std::fs::Metadata,
    config: &RegistryConfig,
) -> Result<String> {
    let file = std::fs::File::open(path).map_err(|err| {
        SchemaError::LoadFailed(format!("failed opening schema {}: {err}", path.display()))
    })?;
    let opened_metadata = file
        .metadata()
        .map_err(|err| SchemaError::LoadFailed(err.to_string()))?;

    #[cfg(unix)]
    {
        if !same_file_identity(path_metadata, &opened_metadata) {
            return Err(SchemaError::LoadFailed(format!(
                "schema file changed during load: {}",
                path.display()
            )));
        }
    }
    #[cfg(not(unix))]
    let _ = path_metadata;

    let max_bytes = config.max_schema_file_size;
    if opened_metadata.len() > max_bytes as u64 {
        return Err(SchemaError::LoadFailed(format!(
            "schema file too large ({} bytes): {}",
            opened_metadata.len(),
            path.display()
        )));
    }

    let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
    let mut content = String::new();
    file.take(read_limit)
        .read_to_string(&mut content)
        .map_err(|err| {
            SchemaError::LoadFailed(format!("failed reading schema {}: {err}", path.display()))
        })?;
    if content.len() > max_bytes {
        return Err(SchemaError::LoadFailed(format!(
            "schema file too large while reading: {}",
            path.display()
        )));
    }
    Ok(content)
}

#[cfg(unix)]
fn same_file_identity(
    path_metadata: &std::fs::Metadata,
    opened_metadata: &std::fs::Metadata,
) -> bool {
    use std::os::unix::fs::MetadataExt;
    path_metadata.dev() == opened_metadata.dev() && path_metadata.ino() == opened_metadata.ino()
}

/// Keywords whose value is a map of subschemas.
const SUBSCHEMA_MAPS: [&str; 5] = [
    "properties",
    "patternProperties",
    "dependentSchemas",
    "$defs",
    "definitions",
];

/// Keywords whose value is a single subschema.
const SUBSCHEMA_SINGLE: [&str; 11] = [
    "propertyNames",
    "additionalProperties",
    "unevaluatedProperties",
    "items",
    "contains",
    "additionalItems",
    "unevaluatedItems",
    "not",
    "if",
    "then",
    "else",
];

/// Keywords whose value is a list of subschemas.
const SUBSCHEMA_LISTS: [&str; 4] = ["prefixItems", "allOf", "anyOf", "oneOf"];

/// Keywords that imply an object schema when `type` is absent.
const OBJECT_KEYWORDS: [&str; 8] = [
    "properties",
    "patternProperties",
    "additionalProperties",
    "unevaluatedProperties",
    "required",
    "dependentRequired",
    "dependentSchemas",
    "propertyNames",
];

fn apply_strict_mode(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if is_object_schema(map) {
                map.entry("additionalProperties")
                    .or_insert(Value::Bool(false));
            }
            for key in SUBSCHEMA_MAPS {
                if let Some(Value::Object(children)) = map.get_mut(key) {
                    children.values_mut().for_each(apply_strict_mode);
                }
            }
            for key in SUBSCHEMA_SINGLE {
                if let Some(child) = map.get_mut(key) {
                    apply_strict_mode(child);
                }
            }
            for key in SUBSCHEMA_LISTS {
                if let Some(Value::Array(items)) = map.get_mut(key) {
                    items.iter_mut().for_each(apply_strict_mode);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(apply_strict_mode),
        _ => {}
    }
}

fn is_object_schema(map: &Map<String, Value>) -> bool {
    match map.get("type") {
        Some(Value::String(kind)) => kind == "object",
        Some(Value::Array(kinds)) => kinds.iter().any(|kind| kind == "object"),
        _ => OBJECT_KEYWORDS.iter().any(|keyword| map.contains_key(*keyword)),
    }
}
