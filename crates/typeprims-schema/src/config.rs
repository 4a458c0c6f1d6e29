/// Controls how the registry compiles and loads schema types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// When true, object schemas reject properties they do not declare.
    pub strict_mode: bool,
    /// When true, registered types may replace builtin primitives.
    pub allow_builtin_override: bool,
    /// Maximum number of schemas loaded from a directory.
    pub max_types_from_directory: usize,
    /// Maximum bytes allowed per schema file loaded from a directory.
    pub max_schema_file_size: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            allow_builtin_override: false,
            max_types_from_directory: 256,
            max_schema_file_size: 256 * 1024,
        }
    }
}
