//! Descriptors for the named settings a stage accepts.

/// Human-readable name of a TOML value's type, for error messages.
pub fn value_type_name(value: &toml::Value) -> &'static str {
    match value {
        toml::Value::String(_) => "string",
        toml::Value::Integer(_) => "integer",
        toml::Value::Float(_) => "float",
        toml::Value::Boolean(_) => "boolean",
        toml::Value::Datetime(_) => "datetime",
        toml::Value::Array(_) => "array",
        toml::Value::Table(_) => "table",
    }
}

/// Declared value type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Str,
    Int,
    Float,
    Bool,
    Path,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Str => "string",
            ParamType::Int => "int",
            ParamType::Float => "float",
            ParamType::Bool => "bool",
            ParamType::Path => "path",
        }
    }

    /// Whether a caller-supplied value is acceptable for this type.
    ///
    /// Integers are accepted where a float is declared; paths are plain
    /// strings on the wire.
    pub fn accepts(&self, value: &toml::Value) -> bool {
        match self {
            ParamType::Str | ParamType::Path => matches!(value, toml::Value::String(_)),
            ParamType::Int => matches!(value, toml::Value::Integer(_)),
            ParamType::Float => {
                matches!(value, toml::Value::Float(_) | toml::Value::Integer(_))
            }
            ParamType::Bool => matches!(value, toml::Value::Boolean(_)),
        }
    }
}

/// One named setting accepted by a stage.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    name: String,
    param_type: ParamType,
    required: bool,
    default: Option<toml::Value>,
    description: Option<String>,
}

impl ParamSpec {
    /// A setting the caller must supply.
    pub fn required(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            param_type,
            required: true,
            default: None,
            description: None,
        }
    }

    /// A setting the caller may omit.
    pub fn optional(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            param_type,
            required: false,
            default: None,
            description: None,
        }
    }

    /// Attach a default used when the caller omits the setting.
    pub fn with_default(mut self, value: impl Into<toml::Value>) -> Self {
        self.default = Some(value.into());
        self.required = false;
        self
    }

    /// Attach a one-line documentation string.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn param_type(&self) -> ParamType {
        self.param_type
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default(&self) -> Option<&toml::Value> {
        self.default.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
