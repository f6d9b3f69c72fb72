//! Typed access to the declarative option map a format is built from.

use indexmap::IndexMap;

use husk_core::Severity;
use husk_params::value_type_name;

use crate::{Error, Result};

/// The format-specific options collected at adapter declaration.
///
/// Values are taken out by name with the typed accessors; names left behind
/// after a format consumed its options were never declared by it (the adapter
/// validator reports those before construction).
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    values: IndexMap<String, toml::Value>,
}

impl FormatOptions {
    pub fn new(values: IndexMap<String, toml::Value>) -> Self {
        Self { values }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<toml::Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn take_str(&mut self, name: &'static str) -> Result<Option<String>> {
        match self.values.shift_remove(name) {
            None => Ok(None),
            Some(toml::Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(Error::InvalidOptionValue {
                name,
                expected: "string",
                found: value_type_name(&other),
            }),
        }
    }

    pub fn take_int(&mut self, name: &'static str) -> Result<Option<i64>> {
        match self.values.shift_remove(name) {
            None => Ok(None),
            Some(toml::Value::Integer(n)) => Ok(Some(n)),
            Some(other) => Err(Error::InvalidOptionValue {
                name,
                expected: "integer",
                found: value_type_name(&other),
            }),
        }
    }

    pub fn take_severity(&mut self, name: &'static str) -> Result<Option<Severity>> {
        match self.take_str(name)? {
            None => Ok(None),
            Some(text) => text
                .parse::<Severity>()
                .map(Some)
                .map_err(|_| Error::InvalidSeverity { name, value: text }),
        }
    }

    /// Take a label-to-severity table; keys are lowercased for
    /// case-insensitive lookup.
    pub fn take_severity_map(
        &mut self,
        name: &'static str,
    ) -> Result<Option<IndexMap<String, Severity>>> {
        match self.values.shift_remove(name) {
            None => Ok(None),
            Some(toml::Value::Table(table)) => {
                let mut map = IndexMap::new();
                for (label, value) in table {
                    let text = value.as_str().ok_or(Error::InvalidOptionValue {
                        name,
                        expected: "table of severity names",
                        found: value_type_name(&value),
                    })?;
                    let severity =
                        text.parse::<Severity>()
                            .map_err(|_| Error::InvalidSeverity {
                                name,
                                value: text.to_string(),
                            })?;
                    map.insert(label.to_lowercase(), severity);
                }
                Ok(Some(map))
            }
            Some(other) => Err(Error::InvalidOptionValue {
                name,
                expected: "table of severity names",
                found: value_type_name(&other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_str() {
        let mut opts = FormatOptions::default();
        opts.insert("result_message", "Style issue.");
        assert_eq!(
            opts.take_str("result_message").unwrap().as_deref(),
            Some("Style issue.")
        );
        assert_eq!(opts.take_str("result_message").unwrap(), None);
    }

    #[test]
    fn test_take_str_wrong_type() {
        let mut opts = FormatOptions::default();
        opts.insert("result_message", 3_i64);
        let err = opts.take_str("result_message").unwrap_err();
        assert!(matches!(err, Error::InvalidOptionValue { name, .. } if name == "result_message"));
    }

    #[test]
    fn test_take_severity() {
        let mut opts = FormatOptions::default();
        opts.insert("diff_severity", "MAJOR");
        assert_eq!(
            opts.take_severity("diff_severity").unwrap(),
            Some(Severity::Major)
        );
    }

    #[test]
    fn test_take_severity_invalid_name() {
        let mut opts = FormatOptions::default();
        opts.insert("diff_severity", "fatal");
        let err = opts.take_severity("diff_severity").unwrap_err();
        assert!(matches!(err, Error::InvalidSeverity { value, .. } if value == "fatal"));
    }

    #[test]
    fn test_take_severity_map_lowercases_keys() {
        let mut table = toml::Table::new();
        table.insert("Error".to_string(), toml::Value::String("major".into()));
        table.insert("NOTE".to_string(), toml::Value::String("minor".into()));

        let mut opts = FormatOptions::default();
        opts.insert("severity_map", toml::Value::Table(table));

        let map = opts.take_severity_map("severity_map").unwrap().unwrap();
        assert_eq!(map.get("error"), Some(&Severity::Major));
        assert_eq!(map.get("note"), Some(&Severity::Minor));
    }
}
