//! Routing of caller-supplied settings across stages.

use std::fmt;

use indexmap::IndexMap;

use crate::{Error, ParamSpec, Result, value_type_name};

/// Flat name → value map as supplied by the caller.
pub type ParamMap = IndexMap<String, toml::Value>;

/// The ordered set of settings one stage accepts.
#[derive(Debug, Clone, Default)]
pub struct StageParams {
    specs: IndexMap<String, ParamSpec>,
}

impl StageParams {
    pub fn new(specs: impl IntoIterator<Item = ParamSpec>) -> Self {
        Self {
            specs: specs
                .into_iter()
                .map(|spec| (spec.name().to_string(), spec))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.specs.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParamSpec> {
        self.specs.values()
    }

    /// Filter the caller map down to this stage's declared settings.
    ///
    /// Values come from the caller map or the declared default, in that
    /// order. A required setting absent from both is an error; an optional
    /// setting with no default is simply left out of the routed map.
    pub fn route(&self, caller: &ParamMap) -> Result<ParamMap> {
        let mut routed = ParamMap::new();
        for spec in self.specs.values() {
            match caller.get(spec.name()) {
                Some(value) => {
                    if !spec.param_type().accepts(value) {
                        return Err(Error::InvalidType {
                            name: spec.name().to_string(),
                            expected: spec.param_type().as_str(),
                            found: value_type_name(value),
                        });
                    }
                    routed.insert(spec.name().to_string(), value.clone());
                }
                None => match spec.default() {
                    Some(default) => {
                        routed.insert(spec.name().to_string(), default.clone());
                    }
                    None if spec.is_required() => {
                        return Err(Error::MissingRequired {
                            name: spec.name().to_string(),
                        });
                    }
                    None => {}
                },
            }
        }
        Ok(routed)
    }
}

/// Merge stage descriptor sets into the adapter's full accepted surface.
///
/// Sets are given in precedence order: on a duplicate name, the first
/// occurrence wins, documentation included.
pub fn merge(stages: impl IntoIterator<Item = StageParams>) -> MergedParams {
    let mut specs = IndexMap::new();
    for stage in stages {
        for (name, spec) in stage.specs {
            specs.entry(name).or_insert(spec);
        }
    }
    MergedParams {
        specs,
        description: None,
    }
}

/// The union of all stages' settings, used for help generation and for
/// rejecting unknown caller-supplied names.
#[derive(Debug, Clone)]
pub struct MergedParams {
    specs: IndexMap<String, ParamSpec>,
    description: Option<String>,
}

impl MergedParams {
    /// Attach the adapter-level description shown above the settings list.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.specs.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParamSpec> {
        self.specs.values()
    }

    /// Reject caller-supplied names no stage declared.
    ///
    /// All offending names are reported sorted, in one error.
    pub fn check_unknown(&self, caller: &ParamMap) -> Result<()> {
        let mut unknown: Vec<String> = caller
            .keys()
            .filter(|name| !self.specs.contains_key(*name))
            .cloned()
            .collect();
        if unknown.is_empty() {
            return Ok(());
        }
        unknown.sort();
        Err(Error::Unknown { names: unknown })
    }
}

impl fmt::Display for MergedParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(description) = &self.description {
            writeln!(f, "{description}")?;
            if !self.specs.is_empty() {
                writeln!(f)?;
            }
        }
        for spec in self.specs.values() {
            write!(f, "  {} ({})", spec.name(), spec.param_type().as_str())?;
            if spec.is_required() {
                write!(f, " [required]")?;
            } else if let Some(default) = spec.default() {
                write!(f, " [default: {default}]")?;
            }
            if let Some(doc) = spec.description() {
                write!(f, ": {doc}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
