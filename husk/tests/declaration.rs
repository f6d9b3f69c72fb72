//! Adapter declaration validation and metadata generation.

use std::path::Path;

use husk::{
    Adapter, Error, FileContext, Finding, FormatError, ParamMap, ParamSpec, ParamType,
    ProcessError, ResultContext, ResultFormat, StageError, StageParams, Tool,
};

struct NoopTool;

impl Tool for NoopTool {
    fn create_arguments(
        &self,
        _file: &FileContext<'_>,
        _config_file: Option<&Path>,
        _params: &ParamMap,
    ) -> Result<Vec<String>, StageError> {
        Ok(Vec::new())
    }
}

struct NullFormat;

impl ResultFormat for NullFormat {
    fn process(
        &self,
        _ctx: &ResultContext<'_>,
        _params: &ParamMap,
    ) -> Result<Vec<Finding>, ProcessError> {
        Ok(Vec::new())
    }
}

fn regex_builder() -> husk::AdapterBuilder {
    Adapter::builder("xlint", NoopTool)
        .output_format("regex")
        .option("output_regex", r"(?P<message>.+)")
}

#[test]
fn no_output_stream_selected() {
    let err = regex_builder()
        .use_stdout(false)
        .use_stderr(false)
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::NoOutputStreamSelected));
}

#[test]
fn invalid_output_format() {
    let err = Adapter::builder("xlint", NoopTool)
        .output_format("json")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidOutputFormat { name } if name == "json"));
}

#[test]
fn unknown_options_reported_sorted_in_one_error() {
    let err = regex_builder()
        .option("zeta", true)
        .option("alpha", 1_i64)
        .build()
        .unwrap_err();
    match err {
        Error::UnknownOptions { names } => assert_eq!(names, vec!["alpha", "zeta"]),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn conflicting_result_stage() {
    let err = regex_builder().custom_format(NullFormat).build().unwrap_err();
    assert!(matches!(err, Error::ConflictingResultStage));
}

#[test]
fn missing_result_stage() {
    let err = Adapter::builder("xlint", NoopTool).build().unwrap_err();
    assert!(matches!(err, Error::MissingResultStage));
}

#[test]
fn severity_map_requires_severity_group() {
    let mut map = toml::Table::new();
    map.insert("error".to_string(), toml::Value::String("major".into()));

    let err = Adapter::builder("xlint", NoopTool)
        .output_format("regex")
        .option("output_regex", r"(?P<message>.+)")
        .option("severity_map", toml::Value::Table(map))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Format(FormatError::SeverityMapWithoutSeverityGroup)
    ));
}

#[test]
fn prerequisite_fail_message_defaults_when_command_set() {
    let adapter = regex_builder()
        .prerequisite_check(["xlint", "--version"])
        .build()
        .unwrap();
    assert_eq!(
        adapter.spec().prerequisite_check_fail_message.as_deref(),
        Some("Prerequisite check failed.")
    );
}

#[test]
fn prerequisite_fail_message_absent_without_command() {
    let adapter = regex_builder().build().unwrap();
    assert_eq!(adapter.spec().prerequisite_check_fail_message, None);
}

#[test]
fn custom_prerequisite_fail_message_is_kept() {
    let adapter = regex_builder()
        .prerequisite_check(["xlint", "--version"])
        .prerequisite_check_fail_message("xlint cannot start.")
        .build()
        .unwrap();
    assert_eq!(
        adapter.spec().prerequisite_check_fail_message.as_deref(),
        Some("xlint cannot start.")
    );
}

struct ModalTool;

impl Tool for ModalTool {
    fn config_params(&self) -> StageParams {
        StageParams::new([
            ParamSpec::optional("mode", ParamType::Str).with_description("duplicate, loses"),
            ParamSpec::optional("style", ParamType::Str).with_description("config style"),
        ])
    }

    fn argument_params(&self) -> StageParams {
        StageParams::new([
            ParamSpec::required("mode", ParamType::Str).with_description("lint mode"),
            ParamSpec::optional("aggressive", ParamType::Bool).with_default(false),
        ])
    }

    fn create_arguments(
        &self,
        _file: &FileContext<'_>,
        _config_file: Option<&Path>,
        _params: &ParamMap,
    ) -> Result<Vec<String>, StageError> {
        Ok(Vec::new())
    }
}

#[test]
fn metadata_merges_with_argument_stage_precedence() {
    let adapter = Adapter::builder("xlint", ModalTool)
        .description("Lints things.")
        .output_format("regex")
        .option("output_regex", r"(?P<message>.+)")
        .build()
        .unwrap();

    let metadata = adapter.metadata();
    let mode = metadata.get("mode").unwrap();
    assert!(mode.is_required());
    assert_eq!(mode.description(), Some("lint mode"));
    assert!(metadata.contains("aggressive"));
    assert!(metadata.contains("style"));

    let description = metadata.description().unwrap();
    assert!(description.starts_with("Lints things."));
    assert!(description.contains("wraps the 'xlint' executable"));
}

struct LimitedFormat;

impl ResultFormat for LimitedFormat {
    fn params(&self) -> StageParams {
        StageParams::new([
            ParamSpec::optional("max_issues", ParamType::Int).with_default(10_i64),
        ])
    }

    fn process(
        &self,
        _ctx: &ResultContext<'_>,
        _params: &ParamMap,
    ) -> Result<Vec<Finding>, ProcessError> {
        Ok(Vec::new())
    }
}

#[test]
fn metadata_includes_custom_stage_params() {
    let adapter = Adapter::builder("xlint", NoopTool)
        .custom_format(LimitedFormat)
        .build()
        .unwrap();
    assert!(adapter.metadata().contains("max_issues"));
}

#[test]
fn debug_names_the_wrapped_executable() {
    let adapter = regex_builder().build().unwrap();
    assert_eq!(format!("{adapter:?}"), "<Adapter wrapping 'xlint'>");
}

#[test]
fn validation_is_deterministic() {
    let first = regex_builder().option("bogus", true).build().unwrap_err();
    let second = regex_builder().option("bogus", true).build().unwrap_err();
    assert_eq!(first.to_string(), second.to_string());
}
