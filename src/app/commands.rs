use crate::adapters::frames::FileFrames;
use crate::config::{Command, HelpersConfig};
use crate::core::BaseHelpers;
use crate::utils::error::{BaseError, Result};
use crate::utils::validation;
use serde_json::Value;

/// 單一指令的執行結果
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub output: String,
    pub warnings: Vec<String>,
    /// 驗證類指令失敗時為 false，用來決定 exit code
    pub passed: bool,
}

impl Outcome {
    fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            warnings: Vec::new(),
            passed: true,
        }
    }
}

pub fn execute(command: &Command, config: &HelpersConfig) -> Result<Outcome> {
    let mut helpers = BaseHelpers::new(config.name_rules(), config.warnings_data());

    let mut outcome = match command {
        Command::Normalize { text } => Outcome::ok(helpers.normalize_whitespace(text)),

        Command::ValidateName { name, quiet } => {
            let show_warnings = config.show_warnings() && !quiet;
            let valid = helpers.is_valid_entity_name(name, show_warnings);
            Outcome {
                output: valid.to_string(),
                warnings: Vec::new(),
                passed: valid,
            }
        }

        Command::UrlParams { url } => {
            let params = helpers.get_url_params(url);
            Outcome::ok(serde_json::to_string_pretty(&params)?)
        }

        Command::NeatJoin { first, second } => Outcome::ok(helpers.neat_join(first, second)),

        Command::IsEmpty { json } => {
            let value: Value = serde_json::from_str(json)?;
            Outcome::ok(helpers.is_empty(&value).to_string())
        }

        Command::Duplicate {
            input,
            field,
            key,
            index,
            value,
        } => {
            let data: Value = serde_json::from_str(&std::fs::read_to_string(input)?)?;
            let candidate = parse_candidate(value);
            tracing::debug!("Checking {} for duplicate '{}' = {}", input.display(), field, candidate);

            let duplicate = match &data {
                Value::Object(mapping) => helpers.is_duplicate_input(
                    mapping,
                    field,
                    key.as_deref().unwrap_or_default(),
                    &candidate,
                ),
                Value::Array(entries) => {
                    helpers.is_duplicate_array_input(entries, field, *index, &candidate)
                }
                _ => {
                    return Err(BaseError::InvalidConfigValueError {
                        field: "input".to_string(),
                        value: input.display().to_string(),
                        reason: "Expected a JSON object or array".to_string(),
                    })
                }
            };
            Outcome::ok(duplicate.to_string())
        }

        Command::Iframe {
            frames_dir,
            id,
            content_file,
        } => {
            validation::validate_path("frames_dir", &frames_dir.to_string_lossy())?;
            validation::validate_non_empty_string("id", id)?;
            let content = std::fs::read_to_string(content_file)?;

            let mut frames = FileFrames::new(frames_dir);
            helpers.add_content_to_iframe_with_id(&mut frames, id, &content);
            Outcome::ok(String::new())
        }
    };

    outcome.warnings = helpers.into_warnings().warnings().to_vec();
    Ok(outcome)
}

/// 能解析成 JSON 就用 JSON，否則當成字串
fn parse_candidate(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
