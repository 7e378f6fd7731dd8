use crate::command::CommandError;
use serde::Deserialize;
use std::fmt;

/// Deployment-relevant slice of `aws lambda get-function`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionStatus {
    pub function_name: String,
    pub state: Option<String>,
    pub last_update_status: Option<String>,
    pub last_modified: Option<String>,
    pub image_uri: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetFunctionOutput {
    configuration: FunctionConfiguration,
    code: Option<FunctionCode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FunctionConfiguration {
    function_name: String,
    state: Option<String>,
    last_update_status: Option<String>,
    last_modified: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FunctionCode {
    image_uri: Option<String>,
}

impl FunctionStatus {
    pub fn from_json(json: &str) -> Result<Self, StatusError> {
        let parsed: GetFunctionOutput =
            serde_json::from_str(json).map_err(|e| StatusError::Parse { source: e })?;

        Ok(Self {
            function_name: parsed.configuration.function_name,
            state: parsed.configuration.state,
            last_update_status: parsed.configuration.last_update_status,
            last_modified: parsed.configuration.last_modified,
            image_uri: parsed.code.and_then(|c| c.image_uri),
        })
    }

    /// `Active` and the last update `Successful`.
    pub fn is_ready(&self) -> bool {
        self.state.as_deref() == Some("Active")
            && self.last_update_status.as_deref() == Some("Successful")
    }
}

impl fmt::Display for FunctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_owned());
        writeln!(f, "Function:      {}", self.function_name)?;
        writeln!(f, "State:         {}", show(&self.state))?;
        writeln!(f, "Last update:   {}", show(&self.last_update_status))?;
        writeln!(f, "Last modified: {}", show(&self.last_modified))?;
        write!(f, "Image:         {}", show(&self.image_uri))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("failed to query function")]
    Query { source: CommandError },

    #[error("unexpected get-function output")]
    Parse { source: serde_json::Error },
}
