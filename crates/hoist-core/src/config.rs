use std::path::Path;

use serde::Deserialize;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "hoist.toml";

/// hoist.toml configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HoistConfig {
    #[serde(default)]
    pub aws: AwsConfig,
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub function: FunctionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AwsConfig {
    /// AWS region for ECR and Lambda (defaults to us-east-1)
    #[serde(default = "default_region")]
    pub region: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageConfig {
    /// ECR repository name, also used as the local image name
    #[serde(default = "default_repository")]
    pub repository: String,
    /// Remote tag pushed to ECR
    #[serde(default = "default_tag")]
    pub tag: String,
    /// Target platform passed to `docker build --platform`
    #[serde(default = "default_platform")]
    pub platform: String,
    /// Build context directory holding the Dockerfile
    #[serde(default = "default_context")]
    pub context: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionConfig {
    /// Lambda function name
    #[serde(default = "default_function_name")]
    pub name: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            repository: default_repository(),
            tag: default_tag(),
            platform: default_platform(),
            context: default_context(),
        }
    }
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self {
            name: default_function_name(),
        }
    }
}

/// Values given on the command line that take precedence over hoist.toml.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub region: Option<String>,
    pub repository: Option<String>,
    pub tag: Option<String>,
    pub function: Option<String>,
}

impl HoistConfig {
    /// Load from hoist.toml in the given directory, or return defaults if not found.
    pub fn load(project_dir: &Path) -> crate::Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load_file(&config_path)
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from an explicit path. A missing file is an error.
    pub fn load_file(config_path: &Path) -> crate::Result<Self> {
        let content =
            std::fs::read_to_string(config_path).map_err(|e| crate::Error::ConfigLoad {
                path: config_path.to_path_buf(),
                source: e,
            })?;
        toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(region) = &overrides.region {
            self.aws.region.clone_from(region);
        }
        if let Some(repository) = &overrides.repository {
            self.image.repository.clone_from(repository);
        }
        if let Some(tag) = &overrides.tag {
            self.image.tag.clone_from(tag);
        }
        if let Some(function) = &overrides.function {
            self.function.name.clone_from(function);
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_owned()
}

fn default_repository() -> String {
    "zip-map-processor".to_owned()
}

fn default_tag() -> String {
    "latest".to_owned()
}

fn default_platform() -> String {
    "linux/amd64".to_owned()
}

fn default_context() -> String {
    ".".to_owned()
}

fn default_function_name() -> String {
    "zip-map-processor".to_owned()
}
