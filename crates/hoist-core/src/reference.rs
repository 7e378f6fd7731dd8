use std::fmt;

/// Tag given to the locally built image.
///
/// The tag step always re-tags `{repository}:latest`, even when the remote
/// tag is something else.
pub const LOCAL_TAG: &str = "latest";

/// Names derived from the account, region, repository and tag.
///
/// Plain string concatenation; nothing is validated here, malformed input
/// surfaces as a failure from docker or aws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReferences {
    /// `{account}.dkr.ecr.{region}.amazonaws.com/{repository}`
    pub registry_uri: String,
    /// `{registry_uri}:{tag}`
    pub image_ref: String,
    /// `{repository}:latest`
    pub local_image: String,
}

impl ImageReferences {
    pub fn compose(account_id: &str, region: &str, repository: &str, tag: &str) -> Self {
        let registry_uri = format!("{account_id}.dkr.ecr.{region}.amazonaws.com/{repository}");
        let image_ref = format!("{registry_uri}:{tag}");
        let local_image = format!("{repository}:{LOCAL_TAG}");

        Self {
            registry_uri,
            image_ref,
            local_image,
        }
    }
}

impl fmt::Display for ImageReferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registry:    {}", self.registry_uri)?;
        writeln!(f, "Image:       {}", self.image_ref)?;
        write!(f, "Local image: {}", self.local_image)
    }
}
