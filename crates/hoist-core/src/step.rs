use std::fmt;

/// The deploy steps, in the only order they ever run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    ResolveIdentity,
    Authenticate,
    Build,
    Tag,
    Push,
    UpdateFunction,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::ResolveIdentity,
        Step::Authenticate,
        Step::Build,
        Step::Tag,
        Step::Push,
        Step::UpdateFunction,
    ];

    /// Progress banner printed before the step runs.
    pub fn banner(self) -> &'static str {
        match self {
            Step::ResolveIdentity => "Resolving AWS account...",
            Step::Authenticate => "Logging in to ECR...",
            Step::Build => "Building image...",
            Step::Tag => "Tagging image...",
            Step::Push => "Pushing image to ECR...",
            Step::UpdateFunction => "Updating Lambda function...",
        }
    }

    /// 1-based position in the pipeline.
    pub fn number(self) -> usize {
        Step::ALL
            .iter()
            .position(|s| *s == self)
            .map_or(0, |i| i + 1)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::ResolveIdentity => "resolve identity",
            Step::Authenticate => "authenticate",
            Step::Build => "build",
            Step::Tag => "tag",
            Step::Push => "push",
            Step::UpdateFunction => "update function",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_numbered_in_order() {
        let numbers: Vec<usize> = Step::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn display_names_are_lowercase() {
        assert_eq!(Step::UpdateFunction.to_string(), "update function");
        assert_eq!(Step::ResolveIdentity.to_string(), "resolve identity");
    }
}
