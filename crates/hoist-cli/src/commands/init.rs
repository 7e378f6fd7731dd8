use anyhow::Context;
use hoist_core::config::CONFIG_FILE;
use std::path::Path;

const TEMPLATE: &str = r#"[aws]
# region = "us-east-1"

[image]
# repository = "zip-map-processor"
# tag = "latest"
# platform = "linux/amd64"
# context = "."

[function]
# name = "zip-map-processor"
"#;

/// Write a starter config file, leaving an existing one alone.
pub fn init(config_path: Option<&Path>) -> anyhow::Result<()> {
    let path = config_path.unwrap_or(Path::new(CONFIG_FILE));

    if path.exists() {
        eprintln!("{} already exists, skipping", path.display());
        return Ok(());
    }

    std::fs::write(path, TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", path.display());

    println!();
    println!("Next steps:");
    println!();
    println!("  1. Set the repository and function name in {}", path.display());
    println!("  2. Make sure a Dockerfile exists in the build context");
    println!("  3. Deploy:");
    println!("     hoist deploy");

    Ok(())
}
