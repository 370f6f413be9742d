use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from("prosemap.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Prosemap Configuration

[analysis]
# Language tag passed along to the grammar matcher
language = "en-US"
# Plain text shorter than this is not scored for readability
min_readability_chars = 50

[output]
default_format = "terminal"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created prosemap.toml configuration file");

    Ok(())
}
