//! Write a vincheck config file

use std::path::Path;

use vincheck::config::Config;
use vincheck::output::{OperationResult, OutputMode};

/// Save `config` to `path`, refusing to overwrite unless `force` is set
pub fn init(path: &Path, config: Config, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    if path.exists() && !force {
        let result = OperationResult {
            success: false,
            message: format!(
                "Config already exists at {}. Use --force to overwrite.",
                path.display()
            ),
        };
        result.render(mode);
        return Ok(());
    }

    config.save_to(path)?;

    let result = OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    };
    result.render(mode);

    Ok(())
}
