use crate::cli::TransformArgs;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::cipher_method::Direction;

/// Execute the `ciphersphere encrypt` command.
pub fn execute(args: &TransformArgs, config: &AppConfig, quiet: bool) -> Result<String> {
    super::cipher_helpers::run_transform(args, Direction::Encrypt, config, quiet)
}
