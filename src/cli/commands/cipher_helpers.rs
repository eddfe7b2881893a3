use std::io::Read;
use std::path::Path;

use crate::cli::TransformArgs;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::alphabet::alphabet_index;
use crate::core::errors::{CipherSphereError, Result};
use crate::core::models::cipher_key::CipherKey;
use crate::core::models::cipher_method::{CipherMethod, Direction};
use crate::core::models::cipher_request::CipherRequest;
use crate::core::services::cipher_engine::CipherEngine;

/// Shared body of `encrypt` and `decrypt`.
///
/// Resolves method, key and text from the arguments (falling back to the
/// config defaults), then runs the engine. `[defaults] key` only applies
/// when the method in use is `[defaults] method`.
pub fn run_transform(
    args: &TransformArgs,
    direction: Direction,
    config: &AppConfig,
    quiet: bool,
) -> Result<String> {
    let method = resolve_method(args.method.as_deref(), config)?;
    let config_key = if config.default_method()? == Some(method) {
        config.defaults.key.as_deref()
    } else {
        None
    };
    let key = CipherKey::from_arg(args.key.as_deref().or(config_key));
    let text = read_input(args.text.as_deref(), args.file.as_deref())?;

    if !quiet && !text.is_empty() && !text.chars().any(|c| alphabet_index(c).is_some()) {
        output::warning("Input has no ASCII letters; the output will equal the input");
    }

    CipherEngine.transform(&CipherRequest {
        method,
        direction,
        key,
        text,
    })
}

/// `--method` wins over `[defaults] method`; one of them is required.
fn resolve_method(arg: Option<&str>, config: &AppConfig) -> Result<CipherMethod> {
    if let Some(name) = arg {
        return name.parse();
    }
    config
        .default_method()?
        .ok_or_else(|| CipherSphereError::InvalidConfig {
            detail: "No cipher method given.\n\n  \
                     Pass --method atbash|caesar|vigenere, or set it in config.toml:\n    \
                     [defaults]\n    \
                     method = \"caesar\""
                .into(),
        })
}

/// Read the text to transform: positional argument, then file, then stdin.
///
/// One trailing line break is dropped from file and stdin input, since the
/// result is printed with its own.
pub fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    let raw = match file {
        Some(path) => {
            if !path.exists() {
                return Err(CipherSphereError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            std::fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(strip_line_break(raw))
}

fn strip_line_break(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}
