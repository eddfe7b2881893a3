use colored::Colorize;

use crate::cli::output;
use crate::core::models::cipher_method::CipherMethod;

/// Execute the `ciphersphere methods` command.
pub fn execute(json: bool) {
    if json {
        let listing: Vec<serde_json::Value> = CipherMethod::ALL
            .iter()
            .map(|m| serde_json::json!({ "method": m, "key": m.key_requirement() }))
            .collect();
        output::json(&listing);
        return;
    }

    output::header("ciphersphere methods");
    for method in CipherMethod::ALL {
        println!(
            "  {:<10} {}",
            method.as_str().cyan(),
            method.key_requirement().dimmed()
        );
    }
}
