use std::path::Path;

use crate::cli::commands::cipher_helpers::read_input;
use crate::core::errors::Result;
use crate::core::models::cipher_request::{CipherOutcome, CipherRequest, WireRequest};
use crate::core::services::cipher_engine::CipherEngine;

/// Execute the `ciphersphere apply` command.
///
/// Every failure, including an unreadable or malformed request, is folded
/// into the returned outcome.
pub fn execute(request: Option<&Path>) -> CipherOutcome {
    match load(request) {
        Ok(request) => CipherEngine.apply(&request),
        Err(e) => CipherOutcome::from(Err(e)),
    }
}

fn load(request: Option<&Path>) -> Result<CipherRequest> {
    let body = read_input(None, request)?;
    WireRequest::from_json(&body)?.into_request()
}
