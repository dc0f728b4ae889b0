//! Module entry point.
//!
//! Follows the host framework's generic invocation contract: a JSON args
//! document (path in `argv[1]`, stdin otherwise) in, one JSON result
//! document on stdout out. Success exits 0; failures print
//! `{"failed": true, "msg": ...}` and exit 1.

use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde_json::json;

use proxmox_realm_info::{ModuleParams, run_module};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let args = read_args().context("failed to read module arguments")?;

    let params: ModuleParams = match serde_json::from_str(&args) {
        Ok(params) => params,
        Err(e) => return fail(&format!("failed to parse module arguments: {e}")),
    };

    match run_module(&params).await {
        Ok(info) => {
            println!("{}", serde_json::to_string(&info)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => fail(&e.to_string()),
    }
}

/// Print a failure document and signal a non-zero exit.
fn fail(msg: &str) -> Result<ExitCode> {
    println!("{}", json!({ "failed": true, "msg": msg }));
    Ok(ExitCode::FAILURE)
}

fn read_args() -> Result<String> {
    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read args file {path}")),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
