//! `actionforge share` - Encode/decode shareable configuration tokens

use actionforge::prelude::*;
use anyhow::{Context, Result};
use url::Url;

pub fn encode_selection(
    selection: Selection,
    include_workflow: bool,
    base_url: Option<&str>,
    copy: bool,
) -> Result<()> {
    let selection = selection.normalized();
    let mut payload = SharePayload::new(selection);
    if include_workflow {
        payload = payload.with_workflow(Some(render(&selection)?));
    }

    let text = match base_url {
        Some(base) => {
            let base = Url::parse(base).with_context(|| format!("invalid base URL: {base}"))?;
            share_url(&base, &payload).to_string()
        }
        None => encode(&payload),
    };

    println!("{text}");

    if copy {
        if SystemClipboard.copy(&text) {
            eprintln!("copied to clipboard");
        } else {
            eprintln!("note: could not copy to clipboard");
        }
    }

    Ok(())
}

pub fn decode_token(token: &str, render_workflow: bool) -> Result<()> {
    let decoded = if token.contains("://") {
        let url = Url::parse(token).with_context(|| format!("invalid URL: {token}"))?;
        match payload_from_url(&url) {
            Ok(Some(payload)) => Ok(payload),
            Ok(None) => {
                eprintln!("note: URL carries no configuration; nothing to load");
                return Ok(());
            }
            Err(err) => Err(err),
        }
    } else {
        decode(token)
    };

    // A malformed token is recoverable: report it and load nothing.
    let payload = match decoded {
        Ok(payload) => payload,
        Err(GeneratorError::InvalidToken(reason)) => {
            eprintln!("note: invalid share token ({reason}); nothing to load");
            return Ok(());
        }
        Err(other) => return Err(other.into()),
    };

    if render_workflow {
        match payload.workflow.clone() {
            Some(workflow) => print!("{workflow}"),
            None => print!("{}", render(&payload.selection())?),
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }

    Ok(())
}
