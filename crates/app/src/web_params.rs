//! Initial form values from the browser URL.
//!
//! Usage: `index.html?temperature=33&humidity=60`

#![cfg(target_arch = "wasm32")]

use crate::cli::{parse_number, CliArgs};

/// Reads `?temperature=` and `?humidity=` from the page URL into `args`.
/// Missing parameters are left as they are; malformed ones are returned as errors.
pub fn apply_query_params(args: &mut CliArgs) -> Result<(), String> {
    let Some(params) = query_params() else {
        return Ok(());
    };
    if let Some(value) = non_empty(params.get("temperature")) {
        args.temperature = Some(parse_number("temperature", &value)?);
    }
    if let Some(value) = non_empty(params.get("humidity")) {
        args.humidity = Some(parse_number("humidity", &value)?);
    }
    Ok(())
}

fn query_params() -> Option<web_sys::UrlSearchParams> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
