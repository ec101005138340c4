use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{safe_truncate, MAX_CONSOLE_BODY_CHARS};

/// Pretty-print a JSON body, falling back to the raw text
pub fn format_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| serde_json::to_string_pretty(&json).ok())
        .unwrap_or_else(|| body.to_string())
}

fn print_truncated(text: &str) {
    if text.chars().count() > MAX_CONSOLE_BODY_CHARS {
        println!("{}", safe_truncate(text, MAX_CONSOLE_BODY_CHARS));
        println!("\n{}", format!("... (truncated, total {} bytes)", text.len()).bright_black());
    } else {
        println!("{}", text);
    }
}

/// Log HTTP request details for debugging (console output)
pub fn log_request(method: &reqwest::Method, url: &str, body: Option<&serde_json::Value>, verbose: bool) {
    log::debug!("{} {}", method, url);

    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());

    println!("{}: {}", "Method".bright_yellow(), method);
    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        println!("{}: {}", "URL".bright_yellow(), url);
        println!("{}: {}", "Host".bright_yellow(), parsed_url.host_str().unwrap_or("unknown"));
        println!("{}: {}", "Path".bright_yellow(), parsed_url.path());
    } else {
        println!("{}: {}", "URL".bright_yellow(), url);
    }

    if let Some(body) = body {
        println!("\n{}", "Request Body:".bright_yellow());
        match serde_json::to_string_pretty(body) {
            Ok(json) => print_truncated(&json),
            Err(e) => println!("{}", format!("Error serializing request: {}", e).red()),
        }
    }

    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Log HTTP response details for debugging (console output)
pub fn log_response(status: &reqwest::StatusCode, headers: &reqwest::header::HeaderMap, body: &str, verbose: bool) {
    log::debug!("response {} ({} bytes)", status.as_u16(), body.len());

    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_green());
    println!("{}", "📥 HTTP RESPONSE DEBUG".bright_green().bold());
    println!("{}", "═".repeat(80).bright_green());

    println!("{}: {} {}",
        "Status".bright_yellow(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );

    println!("\n{}", "Headers:".bright_yellow());
    for (name, value) in headers.iter() {
        if let Ok(val_str) = value.to_str() {
            println!("  {}: {}", name.as_str().bright_white(), val_str);
        }
    }

    println!("\n{}", "Response Body:".bright_yellow());
    print_truncated(&format_body(body));

    println!("{}", "═".repeat(80).bright_green());
    println!();
}

/// Write one request/response exchange to a timestamped file in `logs_dir`.
///
/// Returns the path of the written file.
pub fn log_exchange_to_file(
    logs_dir: &Path,
    method: &reqwest::Method,
    url: &str,
    request_body: Option<&serde_json::Value>,
    status: &reqwest::StatusCode,
    response_body: &str,
) -> Result<PathBuf> {
    let now = chrono::Utc::now();
    let filename = format!(
        "exchange-{}-{}.txt",
        now.format("%Y%m%dT%H%M%S%.6f"),
        method.as_str().to_lowercase()
    );
    let file_path = logs_dir.join(&filename);

    let mut log_content = String::new();
    log_content.push_str("HTTP EXCHANGE LOG\n");
    log_content.push_str("=================\n\n");
    log_content.push_str(&format!("Timestamp: {}\n", now.to_rfc3339()));
    log_content.push_str(&format!("Request: {} {}\n\n", method, url));

    if let Some(body) = request_body {
        log_content.push_str("Request Body:\n");
        match serde_json::to_string_pretty(body) {
            Ok(json) => log_content.push_str(&json),
            Err(e) => log_content.push_str(&format!("Error serializing request: {}", e)),
        }
        log_content.push_str("\n\n");
    }

    log_content.push_str(&format!("Status: {} {}\n\n",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    ));
    log_content.push_str("Response Body:\n");
    log_content.push_str(&format_body(response_body));
    log_content.push('\n');

    log_content.push_str("\n---\n");
    log_content.push_str(&format!("Response Size: {} bytes\n", response_body.len()));

    fs::write(&file_path, log_content)
        .with_context(|| format!("Failed to write exchange log to {}", file_path.display()))?;

    log::debug!("exchange logged to {}", file_path.display());

    Ok(file_path)
}
