// Configuration loader
// Reads the API key, port, and file paths from the process environment

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use super::constants;
use super::settings::{ChatConfig, Config, ServerConfig};

/// Load configuration from the process environment.
///
/// `GROQ_API_KEY` is the only required variable; everything else has a
/// working default. A `.env` file, if any, is loaded by `main` before
/// this runs.
pub fn load_config() -> Result<Config> {
    let api_key = match std::env::var("GROQ_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => bail!(
            "No API key configured. Set the environment variable:\n\n\
            export GROQ_API_KEY=\"gsk_...\"\n\n\
            or put it in a .env file next to the binary."
        ),
    };

    let port: u16 = match std::env::var("PORT") {
        Ok(value) => value
            .parse()
            .with_context(|| format!("PORT is not a valid port number: {value}"))?,
        Err(_) => constants::DEFAULT_PORT,
    };

    let data_file = std::env::var("STUDENTS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            // Resolved against the working directory so the same binary works
            // from a checkout and from a deploy bundle.
            std::env::current_dir()
                .map(|cwd| cwd.join(constants::DEFAULT_DATA_FILE))
                .unwrap_or_else(|_| PathBuf::from(constants::DEFAULT_DATA_FILE))
        });

    let static_dir = optional_dir("STATIC_DIR", constants::DEFAULT_STATIC_DIR);
    let assets_dir = optional_dir("ASSETS_DIR", constants::DEFAULT_ASSETS_DIR);

    Ok(Config {
        api_key,
        data_file,
        server: ServerConfig {
            bind_address: format!("0.0.0.0:{port}"),
            static_dir,
            assets_dir,
        },
        chat: ChatConfig::default(),
    })
}

/// Resolve a static directory from `var`, falling back to `default`.
/// Either way the directory must actually exist to be served.
fn optional_dir(var: &str, default: &str) -> Option<PathBuf> {
    let dir = std::env::var(var)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default));
    dir.is_dir().then_some(dir)
}

#[cfg(test)]
mod tests {
    // load_config reads process-global environment state, which races with
    // parallel tests; covered by running the binary, not unit tests.
}
