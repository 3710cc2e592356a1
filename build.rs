use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Forward .env entries to option_env!() in config.rs
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using built-in defaults (API port 5000, 60s OTP cooldown).");
    }

    for key in [
        "API_BASE_URL",
        "API_DEFAULT_PORT",
        "OTP_COOLDOWN_SECONDS",
        "DEBOUNCE_MS",
        "MIN_RETRY_COOLDOWN_SECONDS",
        "ENABLE_LOGGING",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
