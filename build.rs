use std::env;
use std::fs;
use std::path::Path;

// Claves que config.rs / constants.rs leen con option_env!
const CONFIG_KEYS: [&str; 5] = [
    "BACKEND_URL",
    "CONTENT_REGION_ID",
    "ACTIVE_LINK_CLASS",
    "DISCARD_STALE_RESPONSES",
    "ENABLE_LOGGING",
];

fn main() {
    let env_file = Path::new(".env");

    if let Ok(contents) = fs::read_to_string(env_file) {
        println!("cargo:rerun-if-changed=.env");

        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if !CONFIG_KEYS.contains(&key) {
                println!("cargo:warning=.env: clave desconocida '{}', ignorada", key);
                continue;
            }
            // La variable de entorno real tiene prioridad sobre .env
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value.trim().trim_matches('"'));
            }
        }
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
