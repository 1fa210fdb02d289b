// image-feed-core-client/common
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ffi::OsStr;
use std::path::PathBuf;
use std::{env, fs};

use image_feed_core_client::ClientCredentials;
use tracing::metadata::LevelFilter;
pub use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

/// Directory holding the files of the running demo, i.e. `demos/<executable name>`.
pub fn demo_dir() -> PathBuf {
    env::current_dir()
        .expect("Cannot determine current directory")
        .join("demos")
        .join(exe_stem())
}

pub fn enable_debug_logging(max_level: Level) {
    let exe_stem = exe_stem();
    let log_dir = demo_dir().join("logs");
    let log_filename = format!("{}.log", exe_stem);

    let log_file_path = log_dir.join(&log_filename);
    if log_file_path.exists() {
        _ = fs::remove_file(log_file_path);
    }

    let appender = tracing_appender::rolling::never(log_dir, log_filename);

    // The terminal is used for the menu, so only warnings go to stderr.
    let stderr_layer = tracing_subscriber::fmt::Layer::new()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(LevelFilter::WARN);

    let json_layer = tracing_subscriber::fmt::Layer::new()
        .json()
        .with_writer(appender)
        .with_ansi(false)
        .with_filter(LevelFilter::from_level(max_level));

    Registry::default()
        .with(stderr_layer)
        .with(json_layer)
        .init();
}

/// Reads the Unsplash API keys either from the first two command line arguments or from
/// `ACCESS_KEY` and `SECRET_KEY` in `demos/.env`.
pub fn load_credentials() -> ClientCredentials {
    if let (Some(access_key), Some(secret_key)) = (env::args().nth(1), env::args().nth(2)) {
        return ClientCredentials::new(access_key, secret_key);
    }

    let path = env::current_dir()
        .expect("Cannot determine current directory")
        .join("demos")
        .join(".env");

    dotenvy::from_path(&path).expect(&format!("Missing .env file at {:?}.", path));

    let access_key = env::var("ACCESS_KEY").expect("Missing 'ACCESS_KEY' in .env");
    let secret_key = env::var("SECRET_KEY").expect("Missing 'SECRET_KEY' in .env");

    ClientCredentials::new(access_key, secret_key)
}

fn exe_stem() -> String {
    let exe_path = env::current_exe().expect("Failed to get the current executable path");

    exe_path
        .file_stem()
        .and_then(OsStr::to_str)
        .expect("Failed to extract file stem from executable name")
        .to_string()
}
