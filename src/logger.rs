/// Logging setup
/// Writes to logs/digio.log so log lines do not interleave with the prompt

use std::io::Write;
use log::LevelFilter;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "logs/digio.log";

pub fn init() {
    let mut builder = env_logger::Builder::new();

    if let Ok(log_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&log_level);
    } else {
        builder.filter_level(LevelFilter::Info);
        // HTTP stack is too chatty at info
        builder.filter_module("reqwest", LevelFilter::Warn);
        builder.filter_module("hyper", LevelFilter::Warn);
        builder.filter_module("hyper_util", LevelFilter::Warn);
    }

    // [HH:MM:SS LEVEL] target - message
    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    if !std::path::Path::new(LOG_DIR).exists() {
        let _ = std::fs::create_dir(LOG_DIR);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE);

    match file {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("Impossibile aprire {}: {}, log su stderr", LOG_FILE, e);
            builder.target(env_logger::Target::Stderr);
        }
    }

    // A second init (e.g. from tests) is harmless
    let _ = builder.try_init();

    log::info!("Logging inizializzato ✓");
}
