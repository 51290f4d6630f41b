use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::layer::SubscriberExt;

pub fn get_subscriber(
    debug: bool,
    max_log_files: usize,
) -> (impl tracing::Subscriber + Send + Sync, WorkerGuard) {
    let env_filter = if debug {
        "debug".to_string()
    } else {
        "info".to_string()
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(env_filter));

    let json_log = if !debug {
        let json_log = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr);
        Some(json_log)
    } else {
        None
    };

    let file_appender = rolling::Builder::new()
        .rotation(rolling::Rotation::HOURLY)
        .filename_suffix("log")
        .max_log_files(max_log_files)
        .build("./logs")
        .expect("Failed to create log file appender");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let file_log = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking);

    // Command output goes to stdout, so logs stay on stderr.
    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);
    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(stderr_log)
        .with(json_log)
        .with(file_log);

    (subscriber, _guard)
}

pub fn init_subscriber(debug: bool, max_log_files: usize) -> WorkerGuard {
    let (subscriber, _guard) = get_subscriber(debug, max_log_files);
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
    _guard
}
