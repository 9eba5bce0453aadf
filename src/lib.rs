pub mod batch;
pub mod config;
pub mod discover;
pub mod error;
pub mod init;
pub mod job;
pub mod runner;

const BANNER_WIDTH: usize = 80;

pub(crate) fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

pub(crate) fn logv(tag: &str, message: &str) {
    println!("[{}] {}", tag, message);
    tracing::debug!(tag, "{}", message);
}

pub(crate) fn logi(message: impl AsRef<str>) {
    logv("INFO", message.as_ref());
}

pub(crate) fn logok(message: impl AsRef<str>) {
    logv("OK", message.as_ref());
}

pub(crate) fn logw(message: impl AsRef<str>) {
    logv("WARN", message.as_ref());
}

pub(crate) fn loge(message: impl AsRef<str>) {
    logv("ERROR", message.as_ref());
}
