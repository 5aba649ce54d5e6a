use log::Level;
use serde_json::{json, Value};
use time::OffsetDateTime;
use uuid::Uuid;

/// Emit one structured diagnostic record through the `log` facade.
///
/// The record is rendered as a single JSON object so hosts that forward logs
/// to a file or a console keep the fields machine-readable. Nothing is
/// emitted when the host has not installed a logger.
pub fn log_event(
    level: Level,
    code: Option<&str>,
    module: &str,
    message: &str,
    explain: Option<&str>,
    data: Option<Value>,
) {
    if !log::log_enabled!(target: module, level) {
        return;
    }
    let record = render_event(level, code, module, message, explain, data);
    log::log!(target: module, level, "{record}");
}

fn render_event(
    level: Level,
    code: Option<&str>,
    module: &str,
    message: &str,
    explain: Option<&str>,
    data: Option<Value>,
) -> Value {
    json!({
        "id": Uuid::new_v4().to_string(),
        "ts": OffsetDateTime::now_utc().unix_timestamp(),
        "level": level.as_str().to_lowercase(),
        "code": code,
        "module": module,
        "message": message,
        "explain": explain,
        "data": data,
    })
}

/// Truncate text for log previews without splitting a character.
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
