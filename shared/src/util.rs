/// Current UTC timestamp in milliseconds.
///
/// All persisted timestamps (created_at, updated_at, locked_until, ...)
/// use this representation.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
