use chrono::{DateTime, Utc};

/// 当前 UTC 时间
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// 格式化为 `%Y-%m-%d %H:%M:%S`
pub fn time_to_str(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}
