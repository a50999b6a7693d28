use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use crate::errors::{CompareError, Result};

// 支持的日期时间输入格式
const DATETIME_FORMATS: [&str; 2] = ["%Y/%m/%d %H:%M", "%Y-%m-%d %H:%M"];
const DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

/// 将日期时间字符串解析为毫秒时间戳（UTC）
pub fn parse_datetime_ms(s: &str) -> Result<i64> {
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt.and_utc().timestamp_millis());
        }
    }

    // 纯日期按当日零点处理
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis());
        }
    }

    Err(CompareError::DataError(format!(
        "Unrecognized datetime format: {}",
        s
    )))
}

/// 毫秒时间戳转换为日历日期，丢弃日内精度
pub fn ms_to_naive_date(ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(ms.div_euclid(1000), 0).map(|dt| dt.date_naive())
}
