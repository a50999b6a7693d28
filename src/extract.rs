use chrono::NaiveDate;
use serde_json::Value;

use crate::util;

/// 将单个API响应规范化为(日期, 收盘价)两列
///
/// ticker字段缺失或为空视为未知代码，返回两个空序列。
/// 毫秒时间戳截断到日历日，收盘价截断为整数，
/// 顺序保持响应原样（服务端已按sort参数排序）。
pub fn extract_series(json: &Value) -> (Vec<NaiveDate>, Vec<i64>) {
    let has_ticker = json
        .get("ticker")
        .and_then(|t| t.as_str())
        .is_some_and(|t| !t.is_empty());

    if !has_ticker {
        return (Vec::new(), Vec::new());
    }

    let mut dates = Vec::new();
    let mut prices = Vec::new();

    if let Some(results) = json.get("results").and_then(|r| r.as_array()) {
        for result in results {
            let timestamp = result.get("t").and_then(|t| t.as_i64());
            let close = result.get("c").and_then(|c| c.as_f64());

            // t或c缺失的记录成对跳过，保持两列等长
            if let (Some(timestamp), Some(close)) = (timestamp, close) {
                if let Some(date) = util::ms_to_naive_date(timestamp) {
                    dates.push(date);
                    prices.push(close as i64);
                }
            }
        }
    }

    (dates, prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_ticker_yields_empty_series() {
        let response = json!({ "status": "NOT_FOUND" });
        let (dates, prices) = extract_series(&response);
        assert!(dates.is_empty());
        assert!(prices.is_empty());
    }

    #[test]
    fn null_ticker_yields_empty_series() {
        let response = json!({ "ticker": null, "results": [{ "t": 0, "c": 1.0 }] });
        let (dates, prices) = extract_series(&response);
        assert!(dates.is_empty());
        assert!(prices.is_empty());
    }

    #[test]
    fn extracts_aligned_columns_with_day_truncation() {
        // 2023-01-02 10:30 UTC 和 2023-01-03 15:45 UTC
        let response = json!({
            "ticker": "AAPL",
            "results": [
                { "t": 1672655400000i64, "c": 125.07, "o": 124.0 },
                { "t": 1672760700000i64, "c": 126.96 },
            ],
        });
        let (dates, prices) = extract_series(&response);
        assert_eq!(2, dates.len());
        assert_eq!(2, prices.len());
        assert_eq!(NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(), dates[0]);
        assert_eq!(NaiveDate::from_ymd_opt(2023, 1, 3).unwrap(), dates[1]);
        // 收盘价截断为整数
        assert_eq!(vec![125, 126], prices);
    }

    #[test]
    fn missing_results_field_yields_empty_series() {
        let response = json!({ "ticker": "AAPL", "queryCount": 0 });
        let (dates, prices) = extract_series(&response);
        assert!(dates.is_empty());
        assert!(prices.is_empty());
    }

    #[test]
    fn incomplete_records_are_skipped_in_tandem() {
        let response = json!({
            "ticker": "AAPL",
            "results": [
                { "t": 1672655400000i64 },
                { "c": 100.0 },
                { "t": 1672760700000i64, "c": 126.5 },
            ],
        });
        let (dates, prices) = extract_series(&response);
        assert_eq!(1, dates.len());
        assert_eq!(vec![126], prices);
    }
}
