use chrono::NaiveDate;
use serde::Serialize;

/// 单只股票的时间序列，日期与价格两列等长
#[derive(Debug, Clone, Serialize)]
pub struct TimeSeries {
    pub symbol: String,
    pub dates: Vec<NaiveDate>,
    pub prices: Vec<i64>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
