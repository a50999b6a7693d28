use crate::client::base::AggsFetcher;
use crate::config::{CompareConfig, Timespan};
use crate::errors::{CompareError, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.polygon.io";

/// Polygon聚合数据客户端
pub struct PolygonClient {
    client: Client,
    base_url: String,
}

impl PolygonClient {
    /// 创建指向正式接口的客户端
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CompareError::RequestError(e))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 组装单只股票的聚合查询路径
    ///
    /// multiplier缺省为1，粒度缺省为day；
    /// 起止时间缺失属于无效查询，在发请求之前报错。
    fn build_url(&self, symbol: &str, config: &CompareConfig) -> Result<String> {
        let time_start = config.time_start.ok_or_else(|| {
            CompareError::InvalidQuery(format!("Missing start time for symbol {}", symbol))
        })?;
        let time_end = config.time_end.ok_or_else(|| {
            CompareError::InvalidQuery(format!("Missing end time for symbol {}", symbol))
        })?;
        let multiplier = config.multiplier.unwrap_or(1);
        let timespan = config.timespan.unwrap_or(Timespan::Day);

        Ok(format!(
            "{}/v2/aggs/ticker/{}/range/{}/{}/{}/{}",
            self.base_url,
            symbol,
            multiplier,
            timespan.as_str(),
            time_start,
            time_end
        ))
    }
}

#[async_trait]
impl AggsFetcher for PolygonClient {
    async fn fetch_aggs(&self, symbol: &str, config: &CompareConfig) -> Result<Value> {
        let key = config.key.clone().ok_or_else(|| {
            CompareError::InvalidQuery(
                "No API key configured, set POLYGON_KEY or pass -k".to_string(),
            )
        })?;
        let url = self.build_url(symbol, config)?;
        debug!("Requesting aggregates: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("adjusted", if config.adjusted { "true" } else { "false" }),
                ("sort", config.sort.as_str()),
                ("apiKey", key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| CompareError::RequestError(e))?;

        let json: Value = response.json().await?;
        debug!("Received aggregates response for {}", symbol);

        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortOrder;

    fn config_with_range() -> CompareConfig {
        let mut config = CompareConfig::new();
        config.time_start = Some(1672531200000);
        config.time_end = Some(1675209600000);
        config
    }

    #[test]
    fn build_url_with_explicit_settings() {
        let client = PolygonClient::with_base_url("https://api.polygon.io/").unwrap();
        let mut config = config_with_range();
        config.multiplier = Some(5);
        config.timespan = Some(Timespan::Minute);

        let url = client.build_url("AAPL", &config).unwrap();
        assert_eq!(
            "https://api.polygon.io/v2/aggs/ticker/AAPL/range/5/minute/1672531200000/1675209600000",
            url
        );
    }

    #[test]
    fn build_url_defaults_to_one_day_bars() {
        let client = PolygonClient::with_base_url("http://localhost:8080").unwrap();
        let config = config_with_range();

        let url = client.build_url("MSFT", &config).unwrap();
        assert_eq!(
            "http://localhost:8080/v2/aggs/ticker/MSFT/range/1/day/1672531200000/1675209600000",
            url
        );
    }

    #[test]
    fn build_url_requires_date_range() {
        let client = PolygonClient::new().unwrap();
        let mut config = config_with_range();
        config.time_end = None;

        let result = client.build_url("AAPL", &config);
        assert!(matches!(result, Err(CompareError::InvalidQuery(_))));
    }

    #[test]
    fn sort_order_wire_names() {
        assert_eq!("asc", SortOrder::Asc.as_str());
        assert_eq!("desc", SortOrder::Desc.as_str());
    }
}
