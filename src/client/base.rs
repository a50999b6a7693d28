use crate::config::CompareConfig;
use crate::errors::Result;
use async_trait::async_trait;
use serde_json::Value;

#[cfg(test)]
use mockall::automock;

/// Base trait for aggregate data fetchers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AggsFetcher {
    /// 按当前配置抓取单只股票的聚合数据
    ///
    /// 返回原始响应载荷，格式问题交由提取阶段处理。
    async fn fetch_aggs(&self, symbol: &str, config: &CompareConfig) -> Result<Value>;
}
