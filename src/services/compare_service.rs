use crate::chart::ChartSink;
use crate::client::base::AggsFetcher;
use crate::config::CompareConfig;
use crate::errors::Result;
use crate::extract::extract_series;
use crate::models::series::TimeSeries;
use log::{info, warn};
use std::sync::Arc;

/// 对比服务，处理抓取、规范化和图表提交的整个流程
pub struct CompareService {
    config: CompareConfig,
    fetcher: Arc<dyn AggsFetcher + Send + Sync>,
}

impl CompareService {
    /// 创建新的对比服务实例
    pub fn new(config: CompareConfig, fetcher: Arc<dyn AggsFetcher + Send + Sync>) -> Self {
        Self { config, fetcher }
    }

    /// 按符号顺序逐个抓取并提交图表
    ///
    /// 符号列表为空时不弹窗。单只股票失败只从输出中剔除自身，
    /// 不中断其余符号；流程总是走到展示环节。
    pub async fn run(&self, chart: &mut dyn ChartSink) -> Result<()> {
        if self.config.symbols.is_empty() {
            info!("No symbols requested, nothing to do");
            return Ok(());
        }

        for symbol in &self.config.symbols {
            match self.fetcher.fetch_aggs(symbol, &self.config).await {
                Ok(response) => {
                    let (dates, prices) = extract_series(&response);
                    if dates.is_empty() {
                        info!("No data for symbol {}", symbol);
                    }
                    chart.add_series(TimeSeries {
                        symbol: symbol.clone(),
                        dates,
                        prices,
                    });
                }
                Err(e) => {
                    warn!("Fetch failed for {}: {}", symbol, e);
                    println!(
                        "Error: {} not a valid ticker symbol or query is otherwise invalid.",
                        symbol
                    );
                }
            }
        }

        chart.show()
    }
}
