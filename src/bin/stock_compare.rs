use stock_compare::args::{parse_args, ArgCursor};
use stock_compare::chart::TerminalChart;
use stock_compare::client::polygon::PolygonClient;
use stock_compare::config::CompareConfig;
use stock_compare::services::compare_service::CompareService;

use log::debug;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::init();

    // .env文件可选，缺失时直接使用进程环境
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }

    // 先取环境默认值，再按命令行逐个标志覆盖
    let mut config = CompareConfig::new();
    let mut cursor = ArgCursor::new(std::env::args().skip(1));
    parse_args(&mut config, &mut cursor);
    debug!("Parsed {} symbols from command line", config.symbols.len());

    let client = PolygonClient::new()?;
    let service = CompareService::new(config, Arc::new(client));

    let mut chart = TerminalChart::new();
    service.run(&mut chart).await?;

    Ok(())
}
