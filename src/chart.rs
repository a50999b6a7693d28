use chrono::Datelike;
use log::info;
use std::io::{self, BufRead, Write};

use crate::errors::Result;
use crate::models::series::TimeSeries;

/// 图表输出接口：提交若干序列后阻塞展示
pub trait ChartSink {
    fn add_series(&mut self, series: TimeSeries);

    /// 展示叠加图表，阻塞到用户关闭为止
    fn show(&mut self) -> Result<()>;
}

// 每个序列依次分配一个标记字符，同时作为图例键
const MARKERS: [char; 8] = ['*', '+', 'o', 'x', '#', '@', '%', '&'];

const CHART_WIDTH: usize = 72;
const CHART_HEIGHT: usize = 20;

/// 终端字符图表，把所有序列叠加画在同一坐标系上
pub struct TerminalChart {
    series: Vec<TimeSeries>,
    width: usize,
    height: usize,
}

impl TerminalChart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
        }
    }

    /// 渲染为多行字符串：网格、坐标范围和图例
    pub fn render(&self) -> String {
        let mut min_day = i64::MAX;
        let mut max_day = i64::MIN;
        let mut min_price = i64::MAX;
        let mut max_price = i64::MIN;

        for series in &self.series {
            for (date, price) in series.dates.iter().zip(&series.prices) {
                let day = i64::from(date.num_days_from_ce());
                min_day = min_day.min(day);
                max_day = max_day.max(day);
                min_price = min_price.min(*price);
                max_price = max_price.max(*price);
            }
        }

        let mut grid = vec![vec![' '; self.width]; self.height];
        let has_points = min_day <= max_day;

        if has_points {
            for (index, series) in self.series.iter().enumerate() {
                let marker = MARKERS[index % MARKERS.len()];
                for (date, price) in series.dates.iter().zip(&series.prices) {
                    let day = i64::from(date.num_days_from_ce());
                    let x = scale(day, min_day, max_day, self.width);
                    let y = scale(*price, min_price, max_price, self.height);
                    grid[self.height - 1 - y][x] = marker;
                }
            }
        }

        let mut out = String::new();
        for row in &grid {
            out.push('|');
            out.extend(row.iter());
            out.push('|');
            out.push('\n');
        }
        out.push('+');
        out.push_str(&"-".repeat(self.width));
        out.push('+');
        out.push('\n');

        if has_points {
            out.push_str(&format!(
                "price {}..{}  days {}..{}\n",
                min_price,
                max_price,
                min_day,
                max_day
            ));
        } else {
            out.push_str("(no data)\n");
        }

        // 图例按符号键标注
        for (index, series) in self.series.iter().enumerate() {
            let marker = MARKERS[index % MARKERS.len()];
            out.push_str(&format!("  {} {}\n", marker, series.symbol));
        }

        out
    }
}

impl Default for TerminalChart {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartSink for TerminalChart {
    fn add_series(&mut self, series: TimeSeries) {
        info!(
            "Adding series {} with {} points",
            series.symbol,
            series.len()
        );
        self.series.push(series);
    }

    fn show(&mut self) -> Result<()> {
        print!("{}", self.render());
        println!("Press enter to close the chart...");
        io::stdout().flush()?;

        // 阻塞到用户关闭图表
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

/// 把取值线性映射到[0, steps)的格点
fn scale(value: i64, min: i64, max: i64, steps: usize) -> usize {
    if max <= min {
        return 0;
    }
    let span = max - min;
    let position = (value - min) * (steps as i64 - 1) / span;
    position as usize
}
