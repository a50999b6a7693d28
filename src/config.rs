use crate::args::{ArgCursor, FlagCode};
use crate::util;

/// 聚合K线的时间粒度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timespan {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Timespan {
    pub const ALL: [Timespan; 7] = [
        Timespan::Minute,
        Timespan::Hour,
        Timespan::Day,
        Timespan::Week,
        Timespan::Month,
        Timespan::Quarter,
        Timespan::Year,
    ];

    /// 接口使用的小写名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Timespan::Minute => "minute",
            Timespan::Hour => "hour",
            Timespan::Day => "day",
            Timespan::Week => "week",
            Timespan::Month => "month",
            Timespan::Quarter => "quarter",
            Timespan::Year => "year",
        }
    }

    pub fn from_str(s: &str) -> Option<Timespan> {
        Timespan::ALL.iter().copied().find(|ts| ts.as_str() == s)
    }
}

/// 结果排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// 对比任务的全部设置
///
/// 解析阶段由各标志处理器增量填充，运行阶段只读。
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub symbols: Vec<String>,
    pub time_start: Option<i64>,
    pub time_end: Option<i64>,
    pub multiplier: Option<i64>,
    pub timespan: Option<Timespan>,
    pub adjusted: bool,
    pub sort: SortOrder,
    pub limit: Option<i64>,
    pub key: Option<String>,
}

impl CompareConfig {
    /// 创建默认配置，API密钥取自环境变量POLYGON_KEY
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
            time_start: None,
            time_end: None,
            multiplier: None,
            timespan: None,
            adjusted: true,
            sort: SortOrder::Asc,
            limit: None,
            key: std::env::var("POLYGON_KEY").ok(),
        }
    }

    /// 将已识别的标志交给对应处理器
    pub fn apply(&mut self, code: FlagCode, cursor: &mut ArgCursor) {
        match code {
            FlagCode::Symbols => self.set_symbols(cursor),
            FlagCode::Time => self.set_date(cursor),
            FlagCode::Multiplier => self.set_multiplier(cursor),
            FlagCode::Timespan => self.set_timespan(cursor),
            FlagCode::Adjusted => self.set_adjusted(),
            FlagCode::Descending => self.set_descending(),
            FlagCode::Limit => self.set_limit(cursor),
            FlagCode::Key => self.set_key(cursor),
        }
    }

    /// 贪婪消费连续的非标志令牌，转大写后追加到符号列表
    fn set_symbols(&mut self, cursor: &mut ArgCursor) {
        while let Some(token) = cursor.take_value() {
            self.symbols.push(token.to_uppercase());
        }
    }

    /// 最多消费两个非标志令牌作为起止时间
    ///
    /// 解析失败的令牌同样算作已消费，对应边界置空。
    fn set_date(&mut self, cursor: &mut ArgCursor) {
        if let Some(token) = cursor.take_value() {
            self.time_start = parse_date_bound(&token);
            if let Some(token) = cursor.take_value() {
                self.time_end = parse_date_bound(&token);
            }
        }
    }

    fn set_multiplier(&mut self, cursor: &mut ArgCursor) {
        if let Some(token) = cursor.take_value() {
            if let Some(value) = parse_int_arg(&token, "multiplier") {
                self.multiplier = Some(value);
            }
        }
    }

    fn set_timespan(&mut self, cursor: &mut ArgCursor) {
        if let Some(token) = cursor.take_value() {
            match Timespan::from_str(&token.to_lowercase()) {
                Some(timespan) => self.timespan = Some(timespan),
                None => {
                    let choices: Vec<&str> = Timespan::ALL.iter().map(|ts| ts.as_str()).collect();
                    println!(
                        "Please include one of the following for datetime (-x) argument: {}",
                        choices.join(" ")
                    );
                }
            }
        }
    }

    // 该标志只有关闭形式：出现即强制使用未复权数据
    fn set_adjusted(&mut self) {
        self.adjusted = false;
    }

    fn set_descending(&mut self) {
        self.sort = SortOrder::Desc;
    }

    fn set_limit(&mut self, cursor: &mut ArgCursor) {
        if let Some(token) = cursor.take_value() {
            if let Some(value) = parse_int_arg(&token, "limit") {
                self.limit = Some(value);
            }
        }
    }

    fn set_key(&mut self, cursor: &mut ArgCursor) {
        if let Some(token) = cursor.take_value() {
            self.key = Some(token);
        }
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 解析单个时间边界，失败时打印诊断并返回None
fn parse_date_bound(token: &str) -> Option<i64> {
    match util::parse_datetime_ms(token) {
        Ok(ms) => Some(ms),
        Err(_) => {
            println!(
                "Improperly formatted datetime string {}. Try YYYY/MM/DD HH:MM format.",
                token
            );
            None
        }
    }
}

/// 按数字解析并截断为整数，失败时打印诊断并返回None
fn parse_int_arg(token: &str, flag_name: &str) -> Option<i64> {
    match token.parse::<f64>() {
        Ok(value) => Some(value as i64),
        Err(_) => {
            println!(
                "Argument for {} cannot be converted to an integer, please input an integer.",
                flag_name
            );
            None
        }
    }
}
