use std::collections::VecDeque;
use log::debug;

use crate::config::CompareConfig;

/// 标志的规范代码，每个接受的拼写恰好映射到其中一个
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagCode {
    Symbols,
    Time,
    Multiplier,
    Timespan,
    Adjusted,
    Descending,
    Limit,
    Key,
}

/// 将命令行令牌规范化为标志代码
///
/// 只接受完全匹配的长短拼写，不做前缀匹配。
/// 未注册的令牌返回None，由调用方当作普通值处理。
pub fn canonicalize(token: &str) -> Option<FlagCode> {
    match token {
        "-s" | "--symbol" | "--ticker" => Some(FlagCode::Symbols),
        "-t" | "--time" => Some(FlagCode::Time),
        "-m" | "--multiplier" => Some(FlagCode::Multiplier),
        "-x" | "--datetime" => Some(FlagCode::Timespan),
        "-a" | "--adjusted" => Some(FlagCode::Adjusted),
        "-d" | "--desc" | "--descending" => Some(FlagCode::Descending),
        "-l" | "--limit" => Some(FlagCode::Limit),
        "-k" | "--key" | "--filepath" => Some(FlagCode::Key),
        _ => None,
    }
}

/// 剩余参数上的游标，从前端消费
///
/// 解析阶段由分发循环和各个处理器共享，
/// 每个处理器自行决定消费多少个后续值。
pub struct ArgCursor {
    args: VecDeque<String>,
}

impl ArgCursor {
    pub fn new<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            args: args.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn peek(&self) -> Option<&str> {
        self.args.front().map(|s| s.as_str())
    }

    /// 取出下一个令牌并前移
    pub fn advance(&mut self) -> Option<String> {
        self.args.pop_front()
    }

    /// 仅当下一个令牌不是已注册标志时才取出
    ///
    /// 处理器必须通过这里消费参数值，保证不会吞掉标志。
    pub fn take_value(&mut self) -> Option<String> {
        match self.peek() {
            Some(token) if canonicalize(token).is_none() => self.advance(),
            _ => None,
        }
    }
}

/// 分发循环：识别的标志交给对应处理器，其余令牌静默丢弃
///
/// 每个令牌恰好被消费一次，游标耗尽后终止。
pub fn parse_args(config: &mut CompareConfig, cursor: &mut ArgCursor) {
    while let Some(token) = cursor.advance() {
        match canonicalize(&token) {
            Some(code) => config.apply(code, cursor),
            None => debug!("Ignoring unrecognized token: {}", token),
        }
    }
}
