//! 标识符类型
//!
//! 定义进程的唯一标识符。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 进程标识符（调用方指定，任意互不相同的整数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessId(pub i64);

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
