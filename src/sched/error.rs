//! 调度错误类型

use super::id::ProcessId;
use thiserror::Error;

/// 单条准入规则的违反
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("The ID is already taken by another Process")]
    DuplicateId,

    #[error("The Arrival time is not valid 'less than 0' (got {0})")]
    NegativeArrival(i64),

    #[error("The burst time is not valid 'less than or equaled 0' (got {0})")]
    NonPositiveBurst(i64),
}

/// 进程定义被拒绝：列出全部违反的规则，调用方可修正后重试。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("process {id} rejected: {}", join_violations(.violations))]
pub struct ValidationError {
    pub id: ProcessId,
    pub violations: Vec<Violation>,
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("( {v} )"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedError {
    #[error("there are no processes to schedule")]
    EmptySet,

    /// 突发时间总和（加上空闲 tick）超出 `u64` 可表示的时间范围
    #[error("total simulated time exceeds {} ticks", u64::MAX)]
    HorizonOverflow,

    /// 仿真循环结束时仍有未完成的进程（不变量被破坏）
    #[error("process {id} still has {remaining} ticks of work after the run")]
    Unfinished { id: ProcessId, remaining: u64 },
}
