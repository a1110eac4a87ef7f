//! 进程记录
//!
//! 标识与到达/突发时间在创建后不变；执行状态只在仿真循环中累积。

use super::id::ProcessId;
use super::time::Tick;
use serde::Serialize;

/// 单个作业在仿真中的计时状态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    id: ProcessId,
    arrival: Tick,
    burst: u64,
    executed: u64,
    start: Option<Tick>,
    finish: Option<Tick>,
}

impl Process {
    /// 由 `ProcessSet` 在校验通过后创建，`burst` 保证 > 0。
    pub(crate) fn new(id: ProcessId, arrival: Tick, burst: u64) -> Process {
        Process {
            id,
            arrival,
            burst,
            executed: 0,
            start: None,
            finish: None,
        }
    }

    pub fn id(&self) -> ProcessId {
        self.id
    }

    pub fn arrival(&self) -> Tick {
        self.arrival
    }

    pub fn burst(&self) -> u64 {
        self.burst
    }

    pub fn executed(&self) -> u64 {
        self.executed
    }

    pub fn remaining(&self) -> u64 {
        self.burst - self.executed
    }

    pub fn start(&self) -> Option<Tick> {
        self.start
    }

    pub fn finish(&self) -> Option<Tick> {
        self.finish
    }

    pub fn is_terminated(&self) -> bool {
        self.executed == self.burst
    }

    /// 在 `now` 这个 tick 上执行一个单位的工作。
    ///
    /// 首次执行时记录 `start`；做完最后一个单位时记录 `finish = now + 1`。
    /// 已终止的进程不会再被推进，返回 `false`。
    pub(crate) fn execute(&mut self, now: Tick) -> bool {
        if self.is_terminated() {
            return false;
        }
        self.executed += 1;
        if self.start.is_none() {
            self.start = Some(now);
        }
        if self.is_terminated() {
            self.finish = Some(now.next());
        }
        true
    }

    /// 仿真结束后冻结为只读的统计记录；未完成的进程返回 `None`。
    pub(crate) fn finalize(&self) -> Option<FinishedProcess> {
        let start = self.start?;
        let finish = self.finish?;
        let turnaround = finish.since(self.arrival);
        Some(FinishedProcess {
            id: self.id,
            arrival: self.arrival,
            burst: self.burst,
            start,
            finish,
            response: start.since(self.arrival),
            turnaround,
            waiting: turnaround.saturating_sub(self.burst),
        })
    }
}

/// 运行完成后的进程统计（只读）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinishedProcess {
    pub id: ProcessId,
    pub arrival: Tick,
    pub burst: u64,
    pub start: Tick,
    pub finish: Tick,
    /// start - arrival
    pub response: u64,
    /// finish - arrival
    pub turnaround: u64,
    /// turnaround - burst
    pub waiting: u64,
}
