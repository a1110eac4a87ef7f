//! 运行结果
//!
//! 只能由 `SrtfSimulator::run` 产生，持有它即说明仿真已经完成。

use super::error::SchedError;
use super::id::ProcessId;
use super::process::FinishedProcess;
use super::stats::{Averages, averages};
use super::trace::{GanttTrace, Slot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    processes: Vec<FinishedProcess>,
    trace: GanttTrace,
}

impl Schedule {
    pub(crate) fn new(mut processes: Vec<FinishedProcess>, trace: GanttTrace) -> Schedule {
        processes.sort_by_key(|p| p.id);
        Schedule { processes, trace }
    }

    /// 按 id 升序
    pub fn processes(&self) -> &[FinishedProcess] {
        &self.processes
    }

    pub fn process(&self, id: ProcessId) -> Option<&FinishedProcess> {
        self.processes
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|i| &self.processes[i])
    }

    pub fn trace(&self) -> &GanttTrace {
        &self.trace
    }

    pub fn averages(&self) -> Result<Averages, SchedError> {
        averages(&self.processes)
    }

    /// 所有进程实际执行的 tick 总数
    pub fn total_executed(&self) -> u64 {
        self.trace
            .spans()
            .filter(|(seg, _)| !matches!(seg.slot, Slot::Idle))
            .map(|(seg, end)| end.since(seg.start))
            .sum()
    }
}
