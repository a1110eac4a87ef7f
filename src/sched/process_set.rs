//! 进程集合（准入）
//!
//! 保存按插入顺序排列的进程记录，并在准入时保证 id 唯一、时间合法。

use super::error::{ValidationError, Violation};
use super::id::ProcessId;
use super::process::Process;
use super::time::Tick;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ProcessSet {
    procs: Vec<Process>,
    ids: HashSet<ProcessId>,
}

impl ProcessSet {
    pub fn new() -> ProcessSet {
        ProcessSet::default()
    }

    /// 校验并追加一个进程定义。
    ///
    /// 被拒绝时集合保持不变，错误中包含所有违反的规则。
    pub fn add_process(&mut self, id: i64, arrival: i64, burst: i64) -> Result<(), ValidationError> {
        let pid = ProcessId(id);
        let mut violations = Vec::new();
        if !self.id_is_available(pid) {
            violations.push(Violation::DuplicateId);
        }
        if arrival < 0 {
            violations.push(Violation::NegativeArrival(arrival));
        }
        if burst <= 0 {
            violations.push(Violation::NonPositiveBurst(burst));
        }
        if !violations.is_empty() {
            debug!(id, arrival, burst, ?violations, "进程定义被拒绝");
            return Err(ValidationError { id: pid, violations });
        }

        self.ids.insert(pid);
        self.procs
            .push(Process::new(pid, Tick(arrival as u64), burst as u64));
        debug!(id, arrival, burst, count = self.procs.len(), "进程已加入");
        Ok(())
    }

    pub fn id_is_available(&self, id: ProcessId) -> bool {
        !self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.procs.len()
    }

    /// 按插入顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.procs.iter()
    }

    pub(crate) fn into_processes(self) -> Vec<Process> {
        self.procs
    }
}
