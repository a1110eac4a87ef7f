//! 结构化导出（JSON）

use crate::sched::{Averages, FinishedProcess, GanttTrace, SchedError, Schedule};
use serde::Serialize;

/// 一次运行的完整报告，序列化后写到 `--report-json`。
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub unit: &'a str,
    pub trace: &'a GanttTrace,
    pub processes: &'a [FinishedProcess],
    pub averages: Averages,
}

impl<'a> Report<'a> {
    pub fn new(schedule: &'a Schedule, unit: &'a str) -> Result<Report<'a>, SchedError> {
        Ok(Report {
            unit,
            trace: schedule.trace(),
            processes: schedule.processes(),
            averages: schedule.averages()?,
        })
    }
}
