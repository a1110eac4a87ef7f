//! 调度核心模块
//!
//! 进程记录、准入集合、SRTF 仿真循环及其产出的 Gantt 轨迹。

mod error;
mod id;
mod process;
mod process_set;
mod schedule;
mod simulator;
mod stats;
mod time;
mod trace;

pub use error::{SchedError, ValidationError, Violation};
pub use id::ProcessId;
pub use process::{FinishedProcess, Process};
pub use process_set::ProcessSet;
pub use schedule::Schedule;
pub use simulator::SrtfSimulator;
pub use stats::{Averages, averages, round3};
pub use time::Tick;
pub use trace::{GanttTrace, Segment, Slot};
