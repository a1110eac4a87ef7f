//! Gantt 轨迹
//!
//! 只在 CPU 占用发生变化（换进程、空闲 <-> 忙碌）时记录新段，
//! 连续执行同一进程或连续空闲的 tick 合并到同一段。

use super::id::ProcessId;
use super::time::Tick;
use serde::Serialize;

/// 某个 tick 上 CPU 的占用情况。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slot {
    Idle,
    Running { id: ProcessId },
}

/// 一段连续占用的起点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub start: Tick,
    #[serde(flatten)]
    pub slot: Slot,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GanttTrace {
    segments: Vec<Segment>,
    horizon: Tick,
}

impl GanttTrace {
    /// 记录 `at` 的占用；与上一个 tick 相同则不产生新段，返回是否新开了一段。
    pub(crate) fn record(&mut self, at: Tick, slot: Slot) -> bool {
        if self.segments.last().is_some_and(|s| s.slot == slot) {
            return false;
        }
        self.segments.push(Segment { start: at, slot });
        true
    }

    pub(crate) fn close(&mut self, horizon: Tick) {
        self.horizon = horizon;
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// 最后一个 tick 的结束时刻
    pub fn horizon(&self) -> Tick {
        self.horizon
    }

    /// 每段的结束时刻（下一段起点或 horizon）
    pub fn spans(&self) -> impl Iterator<Item = (Segment, Tick)> + '_ {
        self.segments.iter().enumerate().map(|(i, seg)| {
            let end = self
                .segments
                .get(i + 1)
                .map(|next| next.start)
                .unwrap_or(self.horizon);
            (*seg, end)
        })
    }
}
