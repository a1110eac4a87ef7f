//! SRTF 仿真器
//!
//! 抢占式最短剩余时间优先：每个 tick 先准入新到达的进程，再按剩余时间
//! 稳定排序就绪集合，执行队首一个单位。剩余时间相同不抢占。

use super::error::SchedError;
use super::process::Process;
use super::process_set::ProcessSet;
use super::schedule::Schedule;
use super::time::Tick;
use super::trace::{GanttTrace, Slot};
use tracing::{debug, info, trace};

/// 独占一组进程记录并运行一次仿真。
///
/// `run` 消耗 `self`：准入必须在运行前完成，统计只能从运行结果 `Schedule` 读取。
#[derive(Debug, Clone)]
pub struct SrtfSimulator {
    set: ProcessSet,
}

impl SrtfSimulator {
    pub fn new(set: ProcessSet) -> SrtfSimulator {
        SrtfSimulator { set }
    }

    /// 运行仿真直到所有进程终止。
    #[tracing::instrument(skip(self), fields(processes = self.set.len()))]
    pub fn run(self) -> Result<Schedule, SchedError> {
        if self.set.is_empty() {
            return Err(SchedError::EmptySet);
        }

        // 到达时间升序（稳定），仅用于准入扫描
        let mut procs = self.set.into_processes();
        procs.sort_by_key(|p| p.arrival());

        let mut horizon = procs
            .iter()
            .try_fold(0_u64, |acc, p| acc.checked_add(p.burst()))
            .map(Tick)
            .ok_or(SchedError::HorizonOverflow)?;
        info!(horizon = horizon.0, "▶️  开始 SRTF 仿真");

        // 就绪集合：`procs` 的下标
        let mut ready: Vec<usize> = Vec::with_capacity(procs.len());
        let mut gantt = GanttTrace::default();
        let mut now = Tick::ZERO;
        // 下一个尚未到达的进程
        let mut pending = 0_usize;

        while now < horizon {
            pending = admit_arrivals(&procs, pending, &mut ready, now);

            // 队首在上一个 tick 刚做完
            if ready.first().is_some_and(|&i| procs[i].is_terminated()) {
                let done = ready.remove(0);
                debug!(now = now.0, id = %procs[done].id(), "进程离开就绪集合");
            }

            ready.sort_by_key(|&i| procs[i].remaining());

            let slot = match ready.first() {
                Some(&i) => Slot::Running { id: procs[i].id() },
                None => Slot::Idle,
            };

            if gantt.record(now, slot) {
                debug!(now = now.0, ?slot, "切换");
            }

            match ready.first() {
                Some(&i) => {
                    let proc = &mut procs[i];
                    proc.execute(now);
                    trace!(
                        now = now.0,
                        id = %proc.id(),
                        remaining = proc.remaining(),
                        "执行"
                    );
                    if proc.is_terminated() {
                        debug!(now = now.0, id = %proc.id(), finish = ?proc.finish(), "进程完成");
                    }
                }
                None => {
                    // 空闲 tick 把剩余工作整体推后一个 tick
                    horizon = horizon
                        .0
                        .checked_add(1)
                        .map(Tick)
                        .ok_or(SchedError::HorizonOverflow)?;
                    trace!(now = now.0, horizon = horizon.0, "空闲");
                }
            }

            now = now.next();
        }
        gantt.close(horizon);

        let mut finished = Vec::with_capacity(procs.len());
        for proc in &procs {
            match proc.finalize() {
                Some(done) => finished.push(done),
                None => {
                    return Err(SchedError::Unfinished {
                        id: proc.id(),
                        remaining: proc.remaining(),
                    });
                }
            }
        }

        info!(
            horizon = horizon.0,
            segments = gantt.segments().len(),
            "✅ 仿真完成"
        );
        Ok(Schedule::new(finished, gantt))
    }
}

/// 从 `pending` 开始，把 `now` 之前（含）到达的进程追加到就绪集合队尾。
///
/// `procs` 按到达时间升序，遇到第一个尚未到达的进程即停止；返回新的 `pending`。
fn admit_arrivals(
    procs: &[Process],
    mut pending: usize,
    ready: &mut Vec<usize>,
    now: Tick,
) -> usize {
    while let Some(proc) = procs.get(pending) {
        if proc.arrival() > now {
            break;
        }
        ready.push(pending);
        debug!(now = now.0, id = %proc.id(), burst = proc.burst(), "进程到达");
        pending += 1;
    }
    pending
}
