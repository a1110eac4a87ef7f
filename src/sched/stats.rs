//! 聚合统计

use super::error::SchedError;
use super::process::FinishedProcess;
use serde::Serialize;

/// 三项平均值，均已保留 3 位小数。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    pub waiting: f64,
    pub turnaround: f64,
    pub response: f64,
}

/// 对所有进程求平均；空集合返回 `EmptySet`。
pub fn averages(processes: &[FinishedProcess]) -> Result<Averages, SchedError> {
    if processes.is_empty() {
        return Err(SchedError::EmptySet);
    }
    let n = processes.len() as f64;
    let mean = |f: fn(&FinishedProcess) -> u64| {
        // u128 累加，任意多个 u64 指标都不会溢出
        let total: u128 = processes.iter().map(|p| u128::from(f(p))).sum();
        round3(total as f64 / n)
    };
    Ok(Averages {
        waiting: mean(|p| p.waiting),
        turnaround: mean(|p| p.turnaround),
        response: mean(|p| p.response),
    })
}

/// 保留 3 位小数，四舍五入（远离零）。
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
