//! 文本渲染
//!
//! 70 列、用 `=` 包框的定宽表格，以及单行的 Gantt 图。

use crate::sched::{Averages, GanttTrace, Schedule, Slot};
use std::fmt::Write;

pub const WIDTH: usize = 70;

fn rule() -> String {
    "=".repeat(WIDTH)
}

/// `=` + 居中标题 + `=`
pub fn framed_title(title: &str) -> String {
    format!("={:^inner$}=", title, inner = WIDTH - 2)
}

/// 空闲段标记（No Process）
pub const IDLE_LABEL: &str = "NP";

/// 例：`0 | P1 | 1 | P2 | 4 | P1 | 8`
pub fn render_gantt(trace: &GanttTrace) -> String {
    let mut out = String::new();
    for seg in trace.segments() {
        match seg.slot {
            Slot::Idle => {
                let _ = write!(out, "{} | {IDLE_LABEL} | ", seg.start);
            }
            Slot::Running { id } => {
                let _ = write!(out, "{} | P{} | ", seg.start, id);
            }
        }
    }
    let _ = write!(out, "{}", trace.horizon());
    out
}

/// Gantt 图上方的标题框
pub fn render_gantt_header() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(
        out,
        "{}",
        framed_title("Gantt Chart For SJF Scheduling-Preemptive:")
    );
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(
        out,
        "Note: ({IDLE_LABEL} Means There is no Process executed At This Time)"
    );
    out
}

/// 每个进程的等待/周转/响应时间，按 id 升序。
pub fn render_details(schedule: &Schedule, unit: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "{}", framed_title("The Details For All Processes"));
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(
        out,
        "{:<2} {:<11} {:<2} {:<13} {:<2} {:<16} {:<2} {:<2} {:<1}",
        "=", "Process ID", "=", "Waiting Time", "=", "Turnaround Time", "=", "Response Time", "="
    );
    let _ = writeln!(out, "{}", rule());
    for p in schedule.processes() {
        let _ = writeln!(
            out,
            "{:<6} {:<7} {:<7} {:<8} {:<9} {:<9} {:<8} {:<7} {:<1}",
            "=",
            p.id,
            "=",
            format!("{} {unit}", p.waiting),
            "=",
            format!("{} {unit}", p.turnaround),
            "=",
            format!("{} {unit}", p.response),
            "="
        );
    }
    let _ = writeln!(out, "{}", rule());
    out
}

pub fn render_averages(avg: &Averages, unit: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "{}", framed_title("Average Times For All Process:"));
    let _ = writeln!(out, "{}", rule());
    for (label, value) in [
        ("Average Turnaround Time:", avg.turnaround),
        ("Average Response Time  :", avg.response),
        ("Average Waiting Time   :", avg.waiting),
    ] {
        let _ = writeln!(
            out,
            "{:<2} {:<2} {:<40} {:<2}",
            "=",
            label,
            format!("{} {unit}", format_average(value)),
            "="
        );
    }
    let _ = writeln!(out, "{}", rule());
    out
}

/// 至少保留一位小数：`1.5`、`2.0`、`2.333`，大数也不用指数形式
pub fn format_average(value: f64) -> String {
    let mut s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        s.push_str(".0");
    }
    s
}
