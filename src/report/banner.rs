//! 启动横幅

use super::render::{WIDTH, framed_title};

const TITLE: &str = "SRTF Scheduler";
const SUBTITLE: &str = "Shortest Remaining Time First (preemptive)";

/// 无状态，启动时调用一次。
pub fn banner() -> String {
    let rule = "=".repeat(WIDTH);
    let version = format!("v{}", env!("CARGO_PKG_VERSION"));
    [
        rule.clone(),
        framed_title(TITLE),
        rule.clone(),
        framed_title(SUBTITLE),
        framed_title(&version),
        rule,
    ]
    .join("\n")
}
