mod parse;
mod process_file;
mod render;

use crate::sched::{ProcessSet, Schedule, SrtfSimulator};

/// 按 `(id, arrival, burst)` 建集合并运行
pub(crate) fn run_all(defs: &[(i64, i64, i64)]) -> Schedule {
    let mut set = ProcessSet::new();
    for &(id, at, bt) in defs {
        set.add_process(id, at, bt).expect("valid process");
    }
    SrtfSimulator::new(set).run().expect("run")
}
