//! 交互式会话
//!
//! 逐行读取进程定义直到 `0 0 0`，运行仿真并打印 Gantt 图与统计表，
//! 然后询问是否再调度一组新的进程。

use super::parse::{Entry, parse_triple};
use crate::report::{
    banner, render_averages, render_details, render_gantt, render_gantt_header,
};
use crate::sched::{ProcessSet, Schedule, SrtfSimulator, ValidationError};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

const PROMPT: &str = "Enter the Information About Processes: (Enter '0 0 0' To Exit)";
const AGAIN: &str = "Do you want to enter a new set of processes for scheduling? (Y or N): ";

pub struct Session<R, W> {
    input: R,
    out: W,
    unit: String,
    show_banner: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Session {
            input,
            out,
            unit: "ms".to_string(),
            show_banner: true,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// 运行到用户选择退出或输入结束，返回每一轮成功的调度结果。
    pub fn run(&mut self) -> io::Result<Vec<Schedule>> {
        if self.show_banner {
            writeln!(self.out, "{}", banner())?;
        }

        let mut schedules = Vec::new();
        loop {
            let (set, eof) = self.read_round()?;
            if let Some(schedule) = self.schedule_round(set)? {
                schedules.push(schedule);
            }
            if eof || !self.ask_again()? {
                break;
            }
        }
        self.out.flush()?;
        Ok(schedules)
    }

    /// 读取一轮输入；第二个返回值表示输入流已经结束。
    fn read_round(&mut self) -> io::Result<(ProcessSet, bool)> {
        let mut set = ProcessSet::new();
        let mut counter = 0_usize;
        writeln!(self.out)?;
        self.prompt()?;

        loop {
            let Some(line) = self.next_line()? else {
                return Ok((set, true));
            };
            if line.trim().is_empty() {
                continue;
            }
            counter += 1;

            match parse_triple(&line) {
                Ok(Entry::End) => return Ok((set, false)),
                Ok(Entry::Process { id, arrival, burst }) => {
                    if let Err(err) = set.add_process(id, arrival, burst) {
                        self.report_rejected(counter, &err)?;
                    }
                }
                Err(err) => {
                    debug!(counter, %err, "无法解析的输入");
                    writeln!(self.out, "Error at input No. {counter}: Invalid input format.")?;
                    self.prompt()?;
                }
            }
        }
    }

    fn schedule_round(&mut self, set: ProcessSet) -> io::Result<Option<Schedule>> {
        if set.is_empty() {
            writeln!(self.out, "<<<There Are No Processes>>")?;
            return Ok(None);
        }

        writeln!(self.out, "<<All Process Added Successfully>>")?;
        writeln!(self.out)?;
        let schedule = match SrtfSimulator::new(set).run() {
            Ok(schedule) => schedule,
            Err(err) => {
                warn!(%err, "调度失败");
                writeln!(self.out, "error: {err}")?;
                return Ok(None);
            }
        };

        write!(self.out, "{}", render_gantt_header())?;
        writeln!(self.out)?;
        writeln!(self.out, " {}", render_gantt(schedule.trace()))?;
        writeln!(self.out)?;
        write!(self.out, "{}", render_details(&schedule, &self.unit))?;
        if let Ok(avg) = schedule.averages() {
            writeln!(self.out)?;
            write!(self.out, "{}", render_averages(&avg, &self.unit))?;
        }
        Ok(Some(schedule))
    }

    fn report_rejected(&mut self, counter: usize, err: &ValidationError) -> io::Result<()> {
        // 第一条原因与标题同一行
        write!(self.out, "Error at input No. {counter} has incorrect values: ")?;
        for v in &err.violations {
            writeln!(self.out, "( {v} )")?;
        }
        writeln!(self.out)?;
        self.prompt()
    }

    /// 直到得到 y/n（不区分大小写）；输入结束视为 n。
    fn ask_again(&mut self) -> io::Result<bool> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{AGAIN}")?;
            self.out.flush()?;
            let Some(line) = self.next_line()? else {
                return Ok(false);
            };
            match line.trim() {
                a if a.eq_ignore_ascii_case("y") => return Ok(true),
                a if a.eq_ignore_ascii_case("n") => return Ok(false),
                _ => {}
            }
        }
    }

    fn prompt(&mut self) -> io::Result<()> {
        writeln!(self.out, "{PROMPT}")?;
        writeln!(self.out, "ID AT BT")?;
        self.out.flush()
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
