//! SRTF 调度仿真
//!
//! 默认进入交互模式；`--processes` 指定 JSON 文件时以批处理方式运行一次。

use clap::Parser;
use srtf_sim::console::{LoadError, ProcessFile, Session};
use srtf_sim::report::{
    Report, banner, render_averages, render_details, render_gantt, render_gantt_header,
};
use srtf_sim::sched::{SchedError, Schedule, SrtfSimulator};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(
    name = "srtf-sim",
    about = "Shortest Remaining Time First (preemptive) CPU scheduling simulator"
)]
struct Args {
    /// JSON 进程文件：{"processes": [{"id": 1, "arrival": 0, "burst": 5}]}
    #[arg(long)]
    processes: Option<PathBuf>,

    /// 把最后一次调度的报告写成 JSON
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// 时间单位标签
    #[arg(long)]
    unit: Option<String>,

    #[arg(long)]
    no_banner: bool,

    /// 关闭日志输出
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Sched(#[from] SchedError),

    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("write report json: {0}")]
    Json(#[from] serde_json::Error),
}

const DEFAULT_UNIT: &str = "ms";

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if args.quiet {
            tracing_subscriber::EnvFilter::new("off")
        } else {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
        })
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "srtf-sim 失败");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    match &args.processes {
        Some(path) => run_batch(args, path),
        None => run_interactive(args),
    }
}

fn run_batch(args: &Args, path: &Path) -> Result<(), CliError> {
    let file = ProcessFile::load(path)?;
    let unit = args
        .unit
        .clone()
        .or_else(|| file.unit.clone())
        .unwrap_or_else(|| DEFAULT_UNIT.to_string());
    let set = file.to_process_set()?;
    info!(path = %path.display(), processes = set.len(), "已加载进程文件");

    let schedule = SrtfSimulator::new(set).run()?;
    let avg = schedule.averages()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if !args.no_banner {
        writeln!(out, "{}", banner())?;
        writeln!(out)?;
    }
    write!(out, "{}", render_gantt_header())?;
    writeln!(out)?;
    writeln!(out, " {}", render_gantt(schedule.trace()))?;
    writeln!(out)?;
    write!(out, "{}", render_details(&schedule, &unit))?;
    writeln!(out)?;
    write!(out, "{}", render_averages(&avg, &unit))?;
    out.flush()?;

    write_report(args, &schedule, &unit)
}

fn run_interactive(args: &Args) -> Result<(), CliError> {
    let unit = args.unit.as_deref().unwrap_or(DEFAULT_UNIT);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let schedules = Session::new(stdin.lock(), stdout.lock())
        .with_unit(unit)
        .with_banner(!args.no_banner)
        .run()?;

    match schedules.last() {
        Some(schedule) => write_report(args, schedule, unit),
        None => Ok(()),
    }
}

fn write_report(args: &Args, schedule: &Schedule, unit: &str) -> Result<(), CliError> {
    let Some(path) = &args.report_json else {
        return Ok(());
    };
    let report = Report::new(schedule, unit)?;
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "报告已写入");
    Ok(())
}
