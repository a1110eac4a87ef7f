//! JSON 进程文件（批处理模式）

use crate::sched::{ProcessSet, ValidationError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessFile {
    /// 输出时间单位标签，缺省由命令行决定
    #[serde(default)]
    pub unit: Option<String>,
    pub processes: Vec<ProcessSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub id: i64,
    pub arrival: i64,
    pub burst: i64,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse process file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("processes[{index}]: {source}")]
    Rejected {
        index: usize,
        source: ValidationError,
    },
}

impl ProcessFile {
    pub fn load(path: &Path) -> Result<ProcessFile, LoadError> {
        let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ProcessFile::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<ProcessFile, LoadError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// 逐条准入，遇到第一条被拒绝的定义即停止。
    pub fn to_process_set(&self) -> Result<ProcessSet, LoadError> {
        let mut set = ProcessSet::new();
        for (index, spec) in self.processes.iter().enumerate() {
            set.add_process(spec.id, spec.arrival, spec.burst)
                .map_err(|source| LoadError::Rejected { index, source })?;
        }
        Ok(set)
    }
}
