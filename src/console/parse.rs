//! 输入行解析
//!
//! 每行三个整数：`id arrival burst`；`0 0 0` 表示输入结束。

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Process { id: i64, arrival: i64, burst: i64 },
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected 3 values (ID AT BT), found {0}")]
    WrongArity(usize),

    #[error("'{0}' is not an integer")]
    NotAnInteger(String),
}

pub fn parse_triple(line: &str) -> Result<Entry, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(InputError::WrongArity(tokens.len()));
    }
    let mut values = [0_i64; 3];
    for (slot, tok) in values.iter_mut().zip(&tokens) {
        *slot = tok
            .parse()
            .map_err(|_| InputError::NotAnInteger((*tok).to_string()))?;
    }
    Ok(match values {
        [0, 0, 0] => Entry::End,
        [id, arrival, burst] => Entry::Process { id, arrival, burst },
    })
}
