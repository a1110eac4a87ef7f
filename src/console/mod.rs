//! 输入端
//!
//! 交互式逐行输入与 JSON 进程文件，两者都只把通过准入的定义交给调度核心。

mod parse;
mod process_file;
mod session;

pub use parse::{Entry, InputError, parse_triple};
pub use process_file::{LoadError, ProcessFile, ProcessSpec};
pub use session::Session;
