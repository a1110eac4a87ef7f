//! 统计与报告
//!
//! 只读地消费 `Schedule`：定宽文本表格、Gantt 图与 JSON 导出。

mod banner;
mod export;
mod render;

pub use banner::banner;
pub use export::Report;
pub use render::{
    IDLE_LABEL, format_average, framed_title, render_averages, render_details, render_gantt,
    render_gantt_header,
};
