use super::run_all;
use crate::report::{
    banner, format_average, framed_title, render_averages, render_details, render_gantt,
    render_gantt_header,
};

#[test]
fn gantt_line_lists_segment_starts_then_horizon() {
    let s = run_all(&[(1, 0, 5), (2, 1, 3)]);
    assert_eq!(render_gantt(s.trace()), "0 | P1 | 1 | P2 | 4 | P1 | 8");
}

#[test]
fn gantt_line_marks_idle_as_np() {
    let s = run_all(&[(1, 2, 3)]);
    assert_eq!(render_gantt(s.trace()), "0 | NP | 2 | P1 | 5");

    let s = run_all(&[(1, 0, 2), (2, 5, 1)]);
    assert_eq!(render_gantt(s.trace()), "0 | P1 | 2 | NP | 5 | P2 | 6");
}

#[test]
fn framed_title_is_seventy_columns() {
    let t = framed_title("The Details For All Processes");
    assert_eq!(t.len(), 70);
    assert!(t.starts_with('=') && t.ends_with('='));
    assert!(render_gantt_header().lines().all(|l| l.len() <= 70));
}

#[test]
fn details_table_has_one_row_per_process_in_id_order() {
    let s = run_all(&[(2, 1, 3), (1, 0, 5)]);
    let table = render_details(&s, "ms");

    let lines: Vec<&str> = table.lines().collect();
    assert!(lines.contains(&"=      1       =       3 ms     =         8 ms      =        0 ms    ="));
    let row1 = lines.iter().position(|l| l.starts_with("=      1 "));
    let row2 = lines.iter().position(|l| l.starts_with("=      2 "));
    assert!(row1 < row2, "rows out of order:\n{table}");
    assert!(table.contains("Process ID"));
}

#[test]
fn details_table_uses_unit_label() {
    let s = run_all(&[(1, 0, 5)]);
    let table = render_details(&s, "ticks");
    assert!(table.contains("5 ticks"), "{table}");
    assert!(!table.contains(" ms"), "{table}");
}

#[test]
fn averages_table_prints_at_least_one_decimal() {
    let s = run_all(&[(1, 0, 5), (2, 1, 3)]);
    let avg = s.averages().expect("averages");
    let table = render_averages(&avg, "ms");

    assert!(
        table
            .lines()
            .any(|l| l == "=  Average Waiting Time   : 1.5 ms                                   = ")
    );
    assert!(table.contains("Average Turnaround Time: 5.5 ms"));
    assert!(table.contains("Average Response Time  : 0.0 ms"));
}

#[test]
fn format_average_keeps_trailing_decimal() {
    assert_eq!(format_average(2.0), "2.0");
    assert_eq!(format_average(2.333), "2.333");
    assert_eq!(format_average(0.0), "0.0");
}

#[test]
fn format_average_never_uses_exponent_form() {
    assert_eq!(format_average(1e16), "10000000000000000.0");
    assert_eq!(format_average(12345678901234.5), "12345678901234.5");
}

#[test]
fn banner_mentions_title_and_version() {
    let b = banner();
    assert!(b.contains("SRTF Scheduler"));
    assert!(b.contains(env!("CARGO_PKG_VERSION")));
    assert!(b.lines().all(|l| l.len() == 70));
}
