pub mod console;
pub mod report;
pub mod sched;

#[cfg(test)]
mod test;
