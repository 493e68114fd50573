mod common;

use common::{panics, PanicOnDrop};
use log::{Level, LevelFilter, Log, Metadata, Record};
use sovran_variant::Variant;
use std::cell::RefCell;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

/// Keeps records per thread so parallel tests do not see each other.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let entry = (record.level(), record.args().to_string());
        RECORDS.with(|records| records.borrow_mut().push(entry));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

fn capture() {
    // Another test may have installed it already.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Debug);
    RECORDS.with(|records| records.borrow_mut().clear());
}

fn records() -> Vec<(Level, String)> {
    RECORDS.with(|records| records.borrow().clone())
}

#[test]
fn test_panicking_destructor_logs_valueless_transition() {
    capture();
    let mut value: Variant![PanicOnDrop, i32] = Variant::new(PanicOnDrop);

    assert!(panics(|| value.assign(Variant::new(1i32))));
    assert!(value.valueless_by_exception());

    let records = records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, Level::Debug);
    assert!(records[0].1.contains("valueless"));
    assert!(records[0].1.contains("move assignment"));
}

#[test]
fn test_panicking_emplace_logs_valueless_transition() {
    capture();
    let mut value: Variant![i32, String] = Variant::new(1i32);

    assert!(panics(|| {
        value.emplace::<String, _>(|| panic!("constructor failed"));
    }));

    let records = records();
    assert_eq!(records.len(), 1);
    assert!(records[0].1.contains("emplace"));
}

#[test]
fn test_successful_operations_log_nothing() {
    capture();
    let mut value: Variant![i32, String] = Variant::new(1i32);

    value.set(String::from("text"));
    value.emplace::<i32, _>(|| 2);
    value.assign_from("again");
    value.clone_from(&Variant::new(3i32));

    assert!(records().is_empty());
}
