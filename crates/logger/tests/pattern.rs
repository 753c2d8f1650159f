//! Pattern compilation and rendering behavior

use chrono::{Local, TimeZone, Utc};
use quill_logger::{Formatter, Level, PatternFormatter, Record};

/// Record with a fixed local wall-clock time, so rendered calendar fields
/// are independent of the machine's time zone.
fn record_at(h: u32, mi: u32, s: u32) -> Record<'static> {
    let local = Local
        .with_ymd_and_hms(2025, 9, 30, h, mi, s)
        .single()
        .expect("unambiguous local time");
    Record::new("test", Level::Info, "payload").with_timestamp(local.with_timezone(&Utc))
}

fn render(formatter: &mut PatternFormatter, record: &Record) -> String {
    let mut out = String::new();
    formatter.format(record, &mut out);
    out
}

#[test]
fn renders_every_directive() {
    let mut formatter = PatternFormatter::new(
        "Year:%Y Month:%m Day:%d Hour:%H Min:%M Sec:%S Level:%l(%L) Name:%n Thread:%t Msg:%v",
    );
    let record = record_at(12, 34, 56);
    let expected = format!(
        "Year:2025 Month:09 Day:30 Hour:12 Min:34 Sec:56 Level:I(info) Name:test Thread:{} Msg:payload\n",
        record.thread_id
    );
    assert_eq!(render(&mut formatter, &record), expected);
}

#[test]
fn numeric_fields_are_zero_padded() {
    let local = Local
        .with_ymd_and_hms(2025, 1, 2, 3, 4, 5)
        .single()
        .expect("unambiguous local time");
    let record =
        Record::new("pad", Level::Debug, "x").with_timestamp(local.with_timezone(&Utc));
    let mut formatter = PatternFormatter::default();
    assert_eq!(
        render(&mut formatter, &record),
        "[2025-01-02 03:04:05] [D] x\n"
    );
}

#[test]
fn recompiling_the_same_pattern_renders_identically() {
    let pattern = "[%Y-%m-%d %H:%M:%S] [%L] [%n] %v";
    let record = record_at(7, 8, 9);
    let mut first = PatternFormatter::new(pattern);
    let mut second = PatternFormatter::new(pattern);
    assert_eq!(render(&mut first, &record), render(&mut second, &record));
}

#[test]
fn escaped_percent_renders_as_single_percent() {
    let mut formatter = PatternFormatter::new("100%% done - %v");
    let record = Record::new("test", Level::Info, "ok");
    assert_eq!(render(&mut formatter, &record), "100% done - ok\n");
}

#[test]
fn unknown_directive_passes_through_verbatim() {
    let mut formatter = PatternFormatter::new("[%Z] %v");
    let record = Record::new("test", Level::Info, "x");
    assert_eq!(render(&mut formatter, &record), "[%Z] x\n");
}

#[test]
fn trailing_lone_percent_is_dropped() {
    let mut formatter = PatternFormatter::new("tail%");
    let record = Record::new("test", Level::Info, "ignored");
    assert_eq!(render(&mut formatter, &record), "tail\n");
}

#[test]
fn every_render_ends_with_one_newline() {
    let mut formatter = PatternFormatter::new("%v");
    let record = Record::new("test", Level::Info, "line");
    assert_eq!(render(&mut formatter, &record), "line\n");

    let mut empty = PatternFormatter::new("");
    assert_eq!(render(&mut empty, &record), "\n");
}

#[test]
fn same_second_reuses_cached_calendar_fields() {
    let mut formatter = PatternFormatter::new("%H:%M:%S %v");
    let base = record_at(12, 34, 56);
    let sibling = base
        .clone()
        .with_timestamp(base.timestamp + chrono::TimeDelta::milliseconds(250));

    render(&mut formatter, &base);
    assert_eq!(formatter.conversion_count(), 1);
    render(&mut formatter, &sibling);
    assert_eq!(formatter.conversion_count(), 1);

    render(&mut formatter, &record_at(12, 34, 57));
    assert_eq!(formatter.conversion_count(), 2);
}

#[test]
fn out_of_order_buckets_still_recompute() {
    let mut formatter = PatternFormatter::new("%S");
    let later = record_at(12, 34, 57);
    let earlier = record_at(12, 34, 56);

    render(&mut formatter, &later);
    assert_eq!(formatter.conversion_count(), 1);

    // A bucket mismatch in either direction invalidates the cache.
    assert_eq!(render(&mut formatter, &earlier), "56\n");
    assert_eq!(formatter.conversion_count(), 2);

    assert_eq!(render(&mut formatter, &later), "57\n");
    assert_eq!(formatter.conversion_count(), 3);
}

#[test]
fn pattern_change_recompiles_and_drops_cache() {
    let mut formatter = PatternFormatter::new("%v");
    render(&mut formatter, &record_at(12, 34, 56));

    formatter.set_pattern("<%L> %v");
    assert_eq!(formatter.pattern(), "<%L> %v");
    assert_eq!(formatter.conversion_count(), 1);

    let record = record_at(12, 34, 56);
    assert_eq!(render(&mut formatter, &record), "<info> payload\n");
    // Same bucket as before the swap, but the cache was dropped with it.
    assert_eq!(formatter.conversion_count(), 2);
}

#[test]
fn clone_starts_with_an_empty_cache() {
    let mut original = PatternFormatter::new("%S %v");
    render(&mut original, &record_at(12, 34, 56));
    assert_eq!(original.conversion_count(), 1);

    let mut clone = original.clone();
    assert_eq!(clone.conversion_count(), 0);

    // Different bucket than the original's cached one: the clone must
    // recompute instead of inheriting stale fields.
    let out = render(&mut clone, &record_at(12, 34, 57));
    assert_eq!(out, "57 payload\n");
    assert_eq!(clone.conversion_count(), 1);
    assert_eq!(original.conversion_count(), 1);
}

#[test]
fn clone_box_behaves_like_the_origin() {
    let original = PatternFormatter::new("[%l] %v");
    let mut boxed = original.clone_box();
    let record = Record::new("test", Level::Error, "boom");
    let mut out = String::new();
    boxed.format(&record, &mut out);
    assert_eq!(out, "[E] boom\n");
}
