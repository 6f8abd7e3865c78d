//! Core domain: tests for the delay scheduler.

use std::time::Duration;

use super::DelayScheduler;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn test_action_waits_for_full_delay() {
    let mut scheduler = DelayScheduler::default();
    scheduler.schedule(ms(0), ms(50), "impulse");

    assert!(scheduler.take_due(ms(20)).is_empty());
    assert!(scheduler.take_due(ms(49)).is_empty());
    assert_eq!(scheduler.take_due(ms(50)), vec!["impulse"]);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_action_fires_only_once() {
    let mut scheduler = DelayScheduler::default();
    scheduler.schedule(ms(0), ms(10), 1);

    assert_eq!(scheduler.take_due(ms(100)), vec![1]);
    assert!(scheduler.take_due(ms(200)).is_empty());
}

#[test]
fn test_order_follows_delay_not_scheduling_order() {
    let mut scheduler = DelayScheduler::default();
    scheduler.schedule(ms(0), ms(200), "restore");
    scheduler.schedule(ms(0), ms(50), "impulse");

    // One long frame makes both due at once
    assert_eq!(scheduler.take_due(ms(250)), vec!["impulse", "restore"]);
}

#[test]
fn test_equal_delays_keep_scheduling_order() {
    let mut scheduler = DelayScheduler::default();
    scheduler.schedule(ms(0), ms(30), 'a');
    scheduler.schedule(ms(0), ms(30), 'b');
    scheduler.schedule(ms(0), ms(30), 'c');

    assert_eq!(scheduler.take_due(ms(30)), vec!['a', 'b', 'c']);
}

#[test]
fn test_delay_counts_from_scheduling_time() {
    let mut scheduler = DelayScheduler::default();
    scheduler.schedule(ms(1000), ms(50), ());

    // Draining in the same frame as scheduling fires nothing
    assert!(scheduler.take_due(ms(1000)).is_empty());
    assert!(scheduler.take_due(ms(1049)).is_empty());
    assert_eq!(scheduler.take_due(ms(1050)).len(), 1);
}

#[test]
fn test_cancel_all_drops_pending_actions() {
    let mut scheduler = DelayScheduler::default();
    scheduler.schedule(ms(0), ms(50), "impulse");
    scheduler.schedule(ms(0), ms(200), "restore");
    assert_eq!(scheduler.pending(), 2);

    assert_eq!(scheduler.cancel_all(), 2);
    assert_eq!(scheduler.pending(), 0);
    assert!(scheduler.take_due(ms(500)).is_empty());
}

#[test]
fn test_schedule_after_cancel_still_fires() {
    let mut scheduler = DelayScheduler::default();
    scheduler.schedule(ms(0), ms(50), "stale");
    scheduler.cancel_all();
    scheduler.schedule(ms(0), ms(50), "fresh");

    assert_eq!(scheduler.take_due(ms(50)), vec!["fresh"]);
}

#[test]
fn test_zero_delay_fires_on_next_drain() {
    let mut scheduler = DelayScheduler::default();
    scheduler.schedule(ms(10), Duration::ZERO, 7);

    assert_eq!(scheduler.take_due(ms(10)), vec![7]);
}
