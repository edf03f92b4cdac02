use super::*;
use std::thread;

#[test]
fn test_search_limits_depth_only() {
    let limits = SearchLimits::depth(5);
    assert_eq!(limits.depth, 5);
    assert!(limits.move_time.is_none());
    assert!(limits.max_nodes.is_none());
    assert!(!limits.should_stop());
}

#[test]
fn test_search_limits_with_time() {
    let limits = SearchLimits::depth_and_time(4, Duration::from_millis(100));
    assert_eq!(limits.depth, 4);
    assert_eq!(limits.move_time, Some(Duration::from_millis(100)));

    let open = SearchLimits::time(Duration::from_millis(50));
    assert_eq!(open.depth, u8::MAX);
}

#[test]
fn test_time_control_expiry() {
    let tc = TimeControl::new(Some(Duration::from_millis(10)));
    tc.start();
    assert!(!tc.is_stopped());

    thread::sleep(Duration::from_millis(20));
    assert!(tc.check_time());
    assert!(tc.is_stopped());
    assert_eq!(tc.remaining(), Some(Duration::ZERO));
}

#[test]
fn test_time_control_no_limit() {
    let tc = TimeControl::new(None);
    tc.start();
    thread::sleep(Duration::from_millis(10));
    assert!(!tc.check_time());
    assert!(!tc.is_stopped());
    assert!(tc.remaining().is_none());
}

#[test]
fn test_time_control_manual_stop() {
    let tc = TimeControl::new(None);
    tc.start();
    assert!(!tc.is_stopped());
    tc.stop();
    assert!(tc.is_stopped());
    tc.reset();
    assert!(!tc.is_stopped());
}

#[test]
fn test_stop_is_shared_between_clones() {
    let limits = SearchLimits::depth(6);
    let handle = limits.time_control.clone();
    let worker = thread::spawn(move || handle.stop());
    worker.join().unwrap();
    assert!(limits.should_stop());
}

#[test]
fn test_start_keeps_pending_stop() {
    let limits = SearchLimits::depth(3);
    limits.stop();
    limits.start();
    assert!(limits.should_stop());
    assert!(limits.poll(1));
}

#[test]
fn test_poll_enforces_node_budget() {
    let limits = SearchLimits::depth(10).with_max_nodes(5);
    limits.start();
    for nodes in 1..5 {
        assert!(!limits.poll(nodes));
    }
    assert!(limits.poll(5));
    assert!(limits.should_stop());
}

#[test]
fn test_poll_reads_clock_periodically() {
    let limits = SearchLimits::depth_and_time(10, Duration::from_millis(1));
    limits.start();
    thread::sleep(Duration::from_millis(5));
    // Off-interval polls skip the clock
    assert!(!limits.poll(1));
    assert!(!limits.poll(1023));
    assert!(limits.poll(1024));
    assert!(limits.should_stop());
}

#[test]
fn test_elapsed_is_zero_before_start() {
    let tc = TimeControl::default();
    assert_eq!(tc.elapsed(), Duration::ZERO);
}
