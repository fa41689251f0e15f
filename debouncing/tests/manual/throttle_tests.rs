// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use debouncing::{ManualScheduler, Throttled, WrapperConfig};
use debouncing_test_utils::helpers::ms;
use debouncing_test_utils::CallRecorder;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

fn throttled(timeout: u64) -> (Throttled<i32, ManualScheduler>, ManualScheduler, CallRecorder<i32>) {
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::new();
    let throttled = Throttled::with_scheduler(recorder.callback(), ms(timeout), scheduler.clone());
    (throttled, scheduler, recorder)
}

#[test]
fn test_throttle_fires_leading_call_synchronously() {
    // Arrange
    let (throttled, _scheduler, recorder) = throttled(100);

    // Act
    throttled.call(1);

    // Assert - no time has passed
    assert_eq!(recorder.calls(), vec![1]);
}

#[test]
fn test_throttle_drops_rest_of_burst() {
    // Arrange
    let (throttled, scheduler, recorder) = throttled(100);

    // Act
    throttled.call(1);
    throttled.call(2);
    throttled.call(3);

    // Assert
    assert_eq!(recorder.calls(), vec![1]);
    scheduler.advance(ms(1000));
    assert_eq!(recorder.calls(), vec![1]);
}

#[test]
fn test_throttle_rearms_after_window() {
    // Arrange
    let (throttled, scheduler, recorder) = throttled(100);

    // Act
    throttled.call(1);
    scheduler.advance(ms(150));
    throttled.call(2);

    // Assert
    assert_eq!(recorder.calls(), vec![1, 2]);
}

#[test]
fn test_throttle_window_length_is_fixed_from_leading_call() {
    // Arrange
    let (throttled, scheduler, recorder) = throttled(100);

    // Act & Assert
    throttled.call(1);
    scheduler.advance(ms(50));
    throttled.call(2);
    scheduler.advance(ms(49));
    throttled.call(3);
    assert_eq!(recorder.calls(), vec![1]);

    // Window opened at t=0 closes at t=100 regardless of the dropped calls
    scheduler.advance(ms(1));
    assert!(!throttled.is_pending());
    throttled.call(4);
    assert_eq!(recorder.calls(), vec![1, 4]);
}

#[test]
fn test_throttle_has_no_trailing_invocation() {
    // Arrange
    let (throttled, scheduler, recorder) = throttled(100);

    // Act
    throttled.call(1);
    throttled.call(99);
    scheduler.advance(ms(100));

    // Assert - the last dropped call is not replayed at window end
    assert_eq!(recorder.calls(), vec![1]);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_throttle_one_timer_per_window() {
    // Arrange
    let (throttled, scheduler, _recorder) = throttled(100);

    // Act
    for value in 0..10 {
        throttled.call(value);
    }

    // Assert
    assert_eq!(scheduler.pending(), 1);
}

#[test]
fn test_throttle_default_timeout_is_250ms() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::new();
    let throttled = Throttled::with_scheduler(recorder.callback(), WrapperConfig::default(), scheduler.clone());

    // Act & Assert
    throttled.call(1);
    scheduler.advance(ms(249));
    throttled.call(2);
    scheduler.advance(ms(1));
    throttled.call(3);

    assert_eq!(throttled.timeout(), ms(250));
    assert_eq!(recorder.calls(), vec![1, 3]);
}

#[test]
fn test_throttle_leading_panic_propagates_to_caller() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::new();
    let record = recorder.callback();
    let throttled = Throttled::with_scheduler(
        move |value: i32| {
            if value < 0 {
                panic!("negative value");
            }
            record(value);
        },
        ms(100),
        scheduler.clone(),
    );

    // Act
    let result = catch_unwind(AssertUnwindSafe(|| throttled.call(-1)));

    // Assert - synchronous failure, window still open
    assert!(result.is_err());
    assert!(throttled.is_pending());
    assert!(!throttled.call(1));

    scheduler.advance(ms(100));
    assert!(throttled.call(2));
    assert_eq!(recorder.calls(), vec![2]);
}

#[test]
fn test_throttle_survives_clock_reaching_its_limit() {
    // Arrange
    let (throttled, scheduler, recorder) = throttled(10);

    // Act
    throttled.call(1);
    scheduler.advance(ms(1));
    scheduler.advance(Duration::MAX);

    // Assert - window closed and the wrapper re-arms
    assert!(!throttled.is_pending());
    assert!(throttled.call(2));
    assert_eq!(recorder.calls(), vec![1, 2]);
}
