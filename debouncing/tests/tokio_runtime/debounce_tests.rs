// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use debouncing::{debounce, debounce_with_timeout, DebounceExt};
use debouncing_test_utils::helpers::{elapse, ms};
use debouncing_test_utils::CallRecorder;
use std::time::Duration;
use tokio::time::pause;

#[tokio::test]
async fn test_debounce_delivers_last_of_burst() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = debounce_with_timeout(recorder.callback(), ms(100))?;

    // Act
    debounced.call(1);
    debounced.call(2);
    debounced.call(3);

    // Assert
    elapse(99).await;
    assert!(recorder.is_empty());

    elapse(2).await;
    assert_eq!(recorder.calls(), vec![3]);

    elapse(500).await;
    assert_eq!(recorder.count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_debounce_late_call_resets_timer() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = debounce_with_timeout(recorder.callback(), ms(100))?;

    // Act
    debounced.call(1);
    elapse(60).await;
    debounced.call(2);

    // Assert - original deadline (t=100) passes silently
    elapse(50).await;
    assert!(recorder.is_empty());

    // New deadline is t=160
    elapse(51).await;
    assert_eq!(recorder.calls(), vec![2]);
    Ok(())
}

#[tokio::test]
async fn test_debounce_default_timeout() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = debounce(recorder.callback())?;

    // Act
    debounced.call("resize");

    // Assert
    assert_eq!(debounced.timeout(), ms(250));
    elapse(249).await;
    assert!(recorder.is_empty());
    elapse(2).await;
    assert_eq!(recorder.calls(), vec!["resize"]);
    Ok(())
}

#[tokio::test]
async fn test_debounce_extension_trait() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = recorder.callback().debounce(ms(20))?;

    // Act
    for value in 0..5u8 {
        debounced.call(value);
        elapse(10).await;
    }

    // Assert
    assert!(recorder.is_empty());
    elapse(11).await;
    assert_eq!(recorder.calls(), vec![4]);
    Ok(())
}

#[tokio::test]
async fn test_debounce_panic_stays_in_spawned_task() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let record = recorder.callback();
    let debounced = debounce_with_timeout(
        move |value: i32| {
            if value < 0 {
                panic!("negative value");
            }
            record(value);
        },
        ms(100),
    )?;

    // Act - the call site never observes the panic
    debounced.call(-1);
    elapse(101).await;

    // Assert - the wrapper keeps working afterwards
    assert!(!debounced.is_pending());
    debounced.call(3);
    elapse(101).await;
    assert_eq!(recorder.calls(), vec![3]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_debounce_zero_timeout_on_worker_threads_delivers_each_call_at_most_once(
) -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = debounce_with_timeout(recorder.callback(), Duration::ZERO)?;

    // Act - timers may fire on other workers while the burst is running
    for value in 0..1_000u32 {
        debounced.call(value);
    }
    elapse(100).await;

    // Assert
    let mut calls = recorder.calls();
    assert!(calls.contains(&999));
    let delivered = calls.len();
    calls.sort_unstable();
    calls.dedup();
    assert_eq!(calls.len(), delivered);
    assert!(!debounced.is_pending());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_debounce_concurrent_burst_fires_once_with_last_args() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = debounce_with_timeout(recorder.callback(), ms(200))?;

    // Act
    let callers: Vec<_> = (0..4u32)
        .map(|caller| {
            let debounced = debounced.clone();
            tokio::spawn(async move {
                for step in 0..250 {
                    debounced.call(caller * 1_000 + step);
                }
            })
        })
        .collect();
    for caller in callers {
        caller.await?;
    }
    debounced.call(u32::MAX);
    elapse(400).await;

    // Assert
    assert_eq!(recorder.calls(), vec![u32::MAX]);
    assert!(!debounced.is_pending());
    Ok(())
}
