//! Tests for the single-flight request gate

use tinyembed_application::RequestGate;
use tinyembed_domain::Error;

#[test]
fn test_second_acquire_is_busy() {
    let gate = RequestGate::new();
    let permit = gate.try_acquire().unwrap();

    assert!(gate.is_busy());
    assert!(matches!(gate.try_acquire(), Err(Error::Busy)));

    drop(permit);
    assert!(!gate.is_busy());
}

#[test]
fn test_clones_share_the_flag() {
    let gate = RequestGate::new();
    let clone = gate.clone();
    let _permit = clone.try_acquire().unwrap();
    assert!(gate.is_busy());
    assert!(gate.try_acquire().is_err());
}

#[tokio::test]
async fn test_permit_released_when_task_fails() {
    let gate = RequestGate::new();
    let task_gate = gate.clone();
    let result = tokio::spawn(async move {
        let _permit = task_gate.try_acquire()?;
        Err::<(), Error>(Error::embedding("boom"))
    })
    .await
    .unwrap();

    assert!(result.is_err());
    assert!(!gate.is_busy());
}
