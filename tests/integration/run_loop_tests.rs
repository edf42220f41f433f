//! Event loop tests: subscription, shutdown, and recovery from failed
//! visits.

use homegreeter::app::ports::{Channel, PhotoTag};
use homegreeter::error::{Error, TweetError, VoiceError};
use homegreeter::events::DoorEvent;
use homegreeter::{VisitOutcome, VisitStats};

use crate::mock_hw::{Call, FailAt, Scenario};

#[test]
fn stopped_controller_still_subscribes_once() {
    let (mut controller, log) = Scenario::visitor().build();
    controller.should_run(false);

    controller.run().unwrap();

    assert_eq!(log.count(&Call::Subscribe), 1);
    assert!(log.visit_calls().is_empty());
    assert!(!controller.is_running());
}

#[test]
fn run_processes_queued_events_until_shutdown() {
    let (mut controller, log) = Scenario::visitor()
        .with_script(vec![
            DoorEvent::Sensor(Channel(1)),
            DoorEvent::Sensor(Channel(2)),
            DoorEvent::Shutdown,
        ])
        .build();

    controller.run().unwrap();

    assert_eq!(log.count(&Call::Subscribe), 1);
    assert_eq!(log.count(&Call::Welcome), 2);
    assert_eq!(
        controller.stats(),
        VisitStats {
            events: 2,
            visitors: 2,
            tweets: 2,
            ..VisitStats::default()
        }
    );
    assert!(!controller.is_running());
}

#[test]
fn events_after_shutdown_are_not_processed() {
    let (mut controller, log) = Scenario::delivery()
        .with_script(vec![
            DoorEvent::Sensor(Channel(1)),
            DoorEvent::Shutdown,
            DoorEvent::Sensor(Channel(1)),
        ])
        .build();

    controller.run().unwrap();

    assert_eq!(log.count(&Call::Welcome), 1);
    assert_eq!(controller.stats().events, 1);
}

#[test]
fn failed_visit_does_not_stop_the_loop() {
    // First visit fails at the tweet, second is answered.
    let (mut controller, log) = Scenario {
        answers: vec![false, true],
        ..Scenario::visitor()
            .failing_at(FailAt::Tweet)
            .with_script(vec![
                DoorEvent::Sensor(Channel(1)),
                DoorEvent::Sensor(Channel(1)),
                DoorEvent::Shutdown,
            ])
    }
    .build();

    controller.run().unwrap();

    let stats = controller.stats();
    assert_eq!(stats.events, 2);
    assert_eq!(stats.failures, 1);
    assert_eq!(stats.answered, 1);
    assert_eq!(log.count(&Call::Welcome), 2);
    assert!(!log.called(&Call::ThankVisitor));
}

#[test]
fn collaborator_error_aborts_the_visit() {
    let (mut controller, log) = Scenario::visitor().failing_at(FailAt::Tweet).build();

    let err = controller.process(Channel(1)).unwrap_err();

    assert_eq!(err, Error::Tweet(TweetError::Unreachable));
    assert_eq!(log.visit_calls().last(), Some(&Call::TweetMessageWithImage {
        message: "message".into(),
        tag: PhotoTag::Visitor,
    }));
}

#[test]
fn welcome_failure_skips_the_rest() {
    let (mut controller, log) = Scenario::visitor().failing_at(FailAt::Welcome).build();

    let err = controller.process(Channel(1)).unwrap_err();

    assert_eq!(err, Error::Voice(VoiceError::EndOfInput));
    assert_eq!(log.visit_calls(), vec![Call::Welcome]);
}

#[test]
fn initial_photo_failure_skips_classification() {
    let (mut controller, log) = Scenario::delivery()
        .failing_at(FailAt::CameraInitial)
        .build();

    assert!(controller.process(Channel(1)).is_err());
    assert!(!log.called(&Call::IsDelivery(PhotoTag::Initial)));
}

#[test]
fn channels_get_identical_independent_visits() {
    let (mut controller, log) = Scenario::visitor().build();

    assert_eq!(
        controller.process(Channel(1)).unwrap(),
        VisitOutcome::MessageTweeted
    );
    let first = log.visit_calls();
    log.clear();

    assert_eq!(
        controller.process(Channel(2)).unwrap(),
        VisitOutcome::MessageTweeted
    );
    assert_eq!(log.visit_calls(), first);
}
