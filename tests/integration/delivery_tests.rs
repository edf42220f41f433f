//! Delivery scenarios: someone collects the parcel, or the deliverer is
//! asked to leave it.

use homegreeter::VisitOutcome;
use homegreeter::app::ports::{Channel, PhotoTag};

use crate::mock_hw::{Call, Scenario};

const CH: Channel = Channel(7);

#[test]
fn someone_in_collects_parcel() {
    let (mut controller, log) = Scenario::delivery().answered().build();

    let outcome = controller.process(CH).unwrap();

    assert_eq!(outcome, VisitOutcome::DeliveryAnswered);
    assert_eq!(
        log.visit_calls(),
        vec![
            Call::Welcome,
            Call::CameraTakePhoto(PhotoTag::Initial),
            Call::IsDelivery(PhotoTag::Initial),
            Call::AskDelivererToWait,
            Call::RequestSomeone,
            Call::PollAnswer,
        ]
    );
}

#[test]
fn nobody_in_asks_to_leave_parcel() {
    let (mut controller, log) = Scenario::delivery().build();

    let outcome = controller.process(CH).unwrap();

    assert_eq!(outcome, VisitOutcome::ParcelLeft);
    assert_eq!(
        log.visit_calls(),
        vec![
            Call::Welcome,
            Call::CameraTakePhoto(PhotoTag::Initial),
            Call::IsDelivery(PhotoTag::Initial),
            Call::AskDelivererToWait,
            Call::RequestSomeone,
            Call::PollAnswer,
            Call::LeaveParcel,
        ]
    );
}

#[test]
fn delivery_never_asks_names_or_tweets() {
    for answered in [true, false] {
        let scenario = if answered {
            Scenario::delivery().answered()
        } else {
            Scenario::delivery()
        };
        let (mut controller, log) = scenario.build();
        controller.process(CH).unwrap();

        assert!(!log.called(&Call::AskVisitorName));
        assert!(!log.called(&Call::AskOccupierName));
        assert!(!log.called(&Call::RequestOccupier));
        assert!(!log.called(&Call::TakeMessage));
        assert!(!log.called(&Call::ThankVisitor));
        assert!(!log.called(&Call::CameraTakePhoto(PhotoTag::Visitor)));
        assert!(!log.calls().iter().any(|c| matches!(
            c,
            Call::TweetMessageWithImage { .. } | Call::TweetImage(_)
        )));
    }
}

#[test]
fn outcome_reports_delivery() {
    let (mut controller, _log) = Scenario::delivery().build();
    let outcome = controller.process(CH).unwrap();
    assert!(outcome.is_delivery());
    assert!(!outcome.was_answered());
}
