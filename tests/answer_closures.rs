// vim: tw=80
//! Computed answers: a `returning` closure sees the arguments and decides
//! the outcome call by call.
#![deny(warnings)]

use mockall_cookbook::{MockSink, MockTransform, Pipe, Rejected, Relay};

#[test]
fn the_answer_depends_on_the_argument() {
    let mut stage = MockTransform::new();
    stage.expect_transform().returning(|input| {
        if input == "qwe" {
            Ok(Some("asd".to_owned()))
        } else {
            Ok(Some("qwe".to_owned()))
        }
    });

    let relay = Relay::new(stage);
    assert_eq!(Some("asd".to_owned()), relay.relay("qwe").unwrap());
    assert_eq!(Some("qwe".to_owned()), relay.relay("asd").unwrap());
}

#[test]
fn the_answer_can_keep_state() {
    let mut stage = MockTransform::new();
    let mut count = 0;
    stage.expect_transform().returning(move |_| {
        count += 1;
        Ok(Some(count.to_string()))
    });

    let relay = Relay::new(stage);
    assert_eq!(Some("1".to_owned()), relay.relay("qwe").unwrap());
    assert_eq!(Some("2".to_owned()), relay.relay("qwe").unwrap());
}

#[test]
fn the_answer_can_reject() {
    let mut sink = MockSink::new();
    sink.expect_consume()
        .returning(|input| Err(Rejected::new(input, "always rejects")));

    let pipe = Pipe::new(sink);
    assert_eq!(
        Err(Rejected::new("asd", "always rejects")),
        pipe.feed("asd")
    );
}
