use super::*;
use wire::resources::{Roles, Schools};

#[test]
fn save_without_id_creates_at_base_path() {
    assert_eq!(save_target::<Schools>(None), (Method::Post, "/schools".to_owned()));
}

#[test]
fn save_with_id_updates_item_path() {
    assert_eq!(save_target::<Roles>(Some("r1")), (Method::Put, "/roles/r1".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn zero_code_count_is_rejected_before_sending() {
    let err = block_on_ready(generate_codes("ss1".to_owned(), 0)).expect_err("zero count");
    assert_eq!(err, ApiError::Validation("Code count must be at least 1".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
