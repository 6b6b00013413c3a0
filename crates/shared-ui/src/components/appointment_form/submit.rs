use dioxus::prelude::*;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use super::handler::SubmitHandler;
use super::state::{BookingState, SubmitAttempt};

/// Somewhere a [`BookingState`] snapshot lives and can be swapped out.
pub trait BookingStore {
    fn snapshot(&self) -> BookingState;
    fn replace(&mut self, next: BookingState);
}

impl BookingStore for Signal<BookingState> {
    fn snapshot(&self) -> BookingState {
        self.peek().clone()
    }

    fn replace(&mut self, next: BookingState) {
        self.set(next);
    }
}

impl BookingStore for Rc<RefCell<BookingState>> {
    fn snapshot(&self) -> BookingState {
        self.borrow().clone()
    }

    fn replace(&mut self, next: BookingState) {
        *self.borrow_mut() = next;
    }
}

/// Handle one press of the submit button.
///
/// Validation and the switch to the in-flight snapshot happen before this
/// returns. When the draft is valid, the returned future calls `handler` and
/// settles whatever snapshot is current once the handler finishes. `None`
/// means nothing needs to run.
pub fn submit_booking<S>(
    mut store: S,
    handler: &SubmitHandler,
) -> Option<impl Future<Output = ()> + 'static>
where
    S: BookingStore + 'static,
{
    match store.snapshot().submit() {
        SubmitAttempt::Busy => {
            tracing::debug!("booking submit ignored, request already in flight");
            None
        }
        SubmitAttempt::Invalid(next) => {
            let fields: Vec<&str> = next.errors.fields().map(|f| f.as_str()).collect();
            tracing::debug!(?fields, "booking draft failed validation");
            store.replace(next);
            None
        }
        SubmitAttempt::Dispatch { next, draft } => {
            store.replace(next);
            let handler = handler.clone();
            Some(async move {
                tracing::debug!("dispatching appointment request");
                let outcome = handler.call(draft).await;
                match &outcome {
                    Ok(()) => tracing::info!("appointment request accepted"),
                    Err(e) => tracing::warn!(kind = %e.kind, error = %e, "appointment request failed"),
                }
                let settled = store.snapshot().settle(&outcome);
                store.replace(settled);
            })
        }
    }
}
