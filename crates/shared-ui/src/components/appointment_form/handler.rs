use shared_types::{AppError, AppointmentDraft};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// Future returned by a [`SubmitHandler`]. Runs on the UI executor, so it
/// need not be `Send`.
pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), AppError>>>>;

/// The caller-supplied action that actually books the appointment.
///
/// The form awaits the returned future and only looks at whether it
/// resolved to `Ok` or `Err`. Clones share the same closure; two handlers
/// compare equal only when they share it.
#[derive(Clone)]
pub struct SubmitHandler {
    inner: Rc<dyn Fn(AppointmentDraft) -> SubmitFuture>,
}

impl SubmitHandler {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(AppointmentDraft) -> Fut + 'static,
        Fut: Future<Output = Result<(), AppError>> + 'static,
    {
        Self {
            inner: Rc::new(move |draft: AppointmentDraft| Box::pin(f(draft)) as SubmitFuture),
        }
    }

    pub fn call(&self, draft: AppointmentDraft) -> SubmitFuture {
        (self.inner)(draft)
    }
}

/// Accepts every booking without doing anything.
impl Default for SubmitHandler {
    fn default() -> Self {
        SubmitHandler::new(|_| async { Ok(()) })
    }
}

impl PartialEq for SubmitHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SubmitHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitHandler").finish_non_exhaustive()
    }
}
