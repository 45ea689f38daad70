//! Tri-state result of an asynchronous call.
//!
//! An [`Outcome`] is either still [`Pending`](Outcome::Pending), a
//! [`Success`](Outcome::Success) holding data, or a
//! [`Failure`](Outcome::Failure) holding an error. It is built once when the
//! call settles and is replaced, never mutated, when a newer state arrives.

use std::future::Future;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<V, E> {
    Pending,
    Success(V),
    Failure(E),
}

/// Flattened view of an [`Outcome`], as returned by [`Outcome::into_parts`].
///
/// At most one of `data` and `error` is `Some`; when both are `None`,
/// `is_pending` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeParts<V, E> {
    pub data: Option<V>,
    pub error: Option<E>,
    pub is_pending: bool,
}

impl<V, E> Outcome<V, E> {
    pub fn succeed(data: V) -> Self {
        Outcome::Success(data)
    }

    pub fn failed(error: E) -> Self {
        Outcome::Failure(error)
    }

    pub fn pending() -> Self {
        Outcome::Pending
    }

    /// Runs `f` and captures its result. An `Err` becomes a failure; it is
    /// never handed back to the caller as an `Err`.
    pub fn run_catching<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<V, E>,
    {
        f().into()
    }

    /// Awaits `fut` and captures its resolution the same way as
    /// [`run_catching`](Self::run_catching).
    pub async fn run_catching_async<Fut>(fut: Fut) -> Self
    where
        Fut: Future<Output = Result<V, E>>,
    {
        fut.await.into()
    }

    /// Calls exactly one of the three handlers.
    pub fn fold<R>(
        self,
        on_success: impl FnOnce(V) -> R,
        on_failure: impl FnOnce(E) -> R,
        on_pending: impl FnOnce() -> R,
    ) -> R {
        match self {
            Outcome::Success(data) => on_success(data),
            Outcome::Failure(error) => on_failure(error),
            Outcome::Pending => on_pending(),
        }
    }

    /// Two-handler variant of [`fold`](Self::fold).
    ///
    /// Careful: a pending outcome is routed to `on_failure` with `None`, so
    /// "not finished yet" looks like "failed without an error". Prefer `fold`
    /// wherever a pending outcome can reach this call.
    pub fn fold_or_error<R>(
        self,
        on_success: impl FnOnce(V) -> R,
        on_failure: impl FnOnce(Option<E>) -> R,
    ) -> R {
        match self {
            Outcome::Success(data) => on_success(data),
            Outcome::Failure(error) => on_failure(Some(error)),
            Outcome::Pending => on_failure(None),
        }
    }

    pub fn into_parts(self) -> OutcomeParts<V, E> {
        match self {
            Outcome::Success(data) => OutcomeParts {
                data: Some(data),
                error: None,
                is_pending: false,
            },
            Outcome::Failure(error) => OutcomeParts {
                data: None,
                error: Some(error),
                is_pending: false,
            },
            Outcome::Pending => OutcomeParts {
                data: None,
                error: None,
                is_pending: true,
            },
        }
    }

    /// `None` while pending.
    pub fn into_result(self) -> Option<Result<V, E>> {
        match self {
            Outcome::Success(data) => Some(Ok(data)),
            Outcome::Failure(error) => Some(Err(error)),
            Outcome::Pending => None,
        }
    }

    pub fn data(&self) -> Option<&V> {
        match self {
            Outcome::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Failure(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    pub fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Outcome::Success(data) => Outcome::Success(data),
            Outcome::Failure(error) => Outcome::Failure(error),
            Outcome::Pending => Outcome::Pending,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Success(data) => Outcome::Success(f(data)),
            Outcome::Failure(error) => Outcome::Failure(error),
            Outcome::Pending => Outcome::Pending,
        }
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<V, F> {
        match self {
            Outcome::Success(data) => Outcome::Success(data),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
            Outcome::Pending => Outcome::Pending,
        }
    }
}

impl<V, E> Default for Outcome<V, E> {
    fn default() -> Self {
        Outcome::Pending
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(data) => Outcome::Success(data),
            Err(error) => Outcome::Failure(error),
        }
    }
}
