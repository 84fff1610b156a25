use samarth_core::{DataStore, InvalidParameter, Outcome};

/// Runs analyses against a borrowed [`DataStore`].
///
/// The engine holds no state of its own: every call builds its filters from
/// its arguments and reads the store afresh.
#[derive(Debug)]
pub struct AnalyticsEngine<'s, S: ?Sized> {
    pub(crate) store: &'s S,
}

impl<'s, S: DataStore + ?Sized> AnalyticsEngine<'s, S> {
    pub const fn new(store: &'s S) -> Self {
        Self { store }
    }
}

impl<S: ?Sized> Clone for AnalyticsEngine<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for AnalyticsEngine<'_, S> {}

/// Run parameter checks in order and stop at the first failure.
pub(crate) fn check<T>(
    checks: impl IntoIterator<Item = Result<(), InvalidParameter>>,
) -> Option<Outcome<T>> {
    checks.into_iter().find_map(|check| check.err().map(|error| {
        tracing::debug!(field = %error.field, reason = %error.reason, "rejected analysis parameters");
        Outcome::invalid(error)
    }))
}
