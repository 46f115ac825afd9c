/// A domain-agnostic event.
///
/// Events are **immutable facts**: once an operation has returned one, it
/// describes something that already happened to the entity that emitted it.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "accounts.account.deposited").
    fn event_type(&self) -> &'static str;
}
