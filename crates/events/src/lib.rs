//! `primer-events` — observable domain facts and their distribution.
//!
//! Domain operations return the events they emitted; this crate carries the
//! shared event contract plus a small in-process bus for callers that want to
//! observe those facts without the domain printing anything.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
