//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus distributes already-emitted events to interested consumers. It is
//! optional plumbing: no domain invariant depends on anyone subscribing, and
//! an operation's outcome is fully described by the events it returns.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

/// One consumer's view of a bus.
///
/// A subscription sees every message published after it was created; earlier
/// messages are gone. Consume from a single thread.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Wait for the next message.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Take the next message if one is already waiting.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }
}

/// Pub/sub contract for distributing messages.
///
/// Implementations pick the transport; the contract is that every live
/// subscription gets a copy of every published message.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
