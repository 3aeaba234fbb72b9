use std::marker::PhantomData;

use crate::{
    events::{Event, EventKind},
    kind_set::KindSet,
};

use super::receiver::Receiver;

/// Binds one receiver (or a merged tuple of receivers) to the events of
/// family `E`.
///
/// The dispatcher holds nothing but the receiver: for a stateless receiver
/// it is zero-sized, and `emit` compiles down to the mask test plus a direct
/// call of the receiver's handler.
pub struct Dispatcher<E: Event, R: Receiver<E>> {
    receiver: R,
    phantom_e: PhantomData<fn(&E)>,
}

impl<E: Event, R: Receiver<E> + Default> Default for Dispatcher<E, R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<E: Event, R: Receiver<E>> Dispatcher<E, R> {
    pub const fn new(receiver: R) -> Self {
        Self {
            receiver,
            phantom_e: PhantomData,
        }
    }

    /// Delivers `event` to every bound handler of its kind, in declaration
    /// order. Kinds with no handler are skipped silently.
    #[inline]
    pub fn emit(&mut self, event: &E) {
        if R::HANDLED.contains(event.kind().index()) {
            self.receiver.receive(event);
        }
    }

    /// Emits each event in turn.
    pub fn emit_all<'e, I>(&mut self, events: I)
    where
        I: IntoIterator<Item = &'e E>,
        E: 'e,
    {
        for event in events {
            self.emit(event);
        }
    }

    pub fn has_handler(&self, kind: E::Kind) -> bool {
        R::HANDLED.contains(kind.index())
    }

    pub fn handled(&self) -> KindSet {
        R::HANDLED
    }

    /// Number of distinct kinds with at least one handler.
    pub fn handled_kinds(&self) -> usize {
        R::HANDLED.len()
    }

    /// Number of handler functions bound to `kind`.
    pub fn handler_count(&self, kind: E::Kind) -> usize {
        R::handler_count(kind)
    }

    /// Number of handler functions bound across every kind.
    pub fn total_handlers(&self) -> usize {
        R::HANDLERS
    }

    pub fn receiver(&self) -> &R {
        &self.receiver
    }

    pub fn receiver_mut(&mut self) -> &mut R {
        &mut self.receiver
    }

    pub fn into_inner(self) -> R {
        self.receiver
    }
}
