//! Merge groups: a tuple of receivers is itself a receiver.
//!
//! On emit, every member with a handler for the event's kind is invoked in
//! tuple order. Groups nest, so a plugin that bundles several receivers can
//! be merged with the host's receiver like any other.

use crate::{
    events::{Event, EventKind},
    kind_set::KindSet,
};

use super::receiver::Receiver;

impl<E: Event> Receiver<E> for () {
    const HANDLED: KindSet = KindSet::EMPTY;

    #[inline]
    fn receive(&mut self, _event: &E) {}
}

macro_rules! impl_merge {
    ($($member:ident . $index:tt),+) => {
        impl<E: Event, $($member: Receiver<E>),+> Receiver<E> for ($($member,)+) {
            const HANDLED: KindSet = KindSet::EMPTY $(.union(<$member as Receiver<E>>::HANDLED))+;
            const HANDLERS: usize = 0 $(+ <$member as Receiver<E>>::HANDLERS)+;

            #[inline]
            fn receive(&mut self, event: &E) {
                let kind = event.kind().index();
                $(
                    if <$member as Receiver<E>>::HANDLED.contains(kind) {
                        self.$index.receive(event);
                    }
                )+
            }

            fn handler_count(kind: E::Kind) -> usize {
                0 $(+ <$member as Receiver<E>>::handler_count(kind))+
            }
        }
    };
}

impl_merge!(A.0);
impl_merge!(A.0, B.1);
impl_merge!(A.0, B.1, C.2);
impl_merge!(A.0, B.1, C.2, D.3);
impl_merge!(A.0, B.1, C.2, D.3, F.4);
impl_merge!(A.0, B.1, C.2, D.3, F.4, G.5);
impl_merge!(A.0, B.1, C.2, D.3, F.4, G.5, H.6);
impl_merge!(A.0, B.1, C.2, D.3, F.4, G.5, H.6, I.7);
impl_merge!(A.0, B.1, C.2, D.3, F.4, G.5, H.6, I.7, J.8);
impl_merge!(A.0, B.1, C.2, D.3, F.4, G.5, H.6, I.7, J.8, K.9);
impl_merge!(A.0, B.1, C.2, D.3, F.4, G.5, H.6, I.7, J.8, K.9, L.10);
impl_merge!(A.0, B.1, C.2, D.3, F.4, G.5, H.6, I.7, J.8, K.9, L.10, M.11);
