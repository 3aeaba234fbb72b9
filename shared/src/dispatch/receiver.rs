use crate::{
    events::{Event, EventKind},
    kind_set::KindSet,
};

/// A value that observes events of family `E`.
///
/// `HANDLED` lists, at build time, the kinds this receiver has a handler
/// for; dispatch skips every other kind without calling into the receiver.
/// Implement it with the [`hooks!`](crate::hooks) macro rather than by hand
/// so that `HANDLED` always matches the overridden hook methods.
pub trait Receiver<E: Event> {
    const HANDLED: KindSet;
    /// Total number of handler functions, counted across every kind.
    const HANDLERS: usize = Self::HANDLED.len();

    fn receive(&mut self, event: &E);

    /// Number of handler functions bound to `kind`.
    fn handler_count(kind: E::Kind) -> usize {
        usize::from(Self::HANDLED.contains(kind.index()))
    }
}

impl<E: Event, R: Receiver<E>> Receiver<E> for &mut R {
    const HANDLED: KindSet = R::HANDLED;
    const HANDLERS: usize = R::HANDLERS;

    #[inline]
    fn receive(&mut self, event: &E) {
        (**self).receive(event)
    }

    fn handler_count(kind: E::Kind) -> usize {
        R::handler_count(kind)
    }
}

impl<E: Event, R: Receiver<E>> Receiver<E> for Box<R> {
    const HANDLED: KindSet = R::HANDLED;
    const HANDLERS: usize = R::HANDLERS;

    #[inline]
    fn receive(&mut self, event: &E) {
        (**self).receive(event)
    }

    fn handler_count(kind: E::Kind) -> usize {
        R::handler_count(kind)
    }
}

/// Implements a family's hooks trait for a receiver type, and `Receiver`
/// with a `HANDLED` set derived from the names of the functions given.
///
/// ```rust,ignore
/// struct Scoreboard { frames: u64 }
///
/// hooks! {
///     HostEvent<Entity> => impl HostHooks<Entity> for Scoreboard {
///         fn frame_end(&mut self, event: &FrameEnd) {
///             self.frames = event.frame + 1;
///         }
///     }
/// }
/// ```
///
/// A function whose name is not a hook of the family is rejected by the
/// compiler, as is one whose payload type does not match its kind.
#[macro_export]
macro_rules! hooks {
    (
        $event:ty => impl $hooks:ident $(<$($hook_arg:ty),+ $(,)?>)? for $receiver:ty {
            $(
                $(#[$meta:meta])*
                fn $method:ident ( $($args:tt)* ) $body:block
            )*
        }
    ) => {
        impl $hooks $(<$($hook_arg),+>)? for $receiver {
            $(
                $(#[$meta])*
                fn $method ( $($args)* ) $body
            )*
        }

        impl $crate::Receiver<$event> for $receiver {
            const HANDLED: $crate::KindSet = $crate::KindSet::from_names(
                <<$event as $crate::Event>::Kind as $crate::EventKind>::NAMES,
                &[$(stringify!($method)),*],
            );

            #[inline]
            fn receive(&mut self, event: &$event) {
                <$event as $crate::Route<Self>>::route(event, self)
            }
        }
    };
}
