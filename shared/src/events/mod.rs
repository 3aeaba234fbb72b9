use std::{fmt::Debug, hash::Hash};

pub mod error;
pub mod frame_clock;
pub mod host_events;
pub mod scene;

/// The tag of one event family: a closed, fieldless enum whose variant names
/// double as the hook method names receivers implement.
pub trait EventKind: Copy + Eq + Hash + Debug + 'static {
    /// Every kind, in declaration order.
    const ALL: &'static [Self];
    /// Hook method name of every kind, in declaration order.
    const NAMES: &'static [&'static str];

    fn index(self) -> usize;

    fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }
}

/// A payload sum type. Exactly one variant is active; its kind is the
/// dispatch key.
pub trait Event {
    type Kind: EventKind;

    fn kind(&self) -> Self::Kind;
}

/// Routes an event to the matching method of a family's hooks trait.
///
/// Implemented by `hook_events!` for every type implementing the family's
/// hooks trait.
pub trait Route<H: ?Sized>: Event {
    fn route(&self, hooks: &mut H);
}

/// Declares a closed event family: the payload enum, its kind enum, and a
/// hooks trait with one default no-op method per kind.
///
/// ```rust,ignore
/// hook_events! {
///     #[derive(Debug, Clone)]
///     pub enum StageEvent {
///         kind: StageKind,
///         hooks: StageHooks,
///         Start(Start) => on_start,
///         Update(Update) => on_update,
///         End(End) => on_end,
///     }
/// }
/// ```
#[macro_export]
macro_rules! hook_events {
    (
        $(#[$event_meta:meta])*
        $vis:vis enum $event:ident $(<$($generic:ident),+ $(,)?>)? {
            kind: $kind:ident,
            hooks: $hooks:ident,
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($payload:ty) => $method:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$event_meta])*
        $vis enum $event $(<$($generic),+>)? {
            $(
                $(#[$variant_meta])*
                $variant($payload),
            )+
        }

        #[doc = concat!("Kind tag of [`", stringify!($event), "`].")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $kind {
            $($variant,)+
        }

        impl $crate::EventKind for $kind {
            const ALL: &'static [Self] = &[$($kind::$variant),+];
            const NAMES: &'static [&'static str] = &[$(stringify!($method)),+];

            #[inline]
            fn index(self) -> usize {
                self as usize
            }
        }

        impl ::core::fmt::Display for $kind {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as $crate::EventKind>::name(*self))
            }
        }

        #[doc = concat!(
            "Per-kind handlers for [`", stringify!($event),
            "`]. Every method defaults to a no-op."
        )]
        $vis trait $hooks $(<$($generic),+>)? {
            $(
                #[allow(unused_variables)]
                #[inline]
                fn $method(&mut self, event: &$payload) {}
            )+
        }

        impl $(<$($generic),+>)? $crate::Event for $event $(<$($generic),+>)? {
            type Kind = $kind;

            #[inline]
            fn kind(&self) -> $kind {
                match self {
                    $(Self::$variant(_) => $kind::$variant,)+
                }
            }
        }

        impl<$($($generic,)+)? __Hooks: $hooks $(<$($generic),+>)? + ?Sized> $crate::Route<__Hooks>
            for $event $(<$($generic),+>)?
        {
            #[inline]
            fn route(&self, hooks: &mut __Hooks) {
                match self {
                    $(Self::$variant(event) => hooks.$method(event),)+
                }
            }
        }
    };
}
