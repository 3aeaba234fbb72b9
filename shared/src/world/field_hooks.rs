use std::fmt;

use crate::{events::EventKind, kind_set::KindSet};

use super::{component_payload::ComponentPayload, storage::Storage};

/// The three lifecycle points of a field on a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldHook {
    OnAdd,
    OnSet,
    OnRemove,
}

impl EventKind for FieldHook {
    const ALL: &'static [Self] = &[FieldHook::OnAdd, FieldHook::OnSet, FieldHook::OnRemove];
    const NAMES: &'static [&'static str] = &["on_add", "on_set", "on_remove"];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle handlers of a field type, for storage engine `S`.
///
/// Handlers are plain associated functions: they receive the record and the
/// engine's host handle, never the engine itself. Implement with
/// [`field_hooks!`](crate::field_hooks) so that `HANDLED` lists exactly the
/// handlers defined.
pub trait FieldHooks<S: Storage>: 'static {
    const HANDLED: KindSet;

    /// Runs once, when the field is first attached to a record.
    #[allow(unused_variables)]
    fn on_add(payload: ComponentPayload<'_, S>) {}

    /// Runs when an attached field is replaced with a new value.
    #[allow(unused_variables)]
    fn on_set(payload: ComponentPayload<'_, S>) {}

    /// Runs once, when the field is removed or its record destroyed.
    #[allow(unused_variables)]
    fn on_remove(payload: ComponentPayload<'_, S>) {}

    fn handles(hook: FieldHook) -> bool {
        Self::HANDLED.contains(hook.index())
    }
}

/// Implements [`FieldHooks`](crate::FieldHooks) for a field type, either for
/// one storage engine or for every engine meeting a bound.
///
/// ```rust,ignore
/// field_hooks! {
///     SignalWorld => impl FieldHooks for Position {
///         fn on_add(payload: PayloadOf<'_, SignalWorld>) {
///             log_spawn(payload.record());
///         }
///     }
/// }
///
/// field_hooks! {
///     impl<S: MockStorage> FieldHooks for Health {
///         fn on_remove(payload: ComponentPayload<'_, S>) {}
///     }
/// }
/// ```
#[macro_export]
macro_rules! field_hooks {
    (
        impl<$storage:ident $(: $bound:path)?> FieldHooks for $field:ty {
            $(
                $(#[$meta:meta])*
                fn $method:ident ( $($args:tt)* ) $body:block
            )*
        }
    ) => {
        impl<$storage: $crate::Storage $(+ $bound)?> $crate::FieldHooks<$storage> for $field {
            const HANDLED: $crate::KindSet = $crate::KindSet::from_names(
                <$crate::FieldHook as $crate::EventKind>::NAMES,
                &[$(stringify!($method)),*],
            );

            $(
                $(#[$meta])*
                fn $method ( $($args)* ) $body
            )*
        }
    };
    (
        $storage:ty => impl FieldHooks for $field:ty {
            $(
                $(#[$meta:meta])*
                fn $method:ident ( $($args:tt)* ) $body:block
            )*
        }
    ) => {
        impl $crate::FieldHooks<$storage> for $field {
            const HANDLED: $crate::KindSet = $crate::KindSet::from_names(
                <$crate::FieldHook as $crate::EventKind>::NAMES,
                &[$(stringify!($method)),*],
            );

            $(
                $(#[$meta])*
                fn $method ( $($args)* ) $body
            )*
        }
    };
}
