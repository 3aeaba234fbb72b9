/// Assert that a log holds exactly the given `(source, hook)` invocations,
/// in order, and nothing after them
#[macro_export]
macro_rules! assert_hook_sequence {
    ($log:expr, [$(($source:expr, $hook:expr)),* $(,)?]) => {{
        let log: &$crate::helpers::HookLog = &$log;
        $(
            log.expect_next_from($source, $hook);
        )*
        log.expect_empty();
    }};
}

/// Assert that a dispatcher reports the given number of handlers per kind
#[macro_export]
macro_rules! assert_handler_counts {
    ($dispatcher:expr, { $($kind:expr => $count:expr),* $(,)? }) => {{
        $(
            assert_eq!(
                $dispatcher.handler_count($kind),
                $count,
                "handler count mismatch for kind {:?}",
                $kind
            );
            assert_eq!(
                $dispatcher.has_handler($kind),
                $count > 0,
                "has_handler mismatch for kind {:?}",
                $kind
            );
        )*
    }};
}

/// Assert that field type `$field` on `$record` saw exactly `$adds` adds,
/// `$sets` sets and `$removes` removes
#[macro_export]
macro_rules! assert_field_hook_counts {
    ($log:expr, $field:ty, $record:expr, add: $adds:expr, set: $sets:expr, remove: $removes:expr) => {{
        let log: &$crate::helpers::HookLog = &$log;
        assert_eq!(
            log.count_field::<$field>($crate::hookwire_shared::FieldHook::OnAdd, $record),
            $adds,
            "on_add count mismatch for {}",
            stringify!($field)
        );
        assert_eq!(
            log.count_field::<$field>($crate::hookwire_shared::FieldHook::OnSet, $record),
            $sets,
            "on_set count mismatch for {}",
            stringify!($field)
        );
        assert_eq!(
            log.count_field::<$field>($crate::hookwire_shared::FieldHook::OnRemove, $record),
            $removes,
            "on_remove count mismatch for {}",
            stringify!($field)
        );
    }};
}
