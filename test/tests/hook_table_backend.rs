use hookwire_shared::{
    AdapterError, Backend, FieldHook, FieldStore, HookTableStorage, HookTables, Storage,
};
use hookwire_test::{
    init_logging, DeferredSetHookWorld, Health, HookLog, HookWorld, Position, Score, Tag,
};

#[test]
fn engine_declares_set_semantics() {
    assert!(<HookWorld as HookTableStorage>::SET_FIRES_ON_ADD);
    assert!(!<DeferredSetHookWorld as HookTableStorage>::SET_FIRES_ON_ADD);
}

#[test]
fn hooks_can_only_be_installed_once() {
    init_logging();
    let mut world = HookWorld::<true>::new();

    <HookTables as Backend<HookWorld, Position>>::wire(&mut world).expect("first wire");
    let second = <HookTables as Backend<HookWorld, Position>>::wire(&mut world);

    assert_eq!(
        second,
        Err(AdapterError::HooksOccupied {
            field: std::any::type_name::<Position>(),
            hook: "on_add",
        })
    );
}

#[test]
fn direct_wiring_fills_only_defined_slots() {
    let mut world = DeferredSetHookWorld::new();

    <HookTables as Backend<DeferredSetHookWorld, Health>>::wire(&mut world).expect("wire");
    <HookTables as Backend<DeferredSetHookWorld, Tag>>::wire(&mut world).expect("wire");

    assert!(world.has_hook::<Health>(FieldHook::OnAdd));
    assert!(!world.has_hook::<Health>(FieldHook::OnSet));
    assert!(world.has_hook::<Health>(FieldHook::OnRemove));
    assert!(!world.has_hook::<Tag>(FieldHook::OnAdd));
}

#[test]
fn set_tracking_occupies_add_and_remove_slots() {
    let mut world = HookWorld::<true>::new();

    <HookTables as Backend<HookWorld, Score>>::wire(&mut world).expect("wire");

    // Score only handles on_set, but the adapter needs add and remove to
    // track first attachments
    assert!(world.has_hook::<Score>(FieldHook::OnAdd));
    assert!(world.has_hook::<Score>(FieldHook::OnSet));
    assert!(world.has_hook::<Score>(FieldHook::OnRemove));
}

#[test]
fn native_set_after_add_is_swallowed_per_record() {
    let log = HookLog::new();
    let mut world = HookWorld::<true>::with_host(log.clone());
    <HookTables as Backend<HookWorld, Position>>::wire(&mut world).expect("wire");

    let first = world.create_record();
    let second = world.create_record();
    world.add_field(first, Position::default()).expect("add");
    world.add_field(second, Position::default()).expect("add");
    world.replace_field(first, Position::new(1.0, 0.0)).expect("replace");

    log.expect_field::<Position>(FieldHook::OnAdd, first);
    log.expect_field::<Position>(FieldHook::OnAdd, second);
    log.expect_field::<Position>(FieldHook::OnSet, first);
    log.expect_empty();
}
