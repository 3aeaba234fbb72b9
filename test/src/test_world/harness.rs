use hookwire_shared::{AdapterError, Backend, FieldStore};

use crate::{
    helpers::HookLog,
    test_fields::{Health, Position, Score, Tag},
};

use super::MockStorage;

/// A mock engine able to store every test field type.
pub trait TestEngine:
    MockStorage
    + Default
    + FieldStore<Position>
    + FieldStore<Health>
    + FieldStore<Score>
    + FieldStore<Tag>
{
}

impl<W> TestEngine for W where
    W: MockStorage
        + Default
        + FieldStore<Position>
        + FieldStore<Health>
        + FieldStore<Score>
        + FieldStore<Tag>
{
}

/// A backend able to wire every test field type into engine `W`.
pub trait TestBackend<W: TestEngine>:
    Backend<W, Position> + Backend<W, Health> + Backend<W, Score> + Backend<W, Tag>
{
    fn wire_all(world: &mut W) -> Result<(), AdapterError> {
        <Self as Backend<W, Position>>::wire(world)?;
        <Self as Backend<W, Health>>::wire(world)?;
        <Self as Backend<W, Score>>::wire(world)?;
        <Self as Backend<W, Tag>>::wire(world)?;
        Ok(())
    }
}

impl<W: TestEngine, B> TestBackend<W> for B where
    B: Backend<W, Position> + Backend<W, Health> + Backend<W, Score> + Backend<W, Tag>
{
}

/// A fresh engine with every test field type wired through `B`, and the log
/// its hooks write to.
pub fn wired_engine<W: TestEngine, B: TestBackend<W>>() -> Result<(W, HookLog), AdapterError> {
    let log = HookLog::new();
    let mut world = W::default();
    world.attach_host(log.clone());
    B::wire_all(&mut world)?;
    Ok((world, log))
}
