//! A collection of independent engine instances.

use slotmap::{new_key_type, SlotMap};
use sm_ir::{Error, Outputs, Payload};

use crate::Controller;

new_key_type! {
    /// Handle to one controller in a `Rack`.
    pub struct EngineId;
}

/// Independent controllers addressed by id, one per host object.
#[derive(Debug, Default)]
pub struct Rack {
    instances: SlotMap<EngineId, Controller>,
}

impl Rack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, controller: Controller) -> EngineId {
        let id = self.instances.insert(controller);
        log::debug!("engine {:?} added ({} total)", id, self.instances.len());
        id
    }

    pub fn remove(&mut self, id: EngineId) -> Option<Controller> {
        self.instances.remove(id)
    }

    pub fn get(&self, id: EngineId) -> Option<&Controller> {
        self.instances.get(id)
    }

    pub fn get_mut(&mut self, id: EngineId) -> Option<&mut Controller> {
        self.instances.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Route a message to one instance.
    pub fn handle(&mut self, id: EngineId, inlet: usize, payload: Payload) -> Result<Outputs, Error> {
        self.instances
            .get_mut(id)
            .ok_or(Error::UnknownEngine)?
            .handle(inlet, payload)
    }
}
