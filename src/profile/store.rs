//! Profile store facade
//!
//! Owns the 3x2 binding grid and the attribute surface over it. The flat
//! attribute namespace has one node per binding name; text reads and writes
//! address the active layer cursor, which starts at profile 0, layer 0.
//!
//! No cross-field validation happens here: a deadzone minimum above its
//! maximum is stored as written. Per-field range checking only.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use gip_transport::ClientInfo;

use super::bindings::Binding;
use super::types::{ProfileSet, LAYER_COUNT, PROFILE_COUNT};
use crate::error::{InitError, ValidationError};
use crate::hal::{AttributeTree, GroupHandle, NodeHandle};

struct StoreState {
    set: ProfileSet,
    active_profile: u8,
    active_layer: u8,
}

/// Per-client store of remappable button/trigger/vibration/light bindings
pub struct ProfileStore {
    attrs: Arc<dyn AttributeTree>,
    nodes: Vec<(Binding, NodeHandle)>,
    group: GroupHandle,
    state: Mutex<StoreState>,
}

impl std::fmt::Debug for ProfileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileStore")
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}

impl ProfileStore {
    /// Build the fully-defaulted grid and publish the attribute surface
    ///
    /// One node per binding name plus a group collecting them. If any node
    /// or the group cannot be created, everything created so far is
    /// released before the error is returned.
    pub fn init(attrs: Arc<dyn AttributeTree>, client: &ClientInfo) -> Result<Self, InitError> {
        let mut nodes: Vec<(Binding, NodeHandle)> = Vec::with_capacity(Binding::COUNT);

        for binding in Binding::ALL {
            match attrs.create_node(binding.name()) {
                Ok(handle) => nodes.push((binding, handle)),
                Err(source) => {
                    for (_, handle) in &nodes {
                        attrs.release_node(*handle);
                    }
                    return Err(InitError::Node {
                        name: binding.name(),
                        source,
                    });
                }
            }
        }

        let handles: Vec<NodeHandle> = nodes.iter().map(|(_, h)| *h).collect();
        let group = match attrs.create_group(&client.dev_name, &handles) {
            Ok(group) => group,
            Err(source) => {
                for handle in &handles {
                    attrs.release_node(*handle);
                }
                return Err(InitError::Node {
                    name: "profile group",
                    source,
                });
            }
        };

        Ok(Self {
            attrs,
            nodes,
            group,
            state: Mutex::new(StoreState {
                set: ProfileSet::default(),
                active_profile: 0,
                active_layer: 0,
            }),
        })
    }

    /// Read the active layer's value for a binding, by attribute name
    pub fn read(&self, name: &str) -> Result<u8, ValidationError> {
        let binding = Binding::from_name(name)
            .ok_or_else(|| ValidationError::UnknownBinding(name.to_string()))?;

        let state = self.state.lock();
        Ok(state
            .set
            .layer(state.active_profile as usize, state.active_layer as usize)
            .get(binding))
    }

    /// Write a decimal value to the active layer, by attribute name
    ///
    /// Anything that is not an unsigned decimal in 0-255 is rejected with
    /// the stored value unchanged.
    pub fn write(&self, name: &str, text: &str) -> Result<(), ValidationError> {
        let binding = Binding::from_name(name)
            .ok_or_else(|| ValidationError::UnknownBinding(name.to_string()))?;

        let value: u8 = text.trim().parse().map_err(|_| ValidationError::Parse {
            input: text.to_string(),
        })?;

        debug!(binding = name, value, "profile write");

        let mut state = self.state.lock();
        let (profile, layer) = (state.active_profile as usize, state.active_layer as usize);
        state.set.layer_mut(profile, layer).set(binding, value);
        Ok(())
    }

    /// Move the active layer cursor
    pub fn select(&self, profile: u8, layer: u8) -> Result<(), ValidationError> {
        check_indices(profile, layer)?;

        let mut state = self.state.lock();
        state.active_profile = profile;
        state.active_layer = layer;
        Ok(())
    }

    /// Active (profile, layer) cursor
    pub fn active(&self) -> (u8, u8) {
        let state = self.state.lock();
        (state.active_profile, state.active_layer)
    }

    /// Read any cell of the grid directly
    pub fn value(&self, profile: u8, layer: u8, binding: Binding) -> Result<u8, ValidationError> {
        check_indices(profile, layer)?;
        let state = self.state.lock();
        Ok(state.set.layer(profile as usize, layer as usize).get(binding))
    }

    /// Write any cell of the grid directly
    pub fn set_value(
        &self,
        profile: u8,
        layer: u8,
        binding: Binding,
        value: u8,
    ) -> Result<(), ValidationError> {
        check_indices(profile, layer)?;
        let mut state = self.state.lock();
        state
            .set
            .layer_mut(profile as usize, layer as usize)
            .set(binding, value);
        Ok(())
    }

    /// Snapshot of the whole grid
    pub fn snapshot(&self) -> ProfileSet {
        self.state.lock().set.clone()
    }

    /// Registered node handles, in binding order
    pub fn nodes(&self) -> &[(Binding, NodeHandle)] {
        &self.nodes
    }

    pub fn group(&self) -> GroupHandle {
        self.group
    }

    /// Release the attribute surface at detach
    pub fn release(&self) {
        self.attrs.release_group(self.group);
        for (_, handle) in &self.nodes {
            self.attrs.release_node(*handle);
        }
    }
}

fn check_indices(profile: u8, layer: u8) -> Result<(), ValidationError> {
    if profile as usize >= PROFILE_COUNT {
        return Err(ValidationError::IndexOutOfRange {
            what: "profile",
            value: profile,
            max: PROFILE_COUNT as u8 - 1,
        });
    }
    if layer as usize >= LAYER_COUNT {
        return Err(ValidationError::IndexOutOfRange {
            what: "layer",
            value: layer,
            max: LAYER_COUNT as u8 - 1,
        });
    }
    Ok(())
}
