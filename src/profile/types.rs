//! Profile data model: a fixed 3x2 grid of binding layers

use serde::{Deserialize, Serialize};

use super::bindings::Binding;

/// Number of profiles per client
pub const PROFILE_COUNT: usize = 3;

/// Number of layers per profile
pub const LAYER_COUNT: usize = 2;

/// One layer of bindings; values indexed by [`Binding`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer([u8; Binding::COUNT]);

impl Layer {
    pub fn get(&self, binding: Binding) -> u8 {
        self.0[binding as usize]
    }

    pub fn set(&mut self, binding: Binding, value: u8) {
        self.0[binding as usize] = value;
    }
}

impl Default for Layer {
    fn default() -> Self {
        let mut values = [0u8; Binding::COUNT];
        for binding in Binding::ALL {
            values[binding as usize] = binding.default_value();
        }
        Self(values)
    }
}

/// A pair of alternate layers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub layers: [Layer; LAYER_COUNT],
}

/// The full per-client grid, created fully defaulted at attach
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSet {
    pub profiles: [Profile; PROFILE_COUNT],
}

impl ProfileSet {
    pub fn layer(&self, profile: usize, layer: usize) -> &Layer {
        &self.profiles[profile].layers[layer]
    }

    pub fn layer_mut(&mut self, profile: usize, layer: usize) -> &mut Layer {
        &mut self.profiles[profile].layers[layer]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::bindings::codes;

    #[test]
    fn test_grid_is_fully_defaulted() {
        let set = ProfileSet::default();

        let mut layers = 0;
        for profile in 0..PROFILE_COUNT {
            for layer in 0..LAYER_COUNT {
                layers += 1;
                let layer = set.layer(profile, layer);
                for binding in Binding::ALL {
                    assert_eq!(layer.get(binding), binding.default_value());
                }
                assert_eq!(layer.get(Binding::Lt), codes::TRIGGER_DEFAULT);
                assert_eq!(layer.get(Binding::Rt), codes::TRIGGER_DEFAULT);
                assert_eq!(layer.get(Binding::RightMainVibration), 0xFF);
                assert_eq!(layer.get(Binding::RtDeadzoneMax), 0xFF);
                assert_eq!(layer.get(Binding::RtDeadzoneMin), 0x00);
                assert_eq!(layer.get(Binding::GuideRed), 0xFF);
                assert_eq!(layer.get(Binding::GuideGreen), 0xFF);
                assert_eq!(layer.get(Binding::GuideBlue), 0xFF);
            }
        }
        assert_eq!(layers, 6);
    }

    #[test]
    fn test_layers_mutate_independently() {
        let mut set = ProfileSet::default();
        set.layer_mut(1, 1).set(Binding::A, 42);

        assert_eq!(set.layer(1, 1).get(Binding::A), 42);
        assert_eq!(set.layer(1, 0).get(Binding::A), codes::A);
        assert_eq!(set.layer(0, 1).get(Binding::A), codes::A);
    }

    #[test]
    fn test_serializes() {
        let set = ProfileSet::default();
        let json = serde_json::to_string(&set).unwrap();
        let back: ProfileSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
