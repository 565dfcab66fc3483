// Remappable profile module
//
// Data model (bindings, layers, grid) plus the store facade that exposes
// the grid as named attributes.

pub mod bindings;
pub mod store;
pub mod types;

pub use bindings::{codes, Binding};
pub use store::ProfileStore;
pub use types::{Layer, Profile, ProfileSet, LAYER_COUNT, PROFILE_COUNT};
