//! Controller layer: UI events emitted by the views and their routing into the board store.

pub mod events;
pub mod orchestration;
