// Interaction core
// Pure gesture logic: coordinate mapping and the block resize state machine.
// No egui types here so the whole module is unit-testable headless.

pub mod grid;
pub mod resize;
