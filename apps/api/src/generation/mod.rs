// Constellation generation: the request-scoped pipeline and its HTTP handlers.
// Remote collaborators (background generator, image store) are trait objects
// so tests run the whole pipeline in memory.

pub mod handlers;
pub mod orchestrator;

#[cfg(test)]
pub(crate) mod testing;

pub use orchestrator::{ConstellationResult, GenerationError, Orchestrator};
