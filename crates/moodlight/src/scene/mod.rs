pub mod registry;
pub mod state;
pub mod types;

pub use registry::{RegistryError, SceneRegistry, SceneSelector};
pub use state::{SceneState, SceneStateControl};
pub use types::SceneDefinition;
