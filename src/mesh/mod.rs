pub mod ribbon;
pub mod section;
pub mod upload;

pub use ribbon::{MAX_SEGMENTS, RibbonBuilder, RibbonMesh, RibbonParams, RibbonTrack};
pub use section::SectionFrame;
pub use upload::{BufferStore, MeshBuffers, MeshHandle, MeshUploader};
