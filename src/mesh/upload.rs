/// Flattened vertex data ready for a GPU upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// xyz per vertex
    pub positions: Vec<f32>,
    /// xyz per vertex, unit length
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Host side that turns buffers into a renderable mesh.
///
/// The returned handle is opaque to this crate.
pub trait MeshUploader {
    type Handle;

    fn upload(&mut self, buffers: MeshBuffers) -> Self::Handle;
}

/// Index of a mesh held by a [`BufferStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(usize);

/// Uploader that keeps every mesh in memory
#[derive(Debug, Default)]
pub struct BufferStore {
    meshes: Vec<MeshBuffers>,
}

impl BufferStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, handle: MeshHandle) -> Option<&MeshBuffers> {
        self.meshes.get(handle.0)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn clear(&mut self) {
        self.meshes.clear();
    }
}

impl MeshUploader for BufferStore {
    type Handle = MeshHandle;

    fn upload(&mut self, buffers: MeshBuffers) -> MeshHandle {
        self.meshes.push(buffers);
        MeshHandle(self.meshes.len() - 1)
    }
}
