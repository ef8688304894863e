use serde::{Deserialize, Serialize};

/// Non-owning handle to one bone in a model's skeleton.
///
/// Resolved through [`Model::bone`](crate::model::Model::bone); a handle is
/// only meaningful for the model whose bone table it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoneHandle(pub u16);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bone {
    pub name: String,
    pub parent_id: i32, // -1 means no parent
    pub kind: u8,
    pub position: [f32; 3],
}

impl Default for Bone {
    fn default() -> Self {
        Self {
            name: String::new(),
            parent_id: -1,
            kind: 0,
            position: [0.0, 0.0, 0.0],
        }
    }
}
