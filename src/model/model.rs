use crate::model::label::{LABEL_INDEX_NONE, Label};
use crate::model::skeleton::{Bone, BoneHandle};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub comment: String,
    pub bones: Vec<Bone>,
    labels: Vec<Label>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            name: String::new(),
            comment: String::new(),
            bones: Vec::new(),
            labels: Vec::new(),
        }
    }
}

impl Model {
    pub fn bone(&self, handle: BoneHandle) -> Option<&Bone> {
        self.bones.get(handle.0 as usize)
    }

    /// Handle of the first parentless bone, the skeleton root.
    pub fn root_bone(&self) -> Option<BoneHandle> {
        self.bones
            .iter()
            .position(|b| b.parent_id < 0)
            .map(|i| BoneHandle(i as u16))
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn label(&self, index: usize) -> Option<&Label> {
        self.labels.get(index)
    }

    /// Appends a label and stamps it with its position in the collection.
    pub fn add_label(&mut self, mut label: Label) {
        label.set_index(self.labels.len() as i32);
        self.labels.push(label);
    }

    /// Removes the label at `index` and compacts the indices of everything
    /// behind it. The removed label is handed back carrying the detached
    /// sentinel index.
    pub fn remove_label(&mut self, index: usize) -> Option<Label> {
        if index >= self.labels.len() {
            return None;
        }
        let mut removed = self.labels.remove(index);
        removed.set_index(LABEL_INDEX_NONE);
        for (i, label) in self.labels.iter_mut().enumerate().skip(index) {
            label.set_index(i as i32);
        }
        Some(removed)
    }

    /// Reorders a label from `from` to `to`, rewriting every affected index.
    pub fn move_label(&mut self, from: usize, to: usize) {
        if from >= self.labels.len() || to >= self.labels.len() || from == to {
            return;
        }
        let label = self.labels.remove(from);
        self.labels.insert(to, label);
        let lo = from.min(to);
        for (i, label) in self.labels.iter_mut().enumerate().skip(lo) {
            label.set_index(i as i32);
        }
    }
}
