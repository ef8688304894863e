use crate::encoding::{TextEncoding, decode_fixed};
use crate::model::BoneHandle;
use serde::{Deserialize, Serialize};

/// Fixed width of a label name field in the file, in encoding units.
pub const LABEL_NAME_LEN: usize = 50;

/// Index value a label carries while it is detached from any collection.
pub const LABEL_INDEX_NONE: i32 = -1;

/// A named grouping of bones inside a model, as shown in a viewer's
/// bone-frame panel.
///
/// Special labels are the built-in groups the format implies rather than
/// stores (the root frame); ordinary labels are authored in the file.
/// The bone list is copied in at construction and only readable afterwards;
/// the handles stay valid as long as the owning model's bone table does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    name: String,
    index: i32,
    special: bool,
    bones: Vec<BoneHandle>,
}

impl Label {
    /// Builds a label from a raw fixed-width name field.
    ///
    /// Decoding is lossy and bounded to [`LABEL_NAME_LEN`] units; malformed
    /// name bytes degrade to a best-effort string, never an error. The bone
    /// slice is copied, so the caller's buffer can be reused or mutated
    /// freely afterwards.
    pub fn from_raw(
        raw_name: &[u8],
        encoding: TextEncoding,
        bones: &[BoneHandle],
        index: i32,
        special: bool,
    ) -> Self {
        Self {
            name: decode_fixed(raw_name, encoding, LABEL_NAME_LEN),
            index,
            special,
            bones: bones.to_vec(),
        }
    }

    /// Builds a label whose name is already decoded (synthesized groups).
    pub fn new(name: impl Into<String>, bones: &[BoneHandle], index: i32, special: bool) -> Self {
        Self {
            name: name.into(),
            index,
            special,
            bones: bones.to_vec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> i32 {
        self.index
    }

    /// Overwrites the stored index verbatim. No bounds or uniqueness check
    /// happens here; the owning model keeps the collection consistent.
    pub fn set_index(&mut self, index: i32) {
        self.index = index;
    }

    pub fn is_special(&self) -> bool {
        self.special
    }

    pub fn bones(&self) -> &[BoneHandle] {
        &self.bones
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_padded_root_name() {
        let mut raw = [0u8; LABEL_NAME_LEN];
        raw[..4].copy_from_slice(b"Root");
        let label = Label::from_raw(&raw, TextEncoding::ShiftJis, &[], 0, true);
        assert_eq!(label.name(), "Root");
        assert_eq!(label.index(), 0);
        assert!(label.is_special());
        assert!(label.bones().is_empty());
    }

    #[test]
    fn malformed_name_still_yields_a_string() {
        // Shift-JIS lead byte with nothing after it
        let raw = [0x83u8];
        let label = Label::from_raw(&raw, TextEncoding::ShiftJis, &[], 3, false);
        assert!(!label.is_special());
        assert_eq!(label.index(), 3);
        // Best-effort, not absent: decoding substituted a replacement char.
        assert_eq!(label.name(), "\u{FFFD}");
    }

    #[test]
    fn bone_list_is_copied_not_aliased() {
        let mut source = vec![BoneHandle(0), BoneHandle(2), BoneHandle(5)];
        let a = Label::from_raw(b"arms", TextEncoding::ShiftJis, &source, 1, false);
        let b = Label::from_raw(b"arms", TextEncoding::ShiftJis, &source, 2, false);
        source.clear();
        source.push(BoneHandle(9));
        assert_eq!(a.bones(), &[BoneHandle(0), BoneHandle(2), BoneHandle(5)]);
        assert_eq!(b.bones(), &[BoneHandle(0), BoneHandle(2), BoneHandle(5)]);
    }

    #[test]
    fn set_index_is_unchecked() {
        let mut label = Label::new("legs", &[], 4, false);
        label.set_index(-7);
        assert_eq!(label.index(), -7);
        label.set_index(LABEL_INDEX_NONE);
        assert_eq!(label.index(), LABEL_INDEX_NONE);
        label.set_index(10_000);
        assert_eq!(label.index(), 10_000);
    }
}
