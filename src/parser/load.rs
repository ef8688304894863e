use crate::error::PmdError;
use crate::model::Model;
use crate::parser::sections;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

/// Loads a PMD model from a file on disk.
pub fn load_path(path: impl AsRef<Path>) -> Result<Model, PmdError> {
    let mut file = File::open(path.as_ref())
        .map_err(|e| PmdError::from(e).with_arg("path", path.as_ref().display()))?;
    load(&mut file)
}

/// Walks a PMD stream section by section.
///
/// Geometry, materials and morph data are skipped over by size; only the
/// header, the bone table and the label section (display-frame names plus
/// the bone display list) are decoded. Sections after the bone display
/// list (English names, toon textures, rigid bodies) are ignored.
pub fn load<R: Read + Seek>(r: &mut R) -> Result<Model, PmdError> {
    let mut model = Model::default();

    sections::read_header(r, &mut model)?;
    sections::skip_vertices(r)?;
    sections::skip_indices(r)?;
    sections::skip_materials(r)?;
    sections::read_bones(r, &mut model)?;
    sections::skip_ik_chains(r)?;
    sections::skip_morphs(r)?;
    sections::skip_morph_display(r)?;
    sections::read_labels(r, &mut model)?;

    log::info!(
        "Loaded '{}': {} bones, {} labels",
        model.name,
        model.bones.len(),
        model.labels().len()
    );

    Ok(model)
}
