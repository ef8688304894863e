use crate::encoding::{TextEncoding, decode_fixed};
use crate::error::PmdError;
use crate::model::{Bone, BoneHandle, LABEL_INDEX_NONE, Label, Model};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

const VERTEX_SIZE: u32 = 38;
const MATERIAL_SIZE: u32 = 70;
const BONE_NAME_LEN: usize = 20;
const FRAME_NAME_LEN: usize = 50;

pub(crate) fn read_header<R: Read + Seek>(r: &mut R, model: &mut Model) -> Result<(), PmdError> {
    let mut magic = [0u8; 3];
    r.read_exact(&mut magic)?;
    if &magic != b"Pmd" {
        return Err(PmdError::new("pmd-bad-magic")
            .with_arg("magic", String::from_utf8_lossy(&magic).into_owned()));
    }

    let version = r.read_f32::<LittleEndian>()?;
    log::debug!("PMD version: {}", version);

    let mut name_bytes = [0u8; 20];
    r.read_exact(&mut name_bytes)?;
    model.name = decode_fixed(&name_bytes, TextEncoding::ShiftJis, name_bytes.len());

    let mut comment_bytes = [0u8; 256];
    r.read_exact(&mut comment_bytes)?;
    model.comment = decode_fixed(&comment_bytes, TextEncoding::ShiftJis, comment_bytes.len());

    log::debug!("Model name: '{}'", model.name);
    Ok(())
}

pub(crate) fn skip_vertices<R: Read + Seek>(r: &mut R) -> Result<(), PmdError> {
    let count = r.read_u32::<LittleEndian>()?;
    log::debug!("Skipping {} vertices", count);
    r.seek(SeekFrom::Current(count as i64 * VERTEX_SIZE as i64))?;
    Ok(())
}

pub(crate) fn skip_indices<R: Read + Seek>(r: &mut R) -> Result<(), PmdError> {
    let count = r.read_u32::<LittleEndian>()?;
    r.seek(SeekFrom::Current(count as i64 * 2))?;
    Ok(())
}

pub(crate) fn skip_materials<R: Read + Seek>(r: &mut R) -> Result<(), PmdError> {
    let count = r.read_u32::<LittleEndian>()?;
    log::debug!("Skipping {} materials", count);
    r.seek(SeekFrom::Current(count as i64 * MATERIAL_SIZE as i64))?;
    Ok(())
}

pub(crate) fn read_bones<R: Read + Seek>(r: &mut R, model: &mut Model) -> Result<(), PmdError> {
    let count = r.read_u16::<LittleEndian>()?;
    log::debug!("Reading {} bones", count);

    for _ in 0..count {
        let mut name_bytes = [0u8; BONE_NAME_LEN];
        r.read_exact(&mut name_bytes)?;
        let name = decode_fixed(&name_bytes, TextEncoding::ShiftJis, BONE_NAME_LEN);

        let parent = r.read_i16::<LittleEndian>()?;
        let _tail = r.read_i16::<LittleEndian>()?;
        let kind = r.read_u8()?;
        let _ik_parent = r.read_i16::<LittleEndian>()?;
        let mut position = [0.0f32; 3];
        for v in &mut position {
            *v = r.read_f32::<LittleEndian>()?;
        }

        model.bones.push(Bone {
            name,
            parent_id: if parent < 0 { -1 } else { parent as i32 },
            kind,
            position,
        });
    }

    Ok(())
}

pub(crate) fn skip_ik_chains<R: Read + Seek>(r: &mut R) -> Result<(), PmdError> {
    let count = r.read_u16::<LittleEndian>()?;
    log::debug!("Skipping {} IK chains", count);
    for _ in 0..count {
        // bone and target indices
        r.seek(SeekFrom::Current(2 + 2))?;
        let chain_len = r.read_u8()?;
        // iterations, weight, then the chain itself
        r.seek(SeekFrom::Current(2 + 4 + chain_len as i64 * 2))?;
    }
    Ok(())
}

pub(crate) fn skip_morphs<R: Read + Seek>(r: &mut R) -> Result<(), PmdError> {
    let count = r.read_u16::<LittleEndian>()?;
    log::debug!("Skipping {} morphs", count);
    for _ in 0..count {
        r.seek(SeekFrom::Current(20))?; // morph name
        let vertex_count = r.read_u32::<LittleEndian>()?;
        // kind byte, then index + offset per affected vertex
        r.seek(SeekFrom::Current(1 + vertex_count as i64 * 16))?;
    }
    Ok(())
}

pub(crate) fn skip_morph_display<R: Read + Seek>(r: &mut R) -> Result<(), PmdError> {
    let count = r.read_u8()?;
    r.seek(SeekFrom::Current(count as i64 * 2))?;
    Ok(())
}

/// Reads the label section: display-frame names, then the bone display
/// list assigning bones to frames.
///
/// Frame number 0 is the viewer's implicit built-in group; it is
/// synthesized here as the special "Root" label, falling back to the
/// skeleton root when the file assigns it no bones. Authored frames
/// become ordinary labels 1..=n.
pub(crate) fn read_labels<R: Read + Seek>(r: &mut R, model: &mut Model) -> Result<(), PmdError> {
    let frame_count = r.read_u8()? as usize;
    log::debug!("Reading {} display frames", frame_count);

    let mut frame_names = Vec::with_capacity(frame_count);
    for _ in 0..frame_count {
        let mut name_bytes = [0u8; FRAME_NAME_LEN];
        r.read_exact(&mut name_bytes)?;
        frame_names.push(name_bytes);
    }

    let entry_count = r.read_u32::<LittleEndian>()?;
    let mut frame_bones: Vec<Vec<BoneHandle>> = vec![Vec::new(); frame_count + 1];
    for _ in 0..entry_count {
        let bone = r.read_u16::<LittleEndian>()?;
        let frame = r.read_u8()? as usize;
        if frame > frame_count {
            log::warn!("Display entry references missing frame {}", frame);
            continue;
        }
        if bone as usize >= model.bones.len() {
            log::warn!("Display entry references missing bone {}", bone);
            continue;
        }
        frame_bones[frame].push(BoneHandle(bone));
    }

    let mut root_bones = std::mem::take(&mut frame_bones[0]);
    if root_bones.is_empty() {
        root_bones.extend(model.root_bone());
    }
    model.add_label(Label::new("Root", &root_bones, LABEL_INDEX_NONE, true));

    for (i, name_bytes) in frame_names.iter().enumerate() {
        model.add_label(Label::from_raw(
            name_bytes,
            TextEncoding::ShiftJis,
            &frame_bones[i + 1],
            LABEL_INDEX_NONE,
            false,
        ));
    }

    Ok(())
}
