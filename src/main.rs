mod encoding;
mod error;
mod model;
mod parser;
mod settings;

use crate::model::Model;
use crate::settings::InspectorSettings;

pub const CONFY_APP_NAME: &str = "pmdvis-rs";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let as_json = args.iter().any(|a| a == "--json");
    let model_path = args.iter().skip(1).find(|a| !a.starts_with("--"));

    let Some(path) = model_path else {
        eprintln!("Usage: pmdvis-rs <model.pmd> [--json]");
        std::process::exit(2);
    };

    let settings = InspectorSettings::load();
    let model = parser::load_path(path)?;

    if as_json {
        if settings.pretty_json {
            println!("{}", serde_json::to_string_pretty(&model)?);
        } else {
            println!("{}", serde_json::to_string(&model)?);
        }
        return Ok(());
    }

    print_summary(&model, &settings);
    Ok(())
}

fn print_summary(model: &Model, settings: &InspectorSettings) {
    println!("Model: '{}'", model.name);
    if !model.comment.is_empty() {
        println!("Comment: {}", model.comment);
    }
    println!("Bones: {}", model.bones.len());
    println!("Labels: {}", model.labels().len());

    for label in model.labels() {
        if label.is_special() && !settings.show_special_labels {
            continue;
        }
        let marker = if label.is_special() { " (special)" } else { "" };
        println!(
            "  [{}] '{}'{} - {} bones",
            label.index(),
            label.name(),
            marker,
            label.bones().len()
        );
        for &handle in label.bones() {
            match model.bone(handle) {
                Some(bone) if settings.show_bone_positions => println!(
                    "      {} @ ({:.2}, {:.2}, {:.2})",
                    bone.name, bone.position[0], bone.position[1], bone.position[2]
                ),
                Some(bone) => println!("      {}", bone.name),
                None => println!("      <missing bone {}>", handle.0),
            }
        }
    }
}
