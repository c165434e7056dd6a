use colored::Colorize;
use parlor_core::persona::get_default_presets;
use parlor_core::ModelId;

/// Prints every persona preset with its description and example reply.
pub fn personas() {
    println!("{}", "What each personality is good for:".bold());
    for persona in get_default_presets() {
        println!(
            "  {} {}",
            persona.label().bold(),
            format!("- {}", persona.description).dimmed()
        );
        println!("      Example: {}", persona.example.italic());
    }
}

/// Prints the supported model identifiers, marking the default.
pub fn models() {
    let default = ModelId::default();
    for model in ModelId::all() {
        if model == default {
            println!("  {} {}", model, "(default)".dimmed());
        } else {
            println!("  {}", model);
        }
    }
}
