use anyhow::Result;
use console::style;
use promptlab_core::config::{ModelId, Provider};
use promptlab_core::ui::render;

/// Handle the models command: list the catalogue per provider
pub fn handle_models_command() -> Result<()> {
    println!("{}\n", render::section("Supported Models"));

    for provider in Provider::all_providers() {
        println!(
            "{} {}",
            style(provider.display_name()).bold(),
            style(format!("(key: {})", provider.default_api_key_env())).dim()
        );
        let default = provider.default_model();
        for model in ModelId::models_for_provider(provider) {
            let marker = if model == default { " (default)" } else { "" };
            println!(
                "  {:<28} {}{}",
                model.as_str(),
                model.display_name(),
                style(marker).green()
            );
        }
        println!();
    }

    Ok(())
}
