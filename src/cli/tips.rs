use anyhow::Result;
use console::style;
use promptlab_core::ui::render;

const TAKEAWAYS: &[&str] = &[
    "Be specific and provide context",
    "Use examples (few-shot learning)",
    "Break complex tasks into steps (chaining)",
    "Ask for reasoning (chain-of-thought)",
    "Specify format, length, and audience",
    "Compare outputs from different models",
];

const RESOURCES: &[(&str, &str)] = &[
    (
        "OpenAI Prompt Engineering Guide",
        "https://platform.openai.com/docs/guides/prompt-engineering",
    ),
    (
        "Anthropic Prompt Library",
        "https://docs.anthropic.com/claude/prompt-library",
    ),
    ("Prompt Engineering Guide", "https://www.promptingguide.ai/"),
];

/// Handle the tips command
pub fn handle_tips_command() -> Result<()> {
    println!(
        "{}\n",
        render::section("Learn More About Prompt Engineering")
    );

    println!("{}", style("Key Takeaways:").bold());
    for takeaway in TAKEAWAYS {
        println!("  {} {takeaway}", style("✅").green());
    }

    println!("\n{}", style("Resources:").bold());
    for (name, url) in RESOURCES {
        println!("  - {name}: {}", style(url).underlined());
    }

    Ok(())
}
