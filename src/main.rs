use anyhow::{Context, Result};

use aventra_deck::config::Settings;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::default();
    let report = aventra_deck::build_with(&settings).with_context(|| {
        format!(
            "Failed to write presentation: {}",
            settings.output_path.display()
        )
    })?;

    println!(
        "✅ Presentation saved successfully to: {}",
        report.path.display()
    );
    println!("📊 Total slides: {}", report.slide_count);

    Ok(())
}
