use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_storage::ProjectStore;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name
    #[arg(short, long, default_value = "My Site")]
    pub name: String,

    /// Template to start from (see `pagecraft templates`)
    #[arg(short, long, default_value = "landing-minimal")]
    pub template: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Pagecraft project...".bright_blue().bold()
    );

    let template = pagecraft_templates::by_id(&args.template)
        .ok_or_else(|| anyhow::anyhow!("Unknown template: {}", args.template))?;

    let config = Config {
        title: args.name.clone(),
        ..Config::default()
    };
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let store = ProjectStore::new(config.projects_path(cwd));
    let project = store.save(&args.name, &template.config)?;
    println!(
        "  {} Saved project \"{}\" from template {}",
        "✓".green(),
        project.name,
        template.id
    );

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: pagecraft projects list");
    println!("  2. Run: pagecraft export --project {}", project.id);
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}
