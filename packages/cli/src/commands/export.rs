use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_export::{generate, write_to_dir, write_zip, CompileOptions, ARCHIVE_NAME};
use pagecraft_model::PageDocument;
use pagecraft_storage::ProjectStore;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Saved project id to export
    #[arg(short, long)]
    pub project: Option<String>,

    /// Template id to export directly
    #[arg(short, long)]
    pub template: Option<String>,

    /// Page document JSON file to export
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output directory (defaults to the configured outDir)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Write a zip archive instead of loose files
    #[arg(short, long)]
    pub zip: bool,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let document = resolve_document(&args, &config, cwd)?;

    document.validate()?;

    let options = CompileOptions {
        title: config.title.clone(),
        ..CompileOptions::default()
    };
    let bundle = generate(&document, &options);

    let out_dir = args.out.unwrap_or_else(|| config.out_path(cwd));

    println!("{}", "🚀 Exporting site...".bright_blue().bold());

    if args.zip {
        fs::create_dir_all(&out_dir)?;
        let archive = out_dir.join(ARCHIVE_NAME);
        write_zip(&bundle, &archive)?;
        println!("  {} Wrote {}", "✓".green(), archive.display());
    } else {
        write_to_dir(&bundle, &out_dir)?;
        println!("  {} Wrote {}/index.html", "✓".green(), out_dir.display());
        println!("  {} Wrote {}/styles.css", "✓".green(), out_dir.display());
        println!(
            "  {} Wrote {}/animations.js",
            "✓".green(),
            out_dir.display()
        );
    }

    println!();
    println!("{}", "✅ Export complete!".green().bold());

    Ok(())
}

fn resolve_document(args: &ExportArgs, config: &Config, cwd: &str) -> Result<PageDocument> {
    if let Some(path) = &args.input {
        let content = fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&content)?);
    }

    if let Some(id) = &args.project {
        let store = ProjectStore::new(config.projects_path(cwd));
        return Ok(store.load(id)?.config);
    }

    if let Some(id) = &args.template {
        return pagecraft_templates::by_id(id)
            .map(|t| t.config)
            .ok_or_else(|| anyhow::anyhow!("Unknown template: {}", id));
    }

    Err(anyhow::anyhow!(
        "Nothing to export. Use --project, --template, or --input"
    ))
}
