use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_templates::{catalog, Template, TemplateCategory};

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Only show one category (presell, landing, homepage, blog)
    #[arg(short, long)]
    pub category: Option<String>,
}

pub fn templates(args: TemplatesArgs) -> Result<()> {
    let entries: Vec<Template> = match args.category.as_deref() {
        Some(name) => pagecraft_templates::by_category(parse_category(name)?),
        None => catalog(),
    };

    println!("{}", "📦 Available templates".bright_blue().bold());
    println!();

    for template in &entries {
        println!(
            "  {} {} {} ({:?}, {} sections)",
            template.thumbnail,
            template.id.bright_white().bold(),
            template.name,
            template.complexity,
            template.config.sections.len()
        );
    }

    println!();
    println!("Use: pagecraft export --template <id>");

    Ok(())
}

fn parse_category(name: &str) -> Result<TemplateCategory> {
    match name {
        "presell" => Ok(TemplateCategory::Presell),
        "landing" => Ok(TemplateCategory::Landing),
        "homepage" => Ok(TemplateCategory::Homepage),
        "blog" => Ok(TemplateCategory::Blog),
        other => Err(anyhow::anyhow!(
            "Unknown category: {}. Use: presell, landing, homepage, or blog",
            other
        )),
    }
}
