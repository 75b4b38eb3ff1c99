use crate::config::Config;
use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use pagecraft_storage::ProjectStore;

#[derive(Subcommand, Debug)]
pub enum ProjectsCommand {
    /// List saved projects
    List,

    /// Delete a saved project
    Delete {
        /// Project id (see `pagecraft projects list`)
        id: String,
    },
}

pub fn projects(command: ProjectsCommand, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let store = ProjectStore::new(config.projects_path(cwd));

    match command {
        ProjectsCommand::List => {
            let projects = store.list()?;
            if projects.is_empty() {
                println!("No saved projects. Run: pagecraft init");
                return Ok(());
            }

            println!("{}", "💾 Saved projects".bright_blue().bold());
            println!();
            for project in &projects {
                println!(
                    "  {} {} (updated {})",
                    project.id.bright_white().bold(),
                    project.name,
                    project.updated_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        ProjectsCommand::Delete { id } => {
            store.delete(&id)?;
            println!("{} Deleted {}", "✓".green(), id);
        }
    }

    Ok(())
}
