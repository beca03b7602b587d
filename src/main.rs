//! Zenith - a markdown blog engine with an AI-assisted editor.

mod cli;
mod commands;
mod config;
mod data;
mod editor;
mod frontmatter;
mod generate;
mod logger;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, DraftAction};
use config::ZenithConfig;
use data::{authors::AuthorDirectory, store::PostStore};
use editor::drafts::DraftStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static ZenithConfig = Box::leak(Box::new(ZenithConfig::load(cli)?));

    let store = PostStore::new();
    let directory = AuthorDirectory::new();
    let drafts = DraftStore::new(
        config
            .editor
            .draft_path
            .clone()
            .unwrap_or_else(DraftStore::default_path),
    );

    match &cli.command {
        Commands::List { folder, json } => commands::list(&store, folder.clone(), *json).await,
        Commands::Folders => commands::folders(&store).await,
        Commands::Show { id } => commands::show(&store, &directory, id).await,
        Commands::Author { name } => commands::author(&directory, name).await,
        Commands::Import { path } => commands::import_file(&drafts, config, path),
        Commands::Export { out } => commands::export_draft(&drafts, config, out.clone()),
        Commands::Generate { topic, tone } => {
            commands::generate(&drafts, config, topic, tone.clone()).await
        }
        Commands::Improve { instruction } => {
            commands::improve(&drafts, config, instruction).await
        }
        Commands::Publish { folder } => {
            commands::publish(&store, &drafts, config, folder.clone()).await
        }
        Commands::Draft { action } => match action {
            DraftAction::Show => commands::draft_show(&drafts),
            DraftAction::Clear => commands::draft_clear(&drafts),
        },
    }
}
