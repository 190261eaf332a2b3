use clap::Parser;
use colored::*;
use roster::api::RosterApi;
use roster::config::RosterConfig;
use roster::error::Result;
use roster::model::{Employee, NewEmployee};
use roster::store::fs::FileStore;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RosterApi<FileStore>,
    config: RosterConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { name, position, id }) => handle_add(&mut ctx, name, position, id),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Export) => handle_export(&ctx),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = RosterConfig::load(&cwd)?;
    if let Some(file) = &cli.file {
        config.store_path = file.clone();
    }

    let store = FileStore::new(PathBuf::from(config.store_path()));
    Ok(AppContext {
        api: RosterApi::new(store),
        config,
    })
}

fn handle_add(ctx: &mut AppContext, name: String, position: String, id: Option<u64>) -> Result<()> {
    let added = ctx.api.add_employee(NewEmployee::new(name, position), id)?;
    println!(
        "{} {} ({}) with id {}",
        "Added".green(),
        added.name,
        added.position,
        added.id.to_string().bold()
    );
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: u64) -> Result<()> {
    let removed = ctx.api.remove_employee(id)?;
    if removed == 0 {
        println!("No employee with id {}, nothing removed", id);
    } else {
        println!("{} employee with id {}", "Removed".green(), id);
    }
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let records = ctx.api.list_employees()?;
    if records.is_empty() {
        println!("No employees in {}", ctx.config.store_path());
        return Ok(());
    }
    for record in &records {
        print_record(record);
    }
    Ok(())
}

fn print_record(record: &Employee) {
    println!(
        "{:>4}  {}  {}",
        record.id.to_string().bold(),
        record.name,
        record.position.dimmed()
    );
}

fn handle_export(ctx: &AppContext) -> Result<()> {
    let target = ctx.config.export_path();
    let written = ctx.api.export_employees(&target)?;
    println!("{} to {}", "Exported".green(), written.display());
    Ok(())
}
