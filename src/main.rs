mod cli;
mod db;
mod error;
mod export;
mod filter;
mod fmt;
mod models;
mod opener;
mod reports;
mod settings;

use clap::Parser;

use cli::{
    Cli, Commands, DocCommands, ExportCommands, InvoiceCommands, RevenueCommands, TaskCommands,
    VocabCommands,
};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Invoice { command } => match command {
            InvoiceCommands::Add {
                creditor,
                concern,
                category,
                amount,
                due_date,
                path,
                description,
                status,
            } => cli::invoices::add(
                &creditor,
                &concern,
                &category,
                amount,
                &due_date,
                path,
                description,
                &status,
            ),
            InvoiceCommands::List { filter } => cli::invoices::list(&filter.to_filter()),
            InvoiceCommands::Pay { id } => cli::invoices::pay(id),
            InvoiceCommands::Delete { id } => cli::invoices::delete(id),
        },
        Commands::Revenue { command } => match command {
            RevenueCommands::Add {
                source,
                revenue_type,
                amount,
                receipt_date,
                description,
                path,
            } => cli::revenues::add(&source, &revenue_type, amount, &receipt_date, description, path),
            RevenueCommands::List { filter } => cli::revenues::list(&filter.to_filter()),
            RevenueCommands::Delete { id } => cli::revenues::delete(id),
        },
        Commands::Doc { command } => match command {
            DocCommands::Add {
                concern,
                category,
                path,
                description,
                status,
            } => cli::docs::add(&concern, &category, &path, &description, &status),
            DocCommands::List { filter } => cli::docs::list(&filter.to_filter()),
            DocCommands::Delete { id } => cli::docs::delete(id),
        },
        Commands::Task { command } => match command {
            TaskCommands::Add {
                title,
                description,
                status,
                priority,
                due_date,
                category,
                attachments,
            } => cli::tasks::add(
                &title,
                &description,
                &status,
                &priority,
                &due_date,
                &category,
                attachments,
            ),
            TaskCommands::List { filter } => cli::tasks::list(&filter.to_filter()),
            TaskCommands::Update {
                id,
                title,
                description,
                status,
                priority,
                due_date,
                category,
                attachments,
            } => cli::tasks::update(
                id,
                title,
                description,
                status,
                priority,
                due_date,
                category,
                attachments,
            ),
            TaskCommands::Delete { id } => cli::tasks::delete(id),
        },
        Commands::Vocab { command } => match command {
            VocabCommands::Add { vocabulary, name } => cli::vocab::add(&vocabulary, &name),
            VocabCommands::List { vocabulary } => cli::vocab::list(vocabulary),
            VocabCommands::Delete { vocabulary, id } => cli::vocab::delete(&vocabulary, id),
        },
        Commands::Dashboard(args) => cli::dashboard::run(&args),
        Commands::Export { command } => match command {
            ExportCommands::Invoices { filter, output } => {
                cli::export::invoices(&filter.to_filter(), output)
            }
            ExportCommands::Revenues { filter, output } => {
                cli::export::revenues(&filter.to_filter(), output)
            }
            ExportCommands::Docs { filter, output } => {
                cli::export::docs(&filter.to_filter(), output)
            }
            ExportCommands::Tasks { filter, output } => {
                cli::export::tasks(&filter.to_filter(), output)
            }
        },
        Commands::Open { kind, id } => cli::open::run(&kind, id),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
