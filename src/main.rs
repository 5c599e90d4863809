use clap::Parser;
use passbook::application::{ConfigService, EntryStore};
use passbook::cli::{
    format_entry, format_entry_list, format_name_list, format_search_results, Cli, Commands, Menu,
};
use passbook::error::{PassbookError, Result};
use passbook::infrastructure::{Config, FileBackend};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; RUST_LOG=passbook=debug for details. Secrets are never logged.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("passbook=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let location = Config::locate(cli.config.as_deref());

    if let Some(Commands::Config { key, value, list }) = cli.command {
        return manage_config(ConfigService::new(location), key, value, list);
    }

    let config = Config::load(&location)?;
    let data_file = config.data_file_with_override(cli.file.as_deref());
    let mut store = EntryStore::load(FileBackend::new(&data_file))?;

    match cli.command {
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Menu::new(&mut store, stdin.lock(), stdout.lock(), config.export_file).run()
        }
        Some(Commands::Add {
            name,
            username,
            password,
        }) => {
            let (name, username, password) = (name.trim(), username.trim(), password.trim());
            if name.is_empty() || username.is_empty() || password.is_empty() {
                return Err(PassbookError::InvalidInput(
                    "All fields are required!".to_string(),
                ));
            }
            let entry = store.add(name, username, password)?;
            println!("Password for '{}' added successfully!", entry.display_name());
            Ok(())
        }
        Some(Commands::Get { name }) => {
            let name = required(&name, "Name is required!")?;
            let entry = store
                .get(name)
                .ok_or_else(|| PassbookError::NotFound(name.to_string()))?;
            print!("{}", format_entry(entry));
            Ok(())
        }
        Some(Commands::List) => {
            print!("{}", format_entry_list(&store.all()));
            Ok(())
        }
        Some(Commands::Names) => {
            print!("{}", format_name_list(&store.all()));
            Ok(())
        }
        Some(Commands::Search { term }) => {
            let term = required(&term, "Search term is required!")?;
            print!("{}", format_search_results(term, &store.search(term)));
            Ok(())
        }
        Some(Commands::Delete { name }) => {
            let name = required(&name, "Name is required!")?;
            let display_name = store
                .get(name)
                .map(|entry| entry.display_name().to_string())
                .ok_or_else(|| PassbookError::NotFound(name.to_string()))?;
            store.delete(name)?;
            println!("Entry for '{}' deleted successfully!", display_name);
            Ok(())
        }
        Some(Commands::Export { path }) => {
            let path = path.unwrap_or(config.export_file);
            store.export(&FileBackend::new(&path))?;
            println!("Data exported to {}", path.display());
            Ok(())
        }
        Some(Commands::Import { path }) => {
            let count = store.import_merge(&FileBackend::new(&path))?;
            println!(
                "Successfully imported {} entries from {}",
                count,
                path.display()
            );
            Ok(())
        }
        Some(Commands::Config { .. }) => unreachable!("handled before loading the store"),
    }
}

/// Trimmed value, or `InvalidInput` with `message` when blank
fn required<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PassbookError::InvalidInput(message.to_string()));
    }
    Ok(value)
}

fn manage_config(
    service: ConfigService,
    key: Option<String>,
    value: Option<String>,
    list: bool,
) -> Result<()> {
    if list {
        let config = service.list()?;
        println!("data_file = {}", config.data_file.display());
        println!("export_file = {}", config.export_file.display());
        Ok(())
    } else if let Some(k) = key {
        if let Some(v) = value {
            service.set(&k, &v)?;
            println!("Set {} = {}", k, v);
        } else {
            println!("{}", service.get(&k)?);
        }
        Ok(())
    } else {
        println!("Usage: passbook config [--list | <key> [<value>]]");
        println!("Valid keys: data_file, export_file");
        Ok(())
    }
}
