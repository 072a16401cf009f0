use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use sarf::api::{CmdMessage, ConfigAction, MessageLevel, RootListing, SarfApi};
use sarf::commands::config::parse_bool;
use sarf::config::SarfConfig;
use sarf::error::{Result, SarfError};
use sarf::model::{DerivedWord, Scheme};
use sarf::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, RootCmd, SchemeCmd, WordCmd};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: SarfApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Commands::Root(cmd) => handle_root(&mut ctx, cmd),
        Commands::Scheme(cmd) => handle_scheme(&mut ctx, cmd),
        Commands::Word(cmd) => handle_word(&mut ctx, cmd),
        Commands::Gen {
            root,
            scheme,
            store,
        } => handle_gen(&mut ctx, &root, &scheme, store),
        Commands::GenAll { root, store } => handle_gen_all(&mut ctx, &root, store),
        Commands::Check { word, root } => handle_check(&ctx, &word, &root),
        Commands::Export { file } => handle_export(&ctx, file),
        Commands::Import { file } => handle_import(&mut ctx, file),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("SARF_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "sarf", "sarf")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| SarfError::Store("could not determine a data directory".to_string()))?,
    };

    let config = SarfConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone()).with_seed_defaults(config.seed_defaults);
    let api = SarfApi::new(store, data_dir);

    Ok(AppContext { api })
}

fn handle_root(ctx: &mut AppContext, cmd: RootCmd) -> Result<()> {
    match cmd {
        RootCmd::Add { root } => {
            let result = ctx.api.add_root(&root)?;
            print_messages(&result.messages);
        }
        RootCmd::Remove { root } => {
            let result = ctx.api.remove_root(&root)?;
            print_messages(&result.messages);
        }
        RootCmd::Has { root } => {
            let result = ctx.api.root_exists(&root)?;
            print_messages(&result.messages);
            if result.found != Some(true) {
                std::process::exit(1);
            }
        }
        RootCmd::List => {
            let result = ctx.api.list_roots()?;
            print_roots(&result.roots);
            print_messages(&result.messages);
        }
        RootCmd::Load { file } => {
            let content = std::fs::read_to_string(&file).map_err(SarfError::Io)?;
            let result = ctx.api.load_roots_from_text(&content)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_scheme(ctx: &mut AppContext, cmd: SchemeCmd) -> Result<()> {
    match cmd {
        SchemeCmd::Add {
            name,
            template,
            description,
        } => {
            let result = ctx.api.add_scheme(&name, &template, &description)?;
            print_messages(&result.messages);
        }
        SchemeCmd::Remove { name } => {
            let result = ctx.api.remove_scheme(&name)?;
            print_messages(&result.messages);
        }
        SchemeCmd::List => {
            let result = ctx.api.list_schemes()?;
            print_schemes(&result.schemes);
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_word(ctx: &mut AppContext, cmd: WordCmd) -> Result<()> {
    match cmd {
        WordCmd::Add { root, word, scheme } => {
            let result = ctx.api.attach_derived(&root, &word, &scheme)?;
            print_messages(&result.messages);
        }
        WordCmd::List { root } => {
            let result = ctx.api.derived_words(&root)?;
            print_derived(&result.derived);
            print_messages(&result.messages);
        }
        WordCmd::Remove { root, word } => {
            let result = ctx.api.remove_derived(&root, &word)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_gen(ctx: &mut AppContext, root: &str, scheme: &str, store: bool) -> Result<()> {
    if store {
        let result = ctx.api.generate_and_store(root, scheme)?;
        print_messages(&result.messages);
        return Ok(());
    }

    let result = ctx.api.generate(root, scheme)?;
    for d in &result.derived {
        println!("{}", d.word);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_gen_all(ctx: &mut AppContext, root: &str, store: bool) -> Result<()> {
    if store {
        let result = ctx.api.generate_and_store_all(root)?;
        print_messages(&result.messages);
        return Ok(());
    }

    let result = ctx.api.generate_all(root)?;
    print_derived(&result.derived);
    print_messages(&result.messages);
    Ok(())
}

fn handle_check(ctx: &AppContext, word: &str, root: &str) -> Result<()> {
    let result = ctx.api.validate(word, root)?;
    print_messages(&result.messages);
    if let Some(outcome) = &result.validation {
        if !outcome.valid {
            std::process::exit(1);
        }
    }
    Ok(())
}

fn handle_export(ctx: &AppContext, file: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_snapshot()?;
    let blob = result.blob.unwrap_or_default();
    match file {
        Some(path) => {
            std::fs::write(&path, blob).map_err(SarfError::Io)?;
            println!("{}", format!("Exported to {}", path.display()).green());
        }
        None => println!("{}", blob),
    }
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let blob = std::fs::read_to_string(&file).map_err(SarfError::Io)?;
    let result = ctx.api.import_snapshot(&blob)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("seed-defaults"), None) => ConfigAction::ShowKey("seed-defaults".to_string()),
        (Some("seed-defaults"), Some(v)) => ConfigAction::SetSeedDefaults(parse_bool(&v)?),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("seed-defaults = {}", config.seed_defaults);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const KEY_COLUMN: usize = 12;

fn print_roots(roots: &[RootListing]) {
    if roots.is_empty() {
        println!("No roots registered.");
        return;
    }

    for listing in roots {
        let padding = KEY_COLUMN.saturating_sub(listing.key.width());
        println!(
            "{}{}{}",
            listing.key.bold(),
            " ".repeat(padding),
            format!("{} derived", listing.derived.len()).dimmed()
        );
        for d in &listing.derived {
            println!("    {}  {}", d.word, format!("({})", d.scheme).dimmed());
        }
    }
}

fn print_derived(derived: &[DerivedWord]) {
    if derived.is_empty() {
        println!("No derived words.");
        return;
    }

    let column = derived.iter().map(|d| d.word.width()).max().unwrap_or(0) + 2;
    for d in derived {
        let padding = column.saturating_sub(d.word.width());
        println!(
            "{}{}{}",
            d.word,
            " ".repeat(padding),
            format!("({})", d.scheme).dimmed()
        );
    }
}

fn print_schemes(schemes: &[Scheme]) {
    if schemes.is_empty() {
        println!("No schemes defined.");
        return;
    }

    let column = schemes.iter().map(|s| s.name.width()).max().unwrap_or(0) + 2;
    for s in schemes {
        let padding = column.saturating_sub(s.name.width());
        let mut line = format!("{}{}{}", s.name.bold(), " ".repeat(padding), s.template);
        if !s.description.is_empty() {
            line = format!("{}  {}", line, s.description.dimmed());
        }
        println!("{}", line);
    }
}
