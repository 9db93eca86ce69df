// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use menu_sheet::{
    init_logging, load_menu, render_page, FileFetcher, HttpFetcher, LoadedMenu, MenuConfig,
    MenuRenderer, TextRenderer,
};

#[derive(Parser)]
#[command(name = "menu-sheet")]
#[command(about = "Render a restaurant menu from a published spreadsheet CSV", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: ./menu-sheet.json if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Published CSV URL, overrides config and MENU_SHEET_URL
    #[arg(long, global = true)]
    url: Option<String>,

    /// Read the CSV export from a local file instead of the network
    #[arg(long, global = true, conflicts_with = "url")]
    csv: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the menu page as HTML
    Render {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the grouped menu as plain text
    List,

    /// Write the parsed menu back out as normalised CSV
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Browse the menu in the terminal (default)
    View,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = MenuConfig::load(cli.config.as_deref())?.with_source_override(cli.url.clone());
    let menu = match &cli.csv {
        Some(path) => {
            config.source_url = Some(path.to_string_lossy().into_owned());
            load_menu(&config, &FileFetcher).await
        }
        None => load_menu(&config, &HttpFetcher::from_config(&config)).await,
    };

    match cli.command.unwrap_or(Commands::View) {
        Commands::Render { output } => run_render(&menu, &config, output.as_deref()),
        Commands::List => run_list(&menu),
        Commands::Export { output } => run_export(&menu, output.as_deref()),
        Commands::View => run_ui_mode(menu),
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    })
}

fn run_render(menu: &LoadedMenu, config: &MenuConfig, output: Option<&Path>) -> Result<()> {
    let page = render_page(menu, config);
    let mut out = open_output(output)?;
    out.write_all(page.as_bytes())?;
    out.flush()?;

    if let Some(path) = output {
        tracing::info!(path = %path.display(), categories = menu.groups.len(), "page written");
    }
    Ok(())
}

fn run_list(menu: &LoadedMenu) -> Result<()> {
    let renderer = TextRenderer;
    let mut out = io::stdout().lock();

    if menu.is_fallback {
        writeln!(out, "(fallback menu - no sheet data)")?;
    }
    write!(out, "{}", renderer.render_nav(&menu.groups))?;
    write!(out, "{}", renderer.render_sections(&menu.groups))?;
    Ok(())
}

fn run_export(menu: &LoadedMenu, output: Option<&Path>) -> Result<()> {
    if menu.is_fallback {
        tracing::warn!("exporting the fallback menu, the sheet produced no rows");
    }

    let mut wtr = csv::Writer::from_writer(open_output(output)?);
    wtr.write_record(["Categoria", "Nom", "Preu", "Descripcio"])?;
    for item in &menu.items {
        wtr.write_record([&item.category, &item.name, &item.price, &item.description])?;
    }
    wtr.flush().context("Failed to write CSV")?;
    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(menu: LoadedMenu) -> Result<()> {
    let mut app = ui::App::new(menu);
    ui::run_ui(&mut app)
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_menu: LoadedMenu) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: menu-sheet render -o menu.html");
    std::process::exit(1);
}
