use anisong_lookup::{browser, catalog, cli, config, error, logging, lookup, selector};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use lookup::Choice;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}

fn run(mut cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(Commands::Config { show, set_base_url, set_catalog, set_open_browser }) = cli.command.take() {
        let changed = set_base_url.is_some() || set_catalog.is_some() || set_open_browser.is_some();

        if let Some(url) = set_base_url {
            config.set_base_url(url)?;
        }
        if let Some(path) = set_catalog {
            config.catalog_path = path;
        }
        if let Some(open) = set_open_browser {
            config.open_browser = open;
        }
        if changed {
            config.save()?;
            println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
        }

        if show || !changed {
            println!("設定:");
            println!("  カタログ: {}", config.catalog_path.display());
            println!("  ベースURL: {}", config.base_url);
            println!("  ブラウザ起動: {}", if config.open_browser { "有効" } else { "無効" });
        }
        return Ok(());
    }

    let catalog_path = cli.catalog.clone().unwrap_or_else(|| config.catalog_path.clone());
    let catalog = catalog::load_catalog(&catalog_path)?;

    let input = match cli.query_text() {
        Some(text) => text,
        None => selector::prompt_search_term()?,
    };

    let matches = lookup::run_query(&catalog, &input, cli.unique);

    let stdout = std::io::stdout();
    lookup::print_results(&mut stdout.lock(), &matches)?;
    if matches.is_empty() {
        return Ok(());
    }

    let selection = match cli.select.as_deref() {
        Some(raw) => selector::resolve_selection(raw, matches.len()),
        None => {
            println!();
            selector::prompt_selection(matches.len())?
        }
    };

    match lookup::resolve_choice(&matches, selection, &config.base_url) {
        Choice::Video(url) => {
            println!("{}", url);
            if config.open_browser && !cli.no_open {
                if let Err(e) = browser::open_url(&url) {
                    tracing::warn!("{}", e);
                }
            }
        }
        Choice::NoVideo => println!("No video available for this entry."),
        Choice::Rejected(message) => println!("{}", message),
    }

    Ok(())
}
