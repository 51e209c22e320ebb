//! Dynasty Trade Calculator CLI
//!
//! Loads dynasty and market values, then evaluates trades, searches player
//! names, values draft picks and encodes or decodes shareable trade links.

mod cli;
mod loader;
mod logging;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::*;
use tracing::info;

use cli::{Cli, Commands};
use trade_engine::share;
use trade_engine::{Side, TradeConfig, TradeResult, TradeSession, Verdict};
use value_registry::ordinal;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    logging::initialize_logging_with_config(&config.logging)?;

    info!("Starting trade calculator");
    let sources = loader::load_sources(&config.sources).await;
    let mut session = TradeSession::new(sources.dynasty, sources.market, &config);

    match cli.command {
        Commands::Evaluate { trade, json } => {
            trade.fill(&mut session);
            report(&session, json)?;
        }
        Commands::Search { query } => {
            let suggestions = session.suggest(&query);
            if suggestions.is_empty() {
                println!("No players match {:?}", query);
            }
            for suggestion in suggestions {
                let value = session.registry().get_by_key(suggestion.key.as_str()).map(|r| r.merged).unwrap_or_default();
                println!("{:<30} {:>6}", suggestion.original_name, value);
            }
        }
        Commands::Pick { year, round, slot } => {
            let value = session.picks().valuate(year, round, slot, session.settings().superflex);
            println!("{} {} {}: {}", year, slot, ordinal(round), value.to_string().bold());
        }
        Commands::Share { trade, base_url } => {
            trade.fill(&mut session);
            let token = session.share_token().context("Failed to encode trade")?;
            let url = share::share_url(&base_url, &token).with_context(|| format!("Invalid base URL {:?}", base_url))?;
            println!("{}", url);
        }
        Commands::Load { link, json } => {
            let Some(token) = share::token_from_url(&link) else {
                bail!("No shared trade found in {:?}", link);
            };
            if !session.restore(&token) {
                bail!("Shared trade could not be decoded");
            }
            report(&session, json)?;
        }
    }

    Ok(())
}

/// Configuration file and environment, then command line overrides
fn load_config(cli: &Cli) -> Result<TradeConfig> {
    let mut config = TradeConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(path) = &cli.values {
        config.sources.values_csv = Some(path.clone());
    }
    if let Some(path) = &cli.market {
        config.sources.market_json = Some(path.clone());
    }
    config.league.superflex |= cli.superflex;
    config.league.te_premium |= cli.te_premium;

    Ok(config)
}

fn report(session: &TradeSession, json: bool) -> Result<()> {
    let result = session.evaluate();
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for side in [Side::A, Side::B] {
        println!("{}", format!("{} receives", side).bold());
        for asset in session.assets(side) {
            println!("  {:<30} {:>6}", asset.label(), asset.value());
        }
    }
    println!();
    print_result(&result);
    Ok(())
}

fn print_result(result: &TradeResult) {
    println!("Team A total: {}", result.team_a_value);
    println!("Team B total: {}", result.team_b_value);
    println!("Difference:   {}", result.difference);

    let fairness = format!("{}%", result.fairness_percentage);
    let fairness = match result.fairness_percentage {
        90.. => fairness.green(),
        70..=89 => fairness.yellow(),
        _ => fairness.red(),
    };
    println!("Fairness:     {}", fairness.bold());

    let message = match result.winner {
        Verdict::Fair => result.message.green(),
        Verdict::SideA | Verdict::SideB => result.message.yellow(),
    };
    println!("{}", message.bold());
}
