//! Command line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use trade_engine::{Side, TradeAsset, TradeSession};
use value_registry::PickSlot;

#[derive(Parser)]
#[command(name = "trade-calc")]
#[command(about = "Dynasty fantasy football trade calculator")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dynasty values CSV export
    #[arg(long, global = true)]
    pub values: Option<PathBuf>,

    /// Market values JSON payload
    #[arg(long, global = true)]
    pub market: Option<PathBuf>,

    /// Value players for a superflex (2QB) league
    #[arg(long, global = true)]
    pub superflex: bool,

    /// Apply the tight end premium
    #[arg(long, global = true)]
    pub te_premium: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a trade between two teams
    Evaluate {
        #[command(flatten)]
        trade: TradeArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest player names matching partial input
    Search {
        /// Partial player name
        query: String,
    },

    /// Value a single draft pick
    Pick {
        year: i32,

        round: u32,

        /// Early, Mid or Late
        #[arg(default_value = "Mid")]
        slot: PickSlot,
    },

    /// Print a shareable link for a trade
    Share {
        #[command(flatten)]
        trade: TradeArgs,

        /// Page the link points at
        #[arg(long, default_value = "http://localhost:3000/")]
        base_url: String,
    },

    /// Evaluate a trade from a shared link or token
    Load {
        /// Share URL or bare token
        link: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// The two bundles of a trade
#[derive(clap::Args, Debug, Clone)]
pub struct TradeArgs {
    /// Assets Team A receives (player name or pick:<year>:<round>[:<slot>])
    #[arg(long = "team-a", num_args = 1..)]
    pub team_a: Vec<AssetArg>,

    /// Assets Team B receives
    #[arg(long = "team-b", num_args = 1..)]
    pub team_b: Vec<AssetArg>,
}

impl TradeArgs {
    /// Add every asset to the session
    pub fn fill(&self, session: &mut TradeSession) {
        for asset in &self.team_a {
            asset.add_to(session, Side::A);
        }
        for asset in &self.team_b {
            asset.add_to(session, Side::B);
        }
    }
}

/// An asset as typed on the command line
#[derive(Debug, Clone, PartialEq)]
pub enum AssetArg {
    Player(String),
    Pick { year: i32, round: u32, slot: PickSlot },
}

impl AssetArg {
    pub fn add_to<'a>(&self, session: &'a mut TradeSession, side: Side) -> &'a TradeAsset {
        match self {
            AssetArg::Player(name) => session.add_athlete(side, name),
            AssetArg::Pick { year, round, slot } => session.add_pick(side, *year, *round, *slot),
        }
    }
}

impl FromStr for AssetArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("asset must not be empty".to_string());
        }

        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() == 1 || !parts[0].eq_ignore_ascii_case("pick") {
            return Ok(AssetArg::Player(s.to_string()));
        }

        if !(3..=4).contains(&parts.len()) {
            return Err(format!("expected pick:<year>:<round>[:<slot>], got {s:?}"));
        }

        let year = parts[1].trim().parse::<i32>().map_err(|e| format!("invalid pick year {:?}: {e}", parts[1]))?;
        let round = parts[2].trim().parse::<u32>().map_err(|e| format!("invalid pick round {:?}: {e}", parts[2]))?;
        if round == 0 {
            return Err("pick round starts at 1".to_string());
        }
        let slot = match parts.get(3) {
            Some(slot) => slot.parse::<PickSlot>().map_err(|e| e.to_string())?,
            None => PickSlot::Mid,
        };

        Ok(AssetArg::Pick { year, round, slot })
    }
}
