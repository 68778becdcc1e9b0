//! Command implementations for the LGO CLI.
//!
//! Each subcommand hits one backend endpoint, shapes the body with
//! `lgo-core` exactly as the dashboard does, and prints a plain-text table.

use anyhow::Context;
use clap::Subcommand;
use lgo_core::detail::build_detail_rows;
use lgo_core::disaggregation::DisaggregationOptions;
use lgo_core::models::{LaOutcomeRow, ParetoRow, SummaryResponse, TrendResponse};
use lgo_core::query::{Endpoint, Selection};
use lgo_core::ranking::rank_rows;
use lgo_core::trend::TrendChart;
use log::info;

pub mod backend;
pub mod report;

use backend::Backend;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Subcommand)]
pub enum Command {
    /// Rank councils on a measure (descending)
    Ranking {
        /// Measure group description
        #[arg(short, long)]
        measure: String,

        /// Disaggregation category; omit for no filter
        #[arg(short, long)]
        disagg: Option<String>,

        /// Restrict to a council region (repeatable)
        #[arg(short, long = "region")]
        regions: Vec<String>,

        /// Council to mark in the output
        #[arg(long)]
        highlight: Option<String>,

        /// Also write the ranking to this CSV path
        #[arg(long)]
        csv: Option<String>,
    },

    /// List the disaggregation categories offered for a measure
    Disaggregations {
        #[arg(short, long)]
        measure: String,
    },

    /// Show every aggregate measure for a council (England when omitted)
    Outcomes {
        #[arg(long)]
        la: Option<String>,
    },

    /// Show England / region / council values by year
    Trend {
        #[arg(short, long)]
        measure: String,

        #[arg(long)]
        la: Option<String>,
    },

    /// Generate an AI summary for a council
    Summary {
        #[arg(short, long)]
        council: String,
    },
}

pub async fn run(backend: &Backend, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Ranking {
            measure,
            disagg,
            regions,
            highlight,
            csv,
        } => {
            let selection = Selection {
                measure,
                disaggregation: disagg,
                regions,
                highlight,
            };
            let rows: Vec<ParetoRow> = backend
                .get(&selection.pareto_endpoint())
                .await
                .context("failed to fetch ranking")?;
            let chart = rank_rows(&rows, selection.highlight.as_deref());
            if selection.highlight.is_some() && chart.highlight.is_none() {
                info!(
                    "Highlight {:?} is not in the result set",
                    selection.highlight
                );
            }
            print!("{}", report::format_ranking(&chart));

            if let Some(path) = csv {
                let file = std::fs::File::create(&path)
                    .with_context(|| format!("failed to create {}", path))?;
                report::write_ranking_csv(file, &chart)?;
                info!("Wrote {} rows to {}", chart.bars.len(), path);
            }
            Ok(())
        }
        Command::Disaggregations { measure } => {
            let categories: Vec<String> = backend
                .get(&Endpoint::DisaggregationOptions { measure })
                .await
                .context("failed to fetch disaggregation options")?;
            let options = DisaggregationOptions::from_categories(categories);
            print!("{}", report::format_disaggregations(&options));
            Ok(())
        }
        Command::Outcomes { la } => {
            let rows: Vec<LaOutcomeRow> = backend
                .get(&Endpoint::LaOutcomes { la })
                .await
                .context("failed to fetch outcomes")?;
            print!("{}", report::format_detail(&build_detail_rows(&rows)));
            Ok(())
        }
        Command::Trend { measure, la } => {
            let resp: TrendResponse = backend
                .get(&Endpoint::Trend {
                    measure,
                    la: la.clone(),
                })
                .await
                .context("failed to fetch trend data")?;
            match TrendChart::build(&resp, la.as_deref()) {
                Some(chart) => print!("{}", report::format_trend(&chart)),
                None => println!("No trend data available."),
            }
            Ok(())
        }
        Command::Summary { council } => {
            let resp: SummaryResponse = backend
                .get(&Endpoint::Summary { council })
                .await
                .context("failed to generate summary")?;
            println!("{}", resp.summary);
            Ok(())
        }
    }
}
