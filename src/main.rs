//! Local line-based transport for the stalk ledger.
//!
//! Reads `<user> <command>` lines from stdin and replies on stdout, standing
//! in for the chat platform. One line, one command, one reply.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use stalk_ledger::adapters::chart::SvgChartRenderer;
use stalk_ledger::adapters::forecast::{TurnipApiConfig, TurnipApiForecaster};
use stalk_ledger::adapters::store::JsonFileLedgerStore;
use stalk_ledger::application::commands::{self, ChatCommand};
use stalk_ledger::application::handlers::{
    PredictHandler, ResetWeekHandler, SubmitPriceCommand, SubmitPriceHandler, WeekReportHandler,
};
use stalk_ledger::application::UserLocks;
use stalk_ledger::config::AppConfig;
use stalk_ledger::domain::ledger::UserId;
use stalk_ledger::domain::report::render_week;
use stalk_ledger::ports::ChartImage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let store = Arc::new(JsonFileLedgerStore::new(&config.store.data_dir));
    let locks = Arc::new(UserLocks::new());
    let forecaster = Arc::new(TurnipApiForecaster::new(
        TurnipApiConfig::new()
            .with_base_url(config.forecast.base_url.clone())
            .with_timeout(config.forecast.timeout())
            .with_max_retries(config.forecast.max_retries),
    ));
    let renderer = Arc::new(SvgChartRenderer::new());

    let submit = SubmitPriceHandler::new(store.clone(), locks.clone());
    let reset = ResetWeekHandler::new(store.clone(), locks);
    let predict = PredictHandler::new(store.clone(), forecaster, renderer);
    let report = WeekReportHandler::new(store);

    tracing::info!(data_dir = %config.store.data_dir.display(), "stalk ledger ready");
    println!("commands: <user> price <n> <am|pm> | <user> predict | <user> reset");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((user, rest)) = line.split_once(char::is_whitespace) else {
            println!("{}", commands::USAGE);
            continue;
        };
        let user = match UserId::new(user) {
            Ok(user) => user,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match commands::parse(rest) {
            Ok(ChatCommand::Price { price, slot }) => {
                let cmd = SubmitPriceCommand {
                    user: user.clone(),
                    price,
                    slot,
                    day: None,
                };
                match submit.handle(cmd).await {
                    Ok(record) => {
                        // Reply with the week so far; the prediction is
                        // best-effort and degrades to a placeholder.
                        let pattern = match predict.handle(&user).await {
                            Ok(prediction) => {
                                announce_chart(&user, &prediction.chart);
                                Some(prediction.pattern)
                            }
                            Err(err) => {
                                tracing::warn!(user = %user, error = %err, "no prediction for reply");
                                None
                            }
                        };
                        println!("{}", render_week(&record, pattern.as_ref()));
                    }
                    Err(err) => println!("{err}"),
                }
            }
            Ok(ChatCommand::Predict) => match predict.handle(&user).await {
                Ok(prediction) => {
                    announce_chart(&user, &prediction.chart);
                    match report.handle(&user, Some(&prediction.pattern)).await {
                        Ok(text) => println!("{text}"),
                        Err(err) => println!("{err}"),
                    }
                }
                Err(err) => println!("{err}"),
            },
            Ok(ChatCommand::Reset) => match reset.handle(user.clone()).await {
                Ok(_) => println!("price history reset for {user}"),
                Err(err) => println!("{err}"),
            },
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

/// Writes the per-call chart artifact somewhere the user can open it.
fn announce_chart(user: &UserId, chart: &ChartImage) {
    let path: PathBuf = std::env::temp_dir().join(format!("stalk-{}.svg", user));
    match std::fs::write(&path, chart.bytes()) {
        Ok(()) => println!("chart written to {}", path.display()),
        Err(err) => tracing::warn!(error = %err, "could not write chart artifact"),
    }
}
