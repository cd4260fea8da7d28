//! Integration tests for the weekly ledger flow.
//!
//! These wire real adapters together and walk the command paths end to end:
//! 1. Submissions create and patch records through a store
//! 2. Prediction snapshots the week and renders a chart
//! 3. The formatter reports exactly what was stored

use std::sync::Arc;

use stalk_ledger::adapters::chart::SvgChartRenderer;
use stalk_ledger::adapters::forecast::MockForecaster;
use stalk_ledger::adapters::store::{InMemoryLedgerStore, JsonFileLedgerStore};
use stalk_ledger::application::handlers::{
    PredictHandler, ResetWeekHandler, SubmitPriceCommand, SubmitPriceHandler, WeekReportHandler,
};
use stalk_ledger::application::UserLocks;
use stalk_ledger::domain::ledger::{LedgerError, MarketDay, Slot, UserId};
use stalk_ledger::ports::LedgerStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Stack {
    store: Arc<InMemoryLedgerStore>,
    submit: SubmitPriceHandler,
    reset: ResetWeekHandler,
    report: WeekReportHandler,
}

fn stack() -> Stack {
    let store = Arc::new(InMemoryLedgerStore::new());
    let locks = Arc::new(UserLocks::new());
    Stack {
        store: store.clone(),
        submit: SubmitPriceHandler::new(store.clone(), locks.clone()),
        reset: ResetWeekHandler::new(store.clone(), locks),
        report: WeekReportHandler::new(store),
    }
}

fn alice() -> UserId {
    UserId::new("alice").unwrap()
}

fn submit(user: &str, price: u32, slot: Slot, day: i64) -> SubmitPriceCommand {
    SubmitPriceCommand {
        user: UserId::new(user).unwrap(),
        price,
        slot,
        day: Some(day),
    }
}

// =============================================================================
// Submission and reporting
// =============================================================================

#[tokio::test]
async fn first_submission_then_report_shows_single_observation() {
    let stack = stack();

    stack
        .submit
        .handle(submit("alice", 90, Slot::Am, 0))
        .await
        .unwrap();

    let report = stack.report.handle(&alice(), None).await.unwrap();
    assert!(report.contains("Monday    : 90am 0pm"));
    assert!(report.contains("Tuesday   : 0am 0pm"));
    assert!(report.contains("Saturday  : 0am 0pm"));
}

#[tokio::test]
async fn reset_then_read_back_is_all_zero() {
    let stack = stack();

    for day in 0..6i64 {
        stack
            .submit
            .handle(submit("alice", 100 + day as u32, Slot::Am, day))
            .await
            .unwrap();
    }

    stack.reset.handle(alice()).await.unwrap();

    let record = stack.report.record(&alice()).await.unwrap().unwrap();
    assert_eq!(record.cells(), [0; 12]);
}

#[tokio::test]
async fn unknown_user_report_is_no_record() {
    let stack = stack();
    let err = stack.report.handle(&alice(), None).await.unwrap_err();
    assert!(matches!(err, LedgerError::NoRecord { .. }));
}

// =============================================================================
// Prediction orchestration
// =============================================================================

#[tokio::test]
async fn prediction_flow_encodes_week_and_renders_chart() {
    let stack = stack();
    let forecaster = Arc::new(MockForecaster::returning(vec![90.0, 85.0, 80.0, 75.0]));
    let predict = PredictHandler::new(
        stack.store.clone(),
        forecaster.clone(),
        Arc::new(SvgChartRenderer::new()),
    );

    stack
        .submit
        .handle(submit("alice", 129, Slot::Am, 0))
        .await
        .unwrap();
    stack
        .submit
        .handle(submit("alice", 93, Slot::Pm, 0))
        .await
        .unwrap();

    let prediction = predict.handle(&alice()).await.unwrap();

    assert_eq!(
        forecaster.recorded_queries(),
        vec!["-129-93-0-0-0-0-0-0-0-0-0-0".to_string()]
    );
    assert_eq!(prediction.chart.media_type(), "image/svg+xml");
    assert!(!prediction.chart.bytes().is_empty());

    let report = stack
        .report
        .handle(&alice(), Some(&prediction.pattern))
        .await
        .unwrap();
    assert!(report.contains("Avg       : [90, 85, 80, 75]"));
}

#[tokio::test]
async fn all_zero_week_still_issues_well_formed_query() {
    let stack = stack();
    let forecaster = Arc::new(MockForecaster::returning(vec![]));
    let predict = PredictHandler::new(
        stack.store.clone(),
        forecaster.clone(),
        Arc::new(SvgChartRenderer::new()),
    );

    stack.reset.handle(alice()).await.unwrap();
    predict.handle(&alice()).await.unwrap();

    assert_eq!(
        forecaster.recorded_queries(),
        vec!["-0-0-0-0-0-0-0-0-0-0-0-0".to_string()]
    );
}

// =============================================================================
// Durable store
// =============================================================================

#[tokio::test]
async fn twelve_cells_survive_the_json_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileLedgerStore::new(dir.path()));
    let locks = Arc::new(UserLocks::new());
    let submit_handler = SubmitPriceHandler::new(store.clone(), locks);

    let mut expected = Vec::new();
    for day in 0..6i64 {
        for (slot, offset) in [(Slot::Am, 1u32), (Slot::Pm, 2u32)] {
            let price = (day as u32) * 10 + offset;
            submit_handler
                .handle(submit("alice", price, slot, day))
                .await
                .unwrap();
            expected.push(price);
        }
    }

    // read back through a second store over the same directory
    let reread = JsonFileLedgerStore::new(dir.path());
    let record = reread.find_by_user(&alice()).await.unwrap().unwrap();
    assert_eq!(record.cells().to_vec(), expected);
    assert_eq!(record.price(MarketDay::Saturday, Slot::Pm), 52);
}
