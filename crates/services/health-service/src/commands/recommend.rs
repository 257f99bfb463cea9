//! Recommend command - evaluate a stored health record.

use common::AppResult;

use crate::cli::RecommendArgs;
use crate::config::HealthServiceConfig;
use crate::HealthApp;

/// Execute the recommend command
pub async fn execute(args: RecommendArgs, config: HealthServiceConfig) -> AppResult<()> {
    let app = HealthApp::open(&config).await?;

    let texts = app
        .recommendations
        .generate_for_record(args.record_id)
        .await?;

    if texts.is_empty() {
        println!("No recommendations: all readings are within range.");
    }
    for text in &texts {
        println!("- {}", text);
    }

    app.shutdown().await
}
