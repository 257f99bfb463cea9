//! Reminders command - list all or due medicine reminders.

use common::AppResult;
use domain::dates::parse_date;

use super::print_json;
use crate::cli::RemindersArgs;
use crate::config::HealthServiceConfig;
use crate::HealthApp;

/// Execute the reminders command
pub async fn execute(args: RemindersArgs, config: HealthServiceConfig) -> AppResult<()> {
    // Reject a bad date before touching the database
    let day = args.on.as_deref().map(parse_date).transpose()?;

    let app = HealthApp::open(&config).await?;

    let reminders = match (day, args.due) {
        (Some(day), _) => app.reminders.due_on(args.user_id, day).await?,
        (None, true) => app.reminders.due_today(args.user_id).await?,
        (None, false) => app.reminders.reminders_for(args.user_id).await?,
    };

    tracing::debug!(user_id = args.user_id, count = reminders.len(), "Reminders loaded");
    print_json(&reminders)?;

    app.shutdown().await
}
