// ---------------------------------------------------------------------
// name: checkin
// type: Command line application.
// desc: Daily luogu check-in. Punches in with the session cookie from
//       the environment, then posts a short quote as a benben.
// ---------------------------------------------------------------------

use std::process::ExitCode;

use checkin_assistant::{logging, Config};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    // A .env file is optional; the variables may come from the scheduler.
    dotenv::dotenv().ok();
    logging::init();

    match checkin().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

// The cookie check comes first so a misconfigured run makes no requests.
async fn checkin() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    checkin_assistant::run(&config).await?;
    Ok(())
}
