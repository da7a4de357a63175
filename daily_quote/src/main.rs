// ---------------------------------------------------------------------
// name: daily_quote
// type: Command line application.
// desc: Prints the quote the check-in would post today, without
//       logging in or posting anything.
// ---------------------------------------------------------------------

use std::process::ExitCode;

use checkin_assistant::quotes::select_quote;
use checkin_assistant::{logging, FetchOptions, Hitokoto, Jinrishici};
use reqwest::Client;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    logging::init();

    match daily_quote().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn daily_quote() -> anyhow::Result<()> {
    let client = Client::builder().build()?;
    let (hitokoto, jinrishici) = (Hitokoto::default(), Jinrishici::default());

    match select_quote(&client, &[&hitokoto, &jinrishici], &FetchOptions::default()).await? {
        Some((provider, quote)) => {
            info!("use {}.", provider);
            println!("{}", quote);
        }
        None => info!("no quote available."),
    }
    Ok(())
}
