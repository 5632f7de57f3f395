use anyhow::Result;
use clap::Parser;
use stockplot_client::prelude::build_client;
use stockplot_web::{cli, state::AppState};

fn preprocess() {
    // grant access to .env
    dotenv::dotenv().ok();

    // initialise logger
    env_logger::init();
}

#[rocket::main]
async fn main() -> Result<()> {
    preprocess();
    let cli = cli::Cli::parse();
    log::info!("Command line input recorded: {cli:#?}");

    let client = build_client(&cli.user_agent)?;
    let state = AppState::new(cli.provider.build(client));

    let figment = rocket::Config::figment()
        .merge(("address", cli.address))
        .merge(("port", cli.port));

    let _rocket = stockplot_web::build_with(figment, state).launch().await?;
    Ok(())
}
