use clap::Parser;

use alternates::adapter::inbound::cli::command::Cli;
use alternates::adapter::inbound::cli::{diagnostic, dispatch, operator, output};
use alternates::infrastructure::operator::entry::Operator;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config_path = cli.config.clone();

    if operator::install(Operator::boxed()).is_err() {
        eprintln!("operator already installed");
        std::process::exit(1);
    }

    if let Err(error) = dispatch::execute(cli).await {
        if output::is_json() {
            output::error(&error.user_message());
            std::process::exit(1);
        }
        let config_toml = operator::read_config_toml_or_default(&config_path).ok();
        eprintln!("{:?}", diagnostic::report(error, config_toml.as_deref()));
        std::process::exit(1);
    }
}
