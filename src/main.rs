mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine, the environment may already be set up
    dotenvy::dotenv().ok();
    env_logger::init();

    cli::run()?;

    Ok(())
}
