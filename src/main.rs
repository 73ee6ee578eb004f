use anyhow::Context;
use talk_booking::configuration::get_configuration;
use talk_booking::startup::Application;
use talk_booking::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("talk-booking".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber).context("Failed to initialise telemetry.")?;

    let config = get_configuration().context("Failed to read configuration.")?;
    let app = Application::build(config).context("Failed to build the application.")?;
    app.run().await?;

    Ok(())
}
