use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use tracker_client::{
    Command, Config, HttpTransport, Renderer, SessionController, TerminalRenderer,
    commands::HELP, handle_command,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with the rendered view
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new()?;
    info!("Starting tracker client against {}", config.api_url);

    let transport = HttpTransport::new(&config)?;
    let mut controller = SessionController::new(transport, config.notification_ttl());
    let mut renderer = TerminalRenderer::new(std::io::stdout());

    // Restore an existing session, if the server still knows us
    controller.check_auth_status().await;
    renderer.render(&controller.view_model())?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                warn!("{}", message);
                println!("{}", message);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            command => {
                if let Err(e) = handle_command(&mut controller, command).await {
                    // Already surfaced as a notification
                    error!("Command failed: {}", e);
                }
            }
        }

        renderer.render(&controller.view_model())?;
    }

    info!("Tracker client shutting down");
    Ok(())
}
