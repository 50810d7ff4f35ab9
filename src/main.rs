use review_notifier::adapter::outbound::practicum::PracticumClient;
use review_notifier::adapter::outbound::telegram::TelegramMessenger;
use review_notifier::app::{Credentials, Poller, Settings};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let settings = match Settings::load_or_default(Settings::default_path()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    settings.logging.init();

    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Required configuration missing, exiting");
            std::process::exit(1);
        }
    };

    let endpoint = match settings.api.endpoint_url() {
        Ok(url) => url,
        Err(e) => {
            error!(error = %e, "Invalid review API endpoint");
            std::process::exit(1);
        }
    };

    let source = PracticumClient::with_timeout(
        endpoint,
        credentials.practicum_token,
        settings.api.timeout(),
    );
    let messenger = TelegramMessenger::new(&credentials.telegram_token);
    let poller = Poller::new(source, messenger, credentials.chat, settings.poll);

    tokio::select! {
        () = poller.run() => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("review-notifier stopped");
}
