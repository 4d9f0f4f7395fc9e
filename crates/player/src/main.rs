//! Chatform responder - composition root binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chatform_player::config::{load_dotenv_from_repo_root, PlayerConfig};
use chatform_player::infrastructure::ApiAdapter;
use chatform_player::ports::outbound::RawApiPort;
use chatform_player::presentation::Services;

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatform_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PlayerConfig::from_env()?;
    tracing::info!(
        api_url = %config.api_url,
        form = %config.form_url,
        "Starting Chatform responder"
    );

    // HTTP
    let raw_api: Arc<dyn RawApiPort> =
        Arc::new(ApiAdapter::new(&config.api_url, config.request_timeout)?);

    let services = Services::new(raw_api, config.form_url, config.auto_advance_delay);

    // Launch Dioxus
    let css = load_player_css();
    let head = format!("<style>{}</style>", css);
    let cfg = dioxus_desktop::Config::new()
        .with_custom_head(head)
        .with_window(dioxus_desktop::WindowBuilder::new().with_title("Chatform"));

    dioxus::LaunchBuilder::new()
        .with_cfg(cfg)
        .with_context(services)
        .launch(chatform_player::app);

    Ok(())
}

fn load_player_css() -> String {
    const FALLBACK_CSS: &str = include_str!("../assets/css/chatform.css");

    // Prefer the on-disk stylesheet so edits show up without a rebuild.
    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("css")
        .join("chatform.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
