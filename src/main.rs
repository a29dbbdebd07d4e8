use tic_tac_toe::components::app::{App, AppProps};
use tic_tac_toe::config::GameConfig;
use tic_tac_toe::logging;
use tracing::warn;

fn main() {
    let stored = GameConfig::load();
    let config = stored.as_ref().cloned().unwrap_or_default();
    logging::init(&config.log_level);
    if let Err(e) = stored {
        warn!(error = %e, "ignoring stored config");
    }
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
