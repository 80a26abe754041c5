mod app;
mod client;
mod error;
mod events;
mod pictures;
mod state;
mod ui;
mod worker;

use crate::app::RoomcraftApp;
use crate::client::config::ClientConfig;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ClientConfig::load();
    log::info!("using design API at {}", config.base_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("RoomCraft")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "roomcraft",
        options,
        Box::new(move |cc| Ok(Box::new(RoomcraftApp::new(cc, config)?))),
    )
}
