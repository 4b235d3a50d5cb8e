use clap::Parser;
use log::info;
use skywatch::cli::Cli;
use skywatch::client::OpenNotifyClient;
use skywatch::config::ApplicationConfig;
use skywatch::farewell::load_farewell;
use skywatch::gui;
use skywatch::logging::setup_logging;
use skywatch::roster::print_roster;
use skywatch::shutdown::ShutdownSignal;
use skywatch::thread_manager::ThreadManager;
use skywatch::tracker::{PositionPoller, StationStore};
use skywatch::types::GroundLocation;

fn main() {
    let cli = Cli::parse();
    let config = match &cli.config_file {
        Some(path) => ApplicationConfig::construct_from_path(path).unwrap_or_else(|e| {
            log::error!("{e}");
            panic!("Config error. Exiting.")
        }),
        None => ApplicationConfig::default(),
    };

    setup_logging(cli.logging_level);
    info!("Main: Application started.");

    let farewell = load_farewell(&config.assets.farewell_file).unwrap_or_else(|e| {
        log::error!("{e}");
        panic!("Farewell file error. Exiting.")
    });

    let observer = GroundLocation::new(config.observer.longitude, config.observer.latitude)
        .unwrap_or_else(|e| {
            log::error!("{e}");
            panic!("Observer location error. Exiting.")
        });

    let client = OpenNotifyClient::new(&config.api).unwrap_or_else(|e| {
        log::error!("{e}");
        panic!("HTTP client error. Exiting.")
    });

    let roster = client.astronauts().unwrap_or_else(|e| {
        log::error!("{e}");
        panic!("Astronaut roster error. Exiting.")
    });
    print_roster(&roster);

    let pass = client.next_pass(observer).unwrap_or_else(|e| {
        log::error!("{e}");
        panic!("Pass prediction error. Exiting.")
    });

    let assets = gui::load_assets(&config.assets).unwrap_or_else(|e| {
        log::error!("{e}");
        panic!("Asset error. Exiting.")
    });

    let store = StationStore::new();
    let shutdown = ShutdownSignal::new();
    let poller = PositionPoller::new(client, store.writer(), shutdown.clone());

    let mut thread_manager = ThreadManager::new();
    thread_manager.add_task(poller, std::time::Duration::from_secs(1));

    println!("Click anywhere on the map to close the screen...");
    if let Err(e) = gui::run(
        &config.window,
        assets,
        store.viewer(),
        shutdown.clone(),
        observer,
        config.observer.name.clone(),
        pass,
    ) {
        log::error!("Main: Map window error: {e}");
    }

    shutdown.trigger();
    thread_manager.stop_all();
    thread_manager.join_all();

    info!("Main: Program finished.");
    println!("{farewell}");
}
