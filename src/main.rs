use std::io::{self, BufRead};
use std::process::ExitCode;

use log::{error, info, warn};

use torch_tile::{load_config, RecordingSurface, TileConfig, TileDispatcher, TileEvent, TorchTile};

fn main() -> ExitCode {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => TileConfig::default(),
    };
    info!("torch control file: {}", config.control_path.display());

    let mut host = TileDispatcher::new(RecordingSurface::default());
    TorchTile::from_config(&config).register(&mut host);

    host.dispatch(TileEvent::Attached);
    print_tile(host.surface());

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("stdin: {}", e);
                return ExitCode::FAILURE;
            }
        };
        let event = match line.trim() {
            "" => continue,
            "attach" => TileEvent::Attached,
            "tap" => TileEvent::Tapped,
            other => {
                warn!("unknown event {:?}, expected attach or tap", other);
                continue;
            }
        };
        host.dispatch(event);
        print_tile(host.surface());
    }
    ExitCode::SUCCESS
}

fn print_tile(surface: &RecordingSurface) {
    if let (Some(state), Some(icon)) = (surface.state, surface.icon) {
        println!("{:?} {:?}", state, icon);
    }
}
