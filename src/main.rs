use speedometer::SpeedometerConfig;
use std::process;

fn main() {
    env_logger::init();

    let config = SpeedometerConfig::default();
    if let Err(err) = speedometer::run(config) {
        log::error!("{err}");
        process::exit(1);
    }
}
