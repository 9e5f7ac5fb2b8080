use anyhow::Result;
use fuzzy_climate_controller::{cli, config::Config, telemetry, thermostat::Thermostat};
use tracing::info;

fn main() -> Result<()> {
    telemetry::init_tracing();

    let cfg = Config::load()?;
    let thermostat = Thermostat::with_step(cfg.engine.universe_step)?;
    info!(
        universe_step = cfg.engine.universe_step,
        rules = thermostat.engine().rules().len(),
        "thermostat rule base ready"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    cli::run(&thermostat, &cfg, &mut stdin.lock(), &mut stdout.lock())
}
