use log::info;
use quanta_sim::config;
use quanta_sim::init_config::{ConfigError, InitConfig};
use quanta_sim::simulation::Simulation;
use quanta_sim::utils;

fn main() {
    env_logger::init();
    let result = match std::env::args().nth(1) {
        Some(path) => run_scenario(&path),
        None => {
            info!("no scenario file given, running built-in demo");
            run(demo_sim(), config::DEFAULT_STEPS);
            Ok(())
        }
    };
    if let Err(err) = result {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run_scenario(path: &str) -> Result<(), ConfigError> {
    let init = InitConfig::load_from_file(path)?;
    run(init.build()?, init.steps());
    Ok(())
}

/// A small neutral gas of proton/electron pairs with emission switched on.
fn demo_sim() -> Simulation {
    fastrand::seed(0);
    let mut sim = Simulation::default();
    sim.seed_rng(0);
    sim.config.enable_emission = true;
    for body in utils::hydrogen_pairs(24, sim.size, 0.05) {
        sim.add_particle(body);
    }
    sim
}

fn run(mut sim: Simulation, steps: usize) {
    info!(
        "{} particles, {} steps, dt {}, domain {}{}",
        sim.particle_count(),
        steps,
        sim.dt,
        sim.size,
        if sim.mode_3d() { " (3D)" } else { "" }
    );
    let report_interval = (steps / 10).max(1);
    let mut done = 0;
    while done < steps {
        let chunk = report_interval.min(steps - done);
        sim.run_steps(chunk);
        done += chunk;
        let energy = sim.energy_breakdown();
        info!(
            "step {:>7}: {} particles ({} photons), kinetic {:.4e}, photon {:.4e}, potential {:.4e}, total {:.4e}",
            done,
            sim.particle_count(),
            sim.photon_count(),
            energy.kinetic,
            energy.photon,
            energy.potential,
            energy.total,
        );
    }
}
