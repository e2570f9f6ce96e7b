use crate::domain::config::{ConfigError, EngineConfig, Parameter};

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn set_parameter(world: &mut SimulationCore, name: &str, value: f64) -> Result<(), ConfigError> {
    let param = Parameter::from_name(name)?;
    apply(world, param, value)
}

pub(super) fn set_parameter_raw(world: &mut SimulationCore, name: &str, raw: &str) -> bool {
    let result = Parameter::from_name(name)
        .and_then(|param| param.parse(raw).and_then(|value| apply(world, param, value)));
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("ignoring parameter input: {}", e);
            false
        }
    }
}

pub(super) fn get_parameter(world: &SimulationCore, name: &str) -> Result<f64, ConfigError> {
    Ok(world.config.get(Parameter::from_name(name)?))
}

fn apply(world: &mut SimulationCore, param: Parameter, value: f64) -> Result<(), ConfigError> {
    let changed = world.config.apply(param, value)?;
    if changed && param.affects_layout() {
        world.rebuild();
    }
    Ok(())
}

pub(super) fn load_config_json(world: &mut SimulationCore, json: &str) -> Result<(), ConfigError> {
    let config = EngineConfig::from_json(json)?;
    let relayout = config.layout != world.config.layout
        || config.sim.sample_stride != world.config.sim.sample_stride;
    world.config = config;
    if relayout {
        world.rebuild();
    }
    Ok(())
}

pub(super) fn config_json(world: &SimulationCore) -> String {
    world.config.to_json()
}

pub(super) fn enable_perf_metrics(world: &mut SimulationCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats = PerfStats::default();
    }
}

pub(super) fn get_perf_stats(world: &SimulationCore) -> PerfStats {
    world.perf_stats.clone()
}
