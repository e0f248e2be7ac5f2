//! Tests for the murmuration demo configuration.

#[cfg(test)]
mod config_tests {
    use flock_core::{SimConfig, Vec3};

    use crate::{DemoConfig, orbit_anchor};

    #[test]
    fn partial_sim_section_keeps_defaults() {
        let cfg: DemoConfig = serde_json::from_str(r#"{"sim": {"total_ticks": 10}}"#).unwrap();
        assert_eq!(cfg.sim.total_ticks, 10);
        assert_eq!(cfg.sim.delta_time, SimConfig::default().delta_time);
        assert_eq!(cfg.agents, DemoConfig::default().agents);
    }

    #[test]
    fn partial_params_section_keeps_defaults() {
        let cfg: DemoConfig = serde_json::from_str(r#"{"params": {"base_speed": 3.0}}"#).unwrap();
        assert_eq!(cfg.params.base_speed, 3.0);
        assert_eq!(cfg.sim.total_ticks, DemoConfig::default().sim.total_ticks);
    }

    #[test]
    fn zero_period_keeps_anchor_fixed() {
        let cfg = DemoConfig { orbit_period: 0.0, ..DemoConfig::default() };
        assert_eq!(orbit_anchor(&cfg, 3.0), cfg.params.anchor);
    }

    #[test]
    fn orbit_starts_on_positive_x() {
        let cfg = DemoConfig::default();
        let a = orbit_anchor(&cfg, 0.0);
        let expected = cfg.params.anchor + Vec3::X * cfg.orbit_radius;
        assert!((a - expected).length() < 1e-4);
    }
}
