//! Unit tests for abm-diffusion.

use abm_agent::{Agent, KnowledgeAgent};
use abm_core::{AgentId, SimRng, SpatialModel, Vec2};

use crate::{DiffusionModel, DiffusionParams};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn still_agent(id: u32, x: f64, y: f64, knowledge: f64) -> KnowledgeAgent {
    KnowledgeAgent::new(Agent::new(AgentId(id), Vec2::new(x, y), Vec2::ZERO, 0), knowledge)
}

/// Parameters with no noise so hand-placed agents stay where they are.
fn calm() -> DiffusionParams {
    DiffusionParams { jitter: 0.0, ..Default::default() }
}

fn calm_model(agents: Vec<KnowledgeAgent>) -> DiffusionModel {
    DiffusionModel::from_agents(agents, 100.0, calm(), SimRng::new(0)).unwrap()
}

fn level(model: &DiffusionModel, id: u32) -> f64 {
    model.agent(AgentId(id)).unwrap().knowledge_level
}

// ── Params ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod params_tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let p = DiffusionParams::default();
        assert!(p.validate().is_ok());
        assert_eq!(p.interaction_range, 15.0);
        assert_eq!(p.learning_increment, 0.1);
    }

    #[test]
    fn invalid_values_rejected() {
        let cases = [
            DiffusionParams { interaction_range: -1.0, ..Default::default() },
            DiffusionParams { jitter: f64::NAN, ..Default::default() },
            DiffusionParams { seed_fraction: 1.5, ..Default::default() },
            DiffusionParams { knowledge_bands: 0, ..Default::default() },
        ];
        for p in cases {
            assert!(p.validate().is_err(), "{p:?}");
        }
    }

    #[test]
    fn seed_count_rounds_with_floor_of_one() {
        let p = DiffusionParams::default();
        assert_eq!(p.seed_count(100), 5);
        assert_eq!(p.seed_count(3), 1);
        assert_eq!(p.seed_count(1), 1);

        let none = DiffusionParams { seed_fraction: 0.0, ..Default::default() };
        assert_eq!(none.seed_count(100), 0);

        let all = DiffusionParams { seed_fraction: 1.0, ..Default::default() };
        assert_eq!(all.seed_count(7), 7);
    }

    #[test]
    fn bands() {
        let p = DiffusionParams::default();
        assert_eq!(p.band(0.0), 0);
        assert_eq!(p.band(0.19), 0);
        assert_eq!(p.band(0.45), 2);
        assert_eq!(p.band(0.99), 4);
        assert_eq!(p.band(1.0), 5);
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction_tests {
    use super::*;
    use abm_core::{AbmError, PopulationConfig};

    #[test]
    fn spawns_seeded_population() {
        let model =
            DiffusionModel::new(100, 500.0, DiffusionParams::default(), SimRng::new(4)).unwrap();
        assert_eq!(model.agents().len(), 100);

        let seeded = model.agents().iter().filter(|a| a.knowledge_level == 1.0).count();
        assert_eq!(seeded, 5);

        for (i, a) in model.agents().iter().enumerate() {
            assert_eq!(a.id(), AgentId(i as u32));
            assert!(a.knowledge_level == 0.0 || a.knowledge_level == 1.0);
            assert_eq!(a.agent.group, 0);
            assert!(a.agent.vx.abs() <= 2.0 && a.agent.vy.abs() <= 2.0);
            assert!(model.domain().contains(a.agent.position()));
            assert!(a.connections.is_empty());
        }
    }

    #[test]
    fn rejects_bad_construction() {
        let p = DiffusionParams::default;
        assert!(matches!(
            DiffusionModel::new(0, 500.0, p(), SimRng::new(1)),
            Err(AbmError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            DiffusionModel::new(10, -1.0, p(), SimRng::new(1)),
            Err(AbmError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn from_agents_validates() {
        let dup = vec![still_agent(0, 1.0, 1.0, 0.0), still_agent(0, 2.0, 2.0, 0.0)];
        assert!(matches!(
            DiffusionModel::from_agents(dup, 100.0, calm(), SimRng::new(0)),
            Err(AbmError::DuplicateAgent(AgentId(0)))
        ));

        let over = vec![still_agent(0, 1.0, 1.0, 1.5)];
        assert!(DiffusionModel::from_agents(over, 100.0, calm(), SimRng::new(0)).is_err());

        assert!(matches!(
            DiffusionModel::from_agents(vec![], 100.0, calm(), SimRng::new(0)),
            Err(AbmError::EmptyPopulation)
        ));
    }

    #[test]
    fn from_config_matches_new() {
        let cfg = PopulationConfig::new(40, 250.0, 12);
        let a = DiffusionModel::from_config(&cfg, DiffusionParams::default()).unwrap();
        let b = DiffusionModel::new(40, 250.0, DiffusionParams::default(), SimRng::new(12))
            .unwrap();
        assert_eq!(a.agents(), b.agents());
    }
}

// ── Transfer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod transfer_tests {
    use super::*;

    #[test]
    fn informed_neighbor_teaches() {
        let mut model = calm_model(vec![
            still_agent(0, 50.0, 50.0, 1.0),
            still_agent(1, 55.0, 50.0, 0.0),
        ]);
        model.step();
        assert_eq!(level(&model, 0), 1.0);
        assert!((level(&model, 1) - 0.1).abs() < 1e-12);
        assert_eq!(model.agent(AgentId(1)).unwrap().agent.group, 0);
    }

    #[test]
    fn out_of_range_learns_nothing() {
        let mut model = calm_model(vec![
            still_agent(0, 10.0, 10.0, 1.0),
            still_agent(1, 10.0, 25.0, 0.0), // exactly on the range: not a neighbor
        ]);
        model.step();
        assert_eq!(level(&model, 1), 0.0);
    }

    #[test]
    fn transfer_is_synchronous() {
        // A–B and B–C are in range, A–C is not.
        let mut model = calm_model(vec![
            still_agent(0, 10.0, 50.0, 1.0),
            still_agent(1, 20.0, 50.0, 0.0),
            still_agent(2, 30.0, 50.0, 0.0),
        ]);
        model.step();
        // B learned this tick, but cannot pass it on until the next one.
        assert!((level(&model, 1) - 0.1).abs() < 1e-12);
        assert_eq!(level(&model, 2), 0.0);

        model.step();
        assert!((level(&model, 1) - 0.2).abs() < 1e-12);
        assert!((level(&model, 2) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn gains_accumulate_per_informed_neighbor() {
        let mut model = calm_model(vec![
            still_agent(0, 40.0, 50.0, 1.0),
            still_agent(1, 60.0, 50.0, 1.0),
            still_agent(2, 50.0, 50.0, 0.0),
        ]);
        model.step();
        assert!((level(&model, 2) - 0.2).abs() < 1e-12);
        assert_eq!(model.agent(AgentId(2)).unwrap().agent.group, 1);
    }

    #[test]
    fn partial_agents_teach_each_other() {
        let mut model = calm_model(vec![
            still_agent(0, 50.0, 50.0, 0.5),
            still_agent(1, 52.0, 50.0, 0.5),
        ]);
        model.step();
        assert!((level(&model, 0) - 0.6).abs() < 1e-12);
        assert!((level(&model, 1) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn learning_is_clamped_at_one() {
        let mut model = calm_model(vec![
            still_agent(0, 50.0, 50.0, 1.0),
            still_agent(1, 51.0, 50.0, 1.0),
            still_agent(2, 50.0, 51.0, 0.95),
        ]);
        model.step();
        assert_eq!(level(&model, 2), 1.0);
        assert_eq!(model.agent(AgentId(2)).unwrap().agent.group, 5);

        for _ in 0..20 {
            model.step();
            for a in model.agents() {
                assert!(a.knowledge_level <= 1.0);
            }
        }
    }

    #[test]
    fn uninformed_pair_stays_uninformed() {
        let mut model = calm_model(vec![
            still_agent(0, 50.0, 50.0, 0.0),
            still_agent(1, 51.0, 50.0, 0.0),
        ]);
        model.run(10);
        assert_eq!(model.stats().informed, 0);
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement_tests {
    use super::*;

    fn moving(id: u32, x: f64, y: f64, vx: f64, vy: f64) -> KnowledgeAgent {
        KnowledgeAgent::new(Agent::new(AgentId(id), Vec2::new(x, y), Vec2::new(vx, vy), 0), 0.0)
    }

    #[test]
    fn integrates_without_jitter() {
        let mut model = calm_model(vec![moving(0, 50.0, 50.0, 1.5, -0.5)]);
        model.step();
        let a = &model.agents()[0].agent;
        assert_eq!((a.x, a.y), (51.5, 49.5));
        assert_eq!((a.vx, a.vy), (1.5, -0.5));
    }

    #[test]
    fn reflects_when_outside_and_heading_out() {
        let mut model = calm_model(vec![
            moving(0, -1.0, 50.0, -1.0, 0.0),
            moving(1, 101.0, 50.0, 1.0, 0.0),
            moving(2, 50.0, -2.0, 0.0, -1.0),
            moving(3, 50.0, 103.0, 0.0, 2.0),
        ]);
        model.step();
        let a: Vec<&Agent> = model.agents().iter().map(|k| &k.agent).collect();
        assert_eq!((a[0].x, a[0].vx), (0.0, 1.0));
        assert_eq!((a[1].x, a[1].vx), (100.0, -1.0));
        assert_eq!((a[2].y, a[2].vy), (-1.0, 1.0));
        assert_eq!((a[3].y, a[3].vy), (101.0, -2.0));
    }

    #[test]
    fn no_reflection_when_already_returning() {
        let mut model = calm_model(vec![moving(0, -1.0, 50.0, 0.5, 0.0)]);
        model.step();
        let a = &model.agents()[0].agent;
        assert_eq!((a.x, a.vx), (-0.5, 0.5));
    }

    #[test]
    fn jitter_is_bounded() {
        let params = DiffusionParams { jitter: 0.2, ..Default::default() };
        let agents = vec![moving(0, 50.0, 50.0, 0.0, 0.0)];
        let mut model = DiffusionModel::from_agents(agents, 100.0, params, SimRng::new(6)).unwrap();
        model.step();
        let a = &model.agents()[0].agent;
        assert!(a.vx.abs() <= 0.2 && a.vy.abs() <= 0.2);
        assert!(a.vx != 0.0 || a.vy != 0.0);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn knowledge_monotone_and_bounded() {
        let mut model =
            DiffusionModel::new(150, 300.0, DiffusionParams::default(), SimRng::new(21)).unwrap();
        let mut previous: Vec<f64> = model.agents().iter().map(|a| a.knowledge_level).collect();
        for t in 0..300 {
            model.step();
            for (a, &before) in model.agents().iter().zip(&previous) {
                assert!(a.knowledge_level >= before, "tick {t}: {} decreased", a.id());
                assert!(a.knowledge_level <= 1.0, "tick {t}: {} overshot", a.id());
            }
            previous = model.agents().iter().map(|a| a.knowledge_level).collect();
        }
    }

    #[test]
    fn knowledge_spreads() {
        let mut model =
            DiffusionModel::new(100, 500.0, DiffusionParams::default(), SimRng::new(42)).unwrap();
        let initial = model.stats().informed_fraction;
        assert!(initial > 0.0);

        model.run(500);

        let after = model.stats();
        assert!(
            after.informed_fraction > initial,
            "informed fraction {initial} -> {}",
            after.informed_fraction
        );
        assert_eq!(model.tick().0, 500);
    }

    #[test]
    fn same_seed_same_run() {
        let run = || {
            let mut m =
                DiffusionModel::new(60, 200.0, DiffusionParams::default(), SimRng::new(99))
                    .unwrap();
            m.run(200);
            m.agents().to_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn groups_track_knowledge() {
        let mut model =
            DiffusionModel::new(80, 150.0, DiffusionParams::default(), SimRng::new(5)).unwrap();
        model.run(50);
        let p = model.params().clone();
        for a in model.agents() {
            assert_eq!(a.agent.group, p.band(a.knowledge_level));
        }
    }

    #[test]
    fn stats_summarise_population() {
        let model = calm_model(vec![
            still_agent(0, 10.0, 10.0, 1.0),
            still_agent(1, 90.0, 90.0, 0.5),
            still_agent(2, 50.0, 50.0, 0.0),
            still_agent(3, 10.0, 90.0, 0.0),
        ]);
        let s = model.stats();
        assert_eq!(s.informed, 2);
        assert_eq!(s.saturated, 1);
        assert!((s.mean_knowledge - 0.375).abs() < 1e-12);
        assert!((s.informed_fraction - 0.5).abs() < 1e-12);
    }
}
