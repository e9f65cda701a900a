//! Unit tests for abm-agent.

#[cfg(test)]
mod agent_tests {
    use abm_core::{AgentId, Vec2};

    use crate::{Agent, KnowledgeAgent, centroid, mean_speed};

    #[test]
    fn kinematics_roundtrip() {
        let mut a = Agent::new(AgentId(0), Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), 1);
        assert_eq!(a.position(), Vec2::new(1.0, 2.0));
        assert_eq!(a.velocity(), Vec2::new(3.0, 4.0));
        assert_eq!(a.speed(), 5.0);

        a.set_kinematics(Vec2::new(-1.0, 0.5), Vec2::ZERO);
        assert_eq!((a.x, a.y, a.vx, a.vy), (-1.0, 0.5, 0.0, 0.0));
        assert_eq!(a.group, 1);
    }

    #[test]
    fn knowledge_flags() {
        let base = Agent::new(AgentId(3), Vec2::ZERO, Vec2::ZERO, 0);
        let naive = KnowledgeAgent::new(base.clone(), 0.0);
        let partial = KnowledgeAgent::new(base.clone(), 0.4);
        let full = KnowledgeAgent::new(base, 1.0);

        assert!(!naive.is_informed());
        assert!(partial.is_informed() && !partial.is_saturated());
        assert!(full.is_informed() && full.is_saturated());
        assert_eq!(full.id(), AgentId(3));
        assert!(full.connections.is_empty());
    }

    #[test]
    fn population_means() {
        let agents = vec![
            Agent::new(AgentId(0), Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0), 0),
            Agent::new(AgentId(1), Vec2::new(4.0, 2.0), Vec2::new(0.0, 1.0), 0),
        ];
        assert_eq!(centroid(&agents), Vec2::new(2.0, 1.0));
        assert_eq!(mean_speed(&agents), 3.0);
    }

    #[test]
    fn population_means_of_empty_slice() {
        assert_eq!(centroid(&[]), Vec2::ZERO);
        assert_eq!(mean_speed(&[]), 0.0);
    }
}

#[cfg(test)]
mod spawner_tests {
    use abm_core::{AgentId, Domain, SimRng};

    use crate::Spawner;

    fn domain() -> Domain {
        Domain::new(100.0).unwrap()
    }

    #[test]
    fn ids_are_sequential() {
        let agents = Spawner::new(20, domain()).spawn(&mut SimRng::new(1));
        for (i, a) in agents.iter().enumerate() {
            assert_eq!(a.id, AgentId(i as u32));
        }
    }

    #[test]
    fn respects_bounds() {
        let agents = Spawner::new(500, domain())
            .velocity_bound(2.0)
            .groups(3)
            .spawn(&mut SimRng::new(2));
        for a in &agents {
            assert!(domain().contains(a.position()));
            assert!(a.vx.abs() <= 2.0 && a.vy.abs() <= 2.0);
            assert!(a.group < 3);
        }
        // With 500 draws every group shows up.
        for g in 0..3 {
            assert!(agents.iter().any(|a| a.group == g));
        }
    }

    #[test]
    fn single_group_is_zero() {
        let agents = Spawner::new(50, domain()).groups(1).spawn(&mut SimRng::new(3));
        assert!(agents.iter().all(|a| a.group == 0));
    }

    #[test]
    fn same_seed_same_population() {
        let a = Spawner::new(30, domain()).groups(3).spawn(&mut SimRng::new(42));
        let b = Spawner::new(30, domain()).groups(3).spawn(&mut SimRng::new(42));
        assert_eq!(a, b);
    }
}
