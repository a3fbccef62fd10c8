//! Tests for construction error handling

use kbandit::prelude::*;
use rand::SeedableRng;

#[test]
fn test_means_length_must_match_arms() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let result = BanditState::new(3, 10, Means::from(vec![1.0, 2.0]), &mut rng);
    assert!(matches!(
        result,
        Err(ConfigError::MeansLengthMismatch {
            expected: 3,
            got: 2
        })
    ));

    // Same check through the convenience constructors
    let result = Simulator::greedy(3, 10, vec![1.0, 2.0], 42);
    assert!(result.is_err());

    // Check the error message
    if let Err(e) = result {
        assert!(e.to_string().contains("expected 3, got 2"));
    }
}

#[test]
fn test_unknown_means_mode() {
    let result = "uniform".parse::<Means>();
    assert_eq!(
        result,
        Err(ConfigError::UnknownMeansMode {
            mode: "uniform".to_string()
        })
    );

    // Modes are case-sensitive
    assert!("Sequence".parse::<Means>().is_err());
    assert!("".parse::<Means>().is_err());
}

#[test]
fn test_zero_arms_rejected() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    assert_eq!(
        BanditState::new(0, 10, Means::Random, &mut rng),
        Err(ConfigError::NoArms)
    );
    assert!(matches!(
        Simulator::epsilon_greedy(0.1, 0, 10, Means::Sequence, 42),
        Err(ConfigError::NoArms)
    ));
}

#[test]
fn test_zero_iterations_allowed() {
    let mut sim = Simulator::decaying_epsilon_greedy(3, 0, Means::Random, 42).unwrap();
    sim.run();
    assert!(sim.reward_history().is_empty());
    assert_eq!(sim.state().pull_count(), 0);
}

#[test]
fn test_experiment_without_policies() {
    let result = Experiment::new(ExperimentConfig::default()).run();
    assert!(matches!(result, Err(ConfigError::NoPolicies)));
}
