use kbandit::policies::{EpsilonGreedy, Policy};
use kbandit::{BanditState, Means, Simulator};
use rand::SeedableRng;

#[test]
fn test_epsilon_one_is_uniform() {
    // With epsilon = 1.0, should behave like a uniformly random policy
    let k = 5;
    let mut rng = rand::rngs::StdRng::seed_from_u64(123);
    let mut state = BanditState::new(k, 0, Means::Sequence, &mut rng).unwrap();

    // Skew the estimates so exploitation would be obvious
    state.update(3, 10.0);

    let policy = EpsilonGreedy::new(1.0);
    let n_samples = 10_000;
    let mut counts = vec![0usize; k];
    for _ in 0..n_samples {
        counts[policy.select(&state, &mut rng)] += 1;
    }

    // Chi-square against uniform, 4 degrees of freedom (p = 0.001 is ~18.5)
    let expected = n_samples as f64 / k as f64;
    let chi_square: f64 = counts
        .iter()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum();
    assert!(chi_square < 30.0, "chi-square {chi_square}, counts {counts:?}");
}

#[test]
fn test_epsilon_greedy_distribution() {
    // Statistical test of epsilon-greedy behavior
    let mut rng = rand::rngs::StdRng::seed_from_u64(123);
    let mut state = BanditState::new(3, 0, Means::Sequence, &mut rng).unwrap();

    // Train so arm 1 is clearly best
    for (arm, reward) in [(0, 0.2), (1, 0.9), (2, 0.1), (0, 0.3), (1, 0.8), (2, 0.2)] {
        state.update(arm, reward);
    }

    let policy = EpsilonGreedy::new(0.3);
    let n_samples = 10_000;
    let mut counts = [0usize; 3];
    for _ in 0..n_samples {
        counts[policy.select(&state, &mut rng)] += 1;
    }

    // Arm 1 should be selected approximately 70% + 10% = 80% of the time
    let best = counts[1] as f64 / n_samples as f64;
    assert!((best - 0.8).abs() < 0.02);

    // The others should each be selected approximately 10% of the time
    assert!((counts[0] as f64 / n_samples as f64 - 0.1).abs() < 0.02);
    assert!((counts[2] as f64 / n_samples as f64 - 0.1).abs() < 0.02);
}

#[test]
fn test_epsilon_greedy_finds_best_arm() {
    let mut sim = Simulator::epsilon_greedy(0.1, 3, 2000, vec![5.0, 0.0, -5.0], 42).unwrap();
    sim.run();

    let state = sim.state();
    let means = state.per_arm_mean_reward();
    assert!(means[0] > means[1] && means[0] > means[2], "estimates {means:?}");

    let pulls = state.per_arm_pull_count();
    assert!(pulls[0] > pulls[1] && pulls[0] > pulls[2], "pulls {pulls:?}");
    assert_eq!(pulls.iter().sum::<usize>(), 2000);

    // Mostly exploiting arm 0, so the running mean approaches its mean
    assert!(state.running_mean_reward() > 4.0);
}

#[test]
fn test_zero_epsilon_varies_first_arm() {
    // Pure greedy through epsilon-greedy starts on a random arm
    let first_arms: std::collections::HashSet<usize> = (0..64)
        .map(|seed| {
            let mut sim = Simulator::epsilon_greedy(0.0, 4, 1, Means::Sequence, seed).unwrap();
            sim.pull().arm
        })
        .collect();
    assert!(first_arms.len() > 1);
}
