use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use xornet::{train_loop, train_step, Dataset, Network, Sgd, TrainConfig, DEFAULT_SEED};

fn default_run() -> (Network, xornet::TrainReport) {
    let mut network = Network::seeded(DEFAULT_SEED);
    let report = train_loop(&mut network, &Dataset::xor(), &Sgd::default(), &TrainConfig::default());
    (network, report)
}

#[test]
fn default_run_learns_xor() {
    let (_, report) = default_run();
    let targets = [0.0, 1.0, 1.0, 0.0];

    assert_eq!(report.output.shape(), (4, 1));
    for (row, target) in report.output.data.iter().zip(targets) {
        assert!((row[0] - target).abs() < 0.05, "output {} too far from {target}", row[0]);
    }

    assert_abs_diff_eq!(report.output.data[0][0], 0.002_605_724_6, epsilon = 1e-6);
    assert_abs_diff_eq!(report.output.data[1][0], 0.996_722_086_9, epsilon = 1e-6);
    assert_abs_diff_eq!(report.output.data[2][0], 0.997_017_107_9, epsilon = 1e-6);
    assert_abs_diff_eq!(report.output.data[3][0], 0.003_867_593_1, epsilon = 1e-6);
}

#[test]
fn reported_error_falls_over_the_run() {
    let (_, report) = default_run();
    let iterations: Vec<usize> = report.checkpoints.iter().map(|c| c.iteration).collect();
    assert_eq!(iterations, vec![0, 10_000, 20_000, 30_000, 40_000, 50_000]);

    let errors: Vec<f64> = report.checkpoints.iter().map(|c| c.mean_abs_error).collect();
    assert!(errors[0] > errors[5]);
    assert!(errors.windows(2).all(|w| w[0] > w[1]), "errors: {errors:?}");

    assert_abs_diff_eq!(errors[0], 0.496_410_031_9, epsilon = 1e-8);
    assert_abs_diff_eq!(errors[1], 0.008_584_525_7, epsilon = 1e-7);
    assert_abs_diff_eq!(errors[5], 0.003_510_122_6, epsilon = 1e-7);
}

#[test]
fn identical_seeds_give_identical_runs() {
    let (net_a, report_a) = default_run();
    let (net_b, report_b) = default_run();
    assert_eq!(net_a, net_b);
    assert_eq!(report_a, report_b);

    let data = Dataset::xor();
    let config = TrainConfig::new(2_000, 500);
    let mut c = Network::new(&mut StdRng::seed_from_u64(99));
    let mut d = Network::new(&mut StdRng::seed_from_u64(99));
    assert_eq!(
        train_loop(&mut c, &data, &Sgd::default(), &config),
        train_loop(&mut d, &data, &Sgd::default(), &config)
    );
    assert_eq!(c, d);
}

#[test]
fn shapes_and_ranges_hold_every_iteration() {
    let data = Dataset::xor();
    let mut network = Network::seeded(DEFAULT_SEED);
    let optimizer = Sgd::default();

    for _ in 0..5_000 {
        let step = train_step(&mut network, &data, &optimizer);
        assert_eq!(step.activations.hidden.shape(), (4, 4));
        assert_eq!(step.activations.output.shape(), (4, 1));
        assert_eq!(network.syn0.shape(), (3, 4));
        assert_eq!(network.syn1.shape(), (4, 1));
        assert!(step.activations.hidden.iter().all(|&v| v > 0.0 && v < 1.0));
        assert!(step.activations.output.iter().all(|&v| v > 0.0 && v < 1.0));
    }
}

#[test]
fn trained_network_predicts_single_rows() {
    let (network, _) = default_run();
    assert!(network.predict(&[0.0, 0.0, 1.0]).unwrap() < 0.05);
    assert!(network.predict(&[0.0, 1.0, 1.0]).unwrap() > 0.95);
    assert!(network.predict(&[1.0, 0.0, 1.0]).unwrap() > 0.95);
    assert!(network.predict(&[1.0, 1.0, 1.0]).unwrap() < 0.05);
}
