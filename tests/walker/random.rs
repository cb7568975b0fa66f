use std::collections::HashSet;

use hyperwalk::space::Point;
use hyperwalk::walker::{HyperSpaceIterator, RandomSampler, RandomSamplerBuilder, SpaceWalker};
use hyperwalk::{Error, Result};

use crate::common::{GlmParams, glm_factory, glm_space, index_factory, index_space};

fn run(sampler: &RandomSampler<impl hyperwalk::builder::BuilderFactory>, n: usize) -> Vec<Point> {
    let mut it = sampler.iterator();
    (0..n)
        .map(|_| {
            it.next_configuration(None).unwrap();
            it.current_point().unwrap().clone()
        })
        .collect()
}

#[test]
fn test_random_sampler_reproducibility() {
    let a = RandomSampler::with_seed(2024, Vec::new(), index_space(&[6, 5, 4]), index_factory());
    let b = RandomSampler::with_seed(2024, Vec::new(), index_space(&[6, 5, 4]), index_factory());
    assert_eq!(run(&a, 50), run(&b, 50));
}

#[test]
fn test_random_sampler_different_seeds_differ() {
    let a = RandomSampler::with_seed(1, Vec::new(), index_space(&[10, 10, 10]), index_factory());
    let b = RandomSampler::with_seed(2, Vec::new(), index_space(&[10, 10, 10]), index_factory());
    assert_ne!(run(&a, 20), run(&b, 20));
}

#[test]
fn test_random_sampler_no_repeats_in_partial_run() {
    let sampler = RandomSampler::with_seed(7, Vec::new(), index_space(&[8, 8]), index_factory());
    let points = run(&sampler, 40);
    let unique: HashSet<&Point> = points.iter().collect();
    assert_eq!(unique.len(), 40);
}

#[test]
fn test_random_sampler_full_run_is_permutation() {
    let sampler = RandomSampler::with_seed(31, Vec::new(), index_space(&[4, 3, 5]), index_factory());
    let mut it = sampler.iterator();
    let mut configs = Vec::new();
    while it.has_next(None) {
        configs.push(it.next_configuration(None).unwrap());
    }
    assert_eq!(configs.len(), sampler.size());
    assert!(!it.has_next(None));

    configs.sort();
    let mut expected = Vec::new();
    for i in 0..4 {
        for j in 0..3 {
            for k in 0..5 {
                expected.push(vec![i, j, k]);
            }
        }
    }
    assert_eq!(configs, expected);

    assert!(matches!(
        it.next_configuration(None),
        Err(Error::SamplingExhausted { emitted: 60, size: 60 })
    ));
}

#[test]
fn test_random_sampler_values_round_trip() {
    let sampler = RandomSampler::with_seed(5, GlmParams::default(), glm_space(), glm_factory());
    let mut it = sampler.iterator();
    for _ in 0..10 {
        let params = it.next_configuration(None).unwrap();
        let point = it.current_point().unwrap().clone();
        let raw = it.current_raw_values().unwrap();
        assert_eq!(raw, sampler.space().values_at(&point).unwrap());
        for (name, value) in raw.iter() {
            assert_eq!(&params.field(name), value);
        }
    }
}

#[test]
fn test_random_sampler_large_space_partial_run() {
    // 10^6 points: only the emitted ones are tracked.
    let sampler = RandomSampler::with_seed(9, Vec::new(), index_space(&[10; 6]), index_factory());
    let mut it = sampler.iterator();
    for _ in 0..1000 {
        it.next_configuration(None).unwrap();
    }
    assert_eq!(it.emitted(), 1000);
    assert!(it.has_next(None));
}

#[test]
fn test_random_sampler_max_points() {
    let sampler = RandomSamplerBuilder::new()
        .seed(12)
        .max_points(7)
        .build(Vec::new(), index_space(&[5, 5]), index_factory());
    let configs: Vec<Vec<usize>> = sampler.configurations().collect::<Result<_>>().unwrap();
    assert_eq!(configs.len(), 7);
    assert_eq!(sampler.size(), 25);
}

#[test]
fn test_random_sampler_retry_limit_ends_configurations() {
    let sampler = RandomSamplerBuilder::new()
        .max_retries(0)
        .exhaustive_fallback(false)
        .build(Vec::new(), index_space(&[2]), index_factory());
    let items: Vec<Result<Vec<usize>>> = sampler.configurations().take(100).collect();
    assert_eq!(items.len(), 1);
    assert!(matches!(
        items[0],
        Err(Error::RetryLimitExceeded { attempts: 0 })
    ));
    assert_eq!(sampler.configurations().count(), 1);
}

#[test]
fn test_random_sampler_tight_retry_budget_still_completes() {
    let sampler = RandomSamplerBuilder::new()
        .seed(4)
        .max_retries(1)
        .build(Vec::new(), index_space(&[7, 7]), index_factory());
    let configs: Vec<Vec<usize>> = sampler.configurations().collect::<Result<_>>().unwrap();
    let unique: HashSet<Vec<usize>> = configs.iter().cloned().collect();
    assert_eq!(configs.len(), 49);
    assert_eq!(unique.len(), 49);
}
