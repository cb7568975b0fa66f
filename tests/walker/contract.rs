use hyperwalk::builder::BuilderFactory;
use hyperwalk::space::{HyperParameterSpace, Point};
use hyperwalk::walker::{AnyWalker, Evaluation, HyperSpaceIterator, SearchCriteria, SpaceWalker};
use hyperwalk::{Error, ParamValue};

use crate::common::{GlmParams, glm_factory, glm_space, index_factory, index_space};

fn strategies() -> [SearchCriteria; 2] {
    [SearchCriteria::Cartesian, SearchCriteria::random(77)]
}

fn walker(
    criteria: SearchCriteria,
    sizes: &[usize],
) -> AnyWalker<impl BuilderFactory<Config = Vec<usize>>> {
    criteria.into_walker(Vec::new(), index_space(sizes), index_factory())
}

#[test]
fn test_single_point_space_emits_once() {
    for criteria in strategies() {
        let w = walker(criteria, &[1]);
        let mut it = w.iterator();
        assert!(it.has_next(None));
        assert_eq!(it.next_configuration(None).unwrap(), vec![0]);
        assert!(!it.has_next(None), "{criteria:?}");
        let err = it.next_configuration(None).unwrap_err();
        assert!(err.is_exhausted(), "{criteria:?}: {err}");
    }
}

#[test]
fn test_has_next_predicts_next() {
    for criteria in strategies() {
        let w = walker(criteria, &[2, 3]);
        let mut it = w.iterator();
        for _ in 0..8 {
            let predicted = it.has_next(None);
            // Repeated probes do not change the answer.
            assert_eq!(it.has_next(None), predicted);
            assert_eq!(it.next_configuration(None).is_ok(), predicted, "{criteria:?}");
        }
    }
}

#[test]
fn test_current_raw_values_match_built_configuration() {
    for criteria in strategies() {
        let w = walker(criteria, &[3, 2, 2]);
        let mut it = w.iterator();
        assert!(matches!(it.current_raw_values(), Err(Error::NotStarted)));
        while it.has_next(None) {
            let config = it.next_configuration(None).unwrap();
            let raw: Vec<usize> = it
                .current_raw_values()
                .unwrap()
                .values()
                .filter_map(ParamValue::as_i64)
                .map(|v| v as usize)
                .collect();
            assert_eq!(raw, config);
            assert_eq!(it.current_point().unwrap(), &Point::new(config));
        }
    }
}

#[test]
fn test_previous_evaluation_is_accepted_and_ignored() {
    for criteria in strategies() {
        let w = walker(criteria, &[3, 3]);
        let mut plain = w.iterator();
        let mut fed = w.iterator();
        let mut previous: Option<Evaluation> = None;
        while plain.has_next(None) {
            assert!(fed.has_next(previous.as_ref()));
            let a = plain.next_configuration(None).unwrap();
            let b = fed.next_configuration(previous.as_ref()).unwrap();
            assert_eq!(a, b);
            previous = Some(Evaluation::new(fed.current_raw_values().unwrap(), Some(0.5)));
        }
        assert!(!fed.has_next(previous.as_ref()));
    }
}

#[test]
fn test_walker_accessors() {
    for criteria in strategies() {
        let w = criteria.into_walker(GlmParams::default(), glm_space(), glm_factory());
        assert_eq!(
            w.names(),
            &["alpha", "lambda", "standardize", "solver"]
        );
        assert_eq!(w.size(), 24);
        assert_eq!(w.base_configuration(), &GlmParams::default());
        assert_eq!(w.space(), &glm_space());
        let _ = w.builder_factory();
    }
}

#[test]
fn test_base_configuration_is_never_mutated() {
    for criteria in strategies() {
        let w = criteria.into_walker(GlmParams::default(), glm_space(), glm_factory());
        let visited = w.configurations().filter(Result::is_ok).count();
        assert_eq!(visited, 24);
        assert_eq!(w.base_configuration(), &GlmParams::default());
    }
}

#[test]
fn test_configurations_adapter_yields_builder_errors_and_continues() {
    let space = HyperParameterSpace::builder()
        .values("alpha", [0.1, 7.0, 0.9])
        .build()
        .unwrap();
    let w = SearchCriteria::Cartesian.into_walker(GlmParams::default(), space, glm_factory());
    let results: Vec<_> = w.configurations().collect();
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(Error::InvalidValue { .. })));
    assert_eq!(results[2].as_ref().unwrap().alpha, 0.9);
}
