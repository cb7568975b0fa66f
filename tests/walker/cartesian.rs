use std::collections::HashSet;

use hyperwalk::walker::{CartesianEnumerator, HyperSpaceIterator, SpaceWalker};
use hyperwalk::{Error, Result};

use crate::common::{GlmParams, glm_factory, glm_space, index_factory, index_space};

#[test]
fn test_cartesian_order_dimension_zero_fastest() {
    let walker = CartesianEnumerator::new(Vec::new(), index_space(&[2, 3]), index_factory());
    let order: Vec<Vec<usize>> = walker.configurations().collect::<Result<_>>().unwrap();
    assert_eq!(
        order,
        vec![
            vec![0, 0],
            vec![1, 0],
            vec![0, 1],
            vec![1, 1],
            vec![0, 2],
            vec![1, 2],
        ]
    );
}

#[test]
fn test_cartesian_order_matches_nested_loops() {
    let walker = CartesianEnumerator::new(Vec::new(), index_space(&[3, 2, 4]), index_factory());
    let mut expected = Vec::new();
    for k in 0..4 {
        for j in 0..2 {
            for i in 0..3 {
                expected.push(vec![i, j, k]);
            }
        }
    }
    let order: Vec<Vec<usize>> = walker.configurations().collect::<Result<_>>().unwrap();
    assert_eq!(order, expected);
}

#[test]
fn test_cartesian_has_next_true_for_all_but_last() {
    let walker = CartesianEnumerator::new(Vec::new(), index_space(&[2, 2, 3]), index_factory());
    let mut it = walker.iterator();
    let size = walker.size();
    for call in 1..=size {
        assert!(it.has_next(None), "has_next false before call {call}");
        it.next_configuration(None).unwrap();
        assert_eq!(it.has_next(None), call < size);
    }
    assert!(matches!(
        it.next_configuration(None),
        Err(Error::ExhaustedSpace)
    ));
}

#[test]
fn test_cartesian_glm_grid_is_exhaustive() {
    let walker = CartesianEnumerator::new(GlmParams::default(), glm_space(), glm_factory());
    let mut it = walker.iterator();
    let mut points = HashSet::new();
    while it.has_next(None) {
        let params = it.next_configuration(None).unwrap();
        let raw = it.current_raw_values().unwrap();
        for (name, value) in raw.iter() {
            assert_eq!(&params.field(name), value);
        }
        points.insert(it.current_point().unwrap().clone());
        // Untouched fields come from the base configuration.
        assert_eq!(params.max_iterations, 100);
    }
    assert_eq!(points.len(), 24);
    assert_eq!(walker.base_configuration(), &GlmParams::default());
}

#[test]
fn test_cartesian_propagates_invalid_value() {
    let space = hyperwalk::space::HyperParameterSpace::builder()
        .values("alpha", [0.5, 2.0])
        .build()
        .unwrap();
    let walker = CartesianEnumerator::new(GlmParams::default(), space, glm_factory());
    let mut it = walker.iterator();

    assert!(it.next_configuration(None).is_ok());
    let err = it.next_configuration(None).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { ref name, .. } if name == "alpha"));

    // The rejected point still counts as visited.
    assert!(!it.has_next(None));
    assert_eq!(it.emitted(), 2);
}

#[test]
fn test_cartesian_unknown_dimension() {
    let space = hyperwalk::space::HyperParameterSpace::builder()
        .values("beta", [1.0])
        .build()
        .unwrap();
    let walker = CartesianEnumerator::new(GlmParams::default(), space, glm_factory());
    let err = walker.iterator().next_configuration(None).unwrap_err();
    assert!(matches!(err, Error::UnknownParameter(ref name) if name == "beta"));
}

#[test]
fn test_cartesian_empty_space_yields_base_once() {
    let space = hyperwalk::space::HyperParameterSpace::new(Vec::new()).unwrap();
    let walker = CartesianEnumerator::new(GlmParams::default(), space, glm_factory());
    let configs: Vec<GlmParams> = walker.configurations().collect::<Result<_>>().unwrap();
    assert_eq!(configs, vec![GlmParams::default()]);
}
