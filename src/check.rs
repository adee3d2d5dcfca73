//! Algebraic identities of the vector operations, evaluated over sample vectors.

use std::f64::consts::FRAC_PI_2;

use thiserror::Error;
use vecmath::prelude::{
    add, angle, create_clamp, cross, dot, equal, mag, midpoint, multiply, negate, normalize,
    rotate_left, rotate_right, Vec3, ZERO,
};

const UNIT_TOLERANCE: f64 = 1e-9;

pub const SAMPLES: [Vec3; 6] = [
    Vec3::new(1.0, 2.0, 3.0),
    Vec3::new(4.0, 5.0, 6.0),
    Vec3::new(-6.0, 7.0, 0.2),
    Vec3::new(12.1, 234.1, -1234.5),
    Vec3::new(1e-3, -0.5, 0.0),
    ZERO,
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CheckError {
    #[error("{failed} of {total} checks failed (first: `{first}`)")]
    Failed {
        failed: usize,
        total: usize,
        first: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub name: &'static str,
    /// Counterexample, if the check failed.
    pub failure: Option<String>,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

struct Check {
    name: &'static str,
    run: fn(&[Vec3]) -> Option<String>,
}

const CHECKS: &[Check] = &[
    Check {
        name: "zero is the additive identity",
        run: add_identity,
    },
    Check {
        name: "rotate_left and rotate_right are inverses",
        run: rotations_invert,
    },
    Check {
        name: "cross is anti-commutative",
        run: cross_anticommutes,
    },
    Check {
        name: "dot is commutative",
        run: dot_commutes,
    },
    Check {
        name: "normalize yields unit length",
        run: normalize_unit_length,
    },
    Check {
        name: "reference values",
        run: reference_values,
    },
];

fn add_identity(samples: &[Vec3]) -> Option<String> {
    samples
        .iter()
        .find(|&&v| !equal(add(v, ZERO), v))
        .map(|v| format!("add({}, zero) != {}", v, v))
}

fn rotations_invert(samples: &[Vec3]) -> Option<String> {
    samples
        .iter()
        .find(|&&v| rotate_left(rotate_right(v)) != v || rotate_right(rotate_left(v)) != v)
        .map(|v| format!("rotation round trip changed {}", v))
}

fn cross_anticommutes(samples: &[Vec3]) -> Option<String> {
    pairs(samples)
        .find(|&(a, b)| cross(a, b) != negate(cross(b, a)))
        .map(|(a, b)| format!("cross({}, {}) != -cross({}, {})", a, b, b, a))
}

fn dot_commutes(samples: &[Vec3]) -> Option<String> {
    pairs(samples)
        .find(|&(a, b)| dot(a, b) != dot(b, a))
        .map(|(a, b)| format!("dot({}, {}) != dot({}, {})", a, b, b, a))
}

fn normalize_unit_length(samples: &[Vec3]) -> Option<String> {
    samples
        .iter()
        .filter(|&&v| mag(v) > 0.0)
        .map(|&v| (v, mag(normalize(v))))
        .find(|&(_, m)| (m - 1.0).abs() > UNIT_TOLERANCE)
        .map(|(v, m)| format!("mag(normalize({})) = {}", v, m))
}

fn pairs(samples: &[Vec3]) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
    samples
        .iter()
        .flat_map(move |&a| samples.iter().map(move |&b| (a, b)))
}

/// Fixed inputs with known results; ignores the sample set.
fn reference_values(_: &[Vec3]) -> Option<String> {
    let clamp = create_clamp(-1.0, 1.0);
    let right_angle: f64 = angle(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));

    let cases = [
        ("angle of orthogonal axes", (right_angle - FRAC_PI_2).abs() < UNIT_TOLERANCE),
        (
            "angle of a vector with itself",
            angle(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0)) == 0.0,
        ),
        (
            "angle against zero",
            angle(ZERO, Vec3::new(1.0, 0.0, 0.0)).is_nan(),
        ),
        (
            "cross product",
            cross(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0))
                == Vec3::new(-3.0, 6.0, -3.0),
        ),
        (
            "component-wise product",
            multiply(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0))
                == Vec3::new(4.0, 10.0, 18.0),
        ),
        (
            "midpoint",
            midpoint(Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0))
                == Vec3::new(1.0, 1.0, 0.0),
        ),
        (
            "clamp",
            clamp(5.0) == 1.0 && clamp(-5.0) == -1.0 && clamp(0.5) == 0.5,
        ),
        (
            "exact equality",
            equal(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0))
                && !equal(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0001)),
        ),
    ];

    cases
        .iter()
        .find(|(_, ok)| !ok)
        .map(|(case, _)| format!("{} does not match", case))
}

/// Evaluates every identity over `samples`.
pub fn run(samples: &[Vec3]) -> Vec<Outcome> {
    CHECKS
        .iter()
        .map(|check| Outcome {
            name: check.name,
            failure: (check.run)(samples),
        })
        .collect()
}

/// Returns the number of passed checks, or an error naming the first failure.
pub fn verify(outcomes: &[Outcome]) -> Result<usize, CheckError> {
    let mut failed = outcomes.iter().filter(|o| !o.passed());

    match failed.next() {
        None => Ok(outcomes.len()),
        Some(first) => Err(CheckError::Failed {
            failed: 1 + failed.count(),
            total: outcomes.len(),
            first: first.name,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_checks_pass_on_samples() {
        let outcomes = run(&SAMPLES);

        assert_eq!(outcomes.len(), CHECKS.len());
        for outcome in &outcomes {
            assert!(outcome.passed(), "{}: {:?}", outcome.name, outcome.failure);
        }
        assert_eq!(verify(&outcomes), Ok(CHECKS.len()));
    }

    #[test]
    fn verify_reports_first_failure() {
        let outcomes = vec![
            Outcome {
                name: "a",
                failure: None,
            },
            Outcome {
                name: "b",
                failure: Some("broken".to_owned()),
            },
            Outcome {
                name: "c",
                failure: Some("also broken".to_owned()),
            },
        ];

        assert_eq!(
            verify(&outcomes),
            Err(CheckError::Failed {
                failed: 2,
                total: 3,
                first: "b",
            })
        );
    }

    #[test]
    fn empty_sample_set_passes() {
        assert!(run(&[]).iter().all(Outcome::passed));
    }

    #[test]
    fn extreme_samples_satisfy_identities() {
        let samples = [
            Vec3::new(1e150, -1e150, 1e-150),
            Vec3::new(f64::MIN_POSITIVE, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];

        for outcome in &run(&samples) {
            assert!(outcome.passed(), "{}: {:?}", outcome.name, outcome.failure);
        }
    }

    #[test]
    fn nan_sample_breaks_identities() {
        let outcomes = run(&[Vec3::new(f64::NAN, 1.0, 2.0)]);

        match verify(&outcomes) {
            Err(CheckError::Failed { first, .. }) => {
                assert_eq!(first, "zero is the additive identity")
            }
            Ok(_) => panic!("NaN must not satisfy exact identities"),
        }
    }

    #[test]
    fn check_error_message() {
        let err = CheckError::Failed {
            failed: 2,
            total: 6,
            first: "dot is commutative",
        };

        assert_eq!(
            err.to_string(),
            "2 of 6 checks failed (first: `dot is commutative`)"
        );
    }
}
