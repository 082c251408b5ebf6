use approx::assert_relative_eq;
use ivp_euler::prelude::*;

mod common;
use common::{Decay, Growth, SHO, accepted, euler};

#[test]
fn default_step_size() {
    let stepper = euler(&Growth, 0.0, &[1.0], 100.0, None);
    assert_eq!(stepper.h(), 1.0);
    let stepper = euler(&Growth, 0.0, &[1.0], 10.0, None);
    assert_eq!(stepper.h(), 0.1);
}

#[test]
fn exponential_growth_single_step() {
    let mut stepper = euler(&Growth, 0.0, &[1.0], 1.0, Some(0.1));
    let outcome = stepper.step();
    assert!(outcome.success());
    assert_eq!(outcome.message(), None);
    assert_eq!(stepper.t(), 0.1);
    assert_eq!(stepper.y(), &[1.1]);
}

#[test]
fn clamps_to_bound_with_start_derivative() {
    let mut stepper = euler(&Growth, 0.0, &[1.0], 0.05, Some(0.1));
    let step = accepted(stepper.step());
    assert_eq!(step.t_new, 0.05);
    assert_eq!(stepper.t(), 0.05);
    assert_eq!(stepper.y(), &[1.0 + 0.05 * 1.0]);
    assert_ne!(stepper.y(), &[1.0 + 0.1 * 1.0]);
    assert_eq!(stepper.nfev(), 1);
}

#[test]
fn one_rhs_evaluation_per_step() {
    let mut stepper = euler(&SHO, 0.0, &[1.0, 0.0], 1.0, Some(0.25));
    for n in 1..=4 {
        assert!(stepper.step().success());
        assert_eq!(stepper.nfev(), n);
    }
    assert_eq!(stepper.t(), 1.0);
}

#[test]
fn steps_always_succeed() {
    let mut stepper = euler(&Growth, 0.0, &[1.0], 1.0e4, Some(1.0));
    for _ in 0..1100 {
        let outcome = stepper.step();
        assert!(outcome.success());
        assert!(outcome.message().is_none());
    }
    // Blow-up propagates silently
    assert!(stepper.y()[0].is_infinite());
}

#[test]
fn step_result_tracks_previous_state() {
    let mut stepper = euler(&Decay, 0.0, &[2.0, -4.0], 1.0, Some(0.5));
    let first = accepted(stepper.step());
    let second = accepted(stepper.step());
    assert_eq!(second.t_old, first.t_new);
    assert_eq!(second.y_old, first.y_new);
    assert!(second.t_old < second.t_new);
    assert_eq!(second.h(), 0.5);
    assert_eq!(second.y_new, stepper.y());
}

#[test]
fn dense_output_endpoints_and_midpoint() {
    let mut stepper = euler(&SHO, 0.0, &[1.0, 0.5], 2.0, Some(0.3));
    for _ in 0..3 {
        let step = accepted(stepper.step());
        let interp = stepper.dense_output(&step);

        assert_eq!(interp.evaluate(step.t_old), step.y_old);

        let end = interp.evaluate(step.t_new);
        let mid = interp.evaluate(0.5 * (step.t_old + step.t_new));
        for i in 0..2 {
            assert_relative_eq!(end[i], step.y_new[i], epsilon = 1e-15);
            assert_relative_eq!(mid[i], 0.5 * (step.y_old[i] + step.y_new[i]), epsilon = 1e-15);
        }
    }
}

#[test]
fn interpolant_is_independent_of_stepper() {
    let mut stepper = euler(&Growth, 0.0, &[1.0], 1.0, Some(0.1));
    let step = accepted(stepper.step());
    let interp = stepper.dense_output(&step);
    stepper.step();
    assert_eq!(interp.evaluate(0.1), vec![1.1]);
    assert_eq!(interp.t_max(), 0.1);
}
