//! The cart-pole vocabulary: four input variables, the force output and the
//! bundled rule base.

use crate::error::Result;
use crate::shape::{Shape, Triangle};
use crate::terms::{Key, OutputTerm, Terms};
use crate::variable::{Domain, FuzzySet, LinguisticVariable, Variable, Variables};

/// The rule base used when no other is configured
pub const DEFAULT_RULES: &str = include_str!("../rules/cartpole.fcl");

/// Name of the output variable rules assign to
pub const FORCE: &str = "force";

#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd)]
pub enum Force {
    LeftFast,
    LeftSlow,
    Stop,
    RightSlow,
    RightFast,
}

impl OutputTerm for Force {
    const ALL: &'static [Self] = &[
        Force::LeftFast,
        Force::LeftSlow,
        Force::Stop,
        Force::RightSlow,
        Force::RightFast,
    ];

    fn name(self) -> &'static str {
        match self {
            Force::LeftFast => "left_fast",
            Force::LeftSlow => "left_slow",
            Force::Stop => "stop",
            Force::RightSlow => "right_slow",
            Force::RightFast => "right_fast",
        }
    }
}

pub fn force_terms() -> Terms<Force> {
    let mut terms = Terms::new(FORCE);

    terms.insert(Force::LeftFast, Triangle::new(-100., -80., -60.));
    terms.insert(Force::LeftSlow, Triangle::new(-80., -60., 0.));
    terms.insert(Force::Stop, Triangle::new(-60., 0., 60.));
    terms.insert(Force::RightSlow, Triangle::new(0., 60., 80.));
    terms.insert(Force::RightFast, Triangle::new(60., 80., 100.));

    terms
}

fn variable(name: &str, domain: Domain, sets: Vec<(&str, Shape)>) -> Result<LinguisticVariable> {
    sets.into_iter()
        .try_fold(LinguisticVariable::new(name, domain), |variable, (set, shape)| {
            variable.with_set(FuzzySet::new(set, shape))
        })
}

/// Pole angular velocity in degrees per second
pub fn pole_angular_velocity() -> Result<LinguisticVariable> {
    variable("pv", Domain::Saturating { min: -200., max: 200. }, vec![
        ("cw_fast", Shape::shoulder("cw_fast", -200., -100.)?),
        ("cw_slow", Shape::triangle("cw_slow", -200., -100., 0.)?),
        ("stop", Shape::triangle("stop", -100., 0., 100.)?),
        ("ccw_slow", Shape::triangle("ccw_slow", 0., 100., 200.)?),
        ("ccw_fast", Shape::shoulder("ccw_fast", 200., 100.)?),
    ])
}

/// Pole angle in degrees. Ten 60° triangles: five around upright (90°) and
/// five around hanging (270°).
pub fn pole_angle() -> Result<LinguisticVariable> {
    let names = [
        "up_more_right",
        "up_right",
        "up",
        "up_left",
        "up_more_left",
        "down_more_left",
        "down_left",
        "down",
        "down_right",
        "down_more_right",
    ];
    let starts = [0., 30., 60., 90., 120., 180., 210., 240., 270., 300.];
    let mut sets = Vec::with_capacity(names.len());

    for (name, start) in names.into_iter().zip(starts) {
        sets.push((name, Shape::triangle(name, start, start + 30., start + 60.)?));
    }

    variable("pa", Domain::Circular { period: 360. }, sets)
}

/// Cart position
pub fn cart_position() -> Result<LinguisticVariable> {
    variable("cp", Domain::Saturating { min: -10., max: 10. }, vec![
        ("left_far", Shape::shoulder("left_far", -10., -5.)?),
        ("left_near", Shape::trapezoid("left_near", -10., -5., -2.5, 0.)?),
        ("stop", Shape::triangle("stop", -2.5, 0., 2.5)?),
        ("right_near", Shape::trapezoid("right_near", 0., 2.5, 5., 10.)?),
        ("right_far", Shape::shoulder("right_far", 10., 5.)?),
    ])
}

/// Cart velocity
pub fn cart_velocity() -> Result<LinguisticVariable> {
    variable("cv", Domain::Saturating { min: -5., max: 5. }, vec![
        ("left_fast", Shape::shoulder("left_fast", -5., -2.5)?),
        ("left_slow", Shape::trapezoid("left_slow", -5., -2.5, -1., 0.)?),
        ("stop", Shape::triangle("stop", -1., 0., 1.)?),
        ("right_slow", Shape::trapezoid("right_slow", 0., 1., 2.5, 5.)?),
        ("right_fast", Shape::shoulder("right_fast", 5., 2.5)?),
    ])
}

/// Handles to the four cart-pole inputs
#[derive(Clone, Copy, Debug)]
pub struct InputVariables {
    pub pv: Variable,
    pub pa: Variable,
    pub cp: Variable,
    pub cv: Variable,
}

pub fn register(vars: &mut Variables) -> Result<InputVariables> {
    Ok(InputVariables {
        pv: vars.add(pole_angular_velocity()?)?,
        pa: vars.add(pole_angle()?)?,
        cp: vars.add(cart_position()?)?,
        cv: vars.add(cart_velocity()?)?,
    })
}
