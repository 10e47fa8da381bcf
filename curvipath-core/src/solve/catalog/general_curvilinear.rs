use crate::{
    quantity::Symbol::{self, *},
    solve::{
        Config,
        candidate::{Candidate, Inputs, div, sqrt},
    },
};

pub(super) const UNKNOWNS: &[Symbol] = &[
    Speed,
    CentripetalAcceleration,
    CurvatureRadius,
    TangentialAcceleration,
    TotalAcceleration,
];

pub(super) fn candidates(unknown: Symbol) -> &'static [Candidate] {
    match unknown {
        Speed => SPEED,
        CentripetalAcceleration => CENTRIPETAL_ACCELERATION,
        CurvatureRadius => CURVATURE_RADIUS,
        TangentialAcceleration => TANGENTIAL_ACCELERATION,
        TotalAcceleration => TOTAL_ACCELERATION,
        _ => &[],
    }
}

/// The total acceleration must strictly exceed the tangential leg in
/// magnitude. A braking object has a negative tangential component.
fn exceeds_tangential(i: &Inputs<'_>, _: &Config) -> bool {
    i.get(TotalAcceleration).abs() > i.get(TangentialAcceleration).abs()
}

/// The total acceleration must strictly exceed the centripetal leg in
/// magnitude.
fn exceeds_centripetal(i: &Inputs<'_>, _: &Config) -> bool {
    i.get(TotalAcceleration).abs() > i.get(CentripetalAcceleration).abs()
}

const SPEED: &[Candidate] = &[Candidate {
    requires: &[CentripetalAcceleration, CurvatureRadius],
    guard: None,
    compute: |i| sqrt(i.get(CentripetalAcceleration) * i.get(CurvatureRadius)),
    template: "v = √(a_c · ρ) = √({a_c} · {rho}) = {result} m/s",
}];

const CENTRIPETAL_ACCELERATION: &[Candidate] = &[
    Candidate {
        requires: &[Speed, CurvatureRadius],
        guard: None,
        compute: |i| div(i.get(Speed).powi(2), i.get(CurvatureRadius)),
        template: "a_c = v² / ρ = {v}² / {rho} = {result} m/s²",
    },
    Candidate {
        requires: &[TotalAcceleration, TangentialAcceleration],
        guard: Some(exceeds_tangential),
        compute: |i| sqrt(i.get(TotalAcceleration).powi(2) - i.get(TangentialAcceleration).powi(2)),
        template: "a_c = √(a² - a_t²) = √({a}² - {a_t}²) = {result} m/s²",
    },
];

const CURVATURE_RADIUS: &[Candidate] = &[Candidate {
    requires: &[Speed, CentripetalAcceleration],
    guard: None,
    compute: |i| div(i.get(Speed).powi(2), i.get(CentripetalAcceleration)),
    template: "ρ = v² / a_c = {v}² / {a_c} = {result} m",
}];

const TANGENTIAL_ACCELERATION: &[Candidate] = &[Candidate {
    requires: &[TotalAcceleration, CentripetalAcceleration],
    guard: Some(exceeds_centripetal),
    compute: |i| sqrt(i.get(TotalAcceleration).powi(2) - i.get(CentripetalAcceleration).powi(2)),
    template: "a_t = √(a² - a_c²) = √({a}² - {a_c}²) = {result} m/s²",
}];

const TOTAL_ACCELERATION: &[Candidate] = &[Candidate {
    requires: &[TangentialAcceleration, CentripetalAcceleration],
    guard: None,
    compute: |i| Ok(i.get(TangentialAcceleration).hypot(i.get(CentripetalAcceleration))),
    template: "a = √(a_t² + a_c²) = √({a_t}² + {a_c}²) = {result} m/s²",
}];
