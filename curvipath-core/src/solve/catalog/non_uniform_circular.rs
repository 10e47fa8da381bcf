use crate::{
    quantity::Symbol::{self, *},
    solve::candidate::{Candidate, div, sqrt},
};

pub(super) const UNKNOWNS: &[Symbol] = &[
    Time,
    AngularAcceleration,
    FinalAngularVelocity,
    InitialAngularVelocity,
    Angle,
    TangentialAcceleration,
    CentripetalAcceleration,
    TotalAcceleration,
    Radius,
];

pub(super) fn candidates(unknown: Symbol) -> &'static [Candidate] {
    match unknown {
        Time => TIME,
        AngularAcceleration => ANGULAR_ACCELERATION,
        FinalAngularVelocity => FINAL_ANGULAR_VELOCITY,
        InitialAngularVelocity => INITIAL_ANGULAR_VELOCITY,
        Angle => ANGLE,
        TangentialAcceleration => TANGENTIAL_ACCELERATION,
        CentripetalAcceleration => CENTRIPETAL_ACCELERATION,
        TotalAcceleration => TOTAL_ACCELERATION,
        Radius => RADIUS,
        _ => &[],
    }
}

const TIME: &[Candidate] = &[Candidate {
    requires: &[FinalAngularVelocity, InitialAngularVelocity, AngularAcceleration],
    guard: None,
    compute: |i| {
        div(
            i.get(FinalAngularVelocity) - i.get(InitialAngularVelocity),
            i.get(AngularAcceleration),
        )
    },
    template: "t = (ω_f - ω_i) / α = ({ω_f} - {ω_i}) / {alpha} = {result} s",
}];

const ANGULAR_ACCELERATION: &[Candidate] = &[
    Candidate {
        requires: &[FinalAngularVelocity, InitialAngularVelocity, Time],
        guard: None,
        compute: |i| {
            div(
                i.get(FinalAngularVelocity) - i.get(InitialAngularVelocity),
                i.get(Time),
            )
        },
        template: "α = (ω_f - ω_i) / t = ({ω_f} - {ω_i}) / {t} = {result} rad/s²",
    },
    Candidate {
        requires: &[Angle, InitialAngularVelocity, Time],
        guard: None,
        compute: |i| {
            let t = i.get(Time);
            div(2.0 * (i.get(Angle) - i.get(InitialAngularVelocity) * t), t.powi(2))
        },
        template: "α = 2(θ - ω_i·t) / t² = 2({θ} - {ω_i}·{t}) / {t}² = {result} rad/s²",
    },
    Candidate {
        requires: &[FinalAngularVelocity, InitialAngularVelocity, Angle],
        guard: None,
        compute: |i| {
            div(
                i.get(FinalAngularVelocity).powi(2) - i.get(InitialAngularVelocity).powi(2),
                2.0 * i.get(Angle),
            )
        },
        template: "α = (ω_f² - ω_i²) / (2θ) = ({ω_f}² - {ω_i}²) / (2 · {θ}) = {result} rad/s²",
    },
    Candidate {
        requires: &[TangentialAcceleration, Radius],
        guard: None,
        compute: |i| div(i.get(TangentialAcceleration), i.get(Radius)),
        template: "α = a_t / r = {a_t} / {r} = {result} rad/s²",
    },
];

const FINAL_ANGULAR_VELOCITY: &[Candidate] = &[
    Candidate {
        requires: &[InitialAngularVelocity, AngularAcceleration, Time],
        guard: None,
        compute: |i| {
            Ok(i.get(InitialAngularVelocity) + i.get(AngularAcceleration) * i.get(Time))
        },
        template: "ω_f = ω_i + αt = {ω_i} + {alpha}·{t} = {result} rad/s",
    },
    Candidate {
        requires: &[InitialAngularVelocity, AngularAcceleration, Angle],
        guard: None,
        compute: |i| {
            sqrt(
                i.get(InitialAngularVelocity).powi(2)
                    + 2.0 * i.get(AngularAcceleration) * i.get(Angle),
            )
        },
        template: "ω_f = √(ω_i² + 2αθ) = √({ω_i}² + 2·{alpha}·{θ}) = {result} rad/s",
    },
];

const INITIAL_ANGULAR_VELOCITY: &[Candidate] = &[
    Candidate {
        requires: &[FinalAngularVelocity, AngularAcceleration, Time],
        guard: None,
        compute: |i| Ok(i.get(FinalAngularVelocity) - i.get(AngularAcceleration) * i.get(Time)),
        template: "ω_i = ω_f - αt = {ω_f} - {alpha}·{t} = {result} rad/s",
    },
    Candidate {
        requires: &[FinalAngularVelocity, AngularAcceleration, Angle],
        guard: None,
        compute: |i| {
            sqrt(
                i.get(FinalAngularVelocity).powi(2)
                    - 2.0 * i.get(AngularAcceleration) * i.get(Angle),
            )
        },
        template: "ω_i = √(ω_f² - 2αθ) = √({ω_f}² - 2·{alpha}·{θ}) = {result} rad/s",
    },
];

const ANGLE: &[Candidate] = &[
    Candidate {
        requires: &[InitialAngularVelocity, AngularAcceleration, Time],
        guard: None,
        compute: |i| {
            let t = i.get(Time);
            Ok(i.get(InitialAngularVelocity) * t + 0.5 * i.get(AngularAcceleration) * t.powi(2))
        },
        template: "θ = ω_i·t + ½·α·t² = {ω_i}·{t} + 0.5·{alpha}·{t}² = {result} rad",
    },
    Candidate {
        requires: &[FinalAngularVelocity, InitialAngularVelocity, AngularAcceleration],
        guard: None,
        compute: |i| {
            div(
                i.get(FinalAngularVelocity).powi(2) - i.get(InitialAngularVelocity).powi(2),
                2.0 * i.get(AngularAcceleration),
            )
        },
        template: "θ = (ω_f² - ω_i²) / (2α) = ({ω_f}² - {ω_i}²) / (2·{alpha}) = {result} rad",
    },
];

const TANGENTIAL_ACCELERATION: &[Candidate] = &[Candidate {
    requires: &[AngularAcceleration, Radius],
    guard: None,
    compute: |i| Ok(i.get(AngularAcceleration) * i.get(Radius)),
    template: "a_t = αr = {alpha}·{r} = {result} m/s²",
}];

const CENTRIPETAL_ACCELERATION: &[Candidate] = &[
    Candidate {
        requires: &[FinalAngularVelocity, Radius],
        guard: None,
        compute: |i| Ok(i.get(FinalAngularVelocity).powi(2) * i.get(Radius)),
        template: "a_c = ω_f²r = {ω_f}²·{r} = {result} m/s²",
    },
    Candidate {
        requires: &[Speed, Radius],
        guard: None,
        compute: |i| div(i.get(Speed).powi(2), i.get(Radius)),
        template: "a_c = v² / r = {v}² / {r} = {result} m/s²",
    },
];

const TOTAL_ACCELERATION: &[Candidate] = &[Candidate {
    requires: &[TangentialAcceleration, CentripetalAcceleration],
    guard: None,
    compute: |i| Ok(i.get(TangentialAcceleration).hypot(i.get(CentripetalAcceleration))),
    template: "a = √(a_t² + a_c²) = √({a_t}² + {a_c}²) = {result} m/s²",
}];

const RADIUS: &[Candidate] = &[
    Candidate {
        requires: &[Speed, CentripetalAcceleration],
        guard: None,
        compute: |i| div(i.get(Speed).powi(2), i.get(CentripetalAcceleration)),
        template: "r = v² / a_c = {v}² / {a_c} = {result} m",
    },
    Candidate {
        requires: &[TangentialAcceleration, AngularAcceleration],
        guard: None,
        compute: |i| div(i.get(TangentialAcceleration), i.get(AngularAcceleration)),
        template: "r = a_t / α = {a_t} / {alpha} = {result} m",
    },
];
