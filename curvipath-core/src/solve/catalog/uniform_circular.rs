use std::f64::consts::TAU;

use crate::{
    quantity::Symbol::{self, *},
    solve::candidate::{Candidate, div},
};

pub(super) const UNKNOWNS: &[Symbol] = &[
    Time,
    AngularVelocity,
    Frequency,
    Period,
    Angle,
    Speed,
    Radius,
    CentripetalAcceleration,
    Revolutions,
];

pub(super) fn candidates(unknown: Symbol) -> &'static [Candidate] {
    match unknown {
        Time => TIME,
        AngularVelocity => ANGULAR_VELOCITY,
        Frequency => FREQUENCY,
        Period => PERIOD,
        Angle => ANGLE,
        Speed => SPEED,
        Radius => RADIUS,
        CentripetalAcceleration => CENTRIPETAL_ACCELERATION,
        Revolutions => REVOLUTIONS,
        _ => &[],
    }
}

const TIME: &[Candidate] = &[
    Candidate {
        requires: &[Angle, AngularVelocity],
        guard: None,
        compute: |i| div(i.get(Angle), i.get(AngularVelocity)),
        template: "t = θ / ω = {θ} / {ω} = {result} s",
    },
    Candidate {
        requires: &[Revolutions, AngularVelocity],
        guard: None,
        compute: |i| div(TAU * i.get(Revolutions), i.get(AngularVelocity)),
        template: "t = 2πN / ω = 2π · {N} / {ω} = {result} s",
    },
];

const ANGULAR_VELOCITY: &[Candidate] = &[
    Candidate {
        requires: &[Angle, Time],
        guard: None,
        compute: |i| div(i.get(Angle), i.get(Time)),
        template: "ω = θ / t = {θ} / {t} = {result} rad/s",
    },
    Candidate {
        requires: &[Frequency],
        guard: None,
        compute: |i| Ok(TAU * i.get(Frequency)),
        template: "ω = 2πf = 2π · {f} = {result} rad/s",
    },
    Candidate {
        requires: &[Period],
        guard: None,
        compute: |i| div(TAU, i.get(Period)),
        template: "ω = 2π / T = 2π / {T} = {result} rad/s",
    },
    Candidate {
        requires: &[Revolutions, Time],
        guard: None,
        compute: |i| div(TAU * i.get(Revolutions), i.get(Time)),
        template: "ω = 2πN / t = 2π · {N} / {t} = {result} rad/s",
    },
];

const FREQUENCY: &[Candidate] = &[
    Candidate {
        requires: &[Period],
        guard: None,
        compute: |i| div(1.0, i.get(Period)),
        template: "f = 1 / T = 1 / {T} = {result} Hz",
    },
    Candidate {
        requires: &[AngularVelocity],
        guard: None,
        compute: |i| Ok(i.get(AngularVelocity) / TAU),
        template: "f = ω / 2π = {ω} / 2π = {result} Hz",
    },
];

const PERIOD: &[Candidate] = &[
    Candidate {
        requires: &[Frequency],
        guard: None,
        compute: |i| div(1.0, i.get(Frequency)),
        template: "T = 1 / f = 1 / {f} = {result} s",
    },
    Candidate {
        requires: &[AngularVelocity],
        guard: None,
        compute: |i| div(TAU, i.get(AngularVelocity)),
        template: "T = 2π / ω = 2π / {ω} = {result} s",
    },
];

const ANGLE: &[Candidate] = &[
    Candidate {
        requires: &[AngularVelocity, Time],
        guard: None,
        compute: |i| Ok(i.get(AngularVelocity) * i.get(Time)),
        template: "θ = ωt = {ω} · {t} = {result} rad",
    },
    Candidate {
        requires: &[Revolutions],
        guard: None,
        compute: |i| Ok(TAU * i.get(Revolutions)),
        template: "θ = 2πN = 2π · {N} = {result} rad",
    },
];

const SPEED: &[Candidate] = &[
    Candidate {
        requires: &[AngularVelocity, Radius],
        guard: None,
        compute: |i| Ok(i.get(AngularVelocity) * i.get(Radius)),
        template: "v = ωr = {ω} · {r} = {result} m/s",
    },
    Candidate {
        requires: &[Radius, Period],
        guard: None,
        compute: |i| div(TAU * i.get(Radius), i.get(Period)),
        template: "v = 2πr / T = 2π · {r} / {T} = {result} m/s",
    },
    Candidate {
        requires: &[Radius, Frequency],
        guard: None,
        compute: |i| Ok(TAU * i.get(Radius) * i.get(Frequency)),
        template: "v = 2πrf = 2π · {r} · {f} = {result} m/s",
    },
];

const RADIUS: &[Candidate] = &[
    Candidate {
        requires: &[Speed, AngularVelocity],
        guard: None,
        compute: |i| div(i.get(Speed), i.get(AngularVelocity)),
        template: "r = v / ω = {v} / {ω} = {result} m",
    },
    Candidate {
        requires: &[Speed, CentripetalAcceleration],
        guard: None,
        compute: |i| div(i.get(Speed).powi(2), i.get(CentripetalAcceleration)),
        template: "r = v² / a_c = {v}² / {a_c} = {result} m",
    },
    Candidate {
        requires: &[Speed, Period],
        guard: None,
        compute: |i| Ok(i.get(Speed) * i.get(Period) / TAU),
        template: "r = vT / 2π = {v} · {T} / 2π = {result} m",
    },
    Candidate {
        requires: &[Speed, Frequency],
        guard: None,
        compute: |i| div(i.get(Speed), TAU * i.get(Frequency)),
        template: "r = v / 2πf = {v} / (2π · {f}) = {result} m",
    },
    Candidate {
        requires: &[CentripetalAcceleration, AngularVelocity],
        guard: None,
        compute: |i| div(i.get(CentripetalAcceleration), i.get(AngularVelocity).powi(2)),
        template: "r = a_c / ω² = {a_c} / {ω}² = {result} m",
    },
];

const CENTRIPETAL_ACCELERATION: &[Candidate] = &[
    Candidate {
        requires: &[Speed, Radius],
        guard: None,
        compute: |i| div(i.get(Speed).powi(2), i.get(Radius)),
        template: "a_c = v² / r = {v}² / {r} = {result} m/s²",
    },
    Candidate {
        requires: &[AngularVelocity, Radius],
        guard: None,
        compute: |i| Ok(i.get(AngularVelocity).powi(2) * i.get(Radius)),
        template: "a_c = ω²r = {ω}² · {r} = {result} m/s²",
    },
];

const REVOLUTIONS: &[Candidate] = &[
    Candidate {
        requires: &[Angle],
        guard: None,
        compute: |i| Ok(i.get(Angle) / TAU),
        template: "N = θ / 2π = {θ} / 2π = {result} rev",
    },
    Candidate {
        requires: &[AngularVelocity, Time],
        guard: None,
        compute: |i| Ok(i.get(AngularVelocity) * i.get(Time) / TAU),
        template: "N = ωt / 2π = {ω} · {t} / 2π = {result} rev",
    },
];
