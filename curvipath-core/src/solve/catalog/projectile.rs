use crate::{
    quantity::Symbol::{self, *},
    solve::{
        Config,
        candidate::{Candidate, Inputs, div, sqrt},
    },
};

pub(super) const UNKNOWNS: &[Symbol] = &[
    Time,
    InitialSpeed,
    InitialHorizontalSpeed,
    InitialVerticalSpeed,
    Angle,
    MaxHeight,
    Range,
    Gravity,
    HorizontalPosition,
    VerticalPosition,
];

pub(super) fn candidates(unknown: Symbol) -> &'static [Candidate] {
    match unknown {
        Time => TIME,
        InitialSpeed => INITIAL_SPEED,
        InitialHorizontalSpeed => INITIAL_HORIZONTAL_SPEED,
        InitialVerticalSpeed => INITIAL_VERTICAL_SPEED,
        Angle => ANGLE,
        MaxHeight => MAX_HEIGHT,
        Range => RANGE,
        Gravity => GRAVITY,
        HorizontalPosition => HORIZONTAL_POSITION,
        VerticalPosition => VERTICAL_POSITION,
        _ => &[],
    }
}

fn is_horizontal(i: &Inputs<'_>, config: &Config) -> bool {
    i.get(Angle).abs() < config.degenerate_angle_tol
}

fn is_inclined(i: &Inputs<'_>, config: &Config) -> bool {
    !is_horizontal(i, config)
}

const TIME: &[Candidate] = &[
    Candidate {
        requires: &[InitialSpeed, Angle, Range],
        guard: Some(is_horizontal),
        compute: |i| div(i.get(Range), i.get(InitialSpeed)),
        template: "t = R / v₀ = {R} / {v_0} = {result} s (horizontal launch)",
    },
    Candidate {
        requires: &[InitialSpeed, Angle, Gravity],
        guard: Some(is_inclined),
        compute: |i| div(2.0 * i.get(InitialSpeed) * i.get(Angle).sin(), i.get(Gravity)),
        template: "t = (2 v₀ sinθ) / g = (2 · {v_0} · sin({θ})) / {g} = {result} s",
    },
    Candidate {
        requires: &[HorizontalPosition, InitialHorizontalSpeed],
        guard: None,
        compute: |i| div(i.get(HorizontalPosition), i.get(InitialHorizontalSpeed)),
        template: "t = x / v₀ₓ = {x} / {v_0x} = {result} s",
    },
];

const INITIAL_SPEED: &[Candidate] = &[
    Candidate {
        requires: &[InitialHorizontalSpeed, InitialVerticalSpeed],
        guard: None,
        compute: |i| Ok(i.get(InitialHorizontalSpeed).hypot(i.get(InitialVerticalSpeed))),
        template: "v₀ = √(v₀ₓ² + v₀ᵧ²) = √({v_0x}² + {v_0y}²) = {result} m/s",
    },
    Candidate {
        requires: &[Range, Angle, Gravity],
        guard: None,
        compute: |i| {
            sqrt(div(
                i.get(Range) * i.get(Gravity),
                (2.0 * i.get(Angle)).sin(),
            )?)
        },
        template: "v₀ = √(Rg / sin(2θ)) = √({R} · {g} / sin(2 · {θ})) = {result} m/s",
    },
    Candidate {
        requires: &[MaxHeight, Angle, Gravity],
        guard: None,
        compute: |i| {
            sqrt(div(
                2.0 * i.get(Gravity) * i.get(MaxHeight),
                i.get(Angle).sin().powi(2),
            )?)
        },
        template: "v₀ = √(2gH / sin²θ) = √(2 · {g} · {H} / sin²({θ})) = {result} m/s",
    },
];

const INITIAL_HORIZONTAL_SPEED: &[Candidate] = &[Candidate {
    requires: &[InitialSpeed, Angle],
    guard: None,
    compute: |i| Ok(i.get(InitialSpeed) * i.get(Angle).cos()),
    template: "v₀ₓ = v₀ cos(θ) = {v_0} · cos({θ}) = {result} m/s",
}];

const INITIAL_VERTICAL_SPEED: &[Candidate] = &[Candidate {
    requires: &[InitialSpeed, Angle],
    guard: None,
    compute: |i| Ok(i.get(InitialSpeed) * i.get(Angle).sin()),
    template: "v₀ᵧ = v₀ sin(θ) = {v_0} · sin({θ}) = {result} m/s",
}];

const ANGLE: &[Candidate] = &[
    Candidate {
        requires: &[InitialHorizontalSpeed, InitialVerticalSpeed],
        guard: None,
        compute: |i| {
            Ok(div(i.get(InitialVerticalSpeed), i.get(InitialHorizontalSpeed))?.atan())
        },
        template: "θ = arctan(v₀ᵧ / v₀ₓ) = arctan({v_0y} / {v_0x}) = {result} rad",
    },
    Candidate {
        requires: &[Range, MaxHeight, Gravity],
        guard: None,
        compute: |i| Ok(div(4.0 * i.get(MaxHeight), i.get(Range))?.atan()),
        template: "θ = arctan(4H / R) = arctan(4 · {H} / {R}) = {result} rad",
    },
];

const MAX_HEIGHT: &[Candidate] = &[
    Candidate {
        requires: &[InitialSpeed, Angle, Gravity],
        guard: None,
        compute: |i| {
            div(
                (i.get(InitialSpeed) * i.get(Angle).sin()).powi(2),
                2.0 * i.get(Gravity),
            )
        },
        template: "H = (v₀² sin²θ) / (2g) = ({v_0}² · sin²({θ})) / (2 · {g}) = {result} m",
    },
    Candidate {
        requires: &[InitialVerticalSpeed, Gravity],
        guard: None,
        compute: |i| div(i.get(InitialVerticalSpeed).powi(2), 2.0 * i.get(Gravity)),
        template: "H = v₀ᵧ² / (2g) = {v_0y}² / (2 · {g}) = {result} m",
    },
];

const RANGE: &[Candidate] = &[
    Candidate {
        requires: &[InitialSpeed, Angle, Gravity],
        guard: None,
        compute: |i| {
            div(
                i.get(InitialSpeed).powi(2) * (2.0 * i.get(Angle)).sin(),
                i.get(Gravity),
            )
        },
        template: "R = (v₀² sin(2θ)) / g = ({v_0}² · sin(2 · {θ})) / {g} = {result} m",
    },
    Candidate {
        requires: &[InitialHorizontalSpeed, Time],
        guard: None,
        compute: |i| Ok(i.get(InitialHorizontalSpeed) * i.get(Time)),
        template: "R = v₀ₓ · t = {v_0x} · {t} = {result} m",
    },
];

const GRAVITY: &[Candidate] = &[
    Candidate {
        requires: &[InitialSpeed, Angle, Range],
        guard: None,
        compute: |i| {
            div(
                i.get(InitialSpeed).powi(2) * (2.0 * i.get(Angle)).sin(),
                i.get(Range),
            )
        },
        template: "g = (v₀² sin(2θ)) / R = ({v_0}² · sin(2 · {θ})) / {R} = {result} m/s²",
    },
    Candidate {
        requires: &[InitialSpeed, Angle, MaxHeight],
        guard: None,
        compute: |i| {
            div(
                (i.get(InitialSpeed) * i.get(Angle).sin()).powi(2),
                2.0 * i.get(MaxHeight),
            )
        },
        template: "g = (v₀² sin²θ) / (2H) = ({v_0}² · sin²({θ})) / (2 · {H}) = {result} m/s²",
    },
];

const HORIZONTAL_POSITION: &[Candidate] = &[Candidate {
    requires: &[InitialHorizontalSpeed, Time],
    guard: None,
    compute: |i| Ok(i.get(InitialHorizontalSpeed) * i.get(Time)),
    template: "x = v₀ₓ · t = {v_0x} · {t} = {result} m",
}];

const VERTICAL_POSITION: &[Candidate] = &[Candidate {
    requires: &[InitialVerticalSpeed, Gravity, Time],
    guard: None,
    compute: |i| {
        let t = i.get(Time);
        Ok(i.get(InitialVerticalSpeed) * t - 0.5 * i.get(Gravity) * t.powi(2))
    },
    template: "y = v₀ᵧ · t - ½gt² = {v_0y} · {t} - 0.5 · {g} · {t}² = {result} m",
}];
