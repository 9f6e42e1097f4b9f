//! Membership functions and linguistic terms for the soil input variables

/// Piecewise-linear membership function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MembershipFn {
    /// Triangle with feet at `a` and `c`, peak at `b`.
    Triangle { a: f64, b: f64, c: f64 },
    /// Trapezoid with feet at `a` and `d`, plateau between `b` and `c`.
    Trapezoid { a: f64, b: f64, c: f64, d: f64 },
}

impl MembershipFn {
    /// Degree of membership of `x`, in [0, 1].
    pub fn degree(&self, x: f64) -> f64 {
        match *self {
            Self::Triangle { a, b, c } => {
                if x < a || x > c {
                    0.0
                } else if x < b {
                    rise(x - a, b - a)
                } else if x > b {
                    rise(c - x, c - b)
                } else {
                    1.0
                }
            }
            Self::Trapezoid { a, b, c, d } => {
                if x < a || x > d {
                    0.0
                } else if x < b {
                    rise(x - a, b - a)
                } else if x > c {
                    rise(d - x, d - c)
                } else {
                    1.0
                }
            }
        }
    }
}

/// Degenerate edges (zero run) are vertical: full membership.
fn rise(num: f64, den: f64) -> f64 {
    if den <= f64::EPSILON {
        1.0
    } else {
        num / den
    }
}

/// Linguistic levels of the pH variable (universe 0 - 14).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhLevel {
    Acidic,
    Neutral,
    Alkaline,
}

impl PhLevel {
    pub fn membership(&self) -> MembershipFn {
        match self {
            Self::Acidic => MembershipFn::Trapezoid {
                a: 0.0,
                b: 0.0,
                c: 4.5,
                d: 6.0,
            },
            Self::Neutral => MembershipFn::Triangle {
                a: 5.0,
                b: 6.5,
                c: 8.0,
            },
            Self::Alkaline => MembershipFn::Trapezoid {
                a: 7.0,
                b: 8.5,
                c: 14.0,
                d: 14.0,
            },
        }
    }
}

/// Linguistic levels of the temperature variable (universe 0 - 50 °C).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempLevel {
    Cold,
    Normal,
    Hot,
}

impl TempLevel {
    pub fn membership(&self) -> MembershipFn {
        match self {
            Self::Cold => MembershipFn::Trapezoid {
                a: 0.0,
                b: 0.0,
                c: 18.0,
                d: 23.0,
            },
            Self::Normal => MembershipFn::Triangle {
                a: 20.0,
                b: 27.0,
                c: 32.0,
            },
            Self::Hot => MembershipFn::Trapezoid {
                a: 30.0,
                b: 35.0,
                c: 50.0,
                d: 50.0,
            },
        }
    }
}

/// Linguistic levels of the humidity variable (universe 0 - 100 %).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumidityLevel {
    Low,
    Medium,
    High,
}

impl HumidityLevel {
    pub fn membership(&self) -> MembershipFn {
        match self {
            Self::Low => MembershipFn::Trapezoid {
                a: 0.0,
                b: 0.0,
                c: 45.0,
                d: 60.0,
            },
            Self::Medium => MembershipFn::Triangle {
                a: 50.0,
                b: 70.0,
                c: 85.0,
            },
            Self::High => MembershipFn::Trapezoid {
                a: 80.0,
                b: 90.0,
                c: 100.0,
                d: 100.0,
            },
        }
    }
}
