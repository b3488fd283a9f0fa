//! Static data about the four Coupe generations and their engines.
//!
//! Section ids double as anchor targets and as the tracked sections of the
//! scroll indicator, so the table order is the page order.

#[cfg(test)]
#[path = "generations_test.rs"]
mod generations_test;

use crate::util::i18n::{self, Localized};

/// Headline performance figures of one generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Performance {
    pub horsepower: u32,
    /// Torque in lb-ft.
    pub torque: u32,
    /// 0-100 km/h time in seconds.
    pub acceleration: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Generation {
    /// Section id in the page markup.
    pub id: &'static str,
    pub label: &'static str,
    pub years: &'static str,
    pub performance: Performance,
}

pub const GENERATIONS: [Generation; 4] = [
    Generation {
        id: "rd1",
        label: "RD1",
        years: "1996-2000",
        performance: Performance { horsepower: 140, torque: 133, acceleration: 8.9 },
    },
    Generation {
        id: "rd2",
        label: "RD2",
        years: "2000-2001",
        performance: Performance { horsepower: 142, torque: 136, acceleration: 8.7 },
    },
    Generation {
        id: "gk1",
        label: "GK1",
        years: "2002-2005",
        performance: Performance { horsepower: 172, torque: 181, acceleration: 7.6 },
    },
    Generation {
        id: "gk2",
        label: "GK2",
        years: "2006-2009",
        performance: Performance { horsepower: 172, torque: 181, acceleration: 7.4 },
    },
];

// ── Engine codes ────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineCode {
    pub code: &'static str,
    pub description: Localized,
}

pub const ENGINE_CODES: [EngineCode; 4] = [
    EngineCode {
        code: "G4GR",
        description: Localized::new(
            "Naturally aspirated 1.6L DOHC 16-valve inline-4 engine",
            "محرك 1.6 لتر طبيعي الشفط DOHC 16 صمام 4 أسطوانات",
        ),
    },
    EngineCode {
        code: "G4GF",
        description: Localized::new(
            "Naturally aspirated 2.0L DOHC 16-valve inline-4 engine",
            "محرك 2.0 لتر طبيعي الشفط DOHC 16 صمام 4 أسطوانات",
        ),
    },
    EngineCode {
        code: "G4GC",
        description: Localized::new(
            "Naturally aspirated 2.0L DOHC 16-valve inline-4 engine (Beta II)",
            "محرك 2.0 لتر طبيعي الشفط DOHC 16 صمام 4 أسطوانات (بيتا II)",
        ),
    },
    EngineCode {
        code: "G6BA",
        description: Localized::new(
            "Naturally aspirated 2.7L DOHC 24-valve V6 engine",
            "محرك 2.7 لتر طبيعي الشفط DOHC 24 صمام V6",
        ),
    },
];

#[must_use]
pub fn engine_code(code: &str) -> Option<&'static EngineCode> {
    ENGINE_CODES.iter().find(|e| e.code == code)
}

// ── Performance chart ───────────────────────────────────────────

const MAX_HORSEPOWER: f64 = 200.0;
const MAX_TORQUE: f64 = 200.0;
const SLOWEST_ACCELERATION: f64 = 10.0;
const FASTEST_ACCELERATION: f64 = 6.0;

/// One bar of a generation's performance chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartBar {
    pub label: Localized,
    /// Bar width in percent, clamped to `0..=100`.
    pub percent: f64,
    pub value: String,
    /// Extra class for the bar element, if any.
    pub modifier: Option<&'static str>,
}

fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

impl Performance {
    #[must_use]
    pub fn chart_bars(&self) -> [ChartBar; 3] {
        let accel_span = SLOWEST_ACCELERATION - FASTEST_ACCELERATION;
        [
            ChartBar {
                label: i18n::HORSEPOWER,
                percent: clamp_percent(f64::from(self.horsepower) / MAX_HORSEPOWER * 100.0),
                value: format!("{} hp", self.horsepower),
                modifier: None,
            },
            ChartBar {
                label: i18n::TORQUE,
                percent: clamp_percent(f64::from(self.torque) / MAX_TORQUE * 100.0),
                value: format!("{} lb-ft", self.torque),
                modifier: None,
            },
            ChartBar {
                label: i18n::ACCELERATION,
                percent: clamp_percent((SLOWEST_ACCELERATION - self.acceleration) / accel_span * 100.0),
                value: format!("{}s", self.acceleration),
                modifier: Some("acceleration"),
            },
        ]
    }
}
