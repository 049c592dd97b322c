/// Risk classification: the decision protocol combining all flood signals.
///
/// Branches are evaluated in strict precedence order; the first applicable
/// one fixes the risk level, the confirmation flag, and the rationale:
///
/// 1. **Official confirmation** — a matched event from the authoritative
///    feed always yields High risk, regardless of every other signal.
/// 2. **Statistical anomaly** — current discharge far above the historical
///    high water mark, or above the lookback-window record. Only entered
///    when a baseline exists and today's discharge is positive.
/// 3. **Composite score** — integer scoring of discharge, rainfall, soil
///    moisture, and snow depth, mapped to Low/Moderate/High.
///
/// An authoritative report overrides statistical inference by design; the
/// statistical signals are still carried on the assessment for display.

use crate::config::AssessmentConfig;
use crate::model::{AuxiliarySignals, DischargeBaseline, EventMatch, RiskLevel};

// Composite score weights and bands. These are fixed calibration
// constants, not deployment tunables.
const SCORE_HIGH: i32 = 4;
const SCORE_MODERATE: i32 = 2;
const PEAK_HEAVY_M3S: f64 = 200.0;
const PEAK_ELEVATED_M3S: f64 = 50.0;
const RAINFALL_EXTREME_MM: f64 = 150.0;
const RAINFALL_HEAVY_MM: f64 = 50.0;
const RAINFALL_NOTABLE_MM: f64 = 20.0;
const SOIL_SATURATED: f64 = 0.35;
const SNOW_DEEP_M: f64 = 0.3;

/// All signals feeding one classification.
#[derive(Debug, Clone)]
pub struct RiskInputs<'a> {
    /// Today's forecasted discharge; `None` or zero skips the anomaly branch.
    pub current_discharge: Option<f64>,
    /// Maximum forecasted discharge over the peak window.
    pub peak_discharge_7d: Option<f64>,
    pub baseline: Option<&'a DischargeBaseline>,
    pub event_match: Option<&'a EventMatch>,
    pub auxiliary: &'a AuxiliarySignals,
}

/// Outcome of the decision protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskOutcome {
    pub risk_level: RiskLevel,
    pub officially_confirmed: bool,
    pub rationale: Option<String>,
}

/// Runs the decision protocol over the given signals.
pub fn classify(inputs: &RiskInputs, config: &AssessmentConfig) -> RiskOutcome {
    // Branch 1: official confirmation.
    if let Some(matched) = inputs.event_match {
        let event = &matched.event;
        let rationale = format!(
            "Official flood alert: {}. Alert level: {}, ~{:.0} km from location, \
             reported {}. Source: {}",
            event.title, event.alert_level, matched.distance_km, event.report_date,
            event.report_url
        );
        return RiskOutcome {
            risk_level: RiskLevel::High,
            officially_confirmed: true,
            rationale: Some(rationale),
        };
    }

    // Branch 2: statistical anomaly. Requires a baseline and a positive
    // current discharge; zero or absent discharge falls straight through.
    if let (Some(baseline), Some(current)) = (inputs.baseline, inputs.current_discharge) {
        if current > 0.0 {
            if current > baseline.high_water_mark * config.trigger_multiplier {
                let deviation = (current / baseline.high_water_mark * 100.0).round();
                return RiskOutcome {
                    risk_level: RiskLevel::High,
                    officially_confirmed: false,
                    rationale: Some(format!(
                        "River discharge is {:.0}% of the {}-day high water mark.",
                        deviation, config.history_lookback_days
                    )),
                };
            }
            if current > baseline.max {
                return RiskOutcome {
                    risk_level: RiskLevel::High,
                    officially_confirmed: false,
                    rationale: Some(format!(
                        "River discharge is at record highs for the past {} days.",
                        config.history_lookback_days
                    )),
                };
            }
        }
    }

    // Branch 3: composite score fallback.
    let score = composite_score(inputs);
    let risk_level = if score >= SCORE_HIGH {
        RiskLevel::High
    } else if score >= SCORE_MODERATE {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };

    RiskOutcome {
        risk_level,
        officially_confirmed: false,
        rationale: None,
    }
}

/// Integer scoring of the non-authoritative signals.
///
/// With a baseline, today's discharge is judged against it; without one,
/// the forecast peak stands in as a cruder absolute-magnitude signal.
/// Absent discharge values contribute nothing.
fn composite_score(inputs: &RiskInputs) -> i32 {
    let mut score = 0;

    match inputs.baseline {
        Some(baseline) => {
            let current = inputs.current_discharge.unwrap_or(0.0);
            if current > baseline.high_water_mark {
                score += 2;
            } else if current > baseline.median * 1.5 {
                score += 1;
            }
        }
        None => {
            let peak = inputs.peak_discharge_7d.unwrap_or(0.0);
            if peak > PEAK_HEAVY_M3S {
                score += 3;
            } else if peak > PEAK_ELEVATED_M3S {
                score += 1;
            }
        }
    }

    let aux = inputs.auxiliary;
    if aux.rainfall_72h_mm > RAINFALL_EXTREME_MM {
        score += 4;
    } else if aux.rainfall_72h_mm > RAINFALL_HEAVY_MM {
        score += 2;
    } else if aux.rainfall_72h_mm > RAINFALL_NOTABLE_MM {
        score += 1;
    }

    if aux.soil_moisture > SOIL_SATURATED {
        score += 1;
    }
    if aux.snow_depth_m > SNOW_DEEP_M {
        score += 1;
    }

    score
}
