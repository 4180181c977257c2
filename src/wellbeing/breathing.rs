//! Guided box-breathing cycle

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreathingPhase {
    BreatheIn,
    HoldIn,
    BreatheOut,
    HoldOut,
}

impl BreathingPhase {
    pub const CYCLE: [BreathingPhase; 4] = [
        BreathingPhase::BreatheIn,
        BreathingPhase::HoldIn,
        BreathingPhase::BreatheOut,
        BreathingPhase::HoldOut,
    ];

    /// Prompt shown to the user
    pub fn prompt(&self) -> &'static str {
        match self {
            BreathingPhase::BreatheIn => "Breathe In",
            BreathingPhase::HoldIn | BreathingPhase::HoldOut => "Hold",
            BreathingPhase::BreatheOut => "Breathe Out",
        }
    }

    pub fn duration_secs(&self) -> u32 {
        match self {
            BreathingPhase::BreatheIn | BreathingPhase::BreatheOut => 4,
            BreathingPhase::HoldIn | BreathingPhase::HoldOut => 2,
        }
    }

    /// The phase that follows, wrapping back to `BreatheIn`
    pub fn next(&self) -> Self {
        match self {
            BreathingPhase::BreatheIn => BreathingPhase::HoldIn,
            BreathingPhase::HoldIn => BreathingPhase::BreatheOut,
            BreathingPhase::BreatheOut => BreathingPhase::HoldOut,
            BreathingPhase::HoldOut => BreathingPhase::BreatheIn,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreathingStep {
    pub phase: BreathingPhase,
    pub prompt: &'static str,
    pub duration_secs: u32,
}

/// One full cycle of the exercise
pub fn breathing_pattern() -> Vec<BreathingStep> {
    BreathingPhase::CYCLE
        .iter()
        .map(|&phase| BreathingStep {
            phase,
            prompt: phase.prompt(),
            duration_secs: phase.duration_secs(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern() {
        let pattern = breathing_pattern();
        let prompts: Vec<&str> = pattern.iter().map(|s| s.prompt).collect();
        assert_eq!(prompts, vec!["Breathe In", "Hold", "Breathe Out", "Hold"]);
        let total: u32 = pattern.iter().map(|s| s.duration_secs).sum();
        assert_eq!(total, 12);
    }

    #[test]
    fn test_next_wraps() {
        let mut phase = BreathingPhase::BreatheIn;
        for _ in 0..4 {
            phase = phase.next();
        }
        assert_eq!(phase, BreathingPhase::BreatheIn);
        assert_eq!(BreathingPhase::HoldOut.next(), BreathingPhase::BreatheIn);
    }
}
