use serde::{Deserialize, Serialize};

pub const DEFAULT_AVG_DURATION: f64 = 60.0;
pub const DEFAULT_AVG_INTENSITY: f64 = 3.0;
pub const DEFAULT_AVG_ROLLS: f64 = 5.0;

/// Identifier wrapper for athletes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Identifier wrapper for logged sessions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// A single logged training session as supplied by the caller.
///
/// Counters default to zero and identifier lists to empty so partially filled
/// session logs still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInput {
    pub class_type: String,
    pub intensity: u8,
    #[serde(default)]
    pub duration_mins: u32,
    #[serde(default)]
    pub rolls: u32,
    #[serde(default)]
    pub partners: Vec<String>,
    #[serde(default)]
    pub techniques: Vec<String>,
    #[serde(default)]
    pub submissions_for: u32,
    #[serde(default)]
    pub submissions_against: u32,
    #[serde(default)]
    pub attacks_attempted: u32,
    #[serde(default)]
    pub attacks_successful: u32,
    #[serde(default)]
    pub defenses_attempted: u32,
    #[serde(default)]
    pub defenses_successful: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whoop_strain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whoop_avg_hr: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whoop_max_hr: Option<u32>,
}

impl SessionInput {
    /// Bare session of the given class with every optional signal absent.
    pub fn new(class_type: impl Into<String>, intensity: u8, duration_mins: u32) -> Self {
        Self {
            class_type: class_type.into(),
            intensity,
            duration_mins,
            rolls: 0,
            partners: Vec::new(),
            techniques: Vec::new(),
            submissions_for: 0,
            submissions_against: 0,
            attacks_attempted: 0,
            attacks_successful: 0,
            defenses_attempted: 0,
            defenses_successful: 0,
            whoop_strain: None,
            whoop_avg_hr: None,
            whoop_max_hr: None,
        }
    }

    /// True when any wearable reading is present and non-zero.
    pub fn has_biometrics(&self) -> bool {
        self.whoop_strain.is_some_and(|strain| strain > 0.0)
            || self.whoop_avg_hr.is_some_and(|hr| hr > 0)
            || self.whoop_max_hr.is_some_and(|hr| hr > 0)
    }
}

/// Rolling averages over the athlete's trailing sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserAverages {
    pub avg_duration: f64,
    pub avg_intensity: f64,
    pub avg_rolls: f64,
}

impl Default for UserAverages {
    fn default() -> Self {
        Self {
            avg_duration: DEFAULT_AVG_DURATION,
            avg_intensity: DEFAULT_AVG_INTENSITY,
            avg_rolls: DEFAULT_AVG_ROLLS,
        }
    }
}

impl UserAverages {
    /// Average the given sessions; an empty history yields the defaults.
    pub fn from_history<'a, I>(sessions: I) -> Self
    where
        I: IntoIterator<Item = &'a SessionInput>,
    {
        let mut count = 0u32;
        let mut duration = 0.0;
        let mut intensity = 0.0;
        let mut rolls = 0.0;

        for session in sessions {
            count += 1;
            duration += f64::from(session.duration_mins);
            intensity += f64::from(session.intensity);
            rolls += f64::from(session.rolls);
        }

        if count == 0 {
            return Self::default();
        }

        let n = f64::from(count);
        Self {
            avg_duration: duration / n,
            avg_intensity: intensity / n,
            avg_rolls: rolls / n,
        }
    }
}

/// Same-day readiness figure supplied by the check-in collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessSnapshot {
    pub composite_score: u8,
}

impl ReadinessSnapshot {
    pub fn new(composite_score: u8) -> Self {
        Self { composite_score }
    }
}

/// Daily check-in components, each rated 1 (poor) to 5 (excellent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessCheckIn {
    pub sleep: u8,
    pub stress: u8,
    pub soreness: u8,
    pub energy: u8,
}

impl ReadinessCheckIn {
    /// Composite of the four components, kept within 4..=20.
    pub fn composite(&self) -> u8 {
        [self.sleep, self.stress, self.soreness, self.energy]
            .into_iter()
            .map(|value| value.clamp(1, 5))
            .sum()
    }

    pub fn snapshot(&self) -> ReadinessSnapshot {
        ReadinessSnapshot::new(self.composite())
    }
}
