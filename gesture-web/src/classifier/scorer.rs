//! Gesture scoring - ordered decision list over finger states and orientation
//!
//! Rules are tried in priority order (rock, scissors, paper). The first rule
//! whose predicate holds AND whose confidence clears the acceptance threshold
//! wins; otherwise the result is Unknown/0.0.

use log::debug;
use serde::Serialize;

use super::finger_state::FingerStates;
use super::model::{GestureLabel, GestureResult, ACCEPTANCE_THRESHOLD};
use super::orientation::HandOrientation;
use crate::config::ClassifierConfig;
use crate::geometry::angle_between_2d;
use crate::hand::{
    Finger, HandLandmarkSet, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_TIP, RING_TIP,
};

/// Evaluation order. Earlier rules win ties.
pub const RULE_PRIORITY: [GestureLabel; 3] = [
    GestureLabel::Rock,
    GestureLabel::Scissors,
    GestureLabel::Paper,
];

// Score weights
const ROCK_CLOSED_WEIGHT: f32 = 0.7;
const ROCK_ORIENTATION_WEIGHT: f32 = 0.3;
const SCISSORS_SEPARATION_WEIGHT: f32 = 0.6;
const SCISSORS_ANGLE_WEIGHT: f32 = 0.4;
const PAPER_SEPARATION_WEIGHT: f32 = 0.6;
const PAPER_ORIENTATION_WEIGHT: f32 = 0.4;

/// Per-rule outcome, kept for diagnostics
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RuleOutcome {
    pub label: GestureLabel,
    /// Predicate held
    pub matched: bool,
    /// Confidence (0.0 when the predicate failed)
    pub confidence: f32,
}

impl RuleOutcome {
    fn new(label: GestureLabel, score: Option<f32>) -> Self {
        Self {
            label,
            matched: score.is_some(),
            confidence: score.unwrap_or(0.0),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.matched && self.confidence > ACCEPTANCE_THRESHOLD
    }
}

/// Everything the rules look at for one hand
pub struct ScoringInput<'a> {
    pub hand: &'a HandLandmarkSet,
    pub states: FingerStates,
    pub orientation: HandOrientation,
}

fn indicator(condition: bool) -> f32 {
    if condition {
        1.0
    } else {
        0.0
    }
}

/// Rock: at most one extended finger
pub fn score_rock(input: &ScoringInput, config: &ClassifierConfig) -> Option<f32> {
    let extended = input.states.extended_count();
    if extended > 1 {
        return None;
    }

    let closed_finger_score = (5 - extended) as f32 / 5.0;
    let orientation_score =
        indicator(input.orientation.faces_vertically(config.orientation_threshold));

    Some(closed_finger_score * ROCK_CLOSED_WEIGHT + orientation_score * ROCK_ORIENTATION_WEIGHT)
}

/// Angle between the index and middle finger directions (tip → pip), image plane
pub fn scissors_angle(hand: &HandLandmarkSet) -> f32 {
    let index_dir = hand.planar(INDEX_PIP) - hand.planar(INDEX_TIP);
    let middle_dir = hand.planar(MIDDLE_PIP) - hand.planar(MIDDLE_TIP);
    angle_between_2d(&index_dir, &middle_dir)
}

/// Scissors: index + middle extended, ring + pinky flexed, V angle in window
pub fn score_scissors(input: &ScoringInput, config: &ClassifierConfig) -> Option<f32> {
    let states = &input.states;
    let shape = states.is_extended(Finger::Index)
        && states.is_extended(Finger::Middle)
        && !states.is_extended(Finger::Ring)
        && !states.is_extended(Finger::Pinky);
    if !shape {
        return None;
    }

    let angle = scissors_angle(input.hand);
    let angle_ok = angle > config.scissors_min_angle_deg && angle < config.scissors_max_angle_deg;
    if !angle_ok {
        return None;
    }

    let tip_distance = (input.hand.planar(INDEX_TIP) - input.hand.planar(MIDDLE_TIP)).norm();
    let separation_score = (tip_distance * config.scissors_separation_gain).min(1.0);
    let angle_score = indicator(angle_ok);

    Some(separation_score * SCISSORS_SEPARATION_WEIGHT + angle_score * SCISSORS_ANGLE_WEIGHT)
}

/// Mean image-plane distance between neighbouring fingertips (index..pinky)
pub fn mean_adjacent_tip_distance(hand: &HandLandmarkSet) -> f32 {
    let tips = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];
    let total: f32 = tips
        .windows(2)
        .map(|pair| (hand.planar(pair[0]) - hand.planar(pair[1])).norm())
        .sum();
    total / (tips.len() - 1) as f32
}

/// Paper: index, middle, ring and pinky extended (thumb ignored)
pub fn score_paper(input: &ScoringInput, config: &ClassifierConfig) -> Option<f32> {
    let states = &input.states;
    let open = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky]
        .iter()
        .all(|f| states.is_extended(*f));
    if !open {
        return None;
    }

    let separation_score =
        (mean_adjacent_tip_distance(input.hand) * config.paper_separation_gain).min(1.0);
    let orientation_score = indicator(input.orientation.faces_camera(config.orientation_threshold));

    Some(separation_score * PAPER_SEPARATION_WEIGHT + orientation_score * PAPER_ORIENTATION_WEIGHT)
}

/// Outcome of every rule, in priority order
pub fn evaluate_rules(input: &ScoringInput, config: &ClassifierConfig) -> [RuleOutcome; 3] {
    RULE_PRIORITY.map(|label| {
        let score = match label {
            GestureLabel::Rock => score_rock(input, config),
            GestureLabel::Scissors => score_scissors(input, config),
            GestureLabel::Paper => score_paper(input, config),
            GestureLabel::Unknown => None,
        };
        RuleOutcome::new(label, score)
    })
}

/// First accepted rule wins; Unknown/0.0 if none clears the bar
pub fn score_gesture(input: &ScoringInput, config: &ClassifierConfig) -> GestureResult {
    let outcomes = evaluate_rules(input, config);

    match outcomes.iter().find(|o| o.is_accepted()) {
        Some(winner) => {
            debug!(
                "Gesture {} accepted (confidence {:.3}, extended: {})",
                winner.label.as_str(),
                winner.confidence,
                input.states.describe()
            );
            GestureResult::from_score(winner.label, winner.confidence)
        }
        None => {
            debug!("No gesture cleared the bar: {:?}", outcomes);
            GestureResult::unknown()
        }
    }
}
