// ABOUTME: Unit tests for models functionality
// ABOUTME: Streaks, wellbeing aggregation, check-in adherence, insight feed records, and profile JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use chrono::Utc;
use common::{date, profile_with_goals, reference_plan};
use vitalis::models::{
    CheckInInsight, DailyCheckIn, DietType, DimensionScores, Dosage, DosageUnit, HealthGoal,
    Insight, InsightCategory, UserProfile, UserStreak, WellbeingScore, WellnessDimension,
};

// ============================================================================
// Streaks
// ============================================================================

#[test]
fn test_first_check_in_starts_streak() {
    let mut streak = UserStreak::new();
    streak.record_check_in(date(2026, 3, 1));

    assert_eq!(streak.current_streak, 1);
    assert_eq!(streak.longest_streak, 1);
    assert_eq!(streak.last_check_in_date, Some(date(2026, 3, 1)));
}

#[test]
fn test_consecutive_days_extend_streak() {
    let mut streak = UserStreak::new();
    for day in 1..=4 {
        streak.record_check_in(date(2026, 3, day));
    }
    assert_eq!(streak.current_streak, 4);
    assert_eq!(streak.longest_streak, 4);
}

#[test]
fn test_same_day_is_a_no_op() {
    let mut streak = UserStreak::new();
    streak.record_check_in(date(2026, 3, 1));
    streak.record_check_in(date(2026, 3, 1));
    assert_eq!(streak.current_streak, 1);
}

#[test]
fn test_gap_resets_current_but_keeps_longest() {
    let mut streak = UserStreak::new();
    for day in 1..=3 {
        streak.record_check_in(date(2026, 3, day));
    }
    streak.record_check_in(date(2026, 3, 6));

    assert_eq!(streak.current_streak, 1);
    assert_eq!(streak.longest_streak, 3);
    assert_eq!(streak.last_check_in_date, Some(date(2026, 3, 6)));
}

#[test]
fn test_earlier_dates_are_ignored() {
    let mut streak = UserStreak::new();
    streak.record_check_in(date(2026, 3, 5));
    streak.record_check_in(date(2026, 3, 6));
    streak.record_check_in(date(2026, 3, 2));

    assert_eq!(streak.current_streak, 2);
    assert_eq!(streak.last_check_in_date, Some(date(2026, 3, 6)));
}

#[test]
fn test_streak_across_month_boundary() {
    let mut streak = UserStreak::new();
    streak.record_check_in(date(2026, 2, 28));
    streak.record_check_in(date(2026, 3, 1));
    assert_eq!(streak.current_streak, 2);
}

#[test]
fn test_streak_activity_window() {
    let mut streak = UserStreak::new();
    assert!(!streak.is_active(date(2026, 3, 1)));

    streak.record_check_in(date(2026, 3, 1));
    assert!(streak.is_active(date(2026, 3, 1)));
    assert!(streak.is_active(date(2026, 3, 2)));
    assert!(!streak.is_active(date(2026, 3, 3)));
}

// ============================================================================
// Wellbeing
// ============================================================================

#[test]
fn test_wellbeing_is_unrounded_mean() {
    assert_eq!(WellbeingScore::calculate(80, 60, 70, 90, 50), 70.0);
    assert_eq!(WellbeingScore::calculate(81, 60, 70, 90, 50), 70.2);
}

#[test]
fn test_wellbeing_extremes() {
    assert_eq!(WellbeingScore::calculate(0, 0, 0, 0, 0), 0.0);
    assert_eq!(WellbeingScore::calculate(100, 100, 100, 100, 100), 100.0);
}

#[test]
fn test_scores_are_clamped() {
    let scores = DimensionScores::new(120, 50, 50, 50, 50);
    assert_eq!(scores.get(WellnessDimension::Sleep), 100);

    let mut scores = DimensionScores::default();
    scores.set(WellnessDimension::Gut, 255);
    assert_eq!(scores.gut, 100);
}

#[test]
fn test_dimension_keys_round_trip() {
    for dimension in WellnessDimension::ALL {
        assert_eq!(WellnessDimension::from_key(dimension.key()), Some(dimension));
    }
    assert_eq!(WellnessDimension::from_key("stamina"), None);
}

// ============================================================================
// Check-ins
// ============================================================================

#[test]
fn test_check_in_for_plan_logs_included_lines() {
    let plan = reference_plan(&profile_with_goals(&[HealthGoal::Sleep]));
    let mut check_in = DailyCheckIn::for_plan(date(2026, 3, 10), Some(&plan));

    assert!(!check_in.wellbeing_completed);
    assert_eq!(check_in.supplement_logs.len(), plan.included_names().len());
    assert_eq!(check_in.adherence(), Some(0.0));

    let first = plan.included_names()[0].to_owned();
    check_in.mark_taken(&first, true, Utc::now());
    assert!(check_in.was_taken(&first.to_uppercase()));
    assert_eq!(check_in.taken_supplements(), vec![first.clone()]);

    check_in.mark_taken(&first, false, Utc::now());
    assert!(!check_in.was_taken(&first));
}

#[test]
fn test_adherence_fraction() {
    let mut check_in = DailyCheckIn::for_plan(date(2026, 3, 10), None);
    assert_eq!(check_in.adherence(), None);

    check_in.mark_taken("Zinc", true, Utc::now());
    check_in.mark_taken("Iron", false, Utc::now());
    assert_eq!(check_in.adherence(), Some(0.5));
}

#[test]
fn test_submit_scores_completes_check_in() {
    let mut check_in = DailyCheckIn::for_plan(date(2026, 3, 10), None);
    check_in.submit_scores(DimensionScores::new(80, 60, 70, 90, 50));

    assert!(check_in.wellbeing_completed);
    assert_eq!(check_in.wellbeing_score(), 70.0);
    assert_eq!(check_in.score(WellnessDimension::Mood), 90);
}

// ============================================================================
// Insights
// ============================================================================

#[test]
fn test_category_from_key_prefers_longest_prefix() {
    assert_eq!(InsightCategory::from_key("supp_tip_zinc"), InsightCategory::Tip);
    assert_eq!(
        InsightCategory::from_key("supp_zinc_7"),
        InsightCategory::SupplementMilestone
    );
    assert_eq!(InsightCategory::from_key("pb_sleep"), InsightCategory::PersonalBest);
    assert_eq!(InsightCategory::from_key("above_avg_mood"), InsightCategory::AboveAverage);
    assert_eq!(InsightCategory::from_key("mystery"), InsightCategory::FunFact);
}

#[test]
fn test_feed_record_from_check_in_insight() {
    let generated = CheckInInsight::new(
        "improving_energy",
        "Your energy has been trending up.",
        Some(WellnessDimension::Energy),
    );
    let mut insight = Insight::from_check_in(&generated, date(2026, 3, 10));

    assert_eq!(insight.key, "improving_energy");
    assert_eq!(insight.category, InsightCategory::Trend);
    assert_eq!(insight.title, InsightCategory::Trend.title());
    assert_eq!(insight.body, generated.message);
    assert_eq!(insight.dimension, Some(WellnessDimension::Energy));
    assert!(!insight.is_read && !insight.is_dismissed);

    insight.mark_read();
    insight.dismiss();
    assert!(insight.is_read && insight.is_dismissed);
}

// ============================================================================
// Profiles and dosages
// ============================================================================

#[test]
fn test_profile_json_uses_snake_case_keys_and_defaults() {
    let json = r#"{
        "name": "Sam",
        "goals": ["stress_anxiety", "gut_health"],
        "diet_type": "vegan",
        "medications": ["Sertraline 50mg"]
    }"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();

    assert_eq!(profile.goals, vec![HealthGoal::StressAnxiety, HealthGoal::GutHealth]);
    assert_eq!(profile.diet_type, DietType::Vegan);
    assert_eq!(profile.age, None);
    assert_eq!(profile.baselines, DimensionScores::default());

    let back = serde_json::to_value(&profile).unwrap();
    assert_eq!(back["goals"][0], "stress_anxiety");
}

#[test]
fn test_effective_goals_dedupe_and_fallback() {
    let profile = profile_with_goals(&[HealthGoal::Sleep, HealthGoal::Sleep]);
    assert_eq!(profile.effective_goals(), vec![HealthGoal::Sleep]);

    let profile = profile_with_goals(&[]);
    assert_eq!(profile.effective_goals(), vec![HealthGoal::GeneralWellness]);
}

#[test]
fn test_goal_keys_round_trip() {
    for goal in HealthGoal::SELECTABLE {
        assert_eq!(HealthGoal::from_key(goal.key()), Some(goal));
    }
    assert_eq!(HealthGoal::from_key("flying"), None);
}

#[test]
fn test_dosage_display() {
    assert_eq!(Dosage::new(27.0, DosageUnit::Mg).to_string(), "27 mg");
    assert_eq!(Dosage::new(2.5, DosageUnit::Mg).to_string(), "2.5 mg");
}
