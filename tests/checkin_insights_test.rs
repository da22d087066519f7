// ABOUTME: Integration tests for the check-in insight rule cascade
// ABOUTME: Covers rule priority, thresholds, trends, milestones, adherence, fallback rotation and repetition avoidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use chrono::Utc;
use common::{
    consecutive_history, date, generator, profile_with_goals, reference_plan, scores_with,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;
use vitalis::catalog::names::MAGNESIUM_GLYCINATE;
use vitalis::intelligence::config::intelligence::CheckInInsightConfig;
use vitalis::intelligence::{CheckInInsightGenerator, InsightContext};
use vitalis::models::{
    DailyCheckIn, DimensionScores, HealthGoal, InsightCategory, SupplementPlan,
    WellnessDimension,
};

const TRAILING_DAYS: usize = 7;

fn context(history: Vec<DailyCheckIn>, today: DimensionScores) -> InsightContext {
    InsightContext::from_history(date(2026, 3, 10), today, history, TRAILING_DAYS)
}

fn sleep_plan() -> SupplementPlan {
    reference_plan(&profile_with_goals(&[HealthGoal::Sleep]))
}

fn all_taken(plan: &SupplementPlan) -> Vec<String> {
    plan.included_names()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn key_of(generator: &CheckInInsightGenerator, context: &InsightContext) -> String {
    generator
        .generate(context)
        .map(|insight| insight.key)
        .unwrap_or_default()
}

#[test]
fn test_personal_best_outranks_full_adherence() {
    let today = date(2026, 3, 10);
    let history = consecutive_history(today, &[DimensionScores::uniform(60); 3]);
    let plan = sleep_plan();
    let ctx = context(history, scores_with(60, WellnessDimension::Sleep, 80))
        .with_supplements_taken(all_taken(&plan))
        .with_plan(plan);

    let insight = generator().generate(&ctx).expect("insight");
    assert_eq!(insight.key, "pb_sleep");
    assert_eq!(insight.dimension, Some(WellnessDimension::Sleep));
    assert_eq!(insight.category(), InsightCategory::PersonalBest);
    assert!(insight.message.contains("80"));
    assert!(insight.message.contains("60"));
}

#[test]
fn test_personal_best_needs_history() {
    let ctx = context(Vec::new(), scores_with(50, WellnessDimension::Sleep, 95))
        .with_baselines(DimensionScores::uniform(90));
    assert!(!key_of(&generator(), &ctx).starts_with("pb_"));
}

#[test]
fn test_recent_key_falls_through_to_next_rule() {
    let today = date(2026, 3, 10);
    let history = consecutive_history(today, &[DimensionScores::uniform(60); 3]);
    let ctx = context(history, scores_with(60, WellnessDimension::Sleep, 80))
        .with_recent_keys(BTreeSet::from(["pb_sleep".to_owned()]));

    assert_eq!(key_of(&generator(), &ctx), "above_baseline_sleep");
}

#[test]
fn test_above_baseline_threshold_is_inclusive() {
    let baselines = DimensionScores::uniform(50);

    let at_margin = context(Vec::new(), scores_with(50, WellnessDimension::Sleep, 60))
        .with_baselines(baselines);
    assert_eq!(key_of(&generator(), &at_margin), "above_baseline_sleep");

    let below_margin = context(Vec::new(), scores_with(50, WellnessDimension::Sleep, 59))
        .with_baselines(baselines);
    assert!(key_of(&generator(), &below_margin).starts_with("fun_fact_"));
}

#[test]
fn test_above_average_threshold_is_inclusive() {
    let today = date(2026, 3, 10);
    let history = consecutive_history(
        today,
        &[
            scores_with(50, WellnessDimension::Sleep, 90),
            scores_with(50, WellnessDimension::Sleep, 50),
            scores_with(50, WellnessDimension::Sleep, 52),
        ],
    );

    let at_margin = context(history.clone(), scores_with(50, WellnessDimension::Sleep, 72))
        .with_baselines(DimensionScores::uniform(70));
    assert_eq!(at_margin.trailing_averages[&WellnessDimension::Sleep], 64.0);
    assert_eq!(key_of(&generator(), &at_margin), "above_avg_sleep");

    let below_margin = context(history, scores_with(50, WellnessDimension::Sleep, 71))
        .with_baselines(DimensionScores::uniform(70));
    assert!(key_of(&generator(), &below_margin).starts_with("fun_fact_"));
}

#[test]
fn test_improving_trend_with_large_gain() {
    let today = date(2026, 3, 10);
    let history = consecutive_history(
        today,
        &[
            scores_with(50, WellnessDimension::Energy, 60),
            scores_with(50, WellnessDimension::Energy, 65),
            scores_with(50, WellnessDimension::Energy, 70),
        ],
    );
    let ctx = context(history, scores_with(50, WellnessDimension::Energy, 70))
        .with_baselines(DimensionScores::uniform(80));

    let insight = generator().generate(&ctx).expect("insight");
    assert_eq!(insight.key, "improving_energy");
    assert_eq!(insight.category(), InsightCategory::Trend);
}

#[test]
fn test_improving_trend_with_steady_small_gain() {
    let today = date(2026, 3, 10);
    let steady = consecutive_history(
        today,
        &[
            scores_with(50, WellnessDimension::Mood, 60),
            scores_with(50, WellnessDimension::Mood, 61),
            scores_with(50, WellnessDimension::Mood, 63),
        ],
    );
    let ctx = context(steady, scores_with(50, WellnessDimension::Mood, 63))
        .with_baselines(DimensionScores::uniform(80));
    assert_eq!(key_of(&generator(), &ctx), "improving_mood");

    let with_dip = consecutive_history(
        today,
        &[
            scores_with(50, WellnessDimension::Mood, 60),
            scores_with(50, WellnessDimension::Mood, 66),
            scores_with(50, WellnessDimension::Mood, 63),
        ],
    );
    let ctx = context(with_dip, scores_with(50, WellnessDimension::Mood, 63))
        .with_baselines(DimensionScores::uniform(80));
    assert!(key_of(&generator(), &ctx).starts_with("fun_fact_"));
}

#[test]
fn test_trend_needs_minimum_points() {
    let today = date(2026, 3, 10);
    let history = consecutive_history(today, &[scores_with(50, WellnessDimension::Gut, 40)]);
    let ctx = context(history, scores_with(50, WellnessDimension::Gut, 45))
        .with_baselines(DimensionScores::uniform(80));
    assert!(!key_of(&generator(), &ctx).starts_with("improving_"));
}

fn magnesium_history(today: chrono::NaiveDate, days: usize) -> Vec<DailyCheckIn> {
    let mut history = consecutive_history(today, &vec![DimensionScores::uniform(50); days]);
    for check_in in &mut history {
        check_in.mark_taken(MAGNESIUM_GLYCINATE, true, Utc::now());
    }
    history
}

#[test]
fn test_supplement_milestone_at_onset_interval() {
    let today = date(2026, 3, 10);
    let generator = generator();
    assert_eq!(generator.milestone_interval(MAGNESIUM_GLYCINATE), 7);

    let ctx = context(magnesium_history(today, 6), DimensionScores::uniform(50))
        .with_supplements_taken(vec![MAGNESIUM_GLYCINATE.to_owned()]);
    let insight = generator.generate(&ctx).expect("insight");
    assert_eq!(insight.key, "supp_magnesium_glycinate_7");
    assert_eq!(insight.category(), InsightCategory::SupplementMilestone);

    let short = context(magnesium_history(today, 5), DimensionScores::uniform(50))
        .with_supplements_taken(vec![MAGNESIUM_GLYCINATE.to_owned()]);
    assert!(!key_of(&generator, &short).starts_with("supp_magnesium"));
}

#[test]
fn test_milestone_requires_taking_it_today() {
    let today = date(2026, 3, 10);
    let ctx = context(magnesium_history(today, 6), DimensionScores::uniform(50));
    assert!(!key_of(&generator(), &ctx).starts_with("supp_magnesium"));
}

#[test]
fn test_full_adherence_when_every_plan_supplement_taken() {
    let plan = sleep_plan();
    let generator = CheckInInsightGenerator::with_config(CheckInInsightConfig::default());
    let ctx = context(Vec::new(), DimensionScores::uniform(50))
        .with_supplements_taken(all_taken(&plan))
        .with_plan(plan.clone());
    let insight = generator.generate(&ctx).expect("insight");
    assert_eq!(insight.key, "full_adherence");
    assert_eq!(insight.category(), InsightCategory::Adherence);

    let mut partial = all_taken(&plan);
    partial.pop();
    let ctx = context(Vec::new(), DimensionScores::uniform(50))
        .with_supplements_taken(partial)
        .with_plan(plan);
    assert_ne!(key_of(&generator, &ctx), "full_adherence");
}

#[test]
fn test_removed_plan_lines_do_not_block_adherence() {
    let mut plan = sleep_plan();
    plan.remove_supplement(MAGNESIUM_GLYCINATE).unwrap();
    let taken = all_taken(&plan);
    let generator = CheckInInsightGenerator::with_config(CheckInInsightConfig::default());
    let ctx = context(Vec::new(), DimensionScores::uniform(50))
        .with_supplements_taken(taken)
        .with_plan(plan);
    assert_eq!(key_of(&generator, &ctx), "full_adherence");
}

#[test]
fn test_fallback_rotation_is_stable_and_skips_recent() {
    let plan = sleep_plan();
    let ctx = context(Vec::new(), DimensionScores::uniform(50)).with_plan(plan);
    let generator = generator();

    let first = generator.generate(&ctx).expect("fallback");
    let again = generator.generate(&ctx).expect("fallback");
    assert_eq!(first, again);
    assert!(first.key.starts_with("supp_tip_") || first.key.starts_with("fun_fact_"));

    let ctx = ctx.with_recent_keys(BTreeSet::from([first.key.clone()]));
    let next = generator.generate(&ctx).expect("fallback");
    assert_ne!(next.key, first.key);
}

#[test]
fn test_returns_none_when_everything_was_shown() {
    let recent: BTreeSet<String> = (0..vitalis::intelligence::insight_tips::fun_facts().len())
        .map(|index| format!("fun_fact_{index}"))
        .collect();
    let ctx = context(Vec::new(), DimensionScores::uniform(50)).with_recent_keys(recent);
    assert!(generator().generate(&ctx).is_none());
}

#[test]
fn test_ties_are_broken_by_the_random_source() {
    let mut today = DimensionScores::uniform(50);
    today.set(WellnessDimension::Sleep, 70);
    today.set(WellnessDimension::Energy, 70);
    let ctx = context(Vec::new(), today);
    let generator = generator();

    let allowed = ["above_baseline_sleep", "above_baseline_energy"];
    for seed in 0..16 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let insight = generator.generate_with_rng(&ctx, &mut rng).expect("insight");
        assert!(allowed.contains(&insight.key.as_str()), "{}", insight.key);
    }
    assert_eq!(generator.generate(&ctx), generator.generate(&ctx));
}

#[test]
fn test_largest_improvement_wins_within_a_rule() {
    let mut today = DimensionScores::uniform(50);
    today.set(WellnessDimension::Sleep, 65);
    today.set(WellnessDimension::Clarity, 85);
    let ctx = context(Vec::new(), today);
    assert_eq!(key_of(&generator(), &ctx), "above_baseline_clarity");
}

#[test]
fn test_from_history_ignores_today_and_incomplete_entries() {
    let today = date(2026, 3, 10);
    let mut history = consecutive_history(today, &[DimensionScores::uniform(40); 2]);
    history.push(DailyCheckIn::for_plan(date(2026, 3, 7), None));
    history.push(DailyCheckIn::completed(today, DimensionScores::uniform(100)));
    history.push(DailyCheckIn::completed(date(2026, 2, 1), DimensionScores::uniform(100)));

    let ctx = context(history, DimensionScores::uniform(50));
    assert_eq!(ctx.history.len(), 4);
    assert!(ctx.history.iter().all(|check_in| check_in.date < today));
    assert_eq!(ctx.trailing_averages[&WellnessDimension::Sleep], 40.0);
}

#[test]
fn test_context_deserializes_with_defaults() {
    let json = r#"{
        "date": "2026-03-10",
        "today": { "sleep": 80, "energy": 50, "clarity": 50, "mood": 50, "gut": 50 }
    }"#;
    let ctx: InsightContext = serde_json::from_str(json).unwrap();

    assert!(ctx.history.is_empty());
    assert!(ctx.plan.is_none());
    assert_eq!(ctx.baselines, DimensionScores::default());
    assert_eq!(key_of(&generator(), &ctx), "above_baseline_sleep");
}
