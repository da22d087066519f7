// ABOUTME: Criterion benchmarks for plan generation and check-in insights
// ABOUTME: Measures recommendation engine scaling by goal count and insight cascade cost by history length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

//! Criterion benchmarks for the intelligence crate.
//!
//! Plans are generated against the reference catalog for growing goal sets;
//! insights are generated against growing check-in histories.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Days, NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vitalis::catalog::SupplementCatalog;
use vitalis::intelligence::config::intelligence::{
    CheckInInsightConfig, RecommendationEngineConfig,
};
use vitalis::intelligence::{CheckInInsightGenerator, InsightContext, RecommendationEngine};
use vitalis::models::{
    BiologicalSex, DailyCheckIn, DimensionScores, HealthGoal, SupplementPlan, UserProfile,
};

const TRAILING_DAYS: usize = 7;

fn bench_profile(goal_count: usize) -> UserProfile {
    UserProfile {
        name: "Bench".into(),
        age: Some(45),
        sex: BiologicalSex::Female,
        goals: HealthGoal::SELECTABLE.into_iter().take(goal_count).collect(),
        medications: vec!["Warfarin 5mg".into(), "Levothyroxine".into()],
        allergies: vec!["shellfish".into()],
        ..UserProfile::default()
    }
}

/// Daily check-ins ending the day before `today` with slowly varying scores
#[allow(clippy::cast_possible_truncation)]
fn bench_history(today: NaiveDate, days: usize, plan: &SupplementPlan) -> Vec<DailyCheckIn> {
    (1..=days)
        .rev()
        .filter_map(|back| {
            let date = today.checked_sub_days(Days::new(back as u64))?;
            let base = 40 + (back * 7 % 30) as u8;
            let mut check_in = DailyCheckIn::for_plan(date, Some(plan));
            check_in.submit_scores(DimensionScores::new(base, base + 5, base, base + 3, base + 1));
            for name in plan.included_names() {
                check_in.mark_taken(name, true, Utc::now());
            }
            Some(check_in)
        })
        .collect()
}

/// Benchmark plan generation as the goal set grows
fn bench_plan_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_generation");
    let catalog = SupplementCatalog::reference();
    let engine = RecommendationEngine::with_config(RecommendationEngineConfig::default());

    for goal_count in [0, 1, 3, 6, HealthGoal::SELECTABLE.len()] {
        let profile = bench_profile(goal_count);
        group.bench_with_input(
            BenchmarkId::new("generate_plan", goal_count),
            &profile,
            |b, profile| {
                b.iter(|| engine.generate_plan(black_box(profile), black_box(&catalog)));
            },
        );
    }

    group.finish();
}

/// Benchmark the insight cascade as check-in history grows
fn bench_insight_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("checkin_insights");
    let catalog = SupplementCatalog::reference();
    let engine = RecommendationEngine::with_config(RecommendationEngineConfig::default());
    let plan = engine.generate_plan(&bench_profile(3), &catalog);
    let generator =
        CheckInInsightGenerator::with_config(CheckInInsightConfig::default()).with_catalog(&catalog);
    let Some(today) = NaiveDate::from_ymd_opt(2026, 6, 1) else {
        return;
    };

    for days in [7_usize, 30, 90, 365] {
        let history = bench_history(today, days, &plan);
        let taken: Vec<String> = plan.included_names().into_iter().map(str::to_owned).collect();
        let context = InsightContext::from_history(
            today,
            DimensionScores::uniform(60),
            history,
            TRAILING_DAYS,
        )
        .with_supplements_taken(taken)
        .with_plan(plan.clone());

        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::new("generate", days), &context, |b, context| {
            b.iter(|| generator.generate(black_box(context)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_plan_generation, bench_insight_generation);
criterion_main!(benches);
