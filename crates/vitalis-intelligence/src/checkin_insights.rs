// ABOUTME: Check-in insight generator implementing a priority-ordered rule cascade
// ABOUTME: Personal bests, supplement milestones, baseline/average comparisons, trends, adherence, tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

//! # Check-in Insights
//!
//! Rules are evaluated top to bottom and the first rule with a candidate that
//! was not shown recently wins:
//!
//! | Priority | Key family | Fires when |
//! |----------|------------|------------|
//! | 1 | `pb_{dimension}` | today beats every completed check-in in history |
//! | 2 | `supp_{supplement}_{days}` | taken on consecutive days, at a multiple of the onset window |
//! | 3 | `above_baseline_{dimension}` | today ≥ baseline + 10 |
//! | 4 | `above_avg_{dimension}` | today ≥ 7-day average + 8 |
//! | 5 | `improving_{dimension}` | last 3-5 completed points gain ≥ 10, or rise without dips |
//! | 6 | `full_adherence` | every included plan supplement was taken today |
//! | 7 | `supp_tip_{supplement}` / `fun_fact_{n}` | day-number rotation through the knowledge base |
//!
//! Within one rule the candidate with the largest improvement wins; exact ties
//! are broken with the supplied random source. `generate` seeds that source
//! from the check-in date, so a given day always yields the same insight.

use crate::config::intelligence::{CheckInInsightConfig, IntelligenceConfig};
use crate::insight_tips::{fun_facts, slugify, supplement_tip};
use chrono::{Datelike, Days, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;
use vitalis_core::catalog::SupplementCatalog;
use vitalis_core::constants::insight_keys;
use vitalis_core::models::{
    CheckInInsight, DailyCheckIn, DimensionScores, SupplementPlan, UserStreak, WellnessDimension,
};

/// Everything the generator looks at for one check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightContext {
    /// Calendar date of today's check-in
    pub date: NaiveDate,
    /// Today's submitted scores
    pub today: DimensionScores,
    /// Onboarding baselines
    #[serde(default)]
    pub baselines: DimensionScores,
    /// Trailing average per dimension; a missing dimension has no average yet
    #[serde(default)]
    pub trailing_averages: BTreeMap<WellnessDimension, f64>,
    /// Earlier check-ins, excluding today
    #[serde(default)]
    pub history: Vec<DailyCheckIn>,
    /// Current streak
    #[serde(default)]
    pub streak: UserStreak,
    /// Supplements logged as taken today
    #[serde(default)]
    pub supplements_taken: Vec<String>,
    /// Active plan
    #[serde(default)]
    pub plan: Option<SupplementPlan>,
    /// Keys shown recently; never repeated
    #[serde(default)]
    pub recent_keys: BTreeSet<String>,
}

impl InsightContext {
    /// Build a context from raw history, computing trailing averages
    ///
    /// Entries dated today or later are dropped from `history`. Averages cover
    /// completed check-ins from the `days` calendar days before `date`.
    #[must_use]
    pub fn from_history(
        date: NaiveDate,
        today: DimensionScores,
        history: Vec<DailyCheckIn>,
        days: usize,
    ) -> Self {
        let history: Vec<DailyCheckIn> = history
            .into_iter()
            .filter(|check_in| check_in.date < date)
            .collect();
        let trailing_averages = Self::trailing_averages(date, &history, days);
        Self {
            date,
            today,
            baselines: DimensionScores::default(),
            trailing_averages,
            history,
            streak: UserStreak::default(),
            supplements_taken: Vec::new(),
            plan: None,
            recent_keys: BTreeSet::new(),
        }
    }

    /// Set onboarding baselines
    #[must_use]
    pub const fn with_baselines(mut self, baselines: DimensionScores) -> Self {
        self.baselines = baselines;
        self
    }

    /// Set the current streak
    #[must_use]
    pub fn with_streak(mut self, streak: UserStreak) -> Self {
        self.streak = streak;
        self
    }

    /// Set supplements taken today
    #[must_use]
    pub fn with_supplements_taken(mut self, taken: Vec<String>) -> Self {
        self.supplements_taken = taken;
        self
    }

    /// Set the active plan
    #[must_use]
    pub fn with_plan(mut self, plan: SupplementPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    /// Set recently shown keys
    #[must_use]
    pub fn with_recent_keys(mut self, recent_keys: BTreeSet<String>) -> Self {
        self.recent_keys = recent_keys;
        self
    }

    /// Mean score per dimension over completed check-ins in the trailing window
    #[must_use]
    pub fn trailing_averages(
        date: NaiveDate,
        history: &[DailyCheckIn],
        days: usize,
    ) -> BTreeMap<WellnessDimension, f64> {
        let span = u64::try_from(days).unwrap_or(u64::MAX);
        let Some(start) = date.checked_sub_days(Days::new(span)) else {
            return BTreeMap::new();
        };
        let window: Vec<&DailyCheckIn> = history
            .iter()
            .filter(|check_in| {
                check_in.wellbeing_completed && check_in.date >= start && check_in.date < date
            })
            .collect();
        if window.is_empty() {
            return BTreeMap::new();
        }

        WellnessDimension::ALL
            .into_iter()
            .map(|dimension| {
                let total: f64 = window
                    .iter()
                    .map(|check_in| f64::from(check_in.score(dimension)))
                    .sum();
                (dimension, total / window.len() as f64)
            })
            .collect()
    }

    /// Completed earlier check-ins in date order
    fn completed_history(&self) -> Vec<&DailyCheckIn> {
        let mut completed: Vec<&DailyCheckIn> = self
            .history
            .iter()
            .filter(|check_in| check_in.wellbeing_completed && check_in.date < self.date)
            .collect();
        completed.sort_by_key(|check_in| check_in.date);
        completed
    }

    fn was_taken_today(&self, name: &str) -> bool {
        self.supplements_taken
            .iter()
            .any(|taken| taken.eq_ignore_ascii_case(name))
    }
}

/// A rule candidate with the improvement used for ranking
struct Candidate {
    delta: f64,
    insight: CheckInInsight,
}

impl Candidate {
    fn new(delta: f64, key: String, message: String, dimension: Option<WellnessDimension>) -> Self {
        Self {
            delta,
            insight: CheckInInsight::new(key, message, dimension),
        }
    }
}

/// Rule cascade over one check-in context
pub struct CheckInInsightGenerator {
    config: CheckInInsightConfig,
    /// Milestone interval per lowercase supplement name
    milestone_days: BTreeMap<String, u32>,
}

impl Default for CheckInInsightGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckInInsightGenerator {
    /// Generator using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global().check_in_insights.clone())
    }

    /// Generator with custom configuration
    #[must_use]
    pub const fn with_config(config: CheckInInsightConfig) -> Self {
        Self {
            config,
            milestone_days: BTreeMap::new(),
        }
    }

    /// Use catalog onset windows as supplement milestone intervals
    #[must_use]
    pub fn with_catalog(mut self, catalog: &SupplementCatalog) -> Self {
        self.milestone_days = catalog
            .all_supplements()
            .iter()
            .filter_map(|supplement| {
                supplement
                    .onset_window
                    .filter(|window| window.min_days > 0)
                    .map(|window| (supplement.name.to_lowercase(), window.min_days))
            })
            .collect();
        self
    }

    /// Milestone interval for a supplement
    #[must_use]
    pub fn milestone_interval(&self, supplement: &str) -> u32 {
        self.milestone_days
            .get(&supplement.to_lowercase())
            .copied()
            .unwrap_or(self.config.default_milestone_days)
            .max(1)
    }

    /// Generate today's insight with tie-breaking seeded from the check-in date
    #[must_use]
    pub fn generate(&self, context: &InsightContext) -> Option<CheckInInsight> {
        let seed = i64::from(context.date.num_days_from_ce()) as u64;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate_with_rng(context, &mut rng)
    }

    /// Generate today's insight using `rng` for tie-breaking
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        context: &InsightContext,
        rng: &mut R,
    ) -> Option<CheckInInsight> {
        let rules: [(&str, fn(&Self, &InsightContext) -> Vec<Candidate>); 6] = [
            ("personal_best", Self::personal_bests),
            ("supplement_milestone", Self::supplement_milestones),
            ("above_baseline", Self::above_baseline),
            ("above_average", Self::above_average),
            ("improving_trend", Self::improving_trends),
            ("full_adherence", Self::full_adherence),
        ];

        for (rule, evaluate) in rules {
            let candidates: Vec<Candidate> = evaluate(self, context)
                .into_iter()
                .filter(|candidate| {
                    let fresh = !context.recent_keys.contains(&candidate.insight.key);
                    if !fresh {
                        debug!(rule, key = %candidate.insight.key, "Skipping recently shown insight");
                    }
                    fresh
                })
                .collect();
            if let Some(insight) = Self::pick(candidates, rng) {
                debug!(rule, key = %insight.key, "Insight rule fired");
                return Some(insight);
            }
        }

        let fallback = Self::fallback(context);
        if fallback.is_none() {
            debug!("Every insight candidate was shown recently");
        }
        fallback
    }

    /// Largest delta wins; exact ties are broken by `rng`
    fn pick<R: Rng + ?Sized>(candidates: Vec<Candidate>, rng: &mut R) -> Option<CheckInInsight> {
        let best = candidates
            .iter()
            .map(|candidate| candidate.delta)
            .fold(f64::NEG_INFINITY, f64::max);
        let mut tied: Vec<CheckInInsight> = candidates
            .into_iter()
            .filter(|candidate| (candidate.delta - best).abs() < f64::EPSILON)
            .map(|candidate| candidate.insight)
            .collect();
        if tied.len() <= 1 {
            return tied.pop();
        }
        let index = rng.gen_range(0..tied.len());
        Some(tied.swap_remove(index))
    }

    #[allow(clippy::unused_self)] // Uniform rule signature
    fn personal_bests(&self, context: &InsightContext) -> Vec<Candidate> {
        let history = context.completed_history();
        if history.is_empty() {
            return Vec::new();
        }
        WellnessDimension::ALL
            .into_iter()
            .filter_map(|dimension| {
                let previous_best = history
                    .iter()
                    .map(|check_in| check_in.score(dimension))
                    .max()?;
                let today = context.today.get(dimension);
                (today > previous_best).then(|| {
                    Candidate::new(
                        f64::from(today - previous_best),
                        format!("{}{}", insight_keys::PERSONAL_BEST, dimension.key()),
                        format!(
                            "New personal best! Your {} score of {today} is your highest yet, beating your previous best of {previous_best}.",
                            dimension.label().to_lowercase()
                        ),
                        Some(dimension),
                    )
                })
            })
            .collect()
    }

    /// Consecutive days `name` was taken, counting today
    fn consecutive_days(context: &InsightContext, name: &str) -> u32 {
        if !context.was_taken_today(name) {
            return 0;
        }
        let mut days = 1;
        let mut cursor = context.date;
        loop {
            let Some(previous) = cursor.pred_opt() else {
                return days;
            };
            let taken = context
                .history
                .iter()
                .any(|check_in| check_in.date == previous && check_in.was_taken(name));
            if !taken {
                return days;
            }
            days += 1;
            cursor = previous;
        }
    }

    fn supplement_milestones(&self, context: &InsightContext) -> Vec<Candidate> {
        let mut names: Vec<&str> = Vec::new();
        for name in &context.supplements_taken {
            if !names.iter().any(|seen| seen.eq_ignore_ascii_case(name)) {
                names.push(name);
            }
        }

        names
            .into_iter()
            .filter_map(|name| {
                let days = Self::consecutive_days(context, name);
                let interval = self.milestone_interval(name);
                (days > 0 && days % interval == 0).then(|| {
                    Candidate::new(
                        f64::from(days),
                        format!("{}{}_{days}", insight_keys::SUPPLEMENT_MILESTONE, slugify(name)),
                        format!(
                            "{days} days of {name} in a row! This is about when many people start to notice a difference."
                        ),
                        None,
                    )
                })
            })
            .collect()
    }

    fn above_baseline(&self, context: &InsightContext) -> Vec<Candidate> {
        let margin = i16::from(self.config.above_baseline_margin);
        WellnessDimension::ALL
            .into_iter()
            .filter_map(|dimension| {
                let today = context.today.get(dimension);
                let baseline = context.baselines.get(dimension);
                let delta = i16::from(today) - i16::from(baseline);
                (delta >= margin).then(|| {
                    Candidate::new(
                        f64::from(delta),
                        format!("{}{}", insight_keys::ABOVE_BASELINE, dimension.key()),
                        format!(
                            "Your {} is {delta} points above where you started ({baseline}). Keep it going!",
                            dimension.label().to_lowercase()
                        ),
                        Some(dimension),
                    )
                })
            })
            .collect()
    }

    fn above_average(&self, context: &InsightContext) -> Vec<Candidate> {
        WellnessDimension::ALL
            .into_iter()
            .filter_map(|dimension| {
                let average = *context.trailing_averages.get(&dimension)?;
                let delta = f64::from(context.today.get(dimension)) - average;
                (delta >= self.config.above_average_margin).then(|| {
                    Candidate::new(
                        delta,
                        format!("{}{}", insight_keys::ABOVE_AVERAGE, dimension.key()),
                        format!(
                            "{} is {delta:.0} points above your 7-day average today.",
                            dimension.label()
                        ),
                        Some(dimension),
                    )
                })
            })
            .collect()
    }

    fn improving_trends(&self, context: &InsightContext) -> Vec<Candidate> {
        let history = context.completed_history();
        let earlier = self.config.trend_window_days.saturating_sub(1);
        let recent = &history[history.len().saturating_sub(earlier)..];
        if recent.len() + 1 < self.config.trend_min_points {
            return Vec::new();
        }

        WellnessDimension::ALL
            .into_iter()
            .filter_map(|dimension| {
                let series: Vec<f64> = recent
                    .iter()
                    .map(|check_in| f64::from(check_in.score(dimension)))
                    .chain(std::iter::once(f64::from(context.today.get(dimension))))
                    .collect();
                let gain = series.last()? - series.first()?;
                let steady = series.windows(2).all(|pair| pair[1] >= pair[0]);
                let improving =
                    gain >= self.config.trend_min_net_gain || (steady && gain > 0.0);
                improving.then(|| {
                    Candidate::new(
                        gain,
                        format!("{}{}", insight_keys::IMPROVING, dimension.key()),
                        format!(
                            "Your {} has been trending up over your last {} check-ins (+{gain:.0} points).",
                            dimension.label().to_lowercase(),
                            series.len()
                        ),
                        Some(dimension),
                    )
                })
            })
            .collect()
    }

    #[allow(clippy::unused_self)] // Uniform rule signature
    fn full_adherence(&self, context: &InsightContext) -> Vec<Candidate> {
        let Some(plan) = &context.plan else {
            return Vec::new();
        };
        let mut included = plan.included_supplements().peekable();
        if included.peek().is_none() {
            return Vec::new();
        }
        let all_taken = included.all(|line| context.was_taken_today(&line.name));
        if !all_taken {
            return Vec::new();
        }
        vec![Candidate::new(
            1.0,
            insight_keys::FULL_ADHERENCE.to_owned(),
            "You took every supplement in your plan today. Consistency is what makes them work."
                .to_owned(),
            None,
        )]
    }

    /// Tips for plan supplements followed by fun facts
    fn fallback_pool(context: &InsightContext) -> Vec<CheckInInsight> {
        let mut pool: Vec<CheckInInsight> = context
            .plan
            .iter()
            .flat_map(SupplementPlan::included_supplements)
            .filter_map(|line| {
                supplement_tip(&line.name).map(|tip| {
                    CheckInInsight::new(
                        format!("{}{}", insight_keys::SUPPLEMENT_TIP, slugify(&line.name)),
                        tip,
                        None,
                    )
                })
            })
            .collect();
        pool.extend(fun_facts().iter().enumerate().map(|(index, fact)| {
            CheckInInsight::new(format!("{}{index}", insight_keys::FUN_FACT), *fact, None)
        }));
        pool
    }

    /// Day-number rotation through the pool, skipping recently shown keys
    fn fallback(context: &InsightContext) -> Option<CheckInInsight> {
        let pool = Self::fallback_pool(context);
        if pool.is_empty() {
            return None;
        }
        let day_number = usize::try_from(context.date.num_days_from_ce()).unwrap_or_default();
        let start = day_number % pool.len();
        (0..pool.len())
            .map(|offset| &pool[(start + offset) % pool.len()])
            .find(|insight| !context.recent_keys.contains(&insight.key))
            .cloned()
    }
}
