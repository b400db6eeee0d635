// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

pub mod baseline;
pub mod config;
pub mod cumulative;
pub mod integrate;
pub mod rank;
pub mod render;
pub mod result;
pub mod validate;

pub use baseline::{
    Baselines, CLOSED_FORM_TOLERANCE, expected_case_auc, expected_case_curve, linspace,
    population_proportion, worst_case_auc, worst_case_curve,
};
pub use config::RankingAucConfig;
pub use cumulative::CumulativeCounts;
pub use integrate::{normalized_auc, positions, trapezoid_area};
pub use rank::{RankedSample, Sample, effective_score, rank_samples};
pub use rankauc_core::{EvalContext, RankAucError, TraceSink};
pub use render::{
    CurveKind, CurveRenderer, PlotConfig, RankingCurves, SaveTarget, render_ranking_curves,
};
pub use result::{RankingAucResult, TopKCoverage};
pub use validate::{positive_mask, validate_inputs, validate_label_distribution};

use std::fmt::Debug;

/// Evaluates how well `scores` rank the items labelled `pos_label` first.
///
/// Returns the ranked curve, the expected-case and worst-case reference curves,
/// their normalized AUCs and population statistics.
pub fn ranking_auc<L: PartialEq + Debug>(
    scores: &[f64],
    labels: &[L],
    pos_label: &L,
    config: &RankingAucConfig,
) -> Result<RankingAucResult, RankAucError> {
    ranking_auc_with_context(scores, labels, pos_label, config, &EvalContext::new())
}

/// [`ranking_auc`] over `(score, label)` samples.
pub fn ranking_auc_samples<L: PartialEq + Debug>(
    samples: &[Sample<L>],
    pos_label: &L,
    config: &RankingAucConfig,
    ctx: &EvalContext<'_>,
) -> Result<RankingAucResult, RankAucError> {
    let scores = samples.iter().map(|sample| sample.score).collect::<Vec<_>>();
    let labels = samples.iter().map(|sample| &sample.label).collect::<Vec<_>>();
    ranking_auc_with_context(&scores, &labels, &pos_label, config, ctx)
}

/// [`ranking_auc`] with intermediate values reported to the context's trace
/// sink.
pub fn ranking_auc_with_context<L: PartialEq + Debug>(
    scores: &[f64],
    labels: &[L],
    pos_label: &L,
    config: &RankingAucConfig,
    ctx: &EvalContext<'_>,
) -> Result<RankingAucResult, RankAucError> {
    let n = validate_inputs(scores, labels)?;
    let positives = positive_mask(labels, pos_label);
    let total_positive = validate_label_distribution(&positives, pos_label)?;
    ctx.record_scalar("n_elements", n as f64);
    ctx.record_scalar("total_possible_matches", total_positive as f64);

    let ranked = rank_samples(scores, &positives, config.greater_is_better);
    let counts = CumulativeCounts::from_ranking(&ranked, total_positive)?;
    ctx.record_counts("cumulative_ranked_matches", &counts.ranked_matches);
    ctx.record_counts("cumulative_possible_matches", &counts.possible_matches);

    let y = counts.recall_curve();
    ctx.record_curve("ratio", &y);

    let x = positions(n);
    let auc = normalized_auc(&x, &y)?;
    ctx.record_scalar(
        "population_proportion",
        population_proportion(total_positive, n),
    );

    let top_k = config
        .top_k
        .map(|k| counts.coverage_at(k))
        .transpose()?;
    if let Some(coverage) = &top_k {
        record_top_k(ctx, coverage);
    }

    let baselines = Baselines::compute(&x, total_positive)?;
    ctx.record_scalar("auc", auc);
    ctx.record_scalar("auc_expected_case", baselines.auc_expected_case);
    ctx.record_scalar("auc_worst_case", baselines.auc_worst_case);

    Ok(RankingAucResult::assemble(
        x,
        y,
        auc,
        baselines,
        total_positive,
        top_k,
    ))
}

fn record_top_k(ctx: &EvalContext<'_>, coverage: &TopKCoverage) {
    ctx.record_scalar("top_k.k", coverage.k as f64);
    ctx.record_scalar("top_k.ranked_matches", coverage.ranked_matches as f64);
    ctx.record_scalar("top_k.possible_matches", coverage.possible_matches as f64);
    ctx.record_scalar("top_k.coverage_of_total", coverage.coverage_of_total);
    ctx.record_scalar("top_k.coverage_of_possible", coverage.coverage_of_possible);
}
