//! The portfolio diversification engine.
//!
//! Given one customer's funds, computes pairwise holding overlaps,
//! amount-weighted sector exposure, and combines both into a composite
//! 0-100 score (higher = more diversified). Purely functional over its
//! inputs and fully deterministic; all accumulations are commutative, so
//! iteration order never affects the result.

use crate::core::dataset::{Customer, Dataset, Fund};
use crate::core::error::AnalysisError;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// The full analysis record for one customer. Serializes to the
/// camelCase wire shape consumed by external callers.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub client_id: String,
    pub currency: Option<String>,
    /// Pairwise overlap amounts keyed by `"<codeA> vs <codeB>"`.
    /// Duplicate fund codes can collide on the label; last write wins.
    pub fund_overlap: HashMap<String, f64>,
    pub overlap_score: f64,
    pub sector_score: f64,
    pub final_score: f64,
    /// Aggregated sector exposure, weighted by each fund's share of the
    /// customer's total amount.
    pub weighted_sector_exposure: HashMap<String, f64>,
}

/// Resolves `client_id` against the dataset and scores that customer.
///
/// A missing or empty id is rejected before lookup; an id that matches
/// no record yields [`AnalysisError::CustomerNotFound`].
pub fn analyze(
    dataset: &Dataset,
    client_id: Option<&str>,
) -> Result<AnalysisResult, AnalysisError> {
    let client_id = match client_id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(AnalysisError::MissingClientId),
    };

    let customer = dataset
        .find_customer(client_id)
        .ok_or_else(|| AnalysisError::CustomerNotFound {
            client_id: client_id.to_string(),
        })?;

    analyze_customer(customer, client_id)
}

/// Scores a single customer's fund list.
pub fn analyze_customer(
    customer: &Customer,
    client_id: &str,
) -> Result<AnalysisResult, AnalysisError> {
    let funds = &customer.funds;
    if funds.is_empty() {
        return Err(AnalysisError::NoFundsToAnalyze {
            client_id: client_id.to_string(),
        });
    }

    let total_amount: f64 = funds.iter().map(|f| f.amount).sum();
    if total_amount == 0.0 {
        // Funds exist but carry no money: nothing can concentrate, so
        // report a perfect score instead of dividing by zero. This is
        // the documented degenerate case, not an error.
        debug!(client_id, "Total fund amount is zero; reporting perfect score");
        return Ok(AnalysisResult {
            client_id: client_id.to_string(),
            currency: customer.currency.clone(),
            fund_overlap: HashMap::new(),
            overlap_score: 100.0,
            sector_score: 100.0,
            final_score: 100.0,
            weighted_sector_exposure: HashMap::new(),
        });
    }

    // 1. Pairwise holding overlap, each unordered pair considered once.
    let mut fund_overlap = HashMap::new();
    let mut overlaps = Vec::new();
    for (i, f1) in funds.iter().enumerate() {
        for f2 in &funds[i + 1..] {
            let overlap = holdings_overlap(f1, f2);
            fund_overlap.insert(overlap_label(f1, f2), overlap);
            overlaps.push(overlap);
        }
    }

    let avg_overlap = if overlaps.is_empty() {
        0.0
    } else {
        overlaps.iter().sum::<f64>() / overlaps.len() as f64
    };
    // Overlap values come pre-scaled from the dataset; no normalization
    // by fund size or holding count happens here.
    let overlap_score = ((1.0 - avg_overlap) * 100.0).max(0.0);

    // 2. Sector concentration via the Herfindahl-Hirschman index over
    // amount-weighted sector exposure.
    let mut weighted_sector_exposure: HashMap<String, f64> = HashMap::new();
    for fund in funds {
        let share = fund.amount / total_amount;
        for (sector, pct) in &fund.sectors {
            *weighted_sector_exposure.entry(sector.clone()).or_insert(0.0) += share * pct;
        }
    }
    let hhi: f64 = weighted_sector_exposure.values().map(|v| v * v).sum();
    let sector_score = ((1.0 - hhi) * 100.0).max(0.0);

    // 3. Composite score, equal-weighted.
    let final_score = 0.5 * overlap_score + 0.5 * sector_score;

    debug!(
        client_id,
        avg_overlap, hhi, overlap_score, sector_score, final_score, "Scored customer"
    );

    Ok(AnalysisResult {
        client_id: client_id.to_string(),
        currency: customer.currency.clone(),
        fund_overlap,
        overlap_score,
        sector_score,
        final_score,
        weighted_sector_exposure,
    })
}

/// Sum of `min(w1, w2)` over the holdings two funds have in common.
/// Symmetric in its arguments.
pub fn holdings_overlap(f1: &Fund, f2: &Fund) -> f64 {
    f1.holdings
        .iter()
        .filter_map(|(security, w1)| f2.holdings.get(security).map(|w2| w1.min(*w2)))
        .sum()
}

fn overlap_label(f1: &Fund, f2: &Fund) -> String {
    format!(
        "{} vs {}",
        f1.fund_code.as_deref().unwrap_or("N/A"),
        f2.fund_code.as_deref().unwrap_or("N/A")
    )
}
