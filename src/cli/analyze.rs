use super::ui;
use crate::core::dataset::Dataset;
use crate::core::diversify::{self, AnalysisResult};
use anyhow::Result;
use comfy_table::Cell;

/// Scores one customer and renders the result, either as styled tables
/// or as the camelCase JSON wire shape when `json` is set.
pub fn run(
    dataset: &Dataset,
    client_id: Option<&str>,
    json: bool,
    fallback_currency: Option<&str>,
) -> Result<()> {
    let result = diversify::analyze(dataset, client_id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print!("{}", render_tables(&result, fallback_currency));
    Ok(())
}

fn render_tables(result: &AnalysisResult, fallback_currency: Option<&str>) -> String {
    let currency = result
        .currency
        .as_deref()
        .or(fallback_currency)
        .unwrap_or("N/A");

    let mut output = format!(
        "Client: {} ({currency})\n\n",
        ui::style_text(&result.client_id, ui::StyleType::Title)
    );

    // Score summary
    let mut scores = ui::new_styled_table();
    scores.set_header(vec![
        ui::header_cell("Metric"),
        ui::header_cell("Score (0-100)"),
    ]);
    scores.add_row(vec![Cell::new("Overlap"), ui::score_cell(result.overlap_score)]);
    scores.add_row(vec![Cell::new("Sector"), ui::score_cell(result.sector_score)]);
    scores.add_row(vec![
        Cell::new(ui::style_text("Final", ui::StyleType::Label)),
        ui::score_cell(result.final_score),
    ]);
    output.push_str(&scores.to_string());
    output.push('\n');

    // Pairwise fund overlap, sorted by label for stable output.
    if !result.fund_overlap.is_empty() {
        let mut pairs: Vec<_> = result.fund_overlap.iter().collect();
        pairs.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("Fund Pair"), ui::header_cell("Overlap")]);
        for (label, overlap) in pairs {
            table.add_row(vec![Cell::new(label), ui::value_cell(*overlap)]);
        }
        output.push('\n');
        output.push_str(&table.to_string());
        output.push('\n');
    }

    // Weighted sector exposure, largest first.
    if !result.weighted_sector_exposure.is_empty() {
        let mut sectors: Vec<_> = result.weighted_sector_exposure.iter().collect();
        sectors.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap());

        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Sector"),
            ui::header_cell("Weighted Exposure"),
        ]);
        for (sector, exposure) in sectors {
            table.add_row(vec![Cell::new(sector), ui::value_cell(*exposure)]);
        }
        output.push('\n');
        output.push_str(&table.to_string());
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::{Customer, Fund};
    use std::collections::HashMap;

    fn sample_dataset() -> Dataset {
        let mut holdings = HashMap::new();
        holdings.insert("AAPL".to_string(), 0.4);
        let mut sectors = HashMap::new();
        sectors.insert("Tech".to_string(), 0.6);
        sectors.insert("Health".to_string(), 0.4);

        Dataset::new(vec![Customer {
            client_id: Some("C001".to_string()),
            currency: Some("USD".to_string()),
            funds: vec![
                Fund {
                    fund_code: Some("F1".to_string()),
                    amount: 100.0,
                    holdings: holdings.clone(),
                    sectors: sectors.clone(),
                },
                Fund {
                    fund_code: Some("F2".to_string()),
                    amount: 50.0,
                    holdings,
                    sectors,
                },
            ],
        }])
    }

    #[test]
    fn test_analyze_command_runs() {
        let dataset = sample_dataset();
        assert!(run(&dataset, Some("C001"), false, None).is_ok());
        assert!(run(&dataset, Some("C001"), true, None).is_ok());
    }

    #[test]
    fn test_analyze_command_propagates_engine_errors() {
        let dataset = sample_dataset();
        let err = run(&dataset, Some("C999"), false, None).unwrap_err();
        assert!(err.to_string().contains("not found"));

        let err = run(&dataset, None, false, None).unwrap_err();
        assert!(err.to_string().contains("client id is required"));
    }

    #[test]
    fn test_render_includes_scores_and_maps() {
        let dataset = sample_dataset();
        let result = diversify::analyze(&dataset, Some("C001")).unwrap();
        let rendered = render_tables(&result, None);
        assert!(rendered.contains("C001"));
        assert!(rendered.contains("F1 vs F2"));
        assert!(rendered.contains("Tech"));
    }

    #[test]
    fn test_render_uses_fallback_currency() {
        let dataset = Dataset::new(vec![Customer {
            client_id: Some("C002".to_string()),
            currency: None,
            funds: vec![Fund {
                fund_code: None,
                amount: 10.0,
                holdings: HashMap::new(),
                sectors: HashMap::new(),
            }],
        }]);
        let result = diversify::analyze(&dataset, Some("C002")).unwrap();
        let rendered = render_tables(&result, Some("EUR"));
        assert!(rendered.contains("(EUR)"));
    }
}
