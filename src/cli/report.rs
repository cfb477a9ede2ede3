use super::ui;
use crate::core::dataset::Dataset;
use crate::core::diversify;
use anyhow::Result;
use comfy_table::Cell;

/// Scores every selectable customer in the dataset and prints a
/// one-line-per-customer summary. Customers that cannot be scored
/// (e.g. an empty fund list) are shown with their failure instead of
/// aborting the whole report.
pub fn run(dataset: &Dataset) -> Result<()> {
    let client_ids = dataset.client_ids();

    let pb = ui::new_progress_bar(client_ids.len() as u64, true);
    pb.set_message("Scoring customers...");

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Client Id"),
        ui::header_cell("Funds"),
        ui::header_cell("Overlap"),
        ui::header_cell("Sector"),
        ui::header_cell("Final"),
    ]);

    let mut scored = 0usize;
    for &client_id in &client_ids {
        // First match in dataset order; duplicates resolve the same way
        // a single analysis would.
        let funds = dataset
            .find_customer(client_id)
            .map(|c| c.funds.len())
            .unwrap_or(0);

        match diversify::analyze(dataset, Some(client_id)) {
            Ok(result) => {
                table.add_row(vec![
                    Cell::new(client_id),
                    Cell::new(funds),
                    ui::score_cell(result.overlap_score),
                    ui::score_cell(result.sector_score),
                    ui::score_cell(result.final_score),
                ]);
                scored += 1;
            }
            Err(e) => {
                tracing::debug!(client_id, error = %e, "Skipping customer in report");
                table.add_row(vec![
                    Cell::new(client_id),
                    Cell::new(funds),
                    ui::na_cell(true),
                    ui::na_cell(true),
                    ui::na_cell(true),
                ]);
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("{table}");
    println!(
        "\nScored {} of {} customer(s)",
        ui::style_text(&scored.to_string(), ui::StyleType::Value),
        client_ids.len()
    );
    let skipped = client_ids.len() - scored;
    if skipped > 0 {
        println!(
            "{}",
            ui::style_text(
                &format!("{skipped} customer(s) could not be scored"),
                ui::StyleType::Error
            )
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::{Customer, Fund};
    use std::collections::HashMap;

    #[test]
    fn test_report_tolerates_unscorable_customers() {
        let mut sectors = HashMap::new();
        sectors.insert("Tech".to_string(), 0.5);

        let dataset = Dataset::new(vec![
            Customer {
                client_id: Some("C001".to_string()),
                currency: None,
                funds: vec![Fund {
                    fund_code: Some("F1".to_string()),
                    amount: 100.0,
                    holdings: HashMap::new(),
                    sectors,
                }],
            },
            // No funds: listed in the report with N/A scores.
            Customer {
                client_id: Some("C002".to_string()),
                currency: None,
                funds: vec![],
            },
        ]);

        assert!(run(&dataset).is_ok());
    }
}
