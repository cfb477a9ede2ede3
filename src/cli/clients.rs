use super::ui;
use crate::core::dataset::Dataset;
use anyhow::Result;
use comfy_table::Cell;

/// Prints the selectable client list for the loaded dataset. Records
/// without a `clientId` are kept in the dataset but not listed.
pub fn run(dataset: &Dataset) -> Result<()> {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Client Id"),
        ui::header_cell("Currency"),
        ui::header_cell("Funds"),
    ]);

    let mut listed = 0usize;
    for customer in dataset.customers() {
        let Some(client_id) = customer.client_id.as_deref() else {
            continue;
        };
        let currency = customer
            .currency
            .as_deref()
            .map(Cell::new)
            .unwrap_or_else(|| ui::na_cell(false));
        table.add_row(vec![
            Cell::new(client_id),
            currency,
            Cell::new(customer.funds.len()),
        ]);
        listed += 1;
    }

    println!("{table}");

    let skipped = dataset.customers().len() - listed;
    if skipped > 0 {
        println!(
            "{}",
            ui::style_text(
                &format!("{skipped} record(s) without a clientId were skipped"),
                ui::StyleType::Subtle
            )
        );
    }

    Ok(())
}
