use tronex_common::utils::strings::csv_escape;

use crate::interfaces::TransactionRecord;

const COLUMNS: [&str; 15] = [
    "Wallet",
    "Hash",
    "Block Number",
    "Timestamp",
    "From Address",
    "To Address",
    "Value",
    "Amount",
    "Token Name",
    "Token Symbol",
    "Contract Address",
    "Fee",
    "Status",
    "Transaction Type",
    "Date",
];

const ENRICHED_COLUMNS: [&str; 2] = ["USD Value", "Unit Price"];

/// The CSV header line, with the USD columns when `enriched`.
pub fn csv_header(enriched: bool) -> String {
    let mut columns = COLUMNS.to_vec();
    if enriched {
        columns.extend(ENRICHED_COLUMNS);
    }
    columns.join(",")
}

fn csv_row(record: &TransactionRecord, enriched: bool) -> String {
    let mut fields = vec![
        record.wallet.clone(),
        record.hash.clone(),
        record.block_number.to_string(),
        record.timestamp.to_string(),
        record.from_address.clone(),
        record.to_address.clone(),
        record.value.clone(),
        record.amount.clone(),
        record.token_name.clone(),
        record.token_symbol.clone(),
        record.contract_address.clone(),
        record.fee.clone(),
        record.status.to_string(),
        record.transaction_type.clone(),
        record.date.clone(),
    ];
    if enriched {
        fields.push(record.usd_value.clone().unwrap_or_default());
        fields.push(record.unit_price.clone().unwrap_or_default());
    }

    fields.iter().map(|field| csv_escape(field)).collect::<Vec<_>>().join(",")
}

/// Renders `records` as CSV lines, header first. The USD columns are included when `enriched`;
/// records without a valuation leave them empty.
pub fn render_csv(records: &[TransactionRecord], enriched: bool) -> Vec<String> {
    std::iter::once(csv_header(enriched))
        .chain(records.iter().map(|record| csv_row(record, enriched)))
        .collect()
}
