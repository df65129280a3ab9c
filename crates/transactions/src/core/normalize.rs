use tronex_common::{
    constants::NATIVE_SYMBOL,
    resources::tronscan::{RawTransaction, Trc20Transfer},
    tokens::{contract_type_label, resolve_decimals, symbol_for_contract},
    utils::{decimal::scale_amount, time::format_millis},
};

use crate::interfaces::{TransactionRecord, TransactionStatus};

/// Flattens an explorer transaction into a [`TransactionRecord`] tagged with `wallet`.
///
/// The raw amount is taken from `amount`, else `value`, else `contractData.amount`, else `"0"`.
/// A known token contract address decides the symbol, and the symbol decides the decimal scale;
/// the explorer's own decimals are only used for tokens missing from the metadata tables.
pub fn normalize(raw: RawTransaction, wallet: &str) -> TransactionRecord {
    let value = [raw.amount, raw.value, raw.contract_data.and_then(|c| c.amount)]
        .into_iter()
        .flatten()
        .map(|amount| amount.trim().to_string())
        .find(|amount| !amount.is_empty())
        .unwrap_or_else(|| "0".to_string());

    let token = raw.token_info.unwrap_or_default();
    let contract_address = raw.contract_address.unwrap_or_default();
    let token_symbol = symbol_for_contract(&contract_address)
        .map(str::to_string)
        .or(token.token_abbr)
        .filter(|symbol| !symbol.trim().is_empty())
        .unwrap_or_else(|| NATIVE_SYMBOL.to_string());
    let token_name = token.token_name.unwrap_or_else(|| NATIVE_SYMBOL.to_string());
    let decimals = resolve_decimals(&token_symbol.to_uppercase(), token.token_decimal);

    let timestamp = raw.timestamp.unwrap_or_default();

    TransactionRecord {
        wallet: wallet.to_string(),
        hash: raw.hash.unwrap_or_default(),
        block_number: raw.block.unwrap_or_default(),
        timestamp,
        from_address: raw.owner_address.unwrap_or_default(),
        to_address: raw.to_address.unwrap_or_default(),
        amount: scale_amount(&value, decimals),
        value,
        token_name,
        token_symbol,
        decimals,
        contract_address,
        fee: raw.cost.and_then(|c| c.net_fee).unwrap_or_else(|| "0".to_string()),
        status: TransactionStatus::from(raw.confirmed),
        transaction_type: contract_type_label(raw.contract_type.unwrap_or_default()),
        date: format_millis(timestamp),
        usd_value: None,
        unit_price: None,
    }
}

/// Expands an explorer transaction into one record per TRC-20 transfer it emitted. A
/// transaction without TRC-20 transfers yields the single [`normalize`]d record.
pub fn normalize_transfers(mut raw: RawTransaction, wallet: &str) -> Vec<TransactionRecord> {
    let transfers = raw.trc20_transfer_info.take().unwrap_or_default();
    let base = normalize(raw, wallet);
    if transfers.is_empty() {
        return vec![base];
    }

    transfers.into_iter().map(|transfer| transfer_record(&base, transfer)).collect()
}

/// The transaction-level fields come from `base`, everything about the moved token from
/// `transfer`.
fn transfer_record(base: &TransactionRecord, transfer: Trc20Transfer) -> TransactionRecord {
    let contract_address = transfer.contract_address.unwrap_or_default();
    let token_symbol = symbol_for_contract(&contract_address)
        .map(str::to_string)
        .or(transfer.symbol.map(|symbol| symbol.trim().to_uppercase()))
        .filter(|symbol| !symbol.is_empty())
        .unwrap_or_else(|| NATIVE_SYMBOL.to_string());
    let decimals = resolve_decimals(&token_symbol, transfer.decimals);

    let value = transfer
        .amount_str
        .map(|amount| amount.trim().to_string())
        .filter(|amount| !amount.is_empty())
        .unwrap_or_else(|| "0".to_string());

    TransactionRecord {
        from_address: transfer.from_address.unwrap_or_default(),
        to_address: transfer.to_address.unwrap_or_default(),
        amount: scale_amount(&value, decimals),
        value,
        token_name: transfer
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| token_symbol.clone()),
        token_symbol,
        decimals,
        contract_address,
        ..base.clone()
    }
}
