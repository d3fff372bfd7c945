use trading_journal::models::{AssetType, NewTrade, OrderType};

/// Creation payload with journal-typical defaults.
pub fn payload(
    asset_name: &str,
    platform_id: &str,
    order_type: OrderType,
    entry: f64,
    exit: f64,
    qty: f64,
    tags: &[&str],
) -> NewTrade {
    NewTrade {
        asset_name: asset_name.to_string(),
        asset_type: match platform_id {
            "ajaib" | "stockbit" | "ipot" | "mirae" | "gotrade" | "interactive_brokers" => {
                AssetType::Stock
            }
            _ => AssetType::Crypto,
        },
        platform_id: platform_id.to_string(),
        order_type,
        entry_price: entry,
        exit_price: exit,
        quantity: qty,
        notes: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}
