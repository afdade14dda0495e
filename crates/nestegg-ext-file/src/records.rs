//! Holdings and transaction files.
//!
//! Holdings are read from CSV or JSON, chosen by file extension. CSV columns
//! follow the JSON field names:
//!
//! ```text
//! id,symbol,name,quantity,cost_basis_price,current_price,acquired_at
//! ```
//!
//! Only `symbol`, `quantity` and `cost_basis_price` are required. Transactions
//! are JSON arrays of [`ClosedTransaction`].

use std::fs;
use std::path::Path;

use nestegg_core::{ClosedTransaction, Holding};
use nestegg_traits::error::TraitError;

/// On-disk layout of a record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Comma-separated with a header row.
    Csv,
    /// A JSON array.
    Json,
}

impl FileFormat {
    /// Detect the format from the extension. Anything but `.csv` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

fn parse_error(path: &Path, e: impl std::fmt::Display) -> TraitError {
    TraitError::ParseError(format!("{}: {}", path.display(), e))
}

fn read_csv<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, TraitError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| TraitError::IoError(e.to_string()))?;

    reader
        .deserialize::<T>()
        .enumerate()
        .map(|(row, result)| result.map_err(|e| parse_error(path, format!("row {}: {e}", row + 1))))
        .collect()
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, TraitError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| parse_error(path, e))
}

fn write_csv<T: serde::Serialize>(path: &Path, items: &[T]) -> Result<(), TraitError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| TraitError::IoError(e.to_string()))?;
    for item in items {
        writer.serialize(item).map_err(|e| parse_error(path, e))?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, items: &[T]) -> Result<(), TraitError> {
    let content = serde_json::to_string_pretty(items).map_err(|e| parse_error(path, e))?;
    fs::write(path, content)?;
    Ok(())
}

/// Load holdings from a CSV or JSON file.
///
/// Every row goes through the holding builder, so a negative quantity or
/// price is rejected with the offending symbol in the message.
pub fn load_holdings(path: impl AsRef<Path>) -> Result<Vec<Holding>, TraitError> {
    let path = path.as_ref();
    match FileFormat::from_path(path) {
        FileFormat::Csv => read_csv(path),
        FileFormat::Json => read_json(path),
    }
}

/// Write holdings back in the format chosen by the file extension.
pub fn save_holdings(path: impl AsRef<Path>, holdings: &[Holding]) -> Result<(), TraitError> {
    let path = path.as_ref();
    match FileFormat::from_path(path) {
        FileFormat::Csv => write_csv(path, holdings),
        FileFormat::Json => write_json(path, holdings),
    }
}

/// Load closed transactions from a JSON file. A missing file yields none.
pub fn load_transactions(path: impl AsRef<Path>) -> Result<Vec<ClosedTransaction>, TraitError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }
    read_json(path)
}

/// Write closed transactions as a JSON array.
pub fn save_transactions(
    path: impl AsRef<Path>,
    transactions: &[ClosedTransaction],
) -> Result<(), TraitError> {
    write_json(path.as_ref(), transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn temp_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(FileFormat::from_path(Path::new("a/holdings.CSV")), FileFormat::Csv);
        assert_eq!(FileFormat::from_path(Path::new("holdings.json")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("holdings")), FileFormat::Json);
    }

    #[test]
    fn test_load_holdings_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file(
            &dir,
            "holdings.csv",
            "symbol,name,quantity,cost_basis_price,current_price\n\
             aapl,Apple Inc.,10,150,180\n\
             JPM,,5,140,\n",
        );

        let holdings = load_holdings(&path).unwrap();
        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[0].symbol.as_str(), "AAPL");
        assert_eq!(holdings[0].name, "Apple Inc.");
        assert_eq!(holdings[0].current_price, Some(dec!(180)));
        assert_eq!(holdings[1].current_price, None);
        assert_eq!(holdings[1].market_value().unwrap(), dec!(700));
    }

    #[test]
    fn test_load_holdings_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file(
            &dir,
            "holdings.json",
            r#"[{"id": "h1", "symbol": "MSFT", "quantity": 3, "cost_basis_price": 300,
                 "acquired_at": "2024-01-15T00:00:00Z"}]"#,
        );

        let holdings = load_holdings(&path).unwrap();
        assert_eq!(holdings[0].id.as_deref(), Some("h1"));
        assert_eq!(
            holdings[0].acquired_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_load_holdings_rejects_negative() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file(
            &dir,
            "holdings.csv",
            "symbol,quantity,cost_basis_price\nAAPL,-1,150\n",
        );
        let err = load_holdings(&path).unwrap_err();
        assert!(matches!(err, TraitError::ParseError(ref m) if m.contains("row 1")));
    }

    #[test]
    fn test_load_holdings_missing_file() {
        assert!(matches!(
            load_holdings("/nonexistent/holdings.json"),
            Err(TraitError::IoError(_))
        ));
    }

    #[test]
    fn test_holdings_and_transactions_persist() {
        let dir = tempfile::tempdir().unwrap();
        let holdings_path = dir.path().join("holdings.json");
        let tx_path = dir.path().join("transactions.json");

        let holding = Holding::builder()
            .id("h1")
            .symbol("KO")
            .quantity(dec!(20))
            .cost_basis_price(dec!(55))
            .build()
            .unwrap();
        save_holdings(&holdings_path, std::slice::from_ref(&holding)).unwrap();
        assert_eq!(load_holdings(&holdings_path).unwrap(), vec![holding.clone()]);

        assert!(load_transactions(&tx_path).unwrap().is_empty());
        let sold = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let tx = holding.close(dec!(60), sold).unwrap();
        save_transactions(&tx_path, std::slice::from_ref(&tx)).unwrap();

        let loaded = load_transactions(&tx_path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, tx.id);
        assert_eq!(loaded[0].profit_loss().unwrap(), dec!(100));
    }

    #[test]
    fn test_load_transactions_rejects_negative_quantity() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file(
            &dir,
            "transactions.json",
            r#"[{"symbol": "KO", "quantity": -5, "purchase_price": 55,
                "sale_price": 60, "sale_date": "2025-06-01T00:00:00Z"}]"#,
        );

        let err = load_transactions(&path).unwrap_err();
        assert!(matches!(err, TraitError::ParseError(ref m) if m.contains("quantity must be non-negative")));
    }

    #[test]
    fn test_holdings_csv_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file(
            &dir,
            "holdings.csv",
            "id,symbol,quantity,cost_basis_price,current_price
h1,AAPL,10,150,
h2,KO,20,55.5,61
",
        );

        let mut holdings = load_holdings(&path).unwrap();
        holdings.remove(0);
        save_holdings(&path, &holdings).unwrap();

        let reloaded = load_holdings(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].id.as_deref(), Some("h2"));
        assert_eq!(reloaded[0].cost_basis_price, dec!(55.5));
        assert_eq!(reloaded[0].current_price, Some(dec!(61)));
    }
}
