//! Replay file record types.
//!
//! Each line of a replay file is one JSON object tagged by `type`. Numeric
//! fields are strings, as broker real-time APIs deliver them: they may carry
//! a leading sign and surrounding whitespace.
//!
//! ```json
//! {"type":"daily_high","code":"005930","high":"70000"}
//! {"type":"screening","code":"000660","name":"SK hynix","turnover":"512300000000","price":"+182000","change_pct":"+12.30"}
//! {"type":"depth","code":"005930","asks":[["-70000","3000"],["70100","120"]]}
//! {"type":"trade","code":"005930","price":"+70100","volume":"10"}
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{
    normalize_price, DailyBar, DepthLevel, DepthSnapshot, InstrumentCode, ScreeningEntry,
    TradeTick,
};
use crate::error::EventError;
use crate::port::MarketEvent;

/// One line of a replay file.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayRecord {
    DailyHigh(RawDailyHigh),
    Screening(RawScreening),
    Depth(RawDepth),
    Trade(RawTrade),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDailyHigh {
    pub code: String,
    pub high: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawScreening {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub turnover: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub change_pct: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDepth {
    pub code: String,
    /// `[price, volume]` pairs, best ask first.
    pub asks: Vec<(String, String)>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTrade {
    pub code: String,
    pub price: String,
    pub volume: String,
}

fn parse_code(raw: &str) -> Result<InstrumentCode, EventError> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(EventError::Malformed {
            code: None,
            field: "code",
            value: raw.to_string(),
        });
    }
    Ok(InstrumentCode::new(code))
}

fn parse_int(code: &InstrumentCode, field: &'static str, raw: &str) -> Result<i64, EventError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| EventError::malformed(code.as_str(), field, raw))
}

fn parse_decimal(
    code: &InstrumentCode,
    field: &'static str,
    raw: &str,
) -> Result<Decimal, EventError> {
    Decimal::from_str(raw.trim()).map_err(|_| EventError::malformed(code.as_str(), field, raw))
}

/// Screening queries report blank cells for instruments that have not traded;
/// those read as zero.
fn parse_decimal_or_zero(
    code: &InstrumentCode,
    field: &'static str,
    raw: &str,
) -> Result<Decimal, EventError> {
    if raw.trim().is_empty() {
        return Ok(Decimal::ZERO);
    }
    parse_decimal(code, field, raw)
}

fn parse_int_or_zero(
    code: &InstrumentCode,
    field: &'static str,
    raw: &str,
) -> Result<i64, EventError> {
    if raw.trim().is_empty() {
        return Ok(0);
    }
    parse_int(code, field, raw)
}

impl RawDailyHigh {
    pub fn decode(&self) -> Result<DailyBar, EventError> {
        let code = parse_code(&self.code)?;
        let high = parse_decimal(&code, "high", &self.high)?.abs();
        Ok(DailyBar { code, high })
    }
}

impl RawScreening {
    pub fn decode(&self) -> Result<ScreeningEntry, EventError> {
        let code = parse_code(&self.code)?;
        let turnover = parse_int_or_zero(&code, "turnover", &self.turnover)?;
        let price = normalize_price(parse_int_or_zero(&code, "price", &self.price)?);
        let change_pct = parse_decimal_or_zero(&code, "change_pct", &self.change_pct)?;

        Ok(ScreeningEntry {
            code,
            name: self.name.trim().to_string(),
            turnover,
            price,
            change_pct,
        })
    }
}

impl RawDepth {
    pub fn decode(&self) -> Result<DepthSnapshot, EventError> {
        let code = parse_code(&self.code)?;
        let asks = self
            .asks
            .iter()
            .map(|(price, volume)| {
                Ok(DepthLevel::new(
                    parse_int(&code, "ask_price", price)?,
                    parse_int(&code, "ask_volume", volume)?,
                ))
            })
            .collect::<Result<Vec<_>, EventError>>()?;

        Ok(DepthSnapshot::new(code, asks))
    }
}

impl RawTrade {
    pub fn decode(&self) -> Result<TradeTick, EventError> {
        let code = parse_code(&self.code)?;
        let price = parse_int(&code, "price", &self.price)?;
        let volume = parse_int(&code, "volume", &self.volume)?;
        Ok(TradeTick::new(code, price, volume))
    }
}

/// A depth or trade line waiting to be decoded.
#[derive(Debug, Clone)]
pub enum MarketRecord {
    Depth(RawDepth),
    Trade(RawTrade),
}

impl MarketRecord {
    /// The raw code with whitespace trimmed.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Depth(raw) => raw.code.trim(),
            Self::Trade(raw) => raw.code.trim(),
        }
    }

    pub fn decode(&self) -> Result<MarketEvent, EventError> {
        match self {
            Self::Depth(raw) => raw.decode().map(MarketEvent::Depth),
            Self::Trade(raw) => raw.decode().map(MarketEvent::Trade),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(line: &str) -> ReplayRecord {
        serde_json::from_str(line).unwrap()
    }

    #[test]
    fn decodes_depth_with_signed_prices() {
        let ReplayRecord::Depth(raw) =
            parse(r#"{"type":"depth","code":"005930","asks":[["-70000"," 3000 "],["70100","120"]]}"#)
        else {
            panic!("expected depth record");
        };

        let snapshot = raw.decode().unwrap();

        assert_eq!(snapshot.code().as_str(), "005930");
        assert_eq!(snapshot.asks()[0], DepthLevel::new(70_000, 3_000));
        assert_eq!(snapshot.asks()[1].price(), 70_100);
    }

    #[test]
    fn decodes_trade_keeping_volume_sign() {
        let ReplayRecord::Trade(raw) =
            parse(r#"{"type":"trade","code":"005930","price":"+70100","volume":"-10"}"#)
        else {
            panic!("expected trade record");
        };

        let tick = raw.decode().unwrap();

        assert_eq!(tick.price(), 70_100);
        assert_eq!(tick.volume(), -10);
    }

    #[test]
    fn unparseable_trade_field_is_malformed() {
        let raw = RawTrade {
            code: "005930".into(),
            price: "70,100".into(),
            volume: "10".into(),
        };

        match raw.decode() {
            Err(EventError::Malformed { code, field, value }) => {
                assert_eq!(code.as_deref(), Some("005930"));
                assert_eq!(field, "price");
                assert_eq!(value, "70,100");
            }
            other => panic!("expected malformed, got {other:?}"),
        }
    }

    #[test]
    fn empty_depth_volume_is_malformed() {
        let raw = RawDepth {
            code: "005930".into(),
            asks: vec![("70000".into(), "".into())],
        };
        assert!(matches!(
            raw.decode(),
            Err(EventError::Malformed { field: "ask_volume", .. })
        ));
    }

    #[test]
    fn blank_code_is_malformed() {
        let raw = RawTrade {
            code: "  ".into(),
            price: "70000".into(),
            volume: "1".into(),
        };
        assert!(matches!(
            raw.decode(),
            Err(EventError::Malformed { code: None, field: "code", .. })
        ));
    }

    #[test]
    fn screening_blank_cells_read_as_zero() {
        let raw = RawScreening {
            code: "000660".into(),
            name: " SK hynix ".into(),
            turnover: "".into(),
            price: "-182000".into(),
            change_pct: "".into(),
        };

        let entry = raw.decode().unwrap();

        assert_eq!(entry.name, "SK hynix");
        assert_eq!(entry.turnover, 0);
        assert_eq!(entry.price, 182_000);
        assert_eq!(entry.change_pct, Decimal::ZERO);
    }

    #[test]
    fn screening_change_keeps_sign() {
        let ReplayRecord::Screening(raw) = parse(
            r#"{"type":"screening","code":"000660","name":"SK hynix","turnover":"512300000000","price":"182000","change_pct":"-12.30"}"#,
        ) else {
            panic!("expected screening record");
        };

        assert_eq!(raw.decode().unwrap().change_pct, dec!(-12.30));
    }

    #[test]
    fn daily_high_decodes_decimal() {
        let raw = RawDailyHigh {
            code: "005930".into(),
            high: "+70000".into(),
        };
        assert_eq!(raw.decode().unwrap().high, dec!(70000));
    }

    #[test]
    fn unknown_record_type_fails_to_parse() {
        let result = serde_json::from_str::<ReplayRecord>(r#"{"type":"quote","code":"005930"}"#);
        assert!(result.is_err());
    }
}
