//! Response helpers shared by the route handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use casa_core::DateRange;
use casa_shared::AppError;
use casa_shared::types::Money;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, warn};

/// Flash notification kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    /// The mutation went through.
    Success,
    /// The mutation was rejected.
    Error,
}

/// Flash notification answered by every mutation.
#[derive(Debug, Clone, Serialize)]
pub struct Flash {
    /// Text shown to the user.
    pub message: String,
    /// Success or error.
    pub kind: FlashKind,
}

/// Amount paired with its BRL rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoneyView {
    /// Exact amount.
    pub value: Decimal,
    /// Display text, e.g. `R$ 1.234,56`.
    pub formatted: String,
}

impl From<Decimal> for MoneyView {
    fn from(value: Decimal) -> Self {
        Self {
            value,
            formatted: Money::new(value).to_string(),
        }
    }
}

/// Optional inclusive date range taken from the query string.
///
/// Empty parameters count as absent, so a cleared date input keeps working.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    /// First day, `YYYY-MM-DD`.
    pub start: Option<String>,
    /// Last day, `YYYY-MM-DD`.
    pub end: Option<String>,
}

impl RangeQuery {
    /// Parses and validates the range.
    pub fn to_range(&self) -> Result<DateRange, AppError> {
        parse_range(self.start.as_deref(), self.end.as_deref())
    }
}

/// Parses optional `YYYY-MM-DD` bounds, rejecting an inverted range.
pub fn parse_range(start: Option<&str>, end: Option<&str>) -> Result<DateRange, AppError> {
    let range = DateRange {
        start: parse_date("start", start)?,
        end: parse_date("end", end)?,
    };
    range.validate()?;
    Ok(range)
}

fn parse_date(field: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| AppError::Validation(format!("Invalid {field} date: {raw}")))
}

fn status_of(err: &AppError) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Maps an application error to a JSON error response.
pub fn error_response(err: &AppError) -> Response {
    let status = status_of(err);
    if status.is_server_error() {
        error!(error = %err, "Request failed");
    }
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.message()
        })),
    )
        .into_response()
}

/// Answers a successful mutation.
pub fn flash_success(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(Flash {
            message: message.to_string(),
            kind: FlashKind::Success,
        }),
    )
        .into_response()
}

/// Answers a rejected mutation.
///
/// Messages from the household API or the entry rules are shown as-is;
/// `fallback` replaces them when the household API could not be reached.
pub fn flash_error(err: &AppError, fallback: &str) -> Response {
    let status = status_of(err);
    let message = match err {
        AppError::ExternalService(_) => {
            error!(error = %err, "Mutation failed");
            fallback
        }
        _ => {
            warn!(error = %err, "Mutation rejected");
            err.message()
        }
    };
    (
        status,
        Json(Flash {
            message: message.to_string(),
            kind: FlashKind::Error,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn range(start: Option<&str>, end: Option<&str>) -> RangeQuery {
        RangeQuery {
            start: start.map(str::to_string),
            end: end.map(str::to_string),
        }
    }

    #[test]
    fn test_blank_parameters_are_unbounded() {
        let parsed = range(Some(""), Some("  ")).to_range().unwrap();
        assert!(parsed.is_unbounded());
    }

    #[test]
    fn test_dates_are_parsed() {
        let parsed = range(Some("2024-01-01"), Some("2024-01-31"))
            .to_range()
            .unwrap();
        assert_eq!(parsed.start, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(parsed.end, NaiveDate::from_ymd_opt(2024, 1, 31));
    }

    #[rstest]
    #[case(Some("2024-02-01"), Some("2024-01-01"))]
    #[case(Some("01/02/2024"), None)]
    #[case(None, Some("2024-13-01"))]
    fn test_bad_ranges_are_validation_errors(
        #[case] start: Option<&str>,
        #[case] end: Option<&str>,
    ) {
        let err = range(start, end).to_range().unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_money_view_formats_brl() {
        let view = MoneyView::from(dec!(1234.5));
        assert_eq!(view.value, dec!(1234.5));
        assert_eq!(view.formatted, "R$ 1.234,50");
    }
}
