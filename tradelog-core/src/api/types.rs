//! Wire types for API payloads.
//!
//! Field names mirror the server's JSON exactly; unknown fields are ignored
//! so the client survives additive server changes.

use serde::{Deserialize, Serialize};

/// `POST /auth/login` success body.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Generic `{message}` body the server uses for failures and confirmations.
#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// `GET /auth/user` body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiUser {
    pub id: i64,
    pub username: String,
    pub avatar: Option<String>,
}

/// One trade row as the server returns it from `/trades/`.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeRow {
    pub id: i64,
    pub ticker: String,
    /// `"win"` or `"loss"`. Authoritative, not derived from pnl.
    pub result: String,
    pub total_pnl: f64,
    pub entry_datetime: String,
    pub exit_datetime: String,
    #[serde(default)]
    pub risk_reward: Option<f64>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub trade_note: Option<String>,
    #[serde(default)]
    pub screenshot_filename: Option<String>,
}

impl TradeRow {
    pub fn is_win(&self) -> bool {
        self.result == "win"
    }
}

/// `GET /trades/` envelope.
#[derive(Debug, Deserialize)]
pub struct TradeListResponse {
    pub trades: Vec<TradeRow>,
}

/// One note row from `/notes/`.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

/// `GET /notes/` envelope.
#[derive(Debug, Deserialize)]
pub struct NoteListResponse {
    pub notes: Vec<NoteRow>,
}

/// JSON body for creating or updating a note.
#[derive(Debug, Clone, Serialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

/// One playbook row from `/playbooks/` (list shape; the detail endpoint
/// adds rules/confluences, which deserialize into the same struct as None).
#[derive(Debug, Clone, Deserialize)]
pub struct PlaybookRow {
    pub playbook_id: String,
    pub title: String,
    pub entry_model: String,
    pub trade_model: String,
    pub setup_grade: String,
    #[serde(default)]
    pub rules: Option<String>,
    #[serde(default)]
    pub roadmap: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// `GET /playbooks/` envelope.
#[derive(Debug, Deserialize)]
pub struct PlaybookListResponse {
    pub playbooks: Vec<PlaybookRow>,
}

/// One calendar day from `GET /events`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventDay {
    pub date: String,
    pub events: Vec<EventItem>,
}

/// One market event (earnings release, data print).
#[derive(Debug, Clone, Deserialize)]
pub struct EventItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub time: String,
    #[serde(default)]
    pub symbol: Option<String>,
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_row_deserializes_server_shape() {
        let json = r#"{
            "id": 7,
            "ticker": "AAPL",
            "result": "win",
            "total_pnl": 250.0,
            "entry_datetime": "2025-09-01T09:30:00Z",
            "exit_datetime": "2025-09-01T10:15:00Z",
            "risk_reward": 2.5,
            "position": "long",
            "stoploss_pips": 12,
            "trade_note": "Good entry on breakout.",
            "screenshot_filename": "aapl_0901.png"
        }"#;
        let row: TradeRow = serde_json::from_str(json).unwrap();
        assert!(row.is_win());
        assert_eq!(row.total_pnl, 250.0);
        // stoploss_pips is unknown to the client and silently ignored.
    }

    #[test]
    fn event_day_deserializes_mock_shape() {
        let json = r#"{
            "date": "2024-07-22",
            "events": [
                {"type": "earnings", "time": "BMO", "symbol": "UEC", "details": "UEC Earnings"},
                {"type": "data", "time": "08:30", "details": "Chicago Fed National Activity Index"}
            ]
        }"#;
        let day: EventDay = serde_json::from_str(json).unwrap();
        assert_eq!(day.events.len(), 2);
        assert_eq!(day.events[0].symbol.as_deref(), Some("UEC"));
        assert!(day.events[1].symbol.is_none());
    }
}
