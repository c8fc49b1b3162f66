//! Report rendering for billing results.
//!
//! The text report is the tool's output contract: one
//! `USERNAME SESSIONS SECONDS` line per user, in first-seen order.
//! `--json` selects a structured variant with the orphan breakdown.

use anyhow::Result;
use fb_core::{Landmarks, ResultSet};
use serde::Serialize;

/// Formats the plain-text report.
pub fn format_report(results: &ResultSet) -> String {
    results
        .iter()
        .map(|summary| {
            format!(
                "{} {} {}\n",
                summary.username, summary.session_count, summary.total_duration_secs
            )
        })
        .collect()
}

// ========== JSON Output ==========

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub landmarks: Option<Landmarks>,
    pub users: Vec<JsonUser>,
}

#[derive(Debug, Serialize)]
pub struct JsonUser {
    pub username: String,
    pub session_count: u64,
    pub total_duration_secs: u64,
    pub closed_sessions: u64,
    pub orphaned_starts: u64,
    pub orphaned_ends: u64,
}

/// Formats billing results as JSON.
pub fn format_report_json(results: &ResultSet, landmarks: Option<Landmarks>) -> Result<String> {
    let report = JsonReport {
        landmarks,
        users: results
            .iter()
            .map(|s| JsonUser {
                username: s.username.to_string(),
                session_count: s.session_count,
                total_duration_secs: s.total_duration_secs,
                closed_sessions: s.closed_sessions,
                orphaned_starts: s.orphaned_starts,
                orphaned_ends: s.orphaned_ends,
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fb_core::{EventKind, EventStream, bill};
    use fb_core::{Event, Timestamp, Username};
    use insta::assert_snapshot;

    fn entry(seconds: u32, user: &str, kind: EventKind) -> Event {
        Event::new(
            Timestamp::from_seconds(seconds).unwrap(),
            Username::new(user).unwrap(),
            kind,
        )
    }

    fn mixed_stream() -> EventStream {
        EventStream::from_events([
            entry(50523, "ALICE99", EventKind::Start),
            entry(50525, "CHARLIE", EventKind::End),
            entry(50554, "ALICE99", EventKind::End),
            entry(50578, "ALICE99", EventKind::Start),
            entry(50582, "CHARLIE", EventKind::Start),
            entry(50593, "ALICE99", EventKind::Start),
            entry(50595, "ALICE99", EventKind::End),
            entry(50617, "CHARLIE", EventKind::End),
            entry(50645, "ALICE99", EventKind::End),
            entry(50663, "ALICE99", EventKind::End),
            entry(50681, "CHARLIE", EventKind::Start),
        ])
    }

    #[test]
    fn test_report_mixed_users() {
        let output = format_report(&bill(&mixed_stream()));
        assert_eq!(output, "ALICE99 4 240\nCHARLIE 3 37\n");
        assert_snapshot!(output, @r"
        ALICE99 4 240
        CHARLIE 3 37
        ");
    }

    #[test]
    fn test_report_empty() {
        assert_eq!(format_report(&ResultSet::default()), "");
    }

    #[test]
    fn test_report_json_output() {
        let stream = EventStream::from_events([
            entry(50523, "ALICE99", EventKind::Start),
            entry(50554, "ALICE99", EventKind::End),
        ]);
        let output = format_report_json(&bill(&stream), stream.landmarks()).unwrap();
        assert_snapshot!(output, @r#"
        {
          "landmarks": {
            "earliest": "14:02:03",
            "latest": "14:02:34"
          },
          "users": [
            {
              "username": "ALICE99",
              "session_count": 1,
              "total_duration_secs": 31,
              "closed_sessions": 1,
              "orphaned_starts": 0,
              "orphaned_ends": 0
            }
          ]
        }
        "#);
    }

    #[test]
    fn test_report_json_empty() {
        let output = format_report_json(&ResultSet::default(), None).unwrap();
        assert_snapshot!(output, @r#"
        {
          "landmarks": null,
          "users": []
        }
        "#);
    }

    #[test]
    fn test_report_json_preserves_order() {
        let stream = mixed_stream();
        let output = format_report_json(&bill(&stream), stream.landmarks()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let users: Vec<&str> = parsed["users"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["username"].as_str().unwrap())
            .collect();
        assert_eq!(users, vec!["ALICE99", "CHARLIE"]);
        assert_eq!(parsed["users"][1]["orphaned_ends"], 1);
        assert_eq!(parsed["users"][1]["orphaned_starts"], 1);
    }
}
