//! Telemetry session data: the ordered list of recorded positions a replay
//! walks through.
//!
//! The wire format is a bare JSON array of sample records. Some tooling wraps
//! the array in an `{"Items": [...]}` envelope because its JSON parser only
//! accepts an object root; both shapes are accepted on load.

use std::path::Path;

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// One recorded observation of an entity's position.
///
/// The key fields are provenance metadata, opaque to the replay logic. `date`
/// is carried through but never used for timing — the tick cadence is fixed,
/// not sample-derived.
#[derive(Debug, Clone, Serialize, Deserialize, Encode, Decode, PartialEq)]
pub struct TelemetrySample {
    pub meeting_key: u32,
    pub session_key: u32,
    pub driver_number: u32,
    pub date: String,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// An ordered, immutable-after-load sequence of samples.
///
/// Samples are consumed strictly in stored order; no reordering, filtering,
/// or deduplication happens anywhere in the replay path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Encode, Decode, PartialEq)]
pub struct TelemetrySession {
    samples: Vec<TelemetrySample>,
}

/// Envelope shape produced by object-root-only JSON parsers.
#[derive(Deserialize)]
struct WrappedSession {
    #[serde(rename = "Items")]
    items: Vec<TelemetrySample>,
}

impl TelemetrySession {
    pub fn new(samples: Vec<TelemetrySample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[TelemetrySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Parse a session from JSON.
    ///
    /// The canonical shape is a bare array of records; the `{"Items": [...]}`
    /// envelope is accepted as a fallback. On failure the bare-array error is
    /// reported, since that is the documented contract.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let bare_err = match serde_json::from_str::<Vec<TelemetrySample>>(json) {
            Ok(samples) => return Ok(Self::new(samples)),
            Err(e) => e,
        };
        match serde_json::from_str::<WrappedSession>(json) {
            Ok(wrapped) => Ok(Self::new(wrapped.items)),
            Err(_) => Err(format!("JSON decode error: {bare_err}")),
        }
    }

    /// Serialize to pretty JSON (the bare-array shape) for debugging output.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.samples)
            .unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }

    /// Encode the session to compact binary bytes via bitcode.
    pub fn to_bytes(&self) -> Vec<u8> {
        bitcode::encode(self)
    }

    /// Decode a session from bitcode bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        bitcode::decode(bytes).map_err(|e| format!("bitcode decode error: {e}"))
    }
}

/// Read and parse a session file from disk.
///
/// A missing file and malformed data both surface as `Err`; the caller logs
/// and leaves the session empty, so the driver never starts. No retries —
/// load failure is terminal for that scene instance.
pub fn load_session_file(path: &Path) -> Result<TelemetrySession, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read session file '{}': {e}", path.display()))?;
    TelemetrySession::from_json(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample(driver_number: u32, x: f32, y: f32, z: f32) -> TelemetrySample {
        TelemetrySample {
            meeting_key: 1219,
            session_key: 9161,
            driver_number,
            date: "2023-09-16T13:30:01.000Z".to_string(),
            x,
            y,
            z,
        }
    }

    const BARE_ARRAY: &str = r#"[
        {"meeting_key": 1219, "session_key": 9161, "driver_number": 1,
         "date": "2023-09-16T13:30:01.000Z", "x": 1500.0, "y": 0.0, "z": 0.0},
        {"meeting_key": 1219, "session_key": 9161, "driver_number": 1,
         "date": "2023-09-16T13:30:01.250Z", "x": 0.0, "y": 1500.0, "z": 0.0},
        {"meeting_key": 1219, "session_key": 9161, "driver_number": 1,
         "date": "2023-09-16T13:30:01.500Z", "x": 0.0, "y": 0.0, "z": 1500.0}
    ]"#;

    #[test]
    fn bare_array_parses_in_order() {
        let session = TelemetrySession::from_json(BARE_ARRAY).expect("parse should succeed");
        assert_eq!(session.len(), 3);
        assert_eq!(session.samples()[0].x, 1500.0);
        assert_eq!(session.samples()[1].y, 1500.0);
        assert_eq!(session.samples()[2].z, 1500.0);
    }

    #[test]
    fn items_envelope_parses() {
        let wrapped = format!("{{\"Items\": {BARE_ARRAY}}}");
        let session = TelemetrySession::from_json(&wrapped).expect("parse should succeed");
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn malformed_json_reports_bare_array_error() {
        let err = TelemetrySession::from_json("{\"nope\": 1}").unwrap_err();
        assert!(err.contains("JSON decode error"));
    }

    #[test]
    fn json_roundtrip() {
        let original = TelemetrySession::new(vec![sample(1, 1500.0, 0.0, 0.0)]);
        let decoded = TelemetrySession::from_json(&original.to_json()).expect("roundtrip");
        assert_eq!(original, decoded);
    }

    #[test]
    fn bitcode_roundtrip() {
        let original = TelemetrySession::new(vec![
            sample(1, 1500.0, 0.0, 0.0),
            sample(44, -300.0, 4500.0, 12.5),
        ]);
        let decoded =
            TelemetrySession::from_bytes(&original.to_bytes()).expect("decode should succeed");
        assert_eq!(original, decoded);
    }

    #[test]
    fn missing_file_is_an_error_not_a_panic() {
        let err = load_session_file(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(err.contains("cannot read session file"));
    }

    #[test]
    fn load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(BARE_ARRAY.as_bytes()).expect("write");
        let session = load_session_file(file.path()).expect("load should succeed");
        assert_eq!(session.len(), 3);
    }
}
