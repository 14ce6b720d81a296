//! Machine-readable run reports.
//!
//! When `--json` is passed, a single report for the whole run is printed to
//! stdout. Human-facing status lines always go to stderr (see
//! [`output`](crate::output)), so stdout stays parseable.

use serde::Serialize;

use crate::error::{Result, VeilError};

/// Summary of one CLI run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Subcommand that produced the report ("simulate" or "reveal").
    pub command: &'static str,

    /// Deficiency category, for simulate runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deficiency: Option<String>,

    /// One entry per written output image.
    pub outputs: Vec<FileReport>,
}

/// Summary of one processed image.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub input: String,
    pub output: String,
    pub width: u32,
    pub height: u32,
    pub mode: String,
}

impl RunReport {
    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| VeilError::Parse {
            message: format!("Failed to serialize run report: {}", e),
            help: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json_shape() {
        let report = RunReport {
            command: "simulate",
            deficiency: Some("red".to_string()),
            outputs: vec![FileReport {
                input: "assets/player.png".to_string(),
                output: "dist/player.red.png".to_string(),
                width: 32,
                height: 48,
                mode: "RGB".to_string(),
            }],
        };

        insta::assert_snapshot!(report.to_json_pretty().unwrap(), @r###"
        {
          "command": "simulate",
          "deficiency": "red",
          "outputs": [
            {
              "input": "assets/player.png",
              "output": "dist/player.red.png",
              "width": 32,
              "height": 48,
              "mode": "RGB"
            }
          ]
        }
        "###);
    }

    #[test]
    fn test_reveal_report_omits_deficiency() {
        let report = RunReport {
            command: "reveal",
            deficiency: None,
            outputs: vec![],
        };
        let json = report.to_json_pretty().unwrap();
        assert!(!json.contains("deficiency"));
        assert!(json.contains("\"command\": \"reveal\""));
    }
}
