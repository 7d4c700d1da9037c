//! Deploy records.

use crate::shaping::highlight_diff;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A deployment as returned by `GET /deploys/{id}`.
///
/// The backend payload is kept whole; only `Diff` is typed because it is the
/// one field the dashboard rewrites.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deploy {
    #[serde(rename = "Diff", default)]
    pub diff: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Deploy {
    /// Raw diff text; absent and null both read as empty.
    pub fn diff(&self) -> &str {
        self.diff.as_deref().unwrap_or("")
    }

    pub fn id(&self) -> Option<&str> {
        self.fields.get("Id").and_then(Value::as_str)
    }

    /// Returns the deploy with `Diff` replaced by highlighted markup.
    ///
    /// The missing-diff default is applied before highlighting, so a record
    /// without `Diff` shapes exactly like one with `Diff: ""`.
    pub fn highlighted(mut self) -> Self {
        let markup = highlight_diff(self.diff());
        self.diff = Some(markup);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "Id": "53e143cb874ccb1f68000001",
            "App": "g1",
            "Timestamp": "18-08-2014 11:29:32",
            "Duration": "00m23s",
            "Commit": "e82nn93nd93mm12o2ueh83dhbd3iu112",
            "Error": "",
            "Diff": "test_diff"
        })
    }

    #[test]
    fn test_highlighted_replaces_only_diff() {
        let deploy: Deploy = serde_json::from_value(sample()).unwrap();
        assert_eq!(deploy.id(), Some("53e143cb874ccb1f68000001"));

        let shaped = serde_json::to_value(deploy.highlighted()).unwrap();
        let mut expected = sample();
        expected["Diff"] =
            json!("<div class=\"highlight\"><pre>test_diff\n</pre></div>\n");
        assert_eq!(shaped, expected);
    }

    #[test]
    fn test_missing_diff_shapes_like_empty_diff() {
        let mut without = sample();
        without.as_object_mut().unwrap().remove("Diff");
        let mut empty = sample();
        empty["Diff"] = json!("");

        let a: Deploy = serde_json::from_value(without).unwrap();
        let b: Deploy = serde_json::from_value(empty).unwrap();
        assert_eq!(a.clone().highlighted(), b.highlighted());
        assert_eq!(
            a.highlighted().diff(),
            "<div class=\"highlight\"><pre>\n</pre></div>\n"
        );
    }

    #[test]
    fn test_null_diff_reads_as_empty() {
        let deploy: Deploy = serde_json::from_value(json!({"Id": "x", "Diff": null})).unwrap();
        assert_eq!(deploy.diff(), "");
    }
}
