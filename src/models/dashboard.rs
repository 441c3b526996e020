//! Dashboard entity tree decoded from dashboard JSON.
//!
//! Only the fields the rules read are modelled; everything else in the
//! document is ignored. Panels nest recursively and are assumed acyclic.

use serde::Deserialize;
use serde_json::Value as Json;

#[derive(Debug, Clone, Default, Deserialize)]
/// Root dashboard document.
pub struct Dashboard {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub panels: Vec<Panel>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Legacy row container holding its own panel list.
pub struct Row {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub panels: Vec<Panel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// A visual/query unit. `id` is required; uniqueness is checked by a rule.
pub struct Panel {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub panels: Vec<Panel>,
    #[serde(default)]
    pub targets: Vec<Target>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Query definition attached to a panel.
pub struct Target {
    #[serde(default)]
    pub ref_id: String,
    #[serde(default)]
    pub expr: Option<String>,
    #[serde(default)]
    pub datasource: Option<Json>,
}

impl Dashboard {
    pub fn from_json(src: &str) -> Result<Dashboard, serde_json::Error> {
        serde_json::from_str(src)
    }

    /// All panels in traversal order: top-level panels first, then each
    /// row's panels, every panel followed depth-first by its sub-panels.
    pub fn panels(&self) -> Vec<&Panel> {
        let mut out = Vec::new();
        for p in &self.panels {
            collect_panels(p, &mut out);
        }
        for row in &self.rows {
            for p in &row.panels {
                collect_panels(p, &mut out);
            }
        }
        out
    }
}

fn collect_panels<'a>(panel: &'a Panel, out: &mut Vec<&'a Panel>) {
    out.push(panel);
    for sub in &panel.panels {
        collect_panels(sub, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_grafana_shape() {
        let src = json!({
            "title": "Node",
            "uid": "ignored",
            "panels": [
                {"id": 1, "type": "graph", "title": "CPU",
                 "targets": [{"refId": "A", "expr": "up", "datasource": {"uid": "prom"}}]}
            ],
            "rows": [{"title": "R", "panels": [{"id": 2}]}]
        })
        .to_string();
        let d = Dashboard::from_json(&src).unwrap();
        assert_eq!(d.title, "Node");
        assert_eq!(d.panels[0].kind, "graph");
        assert_eq!(d.panels[0].targets[0].ref_id, "A");
        assert_eq!(d.panels[0].targets[0].expr.as_deref(), Some("up"));
        assert_eq!(d.rows[0].panels[0].id, 2);
    }

    #[test]
    fn test_missing_panel_id_is_decode_error() {
        let src = r#"{"title": "x", "panels": [{"title": "no id"}]}"#;
        assert!(Dashboard::from_json(src).is_err());
    }

    #[test]
    fn test_panels_flattened_in_traversal_order() {
        let src = json!({
            "panels": [
                {"id": 1, "panels": [{"id": 2, "panels": [{"id": 3}]}, {"id": 4}]},
                {"id": 5}
            ],
            "rows": [
                {"panels": [{"id": 6, "panels": [{"id": 7}]}]},
                {"panels": [{"id": 8}]}
            ]
        })
        .to_string();
        let d = Dashboard::from_json(&src).unwrap();
        let ids: Vec<i64> = d.panels().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
