// Copyright 2026 the Stepview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Workflow execution status as reported by the status-poll endpoint.

use core::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StatusError;

/// Execution state of one workflow node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeState {
    /// An executor is working on the node.
    Running,
    /// Completed successfully.
    Finished,
    /// Completed with an error.
    Failed,
    /// Not reachable through enabled edges.
    Skipped,
    /// Not started. Unrecognized states also land here.
    #[default]
    #[serde(other)]
    Pending,
}

impl NodeState {
    /// Lowercase wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Finished => "finished",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
        }
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of one edge between workflow nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeState {
    /// The upstream node routed execution through this edge.
    Enabled,
    /// The upstream node ruled this edge out.
    Disabled,
    /// Not decided yet. Unrecognized states also land here.
    #[default]
    #[serde(other)]
    Pending,
}

/// Reference from a node to one of its edges.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeRef {
    /// Edge name.
    pub edge: String,
    /// Routing condition, when declared on the node.
    #[serde(default)]
    pub condition: String,
}

/// One entry of the node status table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeStatus {
    /// Node name (unique within a workflow).
    pub node: String,
    /// Human-readable step description.
    #[serde(default)]
    pub description: String,
    /// Execution state.
    #[serde(default)]
    pub status: NodeState,
    /// Edges leading into the node.
    #[serde(default)]
    pub input_edges: Vec<EdgeRef>,
    /// Edges leaving the node.
    #[serde(default)]
    pub output_edges: Vec<EdgeRef>,
    /// Step result, once the node has finished.
    #[serde(default)]
    pub result: Option<Value>,
    /// Executor that ran (or is running) the node.
    #[serde(default)]
    pub executor_id: Option<String>,
}

/// One entry of the edge status table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeStatus {
    /// Edge name.
    pub edge: String,
    /// Routing state.
    #[serde(default)]
    pub status: EdgeState,
    /// Routing condition, if recorded on the edge.
    #[serde(default)]
    pub condition: String,
}

/// Per-state node counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// All nodes.
    pub total_nodes: usize,
    /// Nodes not started.
    pub pending: usize,
    /// Nodes in progress.
    pub running: usize,
    /// Nodes completed successfully.
    pub finished: usize,
    /// Nodes completed with an error.
    pub failed: usize,
    /// Nodes skipped.
    pub skipped: usize,
}

/// An edge resolved to its endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
    /// Edge name.
    pub edge: String,
    /// Node that lists the edge among its outputs.
    pub source: String,
    /// Node that lists the edge among its inputs.
    pub target: String,
    /// Routing state.
    pub status: EdgeState,
    /// Condition declared on the source node's output edge, or empty.
    pub condition: String,
}

/// The latest server-reported state of a workflow execution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSnapshot {
    /// Session the execution belongs to.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Incident the workflow is troubleshooting, as reported.
    #[serde(default)]
    pub incident_info: Value,
    /// Node status table.
    #[serde(default)]
    pub node_status: Vec<NodeStatus>,
    /// Edge status table.
    #[serde(default)]
    pub edge_status: Vec<EdgeStatus>,
}

#[derive(Deserialize)]
struct StatusResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    snapshot: WorkflowSnapshot,
}

impl WorkflowSnapshot {
    /// Decodes a status-poll response body.
    ///
    /// A response with `"success": false` is reported as
    /// [`StatusError::Rejected`] with the server's error message.
    pub fn from_status_json(body: &str) -> Result<Self, StatusError> {
        let response: StatusResponse = serde_json::from_str(body)?;
        if !response.success {
            return Err(StatusError::Rejected(
                response
                    .error
                    .unwrap_or_else(|| "status request failed".to_owned()),
            ));
        }
        Ok(response.snapshot)
    }

    /// Looks a node up by name.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&NodeStatus> {
        self.node_status.iter().find(|n| n.node == name)
    }

    /// Counts nodes per state.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        let mut stats = Statistics {
            total_nodes: self.node_status.len(),
            ..Statistics::default()
        };
        for node in &self.node_status {
            match node.status {
                NodeState::Pending => stats.pending += 1,
                NodeState::Running => stats.running += 1,
                NodeState::Finished => stats.finished += 1,
                NodeState::Failed => stats.failed += 1,
                NodeState::Skipped => stats.skipped += 1,
            }
        }
        stats
    }

    /// Resolves every edge in the edge table to its source and target nodes.
    ///
    /// Edges missing either endpoint are left out.
    #[must_use]
    pub fn connections(&self) -> Vec<Connection> {
        self.edge_status
            .iter()
            .filter_map(|edge| {
                let name = edge.edge.as_str();
                let source = self
                    .node_status
                    .iter()
                    .rev()
                    .find(|n| n.output_edges.iter().any(|e| e.edge == name))?;
                let target = self
                    .node_status
                    .iter()
                    .rev()
                    .find(|n| n.input_edges.iter().any(|e| e.edge == name))?;
                let condition = self
                    .node_status
                    .iter()
                    .flat_map(|n| n.output_edges.iter())
                    .find(|e| e.edge == name)
                    .map(|e| e.condition.clone())
                    .unwrap_or_default();
                Some(Connection {
                    edge: edge.edge.clone(),
                    source: source.node.clone(),
                    target: target.node.clone(),
                    status: edge.status,
                    condition,
                })
            })
            .collect()
    }

    /// Plain-text status listing, used when no diagram can be rendered.
    #[must_use]
    pub fn status_listing(&self) -> String {
        if self.node_status.is_empty() {
            return "Workflow status: no nodes reported".to_owned();
        }
        let stats = self.statistics();
        let mut out = format!(
            "Workflow status: {} nodes \
             ({} finished, {} running, {} pending, {} failed, {} skipped)",
            stats.total_nodes,
            stats.finished,
            stats.running,
            stats.pending,
            stats.failed,
            stats.skipped,
        );
        for node in &self.node_status {
            let _ = write!(out, "\n- {} [{}]", node.node, node.status);
            if !node.description.is_empty() {
                let _ = write!(out, ": {}", node.description);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{EdgeState, NodeState, WorkflowSnapshot};
    use crate::error::StatusError;

    const BODY: &str = r#"{
        "success": true,
        "session_id": "a1b2",
        "timestamp": "2026-10-16T09:00:00",
        "incident_info": "Low availability in region west",
        "node_status": [
            {"node": "start", "description": "", "status": "finished",
             "input_edges": [], "output_edges": [{"edge": "e1", "condition": "none"}],
             "result": null, "executor_id": null},
            {"node": "check_logs", "description": "Inspect service logs",
             "status": "running",
             "input_edges": [{"edge": "e1"}],
             "output_edges": [
                {"edge": "e2", "condition": "errors found"},
                {"edge": "e3", "condition": "clean"}
             ],
             "executor_id": "exec-7"},
            {"node": "restart", "status": "pending", "input_edges": [{"edge": "e2"}]},
            {"node": "escalate", "status": "paused"}
        ],
        "edge_status": [
            {"edge": "e1", "status": "enabled", "condition": "none"},
            {"edge": "e2", "status": "pending"},
            {"edge": "e3", "status": "disabled"}
        ],
        "statistics": {"total_nodes": 4}
    }"#;

    #[test]
    fn decodes_status_response() {
        let snapshot = WorkflowSnapshot::from_status_json(BODY).unwrap();
        assert_eq!(snapshot.session_id.as_deref(), Some("a1b2"));
        assert_eq!(snapshot.node_status.len(), 4);
        assert_eq!(snapshot.edge_status.len(), 3);

        let check = snapshot.node("check_logs").unwrap();
        assert_eq!(check.status, NodeState::Running);
        assert_eq!(check.executor_id.as_deref(), Some("exec-7"));
        assert_eq!(check.input_edges[0].condition, "");
        // Unknown state strings fall back to pending.
        assert_eq!(snapshot.node("escalate").unwrap().status, NodeState::Pending);
        assert_eq!(snapshot.edge_status[2].status, EdgeState::Disabled);
    }

    #[test]
    fn states_use_lowercase_wire_names() {
        for state in [
            NodeState::Pending,
            NodeState::Running,
            NodeState::Finished,
            NodeState::Failed,
            NodeState::Skipped,
        ] {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.as_str()));
            assert_eq!(serde_json::from_str::<NodeState>(&json).unwrap(), state);
        }
        assert_eq!(serde_json::to_string(&EdgeState::Enabled).unwrap(), "\"enabled\"");
        assert_eq!(
            serde_json::from_str::<EdgeState>("\"suspended\"").unwrap(),
            EdgeState::Pending
        );
        assert_eq!(NodeState::default(), NodeState::Pending);
        assert_eq!(EdgeState::default(), EdgeState::Pending);
    }

    #[test]
    fn rejected_response_carries_server_error() {
        let body = r#"{"success": false, "error": "No session active"}"#;
        let err = WorkflowSnapshot::from_status_json(body).unwrap_err();
        match err {
            StatusError::Rejected(msg) => assert_eq!(msg, "No session active"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            WorkflowSnapshot::from_status_json("{").unwrap_err(),
            StatusError::Decode(_)
        ));
    }

    #[test]
    fn statistics_count_states() {
        let stats = WorkflowSnapshot::from_status_json(BODY).unwrap().statistics();
        assert_eq!(stats.total_nodes, 4);
        assert_eq!(stats.finished, 1);
        assert_eq!(stats.running, 1);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.failed + stats.skipped, 0);
    }

    #[test]
    fn connections_resolve_endpoints_and_conditions() {
        let snapshot = WorkflowSnapshot::from_status_json(BODY).unwrap();
        let connections = snapshot.connections();
        // e3 has no target node and is left out.
        assert_eq!(connections.len(), 2);
        assert_eq!(connections[0].source, "start");
        assert_eq!(connections[0].target, "check_logs");
        assert_eq!(connections[0].status, EdgeState::Enabled);
        assert_eq!(connections[0].condition, "none");
        assert_eq!(connections[1].edge, "e2");
        assert_eq!(connections[1].source, "check_logs");
        assert_eq!(connections[1].target, "restart");
        assert_eq!(connections[1].condition, "errors found");
    }

    #[test]
    fn status_listing_names_every_node() {
        let listing = WorkflowSnapshot::from_status_json(BODY).unwrap().status_listing();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(
            lines[0],
            "Workflow status: 4 nodes (1 finished, 1 running, 2 pending, 0 failed, 0 skipped)"
        );
        assert_eq!(lines[1], "- start [finished]");
        assert_eq!(lines[2], "- check_logs [running]: Inspect service logs");
        assert_eq!(lines.len(), 5);

        assert_eq!(
            WorkflowSnapshot::default().status_listing(),
            "Workflow status: no nodes reported"
        );
    }
}
