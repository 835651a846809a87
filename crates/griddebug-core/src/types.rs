//! Domain types for power-flow failure diagnostics
//!
//! All enumerations are closed tagged variants rather than open strings so
//! that state handling and contract validation can match exhaustively.

use serde::{Deserialize, Serialize};

/// IEEE standard test network a test case runs against.
///
/// Serialized on the wire as the bare bus count (14/30/57).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum BusSystem {
    Ieee14,
    Ieee30,
    Ieee57,
}

impl BusSystem {
    /// Number of buses in the network.
    pub fn bus_count(self) -> u16 {
        match self {
            BusSystem::Ieee14 => 14,
            BusSystem::Ieee30 => 30,
            BusSystem::Ieee57 => 57,
        }
    }

    /// Short label for display ("IEEE 14-bus").
    pub fn label(self) -> String {
        format!("IEEE {}-bus", self.bus_count())
    }
}

impl TryFrom<u16> for BusSystem {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            14 => Ok(BusSystem::Ieee14),
            30 => Ok(BusSystem::Ieee30),
            57 => Ok(BusSystem::Ieee57),
            other => Err(format!("unknown bus system: {other}")),
        }
    }
}

impl From<BusSystem> for u16 {
    fn from(value: BusSystem) -> Self {
        value.bus_count()
    }
}

/// Failure mode injected by a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureType {
    /// Power-flow solver fails to reach a numerically stable solution.
    NonConvergence,
    /// A bus voltage outside its acceptable operating range.
    VoltageViolation,
    /// Flow on a line exceeding its rated capacity.
    LineOverload,
}

impl FailureType {
    pub fn label(self) -> &'static str {
        match self {
            FailureType::NonConvergence => "Non-convergence",
            FailureType::VoltageViolation => "Voltage violation",
            FailureType::LineOverload => "Line overload",
        }
    }
}

/// A selectable pre-defined failure test case.
///
/// Immutable once listed; lifecycle owned entirely by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Unique id, e.g. `case14_test1`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Longer human-readable description of the injected failure.
    pub description: String,
    /// Network the case runs against.
    #[serde(rename = "busSystem")]
    pub bus_system: BusSystem,
    /// Failure mode the case injects.
    #[serde(rename = "failureType")]
    pub failure_type: FailureType,
}

/// Type of a modeled power-system component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Bus,
    Line,
    Generator,
    Transformer,
}

impl ComponentKind {
    pub fn label(self) -> &'static str {
        match self {
            ComponentKind::Bus => "Bus",
            ComponentKind::Line => "Line",
            ComponentKind::Generator => "Generator",
            ComponentKind::Transformer => "Transformer",
        }
    }
}

/// A component implicated in a diagnosed failure.
///
/// Produced only as part of a [`DiagnosticResult`]; never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDetail {
    pub id: String,
    pub name: String,
    pub kind: ComponentKind,
    /// Observed quantity for the component (per-unit voltage, loading
    /// percentage, etc. — interpretation depends on `kind`). Always finite.
    pub value: f64,
}

/// Priority of a corrective action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    High,
    Medium,
    Low,
}

impl ActionPriority {
    pub fn label(self) -> &'static str {
        match self {
            ActionPriority::High => "high",
            ActionPriority::Medium => "medium",
            ActionPriority::Low => "low",
        }
    }
}

/// Category of a corrective action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    LoadShedding,
    GenerationAdjustment,
    TopologyChange,
    ParameterAdjustment,
}

impl ActionCategory {
    pub fn label(self) -> &'static str {
        match self {
            ActionCategory::LoadShedding => "Load shedding",
            ActionCategory::GenerationAdjustment => "Generation adjustment",
            ActionCategory::TopologyChange => "Topology change",
            ActionCategory::ParameterAdjustment => "Parameter adjustment",
        }
    }
}

/// A recommended corrective action.
///
/// Ordering within a result is significant: display order is the priority
/// order as returned by the analysis service, never re-sorted here.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectiveAction {
    pub id: String,
    pub description: String,
    pub priority: ActionPriority,
    pub category: ActionCategory,
}

/// Analysis-level outcome reported by the service.
///
/// `Partial` and `Failed` are structurally valid results, not transport
/// errors — the status field communicates analysis-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Success,
    Partial,
    Failed,
}

impl AnalysisStatus {
    pub fn label(self) -> &'static str {
        match self {
            AnalysisStatus::Success => "success",
            AnalysisStatus::Partial => "partial",
            AnalysisStatus::Failed => "failed",
        }
    }

    /// Returns `true` when the analysis did not complete cleanly.
    pub fn is_degraded(self) -> bool {
        !matches!(self, AnalysisStatus::Success)
    }
}

/// A validated diagnostic report for one completed analysis call.
///
/// Created once per call by [`crate::contract::validate`]; immutable; owned
/// by the orchestrator until superseded by a newer result or cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticResult {
    /// Root-cause explanations in service order.
    pub root_causes: Vec<String>,
    /// Components implicated in the failure (ids unique within the result).
    pub affected_components: Vec<ComponentDetail>,
    /// Recommended actions in service order (ids unique within the result).
    pub corrective_actions: Vec<CorrectiveAction>,
    pub analysis_status: AnalysisStatus,
}

/// Diagnosis pipeline the backend runs a test case through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pipeline {
    /// Single-pass rule-engine diagnosis.
    #[default]
    Baseline,
    /// Iterative agent-driven diagnosis.
    Agentic,
}

impl Pipeline {
    pub fn label(self) -> &'static str {
        match self {
            Pipeline::Baseline => "baseline",
            Pipeline::Agentic => "agentic",
        }
    }

    /// The other pipeline (for UI toggling).
    pub fn toggled(self) -> Self {
        match self {
            Pipeline::Baseline => Pipeline::Agentic,
            Pipeline::Agentic => Pipeline::Baseline,
        }
    }
}

impl std::str::FromStr for Pipeline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baseline" => Ok(Pipeline::Baseline),
            "agentic" => Ok(Pipeline::Agentic),
            other => Err(format!("unknown pipeline '{other}' (expected baseline or agentic)")),
        }
    }
}
