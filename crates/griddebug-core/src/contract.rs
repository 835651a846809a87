//! Diagnostic-result data contract
//!
//! Gatekeeps data crossing the boundary with the analysis service. The wire
//! types in this module are deliberately permissive (string enums, optional
//! fields) so that structural judgment happens in [`validate`], not inside
//! serde: any violation is reported as a [`ContractViolation`], never
//! silently coerced or defaulted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    ActionCategory, ActionPriority, AnalysisStatus, ComponentDetail, ComponentKind,
    CorrectiveAction, DiagnosticResult,
};

/// A structural violation of the diagnostic-result contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("field '{field}' has out-of-enum value '{value}'")]
    UnknownEnumValue { field: &'static str, value: String },

    #[error("empty id at {sequence}[{index}]")]
    EmptyId { sequence: &'static str, index: usize },

    #[error("duplicate id '{id}' in {sequence}")]
    DuplicateId { sequence: &'static str, id: String },

    #[error("non-finite value for component '{component_id}'")]
    NonFiniteValue { component_id: String },

    #[error("malformed payload: {detail}")]
    MalformedPayload { detail: String },
}

// ─────────────────────────────────────────────────────────
// Wire types (pre-validation)
// ─────────────────────────────────────────────────────────

/// Unvalidated diagnostic result as received from the analysis service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDiagnosticResult {
    pub root_causes: Vec<String>,
    pub affected_components: Vec<RawComponentDetail>,
    pub corrective_actions: Vec<RawCorrectiveAction>,
    pub analysis_status: Option<String>,
}

/// Unvalidated affected-component entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawComponentDetail {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub value: Option<f64>,
}

/// Unvalidated corrective-action entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCorrectiveAction {
    pub id: String,
    pub description: String,
    pub priority: Option<String>,
    pub category: Option<String>,
}

// ─────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────

/// Validate a raw service payload into a [`DiagnosticResult`].
///
/// Checks, failing closed on the first violation:
/// - `analysisStatus` present and a member of its enum
/// - every enum-valued field a member of its declared set
/// - `id` fields non-empty and unique within their containing sequence
/// - component `value` fields present and finite
///
/// A result with `analysisStatus` of `"partial"` or `"failed"` is still
/// structurally valid: the status field, not the transport layer,
/// communicates analysis-level failure.
///
/// Sequence order is preserved exactly as returned by the service.
pub fn validate(raw: RawDiagnosticResult) -> Result<DiagnosticResult, ContractViolation> {
    let status_str = raw
        .analysis_status
        .ok_or(ContractViolation::MissingField {
            field: "analysisStatus",
        })?;
    let analysis_status = parse_analysis_status(&status_str)?;

    let mut component_ids: HashSet<String> = HashSet::new();
    let mut affected_components = Vec::with_capacity(raw.affected_components.len());
    for (index, raw_component) in raw.affected_components.into_iter().enumerate() {
        let component = validate_component(raw_component, index)?;
        if !component_ids.insert(component.id.clone()) {
            return Err(ContractViolation::DuplicateId {
                sequence: "affectedComponents",
                id: component.id,
            });
        }
        affected_components.push(component);
    }

    let mut action_ids: HashSet<String> = HashSet::new();
    let mut corrective_actions = Vec::with_capacity(raw.corrective_actions.len());
    for (index, raw_action) in raw.corrective_actions.into_iter().enumerate() {
        let action = validate_action(raw_action, index)?;
        if !action_ids.insert(action.id.clone()) {
            return Err(ContractViolation::DuplicateId {
                sequence: "correctiveActions",
                id: action.id,
            });
        }
        corrective_actions.push(action);
    }

    Ok(DiagnosticResult {
        root_causes: raw.root_causes,
        affected_components,
        corrective_actions,
        analysis_status,
    })
}

fn validate_component(
    raw: RawComponentDetail,
    index: usize,
) -> Result<ComponentDetail, ContractViolation> {
    if raw.id.is_empty() {
        return Err(ContractViolation::EmptyId {
            sequence: "affectedComponents",
            index,
        });
    }

    let kind_str = raw.kind.ok_or(ContractViolation::MissingField {
        field: "affectedComponents.type",
    })?;
    let kind = parse_component_kind(&kind_str)?;

    let value = raw.value.ok_or(ContractViolation::MissingField {
        field: "affectedComponents.value",
    })?;
    if !value.is_finite() {
        return Err(ContractViolation::NonFiniteValue {
            component_id: raw.id,
        });
    }

    Ok(ComponentDetail {
        id: raw.id,
        name: raw.name,
        kind,
        value,
    })
}

fn validate_action(
    raw: RawCorrectiveAction,
    index: usize,
) -> Result<CorrectiveAction, ContractViolation> {
    if raw.id.is_empty() {
        return Err(ContractViolation::EmptyId {
            sequence: "correctiveActions",
            index,
        });
    }

    let priority_str = raw.priority.ok_or(ContractViolation::MissingField {
        field: "correctiveActions.priority",
    })?;
    let priority = parse_action_priority(&priority_str)?;

    let category_str = raw.category.ok_or(ContractViolation::MissingField {
        field: "correctiveActions.category",
    })?;
    let category = parse_action_category(&category_str)?;

    Ok(CorrectiveAction {
        id: raw.id,
        description: raw.description,
        priority,
        category,
    })
}

fn parse_analysis_status(value: &str) -> Result<AnalysisStatus, ContractViolation> {
    match value {
        "success" => Ok(AnalysisStatus::Success),
        "partial" => Ok(AnalysisStatus::Partial),
        "failed" => Ok(AnalysisStatus::Failed),
        other => Err(ContractViolation::UnknownEnumValue {
            field: "analysisStatus",
            value: other.to_string(),
        }),
    }
}

fn parse_component_kind(value: &str) -> Result<ComponentKind, ContractViolation> {
    match value {
        "bus" => Ok(ComponentKind::Bus),
        "line" => Ok(ComponentKind::Line),
        "generator" => Ok(ComponentKind::Generator),
        "transformer" => Ok(ComponentKind::Transformer),
        other => Err(ContractViolation::UnknownEnumValue {
            field: "affectedComponents.type",
            value: other.to_string(),
        }),
    }
}

fn parse_action_priority(value: &str) -> Result<ActionPriority, ContractViolation> {
    match value {
        "high" => Ok(ActionPriority::High),
        "medium" => Ok(ActionPriority::Medium),
        "low" => Ok(ActionPriority::Low),
        other => Err(ContractViolation::UnknownEnumValue {
            field: "correctiveActions.priority",
            value: other.to_string(),
        }),
    }
}

fn parse_action_category(value: &str) -> Result<ActionCategory, ContractViolation> {
    match value {
        "load_shedding" => Ok(ActionCategory::LoadShedding),
        "generation_adjustment" => Ok(ActionCategory::GenerationAdjustment),
        "topology_change" => Ok(ActionCategory::TopologyChange),
        "parameter_adjustment" => Ok(ActionCategory::ParameterAdjustment),
        other => Err(ContractViolation::UnknownEnumValue {
            field: "correctiveActions.category",
            value: other.to_string(),
        }),
    }
}
