//! Offline backend with a built-in catalog and canned results
//!
//! Mirrors the backend's scenario suite (IEEE 14/30/57 networks with load
//! scaling, generator loss, voltage and thermal scenarios) so the TUI can
//! run without a reachable GridDebugAgent instance. Canned reports are
//! synthesized per failure type and returned through the same raw wire
//! types as the HTTP backend.

use std::time::Duration;

use griddebug_core::prelude::*;
use griddebug_core::{
    BusSystem, FailureType, Pipeline, RawComponentDetail, RawCorrectiveAction,
    RawDiagnosticResult, TestCase,
};

use crate::service::{AnalysisService, TestCaseCatalog};

/// Simulated analysis latency so the loading state is visible offline.
const ANALYZE_DELAY_MS: u64 = 400;

/// Offline stand-in for the GridDebugAgent backend.
#[derive(Debug, Clone, Default)]
pub struct StaticBackend;

impl StaticBackend {
    pub fn new() -> Self {
        Self
    }

    /// The built-in test-case catalog.
    pub fn builtin_cases() -> Vec<TestCase> {
        vec![
            TestCase {
                id: "case14_test1".to_string(),
                name: "Extreme load scaling".to_string(),
                description: "All loads in case14 scaled by 20x, causing extreme power \
                              mismatch and Newton-Raphson divergence."
                    .to_string(),
                bus_system: BusSystem::Ieee14,
                failure_type: FailureType::NonConvergence,
            },
            TestCase {
                id: "case14_test2".to_string(),
                name: "All generators removed".to_string(),
                description: "Every generator except the slack bus is taken out of \
                              service, leaving the network without dispatchable power."
                    .to_string(),
                bus_system: BusSystem::Ieee14,
                failure_type: FailureType::NonConvergence,
            },
            TestCase {
                id: "case30_test1".to_string(),
                name: "Undervoltage from load increase".to_string(),
                description: "Loads at remote buses of case30 are raised until bus \
                              voltages drop below the 0.94 pu operating limit."
                    .to_string(),
                bus_system: BusSystem::Ieee30,
                failure_type: FailureType::VoltageViolation,
            },
            TestCase {
                id: "case30_test2".to_string(),
                name: "Thermal overload after line outage".to_string(),
                description: "A parallel line is switched out and the remaining line \
                              carries flow above its rated capacity."
                    .to_string(),
                bus_system: BusSystem::Ieee30,
                failure_type: FailureType::LineOverload,
            },
            TestCase {
                id: "case57_test1".to_string(),
                name: "Voltage collapse region".to_string(),
                description: "Reactive support in one region of case57 is reduced, \
                              pulling several bus voltages out of range."
                    .to_string(),
                bus_system: BusSystem::Ieee57,
                failure_type: FailureType::VoltageViolation,
            },
            TestCase {
                id: "case57_test2".to_string(),
                name: "Corridor overload".to_string(),
                description: "Generation is shifted across the network so a single \
                              transmission corridor exceeds its thermal rating."
                    .to_string(),
                bus_system: BusSystem::Ieee57,
                failure_type: FailureType::LineOverload,
            },
        ]
    }

    fn canned_result(case: &TestCase, pipeline: Pipeline) -> RawDiagnosticResult {
        let pipeline_note = match pipeline {
            Pipeline::Baseline => "rule-engine pass",
            Pipeline::Agentic => "iterative agent run",
        };
        match case.failure_type {
            FailureType::NonConvergence => RawDiagnosticResult {
                root_causes: vec![
                    format!(
                        "Power mismatch in {} exceeds solver tolerance ({})",
                        case.bus_system.label(),
                        pipeline_note
                    ),
                    "Newton-Raphson iterations diverged after step 12".to_string(),
                ],
                affected_components: vec![
                    RawComponentDetail {
                        id: "bus_3".to_string(),
                        name: "Bus 3".to_string(),
                        kind: Some("bus".to_string()),
                        value: Some(0.62),
                    },
                    RawComponentDetail {
                        id: "gen_1".to_string(),
                        name: "Generator 1".to_string(),
                        kind: Some("generator".to_string()),
                        value: Some(1.48),
                    },
                ],
                corrective_actions: vec![
                    RawCorrectiveAction {
                        id: "act_1".to_string(),
                        description: "Shed 30% of load at the weakest buses".to_string(),
                        priority: Some("high".to_string()),
                        category: Some("load_shedding".to_string()),
                    },
                    RawCorrectiveAction {
                        id: "act_2".to_string(),
                        description: "Flatten the start profile before re-solving".to_string(),
                        priority: Some("medium".to_string()),
                        category: Some("parameter_adjustment".to_string()),
                    },
                ],
                analysis_status: Some("success".to_string()),
            },
            FailureType::VoltageViolation => RawDiagnosticResult {
                root_causes: vec![format!(
                    "Reactive power deficit near heavily loaded buses ({pipeline_note})"
                )],
                affected_components: vec![
                    RawComponentDetail {
                        id: "bus_26".to_string(),
                        name: "Bus 26".to_string(),
                        kind: Some("bus".to_string()),
                        value: Some(0.91),
                    },
                    RawComponentDetail {
                        id: "bus_30".to_string(),
                        name: "Bus 30".to_string(),
                        kind: Some("bus".to_string()),
                        value: Some(0.89),
                    },
                ],
                corrective_actions: vec![
                    RawCorrectiveAction {
                        id: "act_1".to_string(),
                        description: "Raise generator voltage setpoints in the affected area"
                            .to_string(),
                        priority: Some("high".to_string()),
                        category: Some("generation_adjustment".to_string()),
                    },
                    RawCorrectiveAction {
                        id: "act_2".to_string(),
                        description: "Shed load at the lowest-voltage bus".to_string(),
                        priority: Some("low".to_string()),
                        category: Some("load_shedding".to_string()),
                    },
                ],
                analysis_status: Some("success".to_string()),
            },
            FailureType::LineOverload => RawDiagnosticResult {
                root_causes: vec![format!(
                    "Post-contingency flow concentrates on a single corridor ({pipeline_note})"
                )],
                affected_components: vec![
                    RawComponentDetail {
                        id: "line_7".to_string(),
                        name: "Line 6-8".to_string(),
                        kind: Some("line".to_string()),
                        value: Some(131.5),
                    },
                    RawComponentDetail {
                        id: "trafo_2".to_string(),
                        name: "Transformer 4-7".to_string(),
                        kind: Some("transformer".to_string()),
                        value: Some(104.2),
                    },
                ],
                corrective_actions: vec![
                    RawCorrectiveAction {
                        id: "act_1".to_string(),
                        description: "Redispatch generation away from the overloaded corridor"
                            .to_string(),
                        priority: Some("high".to_string()),
                        category: Some("generation_adjustment".to_string()),
                    },
                    RawCorrectiveAction {
                        id: "act_2".to_string(),
                        description: "Close the parallel tie line to split the flow".to_string(),
                        priority: Some("medium".to_string()),
                        category: Some("topology_change".to_string()),
                    },
                ],
                analysis_status: Some("success".to_string()),
            },
        }
    }
}

impl AnalysisService for StaticBackend {
    async fn analyze(
        &self,
        test_case_id: &str,
        pipeline: Pipeline,
    ) -> Result<RawDiagnosticResult> {
        tokio::time::sleep(Duration::from_millis(ANALYZE_DELAY_MS)).await;

        let cases = Self::builtin_cases();
        let case = cases
            .iter()
            .find(|c| c.id == test_case_id)
            .ok_or_else(|| Error::service(format!("unknown test case '{test_case_id}'")))?;

        info!(
            "offline analysis for {} ({})",
            test_case_id,
            pipeline.label()
        );
        Ok(Self::canned_result(case, pipeline))
    }
}

impl TestCaseCatalog for StaticBackend {
    async fn list_test_cases(&self) -> Result<Vec<TestCase>> {
        Ok(Self::builtin_cases())
    }
}
