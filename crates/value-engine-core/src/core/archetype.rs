// crates/value-engine-core/src/core/archetype.rs
// ============================================================================
// Module: Value Engine Archetypes
// Description: The sixteen economic archetypes and five business dimensions.
// Purpose: Provide exhaustive, serializable archetype metadata for dispatch.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! An [`Archetype`] names one parameterized economic pattern. Each archetype
//! declares its input keys and maps to exactly one [`Dimension`]. Records
//! coming from the store carry an [`ArchetypeTag`], which preserves tags the
//! engine does not recognize so that valuation can degrade to zero instead of
//! rejecting the whole snapshot.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Input Keys
// ============================================================================

/// Canonical input key names shared by formulas, traces, and seeding.
pub mod keys {
    /// Annual revenue exposed to leakage.
    pub const ANNUAL_REVENUE_AT_RISK: &str = "annualRevenueAtRisk";
    /// Fraction of revenue currently leaking.
    pub const LEAKAGE_RATE: &str = "leakageRate";
    /// Fraction of leakage recovered by automation.
    pub const RECOVERY_RATE: &str = "recoveryRate";
    /// Inbound leads per month.
    pub const LEADS_PER_MONTH: &str = "leadsPerMonth";
    /// Absolute lift in lead conversion rate.
    pub const CONVERSION_RATE_LIFT: &str = "conversionRateLift";
    /// Average closed deal value.
    pub const AVG_DEAL_VALUE: &str = "avgDealValue";
    /// Customers at risk of churning per year.
    pub const CUSTOMERS_AT_RISK_PER_YEAR: &str = "customersAtRiskPerYear";
    /// Fraction of at-risk churn prevented.
    pub const CHURN_REDUCTION_RATE: &str = "churnReductionRate";
    /// Average annual value of a retained customer.
    pub const AVG_CUSTOMER_ANNUAL_VALUE: &str = "avgCustomerAnnualValue";
    /// Process executions per month.
    pub const PROCESSES_PER_MONTH: &str = "processesPerMonth";
    /// Hours of cycle time removed per execution.
    pub const HOURS_SAVED_PER_PROCESS: &str = "hoursSavedPerProcess";
    /// Cost of one hour of delay.
    pub const COST_OF_DELAY_PER_HOUR: &str = "costOfDelayPerHour";
    /// Manual handoffs per month.
    pub const HANDOFFS_PER_MONTH: &str = "handoffsPerMonth";
    /// Minutes consumed per handoff.
    pub const MINUTES_PER_HANDOFF: &str = "minutesPerHandoff";
    /// Loaded hourly labor rate.
    pub const HOURLY_RATE: &str = "hourlyRate";
    /// Receivables invoiced per month.
    pub const MONTHLY_RECEIVABLES: &str = "monthlyReceivables";
    /// Days of collection time removed.
    pub const DAYS_ACCELERATED: &str = "daysAccelerated";
    /// Annual cost of capital (fraction).
    pub const COST_OF_CAPITAL: &str = "costOfCapital";
    /// Tasks performed per month.
    pub const TASKS_PER_MONTH: &str = "tasksPerMonth";
    /// Minutes per task.
    pub const MINUTES_PER_TASK: &str = "minutesPerTask";
    /// Minutes saved per task.
    pub const MINUTES_SAVED_PER_TASK: &str = "minutesSavedPerTask";
    /// Meetings avoided per month.
    pub const MEETINGS_AVOIDED_PER_MONTH: &str = "meetingsAvoidedPerMonth";
    /// Meeting length in minutes.
    pub const MEETING_MINUTES: &str = "meetingMinutes";
    /// Attendees per meeting.
    pub const ATTENDEES_PER_MEETING: &str = "attendeesPerMeeting";
    /// Information searches avoided per month.
    pub const SEARCHES_AVOIDED_PER_MONTH: &str = "searchesAvoidedPerMonth";
    /// Minutes per search.
    pub const MINUTES_PER_SEARCH: &str = "minutesPerSearch";
    /// Reports produced per quarter.
    pub const REPORTS_PER_QUARTER: &str = "reportsPerQuarter";
    /// Hours spent per report.
    pub const HOURS_PER_REPORT: &str = "hoursPerReport";
    /// Tools retired by consolidation.
    pub const TOOLS_RETIRED: &str = "toolsRetired";
    /// Monthly cost per retired tool.
    pub const MONTHLY_COST_PER_TOOL: &str = "monthlyCostPerTool";
    /// Full-time equivalents not hired.
    pub const FTE_AVOIDED: &str = "fteAvoided";
    /// Fully loaded annual cost per FTE.
    pub const ANNUAL_COST_PER_FTE: &str = "annualCostPerFte";
    /// Support tickets deflected per month.
    pub const TICKETS_DEFLECTED_PER_MONTH: &str = "ticketsDeflectedPerMonth";
    /// Cost to resolve one ticket.
    pub const COST_PER_TICKET: &str = "costPerTicket";
    /// Expected compliance violations per year.
    pub const EXPECTED_VIOLATIONS_PER_YEAR: &str = "expectedViolationsPerYear";
    /// Average penalty per violation.
    pub const AVG_PENALTY_PER_VIOLATION: &str = "avgPenaltyPerViolation";
    /// Fraction of exposure removed.
    pub const REDUCTION_RATE: &str = "reductionRate";
    /// Transactions processed per month.
    pub const TRANSACTIONS_PER_MONTH: &str = "transactionsPerMonth";
    /// Fraction of transactions with defects.
    pub const DEFECT_RATE: &str = "defectRate";
    /// Cost to remediate one error.
    pub const COST_PER_ERROR: &str = "costPerError";
    /// Annual probability of a security incident.
    pub const INCIDENT_PROBABILITY: &str = "incidentProbability";
    /// Cost of one data breach.
    pub const BREACH_COST: &str = "breachCost";
}

// ============================================================================
// SECTION: Dimensions
// ============================================================================

/// Business-impact dimension used for rollups.
///
/// # Invariants
/// - Variants are stable for wire labels and rollup ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Revenue gained or protected.
    RevenueImpact,
    /// Faster processes and shorter cycle times.
    SpeedCycleTime,
    /// Labor hours returned to the team.
    Productivity,
    /// Spend that no longer has to happen.
    CostAvoidance,
    /// Reduced exposure to errors, penalties, and incidents.
    RiskQuality,
}

impl Dimension {
    /// All dimensions in rollup order.
    pub const ALL: [Self; 5] = [
        Self::RevenueImpact,
        Self::SpeedCycleTime,
        Self::Productivity,
        Self::CostAvoidance,
        Self::RiskQuality,
    ];

    /// Returns the stable wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RevenueImpact => "revenue_impact",
            Self::SpeedCycleTime => "speed_cycle_time",
            Self::Productivity => "productivity",
            Self::CostAvoidance => "cost_avoidance",
            Self::RiskQuality => "risk_quality",
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RevenueImpact => "Revenue Impact",
            Self::SpeedCycleTime => "Speed & Cycle Time",
            Self::Productivity => "Productivity",
            Self::CostAvoidance => "Cost Avoidance",
            Self::RiskQuality => "Risk & Quality",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Archetypes
// ============================================================================

/// Economic pattern describing how an automation produces value.
///
/// # Invariants
/// - Exactly sixteen variants; each maps to one [`Dimension`].
/// - Wire labels are stable snake_case tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Recover revenue lost to leakage.
    RevenueLeakageRecovery,
    /// Convert more leads through faster follow-up.
    LeadConversionLift,
    /// Retain customers who would otherwise churn.
    CustomerRetention,
    /// Shorten process cycle time.
    ProcessAcceleration,
    /// Remove manual handoffs between teams.
    HandoffElimination,
    /// Collect receivables sooner.
    CashAcceleration,
    /// Eliminate a manual task entirely.
    TaskElimination,
    /// Make a manual task faster.
    TaskSimplification,
    /// Surface context so meetings and searches are unnecessary.
    ContextSurfacing,
    /// Generate recurring reports automatically.
    ReportAutomation,
    /// Retire redundant tools.
    ToolConsolidation,
    /// Absorb growth without new hires.
    HeadcountAvoidance,
    /// Deflect support tickets.
    SupportDeflection,
    /// Avoid compliance penalties.
    ComplianceAssurance,
    /// Reduce processing errors.
    ErrorReduction,
    /// Reduce security incident exposure.
    SecurityRiskReduction,
}

impl Archetype {
    /// All archetypes in catalogue order.
    pub const ALL: [Self; 16] = [
        Self::RevenueLeakageRecovery,
        Self::LeadConversionLift,
        Self::CustomerRetention,
        Self::ProcessAcceleration,
        Self::HandoffElimination,
        Self::CashAcceleration,
        Self::TaskElimination,
        Self::TaskSimplification,
        Self::ContextSurfacing,
        Self::ReportAutomation,
        Self::ToolConsolidation,
        Self::HeadcountAvoidance,
        Self::SupportDeflection,
        Self::ComplianceAssurance,
        Self::ErrorReduction,
        Self::SecurityRiskReduction,
    ];

    /// Returns the stable wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RevenueLeakageRecovery => "revenue_leakage_recovery",
            Self::LeadConversionLift => "lead_conversion_lift",
            Self::CustomerRetention => "customer_retention",
            Self::ProcessAcceleration => "process_acceleration",
            Self::HandoffElimination => "handoff_elimination",
            Self::CashAcceleration => "cash_acceleration",
            Self::TaskElimination => "task_elimination",
            Self::TaskSimplification => "task_simplification",
            Self::ContextSurfacing => "context_surfacing",
            Self::ReportAutomation => "report_automation",
            Self::ToolConsolidation => "tool_consolidation",
            Self::HeadcountAvoidance => "headcount_avoidance",
            Self::SupportDeflection => "support_deflection",
            Self::ComplianceAssurance => "compliance_assurance",
            Self::ErrorReduction => "error_reduction",
            Self::SecurityRiskReduction => "security_risk_reduction",
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RevenueLeakageRecovery => "Revenue Leakage Recovery",
            Self::LeadConversionLift => "Lead Conversion Lift",
            Self::CustomerRetention => "Customer Retention",
            Self::ProcessAcceleration => "Process Acceleration",
            Self::HandoffElimination => "Handoff Elimination",
            Self::CashAcceleration => "Cash Acceleration",
            Self::TaskElimination => "Task Elimination",
            Self::TaskSimplification => "Task Simplification",
            Self::ContextSurfacing => "Context Surfacing",
            Self::ReportAutomation => "Report Automation",
            Self::ToolConsolidation => "Tool Consolidation",
            Self::HeadcountAvoidance => "Headcount Avoidance",
            Self::SupportDeflection => "Support Deflection",
            Self::ComplianceAssurance => "Compliance Assurance",
            Self::ErrorReduction => "Error Reduction",
            Self::SecurityRiskReduction => "Security Risk Reduction",
        }
    }

    /// Returns the dimension this archetype rolls up into.
    #[must_use]
    pub const fn dimension(self) -> Dimension {
        match self {
            Self::RevenueLeakageRecovery | Self::LeadConversionLift | Self::CustomerRetention => {
                Dimension::RevenueImpact
            }
            Self::ProcessAcceleration | Self::HandoffElimination | Self::CashAcceleration => {
                Dimension::SpeedCycleTime
            }
            Self::TaskElimination
            | Self::TaskSimplification
            | Self::ContextSurfacing
            | Self::ReportAutomation => Dimension::Productivity,
            Self::ToolConsolidation | Self::HeadcountAvoidance | Self::SupportDeflection => {
                Dimension::CostAvoidance
            }
            Self::ComplianceAssurance | Self::ErrorReduction | Self::SecurityRiskReduction => {
                Dimension::RiskQuality
            }
        }
    }

    /// Returns the declared input keys consumed by this archetype's formula.
    #[must_use]
    pub const fn input_keys(self) -> &'static [&'static str] {
        match self {
            Self::RevenueLeakageRecovery => {
                &[keys::ANNUAL_REVENUE_AT_RISK, keys::LEAKAGE_RATE, keys::RECOVERY_RATE]
            }
            Self::LeadConversionLift => {
                &[keys::LEADS_PER_MONTH, keys::CONVERSION_RATE_LIFT, keys::AVG_DEAL_VALUE]
            }
            Self::CustomerRetention => &[
                keys::CUSTOMERS_AT_RISK_PER_YEAR,
                keys::CHURN_REDUCTION_RATE,
                keys::AVG_CUSTOMER_ANNUAL_VALUE,
            ],
            Self::ProcessAcceleration => &[
                keys::PROCESSES_PER_MONTH,
                keys::HOURS_SAVED_PER_PROCESS,
                keys::COST_OF_DELAY_PER_HOUR,
            ],
            Self::HandoffElimination => {
                &[keys::HANDOFFS_PER_MONTH, keys::MINUTES_PER_HANDOFF, keys::HOURLY_RATE]
            }
            Self::CashAcceleration => {
                &[keys::MONTHLY_RECEIVABLES, keys::DAYS_ACCELERATED, keys::COST_OF_CAPITAL]
            }
            Self::TaskElimination => {
                &[keys::TASKS_PER_MONTH, keys::MINUTES_PER_TASK, keys::HOURLY_RATE]
            }
            Self::TaskSimplification => {
                &[keys::TASKS_PER_MONTH, keys::MINUTES_SAVED_PER_TASK, keys::HOURLY_RATE]
            }
            Self::ContextSurfacing => &[
                keys::MEETINGS_AVOIDED_PER_MONTH,
                keys::MEETING_MINUTES,
                keys::ATTENDEES_PER_MEETING,
                keys::SEARCHES_AVOIDED_PER_MONTH,
                keys::MINUTES_PER_SEARCH,
                keys::HOURLY_RATE,
            ],
            Self::ReportAutomation => {
                &[keys::REPORTS_PER_QUARTER, keys::HOURS_PER_REPORT, keys::HOURLY_RATE]
            }
            Self::ToolConsolidation => &[keys::TOOLS_RETIRED, keys::MONTHLY_COST_PER_TOOL],
            Self::HeadcountAvoidance => &[keys::FTE_AVOIDED, keys::ANNUAL_COST_PER_FTE],
            Self::SupportDeflection => &[keys::TICKETS_DEFLECTED_PER_MONTH, keys::COST_PER_TICKET],
            Self::ComplianceAssurance => &[
                keys::EXPECTED_VIOLATIONS_PER_YEAR,
                keys::AVG_PENALTY_PER_VIOLATION,
                keys::REDUCTION_RATE,
            ],
            Self::ErrorReduction => &[
                keys::TRANSACTIONS_PER_MONTH,
                keys::DEFECT_RATE,
                keys::COST_PER_ERROR,
                keys::REDUCTION_RATE,
            ],
            Self::SecurityRiskReduction => {
                &[keys::INCIDENT_PROBABILITY, keys::BREACH_COST, keys::REDUCTION_RATE]
            }
        }
    }

    /// Returns the monthly run-count input for task-based archetypes.
    ///
    /// Only task-based archetypes have a countable proxy for automation runs;
    /// every other archetype returns `None`.
    #[must_use]
    pub const fn run_count_key(self) -> Option<&'static str> {
        match self {
            Self::TaskElimination | Self::TaskSimplification => Some(keys::TASKS_PER_MONTH),
            Self::ProcessAcceleration => Some(keys::PROCESSES_PER_MONTH),
            Self::HandoffElimination => Some(keys::HANDOFFS_PER_MONTH),
            _ => None,
        }
    }

    /// Returns true for archetypes whose value scales with a monthly run count.
    #[must_use]
    pub const fn is_task_based(self) -> bool {
        self.run_count_key().is_some()
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized archetype tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown archetype tag: {0}")]
pub struct ArchetypeParseError(pub String);

impl FromStr for Archetype {
    type Err = ArchetypeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|archetype| archetype.as_str() == value)
            .ok_or_else(|| ArchetypeParseError(value.to_string()))
    }
}

// ============================================================================
// SECTION: Archetype Tags
// ============================================================================

/// Archetype tag as stored on a record, tolerant of unknown values.
///
/// # Invariants
/// - Serializes back to the original tag string in both variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArchetypeTag {
    /// Tag matching one of the sixteen archetypes.
    Known(Archetype),
    /// Tag the engine does not recognize.
    Unrecognized(String),
}

impl ArchetypeTag {
    /// Returns the recognized archetype, if any.
    #[must_use]
    pub const fn archetype(&self) -> Option<Archetype> {
        match self {
            Self::Known(archetype) => Some(*archetype),
            Self::Unrecognized(_) => None,
        }
    }

    /// Returns the tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(archetype) => archetype.as_str(),
            Self::Unrecognized(tag) => tag,
        }
    }
}

impl From<String> for ArchetypeTag {
    fn from(value: String) -> Self {
        value.parse::<Archetype>().map_or(Self::Unrecognized(value), Self::Known)
    }
}

impl From<&str> for ArchetypeTag {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ArchetypeTag> for String {
    fn from(value: ArchetypeTag) -> Self {
        match value {
            ArchetypeTag::Known(archetype) => archetype.as_str().to_string(),
            ArchetypeTag::Unrecognized(tag) => tag,
        }
    }
}

impl From<Archetype> for ArchetypeTag {
    fn from(value: Archetype) -> Self {
        Self::Known(value)
    }
}

impl fmt::Display for ArchetypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
