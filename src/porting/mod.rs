// =============================================================================
// Porting - Request Lifecycle for Mobile Number Porting
// =============================================================================
//
// Tracks porting requests in progress, keyed by the number being ported.
// A request moves through:
//
//   Draft -> UpcAttached -> Submitted -> Completed | Rejected
//
// A Draft or UpcAttached request whose UPC passes its validity window is
// expired and evicted by cleanup_expired(). Requests in a terminal state
// (Completed, Rejected, Expired) may be reopened with a fresh request.
//
// Edge cases handled here rather than by callers:
// - porting to the operator the number is already on
// - target operator not licensed in the subscriber's circle (MTNL)
// - UPC attached or submitted after its validity window
// - duplicate requests for a number already mid-port

pub mod rules;
pub mod upc;

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::reference::operators::OperatorId;
use crate::resolver::{self, InvalidNumberError};
use rules::{check_eligibility, PortingBlocker, SubscriberProfile};
use upc::UpcError;

/// Lifecycle state of a porting request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PortStatus {
    Draft,
    UpcAttached,
    Submitted,
    Completed,
    Rejected,
    Expired,
}

impl PortStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PortStatus::Completed | PortStatus::Rejected | PortStatus::Expired
        )
    }
}

/// One porting request
#[derive(Debug, Clone, Serialize)]
pub struct PortingRequest {
    pub id: Uuid,
    pub msisdn: String,
    pub from_operator: OperatorId,
    pub to_operator: OperatorId,
    /// Circle the number resolved to, when the resolver could tell
    pub circle: Option<&'static str>,
    pub upc: Option<String>,
    pub upc_issued_on: Option<NaiveDate>,
    pub status: PortStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PortingError {
    #[error(transparent)]
    Number(#[from] InvalidNumberError),
    #[error(transparent)]
    Upc(#[from] UpcError),
    #[error("subscriber is not eligible to port: {0:?}")]
    NotEligible(Vec<PortingBlocker>),
    #[error("could not determine the current operator for the number")]
    Unresolvable,
    #[error("the number is already on the target operator")]
    SameOperator,
    #[error("{operator:?} does not serve circle {circle}")]
    TargetUnavailable {
        operator: OperatorId,
        circle: &'static str,
    },
    #[error("a porting request for {0} is already open")]
    DuplicateRequest(String),
    #[error("no porting request found for {0}")]
    UnknownRequest(String),
    #[error("the UPC has passed its validity window")]
    UpcExpired,
    #[error("cannot move a {from:?} request to {to:?}")]
    InvalidTransition { from: PortStatus, to: PortStatus },
}

/// First day the request's UPC is no longer usable
fn upc_deadline(request: &PortingRequest) -> Option<NaiveDate> {
    let issued = request.upc_issued_on?;
    let days = request
        .circle
        .map(upc::upc_validity_days)
        .unwrap_or(upc::STANDARD_UPC_VALIDITY_DAYS);
    Some(issued + Duration::days(days))
}

/// In-memory tracker for porting requests in progress
#[derive(Debug, Default)]
pub struct PortingTracker {
    /// Requests keyed by the number being ported
    requests: HashMap<String, PortingRequest>,
}

impl PortingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a Draft request for an eligible subscriber
    ///
    /// Resolves the number to find the current operator and circle, then
    /// runs the eligibility rules against the profile.
    pub fn open_request(
        &mut self,
        profile: &SubscriberProfile,
        target: OperatorId,
        today: NaiveDate,
    ) -> Result<Uuid, PortingError> {
        let resolved = resolver::resolve(&profile.msisdn)?;

        if let Some(existing) = self.requests.get(&profile.msisdn) {
            if !existing.status.is_terminal() {
                return Err(PortingError::DuplicateRequest(profile.msisdn.clone()));
            }
        }

        let blockers = check_eligibility(profile, today);
        if !blockers.is_empty() {
            return Err(PortingError::NotEligible(blockers));
        }

        let from_operator = match resolved.operator {
            Some(op) => op,
            None => {
                log::warn!("number {} resolved to no operator", profile.msisdn);
                return Err(PortingError::Unresolvable);
            }
        };
        if from_operator == target {
            return Err(PortingError::SameOperator);
        }
        if let Some(circle) = resolved.circle {
            if !target.info().operates_in(circle) {
                return Err(PortingError::TargetUnavailable {
                    operator: target,
                    circle,
                });
            }
        }

        let now = Utc::now();
        let request = PortingRequest {
            id: Uuid::new_v4(),
            msisdn: profile.msisdn.clone(),
            from_operator,
            to_operator: target,
            circle: resolved.circle,
            upc: None,
            upc_issued_on: None,
            status: PortStatus::Draft,
            created_at: now,
            updated_at: now,
        };
        let id = request.id;
        log::info!(
            "porting request opened for {}: {:?} -> {:?}",
            profile.msisdn,
            from_operator,
            target
        );
        self.requests.insert(profile.msisdn.clone(), request);
        Ok(id)
    }

    /// Attach an SMS-issued UPC to a Draft request
    pub fn attach_upc(
        &mut self,
        msisdn: &str,
        code: &str,
        issued_on: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), PortingError> {
        let request = self
            .requests
            .get_mut(msisdn)
            .ok_or_else(|| PortingError::UnknownRequest(msisdn.to_string()))?;

        if request.status != PortStatus::Draft {
            return Err(PortingError::InvalidTransition {
                from: request.status,
                to: PortStatus::UpcAttached,
            });
        }
        upc::validate_upc(code)?;

        let days = request
            .circle
            .map(upc::upc_validity_days)
            .unwrap_or(upc::STANDARD_UPC_VALIDITY_DAYS);
        if today >= issued_on + Duration::days(days) {
            return Err(PortingError::UpcExpired);
        }

        request.upc = Some(code.to_string());
        request.upc_issued_on = Some(issued_on);
        request.status = PortStatus::UpcAttached;
        request.updated_at = Utc::now();
        log::info!("UPC attached to porting request for {}", msisdn);
        Ok(())
    }

    /// Submit the request to the target operator; returns the expected
    /// completion date
    pub fn submit(&mut self, msisdn: &str, today: NaiveDate) -> Result<NaiveDate, PortingError> {
        let request = self
            .requests
            .get_mut(msisdn)
            .ok_or_else(|| PortingError::UnknownRequest(msisdn.to_string()))?;

        if request.status != PortStatus::UpcAttached {
            return Err(PortingError::InvalidTransition {
                from: request.status,
                to: PortStatus::Submitted,
            });
        }
        if upc_deadline(request).map_or(false, |deadline| today >= deadline) {
            return Err(PortingError::UpcExpired);
        }

        request.status = PortStatus::Submitted;
        request.updated_at = Utc::now();

        let days = request
            .circle
            .map(rules::porting_working_days)
            .unwrap_or(rules::STANDARD_PORTING_WORKING_DAYS);
        let completion = rules::add_working_days(today, days);
        log::info!(
            "porting request for {} submitted, expected completion {}",
            msisdn,
            completion
        );
        Ok(completion)
    }

    /// Mark a Submitted request as completed
    pub fn complete(&mut self, msisdn: &str) -> Result<(), PortingError> {
        self.finish(msisdn, PortStatus::Completed)
    }

    /// Mark a Submitted request as rejected by the donor operator
    pub fn reject(&mut self, msisdn: &str) -> Result<(), PortingError> {
        self.finish(msisdn, PortStatus::Rejected)
    }

    fn finish(&mut self, msisdn: &str, outcome: PortStatus) -> Result<(), PortingError> {
        let request = self
            .requests
            .get_mut(msisdn)
            .ok_or_else(|| PortingError::UnknownRequest(msisdn.to_string()))?;

        if request.status != PortStatus::Submitted {
            return Err(PortingError::InvalidTransition {
                from: request.status,
                to: outcome,
            });
        }
        request.status = outcome;
        request.updated_at = Utc::now();
        log::info!("porting request for {} finished as {:?}", msisdn, outcome);
        Ok(())
    }

    /// Evict requests whose UPC has expired before submission; returns the
    /// numbers that were dropped
    pub fn cleanup_expired(&mut self, today: NaiveDate) -> Vec<String> {
        let mut expired = Vec::new();

        self.requests.retain(|msisdn, request| {
            let lapsed = request.status == PortStatus::UpcAttached
                && upc_deadline(request).map_or(false, |d| today >= d);
            if lapsed {
                log::info!("porting request for {} expired unsubmitted", msisdn);
                expired.push(msisdn.clone());
                false
            } else {
                true
            }
        });

        expired
    }

    pub fn get(&self, msisdn: &str) -> Option<&PortingRequest> {
        self.requests.get(msisdn)
    }

    /// Requests not yet in a terminal state
    pub fn active_requests(&self) -> Vec<&PortingRequest> {
        self.requests
            .values()
            .filter(|r| !r.status.is_terminal())
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.requests
            .values()
            .filter(|r| !r.status.is_terminal())
            .count()
    }
}
