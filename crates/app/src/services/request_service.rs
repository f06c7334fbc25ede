//! Request service: filing requests and moving them through the workflow.

use std::collections::HashMap;

use gearguard_domain::calendar::CalendarEvent;
use gearguard_domain::error::{GearGuardError, NotFoundError, ValidationError};
use gearguard_domain::id::{EmployeeId, EquipmentId, RequestId, TeamId};
use gearguard_domain::kanban::KanbanBoard;
use gearguard_domain::request::{
    MaintenanceRequest, RequestDetails, RequestDraft, RequestFilter, RequestState,
};
use gearguard_domain::time::{now, year_of};

use crate::ports::{EmployeeRepository, EquipmentRepository, RequestRepository, TeamRepository};
use crate::services::distinct;

/// Display names used to enrich requests.
#[derive(Default)]
struct Names {
    equipment: HashMap<EquipmentId, String>,
    teams: HashMap<TeamId, String>,
    employees: HashMap<EmployeeId, String>,
}

impl Names {
    fn details(&self, request: MaintenanceRequest) -> RequestDetails {
        RequestDetails {
            equipment_name: self.equipment.get(&request.equipment_id).cloned(),
            team_name: self.teams.get(&request.maintenance_team_id).cloned(),
            technician_name: request
                .assigned_technician_id
                .and_then(|id| self.employees.get(&id).cloned()),
            request,
        }
    }
}

/// Application service for maintenance requests.
pub struct RequestService<R, Q, T, E> {
    requests: R,
    equipment: Q,
    teams: T,
    employees: E,
}

impl<R, Q, T, E> RequestService<R, Q, T, E>
where
    R: RequestRepository,
    Q: EquipmentRepository,
    T: TeamRepository,
    E: EmployeeRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(requests: R, equipment: Q, teams: T, employees: E) -> Self {
        Self {
            requests,
            equipment,
            teams,
            employees,
        }
    }

    /// Names for every record the given requests point at, one lookup per table.
    async fn names_for(&self, requests: &[MaintenanceRequest]) -> Result<Names, GearGuardError> {
        let equipment = distinct(requests.iter().map(|r| r.equipment_id));
        let teams = distinct(requests.iter().map(|r| r.maintenance_team_id));
        let technicians = distinct(requests.iter().filter_map(|r| r.assigned_technician_id));
        Ok(Names {
            equipment: self.equipment.names(&equipment).await?,
            teams: self.teams.names(&teams).await?,
            employees: self.employees.names(&technicians).await?,
        })
    }

    async fn with_details(
        &self,
        request: MaintenanceRequest,
    ) -> Result<RequestDetails, GearGuardError> {
        let names = self.names_for(std::slice::from_ref(&request)).await?;
        Ok(names.details(request))
    }

    async fn find(&self, id: RequestId) -> Result<MaintenanceRequest, GearGuardError> {
        self.requests.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// File a request against existing equipment.
    ///
    /// Category, department, owner and team are copied from the equipment.
    /// The technician falls back to the equipment's default technician. The
    /// request number is the next free one for the current year.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] if the draft is invalid or
    /// names an unknown technician, [`GearGuardError::NotFound`] when the
    /// equipment does not exist, or a storage error.
    #[tracing::instrument(skip(self, draft), fields(equipment_id = %draft.equipment_id))]
    pub async fn create_request(
        &self,
        draft: RequestDraft,
    ) -> Result<RequestDetails, GearGuardError> {
        draft.validate()?;
        let equipment = self
            .equipment
            .get_by_id(draft.equipment_id)
            .await?
            .ok_or_else(|| NotFoundError {
                entity: "Equipment",
                id: draft.equipment_id.to_string(),
            })?;
        if let Some(id) = draft.assigned_technician_id
            && self.employees.get_by_id(id).await?.is_none()
        {
            return Err(ValidationError::UnknownValue {
                field: "assignedTechnicianId",
                value: id.to_string(),
            }
            .into());
        }
        let new_request = draft.for_equipment(&equipment)?;
        let created = self.requests.create(new_request, year_of(now())).await?;
        tracing::info!(request_number = %created.request_number, "request filed");
        self.with_details(created).await
    }

    /// Look up a request by id.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::NotFound`] when no request with `id`
    /// exists, or a storage error.
    pub async fn get_request(&self, id: RequestId) -> Result<RequestDetails, GearGuardError> {
        let request = self.find(id).await?;
        self.with_details(request).await
    }

    /// List requests newest first, narrowed by `filter`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn list_requests(
        &self,
        filter: RequestFilter,
    ) -> Result<Vec<RequestDetails>, GearGuardError> {
        let requests = self.requests.get_all(filter).await?;
        let names = self.names_for(&requests).await?;
        Ok(requests.into_iter().map(|r| names.details(r)).collect())
    }

    /// Move a request to `state`. Moving to `Scrap` also scraps the equipment.
    ///
    /// Any state may follow any other.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::NotFound`] when no request with `id`
    /// exists, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn update_state(
        &self,
        id: RequestId,
        state: RequestState,
    ) -> Result<RequestDetails, GearGuardError> {
        let updated = self
            .requests
            .update_state(id, state, now())
            .await?
            .ok_or_else(|| not_found(id))?;
        if state.scraps_equipment() {
            tracing::info!(equipment_id = %updated.equipment_id, "equipment scrapped");
        }
        self.with_details(updated).await
    }

    /// Delete a request.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::NotFound`] when no request with `id`
    /// exists, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_request(&self, id: RequestId) -> Result<(), GearGuardError> {
        self.find(id).await?;
        self.requests.delete(id).await
    }

    /// All requests grouped by state, earliest scheduled first.
    ///
    /// Unscheduled requests sort after scheduled ones.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn kanban(&self) -> Result<KanbanBoard<RequestDetails>, GearGuardError> {
        let mut requests = self.list_requests(RequestFilter::default()).await?;
        requests.sort_by_key(|d| (d.request.scheduled_date.is_none(), d.request.scheduled_date));
        Ok(KanbanBoard::from_requests(requests))
    }

    /// Scheduled preventive requests as calendar entries, earliest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn calendar(&self) -> Result<Vec<CalendarEvent>, GearGuardError> {
        let mut requests = self.requests.get_all(RequestFilter::default()).await?;
        requests.sort_by_key(|r| r.scheduled_date);
        let names = self.names_for(&requests).await?;
        Ok(requests
            .iter()
            .filter_map(|request| {
                CalendarEvent::from_request(
                    request,
                    names
                        .equipment
                        .get(&request.equipment_id)
                        .cloned()
                        .unwrap_or_default(),
                    names
                        .teams
                        .get(&request.maintenance_team_id)
                        .cloned()
                        .unwrap_or_default(),
                )
            })
            .collect())
    }
}

fn not_found(id: RequestId) -> GearGuardError {
    NotFoundError {
        entity: "Request",
        id: id.to_string(),
    }
    .into()
}
