//! The shared record store and its per-aggregate collection handles

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use orgdir_domain::{
    Company, CompanyDraft, Department, DepartmentDraft, DomainError, DomainResult, RecordId, Team,
    TeamDraft,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::collection::Collection;

/// Row backing a company: the owned department ids, in collection order.
#[derive(Debug, Clone)]
struct CompanyRow {
    name: String,
    departments: Vec<RecordId>,
}

/// All tables behind one lock. A lock scope is a transaction: no caller can
/// observe a company row holding a dangling department id, or a department
/// record surviving its removal from an owner.
#[derive(Debug, Default)]
struct Tables {
    companies: HashMap<RecordId, CompanyRow>,
    departments: HashMap<RecordId, Department>,
    teams: HashMap<RecordId, Team>,
}

impl Tables {
    /// Materialize a company aggregate from its row.
    fn resolve_company(&self, id: RecordId, row: &CompanyRow) -> Company {
        let departments = row
            .departments
            .iter()
            .filter_map(|dept_id| self.departments.get(dept_id).cloned())
            .collect();
        Company {
            id,
            name: row.name.clone(),
            departments,
        }
    }

    /// Insert a department under a fresh identifier and return the id.
    fn add_department(&mut self, name: String) -> RecordId {
        let id = RecordId::new();
        self.departments.insert(id, Department { id, name });
        id
    }
}

/// Record counts per table, as reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCounts {
    /// Live company records
    pub companies: usize,
    /// Live department records
    pub departments: usize,
    /// Live team records
    pub teams: usize,
}

/// Shared in-memory store for every aggregate.
///
/// Cloning is cheap; every clone addresses the same tables.
#[derive(Debug, Clone, Default)]
pub struct OrgStore {
    tables: Arc<RwLock<Tables>>,
}

impl OrgStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle on the company table.
    pub fn companies(&self) -> Companies {
        Companies {
            store: self.clone(),
        }
    }

    /// Handle on the department table.
    pub fn departments(&self) -> Departments {
        Departments {
            store: self.clone(),
        }
    }

    /// Handle on the team table.
    pub fn teams(&self) -> Teams {
        Teams {
            store: self.clone(),
        }
    }

    /// Record counts per table at a consistent snapshot.
    pub async fn counts(&self) -> StoreCounts {
        let tables = self.tables.read().await;
        StoreCounts {
            companies: tables.companies.len(),
            departments: tables.departments.len(),
            teams: tables.teams.len(),
        }
    }
}

/// Handle exposing the company table as a [`Collection`].
///
/// Companies own their departments exclusively: inserting a company persists
/// its nested departments, replacing one orphan-removes whatever the new
/// collection no longer references, and removing one cascades.
#[derive(Debug, Clone)]
pub struct Companies {
    store: OrgStore,
}

#[async_trait]
impl Collection for Companies {
    const SEGMENT: &'static str = "companies";

    type Entity = Company;
    type Draft = CompanyDraft;

    async fn list(&self) -> Vec<Company> {
        let tables = self.store.tables.read().await;
        tables
            .companies
            .iter()
            .map(|(id, row)| tables.resolve_company(*id, row))
            .collect()
    }

    async fn get(&self, id: RecordId) -> DomainResult<Company> {
        let tables = self.store.tables.read().await;
        let row = tables
            .companies
            .get(&id)
            .ok_or_else(|| DomainError::not_found("company", id))?;
        Ok(tables.resolve_company(id, row))
    }

    async fn insert(&self, draft: CompanyDraft) -> DomainResult<Company> {
        let mut tables = self.store.tables.write().await;
        let id = RecordId::new();
        // Nested drafts get store-assigned ids; any id they carry is ignored.
        let departments = draft
            .departments
            .into_iter()
            .map(|dept| tables.add_department(dept.name))
            .collect();
        let row = CompanyRow {
            name: draft.name,
            departments,
        };
        let company = tables.resolve_company(id, &row);
        tables.companies.insert(id, row);
        debug!(%id, "company created");
        Ok(company)
    }

    async fn replace(&self, id: RecordId, draft: CompanyDraft) -> DomainResult<Company> {
        let mut tables = self.store.tables.write().await;
        let previous = tables
            .companies
            .get(&id)
            .ok_or_else(|| DomainError::not_found("company", id))?
            .departments
            .clone();

        let mut retained = Vec::with_capacity(draft.departments.len());
        for dept in draft.departments {
            // A draft department keeps its id only if this company already
            // owns it; everything else is created fresh.
            match dept.id.filter(|dept_id| previous.contains(dept_id)) {
                Some(dept_id) => {
                    tables.departments.insert(
                        dept_id,
                        Department {
                            id: dept_id,
                            name: dept.name,
                        },
                    );
                    retained.push(dept_id);
                }
                None => retained.push(tables.add_department(dept.name)),
            }
        }

        // Orphan removal: departments dropped from the collection leave the
        // store in the same transaction.
        for dept_id in previous {
            if !retained.contains(&dept_id) {
                tables.departments.remove(&dept_id);
            }
        }

        let row = CompanyRow {
            name: draft.name,
            departments: retained,
        };
        let company = tables.resolve_company(id, &row);
        tables.companies.insert(id, row);
        debug!(%id, "company replaced");
        Ok(company)
    }

    async fn remove(&self, id: RecordId) -> DomainResult<()> {
        let mut tables = self.store.tables.write().await;
        let row = tables
            .companies
            .remove(&id)
            .ok_or_else(|| DomainError::not_found("company", id))?;
        for dept_id in &row.departments {
            tables.departments.remove(dept_id);
        }
        debug!(%id, cascaded = row.departments.len(), "company deleted");
        Ok(())
    }

    async fn clear(&self) {
        let mut tables = self.store.tables.write().await;
        let rows: Vec<CompanyRow> = tables.companies.drain().map(|(_, row)| row).collect();
        for row in rows {
            for dept_id in row.departments {
                tables.departments.remove(&dept_id);
            }
        }
    }
}

/// Handle exposing the department table as a [`Collection`].
#[derive(Debug, Clone)]
pub struct Departments {
    store: OrgStore,
}

#[async_trait]
impl Collection for Departments {
    const SEGMENT: &'static str = "departments";

    type Entity = Department;
    type Draft = DepartmentDraft;

    async fn list(&self) -> Vec<Department> {
        let tables = self.store.tables.read().await;
        tables.departments.values().cloned().collect()
    }

    async fn get(&self, id: RecordId) -> DomainResult<Department> {
        let tables = self.store.tables.read().await;
        tables
            .departments
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("department", id))
    }

    async fn insert(&self, draft: DepartmentDraft) -> DomainResult<Department> {
        let mut tables = self.store.tables.write().await;
        let id = tables.add_department(draft.name);
        debug!(%id, "department created");
        Ok(tables.departments[&id].clone())
    }

    async fn replace(&self, id: RecordId, draft: DepartmentDraft) -> DomainResult<Department> {
        let mut tables = self.store.tables.write().await;
        if !tables.departments.contains_key(&id) {
            return Err(DomainError::not_found("department", id));
        }
        let department = Department {
            id,
            name: draft.name,
        };
        tables.departments.insert(id, department.clone());
        debug!(%id, "department replaced");
        Ok(department)
    }

    async fn remove(&self, id: RecordId) -> DomainResult<()> {
        let mut tables = self.store.tables.write().await;
        if tables.departments.remove(&id).is_none() {
            return Err(DomainError::not_found("department", id));
        }
        // Keep owners consistent: no company may hold a dangling id.
        for row in tables.companies.values_mut() {
            row.departments.retain(|dept_id| *dept_id != id);
        }
        debug!(%id, "department deleted");
        Ok(())
    }

    async fn clear(&self) {
        let mut tables = self.store.tables.write().await;
        tables.departments.clear();
        for row in tables.companies.values_mut() {
            row.departments.clear();
        }
    }
}

/// Handle exposing the team table as a [`Collection`].
///
/// The project and manager travel inside the team record; they are not
/// independently addressable.
#[derive(Debug, Clone)]
pub struct Teams {
    store: OrgStore,
}

#[async_trait]
impl Collection for Teams {
    const SEGMENT: &'static str = "teams";

    type Entity = Team;
    type Draft = TeamDraft;

    async fn list(&self) -> Vec<Team> {
        let tables = self.store.tables.read().await;
        tables.teams.values().cloned().collect()
    }

    async fn get(&self, id: RecordId) -> DomainResult<Team> {
        let tables = self.store.tables.read().await;
        tables
            .teams
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("team", id))
    }

    async fn insert(&self, draft: TeamDraft) -> DomainResult<Team> {
        let mut tables = self.store.tables.write().await;
        let id = RecordId::new();
        let team = Team {
            id,
            project: draft.project,
        };
        tables.teams.insert(id, team.clone());
        debug!(%id, "team created");
        Ok(team)
    }

    async fn replace(&self, id: RecordId, draft: TeamDraft) -> DomainResult<Team> {
        let mut tables = self.store.tables.write().await;
        if !tables.teams.contains_key(&id) {
            return Err(DomainError::not_found("team", id));
        }
        let team = Team {
            id,
            project: draft.project,
        };
        tables.teams.insert(id, team.clone());
        debug!(%id, "team replaced");
        Ok(team)
    }

    async fn remove(&self, id: RecordId) -> DomainResult<()> {
        let mut tables = self.store.tables.write().await;
        if tables.teams.remove(&id).is_none() {
            return Err(DomainError::not_found("team", id));
        }
        debug!(%id, "team deleted");
        Ok(())
    }

    async fn clear(&self) {
        let mut tables = self.store.tables.write().await;
        tables.teams.clear();
    }
}
