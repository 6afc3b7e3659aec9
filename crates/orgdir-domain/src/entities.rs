//! Core entities exposed as REST aggregates

use serde::{Deserialize, Serialize};

use crate::value_objects::RecordId;

/// Entity marker: identity shared by every independently addressable record.
pub trait Entity {
    /// Returns the record identifier.
    fn id(&self) -> RecordId;
}

/// A company owning an ordered collection of departments
///
/// Every department in the collection is exclusively owned by this company;
/// departments are never shared across companies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: RecordId,
    pub name: String,
    pub departments: Vec<Department>,
}

/// A department, either standalone or owned by a single company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: RecordId,
    pub name: String,
}

/// A team owning exactly one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: RecordId,
    pub project: Project,
}

/// A project embedded in exactly one team, owning one manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub manager: Manager,
}

/// Contact point for a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    pub contact_info: String,
}

impl Entity for Company {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Department {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Team {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Input form of a company; identifiers are assigned by the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDraft {
    pub name: String,
    #[serde(default)]
    pub departments: Vec<DepartmentDraft>,
}

/// Input form of a department
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentDraft {
    /// Set in a company replace body to mark an already-owned department as
    /// retained. Ignored everywhere else; identifiers are never client-assigned.
    #[serde(default)]
    pub id: Option<RecordId>,
    pub name: String,
}

/// Input form of a team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamDraft {
    pub project: Project,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_draft_departments_default_to_empty() {
        let draft: CompanyDraft = serde_json::from_str(r#"{"name": "Acme"}"#).unwrap();
        assert_eq!(draft.name, "Acme");
        assert!(draft.departments.is_empty());
    }

    #[test]
    fn department_draft_id_is_optional() {
        let draft: DepartmentDraft = serde_json::from_str(r#"{"name": "R&D"}"#).unwrap();
        assert!(draft.id.is_none());
    }

    #[test]
    fn team_draft_requires_full_ownership_chain() {
        let draft: TeamDraft =
            serde_json::from_str(r#"{"project": {"manager": {"contact_info": "a@b.com"}}}"#)
                .unwrap();
        assert_eq!(draft.project.manager.contact_info, "a@b.com");

        let missing: Result<TeamDraft, _> = serde_json::from_str(r#"{"project": {}}"#);
        assert!(missing.is_err());
    }
}
