// Rust guideline compliant 2026-10-18

//! Request body composition for new tickets.

use crate::config::{require, EnvironmentConfig};
use crate::models::{
    BacklogPosition, HierarchyContext, IssueKey, IssueKind, SprintPosition, SprintResolution,
};
use crate::sprint;
use crate::tracker::Tracker;
use crate::Result;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Per-call overrides for a composed ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Project key overriding the configured default.
    pub project: Option<String>,
    /// Description overriding the summary.
    pub description: Option<String>,
    /// Sprint or backlog placement for regular tickets.
    pub placement: Option<SprintPosition>,
}

/// A field id paired with the value it receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment<V> {
    /// Tracker field id.
    pub field: String,
    /// Value written to the field.
    pub value: V,
}

/// Composed creation payload plus the follow-up calls it implies.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketRequest {
    /// Project key.
    pub project: String,
    /// Ticket summary.
    pub summary: String,
    /// Ticket description.
    pub description: String,
    /// Issue kind.
    pub kind: IssueKind,
    /// Epic name field, set for epics only.
    pub epic_name: Option<FieldAssignment<String>>,
    /// Epic link field, set for regular tickets under an epic.
    pub epic_link: Option<FieldAssignment<IssueKey>>,
    /// Priority name.
    pub priority: String,
    /// Sprint field, set when a next sprint was resolved.
    pub sprint: Option<FieldAssignment<u64>>,
    /// Operator-declared fields, applied last.
    pub custom_fields: BTreeMap<String, Value>,
    /// Deliverable to link this epic to after creation.
    pub parent_link: Option<IssueKey>,
    /// Backlog ranking to apply after creation.
    pub backlog_rank: Option<BacklogPosition>,
}

impl TicketRequest {
    /// Renders the `{"fields": {...}}` body for the create call.
    ///
    /// Custom fields are merged last and overwrite any field of the same id.
    pub fn to_body(&self) -> Value {
        let mut fields = Map::new();
        fields.insert("project".to_string(), json!({ "key": self.project }));
        fields.insert("summary".to_string(), json!(self.summary));
        fields.insert("description".to_string(), json!(self.description));
        fields.insert("issuetype".to_string(), json!({ "name": self.kind.as_str() }));

        if let Some(epic_name) = &self.epic_name {
            fields.insert(epic_name.field.clone(), json!(epic_name.value));
        }
        if let Some(epic_link) = &self.epic_link {
            fields.insert(epic_link.field.clone(), json!(epic_link.value));
        }
        fields.insert("priority".to_string(), json!({ "name": self.priority }));
        if let Some(sprint) = &self.sprint {
            fields.insert(sprint.field.clone(), json!(sprint.value));
        }
        for (field, value) in &self.custom_fields {
            fields.insert(field.clone(), value.clone());
        }

        json!({ "fields": fields })
    }
}

/// Builds ticket requests from static environment configuration.
#[derive(Debug, Clone)]
pub struct FieldComposer {
    project: String,
    priority: String,
    epic_field: String,
    epic_name_field: String,
    sprint_field: String,
    board_id: String,
    parent_link_field: Option<String>,
    custom_fields: BTreeMap<String, Value>,
}

impl FieldComposer {
    /// Creates a composer from an environment section.
    ///
    /// # Errors
    ///
    /// Returns `MissingConfiguration` if `epic_field`, `epic_name_field`,
    /// `sprint_field` or `board_id` is absent.
    pub fn new(env: &EnvironmentConfig) -> Result<Self> {
        Ok(Self {
            project: env.project.clone(),
            priority: env.priority.clone(),
            epic_field: require(&env.epic_field, "epic_field")?.to_string(),
            epic_name_field: require(&env.epic_name_field, "epic_name_field")?.to_string(),
            sprint_field: require(&env.sprint_field, "sprint_field")?.to_string(),
            board_id: require(&env.board_id, "board_id")?.to_string(),
            parent_link_field: env
                .parent_link_field
                .as_deref()
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string),
            custom_fields: env.custom_fields.clone(),
        })
    }

    /// Board used for sprint lookup and backlog ranking.
    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    /// Default project key.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Composes the request for a new ticket.
    ///
    /// # Arguments
    ///
    /// * `tracker` - Tracker used when a next sprint must be looked up
    /// * `kind` - Issue kind
    /// * `summary` - Ticket summary
    /// * `context` - Current deliverable/epic context
    /// * `options` - Per-call overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the sprint lookup fails.
    pub fn compose<T: Tracker + ?Sized>(
        &self,
        tracker: &T,
        kind: IssueKind,
        summary: &str,
        context: &HierarchyContext,
        options: &ComposeOptions,
    ) -> Result<TicketRequest> {
        let epic_name = (kind == IssueKind::Epic).then(|| FieldAssignment {
            field: self.epic_name_field.clone(),
            value: summary.to_string(),
        });

        let epic_link = if kind.is_regular() {
            context.current_epic.clone().map(|epic| FieldAssignment {
                field: self.epic_field.clone(),
                value: epic,
            })
        } else {
            None
        };

        let parent_link = if kind == IssueKind::Epic {
            context.current_deliverable.clone()
        } else {
            None
        };

        let mut sprint = None;
        let mut backlog_rank = None;
        if kind.is_regular() {
            if let Some(position) = options.placement {
                match sprint::resolve(tracker, position, &self.board_id)? {
                    SprintResolution::IterationId(id) => {
                        sprint = Some(FieldAssignment {
                            field: self.sprint_field.clone(),
                            value: id,
                        });
                    }
                    SprintResolution::NoActiveIteration => {}
                    SprintResolution::Deferred(rank) => backlog_rank = Some(rank),
                }
            }
        }

        Ok(TicketRequest {
            project: options
                .project
                .clone()
                .unwrap_or_else(|| self.project.clone()),
            summary: summary.to_string(),
            description: options
                .description
                .clone()
                .unwrap_or_else(|| summary.to_string()),
            kind,
            epic_name,
            epic_link,
            priority: self.priority.clone(),
            sprint,
            custom_fields: self.custom_fields.clone(),
            parent_link,
            backlog_rank,
        })
    }

    /// Body of the update that files a ticket under an epic.
    pub fn epic_link_body(&self, epic: &IssueKey) -> Value {
        let mut fields = Map::new();
        fields.insert(self.epic_field.clone(), json!(epic));
        json!({ "fields": fields })
    }

    /// Body of the update that attaches an epic to its deliverable.
    ///
    /// Without a configured `parent_link_field` the epic gets an
    /// `Initiative` issue link whose inward side is the deliverable.
    pub fn parent_link_body(&self, parent: &IssueKey) -> Value {
        match &self.parent_link_field {
            Some(field) => {
                let mut fields = Map::new();
                fields.insert(field.clone(), json!(parent));
                json!({ "fields": fields })
            }
            None => json!({
                "update": {
                    "issuelinks": [{
                        "add": {
                            "type": {
                                "name": "Initiative",
                                "inward": "Parent of",
                                "outward": "Child of"
                            },
                            "inwardIssue": { "key": parent }
                        }
                    }]
                }
            }),
        }
    }
}
