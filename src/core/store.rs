//! In-memory resource stores refreshed from the API
//!
//! A store holds the last successfully fetched list plus an error flag.
//! Mutations never update the list optimistically: the store changes only
//! after the backend confirms, so a failed call leaves the previous state
//! bit-for-bit intact.

use std::collections::HashMap;

use crate::api::{ApiClient, ApiError, ListQuery};
use crate::entities::action::{ActionStatus, PriorityAction};
use crate::entities::{display_sort, Resource};

/// Generic store for one resource type
pub struct ResourceStore<R: Resource> {
    items: Vec<R>,
    error: Option<String>,
}

impl<R: Resource> Default for ResourceStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ResourceStore<R> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            error: None,
        }
    }

    /// All records in ascending `order`
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Last fetch error, if the most recent refresh failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find a record by id
    pub fn find(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// Active records in display order (`order` ascending, magnitude
    /// descending on ties)
    pub fn active(&self) -> Vec<&R> {
        let mut active: Vec<&R> = self.items.iter().filter(|r| r.is_active()).collect();
        display_sort(&mut active);
        active
    }

    /// Replace the list from a fresh fetch.
    ///
    /// On failure the previous list (empty on first load) is retained and
    /// the error message recorded for the caller to surface.
    pub fn refresh(
        &mut self,
        client: &ApiClient,
        query: &ListQuery,
    ) -> Result<Option<u64>, ApiError> {
        match client.list::<R>(query) {
            Ok(listing) => {
                self.items = listing.items;
                self.items.sort_by_key(|r| r.order());
                self.error = None;
                Ok(listing.total)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Create a record; on success it is appended and the list re-sorted
    /// by `order`. No optimistic insert.
    pub fn create(&mut self, client: &ApiClient, draft: &R::Draft) -> Result<R, ApiError> {
        let created = client.create::<R>(draft)?;
        self.items.push(created.clone());
        self.items.sort_by_key(|r| r.order());
        Ok(created)
    }

    /// Update a record in place, then re-sort by `order`
    pub fn update(&mut self, client: &ApiClient, id: &str, draft: &R::Draft) -> Result<R, ApiError> {
        let updated = client.update::<R>(id, draft)?;
        if let Some(slot) = self.items.iter_mut().find(|r| r.id() == id) {
            *slot = updated.clone();
        }
        self.items.sort_by_key(|r| r.order());
        Ok(updated)
    }

    /// Delete a record; removed from the list only after the backend confirms
    pub fn delete(&mut self, client: &ApiClient, id: &str) -> Result<(), ApiError> {
        client.delete::<R>(id)?;
        self.items.retain(|r| r.id() != id);
        Ok(())
    }
}

/// Store for priority actions with the narrow status mutation.
///
/// Status changes are tracked in a local override map keyed by id; the map
/// takes precedence over the record's own status until the next refetch, so
/// every display path resolves the same badge for the same action.
pub struct ActionStore {
    store: ResourceStore<PriorityAction>,
    overrides: HashMap<String, ActionStatus>,
}

impl Default for ActionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionStore {
    pub fn new() -> Self {
        Self {
            store: ResourceStore::new(),
            overrides: HashMap::new(),
        }
    }

    pub fn items(&self) -> &[PriorityAction] {
        self.store.items()
    }

    pub fn error(&self) -> Option<&str> {
        self.store.error()
    }

    pub fn find(&self, id: &str) -> Option<&PriorityAction> {
        self.store.find(id)
    }

    /// Refetching drops the override map; the fetched records are now
    /// authoritative.
    pub fn refresh(
        &mut self,
        client: &ApiClient,
        query: &ListQuery,
    ) -> Result<Option<u64>, ApiError> {
        let total = self.store.refresh(client, query)?;
        self.overrides.clear();
        Ok(total)
    }

    pub fn create(
        &mut self,
        client: &ApiClient,
        draft: &<PriorityAction as Resource>::Draft,
    ) -> Result<PriorityAction, ApiError> {
        self.store.create(client, draft)
    }

    pub fn update(
        &mut self,
        client: &ApiClient,
        id: &str,
        draft: &<PriorityAction as Resource>::Draft,
    ) -> Result<PriorityAction, ApiError> {
        self.store.update(client, id, draft)
    }

    pub fn delete(&mut self, client: &ApiClient, id: &str) -> Result<(), ApiError> {
        self.store.delete(client, id)
    }

    /// Patch only the workflow status. The record is updated in place
    /// without re-sorting - status changes don't affect `order`.
    pub fn update_status(
        &mut self,
        client: &ApiClient,
        id: &str,
        status: ActionStatus,
    ) -> Result<PriorityAction, ApiError> {
        let updated = client.update_action_status(id, status)?;
        self.overrides.insert(id.to_string(), status);
        if let Some(slot) = self.store.items.iter_mut().find(|a| a.id == id) {
            slot.status = Some(status);
        }
        Ok(updated)
    }

    /// Resolve the displayed status for an action: local override first,
    /// then the record's own field, then the not-started default.
    pub fn status_of(&self, id: &str) -> ActionStatus {
        if let Some(status) = self.overrides.get(id) {
            return *status;
        }
        self.store
            .find(id)
            .and_then(|a| a.status)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::cluster::{ClusterDraft, ClusterTrend, ConversationCluster};

    fn cluster(id: &str, order: i64, size: u64, active: bool) -> ConversationCluster {
        ConversationCluster {
            id: id.to_string(),
            theme: format!("Theme {}", id),
            size,
            sentiment: 0.1,
            trend: ClusterTrend::Stable,
            keywords: vec![],
            is_active: active,
            order,
            created_at: None,
            updated_at: None,
        }
    }

    fn seeded_store(records: Vec<ConversationCluster>) -> ResourceStore<ConversationCluster> {
        let mut store = ResourceStore::new();
        store.items = records;
        store.items.sort_by_key(|r| r.order());
        store
    }

    #[test]
    fn test_active_sorts_by_order_then_size_desc() {
        let store = seeded_store(vec![
            cluster("a", 1, 100, true),
            cluster("b", 0, 50, true),
            cluster("c", 0, 900, true),
            cluster("d", 0, 400, false),
        ]);
        let ids: Vec<&str> = store.active().iter().map(|c| c.id.as_str()).collect();
        // order 0 first with size descending; inactive "d" excluded
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_inactive_excluded_but_not_deleted() {
        let store = seeded_store(vec![cluster("a", 0, 10, false)]);
        assert!(store.active().is_empty());
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_find_by_id() {
        let store = seeded_store(vec![cluster("a", 0, 10, true), cluster("b", 1, 20, true)]);
        assert_eq!(store.find("b").unwrap().size, 20);
        assert!(store.find("zzz").is_none());
    }

    #[test]
    fn test_failed_mutation_leaves_list_unchanged() {
        // Client pointed at a closed port: every call is a transport error
        let client = ApiClient::new("http://127.0.0.1:9", 1).unwrap();
        let mut store = seeded_store(vec![cluster("a", 0, 10, true)]);
        let before: Vec<String> = store.items().iter().map(|c| c.id.clone()).collect();

        let draft = ClusterDraft {
            theme: "New theme".into(),
            size: 5,
            sentiment: 0.0,
            trend: ClusterTrend::Up,
            keywords: vec![],
            is_active: true,
            order: 0,
        };
        assert!(store.create(&client, &draft).is_err());
        assert!(store.update(&client, "a", &draft).is_err());
        assert!(store.delete(&client, "a").is_err());

        let after: Vec<String> = store.items().iter().map(|c| c.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_items() {
        let client = ApiClient::new("http://127.0.0.1:9", 1).unwrap();
        let mut store = seeded_store(vec![cluster("a", 0, 10, true)]);
        assert!(store.refresh(&client, &ListQuery::default()).is_err());
        assert_eq!(store.items().len(), 1);
        assert!(store.error().is_some());
    }

    #[test]
    fn test_action_status_defaults_to_not_started() {
        let store = ActionStore::new();
        assert_eq!(store.status_of("missing"), ActionStatus::NotStarted);
    }
}
