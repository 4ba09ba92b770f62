//! In-memory repository, used by tests and demos.

use crate::{JsonMap, Repository, RepositoryError, RepositoryFactory, RepositoryResult};
use keel_core::{QueryParams, Resource, ResourceId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// A repository backed by a mutex-guarded map.
pub struct InMemoryRepository {
    type_name: String,
    store: Mutex<HashMap<ResourceId, Resource>>,
    meta: Option<JsonMap>,
    links: Option<JsonMap>,
}

impl InMemoryRepository {
    /// Create an empty repository for the given resource type.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            store: Mutex::new(HashMap::new()),
            meta: None,
            links: None,
        }
    }

    /// Create a repository seeded with the given resources.
    pub fn with_resources(
        type_name: impl Into<String>,
        resources: impl IntoIterator<Item = Resource>,
    ) -> Self {
        let repository = Self::new(type_name);
        for resource in resources {
            repository.insert(resource);
        }
        repository
    }

    /// Attach a canned meta payload returned for every request.
    pub fn with_meta(mut self, meta: JsonMap) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Attach a canned links payload returned for every request.
    pub fn with_links(mut self, links: JsonMap) -> Self {
        self.links = Some(links);
        self
    }

    /// Insert a resource keyed by its identifier.
    pub fn insert(&self, resource: Resource) {
        self.lock().insert(resource.id.clone(), resource);
    }

    /// Clone of the stored resource with the given identifier.
    pub fn get(&self, id: &ResourceId) -> Option<Resource> {
        self.lock().get(id).cloned()
    }

    /// Number of stored resources.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the repository holds no resources.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// A factory yielding this repository for every provider.
    pub fn into_factory(self) -> RepositoryFactory {
        Self::shared_factory(Arc::new(self))
    }

    /// A factory over a shared handle, so callers can keep inspecting the
    /// store after handing the factory to a registry.
    pub fn shared_factory(repository: Arc<Self>) -> RepositoryFactory {
        Box::new(move |_provider| Arc::clone(&repository) as Arc<dyn Repository>)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ResourceId, Resource>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Repository for InMemoryRepository {
    fn find_one(&self, id: &ResourceId, _params: &QueryParams) -> RepositoryResult<Resource> {
        self.get(id)
            .ok_or_else(|| RepositoryError::not_found(&self.type_name, id.clone()))
    }

    fn save(&self, resource: Resource) -> RepositoryResult<Resource> {
        self.insert(resource.clone());
        Ok(resource)
    }

    fn meta(&self, _resources: &[Resource], _params: &QueryParams) -> Option<JsonMap> {
        self.meta.clone()
    }

    fn links(&self, _resources: &[Resource], _params: &QueryParams) -> Option<JsonMap> {
        self.links.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EmptyProvider;
    use keel_core::Value;

    fn article(id: i64, title: &str) -> Resource {
        Resource::new("articles", ResourceId::Long(id))
            .with_attr("title", Value::String(title.to_string()))
    }

    #[test]
    fn test_find_one_hit() {
        // GIVEN
        let repository = InMemoryRepository::with_resources("articles", [article(1, "First")]);

        // WHEN
        let found = repository.find_one(&ResourceId::Long(1), &QueryParams::new());

        // THEN
        assert_eq!(found.unwrap().get_attr("title"), Some(&Value::String("First".to_string())));
    }

    #[test]
    fn test_find_one_miss() {
        // GIVEN
        let repository = InMemoryRepository::new("articles");

        // WHEN
        let result = repository.find_one(&ResourceId::Long(404), &QueryParams::new());

        // THEN
        assert_eq!(
            result.unwrap_err(),
            RepositoryError::not_found("articles", ResourceId::Long(404))
        );
    }

    #[test]
    fn test_save_returns_canonical_instance() {
        // GIVEN
        let repository = InMemoryRepository::new("articles");

        // WHEN
        let saved = repository.save(article(7, "Saved")).unwrap();

        // THEN
        assert_eq!(saved.id, ResourceId::Long(7));
        assert_eq!(repository.get(&ResourceId::Long(7)), Some(saved));
    }

    #[test]
    fn test_meta_and_links_default_to_none() {
        let repository = InMemoryRepository::new("articles");
        assert_eq!(repository.meta(&[], &QueryParams::new()), None);
        assert_eq!(repository.links(&[], &QueryParams::new()), None);
    }

    #[test]
    fn test_canned_meta() {
        // GIVEN
        let mut meta = JsonMap::new();
        meta.insert("total".to_string(), serde_json::json!(1));
        let repository = InMemoryRepository::new("articles").with_meta(meta.clone());

        // THEN
        assert_eq!(repository.meta(&[], &QueryParams::new()), Some(meta));
    }

    #[test]
    fn test_shared_factory_yields_same_store() {
        // GIVEN
        let repository = Arc::new(InMemoryRepository::new("articles"));
        let factory = InMemoryRepository::shared_factory(Arc::clone(&repository));

        // WHEN
        let handle = factory(&EmptyProvider);
        handle.save(article(3, "Shared")).unwrap();

        // THEN
        assert_eq!(repository.len(), 1);
    }
}
