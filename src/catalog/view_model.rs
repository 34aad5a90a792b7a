use crate::error::CatalogError;
use crate::models::{
    CatalogCounts, CatalogSnapshot, Category, CategoryForm, Organization, OrganizationForm, Product, ProductForm,
};

use super::filter::ProductQuery;
use super::search::{filter_items, CATEGORY_SEARCH_FIELDS, ORGANIZATION_SEARCH_FIELDS};
use super::CatalogBackend;

/// Identifies one catalog fetch. Only the most recently issued token may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchToken(u64);

/// Fetch the three lists concurrently. Fails as a whole if any request fails.
pub async fn fetch_snapshot<B: CatalogBackend>(backend: &B) -> Result<CatalogSnapshot, CatalogError> {
    let (products, organizations, categories) = tokio::try_join!(
        backend.list_products(),
        backend.list_organizations(),
        backend.list_categories(),
    )?;
    Ok(CatalogSnapshot {
        products,
        organizations,
        categories,
    })
}

/// In-memory catalog state plus the query applied to it.
#[derive(Debug, Default)]
pub struct CatalogViewModel {
    snapshot: CatalogSnapshot,
    query: ProductQuery,
    issued: u64,
    loaded: bool,
}

impl CatalogViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    /// Whether at least one snapshot has been committed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn query(&self) -> &ProductQuery {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut ProductQuery {
        &mut self.query
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.search = term.into();
    }

    pub fn reset_query(&mut self) {
        self.query = ProductQuery::default();
    }

    /// Issue a new token; any earlier token becomes stale.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.issued += 1;
        FetchToken(self.issued)
    }

    /// Replace the snapshot if `token` is the latest issued. Returns whether it was applied.
    pub fn commit(&mut self, token: FetchToken, snapshot: CatalogSnapshot) -> bool {
        if token.0 != self.issued {
            tracing::debug!(token = token.0, latest = self.issued, "Discarding stale catalog fetch");
            return false;
        }
        self.snapshot = snapshot;
        self.loaded = true;
        true
    }

    /// Apply the outcome of the fetch issued as `token`.
    ///
    /// `Ok(None)` means the fetch was stale and nothing changed. On error the
    /// previous snapshot is kept.
    pub fn apply_fetch(
        &mut self,
        token: FetchToken,
        result: Result<CatalogSnapshot, CatalogError>,
    ) -> Result<Option<CatalogCounts>, CatalogError> {
        let snapshot = result?;
        Ok(self.commit(token, snapshot).then(|| self.counts()))
    }

    /// Fetch everything and commit it. On error the previous snapshot is kept.
    ///
    /// The returned counts describe the snapshot actually held afterwards.
    pub async fn refresh<B: CatalogBackend>(&mut self, backend: &B) -> Result<CatalogCounts, CatalogError> {
        let token = self.begin_fetch();
        let result = fetch_snapshot(backend).await;
        match self.apply_fetch(token, result)? {
            Some(counts) => Ok(counts),
            None => {
                tracing::warn!(token = token.0, "Catalog refresh superseded; keeping current snapshot");
                Ok(self.counts())
            }
        }
    }

    pub fn counts(&self) -> CatalogCounts {
        self.snapshot.counts()
    }

    /// Products after search, selection filter and sort.
    pub fn visible_products(&self) -> Vec<Product> {
        self.query.apply(&self.snapshot.products)
    }

    pub fn search_organizations(&self, term: &str) -> Vec<Organization> {
        filter_items(&self.snapshot.organizations, term.trim(), ORGANIZATION_SEARCH_FIELDS)
    }

    pub fn search_categories(&self, term: &str) -> Vec<Category> {
        filter_items(&self.snapshot.categories, term.trim(), CATEGORY_SEARCH_FIELDS)
    }

    /// Validate, create, then reload the whole catalog so the new product
    /// arrives with its organization and category names resolved.
    ///
    /// The product exists once the POST succeeds; a failed reload only keeps
    /// the previous snapshot.
    pub async fn create_product<B: CatalogBackend>(
        &mut self,
        backend: &B,
        form: &ProductForm,
    ) -> Result<Product, CatalogError> {
        let body = form.validate()?;
        let created = backend.create_product(&body).await?;
        if let Err(e) = self.refresh(backend).await {
            tracing::warn!(error = %e, name = %created.name, "Product created but catalog reload failed");
        }
        Ok(created)
    }

    /// Validate, create, and append the returned organization.
    pub async fn create_organization<B: CatalogBackend>(
        &mut self,
        backend: &B,
        form: &OrganizationForm,
    ) -> Result<Organization, CatalogError> {
        let body = form.validate()?;
        let created = backend.create_organization(&body).await?;
        self.snapshot.organizations.push(created.clone());
        Ok(created)
    }

    pub async fn create_category<B: CatalogBackend>(
        &mut self,
        backend: &B,
        form: &CategoryForm,
    ) -> Result<Category, CatalogError> {
        let body = form.validate()?;
        let created = backend.create_category(&body).await?;
        self.snapshot.categories.push(created.clone());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_token_is_discarded() {
        let mut vm = CatalogViewModel::new();
        let first = vm.begin_fetch();
        let second = vm.begin_fetch();

        let fresh = CatalogSnapshot {
            organizations: vec![Organization { id: 1, name: "Fresh".into() }],
            ..Default::default()
        };
        let stale = CatalogSnapshot {
            organizations: vec![Organization { id: 2, name: "Stale".into() }],
            ..Default::default()
        };

        assert!(vm.commit(second, fresh));
        assert!(!vm.commit(first, stale));
        assert_eq!(vm.snapshot().organizations[0].name, "Fresh");
    }

    #[test]
    fn test_apply_fetch_reports_stale_and_errors() {
        let mut vm = CatalogViewModel::new();
        let stale = vm.begin_fetch();
        let latest = vm.begin_fetch();

        let snapshot = CatalogSnapshot {
            organizations: vec![Organization { id: 1, name: "Acme".into() }],
            ..Default::default()
        };
        assert_eq!(vm.apply_fetch(stale, Ok(snapshot.clone())).unwrap(), None);
        assert!(!vm.is_loaded());

        assert!(vm.apply_fetch(latest, Err(CatalogError::Network("down".into()))).is_err());
        assert!(!vm.is_loaded());

        let counts = vm.apply_fetch(latest, Ok(snapshot)).unwrap().unwrap();
        assert_eq!(counts.organizations, 1);
        assert!(vm.is_loaded());
    }

    #[test]
    fn test_not_loaded_until_first_commit() {
        let mut vm = CatalogViewModel::new();
        assert!(!vm.is_loaded());
        let token = vm.begin_fetch();
        vm.commit(token, CatalogSnapshot::default());
        assert!(vm.is_loaded());
    }
}
