use crate::error::AppError;
use crate::forms::PageQuery;
use crate::view::{Outcome, View};
use configuration::PaginationSettings;
use core_types::Qualite;
use database::PagingRepository;
use std::sync::Arc;

/// Read-only, paginated listing of the quality tiers.
#[derive(Clone)]
pub struct QualiteController {
    qualite_dao: Arc<dyn PagingRepository<Qualite>>,
    pagination: PaginationSettings,
}

impl QualiteController {
    pub fn new(qualite_dao: Arc<dyn PagingRepository<Qualite>>, pagination: PaginationSettings) -> Self {
        Self { qualite_dao, pagination }
    }

    pub async fn index(&self, query: PageQuery) -> Result<Outcome, AppError> {
        let request = query.parse(&self.pagination)?;
        let page = self.qualite_dao.find_page(&request).await?;
        tracing::debug!(
            page = page.number,
            size = page.size,
            total = page.total_elements,
            "Qualite page fetched."
        );

        let mut view = View::new("admin/qualite/index").with("qualites", &page)?;
        if let Some(sort) = &request.sort {
            view = view.with("sort", &sort.to_string())?;
        }
        Ok(Outcome::Render(view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Page;
    use database::{default_qualites, DbError, InMemoryRepository};

    fn controller() -> QualiteController {
        let repo = Arc::new(InMemoryRepository::with_records(default_qualites()));
        let settings = PaginationSettings { default_page_size: 3, max_page_size: 10 };
        QualiteController::new(repo, settings)
    }

    fn page_of(outcome: Outcome) -> Page<Qualite> {
        match outcome {
            Outcome::Render(view) => {
                assert_eq!(view.name, "admin/qualite/index");
                serde_json::from_value(view.model["qualites"].clone()).unwrap()
            }
            other => panic!("expected a rendered view, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn first_page_uses_default_size() {
        let page = page_of(controller().index(PageQuery::default()).await.unwrap());
        assert_eq!(page.content.len(), 3);
        assert_eq!(page.total_elements, 4);
        assert_eq!(page.total_pages, 2);
        assert!(page.first);
        assert_eq!(page.content[0].name, "Commun");
    }

    #[tokio::test]
    async fn second_page_holds_the_remainder() {
        let query = PageQuery { page: Some(1), size: None, sort: None };
        let page = page_of(controller().index(query).await.unwrap());
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].name, "Légendaire");
        assert!(page.last);
    }

    #[tokio::test]
    async fn sorted_page_echoes_sort() {
        let query = PageQuery { page: None, size: Some(2), sort: Some("name,desc".to_string()) };
        let outcome = controller().index(query).await.unwrap();
        let Outcome::Render(view) = &outcome else { panic!("expected a rendered view") };
        assert_eq!(view.model["sort"], "name,desc");

        let page = page_of(outcome);
        let names: Vec<_> = page.content.iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, vec!["Épique", "Rare"]);
    }

    #[tokio::test]
    async fn unknown_sort_property_is_rejected() {
        let query = PageQuery { page: None, size: None, sort: Some("rarity".to_string()) };
        let err = controller().index(query).await.unwrap_err();
        assert!(matches!(err, AppError::Database(DbError::InvalidSort { .. })));
    }
}
