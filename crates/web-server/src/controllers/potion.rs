use crate::error::AppError;
use crate::flash::{FlashStore, SUCCESS_KEY};
use crate::forms::PotionInput;
use crate::view::{Outcome, View};
use core_types::Potion;
use database::CrudRepository;
use std::sync::Arc;

/// Where every mutating potion operation redirects to.
pub const INDEX_PATH: &str = "/admin/potion";

/// The potion administration screens.
#[derive(Clone)]
pub struct PotionController {
    potion_dao: Arc<dyn CrudRepository<Potion>>,
    flash: FlashStore,
}

impl PotionController {
    pub fn new(potion_dao: Arc<dyn CrudRepository<Potion>>, flash: FlashStore) -> Self {
        Self { potion_dao, flash }
    }

    /// Lists every potion, and shows the pending flash message if there is one.
    pub async fn index(&self) -> Result<Outcome, AppError> {
        let potions = self.potion_dao.find_all().await?;
        let mut view = View::new("admin/potion/index").with("potions", &potions)?;
        if let Some(message) = self.flash.take(INDEX_PATH) {
            view = view.with(SUCCESS_KEY, &message)?;
        }
        Ok(Outcome::Render(view))
    }

    pub async fn show(&self, id: i64) -> Result<Outcome, AppError> {
        let potion = self.potion_dao.get(id).await?;
        let view = View::new("admin/potion/show").with("potion", &potion)?;
        Ok(Outcome::Render(view))
    }

    /// The creation form, pre-filled with a blank potion.
    pub fn create(&self) -> Result<Outcome, AppError> {
        let view = View::new("admin/potion/create").with("nouvellePotion", &Potion::blank())?;
        Ok(Outcome::Render(view))
    }

    /// Persists a new potion. Any id submitted with the form is discarded.
    pub async fn store(&self, input: PotionInput) -> Result<Outcome, AppError> {
        let mut potion = Potion::from(input);
        potion.id = None;

        let saved = self.potion_dao.save(potion).await?;
        tracing::info!(id = ?saved.id, name = %saved.name, "Potion created.");

        self.flash
            .push(INDEX_PATH, format!("Enregistrement de {} réussi", saved.name));
        Ok(Outcome::Redirect(INDEX_PATH.to_string()))
    }

    pub async fn edit(&self, id: i64) -> Result<Outcome, AppError> {
        let potion = self.potion_dao.get(id).await?;
        let view = View::new("admin/potion/edit").with("potion", &potion)?;
        Ok(Outcome::Render(view))
    }

    /// Applies an edit to an existing potion.
    ///
    /// Only the name, description and heal amount are copied over; the stored
    /// effect description is kept whatever the form says. A form without an id
    /// is looked up as id 0 and fails like any other unknown id.
    pub async fn update(&self, input: PotionInput) -> Result<Outcome, AppError> {
        let mut potion = self.potion_dao.get(input.id.unwrap_or(0)).await?;
        potion.name = input.name;
        potion.description = input.description;
        potion.heal_amount = input.heal_amount;

        let saved = self.potion_dao.save(potion).await?;
        tracing::info!(id = ?saved.id, name = %saved.name, "Potion updated.");

        self.flash
            .push(INDEX_PATH, format!("Modification de {} réussie", saved.name));
        Ok(Outcome::Redirect(INDEX_PATH.to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<Outcome, AppError> {
        let potion = self.potion_dao.get(id).await?;
        self.potion_dao.delete(id).await?;
        tracing::info!(id, name = %potion.name, "Potion deleted.");

        self.flash
            .push(INDEX_PATH, format!("Suppression de {} réussie", potion.name));
        Ok(Outcome::Redirect(INDEX_PATH.to_string()))
    }
}
