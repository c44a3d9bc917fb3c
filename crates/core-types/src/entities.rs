use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::cmp::Ordering;

/// A record owned by the entity store.
///
/// The id is absent until the store assigns one on first save.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human readable entity name, used in error messages and logs.
    const NAME: &'static str;

    /// Properties a page request may sort on. The first entry is the default order.
    const SORTABLE: &'static [&'static str];

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    /// Compares two records on one of the `SORTABLE` properties.
    /// Returns `None` when the property is not sortable.
    fn compare_by(&self, other: &Self, property: &str) -> Option<Ordering>;
}

/// A potion as managed from the admin screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Potion {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub effect_description: String,
    pub heal_amount: i32,
}

impl Potion {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        effect_description: impl Into<String>,
        heal_amount: i32,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            effect_description: effect_description.into(),
            heal_amount,
        }
    }

    /// The blank potion used to pre-populate the creation form.
    pub fn blank() -> Self {
        Self::new("", "", "", 0)
    }
}

impl Entity for Potion {
    const NAME: &'static str = "Potion";
    const SORTABLE: &'static [&'static str] = &["id", "name", "heal_amount"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn compare_by(&self, other: &Self, property: &str) -> Option<Ordering> {
        match property {
            "id" => Some(self.id.cmp(&other.id)),
            "name" => Some(self.name.cmp(&other.name)),
            "heal_amount" => Some(self.heal_amount.cmp(&other.heal_amount)),
            _ => None,
        }
    }
}

/// An item quality tier (e.g. "Commun", "Rare").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Qualite {
    pub id: Option<i64>,
    pub name: String,
    /// Colour code used when displaying the tier.
    pub colour: String,
}

impl Qualite {
    pub fn new(name: impl Into<String>, colour: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            colour: colour.into(),
        }
    }
}

impl Entity for Qualite {
    const NAME: &'static str = "Qualite";
    const SORTABLE: &'static [&'static str] = &["id", "name", "colour"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn compare_by(&self, other: &Self, property: &str) -> Option<Ordering> {
        match property {
            "id" => Some(self.id.cmp(&other.id)),
            "name" => Some(self.name.cmp(&other.name)),
            "colour" => Some(self.colour.cmp(&other.colour)),
            _ => None,
        }
    }
}
