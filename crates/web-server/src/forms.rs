//! Raw request bodies and query strings, and their parsing into validated inputs.
//!
//! Handlers never bind request data straight onto entities. Each form is
//! deserialized as strings first, then `parse`d into the typed input the
//! controller works with, so malformed numbers become a 400 with a readable
//! message.

use crate::error::AppError;
use configuration::PaginationSettings;
use core_types::{PageRequest, Potion, Sort};
use serde::Deserialize;

/// The potion create/update form as submitted.
#[derive(Debug, Default, Deserialize)]
pub struct PotionForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub effect_description: String,
    #[serde(default)]
    pub heal_amount: String,
}

/// A validated potion form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotionInput {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub effect_description: String,
    pub heal_amount: i32,
}

impl PotionForm {
    pub fn parse(self) -> Result<PotionInput, AppError> {
        let id = match self.id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_id(raw)?),
        };
        let heal_amount = match self.heal_amount.trim() {
            "" => 0,
            raw => raw.parse::<i32>().map_err(|_| {
                AppError::BadRequest(format!("heal_amount must be an integer, got '{}'", raw))
            })?,
        };
        Ok(PotionInput {
            id,
            name: self.name,
            description: self.description,
            effect_description: self.effect_description,
            heal_amount,
        })
    }
}

impl From<PotionInput> for Potion {
    fn from(input: PotionInput) -> Self {
        Potion {
            id: input.id,
            name: input.name,
            description: input.description,
            effect_description: input.effect_description,
            heal_amount: input.heal_amount,
        }
    }
}

/// The delete request: a single `id` parameter, taken from the query string
/// or the form body.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub id: Option<String>,
}

impl DeleteForm {
    /// Keeps this id when it is non-blank, otherwise takes the one from `other`.
    pub fn or(self, other: DeleteForm) -> DeleteForm {
        match self.id.as_deref().map(str::trim) {
            None | Some("") => other,
            Some(_) => self,
        }
    }

    pub fn parse(self) -> Result<i64, AppError> {
        match self.id.as_deref().map(str::trim) {
            None | Some("") => Err(AppError::BadRequest("id is required".to_string())),
            Some(raw) => parse_id(raw),
        }
    }
}

/// `?page=&size=&sort=` on paginated listings.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

impl PageQuery {
    /// Missing or zero `size` falls back to the configured default; larger
    /// sizes are capped at the configured maximum.
    pub fn parse(self, settings: &PaginationSettings) -> Result<PageRequest, AppError> {
        let size = match self.size {
            None | Some(0) => settings.default_page_size,
            Some(size) => size.min(settings.max_page_size),
        };
        let request = PageRequest::new(self.page.unwrap_or(0), size)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        match self.sort.as_deref().map(str::trim) {
            None | Some("") => Ok(request),
            Some(raw) => {
                let sort = raw
                    .parse::<Sort>()
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                Ok(request.with_sort(sort))
            }
        }
    }
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("id must be an integer, got '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: Option<&str>, heal_amount: &str) -> PotionForm {
        PotionForm {
            id: id.map(str::to_string),
            name: "Flamme".to_string(),
            description: "Rouge vif".to_string(),
            effect_description: "Brûle l'ennemi".to_string(),
            heal_amount: heal_amount.to_string(),
        }
    }

    #[test]
    fn parses_complete_form() {
        let input = form(Some("4"), " 10 ").parse().unwrap();
        assert_eq!(input.id, Some(4));
        assert_eq!(input.heal_amount, 10);
        assert_eq!(input.name, "Flamme");
    }

    #[test]
    fn blank_id_and_heal_amount_are_defaults() {
        let input = form(Some(""), "").parse().unwrap();
        assert_eq!(input.id, None);
        assert_eq!(input.heal_amount, 0);
    }

    #[test]
    fn non_numeric_heal_amount_is_a_bad_request() {
        let err = form(None, "beaucoup").parse().unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg.contains("heal_amount")));
    }

    #[test]
    fn delete_form_requires_numeric_id() {
        assert_eq!(DeleteForm { id: Some("12".to_string()) }.parse().unwrap(), 12);
        assert!(DeleteForm { id: None }.parse().is_err());
        assert!(DeleteForm { id: Some("douze".to_string()) }.parse().is_err());
    }

    #[test]
    fn delete_id_falls_back_to_second_source() {
        let from_query = DeleteForm { id: Some("3".to_string()) };
        let from_body = DeleteForm { id: Some("8".to_string()) };
        assert_eq!(from_query.or(from_body).parse().unwrap(), 3);

        let blank = DeleteForm { id: Some(" ".to_string()) };
        let from_body = DeleteForm { id: Some("8".to_string()) };
        assert_eq!(blank.or(from_body).parse().unwrap(), 8);

        assert!(DeleteForm::default().or(DeleteForm::default()).parse().is_err());
    }

    #[test]
    fn page_query_applies_defaults_and_cap() {
        let settings = PaginationSettings { default_page_size: 10, max_page_size: 50 };

        let request = PageQuery::default().parse(&settings).unwrap();
        assert_eq!((request.page, request.size, request.sort), (0, 10, None));

        let request = PageQuery { page: Some(3), size: Some(500), sort: Some("name,desc".to_string()) }
            .parse(&settings)
            .unwrap();
        assert_eq!(request.page, 3);
        assert_eq!(request.size, 50);
        assert_eq!(request.sort, Some(Sort::desc("name")));
    }

    #[test]
    fn page_query_rejects_bad_direction() {
        let settings = PaginationSettings { default_page_size: 10, max_page_size: 50 };
        let query = PageQuery { page: None, size: None, sort: Some("name,up".to_string()) };
        assert!(matches!(query.parse(&settings), Err(AppError::BadRequest(_))));
    }
}
