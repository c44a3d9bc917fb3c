use crate::error::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// A view name plus the named values it renders.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub name: &'static str,
    pub model: Map<String, Value>,
}

impl View {
    pub fn new(name: &'static str) -> Self {
        Self { name, model: Map::new() }
    }

    /// Adds one attribute to the view-model.
    pub fn with<T: Serialize + ?Sized>(mut self, key: &str, value: &T) -> Result<Self, AppError> {
        self.model.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }
}

/// What a controller operation answers with.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Render(View),
    /// Redirect (303 See Other) to a path of this application.
    Redirect(String),
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Render(view) => {
                let body = Json(json!({ "view": view.name, "model": view.model }));
                (StatusCode::OK, body).into_response()
            }
            Outcome::Redirect(target) => Redirect::to(&target).into_response(),
        }
    }
}
