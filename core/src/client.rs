//! Stateless HTTP request builder and response parser for the todo API.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ErrorMessage, Todo};

/// Synchronous, stateless client for the todo API.
///
/// Holds only the base URL. Ids are percent-encoded into a single path
/// segment.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.bodyless(HttpMethod::Get, format!("{}/todos", self.base_url))
    }

    pub fn build_get_todo(&self, id: &str) -> HttpRequest {
        self.bodyless(HttpMethod::Get, self.todo_path(id))
    }

    pub fn build_create_todo(&self, todo: &Todo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(todo).map_err(ApiError::Serialization)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_toggle_todo(&self, id: &str) -> HttpRequest {
        self.bodyless(HttpMethod::Patch, self.todo_path(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 201)
    }

    pub fn parse_toggle_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    fn todo_path(&self, id: &str) -> String {
        format!("{}/todos/{}", self.base_url, urlencoding::encode(id))
    }

    fn bodyless(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(
    response: HttpResponse,
    expected: u16,
) -> Result<T, ApiError> {
    check_status(response, expected)
        .and_then(|body| serde_json::from_str(&body).map_err(ApiError::Deserialization))
}

/// Map non-success status codes to the matching `ApiError` variant, handing
/// back the body on success.
fn check_status(response: HttpResponse, expected: u16) -> Result<String, ApiError> {
    match response.status {
        status if status == expected => Ok(response.body),
        404 => Err(ApiError::NotFound),
        400 => {
            let message = serde_json::from_str::<ErrorMessage>(&response.body)
                .map(|e| e.message)
                .unwrap_or(response.body);
            Err(ApiError::BadRequest(message))
        }
        status => Err(ApiError::HttpError {
            status,
            body: response.body,
        }),
    }
}
