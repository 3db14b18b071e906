use crate::domain::model::{Exoplanet, FuelEstimate};
use crate::domain::ports::ExoplanetRepository;
use crate::utils::error::{CatalogError, ErrorSeverity, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use url::Url;

const COLLECTION: &str = "exoplanets";
const FUEL_ESTIMATION: &str = "fuel-estimation";
const CREW_CAPACITY: &str = "crewCapacity";
// 只用來解析相對路徑，不會實際連線
const BASE_URL: &str = "http://catalog.local/";

/// A transport-neutral HTTP request. `path` may carry a `?query` suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub method: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: &str, path: impl Into<String>) -> Self {
        Self {
            method: method.to_string(),
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self::new(status, json!({ "error": message }))
    }

    pub fn from_error(err: &CatalogError) -> Self {
        Self::error(err.status_code(), &err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route<'a> {
    Collection,
    Item(&'a str),
    FuelEstimation(&'a str),
}

impl<'a> Route<'a> {
    fn parse(path: &'a str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [COLLECTION] => Some(Self::Collection),
            [COLLECTION, id] => Some(Self::Item(*id)),
            [COLLECTION, id, FUEL_ESTIMATION] => Some(Self::FuelEstimation(*id)),
            _ => None,
        }
    }
}

/// Resolve a request target such as `/exoplanets/{id}?crewCapacity=3`.
fn request_url(target: &str) -> Result<Url> {
    let base = Url::parse(BASE_URL).map_err(|e| CatalogError::Internal {
        message: format!("bad base url: {}", e),
    })?;
    base.join(target)
        .map_err(|e| CatalogError::bad_request(format!("invalid request path: {}", e)))
}

/// Percent-decoded integer query parameter. Absent or non-integer is `None`.
fn integer_param(url: &Url, key: &str) -> Option<i64> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .and_then(|(_, v)| v.parse::<i64>().ok())
}

/// Encoding our own response can only fail on a server-side bug, so the
/// resulting `SerializationError` answers 500.
fn to_body<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

fn parse_body(body: Option<&Value>) -> Result<Exoplanet> {
    let body = body.ok_or_else(|| CatalogError::bad_request("request body is required"))?;
    serde_json::from_value(body.clone()).map_err(|e| CatalogError::bad_request(e.to_string()))
}

/// Maps catalog routes onto an [`ExoplanetRepository`].
pub struct ExoplanetRouter<R: ExoplanetRepository> {
    repository: Arc<R>,
}

impl<R: ExoplanetRepository> Clone for ExoplanetRouter<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ExoplanetRepository> ExoplanetRouter<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    pub fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let method = request.method.to_ascii_uppercase();
        tracing::debug!("{} {}", method, request.path);

        let url = match request_url(&request.path) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("{} {} rejected: {}", method, request.path, e);
                return ApiResponse::from_error(&e);
            }
        };
        let path = url.path();

        let Some(route) = Route::parse(path) else {
            tracing::warn!("No route for {} {}", method, path);
            return ApiResponse::error(404, "route not found");
        };

        let result = match (route, method.as_str()) {
            (Route::Collection, "POST") => self.add(request.body.as_ref()),
            (Route::Collection, "GET") => self.list(),
            (Route::Item(id), "GET") => self.get(id),
            (Route::Item(id), "PUT") => self.update(id, request.body.as_ref()),
            (Route::Item(id), "DELETE") => self.delete(id),
            (Route::FuelEstimation(id), "GET") => self.fuel_estimation(id, &url),
            _ => {
                tracing::warn!("Method {} not allowed on {}", method, path);
                return ApiResponse::error(405, "method not allowed");
            }
        };

        result.unwrap_or_else(|e| {
            if e.severity() >= ErrorSeverity::Critical {
                tracing::error!("❌ {} {} failed: {}", method, path, e.user_friendly_message());
            } else {
                tracing::warn!("{} {} rejected: {}", method, path, e);
            }
            ApiResponse::from_error(&e)
        })
    }

    fn add(&self, body: Option<&Value>) -> Result<ApiResponse> {
        let candidate = parse_body(body)?;
        candidate.require_fields()?;
        let created = self.repository.add(candidate)?;
        tracing::info!("Added exoplanet {} ({})", created.id, created.name);
        Ok(ApiResponse::new(201, to_body(created)?))
    }

    fn list(&self) -> Result<ApiResponse> {
        Ok(ApiResponse::new(200, to_body(self.repository.list())?))
    }

    fn get(&self, id: &str) -> Result<ApiResponse> {
        let planet = self.repository.get_by_id(id)?;
        Ok(ApiResponse::new(200, to_body(planet)?))
    }

    fn update(&self, id: &str, body: Option<&Value>) -> Result<ApiResponse> {
        let patch = parse_body(body)?;
        let updated = self.repository.update(id, patch)?;
        tracing::info!("Updated exoplanet {}", id);
        Ok(ApiResponse::new(200, to_body(updated)?))
    }

    fn delete(&self, id: &str) -> Result<ApiResponse> {
        self.repository.delete(id)?;
        tracing::info!("Deleted exoplanet {}", id);
        Ok(ApiResponse::no_content())
    }

    fn fuel_estimation(&self, id: &str, url: &Url) -> Result<ApiResponse> {
        let crew_capacity = integer_param(url, CREW_CAPACITY)
            .ok_or_else(|| CatalogError::bad_request("Invalid crew capacity"))?;

        let fuel_estimation = self.repository.estimate_fuel(id, crew_capacity)?;
        Ok(ApiResponse::new(200, to_body(FuelEstimate { fuel_estimation })?))
    }
}
