use gloo::net::http::{Request, Response};
use serde::Deserialize;
use shared::{Domain, StudentPayload, StudentRecord};
use std::fmt;
use web_sys::{File, FormData};

/// The one backend failure with dedicated handling: surfaced inline on
/// the email field instead of a generic notice.
const DUPLICATE_EMAIL_MESSAGE: &str = "Email already registered";

/// API client for communicating with the admissions backend.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

/// Classified failure from the backend boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend rejected the submission because the email is already
    /// registered.
    EmailTaken,
    /// Any other failure reported by the backend.
    Server(String),
    /// The request never produced a response.
    Network(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::EmailTaken => write!(f, "{}", DUPLICATE_EMAIL_MESSAGE),
            ApiError::Server(message) => write!(f, "{}", message),
            ApiError::Network(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Error body shape the backend uses for request failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn classify_error_body(body: &str) -> ApiError {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        match parsed.message {
            Some(message) if message == DUPLICATE_EMAIL_MESSAGE => return ApiError::EmailTaken,
            Some(message) => return ApiError::Server(message),
            None => {}
        }
    }
    ApiError::Server(body.to_string())
}

async fn error_from_response(response: Response) -> ApiError {
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    classify_error_body(&body)
}

/// Builds the multipart submission body: the structured payload as the
/// `student` part, plus the photograph as a second part under its
/// original filename when a new file was chosen. With no new file the
/// part is omitted entirely so the server keeps the existing photo.
fn multipart_body(payload: &StudentPayload, photograph: Option<&File>) -> Result<FormData, ApiError> {
    let json = serde_json::to_string(payload)
        .map_err(|e| ApiError::Server(format!("Failed to serialize student: {}", e)))?;
    let form = FormData::new()
        .map_err(|_| ApiError::Server("Failed to build form data".to_string()))?;
    form.append_with_str("student", &json)
        .map_err(|_| ApiError::Server("Failed to build form data".to_string()))?;
    if let Some(file) = photograph {
        form.append_with_blob_and_filename("photograph", file, &file.name())
            .map_err(|_| ApiError::Server("Failed to build form data".to_string()))?;
    }
    Ok(form)
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Image endpoint for a record's photograph, consumed directly by an
    /// img element.
    pub fn photo_url(&self, student_id: i64) -> String {
        format!("{}/api/students/{}/photo", self.base_url, student_id)
    }

    /// Fetch the selectable domain list
    pub async fn get_domains(&self) -> Result<Vec<Domain>, ApiError> {
        let url = format!("{}/api/domains", self.base_url);
        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<Vec<Domain>>()
                        .await
                        .map_err(|e| ApiError::Server(format!("Failed to parse domains: {}", e)))
                } else {
                    Err(error_from_response(response).await)
                }
            }
            Err(e) => Err(ApiError::Network(format!("Failed to fetch domains: {}", e))),
        }
    }

    /// Fetch all registered students
    pub async fn get_students(&self) -> Result<Vec<StudentRecord>, ApiError> {
        let url = format!("{}/api/students", self.base_url);
        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<Vec<StudentRecord>>()
                        .await
                        .map_err(|e| ApiError::Server(format!("Failed to parse students: {}", e)))
                } else {
                    Err(error_from_response(response).await)
                }
            }
            Err(e) => Err(ApiError::Network(format!("Failed to fetch students: {}", e))),
        }
    }

    /// Fetch a single student record
    pub async fn get_student(&self, student_id: i64) -> Result<StudentRecord, ApiError> {
        let url = format!("{}/api/students/{}", self.base_url, student_id);
        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<StudentRecord>()
                        .await
                        .map_err(|e| ApiError::Server(format!("Failed to parse student: {}", e)))
                } else {
                    Err(error_from_response(response).await)
                }
            }
            Err(e) => Err(ApiError::Network(format!("Failed to fetch student: {}", e))),
        }
    }

    /// Register a new student
    pub async fn create_student(
        &self,
        payload: &StudentPayload,
        photograph: Option<&File>,
    ) -> Result<(), ApiError> {
        let url = format!("{}/api/students", self.base_url);
        let body = multipart_body(payload, photograph)?;
        match Request::post(&url).body(body) {
            Ok(request) => match request.send().await {
                Ok(response) => {
                    if response.ok() {
                        Ok(())
                    } else {
                        Err(error_from_response(response).await)
                    }
                }
                Err(e) => Err(ApiError::Network(format!("Network error: {}", e))),
            },
            Err(e) => Err(ApiError::Network(format!("Failed to build request: {}", e))),
        }
    }

    /// Update an existing student
    pub async fn update_student(
        &self,
        student_id: i64,
        payload: &StudentPayload,
        photograph: Option<&File>,
    ) -> Result<(), ApiError> {
        let url = format!("{}/api/students/{}", self.base_url, student_id);
        let body = multipart_body(payload, photograph)?;
        match Request::put(&url).body(body) {
            Ok(request) => match request.send().await {
                Ok(response) => {
                    if response.ok() {
                        Ok(())
                    } else {
                        Err(error_from_response(response).await)
                    }
                }
                Err(e) => Err(ApiError::Network(format!("Network error: {}", e))),
            },
            Err(e) => Err(ApiError::Network(format!("Failed to build request: {}", e))),
        }
    }

    /// Delete a student record
    pub async fn delete_student(&self, student_id: i64) -> Result<(), ApiError> {
        let url = format!("{}/api/students/{}", self.base_url, student_id);
        match Request::delete(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(error_from_response(response).await)
                }
            }
            Err(e) => Err(ApiError::Network(format!("Network error: {}", e))),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
