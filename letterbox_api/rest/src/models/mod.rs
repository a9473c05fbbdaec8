use serde::Serialize;

pub mod contact;

#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ApiErrors {
    pub success: bool,
    pub errors: Vec<String>,
}
