use serde::Serialize;

pub mod finance;

/// Envelope shared by the list endpoints.
#[derive(Debug, Serialize)]
pub struct ListResponse<'a, T> {
    pub success: bool,
    pub data: &'a [T],
}

impl<'a, T> ListResponse<'a, T> {
    pub fn ok(data: &'a [T]) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
