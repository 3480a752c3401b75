//! Wire types for the CMS API

use serde::Deserialize;
use vagtportal_domain::RawShift;

/// One page of the paginated `shifts` collection response
#[derive(Debug, Deserialize)]
pub struct ShiftsPage {
    pub data: Vec<RawShift>,
    pub meta: PageMeta,
}

#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_count: u32,
}

/// Error envelope the CMS wraps failures in
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_shifts_page() {
        let raw = r#"{
            "data": [
                {
                    "id": 12,
                    "Date": "2025-06-01T08:00:00.000Z",
                    "volunteers": [
                        {"Name": "Anna"},
                        {"Name": "Bo", "Instructor": true, "Email": "bo@example.com"}
                    ]
                }
            ],
            "meta": {"pagination": {"page": 1, "pageSize": 100, "pageCount": 3, "total": 240}}
        }"#;

        let page: ShiftsPage = serde_json::from_str(raw).unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].volunteers[1].is_instructor, Some(true));
        assert_eq!(page.meta.pagination.page, 1);
        assert_eq!(page.meta.pagination.page_count, 3);
    }

    #[test]
    fn deserializes_the_error_envelope() {
        let raw = r#"{"data": null, "error": {"status": 400, "name": "ApplicationError", "message": "Email is already taken"}}"#;

        let body: ErrorBody = serde_json::from_str(raw).unwrap();

        assert_eq!(body.error.message, "Email is already taken");
    }
}
