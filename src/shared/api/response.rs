// src/shared/api/response.rs
use actix_web::{cookie::Cookie, HttpResponse};
use serde::Serialize;

use crate::shared::query::{Page, Pagination};

/// Success Envelope. `count` (and `pagination`) only appear on lists.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    pub data: T,
}

/// Serializes as `{}`.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct EmptyData {}

impl<T: Serialize> ApiResponse<T> {
    fn wrap(data: T) -> Self {
        ApiResponse {
            success: true,
            count: None,
            pagination: None,
            data,
        }
    }

    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::wrap(data))
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(Self::wrap(data))
    }

    pub fn success_with_cookie(data: T, cookie: Cookie<'static>) -> HttpResponse {
        HttpResponse::Ok().cookie(cookie).json(Self::wrap(data))
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    pub fn list(items: Vec<T>) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            count: Some(items.len()),
            pagination: None,
            data: items,
        })
    }

    pub fn page(page: Page<T>) -> HttpResponse {
        let pagination = page.pagination();
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            count: Some(page.items.len()),
            pagination: Some(pagination),
            data: page.items,
        })
    }
}

impl ApiResponse<EmptyData> {
    pub fn empty() -> HttpResponse {
        Self::success(EmptyData {})
    }
}
