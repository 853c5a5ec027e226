use std::future::{ready, Ready};
use std::str::FromStr;

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};

use crate::shared::api::{ApiError, AppError};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 25;
pub const MAX_LIMIT: u64 = 100;
/// Highest page a client may ask for; `MAX_PAGE * MAX_LIMIT` fits a Postgres `OFFSET`.
pub const MAX_PAGE: u64 = 1_000_000;

const RESERVED_KEYS: [&str; 4] = ["select", "sort", "page", "limit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
}

impl FromStr for FilterOp {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ne" => Ok(FilterOp::Ne),
            "gt" => Ok(FilterOp::Gt),
            "gte" => Ok(FilterOp::Gte),
            "lt" => Ok(FilterOp::Lt),
            "lte" => Ok(FilterOp::Lte),
            "in" => Ok(FilterOp::In),
            other => Err(QueryError::UnknownOperator(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: String,
    pub op: FilterOp,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub descending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid query field '{0}'")]
    UnknownField(String),

    #[error("Invalid filter operator '{0}'")]
    UnknownOperator(String),

    #[error("Invalid value '{value}' for '{field}'")]
    InvalidValue { field: String, value: String },
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        AppError::Api(ApiError::bad_request(err.to_string()))
    }
}

/// Parsed list query string.
///
/// `?careers[in]=Business,UI/UX&averageCost[lte]=10000&select=name&sort=-name&page=2&limit=5`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: Vec<FieldFilter>,
    pub select: Option<Vec<String>>,
    pub sort: Vec<SortKey>,
    pub page: u64,
    pub limit: u64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            select: None,
            sort: vec![SortKey {
                field: "createdAt".to_string(),
                descending: true,
            }],
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListQuery {
    pub fn from_pairs<I>(pairs: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = ListQuery::default();

        for (key, value) in pairs {
            match key.as_str() {
                "select" => query.select = Some(split_list(&value)),
                "sort" => {
                    let keys: Vec<SortKey> = split_list(&value)
                        .into_iter()
                        .map(|field| match field.strip_prefix('-') {
                            Some(name) => SortKey {
                                field: name.to_string(),
                                descending: true,
                            },
                            None => SortKey {
                                field,
                                descending: false,
                            },
                        })
                        .collect();
                    if !keys.is_empty() {
                        query.sort = keys;
                    }
                }
                "page" => query.page = parse_page(&value)?,
                "limit" => query.limit = parse_number("limit", &value)?.clamp(1, MAX_LIMIT),
                _ => query.filters.push(parse_filter(key, value)?),
            }
        }

        Ok(query)
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl FromRequest for ListQuery {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
            .map_err(|e| AppError::from(ApiError::bad_request(format!("Invalid query string: {}", e))))
            .and_then(|pairs| ListQuery::from_pairs(pairs.into_inner()).map_err(AppError::from));

        ready(parsed.map_err(Into::into))
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_number(field: &str, value: &str) -> Result<u64, QueryError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| QueryError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        })
}

fn parse_page(value: &str) -> Result<u64, QueryError> {
    let page = parse_number("page", value)?.max(1);
    if page > MAX_PAGE {
        return Err(QueryError::InvalidValue {
            field: "page".to_string(),
            value: value.to_string(),
        });
    }
    Ok(page)
}

fn parse_filter(key: String, value: String) -> Result<FieldFilter, QueryError> {
    let (field, op) = match key.split_once('[') {
        Some((field, rest)) => {
            let op = rest
                .strip_suffix(']')
                .ok_or_else(|| QueryError::UnknownOperator(rest.to_string()))?;
            (field.to_string(), op.parse::<FilterOp>()?)
        }
        None => (key, FilterOp::Eq),
    };

    if field.is_empty() || RESERVED_KEYS.contains(&field.as_str()) {
        return Err(QueryError::UnknownField(field));
    }

    Ok(FieldFilter { field, op, value })
}
