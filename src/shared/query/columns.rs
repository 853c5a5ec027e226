use chrono::{DateTime, FixedOffset};
use sea_orm::sea_query::extension::postgres::PgBinOper;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder, Select, Value};
use uuid::Uuid;

use super::list_query::{FieldFilter, FilterOp, ListQuery, QueryError};

/// How a query-string value is parsed for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Boolean,
    Uuid,
    Timestamp,
    /// JSONB array of strings, matched by containment.
    Tags,
}

/// Whitelisted API field name -> column mapping for one entity.
#[derive(Debug, Clone, Copy)]
pub struct QueryField<C> {
    pub name: &'static str,
    pub column: C,
    pub kind: FieldKind,
}

impl<C> QueryField<C> {
    pub const fn new(name: &'static str, column: C, kind: FieldKind) -> Self {
        Self { name, column, kind }
    }
}

/// Apply the filters and ordering of `query` to `select`. Pagination is
/// left to the caller so it can count first.
pub fn apply_list_query<E>(
    mut select: Select<E>,
    query: &ListQuery,
    fields: &[QueryField<E::Column>],
) -> Result<Select<E>, QueryError>
where
    E: EntityTrait,
{
    for filter in &query.filters {
        let field = lookup(fields, &filter.field)?;
        select = select.filter(filter_expr(field, filter)?);
    }

    for key in &query.sort {
        let field = lookup(fields, &key.field)?;
        let order = if key.descending {
            Order::Desc
        } else {
            Order::Asc
        };
        select = select.order_by(field.column, order);
    }

    Ok(select)
}

fn lookup<'a, C>(fields: &'a [QueryField<C>], name: &str) -> Result<&'a QueryField<C>, QueryError> {
    fields
        .iter()
        .find(|f| f.name == name)
        .ok_or_else(|| QueryError::UnknownField(name.to_string()))
}

fn filter_expr<C: ColumnTrait>(
    field: &QueryField<C>,
    filter: &FieldFilter,
) -> Result<SimpleExpr, QueryError> {
    if field.kind == FieldKind::Tags {
        return tags_expr(field, filter);
    }

    let column = field.column;
    let expr = match filter.op {
        FilterOp::Eq => column.eq(parse_value(field, &filter.value)?),
        FilterOp::Ne => column.ne(parse_value(field, &filter.value)?),
        FilterOp::Gt => column.gt(parse_value(field, &filter.value)?),
        FilterOp::Gte => column.gte(parse_value(field, &filter.value)?),
        FilterOp::Lt => column.lt(parse_value(field, &filter.value)?),
        FilterOp::Lte => column.lte(parse_value(field, &filter.value)?),
        FilterOp::In => {
            let values = filter
                .value
                .split(',')
                .map(|v| parse_value(field, v.trim()))
                .collect::<Result<Vec<Value>, QueryError>>()?;
            column.is_in(values)
        }
    };

    Ok(expr)
}

fn tags_expr<C: ColumnTrait>(
    field: &QueryField<C>,
    filter: &FieldFilter,
) -> Result<SimpleExpr, QueryError> {
    let contains = |tag: &str| {
        Expr::col(field.column).binary(
            PgBinOper::Contains,
            Expr::val(serde_json::json!([tag.trim()])),
        )
    };

    match filter.op {
        FilterOp::Eq => Ok(contains(filter.value.as_str())),
        FilterOp::Ne => Ok(contains(filter.value.as_str()).not()),
        FilterOp::In => filter
            .value
            .split(',')
            .map(contains)
            .reduce(|acc, expr| acc.or(expr))
            .ok_or_else(|| invalid(field, &filter.value)),
        _ => Err(invalid(field, &filter.value)),
    }
}

fn parse_value<C>(field: &QueryField<C>, raw: &str) -> Result<Value, QueryError> {
    let value = match field.kind {
        FieldKind::Text => Value::from(raw.to_string()),
        FieldKind::Integer => Value::from(raw.parse::<i32>().map_err(|_| invalid(field, raw))?),
        FieldKind::Float => Value::from(raw.parse::<f64>().map_err(|_| invalid(field, raw))?),
        FieldKind::Boolean => Value::from(raw.parse::<bool>().map_err(|_| invalid(field, raw))?),
        FieldKind::Uuid => Value::from(Uuid::parse_str(raw).map_err(|_| invalid(field, raw))?),
        FieldKind::Timestamp => Value::from(
            DateTime::<FixedOffset>::parse_from_rfc3339(raw).map_err(|_| invalid(field, raw))?,
        ),
        FieldKind::Tags => return Err(invalid(field, raw)),
    };

    Ok(value)
}

fn invalid<C>(field: &QueryField<C>, raw: &str) -> QueryError {
    QueryError::InvalidValue {
        field: field.name.to_string(),
        value: raw.to_string(),
    }
}
