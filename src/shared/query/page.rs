use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRef {
    pub page: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageRef>,
}

/// One page of a shaped list query.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl<T> Page<T> {
    pub fn pagination(&self) -> Pagination {
        let next = (self.page.saturating_mul(self.limit) < self.total).then_some(PageRef {
            page: self.page.saturating_add(1),
            limit: self.limit,
        });
        let prev = (self.page > 1).then_some(PageRef {
            page: self.page - 1,
            limit: self.limit,
        });

        Pagination { next, prev }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

impl<T: Serialize> Page<T> {
    /// Keep only the selected fields of every item (`id` is always kept).
    pub fn select(self, fields: Option<&[String]>) -> Result<Page<Value>, serde_json::Error> {
        let mut items = Vec::with_capacity(self.items.len());

        for item in self.items {
            let mut value = serde_json::to_value(item)?;
            if let (Some(fields), Value::Object(map)) = (fields, &mut value) {
                map.retain(|key, _| key == "id" || fields.iter().any(|f| f == key));
            }
            items.push(value);
        }

        Ok(Page {
            items,
            total: self.total,
            page: self.page,
            limit: self.limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(total: u64, page: u64, limit: u64) -> Page<u8> {
        Page {
            items: Vec::new(),
            total,
            page,
            limit,
        }
    }

    #[test]
    fn test_first_page_has_only_next() {
        let p = page(30, 1, 25).pagination();

        assert_eq!(p.next, Some(PageRef { page: 2, limit: 25 }));
        assert_eq!(p.prev, None);
    }

    #[test]
    fn test_last_page_has_only_prev() {
        let p = page(30, 2, 25).pagination();

        assert_eq!(p.next, None);
        assert_eq!(p.prev, Some(PageRef { page: 1, limit: 25 }));
    }

    #[test]
    fn test_exact_fit_has_no_next() {
        let p = page(25, 1, 25).pagination();
        assert_eq!(p, Pagination::default());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let p = page(30, u64::MAX, 25).pagination();

        assert_eq!(p.next, None);
        assert_eq!(p.prev, Some(PageRef { page: u64::MAX - 1, limit: 25 }));
    }

    #[test]
    fn test_select_keeps_requested_fields_and_id() {
        let p = Page {
            items: vec![json!({ "id": "x", "name": "Devworks", "description": "d", "phone": "1" })],
            total: 1,
            page: 1,
            limit: 25,
        };
        let fields = vec!["name".to_string()];

        let shaped = p.select(Some(&fields)).unwrap();

        assert_eq!(shaped.items, vec![json!({ "id": "x", "name": "Devworks" })]);
    }

    #[test]
    fn test_select_none_keeps_everything() {
        let p = Page {
            items: vec![json!({ "id": "x", "name": "Devworks" })],
            total: 1,
            page: 1,
            limit: 25,
        };

        let shaped = p.select(None).unwrap();
        assert_eq!(shaped.items[0]["name"], "Devworks");
    }
}
