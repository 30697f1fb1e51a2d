use crate::http::Query;

use libs::serde_json::{Map, Value};

/// Builds a query from an array of optional parameters, skipping the ones
/// that are `None`.
pub(crate) fn build_map<'key, 'value, const N: usize>(
    array: [(&'key str, Option<&'value str>); N],
) -> Query<'key>
where
    'value: 'key,
{
    let mut map = Query::with_capacity(N);
    for (key, value) in array {
        if let Some(value) = value {
            map.insert(key, value);
        }
    }
    map
}

/// Small helper to build JSON request bodies with optional fields.
#[derive(Debug, Default)]
pub(crate) struct JsonBuilder {
    map: Map<String, Value>,
}

impl JsonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.map.insert(name.to_owned(), value.into());
        self
    }

    pub fn optional(mut self, name: &str, value: Option<impl Into<Value>>) -> Self {
        if let Some(value) = value {
            self.map.insert(name.to_owned(), value.into());
        }
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.map)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use libs::serde_json::json;

    #[test]
    fn test_build_map_skips_missing() {
        let count = 10.to_string();
        let query = build_map([("start", None), ("count", Some(count.as_str()))]);
        assert_eq!(query.len(), 1);
        assert_eq!(query["count"], "10");
    }

    #[test]
    fn test_json_builder() {
        let body = JsonBuilder::new()
            .required("subject", "Hello")
            .optional("body", None::<&str>)
            .optional("title", Some("Rust"))
            .build();
        assert_eq!(body, json!({ "subject": "Hello", "title": "Rust" }));
    }
}
