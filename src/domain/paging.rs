/// Manual page selection for list endpoints. Fields left as `None` are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub skip_count: Option<u32>,
    pub max_items: Option<u32>,
}

impl PageRequest {
    pub fn new(skip_count: u32, max_items: u32) -> Self {
        Self {
            skip_count: Some(skip_count),
            max_items: Some(max_items),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skip_count.is_none() && self.max_items.is_none()
    }

    /// Query pairs in the order the engine documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(skip) = self.skip_count {
            pairs.push(("skipCount", skip.to_string()));
        }
        if let Some(max) = self.max_items {
            pairs.push(("maxItems", max.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs() {
        assert!(PageRequest::default().query_pairs().is_empty());
        assert!(PageRequest::default().is_empty());

        let page = PageRequest::new(20, 10);
        assert_eq!(
            page.query_pairs(),
            vec![("skipCount", "20".to_string()), ("maxItems", "10".to_string())]
        );

        let only_max = PageRequest {
            max_items: Some(5),
            ..Default::default()
        };
        assert_eq!(only_max.query_pairs(), vec![("maxItems", "5".to_string())]);
    }
}
