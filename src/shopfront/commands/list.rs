use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;

/// The category name that means "no category filter".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Exact category (case-insensitive). `None` or `"all"` keeps everything.
    pub category: Option<String>,
    /// Substring looked up in name, category and description.
    pub search: Option<String>,
}

impl ProductFilter {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            search: None,
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            category: None,
            search: Some(term.into()),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product) && self.matches_search(product)
    }

    fn matches_category(&self, product: &Product) -> bool {
        match self.category.as_deref() {
            None => true,
            Some(c) if c.eq_ignore_ascii_case(ALL_CATEGORIES) => true,
            Some(c) => product.category.to_lowercase() == c.to_lowercase(),
        }
    }

    fn matches_search(&self, product: &Product) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };
        let term = term.to_lowercase();
        product.name.to_lowercase().contains(&term)
            || product.category.to_lowercase().contains(&term)
            || product.description.to_lowercase().contains(&term)
    }
}

/// Products matching `filter`, in catalog order.
pub fn run(catalog: &Catalog, filter: &ProductFilter) -> Result<CmdResult> {
    let listed: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No products found."));
    }
    Ok(result.with_listed_products(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_products;

    fn catalog() -> Catalog {
        Catalog::from_products(sample_products()).unwrap()
    }

    fn ids(result: &CmdResult) -> Vec<u32> {
        result.listed_products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn no_filter_lists_everything_in_order() {
        let result = run(&catalog(), &ProductFilter::default()).unwrap();
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn all_category_lists_everything() {
        let result = run(&catalog(), &ProductFilter::category("ALL")).unwrap();
        assert_eq!(result.listed_products.len(), 6);
    }

    #[test]
    fn category_match_is_case_insensitive() {
        let result = run(&catalog(), &ProductFilter::category("accessories")).unwrap();
        assert_eq!(ids(&result), vec![2, 5, 6]);
    }

    #[test]
    fn search_covers_name_category_and_description() {
        let catalog = catalog();
        assert_eq!(ids(&run(&catalog, &ProductFilter::search("tote")).unwrap()), vec![5]);
        assert_eq!(ids(&run(&catalog, &ProductFilter::search("FOOT")).unwrap()), vec![4]);
        assert_eq!(ids(&run(&catalog, &ProductFilter::search("adire")).unwrap()), vec![6]);
    }

    #[test]
    fn category_and_search_combine() {
        let filter = ProductFilter {
            category: Some("Accessories".into()),
            search: Some("silk".into()),
        };
        assert_eq!(ids(&run(&catalog(), &filter).unwrap()), vec![6]);
    }

    #[test]
    fn empty_catalog_lists_nothing() {
        let result = run(&Catalog::empty(), &ProductFilter::default()).unwrap();
        assert!(result.listed_products.is_empty());
        assert_eq!(result.messages[0].content, "No products found.");
    }
}
