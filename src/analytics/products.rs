//! Per-category revenue ranking.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::OrderRecord;

#[derive(Debug, Clone, Serialize)]
pub struct CategorySales {
    pub category: String,
    pub total_sales: f64,
}

/// Group all records (any status) by product category and sum
/// `payment_value`, sorted descending. Records with no category are
/// skipped. The sort is stable, so ties keep first-appearance order.
pub fn sales_by_category(records: &[OrderRecord]) -> Vec<CategorySales> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<CategorySales> = Vec::new();

    for rec in records {
        let Some(category) = rec.product_category_name_english.as_deref() else {
            continue;
        };
        match index.get(category) {
            Some(&i) => ranked[i].total_sales += rec.payment_value,
            None => {
                index.insert(category, ranked.len());
                ranked.push(CategorySales {
                    category: category.to_string(),
                    total_sales: rec.payment_value,
                });
            }
        }
    }

    ranked.sort_by(|a, b| b.total_sales.total_cmp(&a.total_sales));
    ranked
}

/// First `n` of the descending ranking.
pub fn top(ranked: &[CategorySales], n: usize) -> Vec<CategorySales> {
    ranked.iter().take(n).cloned().collect()
}

/// Re-sort ascending and take the first `n`. With fewer than `2n`
/// categories the top and bottom slices may overlap; that mirrors how
/// the source dashboard slices both ends of one ranking.
pub fn bottom(ranked: &[CategorySales], n: usize) -> Vec<CategorySales> {
    let mut ascending = ranked.to_vec();
    ascending.sort_by(|a, b| a.total_sales.total_cmp(&b.total_sales));
    ascending.into_iter().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::order_in_category;

    #[test]
    fn test_ranking_descending_and_conservation() {
        let records = vec![
            order_in_category("A", Some("toys"), 30.0),
            order_in_category("B", Some("books"), 100.0),
            order_in_category("C", Some("toys"), 20.0),
            order_in_category("D", Some("garden"), 5.0),
        ];
        let ranked = sales_by_category(&records);
        let names: Vec<_> = ranked.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["books", "toys", "garden"]);

        let input_total: f64 = records.iter().map(|r| r.payment_value).sum();
        let ranked_total: f64 = ranked.iter().map(|c| c.total_sales).sum();
        assert!((input_total - ranked_total).abs() < 1e-9);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            order_in_category("A", Some("zeta"), 10.0),
            order_in_category("B", Some("alpha"), 10.0),
        ];
        let ranked = sales_by_category(&records);
        assert_eq!(ranked[0].category, "zeta");
        assert_eq!(ranked[1].category, "alpha");
    }

    #[test]
    fn test_uncategorized_rows_skipped() {
        let records = vec![
            order_in_category("A", None, 50.0),
            order_in_category("B", Some("toys"), 10.0),
        ];
        let ranked = sales_by_category(&records);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].category, "toys");
    }

    #[test]
    fn test_top_bottom_overlap_with_few_categories() {
        let records = vec![
            order_in_category("A", Some("toys"), 30.0),
            order_in_category("B", Some("books"), 10.0),
            order_in_category("C", Some("garden"), 20.0),
        ];
        let ranked = sales_by_category(&records);
        let top5 = top(&ranked, 5);
        let bottom5 = bottom(&ranked, 5);
        assert_eq!(top5.len(), 3);
        assert_eq!(bottom5.len(), 3);
        assert_eq!(top5[0].category, "toys");
        assert_eq!(bottom5[0].category, "books");
    }

    #[test]
    fn test_empty_input() {
        let ranked = sales_by_category(&[]);
        assert!(ranked.is_empty());
        assert!(top(&ranked, 5).is_empty());
        assert!(bottom(&ranked, 5).is_empty());
    }
}
