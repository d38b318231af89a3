use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    models::{Order, OrderStatus},
    search::StatusCounts,
};

/// Canteen sales figures. Cancelled orders are counted in `counts` but bring in
/// no sales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct SalesSummary {
    /// Sum of order totals, in cents.
    pub total_sales: i64,
    /// Orders that contribute to `total_sales`.
    pub sold_orders: usize,
    /// `total_sales / sold_orders` rounded to the nearest cent, 0 without sales.
    pub average_order_value: i64,
    pub counts: StatusCounts,
    /// Oldest day first.
    pub by_date: Vec<DailySales>,
    /// Alphabetical by category.
    pub by_category: Vec<CategorySales>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DailySales {
    pub date: NaiveDate,
    pub total: i64,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategorySales {
    pub category: String,
    pub total: i64,
    pub quantity: u64,
}

/// Inclusive range of order days; open ends are unbounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, order: &Order) -> bool {
        let day = order.date().date_naive();
        self.from.is_none_or(|from| day >= from) && self.to.is_none_or(|to| day <= to)
    }
}

impl SalesSummary {
    pub fn compute<'a, I>(orders: I, range: DateRange) -> Self
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let in_range: Vec<&Order> = orders.into_iter().filter(|o| range.contains(o)).collect();
        let counts = StatusCounts::tally(in_range.iter().copied());

        let mut total_sales = 0;
        let mut sold_orders = 0;
        let mut days: BTreeMap<NaiveDate, (i64, usize)> = BTreeMap::new();
        let mut categories: BTreeMap<&str, (i64, u64)> = BTreeMap::new();

        for order in in_range
            .iter()
            .filter(|o| o.status() != OrderStatus::Cancelled)
        {
            total_sales += order.total();
            sold_orders += 1;

            let day = days.entry(order.date().date_naive()).or_default();
            day.0 += order.total();
            day.1 += 1;

            for item in order.items() {
                let category = categories.entry(item.category.as_str()).or_default();
                category.0 += item.subtotal();
                category.1 += u64::from(item.quantity);
            }
        }

        Self {
            total_sales,
            sold_orders,
            average_order_value: average(total_sales, sold_orders),
            counts,
            by_date: days
                .into_iter()
                .map(|(date, (total, orders))| DailySales {
                    date,
                    total,
                    orders,
                })
                .collect(),
            by_category: categories
                .into_iter()
                .map(|(category, (total, quantity))| CategorySales {
                    category: category.to_string(),
                    total,
                    quantity,
                })
                .collect(),
        }
    }
}

fn average(total: i64, count: usize) -> i64 {
    match i64::try_from(count) {
        Ok(count) if count > 0 => (total + count / 2) / count,
        _ => 0,
    }
}
