//! Dashboard Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use adisyon::reporting::{CategorySales, DailySales, Dashboard, MonthlySales, TopProduct};

use crate::{extensions::*, products::models::ProductResponse};

/// Dashboard Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DashboardResponse {
    pub monthly_sales: MonthlySalesResponse,
    pub top_products: Vec<TopProductResponse>,
    pub daily_sales: Vec<DailySalesResponse>,
    pub category_sales: Vec<CategorySalesResponse>,
}

impl From<Dashboard> for DashboardResponse {
    fn from(dashboard: Dashboard) -> Self {
        DashboardResponse {
            monthly_sales: dashboard.monthly_sales.into(),
            top_products: dashboard.top_products.into_iter().map(Into::into).collect(),
            daily_sales: dashboard.daily_sales.into_iter().map(Into::into).collect(),
            category_sales: dashboard
                .category_sales
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Paid order totals for the month
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MonthlySalesResponse {
    pub total_amount: f64,
    pub order_count: u64,
}

impl From<MonthlySales> for MonthlySalesResponse {
    fn from(sales: MonthlySales) -> Self {
        MonthlySalesResponse {
            total_amount: sales.total_amount.to_amount(),
            order_count: sales.order_count,
        }
    }
}

/// Best seller
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TopProductResponse {
    /// Product id the line items were grouped by
    #[serde(rename = "_id")]
    pub id: Uuid,

    pub total_quantity: u64,

    pub total_revenue: f64,

    /// The product as it is in the catalog now
    pub product_details: ProductResponse,
}

impl From<TopProduct> for TopProductResponse {
    fn from(top: TopProduct) -> Self {
        TopProductResponse {
            id: top.product_uuid().into_uuid(),
            total_quantity: top.total_quantity,
            total_revenue: top.total_revenue.to_amount(),
            product_details: top.product.into(),
        }
    }
}

/// Paid order totals for one local day
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DailySalesResponse {
    /// Calendar day, `YYYY-MM-DD`
    #[serde(rename = "_id")]
    pub id: String,

    pub total_amount: f64,

    pub order_count: u64,
}

impl From<DailySales> for DailySalesResponse {
    fn from(sales: DailySales) -> Self {
        DailySalesResponse {
            id: sales.day.to_string(),
            total_amount: sales.total_amount.to_amount(),
            order_count: sales.order_count,
        }
    }
}

/// Line item sales for one category
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategorySalesResponse {
    /// Category name
    #[serde(rename = "_id")]
    pub id: String,

    pub total_amount: f64,

    pub total_quantity: u64,
}

impl From<CategorySales> for CategorySalesResponse {
    fn from(sales: CategorySales) -> Self {
        CategorySalesResponse {
            id: sales.category,
            total_amount: sales.total_amount.to_amount(),
            total_quantity: sales.total_quantity,
        }
    }
}
