//! Dashboard Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Postgres, Transaction, query_as};

use adisyon::reporting::{
    CategorySales, DailySales, MonthlySales, ReportingWindow, TopProduct,
};

use super::records::{CategorySalesRecord, DailySalesRecord, MonthlySalesRecord, TopProductRecord};

const MONTHLY_SALES_SQL: &str = include_str!("sql/monthly_sales.sql");
const TOP_PRODUCTS_SQL: &str = include_str!("sql/top_products.sql");
const DAILY_SALES_SQL: &str = include_str!("sql/daily_sales.sql");
const CATEGORY_SALES_SQL: &str = include_str!("sql/category_sales.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDashboardRepository;

impl PgDashboardRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn monthly_sales(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        window: &ReportingWindow,
    ) -> Result<MonthlySales, sqlx::Error> {
        query_as::<Postgres, MonthlySalesRecord>(MONTHLY_SALES_SQL)
            .bind(SqlxTimestamp::from(window.start()))
            .bind(SqlxTimestamp::from(window.end()))
            .fetch_one(&mut **tx)
            .await
            .map(|record| record.0)
    }

    pub(crate) async fn top_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        window: &ReportingWindow,
        limit: usize,
    ) -> Result<Vec<TopProduct>, sqlx::Error> {
        let limit = i64::try_from(limit).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        let records = query_as::<Postgres, TopProductRecord>(TOP_PRODUCTS_SQL)
            .bind(SqlxTimestamp::from(window.start()))
            .bind(SqlxTimestamp::from(window.end()))
            .bind(limit)
            .fetch_all(&mut **tx)
            .await?;

        Ok(records.into_iter().map(|record| record.0).collect())
    }

    pub(crate) async fn daily_sales(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        window: &ReportingWindow,
    ) -> Result<Vec<DailySales>, sqlx::Error> {
        let records = query_as::<Postgres, DailySalesRecord>(DAILY_SALES_SQL)
            .bind(SqlxTimestamp::from(window.start()))
            .bind(SqlxTimestamp::from(window.end()))
            .bind(window.time_zone_name())
            .fetch_all(&mut **tx)
            .await?;

        Ok(records.into_iter().map(|record| record.0).collect())
    }

    pub(crate) async fn category_sales(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        window: &ReportingWindow,
    ) -> Result<Vec<CategorySales>, sqlx::Error> {
        let records = query_as::<Postgres, CategorySalesRecord>(CATEGORY_SALES_SQL)
            .bind(SqlxTimestamp::from(window.start()))
            .bind(SqlxTimestamp::from(window.end()))
            .fetch_all(&mut **tx)
            .await?;

        Ok(records.into_iter().map(|record| record.0).collect())
    }
}
