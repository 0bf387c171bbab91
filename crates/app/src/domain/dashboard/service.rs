//! Dashboard service.

use async_trait::async_trait;
use mockall::automock;

use adisyon::reporting::{Dashboard, ReportingWindow, TOP_PRODUCTS_LIMIT};

use crate::{
    database::Db,
    domain::dashboard::{errors::DashboardServiceError, repository::PgDashboardRepository},
};

#[derive(Debug, Clone)]
pub struct PgDashboardService {
    db: Db,
    repository: PgDashboardRepository,
}

impl PgDashboardService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgDashboardRepository::new(),
        }
    }
}

#[async_trait]
impl DashboardService for PgDashboardService {
    async fn dashboard(&self, window: ReportingWindow) -> Result<Dashboard, DashboardServiceError> {
        let mut tx = self.db.begin().await?;

        let monthly_sales = self.repository.monthly_sales(&mut tx, &window).await?;

        let top_products = self
            .repository
            .top_products(&mut tx, &window, TOP_PRODUCTS_LIMIT)
            .await?;

        let daily_sales = self.repository.daily_sales(&mut tx, &window).await?;
        let category_sales = self.repository.category_sales(&mut tx, &window).await?;

        tx.commit().await?;

        Ok(Dashboard {
            monthly_sales,
            top_products: top_products.into_iter().collect(),
            daily_sales,
            category_sales,
        })
    }
}

#[automock]
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Sales aggregates over paid orders whose payment falls inside `window`.
    async fn dashboard(&self, window: ReportingWindow) -> Result<Dashboard, DashboardServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, tz::TimeZone};
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use adisyon::{
        orders::{OrderStatus, PaymentMethod},
        products::Product,
    };

    use crate::{
        domain::orders::{
            OrdersService,
            data::{NewOrderItem, OrderUpdate},
        },
        test::{TestContext, helpers::create_product},
    };

    use super::*;

    /// Stores an order with the given lines, then closes it with `status` at `paid_at`.
    async fn close_order(
        ctx: &TestContext,
        lines: &[(&Product, u32)],
        status: OrderStatus,
        paid_at: &str,
    ) {
        let order = ctx
            .orders
            .create_order()
            .await
            .expect("create_order should succeed");

        let items: Vec<NewOrderItem> = lines
            .iter()
            .map(|(product, quantity)| NewOrderItem {
                product: product.uuid,
                quantity: *quantity,
                price: product.price * Decimal::from(*quantity),
            })
            .collect();

        let total_amount: Decimal = items.iter().map(|item| item.price).sum();

        ctx.orders
            .update_order(
                order.uuid,
                OrderUpdate {
                    items: Some(items),
                    total_amount: Some(total_amount),
                    status: Some(status),
                    payment_method: Some(PaymentMethod::Cash),
                    paid_at: Some(paid_at.parse().expect("valid timestamp")),
                },
            )
            .await
            .expect("update_order should succeed");
    }

    fn may_2024() -> ReportingWindow {
        let at: Timestamp = "2024-05-15T12:00:00Z".parse().expect("valid timestamp");

        ReportingWindow::month_containing(at, TimeZone::UTC).expect("valid window")
    }

    #[tokio::test]
    async fn dashboard_without_sales_is_empty() -> TestResult {
        let ctx = TestContext::new().await;

        let dashboard = ctx.dashboard.dashboard(may_2024()).await?;

        assert_eq!(dashboard.monthly_sales.total_amount, Decimal::ZERO);
        assert_eq!(dashboard.monthly_sales.order_count, 0);
        assert!(dashboard.top_products.is_empty());
        assert!(dashboard.daily_sales.is_empty());
        assert!(dashboard.category_sales.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn dashboard_counts_only_paid_orders_inside_window() -> TestResult {
        let ctx = TestContext::new().await;
        let latte = create_product(&ctx, "Latte", 25, "Coffee").await?;

        close_order(&ctx, &[(&latte, 2)], OrderStatus::Paid, "2024-05-01T10:00:00Z").await;
        close_order(&ctx, &[(&latte, 1)], OrderStatus::Paid, "2024-05-31T23:59:59Z").await;
        close_order(&ctx, &[(&latte, 4)], OrderStatus::Paid, "2024-06-01T00:00:00Z").await;
        close_order(&ctx, &[(&latte, 4)], OrderStatus::Cancelled, "2024-05-02T10:00:00Z").await;

        let dashboard = ctx.dashboard.dashboard(may_2024()).await?;

        assert_eq!(dashboard.monthly_sales.total_amount, Decimal::from(75));
        assert_eq!(dashboard.monthly_sales.order_count, 2);

        let days: Vec<String> = dashboard
            .daily_sales
            .iter()
            .map(|day| day.day.to_string())
            .collect();

        assert_eq!(days, vec!["2024-05-01", "2024-05-31"]);
        assert_eq!(dashboard.daily_sales[0].total_amount, Decimal::from(50));
        assert_eq!(dashboard.daily_sales[0].order_count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn dashboard_ranks_products_and_categories() -> TestResult {
        let ctx = TestContext::new().await;
        let latte = create_product(&ctx, "Latte", 25, "Coffee").await?;
        let espresso = create_product(&ctx, "Espresso", 20, "Coffee").await?;
        let cake = create_product(&ctx, "Cheesecake", 40, "Dessert").await?;

        close_order(
            &ctx,
            &[(&latte, 1), (&cake, 1)],
            OrderStatus::Paid,
            "2024-05-03T09:00:00Z",
        )
        .await;
        close_order(&ctx, &[(&espresso, 3)], OrderStatus::Paid, "2024-05-04T09:00:00Z").await;

        let dashboard = ctx.dashboard.dashboard(may_2024()).await?;

        let ranking: Vec<(&str, u64)> = dashboard
            .top_products
            .iter()
            .map(|top| (top.product.name.as_str(), top.total_quantity))
            .collect();

        assert_eq!(ranking[0], ("Espresso", 3));
        assert_eq!(ranking.len(), 3);

        // Revenue multiplies the stored line sub-total by the quantity again.
        assert_eq!(dashboard.top_products[0].total_revenue, Decimal::from(180));

        let categories: Vec<(&str, Decimal, u64)> = dashboard
            .category_sales
            .iter()
            .map(|sales| (sales.category.as_str(), sales.total_amount, sales.total_quantity))
            .collect();

        assert_eq!(
            categories,
            vec![
                ("Coffee", Decimal::from(205), 4),
                ("Dessert", Decimal::from(40), 1),
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn dashboard_limits_top_products() -> TestResult {
        let ctx = TestContext::new().await;

        let mut lines = Vec::new();

        for index in 0..7 {
            lines.push(create_product(&ctx, &format!("Product {index}"), 10, "Misc").await?);
        }

        let order_lines: Vec<(&Product, u32)> = lines.iter().map(|product| (product, 1)).collect();

        close_order(&ctx, &order_lines, OrderStatus::Paid, "2024-05-10T09:00:00Z").await;

        let dashboard = ctx.dashboard.dashboard(may_2024()).await?;

        assert_eq!(dashboard.top_products.len(), TOP_PRODUCTS_LIMIT);

        Ok(())
    }

    #[tokio::test]
    async fn daily_sales_group_by_reporting_time_zone() -> TestResult {
        let ctx = TestContext::new().await;
        let latte = create_product(&ctx, "Latte", 25, "Coffee").await?;

        // 22:30 UTC on the 9th is already the 10th in Istanbul (UTC+3).
        close_order(&ctx, &[(&latte, 1)], OrderStatus::Paid, "2024-05-09T22:30:00Z").await;

        let at: Timestamp = "2024-05-15T12:00:00Z".parse()?;
        let window = ReportingWindow::month_containing(at, TimeZone::get("Europe/Istanbul")?)?;

        let dashboard = ctx.dashboard.dashboard(window).await?;

        assert_eq!(dashboard.daily_sales.len(), 1);
        assert_eq!(dashboard.daily_sales[0].day.to_string(), "2024-05-10");

        Ok(())
    }
}
