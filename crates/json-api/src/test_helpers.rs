//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, tz::TimeZone};
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use adisyon::{
    orders::{Order, OrderItem, OrderNumber, OrderUuid},
    products::{Product, ProductUuid},
};
use adisyon_app::{
    context::AppContext,
    domain::{
        dashboard::MockDashboardService, orders::MockOrdersService,
        products::MockProductsService,
    },
};

use crate::state::State;

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_create_product().never();

    products
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_list_orders().never();
    orders.expect_get_order().never();
    orders.expect_create_order().never();
    orders.expect_update_order().never();
    orders.expect_add_item().never();
    orders.expect_set_item_quantity().never();
    orders.expect_remove_item().never();
    orders.expect_record_payment().never();
    orders.expect_cancel_order().never();

    orders
}

fn strict_dashboard_mock() -> MockDashboardService {
    let mut dashboard = MockDashboardService::new();

    dashboard.expect_dashboard().never();

    dashboard
}

fn state(
    products: MockProductsService,
    orders: MockOrdersService,
    dashboard: MockDashboardService,
) -> Arc<State> {
    State::from_app_context(
        AppContext {
            products: Arc::new(products),
            orders: Arc::new(orders),
            dashboard: Arc::new(dashboard),
        },
        TimeZone::UTC,
    )
}

fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(
        state(products, strict_orders_mock(), strict_dashboard_mock()),
        route,
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service(
        state(strict_products_mock(), orders, strict_dashboard_mock()),
        route,
    )
}

pub(crate) fn dashboard_service(dashboard: MockDashboardService, route: Router) -> Service {
    service(
        state(strict_products_mock(), strict_orders_mock(), dashboard),
        route,
    )
}

pub(crate) fn make_product(uuid: ProductUuid, name: &str, price: i64) -> Product {
    Product {
        uuid,
        name: name.to_string(),
        price: Decimal::from(price),
        category: "Coffee".to_string(),
        is_available: true,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(uuid: OrderUuid) -> Order {
    Order::open(uuid, OrderNumber::FIRST, Timestamp::UNIX_EPOCH)
}

/// An open order holding `quantity` units of a single product.
pub(crate) fn make_order_with_item(uuid: OrderUuid, product: Product, quantity: u32) -> Order {
    let price = product.price * Decimal::from(quantity);

    let mut order = make_order(uuid);

    order.items.push(OrderItem {
        product,
        quantity,
        price,
    });
    order.total_amount = price;

    order
}
