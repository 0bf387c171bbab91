//! App Router

use salvo::Router;

use crate::{dashboard, orders, products};

pub fn api_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(
                    Router::with_path("{order}")
                        .get(orders::get::handler)
                        .patch(orders::update::handler)
                        .push(
                            Router::with_path("items")
                                .post(orders::items::create::handler)
                                .push(
                                    Router::with_path("{product}")
                                        .put(orders::items::update::handler)
                                        .delete(orders::items::delete::handler),
                                ),
                        )
                        .push(Router::with_path("payment").post(orders::payment::handler))
                        .push(Router::with_path("cancel").post(orders::cancel::handler)),
                ),
        )
        .push(Router::with_path("dashboard").get(dashboard::handler::handler))
}
