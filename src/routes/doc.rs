use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    audit::AuditEntry,
    dto::{
        audit::AuditLogList,
        orders::{
            CreateOrderItem, CreateOrderRequest, OrderDetail, OrderList, TransitionList,
            UpdateOrderStatusRequest,
        },
        products::ProductList,
    },
    models::{Customer, Order, OrderItem, OrderStatus, Product},
    notifier::StatusChanged,
    response::{ApiResponse, Meta},
    report::{CategorySales, DailySales, SalesSummary},
    routes::{audit, health, orders, params, products, reports},
    search::StatusCounts,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        orders::list_orders,
        orders::order_counts,
        orders::create_order,
        orders::get_order,
        orders::list_transitions,
        orders::update_order_status,
        products::list_products,
        audit::list_audit_logs,
        reports::sales_summary
    ),
    components(
        schemas(
            Order,
            OrderItem,
            OrderStatus,
            Product,
            Customer,
            AuditEntry,
            StatusChanged,
            StatusCounts,
            SalesSummary,
            DailySales,
            CategorySales,
            CreateOrderItem,
            CreateOrderRequest,
            UpdateOrderStatusRequest,
            OrderList,
            OrderDetail,
            TransitionList,
            ProductList,
            AuditLogList,
            params::Pagination,
            params::SortOrder,
            Meta,
            ApiResponse<OrderList>,
            ApiResponse<OrderDetail>,
            ApiResponse<TransitionList>,
            ApiResponse<StatusCounts>,
            ApiResponse<ProductList>,
            ApiResponse<AuditLogList>,
            ApiResponse<SalesSummary>,
            health::HealthData,
            ApiResponse<health::HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Orders", description = "Order tracking and status lifecycle"),
        (name = "Products", description = "Canteen menu"),
        (name = "Audit", description = "Order audit trail"),
        (name = "Reports", description = "Sales summary"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
