//! Storefront Operations
//!
//! The query and create operations served by the mock store. Each one
//! resolves immediately and replies with the client envelope.

use super::{helpers::*, models::*, state::Store};
use crate::client::{helpers::*, ApiResult, Body, IdPath, Options, Page};
use crate::error::{StoreError, StoreResult};
use chrono::Utc;

/// Fallback id for customers created without one. Every such customer
/// shares it.
pub const DEFAULT_CUSTOMER_ID: &str = "customer-1";

impl Store {
    /// Lists products, filtered and optionally sorted by the query section
    pub async fn list_products(&self, options: Options<ProductQuery>) -> ApiResult<Page<Product>> {
        let query = options.params;
        let items = filter_products(&self.products, &query);
        tracing::debug!(?query, count = items.len(), "list products");
        as_result(Page::single(items), "GET")
    }

    /// Looks up one product by id, with its variants
    pub async fn get_product(&self, options: Options<IdPath>) -> StoreResult<ApiResult<Product>> {
        let id = options.params.id.as_str();
        match self.products.iter().find(|p| p.id == id) {
            Some(product) => Ok(as_result(product.clone(), "GET")),
            None => not_found(options.throw_on_error, "product", id, "GET"),
        }
    }

    /// Lists every collection in declaration order
    pub async fn list_collections(&self, _options: Options<()>) -> ApiResult<Page<Collection>> {
        as_result(Page::single(self.collections.clone()), "GET")
    }

    /// Looks up one collection by id. Its product list is never filled in.
    pub async fn get_collection(
        &self,
        options: Options<IdPath>,
    ) -> StoreResult<ApiResult<CollectionWithProducts>> {
        let id = options.params.id.as_str();
        match self.collections.iter().find(|c| c.id == id) {
            Some(collection) => Ok(as_result(
                CollectionWithProducts {
                    collection: collection.clone(),
                    products: Vec::new(),
                },
                "GET",
            )),
            None => not_found(options.throw_on_error, "collection", id, "GET"),
        }
    }

    /// Echoes a new customer record back. Nothing is stored.
    pub async fn create_customer(
        &self,
        options: Options<Body<CreateCustomerInput>>,
    ) -> StoreResult<ApiResult<Customer>> {
        let input = options.params.body.ok_or_else(|| {
            let err = StoreError::MissingBody {
                operation: "create_customer",
            };
            tracing::warn!(%err, "rejected create");
            err
        })?;

        let now = Utc::now();
        let customer = Customer {
            id: input
                .id
                .unwrap_or_else(|| DEFAULT_CUSTOMER_ID.to_string()),
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            phone: input.phone,
            extra: strip_reserved(input.extra, CUSTOMER_RESERVED_KEYS),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        tracing::info!(customer_id = %customer.id, "created customer");
        Ok(as_result(customer, "POST"))
    }

    /// Creates an order, resolving each line item's variant against the
    /// catalogue. Nothing is stored if any variant is unknown.
    pub async fn create_order(
        &self,
        options: Options<Body<CreateOrderInput>>,
    ) -> StoreResult<ApiResult<Order>> {
        let input = options.params.body.ok_or_else(|| {
            let err = StoreError::MissingBody {
                operation: "create_order",
            };
            tracing::warn!(%err, "rejected create");
            err
        })?;

        let line_items = input
            .line_items
            .into_iter()
            .map(|item| -> StoreResult<LineItem> {
                let product_variant = resolve_variant(&self.products, &item.product_variant_id)?;
                Ok(LineItem {
                    id: new_line_item_id(),
                    product_variant_id: item.product_variant_id,
                    quantity: item.quantity,
                    extra: strip_reserved(item.extra, LINE_ITEM_RESERVED_KEYS),
                    product_variant,
                })
            })
            .collect::<StoreResult<Vec<_>>>()
            .inspect_err(|err| tracing::warn!(%err, "rejected order"))?;

        let (id, number) = self.numbering.next();
        let now = Utc::now();
        let order = Order {
            id,
            number,
            line_items,
            billing_address: normalize_address(input.billing_address),
            shipping_address: normalize_address(input.shipping_address),
            extra: strip_reserved(input.extra, ORDER_RESERVED_KEYS),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        if self.orders.insert(order.id.clone(), order.clone()).is_some() {
            tracing::debug!(order_id = %order.id, "replaced order with the same id");
        }
        tracing::info!(
            order_id = %order.id,
            number = order.number,
            line_items = order.line_items.len(),
            "created order"
        );

        Ok(as_result(order, "POST"))
    }

    /// Looks up a created order by id
    pub async fn get_order(&self, options: Options<IdPath>) -> StoreResult<ApiResult<Order>> {
        let id = options.params.id.as_str();
        match self.orders.get(id) {
            Some(order) => Ok(as_result(order.value().clone(), "GET")),
            None => not_found(options.throw_on_error, "order", id, "GET"),
        }
    }
}
