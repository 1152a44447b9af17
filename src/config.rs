use crate::currency::PriceFormat;
use crate::store::{OrderIdMode, Store};
use anyhow::{anyhow, Context};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub order_ids: OrderIdMode,
    pub currency: PriceFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            order_ids: OrderIdMode::Fixed,
            currency: PriceFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            env::var("STOREFRONT_ORDER_IDS").ok(),
            env::var("STOREFRONT_CURRENCY").ok(),
        )
    }

    fn from_vars(order_ids: Option<String>, currency: Option<String>) -> anyhow::Result<Self> {
        let order_ids = match order_ids.as_deref() {
            None => OrderIdMode::default(),
            Some(raw) => raw
                .parse::<OrderIdMode>()
                .context("STOREFRONT_ORDER_IDS")?,
        };
        let currency = match currency.as_deref() {
            None => PriceFormat::default(),
            Some(raw) => PriceFormat::from_code(raw)
                .ok_or_else(|| anyhow!("STOREFRONT_CURRENCY: unsupported currency {raw:?}"))?,
        };
        Ok(Self {
            order_ids,
            currency,
        })
    }

    pub fn build_store(&self) -> Store {
        Store::with_numbering(self.order_ids.numbering())
    }
}
