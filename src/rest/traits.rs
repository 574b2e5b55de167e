//! Trait definition for the Nobitex REST API client.
//!
//! [`NobitexApi`] abstracts every REST operation so that code built on top of
//! the client can be tested against a mock implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use nobitex_api_client::rest::{NobitexApi, NobitexRestClient};
//!
//! async fn best_bid<C: NobitexApi>(client: &C) -> Result<(), nobitex_api_client::NobitexError> {
//!     let book = client.orderbook("BTCIRT").await?;
//!     println!("Best bid: {}", book["bids"][0][0]);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use serde_json::Value;

use crate::auth::Token;
use crate::error::NobitexError;
use crate::rest::NobitexRestClient;
use crate::rest::private::{CancelAllOrdersRequest, CreateOrderRequest, OpenOrdersRequest};
use crate::rest::public::OhlcRequest;
use crate::types::{DstCurrency, UpdateOrderStatus};

/// Trait defining all Nobitex REST API operations.
///
/// Every method returns the validated response body on success.
pub trait NobitexApi: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get the order book of a market.
    fn orderbook(&self, symbol: &str) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    /// Get the recent trades of a market.
    fn trades(&self, symbol: &str) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    /// Get market statistics.
    fn market_stats(
        &self,
        src_currency: &str,
        dst_currency: DstCurrency,
    ) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    /// Get OHLC candles.
    fn ohlc(
        &self,
        request: &OhlcRequest,
    ) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    /// Get global market statistics.
    fn global_stats(&self) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    /// Exchange credentials for a token.
    fn login(
        &self,
        username: &str,
        password: &str,
        captcha: Option<&str>,
    ) -> impl Future<Output = Result<Token, NobitexError>> + Send;

    // ========== Private Endpoints - Trading ==========

    /// Place a new order.
    fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    /// Get the status of an order.
    fn order_status(
        &self,
        order_id: u64,
    ) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    /// List the user's orders.
    fn open_orders(
        &self,
        request: &OpenOrdersRequest,
    ) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    /// Change the status of an order.
    fn update_order_status(
        &self,
        order_id: u64,
        status: UpdateOrderStatus,
    ) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    /// Cancel orders in bulk.
    fn cancel_all_orders(
        &self,
        request: &CancelAllOrdersRequest,
    ) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    // ========== Private Endpoints - Account ==========

    /// Get the user profile.
    fn user_profile(&self) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    /// Get the user's limitations.
    fn user_limitations(&self) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    /// Register a bank card.
    fn add_bank_card(
        &self,
        card_number: &str,
        bank_name: &str,
    ) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    /// Register a bank account.
    fn add_bank_account(
        &self,
        account_number: &str,
        shaba: &str,
        bank_name: &str,
    ) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    // ========== Private Endpoints - Wallets ==========

    /// List the user's wallets.
    fn user_wallets(
        &self,
        currencies: Option<&[String]>,
    ) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    /// Get the balance of one currency.
    fn balance(&self, currency: &str) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    /// Generate a deposit address.
    fn generate_wallet_address(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    /// List the transactions of a wallet.
    fn transactions_list(
        &self,
        wallet_id: u64,
    ) -> impl Future<Output = Result<Value, NobitexError>> + Send;

    /// List deposits of one wallet, or of all wallets.
    fn deposits_list(
        &self,
        wallet_id: Option<u64>,
    ) -> impl Future<Output = Result<Value, NobitexError>> + Send;
}

impl NobitexApi for NobitexRestClient {
    async fn orderbook(&self, symbol: &str) -> Result<Value, NobitexError> {
        NobitexRestClient::orderbook(self, symbol).await
    }

    async fn trades(&self, symbol: &str) -> Result<Value, NobitexError> {
        NobitexRestClient::trades(self, symbol).await
    }

    async fn market_stats(
        &self,
        src_currency: &str,
        dst_currency: DstCurrency,
    ) -> Result<Value, NobitexError> {
        NobitexRestClient::market_stats(self, src_currency, dst_currency).await
    }

    async fn ohlc(&self, request: &OhlcRequest) -> Result<Value, NobitexError> {
        NobitexRestClient::ohlc(self, request).await
    }

    async fn global_stats(&self) -> Result<Value, NobitexError> {
        NobitexRestClient::global_stats(self).await
    }

    async fn login(
        &self,
        username: &str,
        password: &str,
        captcha: Option<&str>,
    ) -> Result<Token, NobitexError> {
        NobitexRestClient::login(self, username, password, captcha).await
    }

    async fn create_order(&self, request: &CreateOrderRequest) -> Result<Value, NobitexError> {
        NobitexRestClient::create_order(self, request).await
    }

    async fn order_status(&self, order_id: u64) -> Result<Value, NobitexError> {
        NobitexRestClient::order_status(self, order_id).await
    }

    async fn open_orders(&self, request: &OpenOrdersRequest) -> Result<Value, NobitexError> {
        NobitexRestClient::open_orders(self, request).await
    }

    async fn update_order_status(
        &self,
        order_id: u64,
        status: UpdateOrderStatus,
    ) -> Result<Value, NobitexError> {
        NobitexRestClient::update_order_status(self, order_id, status).await
    }

    async fn cancel_all_orders(
        &self,
        request: &CancelAllOrdersRequest,
    ) -> Result<Value, NobitexError> {
        NobitexRestClient::cancel_all_orders(self, request).await
    }

    async fn user_profile(&self) -> Result<Value, NobitexError> {
        NobitexRestClient::user_profile(self).await
    }

    async fn user_limitations(&self) -> Result<Value, NobitexError> {
        NobitexRestClient::user_limitations(self).await
    }

    async fn user_wallets(&self, currencies: Option<&[String]>) -> Result<Value, NobitexError> {
        NobitexRestClient::user_wallets(self, currencies).await
    }

    async fn add_bank_card(&self, card_number: &str, bank_name: &str) -> Result<Value, NobitexError> {
        NobitexRestClient::add_bank_card(self, card_number, bank_name).await
    }

    async fn add_bank_account(
        &self,
        account_number: &str,
        shaba: &str,
        bank_name: &str,
    ) -> Result<Value, NobitexError> {
        NobitexRestClient::add_bank_account(self, account_number, shaba, bank_name).await
    }

    async fn balance(&self, currency: &str) -> Result<Value, NobitexError> {
        NobitexRestClient::balance(self, currency).await
    }

    async fn generate_wallet_address(&self, currency: &str) -> Result<Value, NobitexError> {
        NobitexRestClient::generate_wallet_address(self, currency).await
    }

    async fn transactions_list(&self, wallet_id: u64) -> Result<Value, NobitexError> {
        NobitexRestClient::transactions_list(self, wallet_id).await
    }

    async fn deposits_list(&self, wallet_id: Option<u64>) -> Result<Value, NobitexError> {
        NobitexRestClient::deposits_list(self, wallet_id).await
    }
}
