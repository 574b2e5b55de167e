//! Private REST API endpoints (authentication required).
//!
//! These endpoints require a token to be configured on the client; without
//! one they fail with [`NobitexError::InvalidCredential`] before any request
//! is sent.

mod types;

pub use types::*;

use serde_json::{Value, json};

use crate::error::{CallContext, NobitexError};
use crate::rest::NobitexRestClient;
use crate::rest::endpoints::private;
use crate::rest::request::RequestDescriptor;
use crate::types::UpdateOrderStatus;

impl NobitexRestClient {
    // ========== Trading Endpoints ==========

    /// Place a new order.
    ///
    /// Stop executions without a stop price are refused locally. When the
    /// exchange refuses the order, the error is
    /// [`NobitexError::OrderRejected`] with the reason taken from the
    /// response `code`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use nobitex_api_client::rest::NobitexRestClient;
    /// use nobitex_api_client::rest::private::CreateOrderRequest;
    /// use nobitex_api_client::types::{DstCurrency, ExecutionType, Side};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = NobitexRestClient::builder().token("my-token").build();
    ///
    ///     let request = CreateOrderRequest::new(
    ///         Side::Buy,
    ///         ExecutionType::Limit,
    ///         "btc",
    ///         DstCurrency::Rls,
    ///         "0.01".parse()?,
    ///         "520000000".parse()?,
    ///     );
    ///     let placed = client.create_order(&request).await?;
    ///     println!("Order id: {}", placed["order"]["id"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_order(&self, request: &CreateOrderRequest) -> Result<Value, NobitexError> {
        let context = CallContext::for_request("create_order", request);
        let body = request.to_body(&context)?;
        let descriptor = RequestDescriptor::post(private::ORDER_ADD)
            .authenticated()
            .json(body);
        self.execute(&context, &descriptor)
            .await
            .map_err(NobitexError::into_order_rejection)
    }

    /// Get the status of a single order.
    pub async fn order_status(&self, order_id: u64) -> Result<Value, NobitexError> {
        let context = CallContext::new("order_status", json!({ "order_id": order_id }));
        let descriptor = RequestDescriptor::post(private::ORDER_STATUS)
            .authenticated()
            .json(json!({ "id": order_id }));
        self.execute(&context, &descriptor).await
    }

    /// List the user's orders.
    pub async fn open_orders(&self, request: &OpenOrdersRequest) -> Result<Value, NobitexError> {
        let context = CallContext::for_request("open_orders", request);
        let body = Self::json_body(&context, request)?;
        let descriptor = RequestDescriptor::post(private::ORDER_LIST)
            .authenticated()
            .json(body);
        self.execute(&context, &descriptor).await
    }

    /// Change the status of an order, e.g. to cancel it.
    pub async fn update_order_status(
        &self,
        order_id: u64,
        status: UpdateOrderStatus,
    ) -> Result<Value, NobitexError> {
        let context = CallContext::new(
            "update_order_status",
            json!({ "order_id": order_id, "status": status }),
        );
        let descriptor = RequestDescriptor::post(private::ORDER_UPDATE_STATUS)
            .authenticated()
            .json(json!({ "id": order_id, "status": status }));
        self.execute(&context, &descriptor).await
    }

    /// Cancel orders in bulk.
    pub async fn cancel_all_orders(
        &self,
        request: &CancelAllOrdersRequest,
    ) -> Result<Value, NobitexError> {
        let context = CallContext::for_request("cancel_all_orders", request);
        let body = request.to_body(&context)?;
        let descriptor = RequestDescriptor::post(private::ORDER_CANCEL_ALL)
            .authenticated()
            .json(body);
        self.execute(&context, &descriptor).await
    }

    // ========== Account Endpoints ==========

    /// Get the user profile.
    pub async fn user_profile(&self) -> Result<Value, NobitexError> {
        let context = CallContext::bare("user_profile");
        let descriptor = RequestDescriptor::post(private::PROFILE).authenticated();
        self.execute(&context, &descriptor).await
    }

    /// Get the user's trading and withdrawal limitations.
    pub async fn user_limitations(&self) -> Result<Value, NobitexError> {
        let context = CallContext::bare("user_limitations");
        let descriptor = RequestDescriptor::post(private::LIMITATIONS).authenticated();
        self.execute(&context, &descriptor).await
    }

    /// Register a bank card.
    pub async fn add_bank_card(
        &self,
        card_number: &str,
        bank_name: &str,
    ) -> Result<Value, NobitexError> {
        let context = CallContext::new(
            "add_bank_card",
            json!({ "card_number": card_number, "bank_name": bank_name }),
        );
        let body = json!({
            "number": card_number.to_lowercase(),
            "bank": bank_name.to_lowercase(),
        });
        let descriptor = RequestDescriptor::post(private::CARDS_ADD)
            .authenticated()
            .json(body);
        self.execute(&context, &descriptor).await
    }

    /// Register a bank account by its number and IBAN (shaba).
    pub async fn add_bank_account(
        &self,
        account_number: &str,
        shaba: &str,
        bank_name: &str,
    ) -> Result<Value, NobitexError> {
        let context = CallContext::new(
            "add_bank_account",
            json!({ "account_number": account_number, "shaba": shaba, "bank_name": bank_name }),
        );
        let (number, shaba, bank) = (
            account_number.to_lowercase(),
            shaba.to_lowercase(),
            bank_name.to_lowercase(),
        );
        let body = Self::json_body(
            &context,
            &BankAccount {
                number: &number,
                shaba: &shaba,
                bank: &bank,
            },
        )?;
        let descriptor = RequestDescriptor::post(private::ACCOUNT_ADD)
            .authenticated()
            .json(body);
        self.execute(&context, &descriptor).await
    }

    // ========== Wallet Endpoints ==========

    /// List the user's wallets, optionally only those of some currencies.
    pub async fn user_wallets(&self, currencies: Option<&[String]>) -> Result<Value, NobitexError> {
        let context = CallContext::new("user_wallets", json!({ "currencies": currencies }));
        let descriptor = match currencies {
            None => RequestDescriptor::post(private::WALLETS_LIST).authenticated(),
            Some(currencies) => {
                let body = Self::json_body(&context, &WalletsFilter { currencies })?;
                RequestDescriptor::post(private::WALLETS_V2)
                    .authenticated()
                    .json(body)
            }
        };
        self.execute(&context, &descriptor).await
    }

    /// Get the balance of one currency.
    pub async fn balance(&self, currency: &str) -> Result<Value, NobitexError> {
        let context = CallContext::new("balance", json!({ "currency": currency }));
        let descriptor = RequestDescriptor::post(private::WALLET_BALANCE)
            .authenticated()
            .json(json!({ "currency": currency.to_ascii_lowercase() }));
        self.execute(&context, &descriptor).await
    }

    /// Generate a deposit address for a currency.
    pub async fn generate_wallet_address(&self, currency: &str) -> Result<Value, NobitexError> {
        let context = CallContext::new("generate_wallet_address", json!({ "currency": currency }));
        let descriptor = RequestDescriptor::post(private::WALLET_GENERATE_ADDRESS)
            .authenticated()
            .json(json!({ "currency": currency.to_ascii_lowercase() }));
        self.execute(&context, &descriptor).await
    }

    /// List the transactions of a wallet.
    pub async fn transactions_list(&self, wallet_id: u64) -> Result<Value, NobitexError> {
        let context = CallContext::new("transactions_list", json!({ "wallet_id": wallet_id }));
        let descriptor = RequestDescriptor::post(private::WALLET_TRANSACTIONS)
            .authenticated()
            .json(json!({ "wallet": wallet_id.to_string() }));
        self.execute(&context, &descriptor).await
    }

    /// List deposits of one wallet, or of all wallets when `wallet_id` is `None`.
    pub async fn deposits_list(&self, wallet_id: Option<u64>) -> Result<Value, NobitexError> {
        let context = CallContext::new("deposits_list", json!({ "wallet_id": wallet_id }));
        let wallet = wallet_id.map_or_else(|| "all".to_string(), |id| id.to_string());
        let descriptor = RequestDescriptor::post(private::WALLET_DEPOSITS)
            .authenticated()
            .json(json!({ "wallet": wallet }));
        self.execute(&context, &descriptor).await
    }
}
