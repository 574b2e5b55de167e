//! Nobitex REST API endpoint constants.

/// Base URL for the Nobitex REST API.
pub const NOBITEX_BASE_URL: &str = "https://api.nobitex.ir";

/// Public endpoints (no authentication required).
pub mod public {
    /// Order book; append the upper-cased symbol.
    pub const ORDERBOOK: &str = "/v2/orderbook/";
    /// Recent trades; append the upper-cased symbol.
    pub const TRADES: &str = "/v2/trades/";
    /// Market statistics.
    pub const MARKET_STATS: &str = "/market/stats";
    /// OHLC history in TradingView UDF format.
    pub const OHLC: &str = "/market/udf/history";
    /// Global market statistics.
    pub const GLOBAL_STATS: &str = "/market/global-stats";
    /// Exchange username/password for a token.
    pub const LOGIN: &str = "/auth/login/";
}

/// Private endpoints (authentication required).
pub mod private {
    // Trading endpoints
    /// Place a new order.
    pub const ORDER_ADD: &str = "/market/orders/add";
    /// Get a single order.
    pub const ORDER_STATUS: &str = "/market/orders/status";
    /// List the user's orders.
    pub const ORDER_LIST: &str = "/market/orders/list";
    /// Change an order's status.
    pub const ORDER_UPDATE_STATUS: &str = "/market/orders/update-status";
    /// Cancel orders in bulk.
    pub const ORDER_CANCEL_ALL: &str = "/market/orders/cancel-all";

    // Account endpoints
    /// User profile.
    pub const PROFILE: &str = "/users/profile";
    /// User limitations.
    pub const LIMITATIONS: &str = "/users/limitations";
    /// Add a bank card.
    pub const CARDS_ADD: &str = "/users/cards-add";
    /// Add a bank account.
    pub const ACCOUNT_ADD: &str = "/users/account-add";

    // Wallet endpoints
    /// All wallets.
    pub const WALLETS_LIST: &str = "/users/wallets/list";
    /// Wallets filtered by currency.
    pub const WALLETS_V2: &str = "/v2/wallets";
    /// Balance of a single currency.
    pub const WALLET_BALANCE: &str = "/users/wallets/balance";
    /// Generate a deposit address.
    pub const WALLET_GENERATE_ADDRESS: &str = "/users/wallets/generate-address";
    /// Wallet transactions.
    pub const WALLET_TRANSACTIONS: &str = "/users/wallets/transactions/list";
    /// Wallet deposits.
    pub const WALLET_DEPOSITS: &str = "/users/wallets/deposits/list";
}
