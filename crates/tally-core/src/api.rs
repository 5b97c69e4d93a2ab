//! API gateway: one method per backend operation
//!
//! Every failure is logged and surfaced synchronously to the caller; there
//! are no retries and no backoff. Authenticated operations fail fast with
//! an authentication error when no access token is stored, before any
//! request is built.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{Result, TallyError};
use crate::http::{HttpClient, HttpResponse};
use crate::models::{
    Budget, BudgetAmount, BudgetSummary, Category, CategorySpending, Credentials, MonthlyExpense,
    NewBudget, NewTransaction, RegisterRequest, Transaction,
};
use crate::session::{Session, TokenPair};

/// Backend endpoint URLs, built once from the configured base
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base: config.normalized_base_url(),
        }
    }

    pub fn register(&self) -> String {
        format!("{}users/register/", self.base)
    }

    pub fn login(&self) -> String {
        format!("{}users/login/", self.base)
    }

    pub fn logout(&self) -> String {
        format!("{}users/logout/", self.base)
    }

    pub fn transactions(&self) -> String {
        format!("{}budget/transactions/", self.base)
    }

    pub fn transaction(&self, id: u64) -> String {
        format!("{}budget/transactions/{}/", self.base, id)
    }

    pub fn budgets(&self) -> String {
        format!("{}budget/budget/", self.base)
    }

    pub fn budget(&self, id: u64) -> String {
        format!("{}budget/budget/{}/", self.base, id)
    }

    pub fn categories(&self) -> String {
        format!("{}budget/categories/", self.base)
    }

    pub fn budget_summary(&self) -> String {
        format!("{}budget/summary/", self.base)
    }

    pub fn spending_by_category(&self) -> String {
        format!("{}budget/spending-by-category/", self.base)
    }

    pub fn expenses_over_time(&self) -> String {
        format!("{}budget/expenses-over-time/", self.base)
    }
}

/// Thin client over the backend REST API
#[derive(Clone)]
pub struct ApiClient {
    http: Arc<dyn HttpClient>,
    session: Session,
    endpoints: Endpoints,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("endpoints", &self.endpoints)
            .field("session", &self.session)
            .finish()
    }
}

impl ApiClient {
    pub fn new(http: Arc<dyn HttpClient>, session: Session, config: &ApiConfig) -> Self {
        Self {
            http,
            session,
            endpoints: Endpoints::new(config),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Access token for an authenticated request, or an immediate error
    /// with no request sent
    fn bearer(&self) -> Result<String> {
        self.session.access_token().ok_or_else(|| {
            let err = TallyError::Auth("No access token found. Please log in again.".to_string());
            log::error!("{err}");
            err
        })
    }

    fn surface(operation: &'static str) -> impl Fn(TallyError) -> TallyError {
        move |err| {
            log::error!("{operation} failed: {err}");
            err
        }
    }

    fn ensure_success(operation: &'static str, response: HttpResponse) -> Result<HttpResponse> {
        if response.is_success() {
            Ok(response)
        } else {
            Err(Self::surface(operation)(TallyError::Api {
                status: response.status,
                body: response.body,
            }))
        }
    }

    fn decode<T: DeserializeOwned>(operation: &'static str, response: HttpResponse) -> Result<T> {
        let response = Self::ensure_success(operation, response)?;
        serde_json::from_str(&response.body)
            .map_err(TallyError::from)
            .map_err(Self::surface(operation))
    }

    // ---- Authentication ----

    pub async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value> {
        let body = serde_json::to_string(request)?;
        let response = self
            .http
            .post_json(&self.endpoints.register(), &body, None)
            .await
            .map_err(Self::surface("Registration"))?;
        Self::decode("Registration", response)
    }

    /// Log in and, on success, persist the returned token pair verbatim
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenPair> {
        let body = serde_json::to_string(credentials)?;
        let response = self
            .http
            .post_json(&self.endpoints.login(), &body, None)
            .await
            .map_err(Self::surface("Login"))?;
        let tokens: TokenPair = Self::decode("Login", response)?;
        self.session.store_tokens(&tokens);
        Ok(tokens)
    }

    /// Log out; the stored tokens are cleared only when the backend call
    /// succeeds. A failed call leaves both tokens in place (see DESIGN.md
    /// for the fail-closed decision).
    pub async fn logout(&self) -> Result<()> {
        let refresh = self.session.refresh_token().ok_or_else(|| {
            let err = TallyError::Auth("No refresh token found. Please log in again.".to_string());
            log::error!("{err}");
            err
        })?;
        let bearer = self.bearer()?;
        let body = serde_json::to_string(&serde_json::json!({ "refresh": refresh }))?;
        let response = self
            .http
            .post_json(&self.endpoints.logout(), &body, Some(&bearer))
            .await
            .map_err(Self::surface("Logout"))?;
        Self::ensure_success("Logout", response)?;
        self.session.clear();
        Ok(())
    }

    // ---- Transactions ----

    pub async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let bearer = self.bearer()?;
        let response = self
            .http
            .get(&self.endpoints.transactions(), Some(&bearer))
            .await
            .map_err(Self::surface("Fetching transactions"))?;
        Self::decode("Fetching transactions", response)
    }

    pub async fn fetch_transaction(&self, id: u64) -> Result<Transaction> {
        let bearer = self.bearer()?;
        let response = self
            .http
            .get(&self.endpoints.transaction(id), Some(&bearer))
            .await
            .map_err(Self::surface("Fetching transaction"))?;
        Self::decode("Fetching transaction", response)
    }

    pub async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction> {
        let bearer = self.bearer()?;
        let body = serde_json::to_string(transaction)?;
        let response = self
            .http
            .post_json(&self.endpoints.transactions(), &body, Some(&bearer))
            .await
            .map_err(Self::surface("Creating transaction"))?;
        Self::decode("Creating transaction", response)
    }

    pub async fn update_transaction(
        &self,
        id: u64,
        transaction: &NewTransaction,
    ) -> Result<Transaction> {
        let bearer = self.bearer()?;
        let body = serde_json::to_string(transaction)?;
        let response = self
            .http
            .put_json(&self.endpoints.transaction(id), &body, Some(&bearer))
            .await
            .map_err(Self::surface("Updating transaction"))?;
        Self::decode("Updating transaction", response)
    }

    pub async fn delete_transaction(&self, id: u64) -> Result<()> {
        let bearer = self.bearer()?;
        let response = self
            .http
            .delete(&self.endpoints.transaction(id), Some(&bearer))
            .await
            .map_err(Self::surface("Deleting transaction"))?;
        Self::ensure_success("Deleting transaction", response)?;
        Ok(())
    }

    // ---- Budgets ----

    pub async fn list_budgets(&self) -> Result<Vec<Budget>> {
        let bearer = self.bearer()?;
        let response = self
            .http
            .get(&self.endpoints.budgets(), Some(&bearer))
            .await
            .map_err(Self::surface("Fetching budgets"))?;
        Self::decode("Fetching budgets", response)
    }

    pub async fn create_budget(&self, budget: &NewBudget) -> Result<Budget> {
        let bearer = self.bearer()?;
        let body = serde_json::to_string(budget)?;
        let response = self
            .http
            .post_json(&self.endpoints.budgets(), &body, Some(&bearer))
            .await
            .map_err(Self::surface("Creating budget"))?;
        Self::decode("Creating budget", response)
    }

    pub async fn update_budget(&self, id: u64, amount: &BudgetAmount) -> Result<Budget> {
        let bearer = self.bearer()?;
        let body = serde_json::to_string(amount)?;
        let response = self
            .http
            .put_json(&self.endpoints.budget(id), &body, Some(&bearer))
            .await
            .map_err(Self::surface("Updating budget"))?;
        Self::decode("Updating budget", response)
    }

    pub async fn delete_budget(&self, id: u64) -> Result<()> {
        let bearer = self.bearer()?;
        let response = self
            .http
            .delete(&self.endpoints.budget(id), Some(&bearer))
            .await
            .map_err(Self::surface("Deleting budget"))?;
        Self::ensure_success("Deleting budget", response)?;
        Ok(())
    }

    // ---- Categories and aggregates ----

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let bearer = self.bearer()?;
        let response = self
            .http
            .get(&self.endpoints.categories(), Some(&bearer))
            .await
            .map_err(Self::surface("Fetching categories"))?;
        Self::decode("Fetching categories", response)
    }

    pub async fn budget_summary(&self) -> Result<BudgetSummary> {
        let bearer = self.bearer()?;
        let response = self
            .http
            .get(&self.endpoints.budget_summary(), Some(&bearer))
            .await
            .map_err(Self::surface("Fetching budget summary"))?;
        Self::decode("Fetching budget summary", response)
    }

    pub async fn spending_by_category(&self) -> Result<Vec<CategorySpending>> {
        let bearer = self.bearer()?;
        let response = self
            .http
            .get(&self.endpoints.spending_by_category(), Some(&bearer))
            .await
            .map_err(Self::surface("Fetching spending by category"))?;
        Self::decode("Fetching spending by category", response)
    }

    pub async fn expenses_over_time(&self) -> Result<Vec<MonthlyExpense>> {
        let bearer = self.bearer()?;
        let response = self
            .http
            .get(&self.endpoints.expenses_over_time(), Some(&bearer))
            .await
            .map_err(Self::surface("Fetching expenses over time"))?;
        Self::decode("Fetching expenses over time", response)
    }
}
