use crate::apis::accounts::{AccountAttributes, AccountClassification};

/// Maximum number of account holder names, the primary holder included.
pub const MAX_HOLDER_NAMES: usize = 4;
/// Maximum number of alternative names.
pub const MAX_ALTERNATIVE_NAMES: usize = 3;

/// Fields of an organisation bank account to be created.
///
/// Each `with_*` method consumes the account and returns the updated value, and the chain
/// is closed by [`build`](OrganisationAccount::build). Nothing is validated locally:
/// invalid values are reported by the API when the account is created.
///
/// Names exceeding [`MAX_HOLDER_NAMES`] or [`MAX_ALTERNATIVE_NAMES`] are silently discarded.
///
/// ```
/// # use accounts_client::apis::accounts::OrganisationAccount;
/// let account = OrganisationAccount::default()
///     .with_name("Jane")
///     .with_currency("CAD")
///     .build("CA", "Malek");
///
/// assert!(account.is_ready());
/// assert_eq!(account.holder_names(), ["Jane", "Malek"]);
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct OrganisationAccount {
    country: Option<String>,
    bank_id: Option<String>,
    bank_id_code: Option<String>,
    bic: Option<String>,
    iban: Option<String>,
    holder_names: Vec<String>,
    alternative_names: Vec<String>,
    currency: Option<String>,
    account_number: Option<String>,
    customer_id: Option<String>,
    classification: Option<AccountClassification>,
    ready: bool,
}

impl OrganisationAccount {
    /// Adds an account holder name.
    ///
    /// Until the account is built one slot is kept free for the primary holder.
    pub fn with_name(mut self, holder_name: impl Into<String>) -> Self {
        let limit = if self.ready {
            MAX_HOLDER_NAMES
        } else {
            MAX_HOLDER_NAMES - 1
        };
        if self.holder_names.len() < limit {
            self.holder_names.push(holder_name.into());
        }
        self
    }

    /// Adds an alternative name.
    pub fn with_alternative_name(mut self, name: impl Into<String>) -> Self {
        if self.alternative_names.len() < MAX_ALTERNATIVE_NAMES {
            self.alternative_names.push(name.into());
        }
        self
    }

    pub fn with_bank(
        mut self,
        bank_id: impl Into<String>,
        bank_id_code: impl Into<String>,
    ) -> Self {
        self.bank_id = Some(bank_id.into());
        self.bank_id_code = Some(bank_id_code.into());
        self
    }

    /// Sets the ISO 4217 code of the base currency.
    pub fn with_currency(mut self, currency_code: impl Into<String>) -> Self {
        self.currency = Some(currency_code.into());
        self
    }

    pub fn with_account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = Some(account_number.into());
        self
    }

    pub fn with_bic(mut self, bic: impl Into<String>) -> Self {
        self.bic = Some(bic.into());
        self
    }

    pub fn with_iban(mut self, iban: impl Into<String>) -> Self {
        self.iban = Some(iban.into());
        self
    }

    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn with_classification(mut self, classification: AccountClassification) -> Self {
        self.classification = Some(classification);
        self
    }

    /// Sets the country and the primary holder name, and marks the account as ready.
    pub fn build(
        mut self,
        country_code: impl Into<String>,
        holder_name: impl Into<String>,
    ) -> Self {
        self.country = Some(country_code.into());
        self.ready = true;
        self.with_name(holder_name)
    }

    /// Whether [`build`](OrganisationAccount::build) has been called.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn bank_id(&self) -> Option<&str> {
        self.bank_id.as_deref()
    }

    pub fn bank_id_code(&self) -> Option<&str> {
        self.bank_id_code.as_deref()
    }

    pub fn bic(&self) -> Option<&str> {
        self.bic.as_deref()
    }

    pub fn iban(&self) -> Option<&str> {
        self.iban.as_deref()
    }

    pub fn holder_names(&self) -> &[String] {
        &self.holder_names
    }

    pub fn alternative_names(&self) -> &[String] {
        &self.alternative_names
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn classification(&self) -> Option<AccountClassification> {
        self.classification
    }
}

impl From<&OrganisationAccount> for AccountAttributes {
    fn from(account: &OrganisationAccount) -> Self {
        AccountAttributes {
            country: account.country.clone().unwrap_or_default(),
            base_currency: account.currency.clone(),
            bank_id: account.bank_id.clone(),
            bank_id_code: account.bank_id_code.clone(),
            bic: account.bic.clone(),
            account_number: account.account_number.clone(),
            customer_id: account.customer_id.clone(),
            iban: account.iban.clone(),
            account_classification: account.classification,
            name: account.holder_names.clone(),
            alternative_names: if account.alternative_names.is_empty() {
                None
            } else {
                Some(account.alternative_names.clone())
            },
        }
    }
}
