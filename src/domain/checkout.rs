use {
    super::error::ConfirmError,
    derive_more::Display,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Payment method the buyer picked at checkout. Only the e-wallet redirect
/// methods need a confirmation call after the provider sends the buyer back;
/// everything else (cards, COD) settles inline and is deserialized as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Provider {
    Gcash,
    GrabPay,
    Other,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gcash => "gcash",
            Self::GrabPay => "grab_pay",
            Self::Other => "other",
        }
    }

    /// Whether this method leaves a payment source dangling after the
    /// provider redirect, i.e. whether we owe the gateway a confirm call.
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, Self::Gcash | Self::GrabPay)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Provider {
    fn from(s: &str) -> Self {
        match s {
            "gcash" => Self::Gcash,
            "grab_pay" => Self::GrabPay,
            _ => Self::Other,
        }
    }
}

impl From<String> for Provider {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Provider> for String {
    fn from(p: Provider) -> Self {
        p.as_str().to_string()
    }
}

/// Payment-source identifier issued by the provider (`src_xxx` at the gateway
/// we integrate with, but treated as opaque here).
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Result<Self, ConfirmError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfirmError::Validation(
                "SourceId cannot be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The record the checkout initiator leaves in the storage slot before
/// redirecting the buyer to the provider. Field names match the stored JSON.
///
/// `items`, `shipping_address`, `latitude` and `longitude` are opaque to this
/// flow; they are forwarded to the confirm endpoint exactly as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingCheckout {
    pub provider: Provider,
    #[serde(default)]
    pub source_id: Option<String>,
    #[serde(default)]
    pub items: serde_json::Value,
    #[serde(default)]
    pub shipping_address: serde_json::Value,
    #[serde(default)]
    pub latitude: serde_json::Value,
    #[serde(default)]
    pub longitude: serde_json::Value,
}

impl PendingCheckout {
    /// Build the confirm call for this checkout, if one is owed.
    ///
    /// Returns `None` when the provider settles inline or when no usable
    /// source id was stored. In both cases the record is simply discarded.
    pub fn confirm_request(&self) -> Option<ConfirmRequest> {
        if !self.provider.requires_confirmation() {
            return None;
        }
        let source_id = SourceId::new(self.source_id.clone()?).ok()?;
        Some(ConfirmRequest {
            source_id,
            items: self.items.clone(),
            shipping_address: self.shipping_address.clone(),
            latitude: self.latitude.clone(),
            longitude: self.longitude.clone(),
        })
    }
}

/// Body of `POST /payment/confirm`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmRequest {
    pub source_id: SourceId,
    pub items: serde_json::Value,
    pub shipping_address: serde_json::Value,
    pub latitude: serde_json::Value,
    pub longitude: serde_json::Value,
}
