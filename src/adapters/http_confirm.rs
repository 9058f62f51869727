use {
    crate::domain::{checkout::ConfirmRequest, endpoint::ConfirmEndpoint, error::ConfirmError},
    std::{future::Future, pin::Pin, time::Duration},
    url::Url,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Talks to the storefront backend's `/payment/confirm` endpoint.
///
/// Cookies are enabled so the session credential set during checkout rides
/// along with the confirm call.
pub struct HttpConfirm {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpConfirm {
    pub fn new(api_base: Url) -> Result<Self, ConfirmError> {
        let mut endpoint = api_base;
        endpoint
            .path_segments_mut()
            .map_err(|()| ConfirmError::Config("API base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["payment", "confirm"]);

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConfirmError::Config(format!("HTTP client: {e}")))?;

        Ok(Self { client, endpoint })
    }

    async fn confirm_inner(&self, request: ConfirmRequest) -> Result<(), ConfirmError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| ConfirmError::Endpoint(e.to_string()))?;

        // Any 2xx is success; the body is not consumed.
        response
            .error_for_status()
            .map_err(|e| ConfirmError::Endpoint(e.to_string()))?;
        Ok(())
    }
}

impl ConfirmEndpoint for HttpConfirm {
    fn confirm(
        &self,
        request: ConfirmRequest,
    ) -> Pin<Box<dyn Future<Output = Result<(), ConfirmError>> + Send + '_>> {
        Box::pin(self.confirm_inner(request))
    }
}
